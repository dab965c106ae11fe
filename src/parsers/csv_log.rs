use crate::error::{AnalysisError, AnalysisResult};
use crate::log;
use crate::models::{ColumnData, LatencyLog, LatencyTable};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// 레이턴시 CSV 로그 로더
///
/// 데이터 디렉토리는 생성 시점에 명시적으로 받는다.
#[derive(Debug, Clone)]
pub struct LogLoader {
    data_dir: PathBuf,
}

impl LogLoader {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// 데이터 디렉토리에서 T::FILE_NAME 파일을 읽는다
    pub fn load<T: LatencyLog>(&self) -> AnalysisResult<LatencyTable> {
        self.load_named::<T>(T::FILE_NAME)
    }

    pub fn load_named<T: LatencyLog>(&self, file_name: &str) -> AnalysisResult<LatencyTable> {
        self.load_file::<T>(&self.data_dir.join(file_name))
    }

    pub fn load_file<T: LatencyLog>(&self, path: &Path) -> AnalysisResult<LatencyTable> {
        let start = Instant::now();
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => AnalysisError::MissingFile(path.to_path_buf()),
            _ => AnalysisError::IoError(e),
        })?;

        let table = load_from_reader::<T, _>(file, &path.display().to_string())?;
        log!(
            "Loaded {} rows from {} ({:.3}s)",
            table.len(),
            path.display(),
            start.elapsed().as_secs_f64()
        );
        Ok(table)
    }
}

/// 헤더가 있는 CSV를 읽어 스키마 컬럼만 테이블로 만든다
///
/// 스키마에 없는 컬럼은 무시하고, 스키마 컬럼이 헤더에 없으면 바로 실패한다.
pub fn load_from_reader<T: LatencyLog, R: Read>(
    reader: R,
    source_name: &str,
) -> AnalysisResult<LatencyTable> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| malformed(source_name, &e))?
        .clone();
    validate_header::<T>(&headers, source_name)?;

    let schema = T::source_columns();
    let mut values: Vec<Vec<i64>> = vec![Vec::new(); schema.len()];

    for result in csv_reader.deserialize::<T>() {
        let record = result.map_err(|e| malformed(source_name, &e))?;
        for (column, value) in values.iter_mut().zip(record.source_values()) {
            column.push(value);
        }
    }

    let row_count = values.first().map(Vec::len).unwrap_or(0);
    let mut table = LatencyTable::new(T::TABLE_NAME, row_count);
    for (name, column) in schema.iter().zip(values) {
        table.insert_column(name, ColumnData::Integer(column))?;
    }

    Ok(table)
}

fn validate_header<T: LatencyLog>(headers: &StringRecord, source_name: &str) -> AnalysisResult<()> {
    let missing: Vec<&str> = T::source_columns()
        .iter()
        .copied()
        .filter(|column| !headers.iter().any(|h| h == *column))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AnalysisError::MalformedInput {
            source_name: source_name.to_string(),
            line: 1,
            reason: format!("header is missing column(s): {}", missing.join(", ")),
        })
    }
}

fn malformed(source_name: &str, error: &csv::Error) -> AnalysisError {
    let line = error.position().map(|p| p.line()).unwrap_or(0);
    let reason = match error.kind() {
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => format!("expected {expected_len} fields but found {len}"),
        csv::ErrorKind::Deserialize { err, .. } => format!("invalid value: {err}"),
        _ => error.to_string(),
    };
    AnalysisError::MalformedInput {
        source_name: source_name.to_string(),
        line,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PacketLatencyRecord, TcpResponseRecord};

    const PACKET_CSV: &str = "\
udp_arrival_to_queue_ns,queue_duration_ns,worker_processing_ns
1200,3400,5600
800,1000,2000
1500,2500,3500
";

    #[test]
    fn test_load_packet_log() {
        let table =
            load_from_reader::<PacketLatencyRecord, _>(PACKET_CSV.as_bytes(), "packets").unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(
            table.column("queue_duration_ns").unwrap(),
            &ColumnData::Integer(vec![3400, 1000, 2500])
        );
        assert_eq!(
            table.column_names(),
            vec!["udp_arrival_to_queue_ns", "queue_duration_ns", "worker_processing_ns"]
        );
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let csv = "timestamp,target_parsed_to_tcp_sent_ns,challenge_id\n1,4200,7\n2,3900,8\n";
        let table = load_from_reader::<TcpResponseRecord, _>(csv.as_bytes(), "tcp").unwrap();
        assert_eq!(table.len(), 2);
        assert!(!table.has_column("challenge_id"));
        assert_eq!(
            table.column("target_parsed_to_tcp_sent_ns").unwrap(),
            &ColumnData::Integer(vec![4200, 3900])
        );
    }

    #[test]
    fn test_header_only_file() {
        let csv = "target_parsed_to_tcp_sent_ns\n";
        let table = load_from_reader::<TcpResponseRecord, _>(csv.as_bytes(), "tcp").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.column("target_parsed_to_tcp_sent_ns").unwrap().len(), 0);
    }

    #[test]
    fn test_short_row_is_malformed() {
        let csv = "udp_arrival_to_queue_ns,queue_duration_ns,worker_processing_ns\n1,2,3\n4,5\n";
        match load_from_reader::<PacketLatencyRecord, _>(csv.as_bytes(), "packets") {
            Err(AnalysisError::MalformedInput { line, .. }) => assert_eq!(line, 3),
            other => panic!("Expected MalformedInput, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_value_is_malformed() {
        let csv = "target_parsed_to_tcp_sent_ns\n100\nfast\n";
        assert!(matches!(
            load_from_reader::<TcpResponseRecord, _>(csv.as_bytes(), "tcp"),
            Err(AnalysisError::MalformedInput { .. })
        ));
    }

    #[test]
    fn test_missing_schema_column() {
        let csv = "udp_arrival_to_queue_ns,queue_duration_ns\n1,2\n";
        match load_from_reader::<PacketLatencyRecord, _>(csv.as_bytes(), "packets") {
            Err(AnalysisError::MalformedInput { line, reason, .. }) => {
                assert_eq!(line, 1);
                assert!(reason.contains("worker_processing_ns"));
            }
            other => panic!("Expected MalformedInput, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        let loader = LogLoader::new("/nonexistent/latency/dir");
        assert!(matches!(
            loader.load::<PacketLatencyRecord>(),
            Err(AnalysisError::MissingFile(_))
        ));
    }
}
