use crate::error::AnalysisResult;
use crate::models::{ColumnData, LatencyTable};
use csv::Writer;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Write every column of a table (source and derived) as CSV
pub fn write_table_csv<W: Write>(table: &LatencyTable, writer: W) -> AnalysisResult<()> {
    let mut writer = Writer::from_writer(writer);

    writer.write_record(table.column_names())?;

    for row in 0..table.len() {
        let record: Vec<String> = table
            .columns()
            .iter()
            .map(|column| match &column.data {
                ColumnData::Integer(values) => values[row].to_string(),
                ColumnData::Float(values) => values[row].to_string(),
            })
            .collect();
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

/// CSV export function for a normalized table
pub fn save_table_to_csv(table: &LatencyTable, path: &Path) -> AnalysisResult<()> {
    let file = File::create(path)?;
    write_table_csv(table, file)
}

/// Save both normalized tables next to `output_prefix`
pub fn save_to_csv(
    packets: &LatencyTable,
    responses: &LatencyTable,
    output_prefix: &Path,
) -> AnalysisResult<Vec<PathBuf>> {
    let prefix = output_prefix.display();
    let packet_path = PathBuf::from(format!("{prefix}_packet_latency.csv"));
    let response_path = PathBuf::from(format!("{prefix}_tcp_response_latency.csv"));

    save_table_to_csv(packets, &packet_path)?;
    save_table_to_csv(responses, &response_path)?;

    Ok(vec![packet_path, response_path])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_table_csv() {
        let mut table = LatencyTable::new("tcp response", 2);
        table
            .insert_column("target_parsed_to_tcp_sent_ns", ColumnData::Integer(vec![1500, 2000]))
            .unwrap();
        table
            .insert_column("target_parsed_to_tcp_sent_us", ColumnData::Float(vec![1.5, 2.0]))
            .unwrap();

        let mut buffer = Vec::new();
        write_table_csv(&table, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(
            output,
            "target_parsed_to_tcp_sent_ns,target_parsed_to_tcp_sent_us\n1500,1.5\n2000,2\n"
        );
    }
}
