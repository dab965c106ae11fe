use crate::error::{AnalysisError, AnalysisResult};
use crate::models::LatencyTable;
use std::fmt::Write;

/// 정렬된 값에서 선형 보간 퍼센타일 계산
///
/// 0-indexed 위치 `(N-1) * p / 100`의 값을 양옆 순서 통계량 사이에서 보간한다.
/// describe 요약과 퍼센타일 스윕 모두 이 함수를 사용한다.
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }

    let rank = (p / 100.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;

    if lower == upper {
        sorted[lower]
    } else {
        let weight = rank - lower as f64;
        sorted[lower] * (1.0 - weight) + sorted[upper] * weight
    }
}

// 통계 계산을 위한 헬퍼 구조체 (값은 정렬된 상태로 보관)
#[derive(Debug, Clone)]
pub struct LatencyStats {
    values: Vec<f64>,
    sum: f64,
    min: f64,
    max: f64,
}

impl LatencyStats {
    pub fn from_values(mut values: Vec<f64>) -> Self {
        values.sort_by(|a, b| a.total_cmp(b));
        let sum = values.iter().sum();
        let min = values.first().copied().unwrap_or(f64::NAN);
        let max = values.last().copied().unwrap_or(f64::NAN);
        Self {
            values,
            sum,
            min,
            max,
        }
    }

    pub fn count(&self) -> usize {
        self.values.len()
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn avg(&self) -> f64 {
        if self.values.is_empty() {
            f64::NAN
        } else {
            self.sum / self.values.len() as f64
        }
    }

    /// 표본 표준편차 (N-1)
    pub fn std_dev(&self) -> f64 {
        if self.values.len() <= 1 {
            return 0.0;
        }
        let avg = self.avg();
        let variance = self
            .values
            .iter()
            .map(|&v| {
                let diff = avg - v;
                diff * diff
            })
            .sum::<f64>()
            / (self.values.len() - 1) as f64;
        variance.sqrt()
    }

    pub fn percentile(&self, p: f64) -> f64 {
        percentile(&self.values, p)
    }

    pub fn sorted_values(&self) -> &[f64] {
        &self.values
    }
}

/// 컬럼 하나의 기술 통계
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub max: f64,
}

impl From<&LatencyStats> for ColumnSummary {
    fn from(stats: &LatencyStats) -> Self {
        Self {
            count: stats.count(),
            mean: stats.avg(),
            std: stats.std_dev(),
            min: stats.min(),
            p25: stats.percentile(25.0),
            p50: stats.percentile(50.0),
            p75: stats.percentile(75.0),
            max: stats.max(),
        }
    }
}

/// 테이블 컬럼의 통계. 값이 없으면 EmptyDataset으로 실패한다.
pub fn column_stats(table: &LatencyTable, column: &str) -> AnalysisResult<LatencyStats> {
    let values = table.f64_values(column)?;
    if values.is_empty() {
        return Err(AnalysisError::EmptyDataset {
            table: table.name().to_string(),
            column: column.to_string(),
        });
    }
    Ok(LatencyStats::from_values(values))
}

pub fn describe(
    table: &LatencyTable,
    columns: &[&str],
) -> AnalysisResult<Vec<(String, ColumnSummary)>> {
    columns
        .iter()
        .map(|&column| {
            let stats = column_stats(table, column)?;
            Ok((column.to_string(), ColumnSummary::from(&stats)))
        })
        .collect()
}

/// describe 결과를 탭으로 구분된 표로 출력
pub fn render_describe(summaries: &[(String, ColumnSummary)]) -> String {
    let mut out = String::new();

    out.push_str("Stat");
    for (name, _) in summaries {
        let _ = write!(out, "\t{}", name);
    }
    out.push('\n');

    out.push_str("count");
    for (_, summary) in summaries {
        let _ = write!(out, "\t{}", summary.count);
    }
    out.push('\n');

    let rows: [(&str, fn(&ColumnSummary) -> f64); 7] = [
        ("mean", |s| s.mean),
        ("std", |s| s.std),
        ("min", |s| s.min),
        ("25%", |s| s.p25),
        ("50%", |s| s.p50),
        ("75%", |s| s.p75),
        ("max", |s| s.max),
    ];
    for (label, value_fn) in rows {
        out.push_str(label);
        for (_, summary) in summaries {
            let _ = write!(out, "\t{:.3}", value_fn(summary));
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ColumnData;
    use rand::Rng;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
    }

    #[test]
    fn test_percentile_interpolation() {
        let sorted: Vec<f64> = (1..=10).map(|v| v as f64).collect();
        assert_close(percentile(&sorted, 50.0), 5.5);
        assert_close(percentile(&sorted, 0.0), 1.0);
        assert_close(percentile(&sorted, 100.0), 10.0);
        assert_close(percentile(&sorted, 25.0), 3.25);
        assert_close(percentile(&sorted, 99.9), 9.991);
        assert_close(percentile(&[42.0], 99.0), 42.0);
        assert!(percentile(&[], 50.0).is_nan());
    }

    #[test]
    fn test_median_matches_sorted_middle() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let len = rng.random_range(1..60);
            let mut values: Vec<f64> = (0..len).map(|_| rng.random_range(0.0..1e6)).collect();
            values.sort_by(|a, b| a.total_cmp(b));

            let mid = values.len() / 2;
            let median = if values.len() % 2 == 0 {
                (values[mid - 1] + values[mid]) / 2.0
            } else {
                values[mid]
            };
            assert!((percentile(&values, 50.0) - median).abs() <= 1e-9 * median.max(1.0));
        }
    }

    #[test]
    fn test_latency_stats() {
        let stats = LatencyStats::from_values(vec![4.0, 2.0, 8.0, 6.0]);
        assert_eq!(stats.count(), 4);
        assert_close(stats.avg(), 5.0);
        assert_close(stats.min(), 2.0);
        assert_close(stats.max(), 8.0);
        // 표본 분산 = 20 / 3
        assert_close(stats.std_dev(), (20.0f64 / 3.0).sqrt());
        assert_eq!(stats.sorted_values(), &[2.0, 4.0, 6.0, 8.0]);

        let single = LatencyStats::from_values(vec![3.0]);
        assert_close(single.std_dev(), 0.0);
    }

    #[test]
    fn test_describe_uses_same_percentiles() {
        let mut table = LatencyTable::new("packet latency", 5);
        table
            .insert_column("queue_duration_us", ColumnData::Float(vec![5.0, 1.0, 3.0, 2.0, 4.0]))
            .unwrap();

        let summaries = describe(&table, &["queue_duration_us"]).unwrap();
        let (name, summary) = &summaries[0];
        assert_eq!(name, "queue_duration_us");
        assert_eq!(summary.count, 5);
        assert_close(summary.mean, 3.0);
        assert_close(summary.min, 1.0);
        assert_close(summary.p25, 2.0);
        assert_close(summary.p50, 3.0);
        assert_close(summary.p75, 4.0);
        assert_close(summary.max, 5.0);

        let stats = column_stats(&table, "queue_duration_us").unwrap();
        assert_close(summary.p75, stats.percentile(75.0));
    }

    #[test]
    fn test_describe_empty_column_fails() {
        let mut table = LatencyTable::new("tcp response", 0);
        table
            .insert_column("target_parsed_to_tcp_sent_us", ColumnData::Float(vec![]))
            .unwrap();
        assert!(matches!(
            describe(&table, &["target_parsed_to_tcp_sent_us"]),
            Err(AnalysisError::EmptyDataset { .. })
        ));
    }

    #[test]
    fn test_describe_unknown_column() {
        let table = LatencyTable::new("tcp response", 0);
        assert!(matches!(
            describe(&table, &["nope"]),
            Err(AnalysisError::UnknownColumn { .. })
        ));
    }

    #[test]
    fn test_render_describe() {
        let stats = LatencyStats::from_values(vec![1.0, 2.0, 3.0]);
        let rendered = render_describe(&[("worker_processing_us".to_string(), ColumnSummary::from(&stats))]);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Stat\tworker_processing_us");
        assert_eq!(lines[1], "count\t3");
        assert_eq!(lines[2], "mean\t2.000");
        assert_eq!(lines[5], "25%\t1.500");
        assert_eq!(lines.len(), 9);
    }
}
