use crate::error::{AnalysisError, AnalysisResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 수동으로 정리한 오더북 벤치마크 결과
///
/// 세 시리즈는 같은 인덱스끼리 대응한다 (주문 수, 기존 구현 시간, 최적화 구현 시간).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BenchmarkResults {
    pub order_sizes: Vec<u64>,
    pub baseline_seconds: Vec<f64>,
    pub optimized_seconds: Vec<f64>,
}

impl BenchmarkResults {
    pub fn from_json_str(content: &str) -> AnalysisResult<Self> {
        let results: BenchmarkResults = serde_json::from_str(content)?;
        results.validate()?;
        Ok(results)
    }

    pub fn from_file(path: &Path) -> AnalysisResult<Self> {
        if !path.exists() {
            return Err(AnalysisError::MissingFile(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// 길이가 모두 같고 비어있지 않아야 한다
    pub fn validate(&self) -> AnalysisResult<()> {
        let sizes = self.order_sizes.len();
        let baseline = self.baseline_seconds.len();
        let optimized = self.optimized_seconds.len();

        if sizes != baseline || sizes != optimized {
            return Err(AnalysisError::LengthMismatch {
                sizes,
                baseline,
                optimized,
            });
        }
        if sizes == 0 {
            return Err(AnalysisError::EmptyDataset {
                table: "benchmark results".to_string(),
                column: "order_sizes".to_string(),
            });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.order_sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order_sizes.is_empty()
    }

    /// (주문 수, 기존, 최적화) 순서로 순회
    pub fn points(&self) -> impl Iterator<Item = (u64, f64, f64)> + '_ {
        self.order_sizes
            .iter()
            .zip(&self.baseline_seconds)
            .zip(&self.optimized_seconds)
            .map(|((&size, &baseline), &optimized)| (size, baseline, optimized))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_benchmark_results() {
        let json = r#"{
            "order_sizes": [1000, 5000, 10000],
            "baseline_seconds": [0.00147, 0.00876, 0.01325],
            "optimized_seconds": [0.00221, 0.00769, 0.01097]
        }"#;
        let results = BenchmarkResults::from_json_str(json).unwrap();
        assert_eq!(results.len(), 3);

        let points: Vec<_> = results.points().collect();
        assert_eq!(points[1], (5000, 0.00876, 0.00769));
    }

    #[test]
    fn test_length_mismatch() {
        let json = r#"{
            "order_sizes": [1000, 5000],
            "baseline_seconds": [0.1],
            "optimized_seconds": [0.1, 0.2]
        }"#;
        match BenchmarkResults::from_json_str(json) {
            Err(AnalysisError::LengthMismatch {
                sizes,
                baseline,
                optimized,
            }) => {
                assert_eq!((sizes, baseline, optimized), (2, 1, 2));
            }
            other => panic!("Expected LengthMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_series() {
        let json = r#"{"order_sizes": [], "baseline_seconds": [], "optimized_seconds": []}"#;
        assert!(matches!(
            BenchmarkResults::from_json_str(json),
            Err(AnalysisError::EmptyDataset { .. })
        ));
    }

    #[test]
    fn test_non_numeric_value() {
        let json = r#"{"order_sizes": ["a"], "baseline_seconds": [1.0], "optimized_seconds": [1.0]}"#;
        assert!(matches!(
            BenchmarkResults::from_json_str(json),
            Err(AnalysisError::SerdeError(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let path = Path::new("/nonexistent/benchmark_results.json");
        assert!(matches!(
            BenchmarkResults::from_file(path),
            Err(AnalysisError::MissingFile(_))
        ));
    }
}
