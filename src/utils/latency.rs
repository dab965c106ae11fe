//! 레이턴시 범위(버킷) 분포를 위한 유틸리티 모듈

use super::constants::DEFAULT_LATENCY_RANGES_US;

/// 오름차순 경계값으로 정의된 레이턴시 범위 (us)
///
/// 경계값이 n개이면 버킷은 n+1개: `≤ b0`, `b0 < v ≤ b1`, ..., `> b(n-1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct LatencyRanges {
    bounds: Vec<f64>,
}

impl Default for LatencyRanges {
    fn default() -> Self {
        Self {
            bounds: DEFAULT_LATENCY_RANGES_US.to_vec(),
        }
    }
}

impl LatencyRanges {
    pub fn new(bounds: Vec<f64>) -> Result<Self, String> {
        validate_bounds(&bounds)?;
        Ok(Self { bounds })
    }

    pub fn bounds(&self) -> &[f64] {
        &self.bounds
    }

    pub fn bucket_count(&self) -> usize {
        self.bounds.len() + 1
    }

    pub fn labels(&self) -> Vec<String> {
        let mut labels = Vec::with_capacity(self.bucket_count());
        if let Some(first) = self.bounds.first() {
            labels.push(format!("≤ {}us", first));
        }
        for pair in self.bounds.windows(2) {
            labels.push(format!("{}us < v ≤ {}us", pair[0], pair[1]));
        }
        if let Some(last) = self.bounds.last() {
            labels.push(format!("> {}us", last));
        }
        labels
    }

    /// 각 버킷에 속하는 값의 개수
    pub fn count(&self, values: &[f64]) -> Vec<usize> {
        let mut counts = vec![0; self.bucket_count()];
        for &value in values {
            // bounds가 오름차순이므로 value 이상인 첫 경계값의 위치가 버킷 인덱스
            let idx = self.bounds.partition_point(|&bound| bound < value);
            counts[idx] += 1;
        }
        counts
    }
}

/// 입력 문자열에서 쉼표(,)로 구분된 레이턴시 범위를 파싱
pub fn parse_latency_ranges(value_str: &str) -> Result<LatencyRanges, String> {
    let mut ranges = Vec::new();

    for val in value_str.split(',') {
        match val.trim().parse::<f64>() {
            Ok(v) if v >= 0.0 => ranges.push(v),
            Ok(_) => return Err("Latency range values must be non-negative".to_string()),
            Err(_) => return Err(format!("Invalid latency range value: {}", val)),
        }
    }

    LatencyRanges::new(ranges)
}

fn validate_bounds(bounds: &[f64]) -> Result<(), String> {
    if bounds.is_empty() {
        return Err("No valid latency range values provided".to_string());
    }

    // 값이 오름차순인지 확인
    for i in 1..bounds.len() {
        if bounds[i] <= bounds[i - 1] {
            return Err("Latency range values must be in ascending order".to_string());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_latency_ranges() {
        let ranges = parse_latency_ranges("0.5, 1,5").unwrap();
        assert_eq!(ranges.bounds(), &[0.5, 1.0, 5.0]);
        assert_eq!(
            ranges.labels(),
            vec!["≤ 0.5us", "0.5us < v ≤ 1us", "1us < v ≤ 5us", "> 5us"]
        );
    }

    #[test]
    fn test_parse_latency_ranges_errors() {
        assert!(parse_latency_ranges("5,1").is_err());
        assert!(parse_latency_ranges("1,1").is_err());
        assert!(parse_latency_ranges("-1,2").is_err());
        assert!(parse_latency_ranges("1,abc").is_err());
        assert!(parse_latency_ranges("").is_err());
    }

    #[test]
    fn test_count_buckets() {
        let ranges = LatencyRanges::new(vec![1.0, 10.0]).unwrap();
        let counts = ranges.count(&[0.0, 1.0, 1.5, 10.0, 10.01, 250.0]);
        assert_eq!(counts, vec![2, 2, 2]);
        assert_eq!(counts.iter().sum::<usize>(), 6);
    }
}
