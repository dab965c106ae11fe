//! 실행 설정
//!
//! 커맨드라인 인자는 없고, 기본값은 실행 파일이 있는 디렉토리를 기준으로 한다.
//! 환경 변수로 각 값을 덮어쓸 수 있다.

use super::constants::{BENCHMARK_CHART_FILE, BENCHMARK_RESULTS_FILE};
use super::latency::{parse_latency_ranges, LatencyRanges};
use crate::error::{AnalysisError, AnalysisResult};
use crate::models::{LatencyLog, PacketLatencyRecord, TcpResponseRecord};
use std::env;
use std::path::PathBuf;

pub const DATA_DIR_ENV: &str = "LATENCY_DATA_DIR";
pub const PACKET_LOG_ENV: &str = "LATENCY_PACKET_LOG";
pub const TCP_RESPONSE_LOG_ENV: &str = "LATENCY_TCP_LOG";
pub const EXPORT_PREFIX_ENV: &str = "LATENCY_EXPORT_PREFIX";
pub const REPORT_LOG_ENV: &str = "LATENCY_REPORT_LOG";
pub const LATENCY_RANGES_ENV: &str = "LATENCY_RANGES_US";
pub const BENCHMARK_RESULTS_ENV: &str = "BENCHMARK_RESULTS";
pub const BENCHMARK_CHART_ENV: &str = "BENCHMARK_CHART";

/// 레이턴시 리포트 설정
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub data_dir: PathBuf,
    pub packet_log_file: String,
    pub tcp_response_log_file: String,
    pub export_prefix: Option<PathBuf>,
    pub report_log: Option<PathBuf>,
    pub latency_ranges: LatencyRanges,
}

impl AnalysisConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            packet_log_file: PacketLatencyRecord::FILE_NAME.to_string(),
            tcp_response_log_file: TcpResponseRecord::FILE_NAME.to_string(),
            export_prefix: None,
            report_log: None,
            latency_ranges: LatencyRanges::default(),
        }
    }

    pub fn from_env() -> AnalysisResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AnalysisResult<Self> {
        let data_dir = match lookup(DATA_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => program_dir()?,
        };

        let mut config = Self::new(data_dir);
        if let Some(name) = lookup(PACKET_LOG_ENV) {
            config.packet_log_file = name;
        }
        if let Some(name) = lookup(TCP_RESPONSE_LOG_ENV) {
            config.tcp_response_log_file = name;
        }
        config.export_prefix = lookup(EXPORT_PREFIX_ENV).map(PathBuf::from);
        config.report_log = lookup(REPORT_LOG_ENV).map(PathBuf::from);
        if let Some(ranges) = lookup(LATENCY_RANGES_ENV) {
            config.latency_ranges = parse_latency_ranges(&ranges)
                .map_err(|e| AnalysisError::InvalidConfig(format!("{LATENCY_RANGES_ENV}: {e}")))?;
        }

        Ok(config)
    }

    pub fn packet_log_path(&self) -> PathBuf {
        self.data_dir.join(&self.packet_log_file)
    }

    pub fn tcp_response_log_path(&self) -> PathBuf {
        self.data_dir.join(&self.tcp_response_log_file)
    }
}

/// 벤치마크 차트 설정
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub results_path: PathBuf,
    pub output_path: PathBuf,
}

impl ChartConfig {
    pub fn from_env() -> AnalysisResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AnalysisResult<Self> {
        let results_path = match lookup(BENCHMARK_RESULTS_ENV) {
            Some(path) => PathBuf::from(path),
            None => program_dir()?.join(BENCHMARK_RESULTS_FILE),
        };
        let output_path = lookup(BENCHMARK_CHART_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(BENCHMARK_CHART_FILE));

        Ok(Self {
            results_path,
            output_path,
        })
    }
}

/// 실행 파일이 있는 디렉토리
pub fn program_dir() -> AnalysisResult<PathBuf> {
    let exe = env::current_exe()?;
    exe.parent().map(|dir| dir.to_path_buf()).ok_or_else(|| {
        AnalysisError::InvalidConfig(format!(
            "cannot resolve directory of {}",
            exe.display()
        ))
    })
}
