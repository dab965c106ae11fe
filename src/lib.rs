pub mod error;
pub mod models;
pub mod output;
pub mod parsers;
pub mod processors;
pub mod utils;

// 주요 기능 재내보내기(re-exporting)
pub use error::{AnalysisError, AnalysisResult};
pub use models::{BenchmarkResults, LatencyLog, LatencyTable, PacketLatencyRecord, TcpResponseRecord};
pub use output::{describe, percentile, percentile_sweep, LatencyReport};
pub use parsers::LogLoader;
pub use processors::normalize_log;
