pub mod config;
pub mod constants;
pub mod latency;
pub mod logger;

pub use self::config::{AnalysisConfig, ChartConfig};
pub use self::latency::{parse_latency_ranges, LatencyRanges};
pub use self::logger::Logger;
