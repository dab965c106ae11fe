pub mod csv;
pub mod percentiles;
pub mod plotters_charts;
pub mod report;
pub mod statistics;

pub use self::csv::save_to_csv;
pub use percentiles::{percentile_sweep, LatencyMetric, PercentileSweep, ThroughputSummary};
pub use plotters_charts::{draw_benchmark_chart, PlottersConfig};
pub use report::LatencyReport;
pub use statistics::{describe, percentile, ColumnSummary, LatencyStats};
