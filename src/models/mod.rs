mod benchmark;
mod latency_log;
mod packet;
mod table;
mod tcp_response;

pub use benchmark::BenchmarkResults;
pub use latency_log::LatencyLog;
pub use packet::PacketLatencyRecord;
pub use table::{Column, ColumnData, LatencyTable};
pub use tcp_response::TcpResponseRecord;
