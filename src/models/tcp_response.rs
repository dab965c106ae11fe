use super::LatencyLog;
use serde::{Deserialize, Serialize};

/// 챌린지 하나에 대한 TCP 응답 레이턴시 기록 (나노초)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TcpResponseRecord {
    pub target_parsed_to_tcp_sent_ns: i64,
}

impl TcpResponseRecord {
    pub const TARGET_PARSED_TO_TCP_SENT_US: &'static str = "target_parsed_to_tcp_sent_us";

    const UNIT_CONVERSIONS: &'static [(&'static str, &'static str)] = &[(
        "target_parsed_to_tcp_sent_ns",
        Self::TARGET_PARSED_TO_TCP_SENT_US,
    )];
}

impl LatencyLog for TcpResponseRecord {
    const TABLE_NAME: &'static str = "TCP response";
    const FILE_NAME: &'static str = "client_tcp_response_latency_log.csv";

    fn source_columns() -> &'static [&'static str] {
        &["target_parsed_to_tcp_sent_ns"]
    }

    fn unit_conversions() -> &'static [(&'static str, &'static str)] {
        Self::UNIT_CONVERSIONS
    }

    fn source_values(&self) -> Vec<i64> {
        vec![self.target_parsed_to_tcp_sent_ns]
    }
}
