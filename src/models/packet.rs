use super::LatencyLog;
use serde::{Deserialize, Serialize};

/// 클라이언트가 수신한 UDP 패킷 하나의 레이턴시 기록 (나노초)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PacketLatencyRecord {
    pub udp_arrival_to_queue_ns: i64,
    pub queue_duration_ns: i64,
    pub worker_processing_ns: i64,
}

impl PacketLatencyRecord {
    pub const UDP_ARRIVAL_TO_QUEUE_US: &'static str = "udp_arrival_to_queue_us";
    pub const QUEUE_DURATION_US: &'static str = "queue_duration_us";
    pub const WORKER_PROCESSING_US: &'static str = "worker_processing_us";

    const UNIT_CONVERSIONS: &'static [(&'static str, &'static str)] = &[
        ("udp_arrival_to_queue_ns", Self::UDP_ARRIVAL_TO_QUEUE_US),
        ("queue_duration_ns", Self::QUEUE_DURATION_US),
        ("worker_processing_ns", Self::WORKER_PROCESSING_US),
    ];
}

impl LatencyLog for PacketLatencyRecord {
    const TABLE_NAME: &'static str = "packet latency";
    const FILE_NAME: &'static str = "client_packet_latency_log.csv";

    fn source_columns() -> &'static [&'static str] {
        &[
            "udp_arrival_to_queue_ns",
            "queue_duration_ns",
            "worker_processing_ns",
        ]
    }

    fn unit_conversions() -> &'static [(&'static str, &'static str)] {
        Self::UNIT_CONVERSIONS
    }

    fn source_values(&self) -> Vec<i64> {
        vec![
            self.udp_arrival_to_queue_ns,
            self.queue_duration_ns,
            self.worker_processing_ns,
        ]
    }
}
