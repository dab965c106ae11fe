use super::statistics::{column_stats, LatencyStats};
use crate::error::{AnalysisError, AnalysisResult};
use crate::models::{LatencyLog, LatencyTable, PacketLatencyRecord, TcpResponseRecord};
use crate::utils::constants::PERCENTILE_THRESHOLDS;
use std::fmt::Write;

/// 스윕 대상 지표 (표시 이름, 테이블 선택, 컬럼)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LatencyMetric {
    UdpArrivalToQueue,
    QueueDuration,
    WorkerProcessing,
    TcpResponse,
}

impl LatencyMetric {
    pub const ALL: [LatencyMetric; 4] = [
        LatencyMetric::UdpArrivalToQueue,
        LatencyMetric::QueueDuration,
        LatencyMetric::WorkerProcessing,
        LatencyMetric::TcpResponse,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            LatencyMetric::UdpArrivalToQueue => "UDP arrival to queue",
            LatencyMetric::QueueDuration => "Queue duration",
            LatencyMetric::WorkerProcessing => "Worker processing",
            LatencyMetric::TcpResponse => "TCP response",
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            LatencyMetric::UdpArrivalToQueue => PacketLatencyRecord::UDP_ARRIVAL_TO_QUEUE_US,
            LatencyMetric::QueueDuration => PacketLatencyRecord::QUEUE_DURATION_US,
            LatencyMetric::WorkerProcessing => PacketLatencyRecord::WORKER_PROCESSING_US,
            LatencyMetric::TcpResponse => TcpResponseRecord::TARGET_PARSED_TO_TCP_SENT_US,
        }
    }

    fn table<'a>(&self, packets: &'a LatencyTable, responses: &'a LatencyTable) -> &'a LatencyTable {
        match self {
            LatencyMetric::TcpResponse => responses,
            _ => packets,
        }
    }
}

/// 지표별 정렬된 값 (스윕과 범위 분포가 공유)
pub fn metric_stats(
    packets: &LatencyTable,
    responses: &LatencyTable,
) -> AnalysisResult<Vec<(LatencyMetric, LatencyStats)>> {
    LatencyMetric::ALL
        .iter()
        .map(|&metric| {
            let stats = column_stats(metric.table(packets, responses), metric.column())?;
            Ok((metric, stats))
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct PercentileRow {
    pub threshold: f64,
    pub values: Vec<(LatencyMetric, f64)>,
}

/// 기준값 순서(바깥), 지표 순서(안쪽)로 정리된 퍼센타일 결과
#[derive(Debug, Clone, PartialEq)]
pub struct PercentileSweep {
    pub rows: Vec<PercentileRow>,
}

impl PercentileSweep {
    pub fn from_stats(stats: &[(LatencyMetric, LatencyStats)]) -> Self {
        let rows = PERCENTILE_THRESHOLDS
            .iter()
            .map(|&threshold| PercentileRow {
                threshold,
                values: stats
                    .iter()
                    .map(|(metric, s)| (*metric, s.percentile(threshold)))
                    .collect(),
            })
            .collect();
        Self { rows }
    }

    pub fn value(&self, threshold: f64, metric: LatencyMetric) -> Option<f64> {
        self.rows
            .iter()
            .find(|row| row.threshold == threshold)?
            .values
            .iter()
            .find(|(m, _)| *m == metric)
            .map(|(_, v)| *v)
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            let _ = writeln!(out, "\n{}th percentile:", row.threshold);
            for (metric, value) in &row.values {
                let _ = writeln!(out, "{}: {:.2}", metric.display_name(), value);
            }
        }
        out
    }
}

pub fn percentile_sweep(
    packets: &LatencyTable,
    responses: &LatencyTable,
) -> AnalysisResult<PercentileSweep> {
    let stats = metric_stats(packets, responses)?;
    Ok(PercentileSweep::from_stats(&stats))
}

/// 전체 데이터 기준 처리량 요약
#[derive(Debug, Clone, PartialEq)]
pub struct ThroughputSummary {
    pub total_packets: usize,
    pub total_challenges: usize,
    pub packets_per_challenge: f64,
}

impl ThroughputSummary {
    pub fn new(packets: &LatencyTable, responses: &LatencyTable) -> AnalysisResult<Self> {
        Ok(Self {
            total_packets: packets.len(),
            total_challenges: responses.len(),
            packets_per_challenge: packets_per_challenge(packets.len(), responses.len())?,
        })
    }

    pub fn render(&self) -> String {
        format!(
            "Total packets processed: {}\nTotal challenges responded to: {}\nAverage packets per challenge: {:.2}\n",
            self.total_packets, self.total_challenges, self.packets_per_challenge
        )
    }
}

pub fn packets_per_challenge(packets: usize, challenges: usize) -> AnalysisResult<f64> {
    if challenges == 0 {
        return Err(AnalysisError::EmptyDataset {
            table: TcpResponseRecord::TABLE_NAME.to_string(),
            column: "target_parsed_to_tcp_sent_ns".to_string(),
        });
    }
    Ok(packets as f64 / challenges as f64)
}
