use super::percentiles::{metric_stats, LatencyMetric, PercentileSweep, ThroughputSummary};
use super::statistics::{describe, render_describe, ColumnSummary};
use crate::error::AnalysisResult;
use crate::models::{LatencyTable, PacketLatencyRecord, TcpResponseRecord};
use crate::utils::LatencyRanges;
use std::fmt::Write;

/// 지표별 레이턴시 범위 분포
#[derive(Debug, Clone, PartialEq)]
pub struct RangeDistribution {
    pub labels: Vec<String>,
    pub counts: Vec<(LatencyMetric, Vec<usize>)>,
}

impl RangeDistribution {
    pub fn render(&self) -> String {
        let mut out = String::from("Range");
        for (metric, _) in &self.counts {
            let _ = write!(out, "\t{}", metric.display_name());
        }
        out.push('\n');

        for (idx, label) in self.labels.iter().enumerate() {
            out.push_str(label);
            for (_, counts) in &self.counts {
                let _ = write!(out, "\t{}", counts[idx]);
            }
            out.push('\n');
        }
        out
    }
}

/// 한 번의 실행에서 출력할 모든 결과
///
/// 모든 계산이 끝난 뒤에만 만들어지므로 실패 시 부분 출력이 없다.
#[derive(Debug, Clone)]
pub struct LatencyReport {
    pub packet_summary: Vec<(String, ColumnSummary)>,
    pub tcp_summary: Vec<(String, ColumnSummary)>,
    pub throughput: ThroughputSummary,
    pub sweep: PercentileSweep,
    pub distribution: RangeDistribution,
}

impl LatencyReport {
    pub fn build(
        packets: &LatencyTable,
        responses: &LatencyTable,
        ranges: &LatencyRanges,
    ) -> AnalysisResult<Self> {
        let packet_summary = describe(
            packets,
            &[
                PacketLatencyRecord::UDP_ARRIVAL_TO_QUEUE_US,
                PacketLatencyRecord::QUEUE_DURATION_US,
                PacketLatencyRecord::WORKER_PROCESSING_US,
            ],
        )?;
        let tcp_summary = describe(responses, &[TcpResponseRecord::TARGET_PARSED_TO_TCP_SENT_US])?;
        let throughput = ThroughputSummary::new(packets, responses)?;

        let stats = metric_stats(packets, responses)?;
        let sweep = PercentileSweep::from_stats(&stats);
        let distribution = RangeDistribution {
            labels: ranges.labels(),
            counts: stats
                .iter()
                .map(|(metric, s)| (*metric, ranges.count(s.sorted_values())))
                .collect(),
        };

        Ok(Self {
            packet_summary,
            tcp_summary,
            throughput,
            sweep,
            distribution,
        })
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("\n=== Packet Latency Statistics (microseconds) ===\n");
        out.push_str(&render_describe(&self.packet_summary));
        out.push_str("\n=== TCP Response Statistics (microseconds) ===\n");
        out.push_str(&render_describe(&self.tcp_summary));
        out.push_str("\n=== Performance Metrics ===\n");
        out.push_str(&self.throughput.render());
        out.push_str("\n=== Key Percentiles (microseconds) ===");
        out.push_str(&self.sweep.render());
        out.push_str("\n=== Latency Range Distribution (microseconds) ===\n");
        out.push_str(&self.distribution.render());
        out
    }
}
