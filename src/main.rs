use challenge_latency::models::{PacketLatencyRecord, TcpResponseRecord};
use challenge_latency::output::{save_to_csv, LatencyReport};
use challenge_latency::parsers::LogLoader;
use challenge_latency::processors::normalize_log;
use challenge_latency::utils::{AnalysisConfig, Logger};
use challenge_latency::{log, log_error, AnalysisResult};
use std::process;

fn run(config: &AnalysisConfig) -> AnalysisResult<()> {
    let loader = LogLoader::new(&config.data_dir);

    let mut packets = loader.load_named::<PacketLatencyRecord>(&config.packet_log_file)?;
    let mut responses = loader.load_named::<TcpResponseRecord>(&config.tcp_response_log_file)?;

    // ns -> us 변환 컬럼 추가
    normalize_log::<PacketLatencyRecord>(&mut packets)?;
    normalize_log::<TcpResponseRecord>(&mut responses)?;

    let report = LatencyReport::build(&packets, &responses, &config.latency_ranges)?;
    log!("{}", report.render());

    if let Some(prefix) = &config.export_prefix {
        for path in save_to_csv(&packets, &responses, prefix)? {
            log!("Normalized data saved: {}", path.display());
        }
    }

    Ok(())
}

fn main() {
    let config = match AnalysisConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log_error!("Error: {}", e);
            process::exit(1);
        }
    };

    if let Some(log_path) = &config.report_log {
        Logger::init(log_path);
    }

    let result = run(&config);
    if let Err(e) = Logger::flush() {
        eprintln!("Failed to flush report log: {e}");
    }

    if let Err(e) = result {
        log_error!("Error: {}", e);
        let _ = Logger::flush();
        process::exit(1);
    }
}
