use challenge_latency::models::BenchmarkResults;
use challenge_latency::output::{draw_benchmark_chart, PlottersConfig};
use challenge_latency::utils::ChartConfig;
use challenge_latency::{log, log_error, AnalysisResult};
use std::process;

fn run() -> AnalysisResult<()> {
    let config = ChartConfig::from_env()?;
    let results = BenchmarkResults::from_file(&config.results_path)?;
    log!(
        "Loaded {} benchmark points from {}",
        results.len(),
        config.results_path.display()
    );

    draw_benchmark_chart(&results, &config.output_path, &PlottersConfig::default())?;
    log!("Chart saved as {}", config.output_path.display());
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        log_error!("Error: {}", e);
        process::exit(1);
    }
}
