// 나노초를 마이크로초로 변환하기 위한 상수
pub const NANOS_PER_MICRO: f64 = 1000.0;

// 퍼센타일 스윕 기준값
pub const PERCENTILE_THRESHOLDS: [f64; 6] = [50.0, 75.0, 90.0, 95.0, 99.0, 99.9];

// 레이턴시 범위 분포 기본 경계값 (us)
pub const DEFAULT_LATENCY_RANGES_US: [f64; 8] = [1.0, 5.0, 10.0, 50.0, 100.0, 500.0, 1000.0, 5000.0];

// 벤치마크 차트 기본 출력 파일
pub const BENCHMARK_CHART_FILE: &str = "performance_chart_total_workload.png";

// 벤치마크 결과 기본 입력 파일
pub const BENCHMARK_RESULTS_FILE: &str = "benchmark_results.json";
