use crate::error::{AnalysisError, AnalysisResult};
use crate::models::BenchmarkResults;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::path::Path;

/// Plotters 차트 생성을 위한 공통 구조체
pub struct PlottersConfig {
    pub width: u32,
    pub height: u32,
    pub font_family: &'static str,
    pub title_font_size: u32,
    pub axis_label_font_size: u32,
    pub tick_label_font_size: u32,
    pub point_size: u32,
    pub annotation_font_size: u32,
}

impl Default for PlottersConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            font_family: "sans-serif",
            title_font_size: 24,
            axis_label_font_size: 18,
            tick_label_font_size: 14,
            point_size: 4,
            annotation_font_size: 12,
        }
    }
}

const BASELINE_COLOR: RGBColor = RGBColor(220, 20, 60); // 빨간색 계열
const OPTIMIZED_COLOR: RGBColor = RGBColor(65, 105, 225); // 파란색 계열

/// 로그 축용 범위 (양쪽으로 여유를 둔다)
pub fn log_axis_range(min: f64, max: f64) -> (f64, f64) {
    (min / 1.5, max * 1.5)
}

/// 기존/최적화 오더북 총 실행 시간 비교 차트를 PNG로 저장
pub fn draw_benchmark_chart(
    results: &BenchmarkResults,
    output_path: &Path,
    config: &PlottersConfig,
) -> AnalysisResult<()> {
    results.validate()?;

    let baseline: Vec<(f64, f64)> = results
        .points()
        .map(|(size, baseline, _)| (size as f64, baseline))
        .collect();
    let optimized: Vec<(f64, f64)> = results
        .points()
        .map(|(size, _, optimized)| (size as f64, optimized))
        .collect();

    let all_points = baseline.iter().chain(optimized.iter());
    if all_points.clone().any(|&(x, y)| x <= 0.0 || y <= 0.0) {
        return Err(AnalysisError::InvalidConfig(
            "log-scale chart requires positive order sizes and times".to_string(),
        ));
    }

    let (min_x, max_x) = all_points
        .clone()
        .fold((f64::MAX, f64::MIN), |(lo, hi), &(x, _)| (lo.min(x), hi.max(x)));
    let (min_y, max_y) = all_points
        .fold((f64::MAX, f64::MIN), |(lo, hi), &(_, y)| (lo.min(y), hi.max(y)));
    let (min_x, max_x) = log_axis_range(min_x, max_x);
    let (min_y, max_y) = log_axis_range(min_y, max_y);

    let root = BitMapBackend::new(output_path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "HFT Order Book Performance Comparison (Total Workload)",
            (config.font_family, config.title_font_size).into_font(),
        )
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d((min_x..max_x).log_scale(), (min_y..max_y).log_scale())
        .map_err(chart_error)?;

    chart
        .configure_mesh()
        .x_desc("Number of Orders (Add + Modify + Delete sequence)")
        .y_desc("Total Execution Time (seconds)")
        .axis_desc_style((config.font_family, config.axis_label_font_size))
        .label_style((config.font_family, config.tick_label_font_size))
        .draw()
        .map_err(chart_error)?;

    // 기존 구현: 실선 + 원형 마커
    chart
        .draw_series(LineSeries::new(baseline.clone(), BASELINE_COLOR.stroke_width(2)))
        .map_err(chart_error)?
        .label("Original OrderBook (Total Time)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BASELINE_COLOR.stroke_width(2)));
    chart
        .draw_series(
            baseline
                .iter()
                .map(|&p| Circle::new(p, config.point_size, BASELINE_COLOR.filled())),
        )
        .map_err(chart_error)?;

    // 최적화 구현: 점선 + 사각형 마커
    chart
        .draw_series(DashedLineSeries::new(
            optimized.clone(),
            8,
            4,
            OPTIMIZED_COLOR.stroke_width(2),
        ))
        .map_err(chart_error)?
        .label("Optimized OrderBook (Total Time)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], OPTIMIZED_COLOR.stroke_width(2)));
    let half = config.point_size as i32;
    chart
        .draw_series(optimized.iter().map(|&p| {
            EmptyElement::at(p)
                + Rectangle::new([(-half, -half), (half, half)], OPTIMIZED_COLOR.filled())
        }))
        .map_err(chart_error)?;

    // 각 점에 실행 시간 표시 (기존은 위, 최적화는 아래)
    let annotation = |color: &'static RGBColor| {
        TextStyle::from((config.font_family, config.annotation_font_size).into_font()).color(color)
    };
    chart
        .draw_series(baseline.iter().map(|&(x, y)| {
            EmptyElement::at((x, y))
                + Text::new(format!("{:.3}s", y), (-12, -18), annotation(&BASELINE_COLOR))
        }))
        .map_err(chart_error)?;
    chart
        .draw_series(optimized.iter().map(|&(x, y)| {
            EmptyElement::at((x, y))
                + Text::new(format!("{:.3}s", y), (-12, 8), annotation(&OPTIMIZED_COLOR))
        }))
        .map_err(chart_error)?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.9))
        .border_style(&BLACK)
        .label_font((config.font_family, config.tick_label_font_size))
        .draw()
        .map_err(chart_error)?;

    root.present().map_err(chart_error)?;
    Ok(())
}

fn chart_error<E: std::error::Error>(e: E) -> AnalysisError {
    AnalysisError::ChartError(e.to_string())
}
