use crate::error::AnalysisResult;
use crate::models::{ColumnData, LatencyLog, LatencyTable};
use crate::utils::constants::NANOS_PER_MICRO;

pub fn nanos_to_micros(nanos: f64) -> f64 {
    nanos / NANOS_PER_MICRO
}

pub fn micros_to_nanos(micros: f64) -> f64 {
    micros * NANOS_PER_MICRO
}

/// 나노초 컬럼을 1000으로 나눈 마이크로초 컬럼을 추가
///
/// 원본 컬럼은 그대로 두며 행 수와 순서는 바뀌지 않는다.
pub fn normalize_units(table: &mut LatencyTable, pairs: &[(&str, &str)]) -> AnalysisResult<()> {
    for &(source, derived) in pairs {
        let micros: Vec<f64> = table
            .f64_values(source)?
            .into_iter()
            .map(nanos_to_micros)
            .collect();
        table.insert_column(derived, ColumnData::Float(micros))?;
    }
    Ok(())
}

pub fn normalize_log<T: LatencyLog>(table: &mut LatencyTable) -> AnalysisResult<()> {
    normalize_units(table, T::unit_conversions())
}
