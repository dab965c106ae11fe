use std::path::PathBuf;

pub type AnalysisResult<T> = Result<T, AnalysisError>;

#[derive(thiserror::Error, Debug)]
pub enum AnalysisError {
    #[error("Input file not found: {}", .0.display())]
    MissingFile(PathBuf),
    #[error("Malformed input in {source_name} (line {line}): {reason}")]
    MalformedInput {
        source_name: String,
        line: u64,
        reason: String,
    },
    #[error("Empty dataset: {table} has no values for '{column}'")]
    EmptyDataset { table: String, column: String },
    #[error("Inconsistent series lengths: sizes={sizes}, baseline={baseline}, optimized={optimized}")]
    LengthMismatch {
        sizes: usize,
        baseline: usize,
        optimized: usize,
    },
    #[error("Column '{column}' not found in {table}")]
    UnknownColumn { table: String, column: String },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("Serde error: {0}")]
    SerdeError(#[from] serde_json::Error),
    #[error("Chart error: {0}")]
    ChartError(String),
}
