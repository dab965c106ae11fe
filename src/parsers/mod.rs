pub mod csv_log;

pub use csv_log::{load_from_reader, LogLoader};
