pub mod normalize;

pub use normalize::{micros_to_nanos, nanos_to_micros, normalize_log, normalize_units};
