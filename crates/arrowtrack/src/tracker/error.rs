/// Errors returned when validating [`TrackerParams`](super::TrackerParams).
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParamsError {
    #[error("similarity tolerance must be non-negative (got {0})")]
    NegativeTolerance(i64),
    #[error("minimum area must be finite and non-negative (got {0})")]
    InvalidMinArea(f64),
    #[error("stability gain on match must be positive (got {0})")]
    NonPositiveGain(i32),
    #[error("maximum stability must be non-negative (got {0})")]
    NegativeStabilityMax(i32),
    #[error("stability threshold {threshold} is never exceeded with maximum {max}")]
    UnreachableThreshold { threshold: i32, max: i32 },
}
