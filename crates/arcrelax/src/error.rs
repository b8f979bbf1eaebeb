//! Recoverable input errors.
//!
//! Malformed bounding boxes are not represented here: they are caller bugs and
//! trip an assertion in `rotated`.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum RelaxError {
    /// Two-point line through coincident points is undefined.
    #[error("secant points must be distinct")]
    CoincidentPoints,
    #[error("angle interval is inverted: psi_min {psi_min} > psi_max {psi_max}")]
    InvertedInterval { psi_min: f64, psi_max: f64 },
    #[error("angle interval [{psi_min}, {psi_max}] leaves the supported window [{lo}, {hi}]")]
    IntervalOutsideWindow {
        psi_min: f64,
        psi_max: f64,
        lo: f64,
        hi: f64,
    },
    #[error("interval span {span} must lie in (0, {max})")]
    SpanOutOfRange { span: f64, max: f64 },
    #[error("radius must be positive, got {0}")]
    NonPositiveRadius(f64),
    #[error("non-finite input")]
    NonFinite,
    #[error("sector count {got} exceeds {max}")]
    TooManySectors { got: usize, max: usize },
    #[error("need at least {min} samples, got {got}")]
    TooFewSamples { got: usize, min: usize },
}
