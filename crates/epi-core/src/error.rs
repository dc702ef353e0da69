//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `EpiError` as one
//! variant via `#[from]`, so validation helpers defined here can be reused
//! with `?` at every layer.

use thiserror::Error;

use crate::LocationId;

/// The top-level error type for `epi-core` and a common base for sub-crates.
#[derive(Debug, Error, PartialEq)]
pub enum EpiError {
    #[error("{location} is outside the topology (location count {count})")]
    LocationOutOfRange { location: LocationId, count: usize },

    #[error("{what} must be a probability in [0, 1], got {value}")]
    InvalidProbability { what: &'static str, value: f64 },
}

/// Shorthand result type for all `epi-*` crates.
pub type EpiResult<T> = Result<T, EpiError>;

/// Check that `value` is a finite probability.
///
/// `what` names the parameter in the error message.
pub fn check_probability(what: &'static str, value: f64) -> EpiResult<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(EpiError::InvalidProbability { what, value })
    }
}
