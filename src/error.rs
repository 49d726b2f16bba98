//! Error types for the input boundary
//!
//! Calendar failures are not wrapped here: they reach the caller as the
//! adapter's own error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SajuError {
    #[error("unknown birth time label: '{0}'")]
    UnknownBirthTimeLabel(String),

    #[error("unknown gender: '{0}'")]
    UnknownGender(String),

    #[error("invalid scoring weights: {0}")]
    InvalidWeights(String),
}
