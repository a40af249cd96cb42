//! Error types for the calorie burn estimator

use thiserror::Error;

/// Errors produced by the estimation core
///
/// Every variant is a recoverable validation outcome: the caller fixes the
/// form and calls again. There is no fatal class and nothing to retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EstimationError {
    /// Weight, duration, or activity was unset at call time.
    /// The payload lists the missing field names.
    #[error("Missing required input: {0}")]
    MissingInput(String),
}

impl EstimationError {
    /// Stable machine-readable code for the presentation boundary
    pub fn code(&self) -> &'static str {
        match self {
            EstimationError::MissingInput(_) => "MissingInputError",
        }
    }
}
