//! Engine error types.
//!
//! Only rejected inputs and rejected configuration are errors. A train
//! that cannot be placed is reported as an in-band diagnostic on the
//! response, and an exhausted refinement budget simply returns the best
//! schedule found so far.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors that can abort an optimization call.
#[derive(Debug, Error)]
pub enum OptimizeError {
    /// The request failed validation. All detected problems are included.
    #[error("invalid request: {}", format_errors(.0))]
    InvalidRequest(Vec<ValidationError>),

    /// The engine configuration is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type OptimizeResult<T> = Result<T, OptimizeError>;

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
