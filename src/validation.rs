//! Input validation for optimization requests.
//!
//! Checks structural integrity of trains and resources before any
//! scheduling work starts. Detects:
//! - Duplicate IDs
//! - Unparseable arrival timestamps
//!
//! All problems are collected and reported together rather than failing
//! on the first one.

use crate::models::{Resource, Train};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A scheduled arrival does not parse as a timestamp.
    MalformedTimestamp,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates an optimization request.
///
/// Checks:
/// 1. No duplicate train IDs
/// 2. No duplicate resource IDs
/// 3. Every scheduled arrival parses as a timestamp
///
/// Empty train or resource lists are valid degenerate inputs.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(trains: &[Train], resources: &[Resource]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut train_ids = HashSet::new();
    for train in trains {
        if !train_ids.insert(train.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate train ID: {}", train.id),
            ));
        }

        if let Err(err) = train.arrival() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MalformedTimestamp,
                format!(
                    "Train '{}' has unparseable arrival '{}': {err}",
                    train.id, train.schedule_arrival
                ),
            ));
        }
    }

    let mut resource_ids = HashSet::new();
    for resource in resources {
        if !resource_ids.insert(resource.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate resource ID: {}", resource.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
