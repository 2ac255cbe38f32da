//! Redirect table validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject entries with an empty path or destination
//! - Reject destinations that cannot travel in a `Location` header
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: &Mapping → Result<(), Vec<ValidationError>>
//! - Runs before the mapping is handed to a resolver

use axum::http::HeaderValue;
use thiserror::Error;

use crate::routing::Mapping;

/// A single unusable entry in the redirect table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("entry with empty path")]
    EmptyPath,

    #[error("empty destination for path {path:?}")]
    EmptyDestination { path: String },

    #[error("destination for path {path:?} is not a valid Location header value")]
    InvalidDestination { path: String },
}

/// Check every entry of `mapping`, collecting all problems.
pub fn validate_mapping(mapping: &Mapping) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (path, destination) in mapping.iter() {
        if path.is_empty() {
            errors.push(ValidationError::EmptyPath);
        }
        if destination.is_empty() {
            errors.push(ValidationError::EmptyDestination {
                path: path.to_string(),
            });
        } else if HeaderValue::from_bytes(destination.as_bytes()).is_err() {
            errors.push(ValidationError::InvalidDestination {
                path: path.to_string(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
