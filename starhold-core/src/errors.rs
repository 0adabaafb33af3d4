//! Error types shared across the Starhold crates.
//!
//! Hot-path math in this workspace is total and does not return errors;
//! [`CoreError`] covers the places where validation is meaningful: building
//! a [`Location`](crate::Location) from untrusted input, or parsing data
//! handed in from outside.

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Convenience alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Debug, Error, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CoreError {
    /// Coordinate component outside its physical range (e.g. latitude > 90°).
    #[error("Invalid coordinate: {message}")]
    InvalidCoordinate { message: String },

    /// Non-finite value where a finite one is required.
    #[error("Non-finite value in {context}")]
    NotFinite { context: String },
}

impl CoreError {
    pub fn invalid_coordinate(message: impl Into<String>) -> Self {
        Self::InvalidCoordinate {
            message: message.into(),
        }
    }

    pub fn not_finite(context: impl Into<String>) -> Self {
        Self::NotFinite {
            context: context.into(),
        }
    }
}
