//! # Error Types
//!
//! Structured error types for physics_core. Every formula either succeeds
//! fully or fails immediately with one of these variants; there are no
//! retries or partial results anywhere in the crate.
//!
//! ## Example
//!
//! ```rust
//! use physics_core::errors::{PhysicsError, PhysicsResult};
//!
//! fn validate_mass(mass_kg: f64) -> PhysicsResult<()> {
//!     if mass_kg <= 0.0 {
//!         return Err(PhysicsError::InvalidInput {
//!             field: "mass_kg".to_string(),
//!             value: mass_kg.to_string(),
//!             reason: "Mass must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for physics_core operations
pub type PhysicsResult<T> = Result<T, PhysicsError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong. The serde
/// representation is a tagged object, so an HTTP layer can return errors
/// verbatim as a 400/500 JSON body.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum PhysicsError {
    /// An input value violates a physical precondition (zero denominator,
    /// non-positive mass/length/amplitude, angle out of range, negative time)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required input is missing
    #[error("Missing required input: {field}")]
    MissingInput { field: String },

    /// A quadratic/physical equation has no valid (real, non-negative time)
    /// root where the scenario requires one
    #[error("No real solution: {context}")]
    NoRealSolution { context: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl PhysicsError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        PhysicsError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingInput error
    pub fn missing_input(field: impl Into<String>) -> Self {
        PhysicsError::MissingInput {
            field: field.into(),
        }
    }

    /// Create a NoRealSolution error
    pub fn no_real_solution(context: impl Into<String>) -> Self {
        PhysicsError::NoRealSolution {
            context: context.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            PhysicsError::InvalidInput { .. } => "INVALID_INPUT",
            PhysicsError::MissingInput { .. } => "MISSING_INPUT",
            PhysicsError::NoRealSolution { .. } => "NO_REAL_SOLUTION",
            PhysicsError::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// HTTP status an API layer should map this error to
    pub fn http_status(&self) -> u16 {
        match self {
            PhysicsError::Internal { .. } => 500,
            _ => 400,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = PhysicsError::invalid_input("mass_kg", "-5.0", "Mass must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: PhysicsError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            PhysicsError::missing_input("angular_speed").error_code(),
            "MISSING_INPUT"
        );
        assert_eq!(
            PhysicsError::no_real_solution("projectile never lands").error_code(),
            "NO_REAL_SOLUTION"
        );
    }

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(
            PhysicsError::invalid_input("t", "-1", "negative").http_status(),
            400
        );
        assert_eq!(
            PhysicsError::Internal {
                message: "boom".to_string()
            }
            .http_status(),
            500
        );
    }
}
