//! Error types for the reflection-count crate.
//!
//! Counting itself cannot fail once its inputs are valid, so most variants
//! describe rejected inputs or scenario files that could not be loaded.

use thiserror::Error;

/// Error type for reflection counting operations.
#[derive(Debug, Error)]
pub enum ReflectionError {
    /// An input violates its precondition (non-positive length, NaN, ...).
    #[error("invalid argument '{name}': {message}")]
    InvalidArgument {
        /// Name of the offending parameter (e.g., "t60", "room.length_x").
        name: String,
        /// Constraint that was violated, including the rejected value.
        message: String,
    },

    /// A scenario file could not be read or parsed.
    #[error("failed to load scenario from '{path}': {message}")]
    ConfigLoad {
        /// Path to the scenario file.
        path: String,
        /// Error message describing the failure.
        message: String,
    },

    /// I/O error wrapper.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for reflection counting operations.
pub type Result<T> = std::result::Result<T, ReflectionError>;

impl ReflectionError {
    pub(crate) fn invalid(name: &str, message: impl Into<String>) -> Self {
        ReflectionError::InvalidArgument {
            name: name.to_string(),
            message: message.into(),
        }
    }

    /// Returns true if an input precondition was violated.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ReflectionError::InvalidArgument { .. })
    }

    /// Returns true if this is a file/IO error.
    pub fn is_io_error(&self) -> bool {
        matches!(
            self,
            ReflectionError::ConfigLoad { .. } | ReflectionError::Io(_)
        )
    }
}

/// Checks that `value` is finite and strictly positive.
pub(crate) fn ensure_positive(name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(ReflectionError::invalid(
            name,
            format!("must be finite, got {value}"),
        ));
    }
    if value <= 0.0 {
        return Err(ReflectionError::invalid(
            name,
            format!("must be > 0, got {value}"),
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_positive_accepts_positive() {
        assert_eq!(ensure_positive("c", 343.0).unwrap(), 343.0);
    }

    #[test]
    fn test_ensure_positive_rejects_zero_and_negative() {
        let err = ensure_positive("t60", 0.0).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(err.to_string(), "invalid argument 't60': must be > 0, got 0");

        let err = ensure_positive("c", -1.5).unwrap_err();
        assert!(err.to_string().contains("'c'"));
    }

    #[test]
    fn test_ensure_positive_rejects_non_finite() {
        assert!(ensure_positive("c", f64::NAN).is_err());
        assert!(ensure_positive("c", f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_classification() {
        let load = ReflectionError::ConfigLoad {
            path: "room.json".to_string(),
            message: "missing field".to_string(),
        };
        assert!(load.is_io_error());
        assert!(!load.is_invalid_argument());
    }
}
