//! # Error Types
//!
//! Error types for shape construction. Evaluation of a constructed shape is
//! total, so every error in this crate is raised while building a shape from
//! caller-supplied parameters.
//!
//! ## Error Policy
//!
//! - NO clamping or silent correction of invalid parameters
//! - All failures return explicit errors
//! - Errors name the offending argument and the violated constraint

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while constructing shapes.
///
/// ## Example
///
/// ```rust
/// use em_shapes::{Axis, CircularShellCylinder, MaxCellSize, ShapeError};
///
/// match CircularShellCylinder::new(Axis::Z, -1.0, [0.0; 3], 1.0, 2.0, MaxCellSize::Unbounded) {
///     Ok(_) => unreachable!("negative height is rejected"),
///     Err(ShapeError::InvalidArgument { argument, .. }) => assert_eq!(argument, "height"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// A construction argument violated its constraint.
    ///
    /// Contains the argument name and a description of the constraint.
    #[error("Invalid argument '{argument}': {message}")]
    InvalidArgument {
        /// Name of the rejected argument (height, radius, center, ...)
        argument: String,
        /// What was wrong with it
        message: String,
    },
}

impl ShapeError {
    /// Creates an invalid argument error.
    pub fn invalid_argument(argument: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument: argument.into(),
            message: message.into(),
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for shape construction.
///
/// ## Example
///
/// ```rust
/// use em_shapes::error::ShapeResult;
/// use em_shapes::{Axis, CircularCylinder, MaxCellSize};
///
/// fn rod() -> ShapeResult<CircularCylinder> {
///     CircularCylinder::new(Axis::X, 10.0, [0.0; 3], 1.0, MaxCellSize::Unbounded)
/// }
/// assert!(rod().is_ok());
/// ```
pub type ShapeResult<T> = Result<T, ShapeError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages.
    #[test]
    fn test_error_display() {
        let err = ShapeError::invalid_argument("radius", "must be positive, got -2");
        let text = err.to_string();
        assert!(text.contains("Invalid argument 'radius'"));
        assert!(text.contains("must be positive"));
    }

    /// Test error types are Send + Sync for use across worker threads.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ShapeError>();
    }
}
