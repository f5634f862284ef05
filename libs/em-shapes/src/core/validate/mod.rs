//! Argument checks shared by shape constructors.
//!
//! Each check names the argument it rejects so that the resulting
//! [`ShapeError::InvalidArgument`] points straight at the caller's mistake.

use crate::core::vec2::Vec2;
use crate::core::vec3::Vec3;
use crate::error::{ShapeError, ShapeResult};

/// Requires a finite, strictly positive value.
///
/// # Examples
/// ```
/// use em_shapes::core::validate::positive;
/// assert_eq!(positive("height", 2.0).unwrap(), 2.0);
/// assert!(positive("height", 0.0).is_err());
/// assert!(positive("height", f64::INFINITY).is_err());
/// ```
pub fn positive(argument: &str, value: f64) -> ShapeResult<f64> {
    if !value.is_finite() {
        return Err(ShapeError::invalid_argument(
            argument,
            format!("must be a finite real number, got {value}"),
        ));
    }
    if value <= 0.0 {
        return Err(ShapeError::invalid_argument(
            argument,
            format!("must be positive, got {value}"),
        ));
    }
    Ok(value)
}

/// Requires every component to be finite.
pub fn finite_point(argument: &str, value: Vec3) -> ShapeResult<Vec3> {
    if !value.is_finite() {
        return Err(ShapeError::invalid_argument(
            argument,
            format!(
                "components must be finite real numbers, got ({}, {}, {})",
                value.x, value.y, value.z
            ),
        ));
    }
    Ok(value)
}

/// Requires both in-plane components to be finite.
pub fn finite_plane_point(argument: &str, value: Vec2) -> ShapeResult<Vec2> {
    if !value.is_finite() {
        return Err(ShapeError::invalid_argument(
            argument,
            format!(
                "components must be finite real numbers, got ({}, {})",
                value.x, value.y
            ),
        ));
    }
    Ok(value)
}

/// Requires a value that is strictly positive; `+∞` is accepted.
pub fn positive_or_unbounded(argument: &str, value: f64) -> ShapeResult<f64> {
    if value.is_nan() || value <= 0.0 {
        return Err(ShapeError::invalid_argument(
            argument,
            format!("must be positive or +inf, got {value}"),
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests;
