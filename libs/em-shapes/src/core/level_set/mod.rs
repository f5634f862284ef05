//! Level-set arithmetic.
//!
//! Every level set in this crate is positive inside its region, negative
//! outside and zero on the boundary. Under that convention set operations
//! reduce to pointwise arithmetic:
//!
//! | Set operation | Level set |
//! |---------------|-----------|
//! | `A ∩ B`       | `min(a, b)` |
//! | `A ∪ B`       | `max(a, b)` |
//! | `A \ B`       | `min(a, −b)` |
//! | `¬A`          | `−a` |
//!
//! The batch functions zip their inputs; when lengths differ the shorter one
//! wins. Callers always pass batches evaluated over the same points.
//!
//! `f64::min`/`f64::max` return the non-NaN operand, which would let a point
//! with a NaN coordinate pass one half of a combination and read as inside.
//! [`meet`] and [`join`] propagate NaN instead; a NaN level set is never
//! positive and [`Membership::of`] classifies it as outside.

use serde::{Deserialize, Serialize};

/// Scalar intersection: `min(a, b)`, NaN if either operand is NaN.
///
/// # Examples
/// ```
/// use em_shapes::core::level_set::meet;
/// assert_eq!(meet(1.0, -2.0), -2.0);
/// assert!(meet(f64::NAN, 5.0).is_nan());
/// assert!(meet(5.0, f64::NAN).is_nan());
/// ```
#[inline]
pub fn meet(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

/// Scalar union: `max(a, b)`, NaN if either operand is NaN.
#[inline]
pub fn join(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

/// Pointwise intersection of two level-set batches.
///
/// # Examples
/// ```
/// use em_shapes::core::level_set::intersection;
/// assert_eq!(intersection(&[1.0, -1.0], &[0.5, 2.0]), vec![0.5, -1.0]);
/// ```
pub fn intersection(a: &[f64], b: &[f64]) -> Vec<f64> {
    a.iter().zip(b).map(|(&a, &b)| meet(a, b)).collect()
}

/// Pointwise union of two level-set batches.
pub fn union(a: &[f64], b: &[f64]) -> Vec<f64> {
    a.iter().zip(b).map(|(&a, &b)| join(a, b)).collect()
}

/// Pointwise difference `A \ B`, i.e. `A ∩ ¬B`.
pub fn difference(a: &[f64], b: &[f64]) -> Vec<f64> {
    intersection(a, &complement(b))
}

/// Pointwise complement.
pub fn complement(a: &[f64]) -> Vec<f64> {
    a.iter().map(|&a| -a).collect()
}

/// Where a sample lies relative to a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Membership {
    /// Level set above the tolerance.
    Inside,
    /// Level set within the tolerance of zero.
    Boundary,
    /// Level set below minus the tolerance.
    Outside,
}

impl Membership {
    /// Classifies one level-set value.
    ///
    /// # Examples
    /// ```
    /// use em_shapes::Membership;
    /// assert_eq!(Membership::of(0.3, 1e-9), Membership::Inside);
    /// assert_eq!(Membership::of(-1e-12, 1e-9), Membership::Boundary);
    /// assert_eq!(Membership::of(-0.3, 1e-9), Membership::Outside);
    /// ```
    pub fn of(value: f64, tolerance: f64) -> Membership {
        if config::constants::within_tolerance(value, tolerance) {
            Membership::Boundary
        } else if value > 0.0 {
            Membership::Inside
        } else {
            Membership::Outside
        }
    }
}

/// Classifies a batch of level-set values.
pub fn classify(values: &[f64], tolerance: f64) -> Vec<Membership> {
    values.iter().map(|&v| Membership::of(v, tolerance)).collect()
}
