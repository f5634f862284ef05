//! 2D vector definitions for cross-section math.
//!
//! Provides type alias for `glam::DVec2` and the scaled-distance helper shared
//! by the circular cross-sections.

pub use glam::DVec2 as Vec2;

/// Distance from `center` to `point` measured in units of `radius`,
/// i.e. `‖(point − center) / radius‖`.
///
/// Equals 1 exactly on the circle of that radius.
///
/// # Examples
/// ```
/// use em_shapes::core::vec2::{scaled_distance, Vec2};
///
/// let d = scaled_distance(Vec2::new(3.0, 4.0), Vec2::ZERO, 5.0);
/// assert!((d - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn scaled_distance(point: Vec2, center: Vec2, radius: f64) -> f64 {
    ((point - center) / radius).length()
}
