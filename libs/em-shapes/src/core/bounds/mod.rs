//! Axis-aligned bounds in two and three dimensions.
//!
//! A shape's bounding box must be sound: every point strictly outside it has
//! a non-positive level set. It does not have to be tight.

use serde::{Deserialize, Serialize};

use crate::core::axis::Axis;
use crate::core::vec2::Vec2;
use crate::core::vec3::Vec3;

/// In-plane bound of a cross-section, expressed in `(h, v)` coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds2 {
    /// Lower corner `(h_min, v_min)`.
    pub min: Vec2,
    /// Upper corner `(h_max, v_max)`.
    pub max: Vec2,
}

impl Bounds2 {
    /// Creates a bound from its corners.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Square bound of half-width `half_extent` centered on `center`.
    ///
    /// # Examples
    /// ```
    /// use em_shapes::{Bounds2, Vec2};
    /// let b = Bounds2::centered(Vec2::new(1.0, 2.0), 3.0);
    /// assert_eq!(b.min, Vec2::new(-2.0, -1.0));
    /// assert_eq!(b.max, Vec2::new(4.0, 5.0));
    /// ```
    pub fn centered(center: Vec2, half_extent: f64) -> Self {
        Self {
            min: center - Vec2::splat(half_extent),
            max: center + Vec2::splat(half_extent),
        }
    }
}

/// Axis-aligned bounding box: one closed `[min, max]` interval per axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Lower corner.
    pub min: Vec3,
    /// Upper corner.
    pub max: Vec3,
}

impl BoundingBox {
    /// Creates a box from its corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Combines an in-plane bound on the `(h, v)` axes of `normal` with an
    /// axial interval on `normal` itself.
    ///
    /// # Examples
    /// ```
    /// use em_shapes::{Axis, BoundingBox, Bounds2, Vec2};
    /// let plane = Bounds2::centered(Vec2::ZERO, 1.0);
    /// let bb = BoundingBox::extruded(Axis::X, plane, [5.0, 7.0]);
    /// assert_eq!(bb.interval(Axis::X), [5.0, 7.0]);
    /// assert_eq!(bb.interval(Axis::Y), [-1.0, 1.0]);
    /// ```
    pub fn extruded(normal: Axis, plane: Bounds2, axial: [f64; 2]) -> Self {
        Self {
            min: normal.unproject(plane.min, axial[0]),
            max: normal.unproject(plane.max, axial[1]),
        }
    }

    /// Closed interval along `axis`.
    pub fn interval(&self, axis: Axis) -> [f64; 2] {
        [axis.component(self.min), axis.component(self.max)]
    }

    /// Per-axis `[min, max]` rows in `x, y, z` order.
    ///
    /// # Examples
    /// ```
    /// use em_shapes::{BoundingBox, Vec3};
    /// let bb = BoundingBox::new(Vec3::new(-1.0, -2.0, 0.0), Vec3::new(1.0, 2.0, 3.0));
    /// assert_eq!(bb.as_array(), [[-1.0, 1.0], [-2.0, 2.0], [0.0, 3.0]]);
    /// ```
    pub fn as_array(&self) -> [[f64; 2]; 3] {
        Axis::ALL.map(|axis| self.interval(axis))
    }

    /// Whether `point` lies inside the closed box.
    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Whether the box encloses no volume (some `min > max`).
    pub fn is_empty(&self) -> bool {
        self.min.cmpgt(self.max).any()
    }

    /// Smallest box containing both.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Overlap of both boxes. May be empty, see [`BoundingBox::is_empty`].
    pub fn intersection(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min: self.min.max(other.min),
            max: self.max.min(other.max),
        }
    }
}
