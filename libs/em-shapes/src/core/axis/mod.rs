//! Coordinate axes and the cyclic permutation used by extruded shapes.
//!
//! A cross-section is always written in terms of a horizontal and a vertical
//! in-plane axis. [`Axis::cycle`] picks those two for a given normal axis so
//! that `(normal, horizontal, vertical)` is a rotation of `(X, Y, Z)`, which
//! keeps every orientation right-handed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::vec2::Vec2;
use crate::core::vec3::Vec3;
use crate::error::{ShapeError, ShapeResult};

/// One of the three orthogonal coordinate axes.
///
/// Ordered `X < Y < Z`; the cyclic successor is `X → Y → Z → X`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// The first coordinate axis.
    X,
    /// The second coordinate axis.
    Y,
    /// The third coordinate axis.
    Z,
}

impl Axis {
    /// All axes in their fixed order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Position of the axis in `(x, y, z)` component order.
    ///
    /// # Examples
    /// ```
    /// use em_shapes::Axis;
    /// assert_eq!(Axis::Y.index(), 1);
    /// ```
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Cyclic successor.
    #[inline]
    pub const fn next(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::Z,
            Axis::Z => Axis::X,
        }
    }

    /// Returns `(horizontal, vertical, normal)` for `normal`.
    ///
    /// # Examples
    /// ```
    /// use em_shapes::Axis;
    /// assert_eq!(Axis::cycle(Axis::Z), (Axis::X, Axis::Y, Axis::Z));
    /// assert_eq!(Axis::cycle(Axis::X), (Axis::Y, Axis::Z, Axis::X));
    /// assert_eq!(Axis::cycle(Axis::Y), (Axis::Z, Axis::X, Axis::Y));
    /// ```
    #[inline]
    pub const fn cycle(normal: Axis) -> (Axis, Axis, Axis) {
        let h = normal.next();
        (h, h.next(), normal)
    }

    /// Scalar component of `point` along this axis.
    #[inline]
    pub fn component(self, point: Vec3) -> f64 {
        match self {
            Axis::X => point.x,
            Axis::Y => point.y,
            Axis::Z => point.z,
        }
    }

    /// Extracts the in-plane `(h, v)` coordinates of `point` for the normal
    /// axis `self`.
    ///
    /// # Examples
    /// ```
    /// use em_shapes::{Axis, Vec2, Vec3};
    /// let hv = Axis::X.project(Vec3::new(1.0, 2.0, 3.0));
    /// assert_eq!(hv, Vec2::new(2.0, 3.0));
    /// ```
    #[inline]
    pub fn project(self, point: Vec3) -> Vec2 {
        let (h, v, _) = Axis::cycle(self);
        Vec2::new(h.component(point), v.component(point))
    }

    /// Inverse of [`Axis::project`]: places in-plane coordinates `hv` and the
    /// axial coordinate `normal_coord` back into a 3D point.
    ///
    /// # Examples
    /// ```
    /// use em_shapes::{Axis, Vec2, Vec3};
    /// let p = Vec3::new(1.0, 2.0, 3.0);
    /// for axis in Axis::ALL {
    ///     assert_eq!(axis.unproject(axis.project(p), axis.component(p)), p);
    /// }
    /// ```
    #[inline]
    pub fn unproject(self, hv: Vec2, normal_coord: f64) -> Vec3 {
        let (h, v, n) = Axis::cycle(self);
        let mut out = [0.0; 3];
        out[h.index()] = hv.x;
        out[v.index()] = hv.y;
        out[n.index()] = normal_coord;
        Vec3::from_array(out)
    }

    /// Projects a batch of points, preserving order.
    pub fn project_all(self, points: &[Vec3]) -> Vec<Vec2> {
        points.iter().map(|&p| self.project(p)).collect()
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

impl TryFrom<usize> for Axis {
    type Error = ShapeError;

    fn try_from(value: usize) -> ShapeResult<Self> {
        Axis::ALL.get(value).copied().ok_or_else(|| {
            ShapeError::invalid_argument(
                "normal_axis",
                format!("axis index must be 0, 1 or 2, got {value}"),
            )
        })
    }
}

impl TryFrom<char> for Axis {
    type Error = ShapeError;

    fn try_from(value: char) -> ShapeResult<Self> {
        match value.to_ascii_lowercase() {
            'x' => Ok(Axis::X),
            'y' => Ok(Axis::Y),
            'z' => Ok(Axis::Z),
            _ => Err(ShapeError::invalid_argument(
                "normal_axis",
                format!("axis must be one of x, y, z, got '{value}'"),
            )),
        }
    }
}

impl FromStr for Axis {
    type Err = ShapeError;

    fn from_str(s: &str) -> ShapeResult<Self> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Axis::try_from(c),
            _ => Err(ShapeError::invalid_argument(
                "normal_axis",
                format!("axis must be one of x, y, z, got \"{s}\""),
            )),
        }
    }
}

#[cfg(test)]
mod tests;
