//! Cylindrical shell: a ring cross-section extruded along an axis.
//!
//! The ring is the disk of the outer radius minus the disk of the inner
//! radius, written as an intersection of two level sets:
//!
//! ```text
//! level_outer(ρ) = 1 − ‖(ρ − c) / R‖     positive inside the outer circle
//! level_inner(ρ) = ‖(ρ − c) / r‖ − 1     positive outside the inner circle
//! level(ρ)       = min(level_outer, level_inner)     (NaN if ρ is NaN)
//! ```
//!
//! With `r == R` the two terms are negatives of each other, so the level set
//! is never positive and vanishes only on the circle itself.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::axis::Axis;
use crate::core::bounds::{BoundingBox, Bounds2};
use crate::core::cell_size::MaxCellSize;
use crate::core::level_set::meet;
use crate::core::validate::{finite_plane_point, finite_point, positive};
use crate::core::vec2::{scaled_distance, Vec2};
use crate::core::vec3::Vec3;
use crate::error::{ShapeError, ShapeResult};
use crate::shapes::{CrossSection, Extrusion, Shape};

/// Annular cross-section between `inner_radius` and `outer_radius`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Annulus {
    center: Vec2,
    inner_radius: f64,
    outer_radius: f64,
}

impl Annulus {
    /// Builds a ring from two radii given in any order.
    ///
    /// # Errors
    /// `r1` and `r2` must be finite and positive, `center` must be finite.
    pub fn new(center: Vec2, r1: f64, r2: f64) -> ShapeResult<Self> {
        let center = finite_plane_point("center", center)?;
        let r1 = positive("r1", r1)?;
        let r2 = positive("r2", r2)?;
        Ok(Self {
            center,
            inner_radius: r1.min(r2),
            outer_radius: r1.max(r2),
        })
    }

    /// In-plane center `(c_h, c_v)`.
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Smaller radius `r`.
    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    /// Larger radius `R`.
    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    /// Positive strictly inside the outer circle.
    #[inline]
    pub fn level_outer(&self, point: Vec2) -> f64 {
        1.0 - scaled_distance(point, self.center, self.outer_radius)
    }

    /// Positive strictly outside the inner circle.
    #[inline]
    pub fn level_inner(&self, point: Vec2) -> f64 {
        scaled_distance(point, self.center, self.inner_radius) - 1.0
    }

    /// Positive strictly inside the open ring. NaN for a NaN point.
    #[inline]
    pub fn level(&self, point: Vec2) -> f64 {
        meet(self.level_outer(point), self.level_inner(point))
    }
}

impl CrossSection for Annulus {
    fn level_set_2d(&self, points: &[Vec2]) -> Vec<f64> {
        points.iter().map(|&p| self.level(p)).collect()
    }

    fn bounds_2d(&self) -> Bounds2 {
        Bounds2::centered(self.center, self.outer_radius)
    }
}

/// Serialized form of a [`CircularShellCylinder`]: the constructor arguments.
///
/// Deserialization goes through [`CircularShellCylinder::new`], so invalid
/// parameters are rejected with [`ShapeError::InvalidArgument`]. A
/// serialized shell always writes `r1 <= r2`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellParams {
    /// Extrusion axis.
    pub normal_axis: Axis,
    /// Extrusion length.
    pub height: f64,
    /// Center of the shell.
    pub center: Vec3,
    /// First wall radius.
    pub r1: f64,
    /// Second wall radius.
    pub r2: f64,
    /// Advisory grid-resolution hint.
    #[serde(default)]
    pub max_cell_size: MaxCellSize,
}

/// Hollow circular cylinder (pipe) aligned with a coordinate axis.
///
/// # Examples
/// ```
/// use em_shapes::{Axis, CircularShellCylinder, MaxCellSize, Shape, Vec3};
///
/// let pipe = CircularShellCylinder::new(Axis::Z, 100.0, [0.0, 0.0, 50.0], 50.0, 100.0, MaxCellSize::Unbounded).unwrap();
/// assert_eq!(pipe.bounding_box().as_array(), [[-100.0, 100.0], [-100.0, 100.0], [0.0, 100.0]]);
/// assert!(pipe.level_set_at(Vec3::new(75.0, 0.0, 50.0)) > 0.0);
/// assert!(pipe.level_set_at(Vec3::new(0.0, 0.0, 50.0)) <= 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ShellParams", into = "ShellParams")]
pub struct CircularShellCylinder {
    center: Vec3,
    extrusion: Extrusion<Annulus>,
    max_cell_size: MaxCellSize,
}

impl CircularShellCylinder {
    /// Builds a shell of `height` centered on `center` whose wall spans the
    /// radii `r1` and `r2`, in either order.
    ///
    /// Equal radii are accepted and give a shell without interior.
    ///
    /// # Errors
    /// Rejects non-positive or non-finite `height`, `r1`, `r2`, non-finite
    /// `center` components and non-positive `max_cell_size` components.
    pub fn new(
        normal_axis: Axis,
        height: f64,
        center: impl Into<Vec3>,
        r1: f64,
        r2: f64,
        max_cell_size: impl Into<MaxCellSize>,
    ) -> ShapeResult<Self> {
        let center = finite_point("center", center.into())?;
        let section = Annulus::new(normal_axis.project(center), r1, r2)?;
        let max_cell_size = max_cell_size.into().validated()?;
        if section.inner_radius == section.outer_radius {
            warn!(radius = r1, "shell radii are equal; the shell has no interior");
        }
        let extrusion = Extrusion::new(normal_axis, height, center, section)?;
        debug!(
            axis = %normal_axis,
            height,
            ?center,
            inner = section.inner_radius,
            outer = section.outer_radius,
            "built circular shell cylinder"
        );
        Ok(Self {
            center,
            extrusion,
            max_cell_size,
        })
    }

    /// Extrusion axis.
    pub fn normal_axis(&self) -> Axis {
        self.extrusion.normal_axis()
    }

    /// Extrusion length.
    pub fn height(&self) -> f64 {
        self.extrusion.height()
    }

    /// Center of the shell.
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Smaller of the two radii.
    pub fn inner_radius(&self) -> f64 {
        self.extrusion.section().inner_radius()
    }

    /// Larger of the two radii.
    pub fn outer_radius(&self) -> f64 {
        self.extrusion.section().outer_radius()
    }
}

impl TryFrom<ShellParams> for CircularShellCylinder {
    type Error = ShapeError;

    fn try_from(p: ShellParams) -> ShapeResult<Self> {
        Self::new(p.normal_axis, p.height, p.center, p.r1, p.r2, p.max_cell_size)
    }
}

impl From<CircularShellCylinder> for ShellParams {
    fn from(s: CircularShellCylinder) -> Self {
        Self {
            normal_axis: s.normal_axis(),
            height: s.height(),
            center: s.center,
            r1: s.inner_radius(),
            r2: s.outer_radius(),
            max_cell_size: s.max_cell_size,
        }
    }
}

impl Shape for CircularShellCylinder {
    fn level_set(&self, points: &[Vec3]) -> Vec<f64> {
        self.extrusion.level_set(points)
    }

    fn bounding_box(&self) -> BoundingBox {
        self.extrusion.bounding_box()
    }

    fn max_cell_size(&self) -> [f64; 3] {
        self.max_cell_size.to_array()
    }
}
