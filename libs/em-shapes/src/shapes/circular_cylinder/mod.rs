//! Solid circular cylinder.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::axis::Axis;
use crate::core::bounds::{BoundingBox, Bounds2};
use crate::core::cell_size::MaxCellSize;
use crate::core::validate::{finite_plane_point, finite_point, positive};
use crate::core::vec2::{scaled_distance, Vec2};
use crate::core::vec3::Vec3;
use crate::error::{ShapeError, ShapeResult};
use crate::shapes::{CrossSection, Extrusion, Shape};

/// Disk cross-section: `1 − ‖(ρ − c) / R‖`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disk {
    center: Vec2,
    radius: f64,
}

impl Disk {
    /// Builds a disk of `radius` around the in-plane point `center`.
    ///
    /// # Errors
    /// `radius` must be finite and positive, `center` must be finite.
    pub fn new(center: Vec2, radius: f64) -> ShapeResult<Self> {
        Ok(Self {
            center: finite_plane_point("center", center)?,
            radius: positive("radius", radius)?,
        })
    }

    /// In-plane center `(c_h, c_v)`.
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Disk radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Level set of a single in-plane point.
    #[inline]
    pub fn level(&self, point: Vec2) -> f64 {
        1.0 - scaled_distance(point, self.center, self.radius)
    }
}

impl CrossSection for Disk {
    fn level_set_2d(&self, points: &[Vec2]) -> Vec<f64> {
        points.iter().map(|&p| self.level(p)).collect()
    }

    fn bounds_2d(&self) -> Bounds2 {
        Bounds2::centered(self.center, self.radius)
    }
}

/// Serialized form of a [`CircularCylinder`]: the constructor arguments.
///
/// Deserialization goes through [`CircularCylinder::new`], so invalid
/// parameters are rejected with [`ShapeError::InvalidArgument`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CylinderParams {
    /// Extrusion axis.
    pub normal_axis: Axis,
    /// Extrusion length.
    pub height: f64,
    /// Center of the cylinder.
    pub center: Vec3,
    /// Cross-section radius.
    pub radius: f64,
    /// Advisory grid-resolution hint.
    #[serde(default)]
    pub max_cell_size: MaxCellSize,
}

/// Cylinder with a solid circular cross-section, aligned with a coordinate
/// axis.
///
/// # Examples
/// ```
/// use em_shapes::{Axis, CircularCylinder, MaxCellSize, Shape, Vec3};
///
/// let rod = CircularCylinder::new(Axis::Z, 10.0, [0.0, 0.0, 0.0], 2.0, MaxCellSize::Unbounded).unwrap();
/// assert!(rod.level_set_at(Vec3::new(1.0, 0.0, 0.0)) > 0.0);
/// assert!(rod.level_set_at(Vec3::new(3.0, 0.0, 0.0)) < 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CylinderParams", into = "CylinderParams")]
pub struct CircularCylinder {
    center: Vec3,
    extrusion: Extrusion<Disk>,
    max_cell_size: MaxCellSize,
}

impl CircularCylinder {
    /// Builds a cylinder of `radius` and `height` centered on `center`.
    ///
    /// # Errors
    /// Rejects non-positive or non-finite `height`/`radius`, non-finite
    /// `center` components and non-positive `max_cell_size` components.
    pub fn new(
        normal_axis: Axis,
        height: f64,
        center: impl Into<Vec3>,
        radius: f64,
        max_cell_size: impl Into<MaxCellSize>,
    ) -> ShapeResult<Self> {
        let center = finite_point("center", center.into())?;
        let section = Disk::new(normal_axis.project(center), radius)?;
        let max_cell_size = max_cell_size.into().validated()?;
        let extrusion = Extrusion::new(normal_axis, height, center, section)?;
        debug!(axis = %normal_axis, height, ?center, radius, "built circular cylinder");
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

    /// Center of the cylinder.
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Cross-section radius.
    pub fn radius(&self) -> f64 {
        self.extrusion.section().radius()
    }
}

impl TryFrom<CylinderParams> for CircularCylinder {
    type Error = ShapeError;

    fn try_from(p: CylinderParams) -> ShapeResult<Self> {
        Self::new(p.normal_axis, p.height, p.center, p.radius, p.max_cell_size)
    }
}

impl From<CircularCylinder> for CylinderParams {
    fn from(c: CircularCylinder) -> Self {
        Self {
            normal_axis: c.normal_axis(),
            height: c.height(),
            center: c.center,
            radius: c.radius(),
            max_cell_size: c.max_cell_size,
        }
    }
}

impl Shape for CircularCylinder {
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

#[cfg(test)]
mod tests;
