//! Extrusion of a cross-section along a coordinate axis.
//!
//! Given normal axis `n` with in-plane axes `(h, v)` from [`Axis::cycle`],
//! the extruded level set is
//!
//! ```text
//! min(f2d(p_h, p_v), height / 2 − |p_n − center_n|)
//! ```
//!
//! Both terms are positive inside, so the minimum is the intersection of the
//! infinite prism with the slab `|p_n − center_n| ≤ height / 2`.

use crate::core::axis::Axis;
use crate::core::bounds::BoundingBox;
use crate::core::level_set::meet;
use crate::core::validate::{finite_point, positive};
use crate::core::vec3::Vec3;
use crate::error::ShapeResult;
use crate::shapes::{CrossSection, Shape};

/// A cross-section swept over a finite length of its normal axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Extrusion<S> {
    normal_axis: Axis,
    height: f64,
    axial_center: f64,
    section: S,
}

impl<S: CrossSection> Extrusion<S> {
    /// Sweeps `section` along `normal_axis` over `height`, centered on the
    /// normal component of `center`.
    ///
    /// # Errors
    /// `height` must be finite and positive, `center` must be finite.
    pub fn new(normal_axis: Axis, height: f64, center: Vec3, section: S) -> ShapeResult<Self> {
        let height = positive("height", height)?;
        let center = finite_point("center", center)?;
        Ok(Self {
            normal_axis,
            height,
            axial_center: normal_axis.component(center),
            section,
        })
    }

    /// Extrusion axis.
    pub fn normal_axis(&self) -> Axis {
        self.normal_axis
    }

    /// Extrusion length.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Coordinate of the mid-plane along the normal axis.
    pub fn axial_center(&self) -> f64 {
        self.axial_center
    }

    /// The swept cross-section.
    pub fn section(&self) -> &S {
        &self.section
    }

    /// `height / 2 − |p_n − center_n|`: positive strictly between the end caps.
    #[inline]
    pub fn axial_level(&self, point: Vec3) -> f64 {
        0.5 * self.height - (self.normal_axis.component(point) - self.axial_center).abs()
    }
}

impl<S: CrossSection> Shape for Extrusion<S> {
    fn level_set(&self, points: &[Vec3]) -> Vec<f64> {
        let in_plane = self.normal_axis.project_all(points);
        let mut levels = self.section.level_set_2d(&in_plane);
        for (level, &point) in levels.iter_mut().zip(points) {
            *level = meet(*level, self.axial_level(point));
        }
        levels
    }

    fn bounding_box(&self) -> BoundingBox {
        let half = 0.5 * self.height;
        BoundingBox::extruded(
            self.normal_axis,
            self.section.bounds_2d(),
            [self.axial_center - half, self.axial_center + half],
        )
    }
}

#[cfg(test)]
mod tests;
