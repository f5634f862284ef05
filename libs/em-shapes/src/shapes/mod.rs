//! Shape primitives.
//!
//! A [`Shape`] describes the region it occupies implicitly: a batch
//! level-set function that is positive inside, negative outside and zero on
//! the boundary, plus an axis-aligned bounding box outside of which the level
//! set is never positive. Prisms share the axial half of that math through
//! [`Extrusion`], which sweeps any [`CrossSection`] along a coordinate axis.

pub mod circular_cylinder;
pub mod circular_shell_cylinder;
pub mod composite;
pub mod extrusion;

pub use circular_cylinder::{CircularCylinder, CylinderParams, Disk};
pub use circular_shell_cylinder::{Annulus, CircularShellCylinder, ShellParams};
pub use composite::{Difference, Intersection, ShapeKind, Union};
pub use extrusion::Extrusion;

use rayon::prelude::*;
use tracing::trace;

use crate::config::KernelConfig;
use crate::core::bounds::{BoundingBox, Bounds2};
use crate::core::level_set::{classify, Membership};
use crate::core::vec2::Vec2;
use crate::core::vec3::Vec3;

/// Common contract consumed by the grid generator.
pub trait Shape {
    /// Evaluates the level set at every point, preserving order.
    ///
    /// The output has exactly `points.len()` entries. Evaluation is total.
    fn level_set(&self, points: &[Vec3]) -> Vec<f64>;

    /// Sound axis-aligned bound of the region.
    fn bounding_box(&self) -> BoundingBox;

    /// Advisory per-axis cell size limit in `x, y, z` order.
    fn max_cell_size(&self) -> [f64; 3] {
        [config::constants::DEFAULT_MAX_CELL_SIZE; 3]
    }

    /// Level set at a single point.
    fn level_set_at(&self, point: Vec3) -> f64 {
        self.level_set(std::slice::from_ref(&point))
            .first()
            .copied()
            .unwrap_or(f64::NEG_INFINITY)
    }

    /// Same as [`Shape::level_set`], split into chunks of
    /// `KernelConfig::default().parallel_chunk_size` points evaluated on the
    /// rayon pool.
    fn level_set_par(&self, points: &[Vec3]) -> Vec<f64>
    where
        Self: Sync,
    {
        self.level_set_par_with(points, &KernelConfig::default())
    }

    /// [`Shape::level_set_par`] with an explicit chunk size.
    fn level_set_par_with(&self, points: &[Vec3], config: &KernelConfig) -> Vec<f64>
    where
        Self: Sync,
    {
        let chunk = config.parallel_chunk_size.max(1);
        trace!(points = points.len(), chunk, "parallel level-set evaluation");
        points
            .par_chunks(chunk)
            .flat_map_iter(|batch| self.level_set(batch))
            .collect()
    }

    /// Classifies every point as inside, on the boundary or outside, with
    /// the default [`KernelConfig::tolerance`] band around zero.
    fn classify(&self, points: &[Vec3]) -> Vec<Membership> {
        self.classify_with(points, &KernelConfig::default())
    }

    /// [`Shape::classify`] with an explicit tolerance band.
    fn classify_with(&self, points: &[Vec3], config: &KernelConfig) -> Vec<Membership> {
        classify(&self.level_set(points), config.tolerance)
    }
}

/// A 2D region in the `(h, v)` plane of some normal axis.
pub trait CrossSection {
    /// Level set over in-plane points, same sign convention as [`Shape`].
    fn level_set_2d(&self, points: &[Vec2]) -> Vec<f64>;

    /// Sound in-plane bound.
    fn bounds_2d(&self) -> Bounds2;
}
