//! Implicit shape primitives for structured-grid electromagnetic meshing.
//!
//! Every shape exposes a batch level-set function (positive inside, negative
//! outside, zero on the boundary) and a sound axis-aligned bounding box, so a
//! grid generator can rasterize any shape without shape-specific code.
//!
//! ```rust
//! use em_shapes::{Axis, CircularShellCylinder, MaxCellSize, Shape, Vec3};
//!
//! let shell = CircularShellCylinder::new(Axis::Z, 100.0, [0.0, 0.0, 50.0], 100.0, 50.0, MaxCellSize::Unbounded)?;
//! let levels = shell.level_set(&[
//!     Vec3::new(0.0, 0.0, 50.0),
//!     Vec3::new(75.0, 0.0, 50.0),
//!     Vec3::new(150.0, 0.0, 50.0),
//! ]);
//! assert!(levels[0] <= 0.0 && levels[1] > 0.0 && levels[2] <= 0.0);
//! # Ok::<(), em_shapes::ShapeError>(())
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod shapes;

pub use crate::core::axis::Axis;
pub use crate::core::bounds::{BoundingBox, Bounds2};
pub use crate::core::cell_size::MaxCellSize;
pub use crate::core::level_set::Membership;
pub use crate::core::vec2::Vec2;
pub use crate::core::vec3::Vec3;
pub use error::{ShapeError, ShapeResult};
pub use shapes::*;
