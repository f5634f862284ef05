//! Advisory grid-resolution hint carried by every shape.
//!
//! The shape kernel never reads it; the grid generator uses it to cap the
//! cell size around a shape.

use serde::{Deserialize, Serialize};

use crate::core::validate::positive_or_unbounded;
use crate::error::ShapeResult;
use config::constants::DEFAULT_MAX_CELL_SIZE;

/// Maximum cell size, either uniform or per axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum MaxCellSize {
    /// No limit on any axis.
    #[default]
    Unbounded,
    /// Same limit on every axis.
    Uniform(f64),
    /// Individual limits in `x, y, z` order.
    PerAxis([f64; 3]),
}

impl MaxCellSize {
    /// Per-axis limits in `x, y, z` order.
    ///
    /// # Examples
    /// ```
    /// use em_shapes::MaxCellSize;
    /// assert_eq!(MaxCellSize::Uniform(0.5).to_array(), [0.5; 3]);
    /// assert!(MaxCellSize::Unbounded.to_array().iter().all(|v| v.is_infinite()));
    /// ```
    pub fn to_array(self) -> [f64; 3] {
        match self {
            MaxCellSize::Unbounded => [DEFAULT_MAX_CELL_SIZE; 3],
            MaxCellSize::Uniform(size) => [size; 3],
            MaxCellSize::PerAxis(sizes) => sizes,
        }
    }

    /// Checks every component is positive (or `+∞`).
    pub fn validated(self) -> ShapeResult<Self> {
        for size in self.to_array() {
            positive_or_unbounded("max_cell_size", size)?;
        }
        Ok(self)
    }

    /// Per-axis minimum of two hints, used when shapes are combined.
    pub fn tightest(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
        [a[0].min(b[0]), a[1].min(b[1]), a[2].min(b[2])]
    }
}

impl From<f64> for MaxCellSize {
    fn from(size: f64) -> Self {
        MaxCellSize::Uniform(size)
    }
}

impl From<[f64; 3]> for MaxCellSize {
    fn from(sizes: [f64; 3]) -> Self {
        MaxCellSize::PerAxis(sizes)
    }
}
