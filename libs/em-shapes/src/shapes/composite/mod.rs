//! Tagged shape variant and boolean combinations.
//!
//! [`ShapeKind`] lets a scene hold heterogeneous shapes by value and dispatch
//! once per batch. [`Union`] and [`Intersection`] combine two shapes through
//! `max` and `min` of their level sets; [`Difference`] intersects the first
//! with the complement of the second.

use serde::{Deserialize, Serialize};

use crate::core::bounds::BoundingBox;
use crate::core::cell_size::MaxCellSize;
use crate::core::level_set;
use crate::core::vec3::Vec3;
use crate::shapes::{CircularCylinder, CircularShellCylinder, Shape};

/// Every shape the kernel knows about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Solid circular cylinder.
    CircularCylinder(CircularCylinder),
    /// Hollow circular cylinder.
    CircularShellCylinder(CircularShellCylinder),
    /// Union of two shapes.
    Union(Union),
    /// Intersection of two shapes.
    Intersection(Intersection),
    /// First shape with the second carved out.
    Difference(Difference),
}

impl ShapeKind {
    /// Union of `self` and `other`.
    pub fn union(self, other: impl Into<ShapeKind>) -> ShapeKind {
        ShapeKind::Union(Union::new(self, other.into()))
    }

    /// Intersection of `self` and `other`.
    pub fn intersection(self, other: impl Into<ShapeKind>) -> ShapeKind {
        ShapeKind::Intersection(Intersection::new(self, other.into()))
    }

    /// `self` with `other` removed.
    pub fn difference(self, other: impl Into<ShapeKind>) -> ShapeKind {
        ShapeKind::Difference(Difference::new(self, other.into()))
    }
}

impl Shape for ShapeKind {
    fn level_set(&self, points: &[Vec3]) -> Vec<f64> {
        match self {
            ShapeKind::CircularCylinder(s) => s.level_set(points),
            ShapeKind::CircularShellCylinder(s) => s.level_set(points),
            ShapeKind::Union(s) => s.level_set(points),
            ShapeKind::Intersection(s) => s.level_set(points),
            ShapeKind::Difference(s) => s.level_set(points),
        }
    }

    fn bounding_box(&self) -> BoundingBox {
        match self {
            ShapeKind::CircularCylinder(s) => s.bounding_box(),
            ShapeKind::CircularShellCylinder(s) => s.bounding_box(),
            ShapeKind::Union(s) => s.bounding_box(),
            ShapeKind::Intersection(s) => s.bounding_box(),
            ShapeKind::Difference(s) => s.bounding_box(),
        }
    }

    fn max_cell_size(&self) -> [f64; 3] {
        match self {
            ShapeKind::CircularCylinder(s) => s.max_cell_size(),
            ShapeKind::CircularShellCylinder(s) => s.max_cell_size(),
            ShapeKind::Union(s) => s.max_cell_size(),
            ShapeKind::Intersection(s) => s.max_cell_size(),
            ShapeKind::Difference(s) => s.max_cell_size(),
        }
    }
}

impl From<CircularCylinder> for ShapeKind {
    fn from(shape: CircularCylinder) -> Self {
        ShapeKind::CircularCylinder(shape)
    }
}

impl From<CircularShellCylinder> for ShapeKind {
    fn from(shape: CircularShellCylinder) -> Self {
        ShapeKind::CircularShellCylinder(shape)
    }
}

/// Points inside either operand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Union {
    /// First operand.
    pub a: Box<ShapeKind>,
    /// Second operand.
    pub b: Box<ShapeKind>,
}

impl Union {
    /// Combines two shapes.
    pub fn new(a: ShapeKind, b: ShapeKind) -> Self {
        Self {
            a: Box::new(a),
            b: Box::new(b),
        }
    }
}

impl Shape for Union {
    fn level_set(&self, points: &[Vec3]) -> Vec<f64> {
        level_set::union(&self.a.level_set(points), &self.b.level_set(points))
    }

    fn bounding_box(&self) -> BoundingBox {
        self.a.bounding_box().union(&self.b.bounding_box())
    }

    fn max_cell_size(&self) -> [f64; 3] {
        MaxCellSize::tightest(self.a.max_cell_size(), self.b.max_cell_size())
    }
}

/// Points inside both operands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intersection {
    /// First operand.
    pub a: Box<ShapeKind>,
    /// Second operand.
    pub b: Box<ShapeKind>,
}

impl Intersection {
    /// Combines two shapes.
    pub fn new(a: ShapeKind, b: ShapeKind) -> Self {
        Self {
            a: Box::new(a),
            b: Box::new(b),
        }
    }
}

impl Shape for Intersection {
    fn level_set(&self, points: &[Vec3]) -> Vec<f64> {
        level_set::intersection(&self.a.level_set(points), &self.b.level_set(points))
    }

    // Disjoint operands yield an empty box; the level set is non-positive
    // everywhere in that case, so soundness holds.
    fn bounding_box(&self) -> BoundingBox {
        self.a.bounding_box().intersection(&self.b.bounding_box())
    }

    fn max_cell_size(&self) -> [f64; 3] {
        MaxCellSize::tightest(self.a.max_cell_size(), self.b.max_cell_size())
    }
}

/// Points inside the first operand and outside the second.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Difference {
    /// Shape being carved.
    pub a: Box<ShapeKind>,
    /// Shape removed from `a`.
    pub b: Box<ShapeKind>,
}

impl Difference {
    /// Removes `b` from `a`.
    pub fn new(a: ShapeKind, b: ShapeKind) -> Self {
        Self {
            a: Box::new(a),
            b: Box::new(b),
        }
    }
}

impl Shape for Difference {
    fn level_set(&self, points: &[Vec3]) -> Vec<f64> {
        level_set::difference(&self.a.level_set(points), &self.b.level_set(points))
    }

    // Carving never grows the region.
    fn bounding_box(&self) -> BoundingBox {
        self.a.bounding_box()
    }

    fn max_cell_size(&self) -> [f64; 3] {
        MaxCellSize::tightest(self.a.max_cell_size(), self.b.max_cell_size())
    }
}
