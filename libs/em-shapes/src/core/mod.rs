//! Core data structures and types for the shape kernel.
//!
//! Includes vector aliases (`Vec3`, `Vec2`), the coordinate `Axis`, bounding
//! boxes, level-set algebra and argument validation.

pub mod axis;
pub mod bounds;
pub mod cell_size;
pub mod level_set;
pub mod validate;
pub mod vec2;
pub mod vec3;
