//! # Config Crate
//!
//! Centralized configuration constants for the shape kernel.
//! All magic numbers and tunable parameters are defined here so that
//! tolerances and batch sizes stay consistent across crates.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON_TOLERANCE, DEFAULT_MAX_CELL_SIZE};
//!
//! // Use EPSILON_TOLERANCE for boundary classification
//! let value: f64 = 1e-12;
//! assert!(value.abs() <= EPSILON_TOLERANCE);
//!
//! // Shapes without a resolution hint report an unbounded cell size
//! assert!(DEFAULT_MAX_CELL_SIZE.is_infinite());
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Dependency Free**: Pure std, usable from any crate in the workspace
//! - **Validated Snapshots**: `GlobalConfig` can only be built from sane values

pub mod constants;
