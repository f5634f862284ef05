//! Centralized configuration values shared across the shape kernel.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Numerical tolerance used when classifying level-set samples.
///
/// A sample whose absolute value is at most this tolerance lies on the
/// boundary of its shape.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

// =============================================================================
// MESHER HINTS
// =============================================================================

/// Maximum cell size reported by shapes that carry no resolution hint.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_MAX_CELL_SIZE;
/// assert!(DEFAULT_MAX_CELL_SIZE > 1.0e300);
/// ```
pub const DEFAULT_MAX_CELL_SIZE: f64 = f64::INFINITY;

// =============================================================================
// PARALLELISM
// =============================================================================

/// Number of points handed to a single worker during parallel level-set
/// evaluation.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_PARALLEL_CHUNK_SIZE;
/// assert!(DEFAULT_PARALLEL_CHUNK_SIZE >= 64);
/// ```
pub const DEFAULT_PARALLEL_CHUNK_SIZE: usize = 4096;

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Boundary classification tolerance.
    pub tolerance: f64,
    /// Points per task when evaluating level sets in parallel.
    pub parallel_chunk_size: usize,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and chunk size.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 1024).expect("valid config");
    /// assert_eq!(cfg.parallel_chunk_size, 1024);
    /// ```
    pub fn new(tolerance: f64, parallel_chunk_size: usize) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if parallel_chunk_size == 0 {
            return Err(ConfigError::InvalidChunkSize(parallel_chunk_size));
        }
        Ok(Self {
            tolerance,
            parallel_chunk_size,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
            parallel_chunk_size: DEFAULT_PARALLEL_CHUNK_SIZE,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is negative, NaN or infinite.
    InvalidTolerance(f64),
    /// Raised when the parallel chunk size is zero.
    InvalidChunkSize(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be finite and non-negative: {value}")
            }
            ConfigError::InvalidChunkSize(value) => {
                write!(f, "parallel_chunk_size must be >= 1: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if a value lies within `tolerance` of zero.
///
/// # Example
///
/// ```rust
/// use config::constants::{within_tolerance, EPSILON_TOLERANCE};
///
/// assert!(within_tolerance(1e-12, EPSILON_TOLERANCE));
/// assert!(!within_tolerance(0.1, EPSILON_TOLERANCE));
/// ```
#[inline]
pub fn within_tolerance(value: f64, tolerance: f64) -> bool {
    value.abs() <= tolerance
}
