//! Kernel-level configuration helpers building on the shared `config` crate.
//!
//! The module re-exports the workspace configuration so shape evaluation can
//! stay decoupled from literal constants.

use thiserror::Error;

use config::constants::{ConfigError, GlobalConfig, DEFAULT_PARALLEL_CHUNK_SIZE, EPSILON_TOLERANCE};

/// Shape kernel configuration wrapper.
///
/// # Examples
/// ```
/// use em_shapes::config::KernelConfig;
/// let cfg = KernelConfig::default();
/// assert!(cfg.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelConfig {
    /// Boundary classification tolerance.
    pub tolerance: f64,
    /// Points per rayon task in [`crate::Shape::level_set_par`].
    pub parallel_chunk_size: usize,
}

impl KernelConfig {
    /// Creates a new configuration from explicit values.
    ///
    /// # Examples
    /// ```
    /// use em_shapes::config::KernelConfig;
    /// let cfg = KernelConfig::new(1.0e-8, 512).unwrap();
    /// assert_eq!(cfg.parallel_chunk_size, 512);
    /// ```
    pub fn new(tolerance: f64, parallel_chunk_size: usize) -> Result<Self, KernelConfigError> {
        GlobalConfig::new(tolerance, parallel_chunk_size)
            .map(Self::from)
            .map_err(KernelConfigError::from)
    }
}

impl From<GlobalConfig> for KernelConfig {
    fn from(cfg: GlobalConfig) -> Self {
        Self {
            tolerance: cfg.tolerance,
            parallel_chunk_size: cfg.parallel_chunk_size,
        }
    }
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
            parallel_chunk_size: DEFAULT_PARALLEL_CHUNK_SIZE,
        }
    }
}

/// Error wrapper for invalid kernel configuration.
#[derive(Debug, PartialEq, Error)]
#[error(transparent)]
pub struct KernelConfigError(#[from] ConfigError);

#[cfg(test)]
mod tests;
