//! Tests covering kernel configuration behavior.

use super::*;

#[test]
fn default_matches_constants() {
    let cfg = KernelConfig::default();
    assert_eq!(cfg.tolerance, EPSILON_TOLERANCE);
    assert_eq!(cfg.parallel_chunk_size, DEFAULT_PARALLEL_CHUNK_SIZE);
}

#[test]
fn default_matches_global_default() {
    assert_eq!(KernelConfig::default(), KernelConfig::from(GlobalConfig::default()));
}

#[test]
fn builder_validates_input() {
    let err = KernelConfig::new(1.0e-9, 0).unwrap_err();
    assert_eq!(err, KernelConfigError(ConfigError::InvalidChunkSize(0)));
    assert!(err.to_string().contains("parallel_chunk_size"));
}

#[test]
fn error_is_transparent_over_config_error() {
    let err = KernelConfigError::from(ConfigError::InvalidTolerance(f64::INFINITY));
    assert_eq!(err.to_string(), ConfigError::InvalidTolerance(f64::INFINITY).to_string());
    assert!(KernelConfig::new(-1.0, 8).is_err());
}
