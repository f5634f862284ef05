use super::*;

#[test]
fn positive_rejects_zero_negative_and_nan() {
    for bad in [0.0, -1.0, f64::NAN, f64::NEG_INFINITY, f64::INFINITY] {
        assert!(positive("radius", bad).is_err(), "{bad} accepted");
    }
}

#[test]
fn positive_error_names_argument() {
    let err = positive("r1", -5.0).unwrap_err();
    assert_eq!(
        err,
        ShapeError::InvalidArgument {
            argument: "r1".to_string(),
            message: "must be positive, got -5".to_string(),
        }
    );
}

#[test]
fn finite_point_rejects_nan_component() {
    assert!(finite_point("center", Vec3::new(0.0, f64::NAN, 0.0)).is_err());
    assert!(finite_point("center", Vec3::new(0.0, 0.0, f64::INFINITY)).is_err());
    assert!(finite_point("center", Vec3::new(1.0, 2.0, 3.0)).is_ok());
}

#[test]
fn unbounded_accepts_infinity_only_upwards() {
    assert!(positive_or_unbounded("max_cell_size", f64::INFINITY).is_ok());
    assert!(positive_or_unbounded("max_cell_size", 0.5).is_ok());
    assert!(positive_or_unbounded("max_cell_size", 0.0).is_err());
    assert!(positive_or_unbounded("max_cell_size", f64::NAN).is_err());
}

#[test]
fn finite_plane_point_rejects_nan() {
    assert!(finite_plane_point("center", Vec2::new(f64::NAN, 0.0)).is_err());
    assert!(finite_plane_point("center", Vec2::new(1.0, -1.0)).is_ok());
}
