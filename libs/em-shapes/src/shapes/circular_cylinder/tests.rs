use super::*;
use approx::assert_abs_diff_eq;

fn rod() -> CircularCylinder {
    CircularCylinder::new(Axis::Z, 10.0, [1.0, 2.0, 5.0], 2.0, MaxCellSize::Unbounded)
        .expect("valid cylinder")
}

#[test]
fn test_disk_level() {
    let disk = Disk::new(Vec2::new(1.0, 1.0), 2.0).expect("valid disk");
    assert_abs_diff_eq!(disk.level(Vec2::new(1.0, 1.0)), 1.0);
    assert_abs_diff_eq!(disk.level(Vec2::new(3.0, 1.0)), 0.0);
    assert_abs_diff_eq!(disk.level(Vec2::new(5.0, 1.0)), -1.0);
}

#[test]
fn test_cylinder_inside_outside() {
    let c = rod();
    let levels = c.level_set(&[
        Vec3::new(1.0, 2.0, 5.0),
        Vec3::new(2.0, 2.0, 9.0),
        Vec3::new(4.0, 2.0, 5.0),
        Vec3::new(1.0, 2.0, 11.0),
    ]);
    assert!(levels[0] > 0.0);
    assert!(levels[1] > 0.0);
    assert!(levels[2] < 0.0);
    assert!(levels[3] < 0.0);
}

#[test]
fn test_cylinder_bounding_box() {
    assert_eq!(
        rod().bounding_box().as_array(),
        [[-1.0, 3.0], [0.0, 4.0], [0.0, 10.0]]
    );
}

#[test]
fn test_cylinder_along_x() {
    let c = CircularCylinder::new(Axis::X, 4.0, [0.0, 0.0, 0.0], 1.0, 0.25).expect("valid");
    assert!(c.level_set_at(Vec3::new(1.9, 0.5, 0.5)) > 0.0);
    assert!(c.level_set_at(Vec3::new(0.0, 0.0, 1.5)) < 0.0);
    assert_eq!(c.bounding_box().interval(Axis::X), [-2.0, 2.0]);
    assert_eq!(c.max_cell_size(), [0.25; 3]);
}

#[test]
fn test_cylinder_accessors() {
    let c = rod();
    assert_eq!(c.normal_axis(), Axis::Z);
    assert_eq!(c.height(), 10.0);
    assert_eq!(c.center(), Vec3::new(1.0, 2.0, 5.0));
    assert_eq!(c.radius(), 2.0);
}

#[test]
fn test_cylinder_rejects_invalid_arguments() {
    let bad_radius = CircularCylinder::new(Axis::Z, 1.0, [0.0; 3], 0.0, MaxCellSize::Unbounded);
    assert!(matches!(bad_radius, Err(crate::ShapeError::InvalidArgument { ref argument, .. }) if argument == "radius"));
    assert!(CircularCylinder::new(Axis::Z, -1.0, [0.0; 3], 1.0, MaxCellSize::Unbounded).is_err());
    assert!(CircularCylinder::new(Axis::Z, 1.0, [0.0, f64::NAN, 0.0], 1.0, MaxCellSize::Unbounded).is_err());
    assert!(CircularCylinder::new(Axis::Z, 1.0, [0.0; 3], 1.0, [1.0, 0.0, 1.0]).is_err());
}

#[test]
fn test_disk_rejects_invalid_arguments() {
    assert!(Disk::new(Vec2::ZERO, 0.0).is_err());
    assert!(Disk::new(Vec2::ZERO, f64::INFINITY).is_err());
    assert!(Disk::new(Vec2::new(0.0, f64::NAN), 1.0).is_err());
    let disk = Disk::new(Vec2::new(1.0, -1.0), 0.5).expect("valid disk");
    assert_eq!((disk.center(), disk.radius()), (Vec2::new(1.0, -1.0), 0.5));
}

#[test]
fn test_cylinder_nan_point_is_not_inside() {
    assert!(rod().level_set_at(Vec3::new(f64::NAN, 2.0, 5.0)).is_nan());
    assert!(rod().level_set_at(Vec3::new(1.0, 2.0, f64::NAN)).is_nan());
}

#[test]
fn test_cylinder_serde_round_trip() {
    let c = CircularCylinder::new(Axis::Y, 3.0, [1.0, -2.0, 0.5], 0.75, 0.125).expect("valid");
    let json = serde_json::to_string(&c).expect("serialize");
    let back: CircularCylinder = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, c);
}

#[test]
fn test_cylinder_deserialize_validates() {
    let ok = r#"{"normal_axis":"z","height":10.0,"center":[1.0,2.0,5.0],"radius":2.0}"#;
    assert_eq!(serde_json::from_str::<CircularCylinder>(ok).expect("valid"), rod());

    let bad = r#"{"normal_axis":"z","height":10.0,"center":[1.0,2.0,5.0],"radius":-2.0}"#;
    let err = serde_json::from_str::<CircularCylinder>(bad).expect_err("negative radius");
    assert!(err.to_string().contains("Invalid argument 'radius'"), "{err}");
}
