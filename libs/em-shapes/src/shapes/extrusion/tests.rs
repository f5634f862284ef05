use super::*;
use crate::core::bounds::Bounds2;
use crate::core::vec2::Vec2;

/// Axis-aligned square `|h| < half, |v| < half` with a Chebyshev level set.
struct Square {
    half: f64,
}

impl CrossSection for Square {
    fn level_set_2d(&self, points: &[Vec2]) -> Vec<f64> {
        points
            .iter()
            .map(|p| self.half - p.x.abs().max(p.y.abs()))
            .collect()
    }

    fn bounds_2d(&self) -> Bounds2 {
        Bounds2::centered(Vec2::ZERO, self.half)
    }
}

fn column(axis: Axis) -> Extrusion<Square> {
    Extrusion::new(axis, 4.0, Vec3::new(10.0, 20.0, 30.0), Square { half: 1.0 })
        .expect("valid extrusion")
}

#[test]
fn test_axial_level_positive_between_caps() {
    let e = column(Axis::Z);
    assert_eq!(e.axial_level(Vec3::new(0.0, 0.0, 30.0)), 2.0);
    assert_eq!(e.axial_level(Vec3::new(0.0, 0.0, 32.0)), 0.0);
    assert_eq!(e.axial_level(Vec3::new(0.0, 0.0, 27.0)), -1.0);
}

#[test]
fn test_level_set_is_min_of_section_and_axial() {
    let e = column(Axis::Z);
    // section level 0.5, axial level 2 -> 0.5
    assert_eq!(e.level_set(&[Vec3::new(0.5, 0.0, 30.0)]), vec![0.5]);
    // section level 1, axial level 0.5 -> 0.5
    assert_eq!(e.level_set(&[Vec3::new(0.0, 0.0, 31.5)]), vec![0.5]);
    // outside laterally
    assert!(e.level_set(&[Vec3::new(3.0, 0.0, 30.0)])[0] < 0.0);
}

#[test]
fn test_section_sees_in_plane_coordinates() {
    // Normal X: section plane is (y, z); the x coordinate only feeds the
    // axial test.
    let e = column(Axis::X);
    let inside = Vec3::new(10.0, 0.5, -0.5);
    let outside = Vec3::new(10.0, 0.0, 1.5);
    assert!(e.level_set_at(inside) > 0.0);
    assert!(e.level_set_at(outside) < 0.0);
}

#[test]
fn test_bounding_box_combines_plane_and_axial() {
    let bb = column(Axis::Y).bounding_box();
    // normal Y: h = Z, v = X
    assert_eq!(bb.interval(Axis::Y), [18.0, 22.0]);
    assert_eq!(bb.interval(Axis::Z), [-1.0, 1.0]);
    assert_eq!(bb.interval(Axis::X), [-1.0, 1.0]);
}

#[test]
fn test_rejects_bad_height_and_center() {
    assert!(Extrusion::new(Axis::Z, 0.0, Vec3::ZERO, Square { half: 1.0 }).is_err());
    assert!(Extrusion::new(Axis::Z, -2.0, Vec3::ZERO, Square { half: 1.0 }).is_err());
    assert!(Extrusion::new(Axis::Z, 1.0, Vec3::new(f64::NAN, 0.0, 0.0), Square { half: 1.0 }).is_err());
}

#[test]
fn test_accessors() {
    let e = column(Axis::X);
    assert_eq!(e.normal_axis(), Axis::X);
    assert_eq!(e.height(), 4.0);
    assert_eq!(e.axial_center(), 10.0);
    assert_eq!(e.section().half, 1.0);
}
