//! Tests for axis ordering, cyclic permutation and projection.

use super::*;

#[test]
fn cycle_is_rotation_of_xyz() {
    let xyz = [Axis::X, Axis::Y, Axis::Z];
    for normal in Axis::ALL {
        let (h, v, n) = Axis::cycle(normal);
        assert_eq!(n, normal);
        // (n, h, v) must appear as a rotation of (X, Y, Z)
        let start = n.index();
        assert_eq!(h, xyz[(start + 1) % 3]);
        assert_eq!(v, xyz[(start + 2) % 3]);
    }
}

#[test]
fn cycle_axes_are_distinct() {
    for normal in Axis::ALL {
        let (h, v, n) = Axis::cycle(normal);
        assert_ne!(h, v);
        assert_ne!(h, n);
        assert_ne!(v, n);
    }
}

#[test]
fn successor_wraps_around() {
    assert_eq!(Axis::X.next(), Axis::Y);
    assert_eq!(Axis::Y.next(), Axis::Z);
    assert_eq!(Axis::Z.next(), Axis::X);
}

#[test]
fn fixed_total_order() {
    assert!(Axis::X < Axis::Y);
    assert!(Axis::Y < Axis::Z);
}

#[test]
fn project_unproject_round_trips() {
    let points = [
        Vec3::new(1.0, 2.0, 3.0),
        Vec3::new(-4.5, 0.0, 1e6),
        Vec3::new(0.0, -7.25, -0.5),
    ];
    for axis in Axis::ALL {
        for &p in &points {
            let hv = axis.project(p);
            let back = axis.unproject(hv, axis.component(p));
            assert_eq!(back, p, "axis {axis} mislabeled a coordinate");
        }
    }
}

#[test]
fn project_all_preserves_order() {
    let pts = vec![Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)];
    let hv = Axis::Y.project_all(&pts);
    assert_eq!(hv, vec![Vec2::new(3.0, 1.0), Vec2::new(6.0, 4.0)]);
}

#[test]
fn parse_valid_axes() {
    assert_eq!("x".parse::<Axis>().expect("x parses"), Axis::X);
    assert_eq!(" Y ".parse::<Axis>().expect("Y parses"), Axis::Y);
    assert_eq!(Axis::try_from('z').expect("z converts"), Axis::Z);
    assert_eq!(Axis::try_from(2usize).expect("2 converts"), Axis::Z);
}

#[test]
fn parse_rejects_invalid_axes() {
    assert!("w".parse::<Axis>().is_err());
    assert!("xy".parse::<Axis>().is_err());
    assert!("".parse::<Axis>().is_err());
    assert!(Axis::try_from(3usize).is_err());
    let err = Axis::try_from('q').unwrap_err();
    assert!(err.to_string().contains("normal_axis"));
}

#[test]
fn display_is_lowercase_name() {
    assert_eq!(Axis::X.to_string(), "x");
    assert_eq!(Axis::Z.to_string(), "z");
}
