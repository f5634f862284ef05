//! Thin wrapper around `glam::DVec3` shared across kernel modules.
//!
//! Point batches handed over by a grid generator often arrive as flat
//! coordinate buffers; the helpers here turn them into `Vec3` slices while
//! rejecting malformed input.

use crate::error::{ShapeError, ShapeResult};

pub use glam::DVec3 as Vec3;

/// Converts a flat `[x0, y0, z0, x1, y1, z1, ...]` buffer into points.
///
/// Fails when the buffer length is not a multiple of three, i.e. when the
/// point array does not have exactly three columns.
///
/// # Examples
/// ```
/// use em_shapes::core::vec3::{points_from_flat, Vec3};
/// let pts = points_from_flat(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
/// assert_eq!(pts, vec![Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)]);
/// assert!(points_from_flat(&[1.0, 2.0]).is_err());
/// ```
pub fn points_from_flat(coords: &[f64]) -> ShapeResult<Vec<Vec3>> {
    if coords.len() % 3 != 0 {
        return Err(ShapeError::invalid_argument(
            "points",
            format!(
                "flat point buffer must hold 3 columns per point, got {} values",
                coords.len()
            ),
        ));
    }
    Ok(coords
        .chunks_exact(3)
        .map(|c| Vec3::new(c[0], c[1], c[2]))
        .collect())
}

/// Converts rows of arbitrary width into points, rejecting rows that are not
/// exactly three wide.
///
/// # Examples
/// ```
/// use em_shapes::core::vec3::points_from_rows;
/// let rows = vec![vec![0.0, 1.0, 2.0]];
/// assert_eq!(points_from_rows(&rows).unwrap().len(), 1);
/// assert!(points_from_rows(&[vec![0.0, 1.0]]).is_err());
/// ```
pub fn points_from_rows<R: AsRef<[f64]>>(rows: &[R]) -> ShapeResult<Vec<Vec3>> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| match row.as_ref() {
            [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
            other => Err(ShapeError::invalid_argument(
                "points",
                format!("row {i} has {} columns, expected 3", other.len()),
            )),
        })
        .collect()
}

/// Builds a center point from a slice, requiring exactly three components.
///
/// # Examples
/// ```
/// use em_shapes::core::vec3::{center_from_slice, Vec3};
/// assert_eq!(center_from_slice(&[1.0, 2.0, 3.0]).unwrap(), Vec3::new(1.0, 2.0, 3.0));
/// assert!(center_from_slice(&[1.0, 2.0]).is_err());
/// ```
pub fn center_from_slice(values: &[f64]) -> ShapeResult<Vec3> {
    match values {
        [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
        _ => Err(ShapeError::invalid_argument(
            "center",
            format!("expected 3 components, got {}", values.len()),
        )),
    }
}
