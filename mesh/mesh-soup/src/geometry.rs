//! Point-level helpers shared across the pipeline.

use nalgebra::Point3;

use crate::soup::COORDS_PER_POINT;

/// Euclidean distance between two points.
///
/// # Example
///
/// ```
/// use mesh_soup::{distance, Point3};
///
/// let a = Point3::new(0.0, 0.0, 0.0);
/// let b = Point3::new(3.0, 4.0, 0.0);
/// assert!((distance(&a, &b) - 5.0).abs() < 1e-10);
/// ```
#[inline]
#[must_use]
pub fn distance(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    (b - a).norm()
}

/// Component-wise midpoint of two points.
///
/// # Example
///
/// ```
/// use mesh_soup::{midpoint, Point3};
///
/// let a = Point3::new(0.0, 0.0, 0.0);
/// let b = Point3::new(2.0, 4.0, -6.0);
/// let m = midpoint(&a, &b);
/// assert!((m.x - 1.0).abs() < 1e-10);
/// assert!((m.y - 2.0).abs() < 1e-10);
/// assert!((m.z + 3.0).abs() < 1e-10);
/// ```
#[inline]
#[must_use]
pub fn midpoint(a: &Point3<f64>, b: &Point3<f64>) -> Point3<f64> {
    Point3::new(
        f64::midpoint(a.x, b.x),
        f64::midpoint(a.y, b.y),
        f64::midpoint(a.z, b.z),
    )
}

/// Extract the `index`-th point from a flat coordinate list.
///
/// Points occupy 3 coordinates each, so point `i` reads coordinates
/// `3i..3i + 3`. Returns `None` when the buffer holds fewer than `index + 1`
/// whole points.
///
/// # Example
///
/// ```
/// use mesh_soup::{point_at, Point3};
///
/// let coords = [0.0, 0.0, 0.0, 1.0, 2.0, 3.0];
/// assert_eq!(point_at(&coords, 1), Some(Point3::new(1.0, 2.0, 3.0)));
/// assert_eq!(point_at(&coords, 2), None);
/// ```
#[must_use]
pub fn point_at(coords: &[f64], index: usize) -> Option<Point3<f64>> {
    let start = index.checked_mul(COORDS_PER_POINT)?;
    let end = start.checked_add(COORDS_PER_POINT)?;
    let chunk = coords.get(start..end)?;
    Some(Point3::new(chunk[0], chunk[1], chunk[2]))
}
