//! Triangle type for the subdivision pipeline.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A triangle with concrete vertex positions.
///
/// Each triangle carries its own three positions; there is no shared vertex
/// table. Vertex order is significant: subdivision and blending depend on it
/// for deterministic output.
///
/// Edge `i` runs from vertex `i` to vertex `i + 1`, indices wrapping modulo
/// 3, and the vertex opposite edge `i` is vertex `i + 2`.
///
/// # Example
///
/// ```
/// use mesh_soup::{Point3, Triangle};
///
/// let tri = Triangle::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// );
///
/// // Area of a right triangle with legs 1 and 1
/// assert!((tri.area() - 0.5).abs() < 1e-10);
///
/// // The hypotenuse (edge 1, v1 -> v2) is the longest edge
/// assert_eq!(tri.longest_edge(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triangle {
    /// First vertex.
    pub v0: Point3<f64>,
    /// Second vertex.
    pub v1: Point3<f64>,
    /// Third vertex.
    pub v2: Point3<f64>,
}

impl Triangle {
    /// Create a new triangle from three points.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_soup::{Point3, Triangle};
    ///
    /// let tri = Triangle::new(
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(1.0, 0.0, 0.0),
    ///     Point3::new(0.0, 1.0, 0.0),
    /// );
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(v0: Point3<f64>, v1: Point3<f64>, v2: Point3<f64>) -> Self {
        Self { v0, v1, v2 }
    }

    /// Create a triangle from coordinate arrays.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_soup::Triangle;
    ///
    /// let tri = Triangle::from_arrays(
    ///     [0.0, 0.0, 0.0],
    ///     [1.0, 0.0, 0.0],
    ///     [0.0, 1.0, 0.0],
    /// );
    /// ```
    #[inline]
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Point3::new is not const in nalgebra
    pub fn from_arrays(v0: [f64; 3], v1: [f64; 3], v2: [f64; 3]) -> Self {
        Self {
            v0: Point3::new(v0[0], v0[1], v0[2]),
            v1: Point3::new(v1[0], v1[1], v1[2]),
            v2: Point3::new(v2[0], v2[1], v2[2]),
        }
    }

    /// Get vertices as an array.
    #[inline]
    #[must_use]
    pub const fn vertices(&self) -> [Point3<f64>; 3] {
        [self.v0, self.v1, self.v2]
    }

    /// Get a vertex by index, wrapping modulo 3.
    ///
    /// Wrapping makes edge arithmetic read naturally: the edge past the last
    /// vertex closes back to the first.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_soup::{Point3, Triangle};
    ///
    /// let tri = Triangle::new(
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(1.0, 0.0, 0.0),
    ///     Point3::new(0.0, 1.0, 0.0),
    /// );
    /// assert_eq!(tri.vertex(3), tri.v0);
    /// assert_eq!(tri.vertex(4), tri.v1);
    /// ```
    #[inline]
    #[must_use]
    pub const fn vertex(&self, index: usize) -> Point3<f64> {
        self.vertices()[index % 3]
    }

    /// Get the three edges as (start, end) pairs.
    ///
    /// Returns edges in order: v0→v1, v1→v2, v2→v0.
    #[must_use]
    pub const fn edges(&self) -> [(Point3<f64>, Point3<f64>); 3] {
        [(self.v0, self.v1), (self.v1, self.v2), (self.v2, self.v0)]
    }

    /// Compute the lengths of the three edges.
    ///
    /// Returns `[len01, len12, len20]` where `lenXY` is the distance from vX to vY.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_soup::{Point3, Triangle};
    ///
    /// // 3-4-5 right triangle
    /// let tri = Triangle::new(
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(3.0, 0.0, 0.0),
    ///     Point3::new(0.0, 4.0, 0.0),
    /// );
    /// let lengths = tri.edge_lengths();
    /// assert!((lengths[0] - 3.0).abs() < 1e-10);  // v0 -> v1
    /// assert!((lengths[1] - 5.0).abs() < 1e-10);  // v1 -> v2 (hypotenuse)
    /// assert!((lengths[2] - 4.0).abs() < 1e-10);  // v2 -> v0
    /// ```
    #[inline]
    #[must_use]
    pub fn edge_lengths(&self) -> [f64; 3] {
        [
            (self.v1 - self.v0).norm(),
            (self.v2 - self.v1).norm(),
            (self.v0 - self.v2).norm(),
        ]
    }

    /// Find the index of the longest edge.
    ///
    /// Ties keep the earliest maximum: comparison is strict, so an edge only
    /// displaces the current winner when it is strictly longer. Splitting
    /// relies on this for reproducible output on symmetric triangles.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_soup::{Point3, Triangle};
    ///
    /// // Isoceles: edges 1 and 2 share the maximum length, edge 1 wins
    /// let tri = Triangle::new(
    ///     Point3::new(-0.5, 0.0, 0.0),
    ///     Point3::new(0.5, 0.0, 0.0),
    ///     Point3::new(0.0, 1.0, 0.0),
    /// );
    /// assert_eq!(tri.longest_edge(), 1);
    /// ```
    #[must_use]
    pub fn longest_edge(&self) -> usize {
        let lengths = self.edge_lengths();
        let mut longest = 0;
        for (i, len) in lengths.iter().enumerate().skip(1) {
            if *len > lengths[longest] {
                longest = i;
            }
        }
        longest
    }

    /// Compute the (unnormalized) face normal via cross product.
    ///
    /// The magnitude equals twice the triangle's area.
    #[inline]
    #[must_use]
    pub fn normal_unnormalized(&self) -> Vector3<f64> {
        let e1 = self.v1 - self.v0;
        let e2 = self.v2 - self.v0;
        e1.cross(&e2)
    }

    /// Compute the area of the triangle.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_soup::{Point3, Triangle};
    ///
    /// // Right triangle with legs 3 and 4
    /// let tri = Triangle::new(
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(3.0, 0.0, 0.0),
    ///     Point3::new(0.0, 4.0, 0.0),
    /// );
    /// assert!((tri.area() - 6.0).abs() < 1e-10);
    /// ```
    #[inline]
    #[must_use]
    pub fn area(&self) -> f64 {
        self.normal_unnormalized().norm() * 0.5
    }

    /// Coordinates in flat-buffer order: v0, v1, v2, each as x, y, z.
    #[inline]
    #[must_use]
    pub fn to_flat(&self) -> [f64; 9] {
        [
            self.v0.x, self.v0.y, self.v0.z, self.v1.x, self.v1.y, self.v1.z, self.v2.x, self.v2.y,
            self.v2.z,
        ]
    }
}
