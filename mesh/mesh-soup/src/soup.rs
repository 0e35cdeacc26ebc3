//! Ordered triangle collections and the flat-buffer codec.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{SoupError, SoupResult};
use crate::triangle::Triangle;

/// Number of coordinates that encode one point in a flat buffer.
pub const COORDS_PER_POINT: usize = 3;

/// Number of coordinates that encode one triangle in a flat buffer.
pub const COORDS_PER_TRIANGLE: usize = 9;

/// An ordered collection of triangles with no shared vertices.
///
/// Every operation in the pipeline preserves construction order, so the flat
/// buffer produced by [`to_flat`](Self::to_flat) is deterministic for a given
/// input.
///
/// # Example
///
/// ```
/// use mesh_soup::TriangleSoup;
///
/// let flat = [
///     0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, // triangle 0
///     1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0, // triangle 1
/// ];
/// let soup = TriangleSoup::from_flat(&flat)?;
///
/// assert_eq!(soup.len(), 2);
/// assert!((soup.total_area() - 1.0).abs() < 1e-10);
/// assert_eq!(soup.to_flat(), flat);
/// # Ok::<(), mesh_soup::SoupError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TriangleSoup {
    /// Triangles in construction order.
    pub triangles: Vec<Triangle>,
}

impl TriangleSoup {
    /// Create an empty soup.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    /// Create an empty soup with room for `capacity` triangles.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity),
        }
    }

    /// Wrap an existing triangle list.
    #[inline]
    #[must_use]
    pub const fn from_triangles(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    /// Decode a flat coordinate buffer, strictly.
    ///
    /// The buffer must hold a whole number of triangles: 9 coordinates each,
    /// in v0 x, y, z through v2 x, y, z order.
    ///
    /// # Errors
    ///
    /// Returns [`SoupError::RaggedBuffer`] when the length is not a multiple
    /// of 3, and [`SoupError::PartialTriangle`] when it is a multiple of 3
    /// but not of 9 (whole points left over after the last whole triangle).
    pub fn from_flat(coords: &[f64]) -> SoupResult<Self> {
        let leftover = Self::check_points(coords)?;
        if leftover != 0 {
            return Err(SoupError::PartialTriangle {
                len: coords.len(),
                leftover,
            });
        }
        Ok(Self::decode_whole(coords))
    }

    /// Decode a flat coordinate buffer, dropping a partial trailing triangle.
    ///
    /// One or two whole points past the last whole triangle are discarded.
    /// Some hosts stream meshes in arbitrary slices and rely on this.
    ///
    /// # Errors
    ///
    /// Returns [`SoupError::RaggedBuffer`] when the length is not a multiple
    /// of 3; a partial point is malformed input, not a partial triangle.
    pub fn from_flat_lossy(coords: &[f64]) -> SoupResult<Self> {
        Self::check_points(coords)?;
        Ok(Self::decode_whole(coords))
    }

    /// Verify the buffer holds whole points; returns spare coordinates past
    /// the last whole triangle.
    fn check_points(coords: &[f64]) -> SoupResult<usize> {
        if coords.len() % COORDS_PER_POINT != 0 {
            return Err(SoupError::RaggedBuffer { len: coords.len() });
        }
        Ok(coords.len() % COORDS_PER_TRIANGLE)
    }

    fn decode_whole(coords: &[f64]) -> Self {
        let triangles = coords
            .chunks_exact(COORDS_PER_TRIANGLE)
            .map(|c| {
                Triangle::from_arrays([c[0], c[1], c[2]], [c[3], c[4], c[5]], [c[6], c[7], c[8]])
            })
            .collect();
        Self { triangles }
    }

    /// Number of triangles.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Check if the soup holds no triangles.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Iterate over the triangles in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Triangle> {
        self.triangles.iter()
    }

    /// Append a triangle.
    #[inline]
    pub fn push(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Sum of all triangle areas.
    #[must_use]
    pub fn total_area(&self) -> f64 {
        self.triangles.iter().map(Triangle::area).sum()
    }

    /// Encode to a flat coordinate buffer: 9 coordinates per triangle, in
    /// soup order.
    #[must_use]
    pub fn to_flat(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.len() * COORDS_PER_TRIANGLE);
        self.write_flat(&mut out);
        out
    }

    /// Append this soup's flat encoding to `out`.
    pub fn write_flat(&self, out: &mut Vec<f64>) {
        out.reserve(self.len() * COORDS_PER_TRIANGLE);
        for tri in &self.triangles {
            out.extend_from_slice(&tri.to_flat());
        }
    }

    /// Encode to a 32-bit flat buffer for graphics upload.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_flat_f32(&self) -> Vec<f32> {
        self.triangles
            .iter()
            .flat_map(|tri| tri.to_flat())
            .map(|c| c as f32)
            .collect()
    }
}

impl From<Vec<Triangle>> for TriangleSoup {
    fn from(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }
}

impl FromIterator<Triangle> for TriangleSoup {
    fn from_iter<I: IntoIterator<Item = Triangle>>(iter: I) -> Self {
        Self {
            triangles: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for TriangleSoup {
    type Item = Triangle;
    type IntoIter = std::vec::IntoIter<Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.into_iter()
    }
}

impl<'a> IntoIterator for &'a TriangleSoup {
    type Item = &'a Triangle;
    type IntoIter = std::slice::Iter<'a, Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.iter()
    }
}
