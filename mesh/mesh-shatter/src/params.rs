//! Shatter parameters.

/// Parameters for longest-edge subdivision.
#[derive(Debug, Clone)]
pub struct ShatterParams {
    /// Bisection levels applied to every input triangle.
    ///
    /// Depth 0 emits each input unchanged; each further level doubles the
    /// triangle count.
    pub depth: u32,

    /// Maximum leaves allowed in the result (prevents memory issues).
    pub max_leaves: usize,
}

impl Default for ShatterParams {
    fn default() -> Self {
        Self {
            depth: 1,
            max_leaves: 1 << 20, // ~1M leaves
        }
    }
}

impl ShatterParams {
    /// Create new parameters with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the subdivision depth.
    #[must_use]
    pub const fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Set the maximum allowed leaf count.
    #[must_use]
    pub const fn with_max_leaves(mut self, max_leaves: usize) -> Self {
        self.max_leaves = max_leaves;
        self
    }

    /// Projected leaf count for an input of `triangles` triangles.
    ///
    /// Each level doubles the count, so the projection is
    /// `triangles * 2^depth`. Returns `None` when that overflows.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_shatter::ShatterParams;
    ///
    /// let params = ShatterParams::new().with_depth(9);
    /// assert_eq!(params.expected_leaves(1), Some(512));
    /// assert_eq!(params.expected_leaves(3), Some(1536));
    /// ```
    #[must_use]
    pub fn expected_leaves(&self, triangles: usize) -> Option<usize> {
        let per_seed = 1_usize.checked_shl(self.depth)?;
        triangles.checked_mul(per_seed)
    }
}
