//! Result types for shatter operations.

// Leaf counts don't overflow in practice
#![allow(clippy::cast_precision_loss)]

use mesh_soup::TriangleSoup;

/// Result of a shatter operation.
#[derive(Debug, Clone)]
pub struct ShatterOutcome {
    /// The shattered soup, leaves in deterministic order.
    pub soup: TriangleSoup,

    /// Number of triangles in the input.
    pub seed_triangles: usize,

    /// Number of leaf triangles produced.
    pub leaf_triangles: usize,

    /// Depth applied to every seed.
    pub depth: u32,
}

impl ShatterOutcome {
    /// Get the leaf multiplication factor.
    #[must_use]
    pub fn growth_factor(&self) -> f64 {
        if self.seed_triangles == 0 {
            1.0
        } else {
            self.leaf_triangles as f64 / self.seed_triangles as f64
        }
    }

    /// Check if any splitting occurred.
    #[must_use]
    pub const fn was_split(&self) -> bool {
        self.depth > 0 && self.leaf_triangles > self.seed_triangles
    }
}

impl std::fmt::Display for ShatterOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Shatter: {} → {} triangles ({:.1}x), depth {}",
            self.seed_triangles,
            self.leaf_triangles,
            self.growth_factor(),
            self.depth
        )
    }
}
