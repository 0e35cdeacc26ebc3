//! Result types for equalization.

use mesh_soup::TriangleSoup;

/// Result of equalizing two soups.
///
/// `src` and `dest` hold the same number of triangles and correspond to the
/// first and second argument of the call, in that order, regardless of which
/// side was subdivided.
#[derive(Debug, Clone)]
pub struct EqualizeOutcome {
    /// Equalized counterpart of the first argument.
    pub src: TriangleSoup,

    /// Equalized counterpart of the second argument.
    pub dest: TriangleSoup,

    /// Triangle count of the first argument before equalization.
    pub original_src: usize,

    /// Triangle count of the second argument before equalization.
    pub original_dest: usize,

    /// Single-triangle splits performed by the remainder loop.
    pub splits: usize,

    /// Depth applied by the bulk step, when it ran.
    pub bulk_depth: Option<u32>,
}

impl EqualizeOutcome {
    /// Triangle count shared by both sides after equalization.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.src.len()
    }

    /// Check if any subdivision was needed.
    #[must_use]
    pub const fn was_subdivided(&self) -> bool {
        self.splits > 0 || self.bulk_depth.is_some()
    }
}

impl std::fmt::Display for EqualizeOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Equalize: ({}, {}) → {} triangles each, {} splits",
            self.original_src,
            self.original_dest,
            self.triangle_count(),
            self.splits
        )?;
        if let Some(depth) = self.bulk_depth {
            write!(f, ", bulk depth {depth}")?;
        }
        Ok(())
    }
}
