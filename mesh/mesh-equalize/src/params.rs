//! Equalization parameters.

/// Policy for the coarse pre-subdivision of badly outnumbered soups.
///
/// When one side holds more than twice as many triangles as the other, a
/// uniform subdivision of the smaller side can close most of the gap in one
/// pass before the one-split-at-a-time remainder loop runs. The uniform depth
/// is `floor(ln(large) / ln(small))`, with 2 substituted when the small side
/// is a single triangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BulkSubdivision {
    /// Level counts with the remainder loop alone.
    #[default]
    Skip,

    /// Uniformly pre-subdivide the smaller soup, then run the remainder
    /// loop on whichever side is still behind.
    Apply,
}

impl BulkSubdivision {
    /// Check if the bulk step runs for badly outnumbered inputs.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        matches!(self, Self::Apply)
    }
}

/// Parameters for mesh equalization.
#[derive(Debug, Clone)]
pub struct EqualizeParams {
    /// Bulk pre-subdivision policy.
    pub bulk: BulkSubdivision,

    /// Maximum triangles allowed on either side of the result.
    pub max_triangles: usize,
}

impl Default for EqualizeParams {
    fn default() -> Self {
        Self {
            bulk: BulkSubdivision::default(),
            max_triangles: 1 << 20, // ~1M triangles per side
        }
    }
}

impl EqualizeParams {
    /// Create new parameters with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bulk pre-subdivision policy.
    #[must_use]
    pub const fn with_bulk(mut self, bulk: BulkSubdivision) -> Self {
        self.bulk = bulk;
        self
    }

    /// Set the maximum allowed per-side triangle count.
    #[must_use]
    pub const fn with_max_triangles(mut self, max_triangles: usize) -> Self {
        self.max_triangles = max_triangles;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = EqualizeParams::default();
        assert_eq!(params.bulk, BulkSubdivision::Skip);
        assert!(!params.bulk.is_enabled());
        assert_eq!(params.max_triangles, 1 << 20);
    }

    #[test]
    fn test_builder() {
        let params = EqualizeParams::new()
            .with_bulk(BulkSubdivision::Apply)
            .with_max_triangles(4096);
        assert!(params.bulk.is_enabled());
        assert_eq!(params.max_triangles, 4096);
    }
}
