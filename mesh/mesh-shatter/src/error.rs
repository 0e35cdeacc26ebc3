//! Error types for shatter operations.

use thiserror::Error;

/// Errors that can occur during longest-edge subdivision.
#[derive(Debug, Error)]
pub enum ShatterError {
    /// Soup has no triangles.
    #[error("soup has no triangles")]
    EmptySoup,

    /// Depth is too large for the leaf count to be represented.
    #[error("depth {depth} overflows the leaf count")]
    TooDeep {
        /// Requested depth.
        depth: u32,
    },

    /// Output would exceed the configured leaf limit.
    #[error("shatter would exceed maximum leaf count ({current} -> {projected} triangles, max {max})")]
    TooManyLeaves {
        /// Current triangle count.
        current: usize,
        /// Projected leaf count.
        projected: usize,
        /// Maximum allowed leaf count.
        max: usize,
    },
}

/// Result type for shatter operations.
pub type ShatterResult<T> = std::result::Result<T, ShatterError>;
