//! Error types for equalization.

use mesh_soup::SoupError;
use thiserror::Error;

/// Errors that can occur during equalization.
#[derive(Debug, Error)]
pub enum EqualizeError {
    /// One soup is empty while the other is not; there is nothing to split.
    #[error("cannot equalize an empty soup against {other} triangles")]
    EmptySoup {
        /// Triangle count of the non-empty side.
        other: usize,
    },

    /// Leveling would exceed the configured size limit.
    #[error("equalizing would exceed maximum soup size ({projected} triangles, max {max})")]
    TooManyTriangles {
        /// Projected per-side triangle count.
        projected: usize,
        /// Maximum allowed per-side triangle count.
        max: usize,
    },

    /// A flat input buffer failed to decode.
    #[error("flat buffer decoding failed: {0}")]
    Soup(#[from] SoupError),
}

/// Result type for equalization.
pub type EqualizeResult<T> = std::result::Result<T, EqualizeError>;
