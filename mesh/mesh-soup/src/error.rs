//! Error types for flat-buffer decoding.

use thiserror::Error;

/// Errors that can occur when decoding flat coordinate buffers.
#[derive(Debug, Error)]
pub enum SoupError {
    /// Buffer length is not a whole number of points.
    #[error("flat buffer length {len} is not a multiple of 3")]
    RaggedBuffer {
        /// Length of the offending buffer.
        len: usize,
    },

    /// Buffer ends with whole points that do not form a whole triangle.
    #[error("flat buffer length {len} leaves a partial trailing triangle ({leftover} spare coordinates)")]
    PartialTriangle {
        /// Length of the offending buffer.
        len: usize,
        /// Coordinates left over after the last whole triangle.
        leftover: usize,
    },
}

/// Result type for soup construction.
pub type SoupResult<T> = std::result::Result<T, SoupError>;
