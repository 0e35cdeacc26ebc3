//! Error types for blending.

use thiserror::Error;

/// Errors that can occur during blending.
#[derive(Debug, Error)]
pub enum BlendError {
    /// Soups hold different triangle counts.
    ///
    /// Triangles carry a fixed three-vertex layout, so equal counts imply
    /// identical flat-buffer structure.
    #[error("cannot blend soups of {src} and {dest} triangles")]
    StructureMismatch {
        /// Triangle count of the source soup.
        src: usize,
        /// Triangle count of the destination soup.
        dest: usize,
    },
}

/// Result type for blending.
pub type BlendResult<T> = std::result::Result<T, BlendError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BlendError::StructureMismatch { src: 3, dest: 512 };
        let display = format!("{err}");
        assert!(display.contains('3'));
        assert!(display.contains("512"));
    }
}
