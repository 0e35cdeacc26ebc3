//! Error types for badge sessions.

use thiserror::Error;

/// Errors that can occur while building a badge session.
#[derive(Debug, Error)]
pub enum BadgeError {
    /// Shattering the badge seed failed.
    #[error("failed to shatter badge seed: {0}")]
    Shatter(#[from] mesh_shatter::ShatterError),
}

/// Result type for badge session operations.
pub type BadgeResult<T> = std::result::Result<T, BadgeError>;
