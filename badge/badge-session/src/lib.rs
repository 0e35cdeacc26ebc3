//! Session state for the animated fractal badge.
//!
//! The badge is a single triangle shattered along its longest edges to a
//! fixed depth, redrawn every frame of a 360-frame cycle. This crate owns
//! that per-badge state: the shattered soup, its flattened position buffer,
//! and the frame counter. Rendering itself stays out of scope; a session
//! hands the caller flat buffers and frame numbers and nothing else.
//!
//! # Examples
//!
//! ```
//! use badge_session::BadgeSession;
//!
//! let mut session = BadgeSession::with_depth(4)?;
//! assert_eq!(session.triangle_count(), 16);
//! assert_eq!(session.positions().len(), 16 * 9);
//!
//! // One render tick
//! assert_eq!(session.advance(), 1);
//! # Ok::<(), badge_session::BadgeError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod session;

pub use error::{BadgeError, BadgeResult};
pub use session::{seed_triangle, BadgeSession, BADGE_DEPTH, FRAME_PERIOD};
