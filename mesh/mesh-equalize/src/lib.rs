//! Triangle-count equalization.
//!
//! Blending two soups vertex-by-vertex needs them to hold the same number of
//! triangles. This crate levels a mismatched pair by repeatedly splitting the
//! sparser soup's front triangle along its longest edge, two children to the
//! back, until the counts meet. An optional bulk step pre-subdivides every
//! triangle of a badly outnumbered soup first.
//!
//! # Examples
//!
//! ```
//! use mesh_equalize::{equalize, EqualizeParams};
//!
//! let one = [
//!     0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0,
//! ];
//! let two = [
//!     0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 1.0, 1.0, //
//!     1.0, 0.0, 1.0, 1.0, 1.0, 1.0, 0.0, 1.0, 1.0,
//! ];
//!
//! let outcome = equalize(&one, &two, &EqualizeParams::new())?;
//!
//! assert_eq!(outcome.src.len(), 2);
//! assert_eq!(outcome.dest.len(), 2);
//! # Ok::<(), mesh_equalize::EqualizeError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod equalize;
mod error;
mod params;
mod result;

pub use equalize::{equalize, equalize_soups};
pub use error::{EqualizeError, EqualizeResult};
pub use params::{BulkSubdivision, EqualizeParams};
pub use result::EqualizeOutcome;
