//! Linear interpolation between equal-count triangle soups.
//!
//! Given two soups of the same triangle count, typically produced by
//! equalization, blending computes `src + t * (dest - src)` for every
//! coordinate and returns the result as a flat buffer ready for a position
//! upload. `t = 0` reproduces the source, `t = 1` the destination, and values
//! outside `[0, 1]` extrapolate along the same line.
//!
//! # Examples
//!
//! One-off blend:
//!
//! ```
//! use mesh_blend::blend;
//! use mesh_soup::TriangleSoup;
//!
//! let src = TriangleSoup::from_flat(&[0.0; 9]).unwrap();
//! let dest = TriangleSoup::from_flat(&[2.0; 9]).unwrap();
//!
//! let frame = blend(&src, &dest, 0.5)?;
//! assert_eq!(frame, vec![1.0; 9]);
//! # Ok::<(), mesh_blend::BlendError>(())
//! ```
//!
//! Repeated sampling with a reused buffer:
//!
//! ```
//! use mesh_blend::Blend;
//! use mesh_soup::TriangleSoup;
//!
//! let src = TriangleSoup::from_flat(&[0.0; 9]).unwrap();
//! let dest = TriangleSoup::from_flat(&[1.0; 9]).unwrap();
//!
//! let morph = Blend::new(src, dest)?;
//! let mut frame = Vec::new();
//! for step in 0..=10 {
//!     morph.sample_into(f64::from(step) / 10.0, &mut frame);
//!     // upload `frame` to the renderer
//! }
//! assert_eq!(frame, vec![1.0; 9]);
//! # Ok::<(), mesh_blend::BlendError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod blend;
mod error;

pub use blend::{blend, Blend};
pub use error::{BlendError, BlendResult};
