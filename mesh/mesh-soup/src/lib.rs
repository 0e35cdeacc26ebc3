//! Core triangle-soup types for ShatterForge.
//!
//! This crate provides the foundational types for the shatter/morph pipeline:
//!
//! - [`Triangle`] - A concrete triangle with vertex positions
//! - [`TriangleSoup`] - An ordered, unindexed triangle collection
//! - [`distance`], [`midpoint`], [`point_at`] - Point-level helpers
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with no rendering dependencies. It can be used in:
//! - CLI tools
//! - Web applications (WASM)
//! - Servers
//! - Game engines
//!
//! # Flat Buffers
//!
//! The system boundary is a flat `f64` buffer: 3 coordinates per point,
//! 9 per triangle. [`TriangleSoup::from_flat`] decodes one strictly,
//! [`TriangleSoup::from_flat_lossy`] tolerates a partial trailing triangle,
//! and [`TriangleSoup::to_flat`] encodes one back. Decoding and re-encoding
//! a well-formed buffer reproduces it exactly.
//!
//! # Example
//!
//! ```
//! use mesh_soup::TriangleSoup;
//!
//! let flat = [
//!     0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, // one triangle
//! ];
//! let soup = TriangleSoup::from_flat(&flat)?;
//!
//! assert_eq!(soup.len(), 1);
//! assert_eq!(soup.to_flat(), flat);
//! # Ok::<(), mesh_soup::SoupError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod geometry;
mod soup;
mod triangle;

// Re-export core types
pub use error::{SoupError, SoupResult};
pub use geometry::{distance, midpoint, point_at};
pub use soup::{TriangleSoup, COORDS_PER_POINT, COORDS_PER_TRIANGLE};
pub use triangle::Triangle;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
