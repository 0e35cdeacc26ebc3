//! Longest-edge triangle subdivision.
//!
//! This crate splits triangles by bisecting their longest edge: the parent is
//! replaced by two children that share the edge's midpoint and the opposite
//! vertex. Repeated to a depth `d`, one seed triangle becomes `2^d` leaves of
//! identical total area and increasingly uniform shape.
//!
//! # Examples
//!
//! Shatter one triangle:
//!
//! ```
//! use mesh_shatter::{shatter_triangle, ShatterParams};
//! use mesh_soup::Triangle;
//!
//! let seed = Triangle::from_arrays(
//!     [0.0, 0.0, 0.0],
//!     [1.0, 0.0, 0.0],
//!     [0.0, 1.0, 0.0],
//! );
//!
//! let params = ShatterParams::new().with_depth(3);
//! let outcome = shatter_triangle(&seed, &params)?;
//!
//! assert_eq!(outcome.leaf_triangles, 8);
//! assert!((outcome.soup.total_area() - seed.area()).abs() < 1e-10);
//! # Ok::<(), mesh_shatter::ShatterError>(())
//! ```
//!
//! Depth 0 passes the input through unchanged:
//!
//! ```
//! use mesh_shatter::{shatter_triangle, ShatterParams};
//! use mesh_soup::Triangle;
//!
//! let seed = Triangle::from_arrays(
//!     [0.0, 0.0, 0.0],
//!     [1.0, 0.0, 0.0],
//!     [0.0, 1.0, 0.0],
//! );
//!
//! let outcome = shatter_triangle(&seed, &ShatterParams::new().with_depth(0))?;
//! assert_eq!(outcome.soup.triangles, vec![seed]);
//! # Ok::<(), mesh_shatter::ShatterError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod params;
mod result;
mod shatter;

pub use error::{ShatterError, ShatterResult};
pub use params::ShatterParams;
pub use result::ShatterOutcome;
pub use shatter::{bisect, shatter_into, shatter_soup, shatter_triangle};
