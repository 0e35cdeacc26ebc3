//! The badge render session.

use mesh_shatter::{shatter_triangle, ShatterParams};
use mesh_soup::{Triangle, TriangleSoup};
use tracing::debug;

use crate::error::BadgeResult;

/// Shatter depth of the stock badge, yielding `2^9 = 512` leaves.
pub const BADGE_DEPTH: u32 = 9;

/// Frames per animation cycle.
pub const FRAME_PERIOD: u32 = 360;

/// The badge's seed triangle, a flat wedge centered on the origin.
#[must_use]
pub fn seed_triangle() -> Triangle {
    Triangle::from_arrays([-0.5, 0.0, 0.0], [0.5, 0.0, 0.0], [0.0, 0.5, 0.0])
}

/// Per-badge render state.
///
/// Holds the shattered badge soup, a cached flat position buffer, and the
/// frame counter driving the animation cycle. One session per badge stands
/// in for the globals a throwaway demo would keep.
#[derive(Debug, Clone)]
pub struct BadgeSession {
    soup: TriangleSoup,
    positions: Vec<f64>,
    frame: u32,
}

impl BadgeSession {
    /// Build the stock badge at [`BADGE_DEPTH`].
    ///
    /// # Errors
    ///
    /// Returns an error if shattering the seed fails; the stock depth stays
    /// well inside the default leaf cap, so this only fires if the cap is
    /// lowered elsewhere.
    pub fn new() -> BadgeResult<Self> {
        Self::with_depth(BADGE_DEPTH)
    }

    /// Build a badge shattered to a custom depth.
    ///
    /// # Errors
    ///
    /// Returns an error if `2^depth` overflows or exceeds the default leaf
    /// cap.
    pub fn with_depth(depth: u32) -> BadgeResult<Self> {
        let outcome = shatter_triangle(&seed_triangle(), &ShatterParams::new().with_depth(depth))?;
        debug!(
            "Badge session ready: {} leaves at depth {depth}",
            outcome.leaf_triangles
        );

        let positions = outcome.soup.to_flat();
        Ok(Self {
            soup: outcome.soup,
            positions,
            frame: 0,
        })
    }

    /// Step the frame counter and return the new frame.
    ///
    /// Wraps back to zero after [`FRAME_PERIOD`] ticks.
    pub fn advance(&mut self) -> u32 {
        self.frame = (self.frame + 1) % FRAME_PERIOD;
        self.frame
    }

    /// Current frame in `0..FRAME_PERIOD`.
    #[must_use]
    pub const fn frame(&self) -> u32 {
        self.frame
    }

    /// Flat vertex positions of the shattered badge.
    #[must_use]
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    /// Positions narrowed to `f32` for a vertex-buffer upload.
    #[must_use]
    pub fn positions_f32(&self) -> Vec<f32> {
        self.soup.to_flat_f32()
    }

    /// The shattered badge soup.
    #[must_use]
    pub const fn soup(&self) -> &TriangleSoup {
        &self.soup
    }

    /// Leaf triangles in the badge.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.soup.len()
    }
}
