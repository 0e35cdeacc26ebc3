//! Per-coordinate linear blending.

use mesh_soup::{Triangle, TriangleSoup, COORDS_PER_TRIANGLE};
use rayon::prelude::*;
use tracing::debug;

use crate::error::{BlendError, BlendResult};

/// Soups above this triangle count sample in parallel.
const PAR_THRESHOLD: usize = 1000;

/// Linearly interpolate between two soups at parameter `t`.
///
/// Every coordinate moves along `src + t * (dest - src)`: `t = 0` reproduces
/// the source, `t = 1` the destination, and values outside `[0, 1]`
/// extrapolate. The result is a flat buffer in soup order.
///
/// Validation runs per call; use [`Blend`] to validate once and sample many
/// times.
///
/// # Errors
///
/// Returns [`BlendError::StructureMismatch`] when the soups hold different
/// triangle counts.
///
/// # Examples
///
/// ```
/// use mesh_blend::blend;
/// use mesh_soup::TriangleSoup;
///
/// let src = TriangleSoup::from_flat(&[0.0; 9]).unwrap();
/// let dest = TriangleSoup::from_flat(&[4.0; 9]).unwrap();
///
/// assert_eq!(blend(&src, &dest, 0.25)?, vec![1.0; 9]);
/// assert_eq!(blend(&src, &dest, 1.0)?, vec![4.0; 9]);
/// # Ok::<(), mesh_blend::BlendError>(())
/// ```
pub fn blend(src: &TriangleSoup, dest: &TriangleSoup, t: f64) -> BlendResult<Vec<f64>> {
    check_structure(src, dest)?;
    Ok(sample_flat(src, dest, t))
}

/// A validated source and destination pair for repeated sampling.
///
/// Construction checks the counts once; sampling cannot fail afterwards.
/// A render loop typically builds one `Blend` per morph and calls
/// [`sample_into`](Self::sample_into) with a reused buffer every frame.
#[derive(Debug, Clone)]
pub struct Blend {
    src: TriangleSoup,
    dest: TriangleSoup,
}

impl Blend {
    /// Pair a source with a destination.
    ///
    /// # Errors
    ///
    /// Returns [`BlendError::StructureMismatch`] when the soups hold
    /// different triangle counts.
    pub fn new(src: TriangleSoup, dest: TriangleSoup) -> BlendResult<Self> {
        check_structure(&src, &dest)?;
        Ok(Self { src, dest })
    }

    /// Sample the blend at `t` into a fresh buffer.
    #[must_use]
    pub fn sample(&self, t: f64) -> Vec<f64> {
        sample_flat(&self.src, &self.dest, t)
    }

    /// Sample the blend at `t`, reusing `out`.
    ///
    /// The buffer is cleared first, so one allocation can serve a whole
    /// animation.
    pub fn sample_into(&self, t: f64, out: &mut Vec<f64>) {
        out.clear();
        out.reserve(self.src.len() * COORDS_PER_TRIANGLE);
        for (s, d) in self.src.iter().zip(self.dest.iter()) {
            out.extend_from_slice(&blended_coords(s, d, t));
        }
    }

    /// The source soup.
    #[must_use]
    pub const fn src(&self) -> &TriangleSoup {
        &self.src
    }

    /// The destination soup.
    #[must_use]
    pub const fn dest(&self) -> &TriangleSoup {
        &self.dest
    }

    /// Triangle count shared by both sides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.src.len()
    }

    /// Check if the pair holds no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.src.is_empty()
    }
}

fn check_structure(src: &TriangleSoup, dest: &TriangleSoup) -> BlendResult<()> {
    if src.len() != dest.len() {
        return Err(BlendError::StructureMismatch {
            src: src.len(),
            dest: dest.len(),
        });
    }
    Ok(())
}

fn sample_flat(src: &TriangleSoup, dest: &TriangleSoup, t: f64) -> Vec<f64> {
    if src.len() > PAR_THRESHOLD {
        debug!("Blending {} triangles in parallel at t = {t}", src.len());
        src.triangles
            .par_iter()
            .zip(dest.triangles.par_iter())
            .flat_map_iter(|(s, d)| blended_coords(s, d, t))
            .collect()
    } else {
        let mut out = Vec::with_capacity(src.len() * COORDS_PER_TRIANGLE);
        for (s, d) in src.iter().zip(dest.iter()) {
            out.extend_from_slice(&blended_coords(s, d, t));
        }
        out
    }
}

fn blended_coords(src: &Triangle, dest: &Triangle, t: f64) -> [f64; 9] {
    let mut out = [0.0_f64; COORDS_PER_TRIANGLE];
    for ((o, s), d) in out.iter_mut().zip(src.to_flat()).zip(dest.to_flat()) {
        *o = t.mul_add(d - s, s);
    }
    out
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]

    use super::*;

    fn ramp_soup(count: usize, offset: f64) -> TriangleSoup {
        let mut soup = TriangleSoup::with_capacity(count);
        for i in 0..count {
            #[allow(clippy::cast_precision_loss)]
            let x = offset + i as f64;
            soup.push(Triangle::from_arrays(
                [x, 0.0, 0.0],
                [x + 2.0, 0.0, 0.0],
                [x, 2.0, 0.0],
            ));
        }
        soup
    }

    #[test]
    fn blending_a_soup_with_itself_is_identity() {
        let soup = ramp_soup(3, 0.0);
        let flat = soup.to_flat();
        for t in [-3.5, 0.0, 0.5, 1.0, 7.25] {
            assert_eq!(blend(&soup, &soup, t).unwrap(), flat);
        }
    }

    #[test]
    fn endpoints_reproduce_the_inputs() {
        let src = ramp_soup(4, 0.0);
        let dest = ramp_soup(4, 10.0);

        assert_eq!(blend(&src, &dest, 0.0).unwrap(), src.to_flat());
        assert_eq!(blend(&src, &dest, 1.0).unwrap(), dest.to_flat());
    }

    #[test]
    fn midpoint_lands_halfway() {
        let src = ramp_soup(2, 0.0);
        let dest = ramp_soup(2, 10.0);

        let frame = blend(&src, &dest, 0.5).unwrap();
        assert_eq!(frame[0], 5.0);
        assert_eq!(frame.len(), 18);
    }

    #[test]
    fn out_of_range_t_extrapolates() {
        let src = ramp_soup(1, 0.0);
        let dest = ramp_soup(1, 10.0);

        // x0: src 0, dest 10; t = 2 lands at 20, t = -1 at -10
        assert_eq!(blend(&src, &dest, 2.0).unwrap()[0], 20.0);
        assert_eq!(blend(&src, &dest, -1.0).unwrap()[0], -10.0);
    }

    #[test]
    fn mismatched_counts_are_rejected() {
        let src = ramp_soup(2, 0.0);
        let dest = ramp_soup(3, 0.0);

        let err = blend(&src, &dest, 0.5).unwrap_err();
        assert!(matches!(
            err,
            BlendError::StructureMismatch { src: 2, dest: 3 }
        ));
        assert!(Blend::new(src, dest).is_err());
    }

    #[test]
    fn sampler_matches_free_function() {
        let src = ramp_soup(5, 0.0);
        let dest = ramp_soup(5, -4.0);
        let morph = Blend::new(src.clone(), dest.clone()).unwrap();

        for t in [0.0, 0.3, 1.0] {
            assert_eq!(morph.sample(t), blend(&src, &dest, t).unwrap());
        }
        assert_eq!(morph.len(), 5);
        assert!(!morph.is_empty());
        assert_eq!(morph.src(), &src);
        assert_eq!(morph.dest(), &dest);
    }

    #[test]
    fn sample_into_reuses_the_buffer() {
        let morph = Blend::new(ramp_soup(2, 0.0), ramp_soup(2, 8.0)).unwrap();

        let mut frame = vec![99.0; 50];
        morph.sample_into(0.0, &mut frame);
        assert_eq!(frame.len(), 18);
        assert_eq!(frame, morph.src().to_flat());

        morph.sample_into(1.0, &mut frame);
        assert_eq!(frame, morph.dest().to_flat());
    }

    #[test]
    fn large_soups_blend_in_parallel() {
        // Above the parallel threshold; results must match the sequential
        // per-triangle math exactly
        let src = ramp_soup(PAR_THRESHOLD + 100, 0.0);
        let dest = ramp_soup(PAR_THRESHOLD + 100, 6.0);

        let frame = blend(&src, &dest, 0.5).unwrap();
        assert_eq!(frame.len(), (PAR_THRESHOLD + 100) * COORDS_PER_TRIANGLE);

        let expected_first = blended_coords(&src.triangles[0], &dest.triangles[0], 0.5);
        assert_eq!(&frame[..9], &expected_first);
        let last = src.len() - 1;
        let expected_last = blended_coords(&src.triangles[last], &dest.triangles[last], 0.5);
        assert_eq!(&frame[frame.len() - 9..], &expected_last);
    }
}
