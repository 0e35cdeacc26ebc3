//! Count leveling between two soups.

use std::collections::VecDeque;

use mesh_shatter::{bisect, shatter_into};
use mesh_soup::{Triangle, TriangleSoup};
use tracing::debug;

use crate::error::{EqualizeError, EqualizeResult};
use crate::params::EqualizeParams;
use crate::result::EqualizeOutcome;

/// Count ratio beyond which the bulk step engages.
const BULK_RATIO: f64 = 2.0;

/// Equalize two flat coordinate buffers.
///
/// Both buffers are decoded strictly (see [`TriangleSoup::from_flat`]), then
/// leveled with [`equalize_soups`].
///
/// # Errors
///
/// Returns an error if either buffer fails to decode, if one soup is empty
/// while the other is not, or if leveling would exceed `max_triangles`.
///
/// # Examples
///
/// ```
/// use mesh_equalize::{equalize, EqualizeParams};
///
/// let src = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
/// let dest = [
///     0.0, 0.0, 1.0, 2.0, 0.0, 1.0, 0.0, 2.0, 1.0, //
///     2.0, 0.0, 1.0, 2.0, 2.0, 1.0, 0.0, 2.0, 1.0,
/// ];
///
/// let outcome = equalize(&src, &dest, &EqualizeParams::new())?;
/// assert_eq!(outcome.src.len(), outcome.dest.len());
/// # Ok::<(), mesh_equalize::EqualizeError>(())
/// ```
pub fn equalize(
    src: &[f64],
    dest: &[f64],
    params: &EqualizeParams,
) -> EqualizeResult<EqualizeOutcome> {
    let src = TriangleSoup::from_flat(src)?;
    let dest = TriangleSoup::from_flat(dest)?;
    equalize_soups(src, dest, params)
}

/// Equalize two soups.
///
/// The sparser soup is grown by longest-edge splits until both sides hold the
/// same number of triangles: the front triangle is popped, split once, and
/// both children pushed to the back. With [`BulkSubdivision::Apply`], a soup
/// outnumbered more than two to one is first subdivided uniformly; the
/// remainder loop then levels whichever side is still behind, so the
/// equal-count postcondition holds even when the bulk step overshoots.
///
/// The returned pair preserves the argument order: `outcome.src` corresponds
/// to `src` no matter which side was subdivided. Two empty soups equalize to
/// two empty soups.
///
/// # Errors
///
/// Returns an error if one soup is empty while the other is not, or if
/// leveling would exceed `max_triangles`.
///
/// [`BulkSubdivision::Apply`]: crate::BulkSubdivision::Apply
pub fn equalize_soups(
    src: TriangleSoup,
    dest: TriangleSoup,
    params: &EqualizeParams,
) -> EqualizeResult<EqualizeOutcome> {
    let original_src = src.len();
    let original_dest = dest.len();

    let src_is_small = original_src <= original_dest;
    let (small, large) = if src_is_small { (src, dest) } else { (dest, src) };

    if small.is_empty() {
        if large.is_empty() {
            return Ok(EqualizeOutcome {
                src: small,
                dest: large,
                original_src,
                original_dest,
                splits: 0,
                bulk_depth: None,
            });
        }
        return Err(EqualizeError::EmptySoup { other: large.len() });
    }

    if large.len() > params.max_triangles {
        return Err(EqualizeError::TooManyTriangles {
            projected: large.len(),
            max: params.max_triangles,
        });
    }

    debug!(
        "Equalizing soups: {} vs {} triangles",
        small.len(),
        large.len()
    );

    let mut small: VecDeque<Triangle> = small.triangles.into();
    let mut large: VecDeque<Triangle> = large.triangles.into();

    let bulk_depth = if params.bulk.is_enabled() {
        apply_bulk(&mut small, large.len(), params)?
    } else {
        None
    };

    // Level whichever side is behind, one front split at a time. Each split
    // nets one extra triangle, so the loop runs exactly |difference| times.
    let mut splits = 0_usize;
    while small.len() < large.len() {
        split_front(&mut small);
        splits += 1;
    }
    while large.len() < small.len() {
        split_front(&mut large);
        splits += 1;
    }

    debug!(
        "Equalized to {} triangles each ({} splits)",
        small.len(),
        splits
    );

    let (src, dest) = if src_is_small {
        (small, large)
    } else {
        (large, small)
    };

    Ok(EqualizeOutcome {
        src: TriangleSoup::from_triangles(src.into()),
        dest: TriangleSoup::from_triangles(dest.into()),
        original_src,
        original_dest,
        splits,
        bulk_depth,
    })
}

/// Uniformly pre-subdivide `small` when `large_len` outnumbers it more than
/// [`BULK_RATIO`] to one. Returns the depth applied, if any.
fn apply_bulk(
    small: &mut VecDeque<Triangle>,
    large_len: usize,
    params: &EqualizeParams,
) -> EqualizeResult<Option<u32>> {
    #[allow(clippy::cast_precision_loss)]
    let ratio = large_len as f64 / small.len() as f64;
    if ratio <= BULK_RATIO {
        return Ok(None);
    }

    let depth = bulk_depth_for(small.len(), large_len);
    let projected = 1_usize
        .checked_shl(depth)
        .and_then(|per_seed| small.len().checked_mul(per_seed));
    let projected = match projected {
        Some(p) if p <= params.max_triangles => p,
        _ => {
            return Err(EqualizeError::TooManyTriangles {
                projected: projected.unwrap_or(usize::MAX),
                max: params.max_triangles,
            });
        }
    };

    debug!(
        "Bulk subdividing {} triangles to depth {} ({} leaves vs {})",
        small.len(),
        depth,
        projected,
        large_len
    );

    let seeds = small.len();
    let mut leaves = Vec::new();
    for _ in 0..seeds {
        if let Some(tri) = small.pop_front() {
            shatter_into(tri, depth, &mut leaves);
            small.extend(leaves.drain(..));
        }
    }

    Ok(Some(depth))
}

/// Uniform depth bringing `small` near `large`: `floor(ln(large) / ln(small))`,
/// with 2 substituted when the small side is a single triangle.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn bulk_depth_for(small: usize, large: usize) -> u32 {
    if small == 1 {
        return 2;
    }
    ((large as f64).ln() / (small as f64).ln()).floor() as u32
}

/// Pop the front triangle, split it once, push both children to the back.
fn split_front(list: &mut VecDeque<Triangle>) {
    if let Some(tri) = list.pop_front() {
        let (first, second) = bisect(&tri);
        list.push_back(first);
        list.push_back(second);
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use crate::params::BulkSubdivision;

    use super::*;

    /// A fan of `count` distinct triangles, flattened.
    fn fan_flat(count: usize) -> Vec<f64> {
        let mut out = Vec::with_capacity(count * 9);
        for i in 0..count {
            #[allow(clippy::cast_precision_loss)]
            let x = i as f64;
            out.extend_from_slice(&[x, 0.0, 0.0, x + 1.0, 0.0, 0.0, x, 1.0, 0.0]);
        }
        out
    }

    fn fan_soup(count: usize) -> TriangleSoup {
        TriangleSoup::from_flat(&fan_flat(count)).unwrap()
    }

    #[test]
    fn one_against_ten_levels_to_ten() {
        let src = fan_flat(1);
        let dest = fan_flat(10);

        let outcome = equalize(&src, &dest, &EqualizeParams::new()).unwrap();
        assert_eq!(outcome.src.len(), 10);
        assert_eq!(outcome.dest.len(), 10);
        assert_eq!(outcome.original_src, 1);
        assert_eq!(outcome.original_dest, 10);
        assert_eq!(outcome.splits, 9);
        assert_eq!(outcome.bulk_depth, None);

        // The denser side passes through untouched
        assert_eq!(outcome.dest, TriangleSoup::from_flat(&dest).unwrap());
    }

    #[test]
    fn argument_order_is_preserved_when_src_is_larger() {
        let src = fan_soup(10);
        let dest = fan_soup(4);

        let outcome = equalize_soups(src.clone(), dest, &EqualizeParams::new()).unwrap();
        assert_eq!(outcome.src, src);
        assert_eq!(outcome.dest.len(), 10);
        assert_eq!(outcome.splits, 6);
    }

    #[test]
    fn equal_counts_pass_through() {
        let src = fan_soup(5);
        let dest = fan_soup(5);

        let outcome = equalize_soups(src.clone(), dest.clone(), &EqualizeParams::new()).unwrap();
        assert_eq!(outcome.src, src);
        assert_eq!(outcome.dest, dest);
        assert!(!outcome.was_subdivided());
    }

    #[test]
    fn both_empty_is_a_no_op() {
        let outcome =
            equalize_soups(TriangleSoup::new(), TriangleSoup::new(), &EqualizeParams::new())
                .unwrap();
        assert_eq!(outcome.triangle_count(), 0);
        assert!(!outcome.was_subdivided());
    }

    #[test]
    fn one_empty_side_is_rejected() {
        let err = equalize_soups(TriangleSoup::new(), fan_soup(3), &EqualizeParams::new())
            .unwrap_err();
        assert!(matches!(err, EqualizeError::EmptySoup { other: 3 }));

        let err = equalize_soups(fan_soup(3), TriangleSoup::new(), &EqualizeParams::new())
            .unwrap_err();
        assert!(matches!(err, EqualizeError::EmptySoup { other: 3 }));
    }

    #[test]
    fn remainder_loop_runs_queue_discipline() {
        let src = fan_soup(2);
        let t0 = src.triangles[0];
        let t1 = src.triangles[1];
        let dest = fan_soup(4);

        let outcome = equalize_soups(src, dest, &EqualizeParams::new()).unwrap();

        // Front popped, children pushed back: t0 splits, then t1
        let (a, b) = bisect(&t0);
        let (c, d) = bisect(&t1);
        assert_eq!(outcome.src.triangles, vec![a, b, c, d]);
    }

    #[test]
    fn splitting_preserves_total_area() {
        let src = fan_soup(1);
        let dest = fan_soup(10);
        let src_area = src.total_area();

        let outcome = equalize_soups(src, dest, &EqualizeParams::new()).unwrap();
        assert!((outcome.src.total_area() - src_area).abs() < 1e-10);
    }

    #[test]
    fn bulk_apply_levels_one_against_ten() {
        let params = EqualizeParams::new().with_bulk(BulkSubdivision::Apply);
        let outcome = equalize_soups(fan_soup(1), fan_soup(10), &params).unwrap();

        // Depth 2 for a single seed: 4 leaves, then 6 remainder splits
        assert_eq!(outcome.bulk_depth, Some(2));
        assert_eq!(outcome.splits, 6);
        assert_eq!(outcome.src.len(), 10);
        assert_eq!(outcome.dest.len(), 10);
    }

    #[test]
    fn bulk_overshoot_levels_the_other_side() {
        let params = EqualizeParams::new().with_bulk(BulkSubdivision::Apply);
        let outcome = equalize_soups(fan_soup(1), fan_soup(3), &params).unwrap();

        // Bulk takes the single seed to 4 leaves, past the 3-triangle side,
        // so the formerly larger side gets the remaining split.
        assert_eq!(outcome.bulk_depth, Some(2));
        assert_eq!(outcome.splits, 1);
        assert_eq!(outcome.src.len(), 4);
        assert_eq!(outcome.dest.len(), 4);
    }

    #[test]
    fn bulk_skip_leaves_counts_to_the_remainder_loop() {
        let outcome = equalize_soups(fan_soup(2), fan_soup(5), &EqualizeParams::new()).unwrap();
        assert_eq!(outcome.bulk_depth, None);
        assert_eq!(outcome.splits, 3);
        assert_eq!(outcome.triangle_count(), 5);
    }

    #[test]
    fn bulk_stays_off_below_the_ratio() {
        let params = EqualizeParams::new().with_bulk(BulkSubdivision::Apply);
        let outcome = equalize_soups(fan_soup(5), fan_soup(10), &params).unwrap();

        // 10 / 5 is not greater than 2, so only the remainder loop runs
        assert_eq!(outcome.bulk_depth, None);
        assert_eq!(outcome.splits, 5);
    }

    #[test]
    fn size_limit_is_enforced() {
        let params = EqualizeParams::new().with_max_triangles(8);
        let err = equalize_soups(fan_soup(1), fan_soup(10), &params).unwrap_err();
        assert!(matches!(
            err,
            EqualizeError::TooManyTriangles {
                projected: 10,
                max: 8,
            }
        ));
    }

    #[test]
    fn decode_errors_propagate() {
        let err = equalize(&[0.0; 5], &fan_flat(2), &EqualizeParams::new()).unwrap_err();
        assert!(matches!(err, EqualizeError::Soup(_)));
    }
}
