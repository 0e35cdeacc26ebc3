//! Property-based tests for equalization.
//!
//! Run with: cargo test -p mesh-equalize -- proptest

use mesh_equalize::{equalize_soups, BulkSubdivision, EqualizeParams};
use mesh_soup::{Triangle, TriangleSoup};
use proptest::prelude::*;

/// Generate a vertex position in a bounded range.
fn arb_vertex() -> impl Strategy<Value = [f64; 3]> {
    prop::array::uniform3(-50.0..50.0f64)
}

/// Generate a triangle from bounded coordinates.
fn arb_triangle() -> impl Strategy<Value = Triangle> {
    (arb_vertex(), arb_vertex(), arb_vertex())
        .prop_map(|(v0, v1, v2)| Triangle::from_arrays(v0, v1, v2))
}

/// Generate a soup holding `min..=max` triangles.
fn arb_soup(min: usize, max: usize) -> impl Strategy<Value = TriangleSoup> {
    prop::collection::vec(arb_triangle(), min..=max).prop_map(TriangleSoup::from_triangles)
}

fn arb_bulk() -> impl Strategy<Value = BulkSubdivision> {
    prop_oneof![Just(BulkSubdivision::Skip), Just(BulkSubdivision::Apply)]
}

proptest! {
    /// Both sides always come back with the same triangle count, under
    /// either bulk policy.
    #[test]
    fn counts_always_match(
        src in arb_soup(1, 40),
        dest in arb_soup(1, 40),
        bulk in arb_bulk(),
    ) {
        let params = EqualizeParams::new().with_bulk(bulk);
        let outcome = equalize_soups(src, dest, &params).unwrap();
        prop_assert_eq!(outcome.src.len(), outcome.dest.len());

        // Leveling only ever grows a side, so the shared count is at least
        // the denser original
        prop_assert!(outcome.src.len() >= outcome.original_src.max(outcome.original_dest));
    }

    /// The denser side passes through untouched under the default policy,
    /// and the result pair keeps the argument order.
    #[test]
    fn denser_side_is_untouched(
        src in arb_soup(1, 30),
        dest in arb_soup(1, 30),
    ) {
        let outcome = equalize_soups(src.clone(), dest.clone(), &EqualizeParams::new()).unwrap();
        prop_assert_eq!(outcome.original_src, src.len());
        prop_assert_eq!(outcome.original_dest, dest.len());
        if src.len() >= dest.len() {
            prop_assert_eq!(outcome.src, src);
        } else {
            prop_assert_eq!(outcome.dest, dest);
        }
    }

    /// Splitting never changes a side's total area.
    #[test]
    fn equalizing_preserves_area_per_side(
        src in arb_soup(1, 20),
        dest in arb_soup(1, 20),
        bulk in arb_bulk(),
    ) {
        let src_area = src.total_area();
        let dest_area = dest.total_area();

        let params = EqualizeParams::new().with_bulk(bulk);
        let outcome = equalize_soups(src, dest, &params).unwrap();

        let scale = src_area.abs().max(dest_area.abs()).max(1.0);
        prop_assert!((outcome.src.total_area() - src_area).abs() < 1e-6 * scale);
        prop_assert!((outcome.dest.total_area() - dest_area).abs() < 1e-6 * scale);
    }

    /// Under the default policy the split count is exactly the original
    /// count difference.
    #[test]
    fn split_count_is_the_difference(
        src in arb_soup(1, 30),
        dest in arb_soup(1, 30),
    ) {
        let outcome = equalize_soups(src, dest, &EqualizeParams::new()).unwrap();
        let diff = outcome.original_src.abs_diff(outcome.original_dest);
        prop_assert_eq!(outcome.splits, diff);
    }
}
