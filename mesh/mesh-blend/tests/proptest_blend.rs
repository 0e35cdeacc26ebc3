//! Property-based tests for blending.
//!
//! Run with: cargo test -p mesh-blend -- proptest

use approx::relative_eq;
use mesh_blend::{blend, Blend, BlendError};
use mesh_soup::{Triangle, TriangleSoup, COORDS_PER_TRIANGLE};
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

/// Generate a pair of soups with the same triangle count.
fn arb_soup_pair(max: usize) -> impl Strategy<Value = (TriangleSoup, TriangleSoup)> {
    (0..=max).prop_flat_map(|count| (arb_soup(count, count), arb_soup(count, count)))
}

fn arb_t() -> impl Strategy<Value = f64> {
    -4.0..4.0f64
}

proptest! {
    /// Blending a soup with itself reproduces it exactly at any parameter.
    #[test]
    fn self_blend_is_identity(soup in arb_soup(0, 20), t in arb_t()) {
        prop_assert_eq!(blend(&soup, &soup, t).unwrap(), soup.to_flat());
    }

    /// The endpoints reproduce the inputs.
    #[test]
    fn endpoints_match_inputs((src, dest) in arb_soup_pair(20)) {
        let at_zero = blend(&src, &dest, 0.0).unwrap();
        prop_assert_eq!(at_zero, src.to_flat());

        let at_one = blend(&src, &dest, 1.0).unwrap();
        for (got, want) in at_one.iter().zip(dest.to_flat()) {
            prop_assert!(relative_eq!(*got, want, epsilon = 1e-9, max_relative = 1e-9));
        }
    }

    /// Every frame holds nine coordinates per triangle, in soup order.
    #[test]
    fn frame_layout_is_stable((src, dest) in arb_soup_pair(20), t in arb_t()) {
        let frame = blend(&src, &dest, t).unwrap();
        prop_assert_eq!(frame.len(), src.len() * COORDS_PER_TRIANGLE);

        let decoded = TriangleSoup::from_flat(&frame).unwrap();
        prop_assert_eq!(decoded.len(), src.len());
    }

    /// Sweeping the parameter backwards from the swapped pair lands on the
    /// same frame, up to rounding.
    #[test]
    fn reversed_blend_mirrors_forward((src, dest) in arb_soup_pair(12), t in arb_t()) {
        let forward = blend(&src, &dest, t).unwrap();
        let backward = blend(&dest, &src, 1.0 - t).unwrap();
        for (a, b) in forward.iter().zip(&backward) {
            prop_assert!(relative_eq!(*a, *b, epsilon = 1e-9, max_relative = 1e-9));
        }
    }

    /// Mismatched counts always fail, in either constructor.
    #[test]
    fn mismatched_counts_always_fail(
        src in arb_soup(0, 12),
        extra in arb_soup(1, 6),
    ) {
        let mut dest = src.clone();
        for tri in &extra {
            dest.push(*tri);
        }

        let err = blend(&src, &dest, 0.5).unwrap_err();
        prop_assert!(
            matches!(err, BlendError::StructureMismatch { .. }),
            "expected StructureMismatch"
        );
        prop_assert!(Blend::new(src, dest).is_err());
    }

    /// The reusable sampler agrees with the free function.
    #[test]
    fn sampler_matches_free_function((src, dest) in arb_soup_pair(12), t in arb_t()) {
        let morph = Blend::new(src.clone(), dest.clone()).unwrap();
        prop_assert_eq!(morph.sample(t), blend(&src, &dest, t).unwrap());

        let mut reused = vec![0.0; 3];
        morph.sample_into(t, &mut reused);
        prop_assert_eq!(reused, morph.sample(t));
    }
}
