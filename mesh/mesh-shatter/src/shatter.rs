//! Core longest-edge bisection.

use mesh_soup::{midpoint, Triangle, TriangleSoup};
use tracing::debug;

use crate::error::{ShatterError, ShatterResult};
use crate::params::ShatterParams;
use crate::result::ShatterOutcome;

/// Split a triangle into two along the median to its longest edge.
///
/// With the longest edge running from `v1` to `v2` and `vEnd` opposite, the
/// children are `(v1, mid, vEnd)` and `(v2, mid, vEnd)` where `mid` is the
/// edge midpoint. Ties on edge length keep the earliest edge, so the split is
/// reproducible. The children cover the parent exactly and halve its area
/// each.
///
/// # Example
///
/// ```
/// use mesh_shatter::bisect;
/// use mesh_soup::Triangle;
///
/// let tri = Triangle::from_arrays(
///     [0.0, 0.0, 0.0],
///     [3.0, 0.0, 0.0],
///     [0.0, 4.0, 0.0],
/// );
/// let (first, second) = bisect(&tri);
///
/// assert!((first.area() - tri.area() / 2.0).abs() < 1e-10);
/// assert!((second.area() - tri.area() / 2.0).abs() < 1e-10);
/// ```
#[must_use]
pub fn bisect(triangle: &Triangle) -> (Triangle, Triangle) {
    let edge = triangle.longest_edge();
    let v1 = triangle.vertex(edge);
    let v2 = triangle.vertex(edge + 1);
    let v_end = triangle.vertex(edge + 2);
    let v_mid = midpoint(&v1, &v2);

    (
        Triangle::new(v1, v_mid, v_end),
        Triangle::new(v2, v_mid, v_end),
    )
}

/// Append the depth-`depth` leaves of `triangle` to `out`.
///
/// Runs on an explicit work list rather than the call stack, so deep shatters
/// cannot overflow it. Leaves arrive in depth-first order: the first child's
/// entire subtree before the second child's.
pub fn shatter_into(triangle: Triangle, depth: u32, out: &mut Vec<Triangle>) {
    let mut work = vec![(triangle, depth)];
    while let Some((tri, remaining)) = work.pop() {
        if remaining == 0 {
            out.push(tri);
            continue;
        }
        let (first, second) = bisect(&tri);
        work.push((second, remaining - 1));
        work.push((first, remaining - 1));
    }
}

/// Shatter a single triangle to the configured depth.
///
/// Produces exactly `2^depth` leaves of the same total area as the input.
///
/// # Errors
///
/// Returns an error if:
/// - `2^depth` overflows the leaf count
/// - The projected leaf count exceeds `max_leaves`
///
/// # Examples
///
/// ```
/// use mesh_shatter::{shatter_triangle, ShatterParams};
/// use mesh_soup::Triangle;
///
/// let seed = Triangle::from_arrays(
///     [0.0, 0.0, 0.0],
///     [1.0, 0.0, 0.0],
///     [0.0, 1.0, 0.0],
/// );
///
/// let outcome = shatter_triangle(&seed, &ShatterParams::new().with_depth(4))?;
/// assert_eq!(outcome.leaf_triangles, 16);
/// # Ok::<(), mesh_shatter::ShatterError>(())
/// ```
pub fn shatter_triangle(
    triangle: &Triangle,
    params: &ShatterParams,
) -> ShatterResult<ShatterOutcome> {
    let projected = check_projected(1, params)?;

    debug!(
        "Shattering 1 triangle to depth {} ({} leaves)",
        params.depth, projected
    );

    let mut leaves = Vec::with_capacity(projected);
    shatter_into(*triangle, params.depth, &mut leaves);

    Ok(ShatterOutcome {
        seed_triangles: 1,
        leaf_triangles: leaves.len(),
        depth: params.depth,
        soup: TriangleSoup::from_triangles(leaves),
    })
}

/// Shatter every triangle of a soup to the configured depth.
///
/// Seeds are processed in soup order and each contributes `2^depth`
/// consecutive leaves, so the output order is deterministic.
///
/// # Errors
///
/// Returns an error if:
/// - The soup is empty
/// - `2^depth` overflows the leaf count
/// - The projected leaf count exceeds `max_leaves`
pub fn shatter_soup(soup: &TriangleSoup, params: &ShatterParams) -> ShatterResult<ShatterOutcome> {
    if soup.is_empty() {
        return Err(ShatterError::EmptySoup);
    }
    let projected = check_projected(soup.len(), params)?;

    debug!(
        "Shattering {} triangles to depth {} ({} leaves)",
        soup.len(),
        params.depth,
        projected
    );

    let mut leaves = Vec::with_capacity(projected);
    for tri in soup {
        shatter_into(*tri, params.depth, &mut leaves);
    }

    Ok(ShatterOutcome {
        seed_triangles: soup.len(),
        leaf_triangles: leaves.len(),
        depth: params.depth,
        soup: TriangleSoup::from_triangles(leaves),
    })
}

fn check_projected(current: usize, params: &ShatterParams) -> ShatterResult<usize> {
    let projected = params
        .expected_leaves(current)
        .ok_or(ShatterError::TooDeep {
            depth: params.depth,
        })?;
    if projected > params.max_leaves {
        return Err(ShatterError::TooManyLeaves {
            current,
            projected,
            max: params.max_leaves,
        });
    }
    Ok(projected)
}
