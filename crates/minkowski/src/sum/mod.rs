//! Minkowski sum of convex polygons by merging edge vectors in angle order.
//!
//! Purpose
//! - `minkowski_sum`: O(m + n) sum of two canonical convex polygons.
//! - `minkowski_sum_points`: raw point lists in, hull of `{a + b}` out. This
//!   is the call shape the Python binding exposes.
//!
//! Input policy (fixed)
//! - `Polygon` values are valid by construction; caller vertex lists that are
//!   not convex and counter-clockwise are rejected by `Polygon::from_vertices`
//!   and never reach this module.
//! - Raw point lists are always normalized through `build_hull`.
//! - Both entry points fail with `InputTooLarge` when a limit of `SumCfg` is
//!   exceeded, including when the sum's coordinates would leave the cap.
//!
//! Code cross-refs: `geom2::{Polygon, build_hull, cmp_polar}`, `merge::merge_edges`

mod merge;

use crate::error::{GeomError, Oversize};
use crate::geom2::{build_hull, Point, Polygon, SumCfg};

use merge::merge_edges;

/// Minkowski sum `{a + b : a ∈ A, b ∈ B}` of two convex polygons.
///
/// - Either input empty: empty result, whatever the other one holds.
/// - Either input a single point: the other one translated.
/// - Segments sweep into parallelograms, or a longer segment when parallel.
///
/// The result is canonical (its anchor is the sum of the two anchors) and
/// carries no collinear vertices. Newly allocated; never aliases the inputs.
pub fn minkowski_sum(a: &Polygon, b: &Polygon, cfg: &SumCfg) -> Result<Polygon, GeomError> {
    let (Some(anchor_a), Some(anchor_b)) = (a.anchor(), b.anchor()) else {
        return Ok(Polygon::empty());
    };
    let max = cfg.coord_cap();
    let reach = a.max_abs_coord().saturating_add(b.max_abs_coord());
    if reach > max {
        return Err(Oversize::Coordinate { value: reach, max }.into());
    }
    if a.len() == 1 {
        return b.translate(anchor_a);
    }
    if b.len() == 1 {
        return a.translate(anchor_b);
    }

    let edges = merge_edges(a, b);
    let mut vertices = Vec::with_capacity(edges.len());
    let mut current = anchor_a.translate(anchor_b);
    vertices.push(current);
    // The last edge closes the loop back to the anchor.
    for &e in &edges[..edges.len() - 1] {
        current = current + e;
        vertices.push(current);
    }
    debug_assert_eq!(
        current + edges[edges.len() - 1],
        anchor_a.translate(anchor_b),
        "merged edges do not close"
    );
    Ok(Polygon::from_canonical(vertices))
}

/// Minkowski sum of two raw point sets: hull both, then sum the hulls.
///
/// Equals the convex hull of all pairwise sums. Limits are checked before any
/// work is done.
pub fn minkowski_sum_points(
    a: &[Point],
    b: &[Point],
    cfg: &SumCfg,
) -> Result<Polygon, GeomError> {
    cfg.check_points(a)?;
    cfg.check_points(b)?;
    let (hull_a, hull_b) = hull_pair(a, b);
    minkowski_sum(&hull_a, &hull_b, cfg)
}

#[cfg(feature = "parallel")]
fn hull_pair(a: &[Point], b: &[Point]) -> (Polygon, Polygon) {
    rayon::join(|| build_hull(a), || build_hull(b))
}

#[cfg(not(feature = "parallel"))]
fn hull_pair(a: &[Point], b: &[Point]) -> (Polygon, Polygon) {
    (build_hull(a), build_hull(b))
}
