//! Convex hull of an integer point set (Andrew's monotone chain).

use std::cmp::Ordering;

use super::types::{rotate_to_anchor, Point, Polygon, SumCfg};
use super::util::orient_sign;
use crate::error::GeomError;

/// Convex hull of `points` in canonical counter-clockwise form.
///
/// - 0 points: empty polygon; 1 distinct point: single vertex.
/// - All points collinear: the two extreme points.
/// - Collinear boundary points are dropped (strict left turns only).
///
/// Complexity: O(N log N) for the sort plus two linear passes. Never fails
/// and never overflows, but a hull reaching past `COORD_LIMIT` is rejected by
/// `minkowski_sum`; use `try_build_hull` to fail early on such input.
pub fn build_hull(points: &[Point]) -> Polygon {
    let mut pts = points.to_vec();
    pts.sort_unstable();
    pts.dedup();
    if pts.len() < 2 {
        return Polygon::from_canonical(pts);
    }
    let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
    for &p in &pts {
        while lower.len() >= 2
            && orient_sign(lower[lower.len() - 2], lower[lower.len() - 1], p) != Ordering::Greater
        {
            lower.pop();
        }
        lower.push(p);
    }
    let mut upper: Vec<Point> = Vec::with_capacity(pts.len());
    for &p in pts.iter().rev() {
        while upper.len() >= 2
            && orient_sign(upper[upper.len() - 2], upper[upper.len() - 1], p) != Ordering::Greater
        {
            upper.pop();
        }
        upper.push(p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    Polygon::from_canonical(rotate_to_anchor(hull))
}

/// `build_hull` behind the defensive limits of `cfg`.
pub fn try_build_hull(points: &[Point], cfg: &SumCfg) -> Result<Polygon, GeomError> {
    cfg.check_points(points)?;
    Ok(build_hull(points))
}
