//! Convexity and orientation checks for caller-supplied vertex lists.

use std::cmp::Ordering;

use super::types::Point;
use super::util::{cmp_dir, orient_sign, span};
use crate::error::Defect;

/// Accept exactly the vertex lists that describe a convex polygon traversed
/// counter-clockwise once (any starting vertex).
///
/// Order of checks: duplicates, collinear vertices, turn signs, winding.
/// Total over all `i64` coordinates; nothing here can overflow.
pub(crate) fn check_convex_ccw(v: &[Point]) -> Result<(), Defect> {
    let n = v.len();
    if n <= 1 {
        return Ok(());
    }
    for i in 0..n {
        let next = (i + 1) % n;
        if v[i] == v[next] {
            return Err(Defect::DuplicateVertex { index: next });
        }
    }
    if n == 2 {
        return Ok(());
    }

    let mut first_right = None;
    let mut any_left = false;
    for i in 0..n {
        let at = (i + 1) % n;
        match orient_sign(v[i], v[at], v[(i + 2) % n]) {
            Ordering::Equal => return Err(Defect::CollinearVertex { index: at }),
            Ordering::Greater => any_left = true,
            Ordering::Less => {
                first_right.get_or_insert(at);
            }
        }
    }
    match (any_left, first_right) {
        (false, _) => return Err(Defect::Clockwise),
        (true, Some(index)) => return Err(Defect::ReflexVertex { index }),
        (true, None) => {}
    }

    // All turns are strict left turns, so edge angles step forward by less
    // than π each time; count how often they wrap past 2π.
    let edges: Vec<_> = (0..n).map(|i| span(v[i], v[(i + 1) % n])).collect();
    let wraps = (0..n)
        .filter(|&i| cmp_dir(edges[(i + 1) % n], edges[i]) == Ordering::Less)
        .count();
    if wraps != 1 {
        return Err(Defect::SelfOverlapping);
    }
    Ok(())
}
