use std::cmp::Ordering;

use crate::geom2::{cmp_polar, Edge, Polygon};

/// Merge the edge sequences of two canonical polygons by polar angle.
///
/// Both sequences already start at their anchors and increase in angle over
/// [0, 2π). Edges of equal direction are fused into one, so no two
/// consecutive output edges are parallel and none has zero length.
pub(crate) fn merge_edges(a: &Polygon, b: &Polygon) -> Vec<Edge> {
    let ea: Vec<Edge> = a.edges().collect();
    let eb: Vec<Edge> = b.edges().collect();
    let mut out = Vec::with_capacity(ea.len() + eb.len());
    let (mut i, mut j) = (0usize, 0usize);
    while i < ea.len() && j < eb.len() {
        match cmp_polar(ea[i], eb[j]) {
            Ordering::Less => {
                out.push(ea[i]);
                i += 1;
            }
            Ordering::Greater => {
                out.push(eb[j]);
                j += 1;
            }
            Ordering::Equal => {
                out.push(ea[i] + eb[j]);
                i += 1;
                j += 1;
            }
        }
    }
    out.extend_from_slice(&ea[i..]);
    out.extend_from_slice(&eb[j..]);
    out
}
