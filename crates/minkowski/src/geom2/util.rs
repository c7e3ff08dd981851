use std::cmp::Ordering;

use super::types::{Edge, Point};

/// z-component of `u × v` in 128-bit arithmetic (exact for `i64` inputs
/// of magnitude below 2^63).
#[inline]
pub fn cross(u: Edge, v: Edge) -> i128 {
    u.x as i128 * v.y as i128 - u.y as i128 * v.x as i128
}

/// Orientation of the triple `(a, b, c)`: positive for a left (CCW) turn,
/// negative for a right turn, zero when collinear.
///
/// Exact while all coordinates stay within `COORD_LIMIT`; use `orient_sign`
/// when only the sign is needed and the input is unchecked.
#[inline]
pub fn orient(a: Point, b: Point, c: Point) -> i128 {
    let (abx, aby) = span(a, b);
    let (acx, acy) = span(a, c);
    abx * acy - aby * acx
}

/// Sign of `orient(a, b, c)` for any `i64` coordinates.
///
/// `Greater` is a left turn, `Less` a right turn, `Equal` collinear.
#[inline]
pub fn orient_sign(a: Point, b: Point, c: Point) -> Ordering {
    let (abx, aby) = span(a, b);
    let (acx, acy) = span(a, c);
    cmp_products(abx, acy, aby, acx)
}

/// `b - a` widened to `i128`; never overflows.
#[inline]
pub(crate) fn span(a: Point, b: Point) -> (i128, i128) {
    (b.x as i128 - a.x as i128, b.y as i128 - a.y as i128)
}

/// Compare `p * q` with `r * s` where every factor fits in 65 bits.
///
/// Products can reach 2^128, so they are compared as sign and `u128`
/// magnitude instead of being formed in `i128`.
fn cmp_products(p: i128, q: i128, r: i128, s: i128) -> Ordering {
    fn signed(u: i128, v: i128) -> (i8, u128) {
        let mag = u.unsigned_abs() * v.unsigned_abs();
        let sign = if mag == 0 {
            0
        } else if (u < 0) != (v < 0) {
            -1
        } else {
            1
        };
        (sign, mag)
    }
    let (sl, ml) = signed(p, q);
    let (sr, mr) = signed(r, s);
    sl.cmp(&sr).then_with(|| match sl {
        1 => ml.cmp(&mr),
        -1 => mr.cmp(&ml),
        _ => Ordering::Equal,
    })
}

/// 0 for polar angles in [0, π), 1 for [π, 2π).
#[inline]
fn half((x, y): (i128, i128)) -> u8 {
    if y > 0 || (y == 0 && x > 0) {
        0
    } else {
        1
    }
}

/// Polar comparison of two nonzero directions given as widened spans.
#[inline]
pub(crate) fn cmp_dir(u: (i128, i128), v: (i128, i128)) -> Ordering {
    // u before v within a half-plane iff u × v > 0, i.e. ux·vy > uy·vx.
    half(u)
        .cmp(&half(v))
        .then_with(|| cmp_products(u.1, v.0, u.0, v.1))
}

/// Exact comparison of polar angles in [0, 2π), measured from the +x axis.
///
/// `Equal` means same direction. Zero vectors are never compared.
#[inline]
pub fn cmp_polar(u: Edge, v: Edge) -> Ordering {
    debug_assert!(u != Edge::zeros() && v != Edge::zeros());
    cmp_dir((u.x as i128, u.y as i128), (v.x as i128, v.y as i128))
}
