//! Exact integer points, canonical convex polygons, and input limits.
//!
//! - `Point`: integer pair with total order (x, then y).
//! - `Polygon`: convex, counter-clockwise, starting at the lowest-then-leftmost
//!   vertex. Canonical form makes polygon equality plain sequence equality.
//! - `SumCfg`: defensive caps on point counts and coordinate magnitudes.
//!
//! Code cross-refs: `hull::build_hull`, `check::check_convex_ccw`,
//! `util::{orient, cmp_polar}`

use std::cmp::Ordering;
use std::ops::{Add, Sub};

use nalgebra::Vector2;

use super::check::check_convex_ccw;
use super::util::{orient, orient_sign};
use crate::error::{GeomError, Oversize};

/// Largest coordinate magnitude for which every predicate stays exact.
///
/// Differences fit in `i64` and cross products of differences fit in `i128`,
/// including twice the area of any polygon inside the box.
pub const COORD_LIMIT: u64 = 1 << 61;

/// Edge vector between consecutive polygon vertices.
pub type Edge = Vector2<i64>;

/// Integer point in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// `self + by`, read as a translation.
    #[inline]
    pub fn translate(self, by: Point) -> Point {
        Point::new(self.x + by.x, self.y + by.y)
    }

    /// Largest absolute coordinate.
    #[inline]
    pub fn magnitude(self) -> u64 {
        self.x.unsigned_abs().max(self.y.unsigned_abs())
    }
}

impl From<(i64, i64)> for Point {
    #[inline]
    fn from((x, y): (i64, i64)) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for (i64, i64) {
    #[inline]
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl Sub for Point {
    type Output = Edge;
    #[inline]
    fn sub(self, rhs: Point) -> Edge {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<Edge> for Point {
    type Output = Point;
    #[inline]
    fn add(self, e: Edge) -> Point {
        Point::new(self.x + e.x, self.y + e.y)
    }
}

/// Convex polygon in canonical form.
///
/// Invariants:
/// - `len() <= 1`: empty set or a single point.
/// - `len() == 2`: two distinct points (a segment, traversed there and back).
/// - `len() >= 3`: strict left turn at every vertex, winding exactly once.
/// - `vertices[0]` is the lowest vertex, leftmost among ties.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Validate a counter-clockwise convex vertex list and rotate it to the
    /// canonical anchor.
    ///
    /// Policy: reject, never repair. Non-convex, clockwise, self-overlapping,
    /// duplicate or collinear vertices yield `GeomError::InvalidInput`; callers
    /// holding raw points should go through `build_hull` instead.
    pub fn from_vertices(vertices: Vec<Point>) -> Result<Self, GeomError> {
        if let Some(value) = vertices.iter().map(|p| p.magnitude()).max() {
            if value > COORD_LIMIT {
                return Err(Oversize::Coordinate {
                    value,
                    max: COORD_LIMIT,
                }
                .into());
            }
        }
        check_convex_ccw(&vertices)?;
        Ok(Self::from_canonical(rotate_to_anchor(vertices)))
    }

    /// Wrap vertices already known to satisfy the invariants.
    #[inline]
    pub(crate) fn from_canonical(vertices: Vec<Point>) -> Self {
        debug_assert!(check_convex_ccw(&vertices).is_ok(), "not convex ccw");
        debug_assert!(
            vertices.first() == anchor_of(&vertices).as_ref(),
            "not anchored"
        );
        Self { vertices }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Closed polygons enclose area; points and segments are open.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.vertices.len() >= 3
    }

    /// Lowest (then leftmost) vertex.
    #[inline]
    pub fn anchor(&self) -> Option<Point> {
        self.vertices.first().copied()
    }

    /// Cyclic edge vectors starting at the anchor, in increasing polar angle.
    ///
    /// A single point has no edges; a segment has two opposite ones.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let n = self.vertices.len();
        let count = if n >= 2 { n } else { 0 };
        (0..count).map(move |i| self.vertices[(i + 1) % n] - self.vertices[i])
    }

    /// Translate every vertex by `by`. Canonical form is preserved.
    ///
    /// Fails with `InputTooLarge` when the shifted polygon could leave
    /// `COORD_LIMIT`, the same bound `minkowski_sum` applies.
    pub fn translate(&self, by: Point) -> Result<Polygon, GeomError> {
        let reach = self.max_abs_coord().saturating_add(by.magnitude());
        if !self.is_empty() && reach > COORD_LIMIT {
            return Err(Oversize::Coordinate {
                value: reach,
                max: COORD_LIMIT,
            }
            .into());
        }
        Ok(Polygon {
            vertices: self.vertices.iter().map(|p| p.translate(by)).collect(),
        })
    }

    /// Twice the enclosed area, exact within `COORD_LIMIT`. Zero for open
    /// polygons.
    pub fn twice_area(&self) -> i128 {
        let v = &self.vertices;
        if v.len() < 3 {
            return 0;
        }
        // Fan from the anchor: every triangle is positive, partial sums stay in range.
        (1..v.len() - 1)
            .map(|i| orient(v[0], v[i], v[i + 1]))
            .sum()
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.twice_area() as f64 / 2.0
    }

    /// Membership test, boundary inclusive.
    pub fn contains(&self, p: Point) -> bool {
        let v = &self.vertices;
        match v.len() {
            0 => false,
            1 => v[0] == p,
            2 => {
                orient_sign(v[0], v[1], p) == Ordering::Equal
                    && p.x >= v[0].x.min(v[1].x)
                    && p.x <= v[0].x.max(v[1].x)
                    && p.y >= v[0].y.min(v[1].y)
                    && p.y <= v[0].y.max(v[1].y)
            }
            n => (0..n).all(|i| orient_sign(v[i], v[(i + 1) % n], p) != Ordering::Less),
        }
    }

    /// Largest absolute coordinate over all vertices (0 when empty).
    pub fn max_abs_coord(&self) -> u64 {
        self.vertices
            .iter()
            .map(|p| p.magnitude())
            .max()
            .unwrap_or(0)
    }
}

/// Lowest, then leftmost point.
#[inline]
pub(crate) fn anchor_of(points: &[Point]) -> Option<Point> {
    points.iter().copied().min_by_key(|p| (p.y, p.x))
}

/// Rotate a cyclic vertex list so it starts at its anchor.
pub(crate) fn rotate_to_anchor(mut vertices: Vec<Point>) -> Vec<Point> {
    if let Some(k) = (0..vertices.len()).min_by_key(|&i| (vertices[i].y, vertices[i].x)) {
        vertices.rotate_left(k);
    }
    vertices
}

/// Defensive input limits for the sum entry points.
///
/// `max_abs_coord` is clamped to `COORD_LIMIT`, beyond which the exact
/// predicates would overflow.
#[derive(Clone, Copy, Debug)]
pub struct SumCfg {
    pub max_points: usize,
    pub max_abs_coord: u64,
}

impl Default for SumCfg {
    fn default() -> Self {
        Self {
            max_points: 10_000_000,
            max_abs_coord: COORD_LIMIT,
        }
    }
}

impl SumCfg {
    /// Effective coordinate cap.
    #[inline]
    pub fn coord_cap(&self) -> u64 {
        self.max_abs_coord.min(COORD_LIMIT)
    }

    /// Fail fast on oversize raw input.
    pub fn check_points(&self, points: &[Point]) -> Result<(), GeomError> {
        if points.len() > self.max_points {
            return Err(Oversize::Points {
                len: points.len(),
                max: self.max_points,
            }
            .into());
        }
        let max = self.coord_cap();
        if let Some(p) = points.iter().find(|p| p.magnitude() > max) {
            return Err(Oversize::Coordinate {
                value: p.magnitude(),
                max,
            }
            .into());
        }
        Ok(())
    }
}
