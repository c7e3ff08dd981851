//! Exact 2D geometry on the integer lattice.
//!
//! Purpose
//! - Canonical convex polygons (`Polygon`) built from raw points by the
//!   monotone-chain hull, or validated from caller vertex lists.
//! - All predicates are exact (`i128` orientation, integer polar order); no
//!   tolerances anywhere.
//!
//! Conventions
//! - Counter-clockwise order, first vertex lowest then leftmost.
//! - Coordinates within `COORD_LIMIT` keep every predicate overflow-free.
//!
//! Code cross-refs: `Point`, `Polygon`, `SumCfg`, `build_hull`, `crate::sum`

mod check;
mod hull;
pub mod rand;
mod types;
mod util;

pub use hull::{build_hull, try_build_hull};
pub use types::{Edge, Point, Polygon, SumCfg, COORD_LIMIT};
pub use util::{cmp_polar, cross, orient, orient_sign};

#[cfg(test)]
mod tests;
