//! Exact Minkowski sums of integer point sets in the plane.
//!
//! Pipeline: raw points → `build_hull` (per input) → `minkowski_sum` → result
//! polygon. `minkowski_sum_points` runs the whole pipeline in one call.
//!
//! Everything here is a pure function over immutable values: no logging, no
//! retries, no global state. Errors are returned to the immediate caller.

pub mod error;
pub mod geom2;
pub mod sum;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{Defect, GeomError, Oversize};
pub use geom2::{build_hull, try_build_hull, Point, Polygon, SumCfg, COORD_LIMIT};
pub use sum::{minkowski_sum, minkowski_sum_points};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{
        draw_cloud, draw_convex_polygon, CloudCfg, CloudShape, PointCount, ReplayToken,
    };
    pub use crate::geom2::{build_hull, try_build_hull, Edge, Point, Polygon, SumCfg};
    pub use crate::sum::{minkowski_sum, minkowski_sum_points};
    pub use crate::GeomError;
}
