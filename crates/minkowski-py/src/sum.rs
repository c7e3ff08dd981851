//! Sum and hull bindings (kept separate so `lib.rs` stays tiny).

use crate::common::{map_geom_err, points_from_py, polygon_to_py};
use minkowski::{minkowski_sum_points, try_build_hull, SumCfg};
use pyo3::prelude::*;

/// Vertices of the Minkowski sum of two point sets.
///
/// Each input is hulled first, so interior and repeated points are allowed.
#[pyfunction]
pub fn minkowski_sum(a: Vec<(i64, i64)>, b: Vec<(i64, i64)>) -> PyResult<Vec<(i64, i64)>> {
    let (a, b) = (points_from_py(a), points_from_py(b));
    let poly = minkowski_sum_points(&a, &b, &SumCfg::default()).map_err(map_geom_err)?;
    Ok(polygon_to_py(&poly))
}

/// Convex hull vertices of a point set, counter-clockwise from the lowest point.
#[pyfunction]
pub fn convex_hull(points: Vec<(i64, i64)>) -> PyResult<Vec<(i64, i64)>> {
    let pts = points_from_py(points);
    let hull = try_build_hull(&pts, &SumCfg::default()).map_err(map_geom_err)?;
    Ok(polygon_to_py(&hull))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(minkowski_sum, m)?)?;
    m.add_function(wrap_pyfunction!(convex_hull, m)?)?;
    Ok(())
}
