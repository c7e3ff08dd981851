use minkowski::{GeomError, Point, Polygon};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

pub fn points_from_py(pts: Vec<(i64, i64)>) -> Vec<Point> {
    pts.into_iter().map(Point::from).collect()
}

pub fn polygon_to_py(poly: &Polygon) -> Vec<(i64, i64)> {
    poly.vertices().iter().map(|&v| v.into()).collect()
}

pub fn map_geom_err(err: GeomError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
