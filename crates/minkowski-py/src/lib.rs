//! PyO3 bindings for the `minkowski` crate.
//!
//! Notes
//! - Bindings stay thin: point sets cross the boundary as lists of `(x, y)`
//!   integer tuples and come back the same way, in counter-clockwise order.
//! - Any library error surfaces as `ValueError` with the library's message.

use pyo3::prelude::*;

mod common;
mod sum;

#[pymodule]
fn minkowski_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", minkowski::VERSION)?;
    sum::register(m)?;
    Ok(())
}
