//! Errors surfaced by the hull and sum entry points.
//!
//! The core never recovers silently: a polygon that fails validation is
//! rejected with [`GeomError::InvalidInput`], and inputs beyond the limits of
//! [`crate::SumCfg`] fail fast with [`GeomError::InputTooLarge`].

use std::fmt;

/// What is wrong with a vertex sequence handed to `Polygon::from_vertices`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Defect {
    /// Vertex `index` repeats its predecessor.
    DuplicateVertex { index: usize },
    /// Vertex `index` lies on the line through its neighbours.
    CollinearVertex { index: usize },
    /// Vertex `index` turns right in an otherwise counter-clockwise boundary.
    ReflexVertex { index: usize },
    /// Every turn is to the right: the boundary is listed clockwise.
    Clockwise,
    /// Every turn is to the left but the boundary winds more than once.
    SelfOverlapping,
}

/// Which defensive limit was exceeded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Oversize {
    /// An input holds `len` points, more than `max`.
    Points { len: usize, max: usize },
    /// A coordinate magnitude (or the sum of two) of `value` exceeds `max`.
    Coordinate { value: u64, max: u64 },
}

/// Errors of the geometry core.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeomError {
    /// A polygon is not convex, or not counter-clockwise, or not simple.
    InvalidInput(Defect),
    /// A defensive size cap was exceeded.
    InputTooLarge(Oversize),
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Defect::DuplicateVertex { index } => {
                write!(f, "vertex {index} duplicates the previous vertex")
            }
            Defect::CollinearVertex { index } => {
                write!(f, "vertex {index} is collinear with its neighbours")
            }
            Defect::ReflexVertex { index } => write!(f, "vertex {index} is reflex (not convex)"),
            Defect::Clockwise => write!(f, "vertices are listed clockwise"),
            Defect::SelfOverlapping => write!(f, "boundary winds around more than once"),
        }
    }
}

impl fmt::Display for Oversize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Oversize::Points { len, max } => write!(f, "{len} points exceed the cap of {max}"),
            Oversize::Coordinate { value, max } => {
                write!(f, "coordinate magnitude {value} exceeds the cap of {max}")
            }
        }
    }
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeomError::InvalidInput(d) => write!(f, "invalid polygon: {d}"),
            GeomError::InputTooLarge(o) => write!(f, "input too large: {o}"),
        }
    }
}

impl std::error::Error for GeomError {}

impl From<Defect> for GeomError {
    fn from(d: Defect) -> Self {
        GeomError::InvalidInput(d)
    }
}

impl From<Oversize> for GeomError {
    fn from(o: Oversize) -> Self {
        GeomError::InputTooLarge(o)
    }
}
