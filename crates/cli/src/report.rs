//! JSON rendering of a result polygon.

use anyhow::{Context, Result};
use minkowski::Polygon;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Serialized polygon: each point as two integers, plus an explicit
/// closed/open flag (points and segments are open).
#[derive(Debug, Serialize)]
pub struct PolygonReport {
    pub closed: bool,
    pub vertices: Vec<[i64; 2]>,
    pub area: f64,
}

impl From<&Polygon> for PolygonReport {
    fn from(p: &Polygon) -> Self {
        Self {
            closed: p.is_closed(),
            vertices: p.vertices().iter().map(|v| [v.x, v.y]).collect(),
            area: p.area(),
        }
    }
}

/// Write the report as pretty JSON, creating parent directories.
pub fn write_report<P: AsRef<Path>>(path: P, report: &PolygonReport) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(report)?)
        .with_context(|| format!("writing {}", path.display()))
}
