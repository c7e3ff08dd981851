//! Point files: one `x,y` integer pair per line, no header.
//!
//! Surrounding whitespace is trimmed and blank lines are skipped. Anything
//! else that is not two comma-separated integers is a parse error carrying the
//! 1-based line number.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use minkowski::Point;

/// Errors of the point-file reader.
#[derive(Debug)]
pub enum ReadError {
    Io(io::Error),
    /// Line `line` (1-based) is not an `x,y` integer pair.
    Parse { line: usize, content: String },
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Io(e) => write!(f, "i/o error: {e}"),
            ReadError::Parse { line, content } => {
                write!(f, "line {line}: expected `x,y` integers, got {content:?}")
            }
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadError::Io(e) => Some(e),
            ReadError::Parse { .. } => None,
        }
    }
}

impl From<io::Error> for ReadError {
    fn from(e: io::Error) -> Self {
        ReadError::Io(e)
    }
}

/// Read a point file.
pub fn read_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point>, ReadError> {
    parse_points(BufReader::new(File::open(path)?))
}

/// Parse points from any line-oriented reader.
pub fn parse_points<R: BufRead>(reader: R) -> Result<Vec<Point>, ReadError> {
    let mut out = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let p = parse_line(trimmed).ok_or_else(|| ReadError::Parse {
            line: i + 1,
            content: line.clone(),
        })?;
        out.push(p);
    }
    Ok(out)
}

fn parse_line(s: &str) -> Option<Point> {
    let (x, y) = s.split_once(',')?;
    Some(Point::new(x.trim().parse().ok()?, y.trim().parse().ok()?))
}

/// Write points in the same format `read_points` accepts.
pub fn write_points<P: AsRef<Path>>(path: P, points: &[Point]) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    for p in points {
        writeln!(w, "{},{}", p.x, p.y)?;
    }
    w.flush()
}
