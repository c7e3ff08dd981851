use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use minkowski::geom2::rand::{draw_cloud, CloudCfg, CloudShape, PointCount, ReplayToken};
use minkowski::{minkowski_sum, try_build_hull, Point, SumCfg};
use serde_json::json;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod points;
mod provenance;
mod report;

use points::{read_points, write_points};
use provenance::{write_sidecar, Payload};
use report::{write_report, PolygonReport};

#[derive(Parser)]
#[command(name = "minkowski")]
#[command(about = "Minkowski sums of integer point sets", version)]
struct Cmd {
    /// Log at debug level
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Sum the point sets of two files and print the vertex count
    Sum {
        a: PathBuf,
        b: PathBuf,
        /// Write the result polygon as JSON (plus a provenance sidecar)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Reject inputs with more points than this
        #[arg(long)]
        max_points: Option<usize>,
    },
    /// Print the convex hull of a point file
    Hull {
        input: PathBuf,
        /// Write the hull as JSON (plus a provenance sidecar)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Write a random point file
    Gen {
        out: PathBuf,
        #[arg(long, default_value_t = 384)]
        points: usize,
        #[arg(long, value_enum, default_value_t = Shape::Disc)]
        shape: Shape,
        #[arg(long, default_value_t = 1000.0)]
        radius: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, ValueEnum)]
enum Shape {
    Disc,
    Ring,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Sum {
            a,
            b,
            out,
            max_points,
        } => sum(&a, &b, out.as_deref(), max_points, &mut io::stdout().lock()),
        Action::Hull { input, out } => hull(&input, out.as_deref(), &mut io::stdout().lock()),
        Action::Gen {
            out,
            points,
            shape,
            radius,
            seed,
            index,
        } => generate(&out, points, shape, radius, ReplayToken { seed, index }),
        Action::Report => report(),
    }
}

fn elapsed_ms(t: Instant) -> u64 {
    t.elapsed().as_millis() as u64
}

fn load(path: &Path, stage: &'static str) -> Result<Vec<Point>> {
    let t = Instant::now();
    let pts = read_points(path).with_context(|| format!("reading {}", path.display()))?;
    tracing::info!(stage, path = %path.display(), points = pts.len(), ms = elapsed_ms(t), "loaded");
    Ok(pts)
}

fn sum(
    a: &Path,
    b: &Path,
    out: Option<&Path>,
    max_points: Option<usize>,
    stdout: &mut impl Write,
) -> Result<()> {
    let mut cfg = SumCfg::default();
    if let Some(max) = max_points {
        cfg.max_points = max;
    }
    let pts_a = load(a, "read_a")?;
    let pts_b = load(b, "read_b")?;

    let t = Instant::now();
    let hull_a = try_build_hull(&pts_a, &cfg).context("input A")?;
    let hull_b = try_build_hull(&pts_b, &cfg).context("input B")?;
    tracing::debug!(hull_a = hull_a.len(), hull_b = hull_b.len(), ms = elapsed_ms(t), "hulls");

    let t = Instant::now();
    let result = minkowski_sum(&hull_a, &hull_b, &cfg)?;
    tracing::info!(stage = "sum", vertices = result.len(), ms = elapsed_ms(t), "summed");

    if let Some(out) = out {
        let t = Instant::now();
        write_report(out, &PolygonReport::from(&result))?;
        let payload = Payload::new(
            [a.to_string_lossy(), b.to_string_lossy()],
            json!({ "op": "sum", "max_points": cfg.max_points }),
        );
        let prov = write_sidecar(out, payload)?;
        tracing::info!(
            stage = "write",
            out = %out.display(),
            provenance = %prov.display(),
            ms = elapsed_ms(t),
            "wrote"
        );
    }
    writeln!(stdout, "N points: {}", result.len())?;
    Ok(())
}

fn hull(input: &Path, out: Option<&Path>, stdout: &mut impl Write) -> Result<()> {
    let pts = load(input, "read")?;
    let t = Instant::now();
    let h = try_build_hull(&pts, &SumCfg::default()).context("input")?;
    tracing::info!(stage = "hull", vertices = h.len(), ms = elapsed_ms(t), "hull");
    for v in h.vertices() {
        writeln!(stdout, "{},{}", v.x, v.y)?;
    }
    if let Some(out) = out {
        let t = Instant::now();
        write_report(out, &PolygonReport::from(&h))?;
        let payload = Payload::new([input.to_string_lossy()], json!({ "op": "hull" }));
        let prov = write_sidecar(out, payload)?;
        tracing::info!(
            stage = "write",
            out = %out.display(),
            provenance = %prov.display(),
            ms = elapsed_ms(t),
            "wrote"
        );
    }
    Ok(())
}

fn generate(out: &Path, n: usize, shape: Shape, radius: f64, tok: ReplayToken) -> Result<()> {
    let shape = match shape {
        Shape::Disc => CloudShape::Disc,
        Shape::Ring => CloudShape::Ring {
            angle_jitter_frac: 0.3,
            radial_jitter: 0.01,
        },
    };
    let cfg = CloudCfg {
        point_count: PointCount::Fixed(n),
        shape,
        radius,
        ..CloudCfg::default()
    };
    let pts = draw_cloud(cfg, tok);
    write_points(out, &pts).with_context(|| format!("writing {}", out.display()))?;
    tracing::info!(out = %out.display(), points = pts.len(), seed = tok.seed, index = tok.index, "gen");
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "version": minkowski::VERSION,
        "inputs": [],
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
