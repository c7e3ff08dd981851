//! Random integer point clouds (disc fill or jittered ring) with replay tokens.
//!
//! Purpose
//! - Deterministic inputs for benches, property tests and the CLI `gen`
//!   subcommand. A `(seed, index)` token always reproduces the same cloud.
//!
//! Model
//! - Disc: `n` points uniform in a disc of radius `r` (area-uniform via
//!   `r·sqrt(u)`); the hull keeps only a small fraction of them.
//! - Ring: `n` equally spaced angles with bounded angular and radial jitter;
//!   most points end up as hull vertices.
//! - Sampling is done in `f64` and rounded to the integer lattice.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::hull::build_hull;
use super::types::{Point, Polygon};

/// Point count distribution.
#[derive(Clone, Copy, Debug)]
pub enum PointCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl PointCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            PointCount::Fixed(n) => n,
            PointCount::Uniform { min, max } => rng.gen_range(min..=max.max(min)),
        }
    }
}

/// Where the points of a cloud are placed.
#[derive(Clone, Copy, Debug)]
pub enum CloudShape {
    /// Area-uniform in the disc.
    Disc,
    /// Near the circle. `angle_jitter_frac` is a fraction of the spacing
    /// 2π/n (clamped to [0, 0.49]); radii are `radius * (1 + u)` with
    /// `u ∈ [-radial_jitter, radial_jitter]`.
    Ring {
        angle_jitter_frac: f64,
        radial_jitter: f64,
    },
}

/// Cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub point_count: PointCount,
    pub shape: CloudShape,
    pub radius: f64,
    pub center: Point,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            point_count: PointCount::Fixed(384),
            shape: CloudShape::Disc,
            radius: 1000.0,
            center: Point::new(0, 0),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer over seed and index.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(
            self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)),
        ))
    }
}

#[inline]
fn polar(theta: f64, r: f64) -> Vector2<f64> {
    Vector2::new(theta.cos(), theta.sin()) * r
}

#[inline]
fn to_lattice(v: Vector2<f64>, center: Point) -> Point {
    Point::new(v.x.round() as i64, v.y.round() as i64).translate(center)
}

/// Draw a point cloud. Duplicates after rounding are kept.
pub fn draw_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let n = cfg.point_count.sample(&mut rng);
    let r0 = cfg.radius.max(0.0);
    let tau = std::f64::consts::TAU;
    match cfg.shape {
        CloudShape::Disc => (0..n)
            .map(|_| {
                let theta = rng.gen::<f64>() * tau;
                let r = r0 * rng.gen::<f64>().sqrt();
                to_lattice(polar(theta, r), cfg.center)
            })
            .collect(),
        CloudShape::Ring {
            angle_jitter_frac,
            radial_jitter,
        } => {
            let aj = angle_jitter_frac.clamp(0.0, 0.49);
            let rj = radial_jitter.max(0.0);
            let delta = tau / (n.max(1) as f64);
            let phase = rng.gen::<f64>() * tau;
            (0..n)
                .map(|k| {
                    let theta =
                        phase + (k as f64) * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
                    let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
                    to_lattice(polar(theta, r0 * (1.0 + u).max(0.0)), cfg.center)
                })
                .collect()
        }
    }
}

/// Hull of a drawn cloud.
#[inline]
pub fn draw_convex_polygon(cfg: CloudCfg, tok: ReplayToken) -> Polygon {
    build_hull(&draw_cloud(cfg, tok))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(n: usize) -> CloudCfg {
        CloudCfg {
            point_count: PointCount::Fixed(n),
            shape: CloudShape::Ring {
                angle_jitter_frac: 0.2,
                radial_jitter: 0.002,
            },
            radius: 10_000.0,
            center: Point::new(0, 0),
        }
    }

    #[test]
    fn reproducible_draw() {
        let tok = ReplayToken { seed: 42, index: 7 };
        assert_eq!(draw_cloud(ring(20), tok), draw_cloud(ring(20), tok));
        let other = ReplayToken { seed: 42, index: 8 };
        assert_ne!(draw_cloud(ring(20), tok), draw_cloud(ring(20), other));
    }

    #[test]
    fn disc_stays_in_radius() {
        let cfg = CloudCfg {
            center: Point::new(500, -500),
            ..CloudCfg::default()
        };
        let pts = draw_cloud(cfg, ReplayToken { seed: 3, index: 0 });
        assert_eq!(pts.len(), 384);
        for p in pts {
            let dx = (p.x - 500) as f64;
            let dy = (p.y + 500) as f64;
            assert!((dx * dx + dy * dy).sqrt() <= 1000.0 + 1.0);
        }
    }

    #[test]
    fn ring_hull_keeps_most_points() {
        let poly = draw_convex_polygon(ring(32), ReplayToken { seed: 9, index: 1 });
        assert!(poly.is_closed());
        assert!(poly.len() >= 30, "hull has {} vertices", poly.len());
    }

    #[test]
    fn uniform_count_in_range() {
        let cfg = CloudCfg {
            point_count: PointCount::Uniform { min: 5, max: 9 },
            ..CloudCfg::default()
        };
        for index in 0..20 {
            let n = draw_cloud(cfg, ReplayToken { seed: 1, index }).len();
            assert!((5..=9).contains(&n));
        }
    }
}
