//! Print hull and sum sizes for a few random clouds.
//!
//! Usage:
//!   cargo run -p minkowski --example random_sums -- disc
//!   cargo run -p minkowski --example random_sums -- ring
//!
//! Disc clouds keep few hull vertices; ring clouds keep most of them. The sum
//! never has more vertices than both hulls together.

use minkowski::prelude::*;

fn main() {
    let mode = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "disc".to_string());
    let shape = match mode.as_str() {
        "disc" => CloudShape::Disc,
        "ring" => CloudShape::Ring {
            angle_jitter_frac: 0.3,
            radial_jitter: 0.01,
        },
        _ => {
            eprintln!("usage: random_sums [disc|ring]");
            return;
        }
    };
    let cfg = CloudCfg {
        point_count: PointCount::Uniform { min: 50, max: 500 },
        shape,
        ..CloudCfg::default()
    };
    for i in 0..5 {
        let a = draw_cloud(cfg, ReplayToken { seed: 2025, index: 2 * i });
        let b = draw_cloud(cfg, ReplayToken { seed: 2025, index: 2 * i + 1 });
        let (ha, hb) = (build_hull(&a), build_hull(&b));
        match minkowski_sum(&ha, &hb, &SumCfg::default()) {
            Ok(s) => println!(
                "sample {i}: |A|={} |B|={} hull A={} hull B={} sum={} area={}",
                a.len(),
                b.len(),
                ha.len(),
                hb.len(),
                s.len(),
                s.area()
            ),
            Err(e) => eprintln!("sample {i}: {e}"),
        }
    }
}
