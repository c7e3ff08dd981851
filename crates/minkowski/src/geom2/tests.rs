use super::*;
use crate::error::{Defect, GeomError, Oversize};
use nalgebra::vector;
use std::cmp::Ordering;

fn pts(raw: &[(i64, i64)]) -> Vec<Point> {
    raw.iter().copied().map(Point::from).collect()
}

#[test]
fn hull_empty_and_single() {
    assert!(build_hull(&[]).is_empty());
    let single = build_hull(&pts(&[(3, 4), (3, 4), (3, 4)]));
    assert_eq!(single.vertices(), pts(&[(3, 4)]).as_slice());
    assert!(!single.is_closed());
}

#[test]
fn hull_collinear_keeps_extremes() {
    let diag = build_hull(&pts(&[(0, 0), (1, 1), (2, 2), (3, 3), (-1, -1)]));
    assert_eq!(diag.vertices(), pts(&[(-1, -1), (3, 3)]).as_slice());
    let flat = build_hull(&pts(&[(5, 0), (1, 0), (3, 0)]));
    assert_eq!(flat.vertices(), pts(&[(1, 0), (5, 0)]).as_slice());
    // Anchor is the lower endpoint, not the leftmost one.
    let falling = build_hull(&pts(&[(0, 3), (1, 2), (2, 1)]));
    assert_eq!(falling.vertices(), pts(&[(2, 1), (0, 3)]).as_slice());
}

#[test]
fn hull_drops_interior_and_boundary_points() {
    let hull = build_hull(&pts(&[
        (0, 0),
        (2, 0),
        (2, 2),
        (0, 2),
        (1, 1),
        (1, 0),
        (2, 1),
    ]));
    assert_eq!(hull.vertices(), pts(&[(0, 0), (2, 0), (2, 2), (0, 2)]).as_slice());
}

#[test]
fn hull_starts_at_lowest_then_leftmost() {
    let tri = build_hull(&pts(&[(5, 1), (3, 4), (0, 1)]));
    assert_eq!(tri.vertices(), pts(&[(0, 1), (5, 1), (3, 4)]).as_slice());
    let diamond = build_hull(&pts(&[(0, 5), (3, 0), (6, 5), (3, 9)]));
    assert_eq!(diamond.anchor(), Some(Point::new(3, 0)));
    assert_eq!(
        diamond.vertices(),
        pts(&[(3, 0), (6, 5), (3, 9), (0, 5)]).as_slice()
    );
}

#[test]
fn from_vertices_rotates_to_anchor() {
    let p = Polygon::from_vertices(pts(&[(2, 2), (0, 2), (0, 0), (2, 0)])).unwrap();
    assert_eq!(p, build_hull(&pts(&[(0, 0), (2, 0), (2, 2), (0, 2)])));
    let seg = Polygon::from_vertices(pts(&[(4, 4), (1, 1)])).unwrap();
    assert_eq!(seg.vertices(), pts(&[(1, 1), (4, 4)]).as_slice());
}

#[test]
fn from_vertices_rejects_defects() {
    let cases: &[(&[(i64, i64)], Defect)] = &[
        (
            &[(0, 0), (1, 0), (1, 0), (0, 1)],
            Defect::DuplicateVertex { index: 2 },
        ),
        (&[(1, 1), (1, 1)], Defect::DuplicateVertex { index: 1 }),
        (
            &[(0, 0), (1, 0), (2, 0), (0, 2)],
            Defect::CollinearVertex { index: 1 },
        ),
        (
            &[(0, 0), (4, 0), (4, 4), (2, 1), (0, 4)],
            Defect::ReflexVertex { index: 3 },
        ),
        (&[(0, 0), (0, 1), (1, 1), (1, 0)], Defect::Clockwise),
        // Pentagram: every turn is left, but it winds twice.
        (
            &[(0, 10), (-6, -8), (10, 3), (-10, 3), (6, -8)],
            Defect::SelfOverlapping,
        ),
    ];
    for (raw, defect) in cases {
        assert_eq!(
            Polygon::from_vertices(pts(raw)),
            Err(GeomError::InvalidInput(*defect)),
            "input {raw:?}"
        );
    }
}

#[test]
fn from_vertices_rejects_huge_coordinates() {
    let err = Polygon::from_vertices(vec![Point::new(i64::MAX, 0)]).unwrap_err();
    assert_eq!(
        err,
        GeomError::InputTooLarge(Oversize::Coordinate {
            value: i64::MAX as u64,
            max: COORD_LIMIT,
        })
    );
}

#[test]
fn area_and_containment() {
    let square = build_hull(&pts(&[(0, 0), (2, 0), (2, 2), (0, 2)]));
    assert_eq!(square.twice_area(), 8);
    assert!((square.area() - 4.0).abs() < 1e-12);
    assert!(square.contains(Point::new(1, 1)));
    assert!(square.contains(Point::new(2, 1)));
    assert!(!square.contains(Point::new(3, 1)));

    let seg = build_hull(&pts(&[(0, 0), (2, 2)]));
    assert_eq!(seg.twice_area(), 0);
    assert!(seg.contains(Point::new(1, 1)));
    assert!(!seg.contains(Point::new(1, 0)));
    assert!(!seg.contains(Point::new(3, 3)));
    assert!(!Polygon::empty().contains(Point::new(0, 0)));
}

#[test]
fn edges_and_translation() {
    let seg = build_hull(&pts(&[(2, 2), (0, 0)]));
    let edges: Vec<Edge> = seg.edges().collect();
    assert_eq!(edges, vec![vector![2, 2], vector![-2, -2]]);
    assert_eq!(build_hull(&pts(&[(7, 7)])).edges().count(), 0);

    let moved = seg.translate(Point::new(-1, 5)).unwrap();
    assert_eq!(moved.vertices(), pts(&[(-1, 5), (1, 7)]).as_slice());
    assert_eq!(moved.max_abs_coord(), 7);

    let edge = COORD_LIMIT as i64;
    let at_cap = build_hull(&pts(&[(edge, 0), (0, 0)]));
    assert_eq!(
        at_cap.translate(Point::new(0, 1)),
        Err(GeomError::InputTooLarge(Oversize::Coordinate {
            value: COORD_LIMIT + 1,
            max: COORD_LIMIT,
        }))
    );
    assert_eq!(Polygon::empty().translate(Point::new(i64::MAX, 0)), Ok(Polygon::empty()));
}

#[test]
fn hull_is_total_over_i64() {
    let wide = build_hull(&pts(&[(i64::MIN, 0), (i64::MAX, 0), (0, 1)]));
    assert_eq!(
        wide.vertices(),
        pts(&[(i64::MIN, 0), (i64::MAX, 0), (0, 1)]).as_slice()
    );

    // Turn products here reach 2^128, past i128.
    let (lo, hi) = (i64::MIN, i64::MAX);
    let square = build_hull(&pts(&[
        (0, 0),
        (hi, hi),
        (lo, hi),
        (0, lo),
        (lo, lo),
        (hi, lo),
        (hi, 0),
    ]));
    let corners = pts(&[(lo, lo), (hi, lo), (hi, hi), (lo, hi)]);
    assert_eq!(square.vertices(), corners.as_slice());
    assert!(square.contains(Point::new(0, 0)));
    assert!(square.contains(Point::new(0, lo)));
    assert!(!build_hull(&pts(&[(lo, lo), (hi, hi)])).contains(Point::new(lo, hi)));

    let mut clockwise = corners;
    clockwise.reverse();
    assert_eq!(check::check_convex_ccw(&clockwise), Err(Defect::Clockwise));
}

#[test]
fn polar_order_is_exact() {
    let seq = [
        vector![1, 0],
        vector![5, 1],
        vector![0, 1],
        vector![-1, 0],
        vector![-3, -1],
        vector![0, -1],
        vector![1, -1],
    ];
    for w in seq.windows(2) {
        assert_eq!(cmp_polar(w[0], w[1]), Ordering::Less, "{:?}", w);
    }
    assert_eq!(cmp_polar(vector![2, 0], vector![1, 0]), Ordering::Equal);
    assert_eq!(cross(vector![1, 0], vector![0, 1]), 1);
    assert!(orient(Point::new(0, 0), Point::new(1, 0), Point::new(0, 1)) > 0);
}

#[test]
fn limits_fail_fast() {
    let cfg = SumCfg {
        max_points: 2,
        ..SumCfg::default()
    };
    let three = pts(&[(0, 0), (1, 0), (0, 1)]);
    assert_eq!(
        try_build_hull(&three, &cfg),
        Err(GeomError::InputTooLarge(Oversize::Points { len: 3, max: 2 }))
    );
    let cfg = SumCfg {
        max_abs_coord: 10,
        ..SumCfg::default()
    };
    assert_eq!(
        cfg.check_points(&pts(&[(0, 0), (-11, 3)])),
        Err(GeomError::InputTooLarge(Oversize::Coordinate {
            value: 11,
            max: 10
        }))
    );
    assert!(try_build_hull(&three, &cfg).is_ok());
}
