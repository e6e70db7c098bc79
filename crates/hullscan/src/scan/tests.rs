use super::*;
use crate::geom::{orientation, Orientation, Point};
use crate::rand::regular_polygon;
use crate::sort::SortStrategy;
use crate::stack::StackError;
use nalgebra::vector;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::error::Error;
use std::f64::consts::PI;

fn cfg(sort: SortStrategy) -> HullCfg {
    HullCfg::default().with_sort(sort)
}

fn standard_points() -> Vec<Point> {
    vec![
        vector![5.0, 5.0],
        vector![10.0, 2.5],
        vector![5.0, 10.0],
        vector![10.0, 0.0],
        vector![7.5, 0.0],
        vector![5.0, 0.0],
        vector![0.0, 0.0],
        vector![1.0, 8.0],
        vector![0.0, 10.0],
    ]
}

/// Every hull edge keeps `p` on its left or on the edge itself.
fn inside_or_on(hull: &[Point], p: Point) -> bool {
    (0..hull.len()).all(|i| {
        let a = hull[i];
        let b = hull[(i + 1) % hull.len()];
        orientation(a, b, p) != Orientation::Clockwise
    })
}

/// Like [`inside_or_on`], allowing `p` up to `tol` outside an edge.
fn inside_within(hull: &[Point], p: Point, tol: f64) -> bool {
    (0..hull.len()).all(|i| {
        let a = hull[i];
        let b = hull[(i + 1) % hull.len()];
        let len = (b - a).norm();
        len == 0.0 || ((b - a).x * (p - a).y - (b - a).y * (p - a).x) / len >= -tol
    })
}

fn strictly_ccw(hull: &[Point]) -> bool {
    let n = hull.len();
    (0..n).all(|i| orientation(hull[i], hull[(i + 1) % n], hull[(i + 2) % n]).is_left_turn())
}

#[test]
fn standard_set_both_backends() {
    let expected = vec![
        vector![0.0, 0.0],
        vector![10.0, 0.0],
        vector![10.0, 2.5],
        vector![5.0, 10.0],
        vector![0.0, 10.0],
    ];
    for sort in SortStrategy::ALL {
        let mut pts = standard_points();
        let hull = graham_scan(&mut pts, cfg(sort)).unwrap();
        assert_eq!(hull, expected, "backend {sort}");
    }
}

#[test]
fn square_drops_interior_and_edge_points() {
    let pts = vec![
        vector![0.0, 0.0],
        vector![10.0, 0.0],
        vector![10.0, 10.0],
        vector![0.0, 10.0],
        vector![5.0, 5.0],
        vector![5.0, 0.0],
    ];
    let hull = convex_hull(&pts, HullCfg::default()).unwrap();
    assert_eq!(
        hull,
        vec![
            vector![0.0, 0.0],
            vector![10.0, 0.0],
            vector![10.0, 10.0],
            vector![0.0, 10.0],
        ]
    );
}

#[test]
fn collinear_on_last_ray_keeps_farthest() {
    let pts = vec![
        vector![0.0, 0.0],
        vector![4.0, 0.0],
        vector![0.0, 4.0],
        vector![0.0, 2.0],
        vector![4.0, 4.0],
    ];
    let hull = convex_hull(&pts, HullCfg::default()).unwrap();
    assert_eq!(
        hull,
        vec![
            vector![0.0, 0.0],
            vector![4.0, 0.0],
            vector![4.0, 4.0],
            vector![0.0, 4.0],
        ]
    );
}

#[test]
fn far_point_on_a_shared_ray_is_kept() {
    // atan2 ranks (2.87, 1.23) below (0.7, 0.3) although it is farther out.
    let pts = vec![
        vector![0.0, 0.0],
        vector![2.87, 1.23],
        vector![0.7, 0.3],
        vector![0.0, 5.0],
    ];
    let expected = vec![vector![0.0, 0.0], vector![2.87, 1.23], vector![0.0, 5.0]];
    for sort in SortStrategy::ALL {
        assert_eq!(convex_hull(&pts, cfg(sort)).unwrap(), expected, "{sort}");
    }

    // Raw cross products between these round away from zero.
    let ray = vec![
        vector![0.07, 0.03],
        vector![7.7, 3.3],
        vector![0.0, 0.0],
        vector![2.87, 1.23],
        vector![0.0, 5.0],
        vector![0.7, 0.3],
    ];
    let expected = vec![vector![0.0, 0.0], vector![7.7, 3.3], vector![0.0, 5.0]];
    for sort in SortStrategy::ALL {
        let hull = convex_hull(&ray, cfg(sort)).unwrap();
        assert_eq!(hull, expected, "{sort}");
        assert!(strictly_ccw(&hull));
    }
}

/// Points scattered along a few rays from a common lowest point, plus some
/// interior filler, at scales from 1e-3 to 1e3.
fn shared_rays(rng: &mut StdRng) -> (Vec<Point>, f64) {
    let anchor = vector![rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)];
    let scale = 10f64.powf(rng.gen_range(-3.0..3.0));
    let mut pts = vec![anchor];
    for _ in 0..rng.gen_range(2..7) {
        let theta = rng.gen_range(0.01..PI - 0.01);
        let dir = vector![theta.cos(), theta.sin()];
        for _ in 0..rng.gen_range(1..5) {
            pts.push(anchor + rng.gen_range(0.1..10.0) * scale * dir);
        }
    }
    for _ in 0..rng.gen_range(0..6) {
        let offset = vector![rng.gen_range(-10.0..10.0), rng.gen_range(0.01..10.0)];
        pts.push(anchor + scale * offset);
    }
    // Shuffle so the sort, not the input order, decides.
    for i in (1..pts.len()).rev() {
        let j = rng.gen_range(0..=i);
        pts.swap(i, j);
    }
    (pts, scale)
}

#[test]
fn shared_rays_seeded() {
    let mut rng = StdRng::seed_from_u64(2632);
    for trial in 0..3000 {
        let (pts, scale) = shared_rays(&mut rng);
        let sel = convex_hull(&pts, cfg(SortStrategy::Selection)).unwrap();
        let heap = convex_hull(&pts, cfg(SortStrategy::Heap)).unwrap();
        assert_eq!(sel, heap, "trial {trial}");
        assert!(heap.len() >= 3, "trial {trial}");
        assert!(strictly_ccw(&heap), "trial {trial}: {heap:?}");
        for p in &pts {
            assert!(
                inside_within(&heap, *p, 1e-9 * scale),
                "trial {trial}: {p:?} outside {heap:?}"
            );
        }
    }
}

#[test]
fn triangle_is_ccw_from_anchor() {
    let pts = vec![vector![4.0, 4.0], vector![4.0, 0.0], vector![0.0, 0.0]];
    for sort in SortStrategy::ALL {
        let hull = convex_hull(&pts, cfg(sort)).unwrap();
        assert_eq!(
            hull,
            vec![vector![0.0, 0.0], vector![4.0, 0.0], vector![4.0, 4.0]]
        );
        assert!(strictly_ccw(&hull));
    }
}

#[test]
fn fewer_than_three_points_returned_unchanged() {
    let none: Vec<Point> = vec![];
    assert!(convex_hull(&none, HullCfg::default()).unwrap().is_empty());
    let one = vec![vector![1.0, 2.0]];
    assert_eq!(convex_hull(&one, HullCfg::default()).unwrap(), one);
    let two = vec![vector![3.0, 3.0], vector![1.0, 2.0]];
    assert_eq!(convex_hull(&two, HullCfg::default()).unwrap(), two);
}

#[test]
fn fully_collinear_yields_anchor_and_farthest() {
    let pts = vec![vector![1.0, 1.0], vector![2.0, 2.0], vector![0.0, 0.0]];
    for sort in SortStrategy::ALL {
        let hull = convex_hull(&pts, cfg(sort)).unwrap();
        assert_eq!(hull, vec![vector![0.0, 0.0], vector![2.0, 2.0]]);
    }
}

#[test]
fn all_duplicates_collapse_to_anchor() {
    let pts = vec![vector![1.5, -1.0]; 5];
    let hull = convex_hull(&pts, HullCfg::default()).unwrap();
    assert_eq!(hull, vec![vector![1.5, -1.0]]);
}

#[test]
fn duplicated_vertices_appear_once() {
    let mut pts = standard_points();
    pts.extend(standard_points());
    let hull = convex_hull(&pts, HullCfg::default()).unwrap();
    assert_eq!(hull.len(), 5);
    assert_eq!(hull[0], vector![0.0, 0.0]);
}

#[test]
fn regular_polygon_keeps_every_vertex() {
    let pts = regular_polygon(72, 2.0);
    for sort in SortStrategy::ALL {
        let hull = convex_hull(&pts, cfg(sort)).unwrap();
        assert_eq!(hull.len(), 72);
        // anchor is the vertex at 270°
        assert!((hull[0].y + 2.0).abs() < 1e-12);
        assert!(strictly_ccw(&hull));
    }
}

#[test]
fn graham_scan_sorts_the_slice_in_place() {
    let mut pts = standard_points();
    let _ = graham_scan(&mut pts, HullCfg::default()).unwrap();
    assert_eq!(pts[0], vector![0.0, 0.0]);
    assert_eq!(pts[pts.len() - 1], vector![0.0, 10.0]);

    let original = standard_points();
    let _ = convex_hull(&original, HullCfg::default()).unwrap();
    assert_eq!(original, standard_points());
}

#[test]
fn capacity_bound_is_enforced() {
    let pts = standard_points();
    let tight = HullCfg::default().with_capacity(pts.len());
    assert!(convex_hull(&pts, tight).is_ok());

    let small = HullCfg::default().with_capacity(pts.len() - 1);
    let err = convex_hull(&pts, small).unwrap_err();
    assert_eq!(
        err,
        HullError::TooManyPoints {
            count: 9,
            capacity: 8
        }
    );
    assert!(err.to_string().contains("too many points"));
    assert!(err.source().is_none());
}

#[test]
fn stack_errors_convert_and_chain() {
    let err: HullError = StackError::Overflow { capacity: 3 }.into();
    assert_eq!(err, HullError::Stack(StackError::Overflow { capacity: 3 }));
    assert!(err.source().is_some());
    assert!(err.to_string().contains("overflow"));
}

#[test]
fn default_cfg() {
    let c = HullCfg::default();
    assert_eq!(c.capacity, DEFAULT_CAPACITY);
    assert_eq!(c.sort, SortStrategy::Heap);
}

fn arb_cloud() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 3..80)
        .prop_map(|v| v.into_iter().map(|(x, y)| vector![x, y]).collect())
}

fn arb_grid() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-10i32..10, -10i32..10), 3..80).prop_map(|v| {
        v.into_iter()
            .map(|(x, y)| vector![x as f64, y as f64])
            .collect()
    })
}

proptest! {
    #[test]
    fn hull_turns_strictly_left(pts in arb_cloud()) {
        let hull = convex_hull(&pts, HullCfg::default()).unwrap();
        prop_assert!(hull.len() >= 3);
        prop_assert!(strictly_ccw(&hull));
    }

    #[test]
    fn hull_contains_every_input_point(pts in arb_cloud()) {
        let hull = convex_hull(&pts, HullCfg::default()).unwrap();
        for p in &pts {
            prop_assert!(inside_or_on(&hull, *p), "point {:?} outside hull", p);
        }
    }

    #[test]
    fn hull_vertices_come_from_input(pts in arb_cloud()) {
        let hull = convex_hull(&pts, HullCfg::default()).unwrap();
        for h in &hull {
            prop_assert!(pts.contains(h));
        }
    }

    #[test]
    fn backends_produce_identical_hulls(pts in arb_grid()) {
        let a = convex_hull(&pts, cfg(SortStrategy::Selection)).unwrap();
        let b = convex_hull(&pts, cfg(SortStrategy::Heap)).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn hull_of_hull_is_unchanged(pts in arb_cloud()) {
        let hull = convex_hull(&pts, HullCfg::default()).unwrap();
        let again = convex_hull(&hull, HullCfg::default()).unwrap();
        prop_assert_eq!(again, hull);
    }
}
