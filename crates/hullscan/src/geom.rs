//! Geometry primitives shared by the sort and the scan.
//!
//! Conventions
//! - Points are plain `Vector2<f64>` values. `orientation` is the raw sign of
//!   the cross product; `orientation_eps` treats a cross product within a
//!   relative slack of zero as collinear. The sort and the scan use the slack
//!   version with [`COLLINEAR_EPS`] so that rounding cannot split a ray.
//! - Angles are `atan2` in radians. For hull input every point lies on or above
//!   the anchor, so angles stay within `[0, π]`.

use nalgebra::Vector2;

/// A point in the plane.
pub type Point = Vector2<f64>;

/// Turn direction of the path `a → vertex → b`.
///
/// Variants are ordered `Clockwise < Collinear < CounterClockwise`, matching
/// the numeric sign returned by [`Orientation::sign`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Orientation {
    Clockwise,
    Collinear,
    CounterClockwise,
}

impl Orientation {
    /// `-1` clockwise, `0` collinear, `1` counter-clockwise.
    #[inline]
    pub fn sign(self) -> i8 {
        match self {
            Orientation::Clockwise => -1,
            Orientation::Collinear => 0,
            Orientation::CounterClockwise => 1,
        }
    }

    /// Strict left turn. Collinear triples are not left turns.
    #[inline]
    pub fn is_left_turn(self) -> bool {
        matches!(self, Orientation::CounterClockwise)
    }
}

/// Euclidean distance between `a` and `b`.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    (a - b).norm()
}

/// Orientation of the turn at `vertex` when walking `a → vertex → b`.
///
/// Sign of `(vertex - a) × (b - a)`.
#[inline]
pub fn orientation(a: Point, vertex: Point, b: Point) -> Orientation {
    let av = vertex - a;
    let ab = b - a;
    let area = av.x * ab.y - av.y * ab.x;
    if area < 0.0 {
        Orientation::Clockwise
    } else if area > 0.0 {
        Orientation::CounterClockwise
    } else {
        Orientation::Collinear
    }
}

/// Relative slack for [`orientation_eps`] used by the sort and the scan.
pub const COLLINEAR_EPS: f64 = 1e-12;

/// Orientation with slack: `Collinear` whenever
/// `|(vertex - a) × (b - a)| <= eps * |vertex - a| * |b - a|`.
///
/// The slack is relative to both arm lengths, so it bounds the sine of the
/// angle between the arms and does not depend on the coordinate scale.
/// `eps = 0.0` agrees with [`orientation`].
#[inline]
pub fn orientation_eps(a: Point, vertex: Point, b: Point, eps: f64) -> Orientation {
    let av = vertex - a;
    let ab = b - a;
    let area = av.x * ab.y - av.y * ab.x;
    if area.abs() <= eps * av.norm() * ab.norm() {
        Orientation::Collinear
    } else if area < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// Polar angle of `point` seen from `anchor`, in radians.
///
/// The anchor relative to itself has angle `0.0`. Any NaN coming out of
/// `atan2` is mapped to `0.0` as well.
#[inline]
pub fn polar_angle(point: Point, anchor: Point) -> f64 {
    let d = point - anchor;
    if d.x == 0.0 && d.y == 0.0 {
        return 0.0;
    }
    let angle = d.y.atan2(d.x);
    if angle.is_nan() {
        0.0
    } else {
        angle
    }
}

/// Index of the scan anchor: minimum y, ties broken by minimum x.
///
/// Returns `None` for an empty slice. Exact duplicates keep the first occurrence.
pub fn find_anchor(points: &[Point]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, p) in points.iter().enumerate() {
        match best {
            None => best = Some(i),
            Some(b) => {
                let a = points[b];
                if p.y < a.y || (p.y == a.y && p.x < a.x) {
                    best = Some(i);
                }
            }
        }
    }
    best
}
