use crate::geom::{find_anchor, orientation_eps, Point, COLLINEAR_EPS};
use crate::stack::BoundedStack;

use super::types::{HullCfg, HullError};

/// Graham scan. Sorts `points` in place (angular order around the anchor) and
/// returns the hull, counter-clockwise, anchor first.
///
/// Degenerate inputs
/// - Fewer than 3 points are returned unchanged.
/// - Fully collinear input yields `[anchor, farthest]`; if every point equals
///   the anchor the result is `[anchor]`.
///
/// Errors
/// - `HullError::TooManyPoints` when `points.len() > cfg.capacity`, before any work.
/// - `HullError::Stack` if a stack precondition fails mid-scan.
pub fn graham_scan(points: &mut [Point], cfg: HullCfg) -> Result<Vec<Point>, HullError> {
    let count = points.len();
    if count > cfg.capacity {
        return Err(HullError::TooManyPoints {
            count,
            capacity: cfg.capacity,
        });
    }
    if count < 3 {
        return Ok(points.to_vec());
    }
    let Some(anchor_idx) = find_anchor(points) else {
        return Ok(Vec::new());
    };
    let anchor = points[anchor_idx];

    // After sorting, points[0] is the anchor (angle 0, distance 0).
    cfg.sort.sort(points, anchor);

    let mut stack = BoundedStack::new(cfg.capacity);
    stack.push(points[0])?;
    stack.push(points[1])?;

    // Invariant: bottom to top, the stack turns strictly left at every vertex.
    // Turns within COLLINEAR_EPS count as straight, same as in the sort.
    let turns_left = |a: Point, vertex: Point, b: Point| {
        orientation_eps(a, vertex, b, COLLINEAR_EPS).is_left_turn()
    };
    for &next in &points[2..] {
        let mut curr = stack.pop()?;
        while let Some(top) = stack.top() {
            if turns_left(top, curr, next) {
                break;
            }
            curr = stack.pop()?;
        }
        stack.push(curr)?;
        stack.push(next)?;
    }

    // Closing turn back into the anchor.
    let last = stack.pop()?;
    let keep = match stack.top() {
        Some(top) if stack.len() > 1 => turns_left(top, last, anchor),
        _ => last != anchor,
    };
    if keep {
        stack.push(last)?;
    }

    Ok(stack.into_vec())
}

/// Like [`graham_scan`] but leaves the caller's slice untouched.
pub fn convex_hull(points: &[Point], cfg: HullCfg) -> Result<Vec<Point>, HullError> {
    let mut work = points.to_vec();
    graham_scan(&mut work, cfg)
}
