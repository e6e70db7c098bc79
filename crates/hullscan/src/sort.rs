//! Angular sort around the scan anchor.
//!
//! Order: polar angle ascending, then distance from the anchor ascending.
//! Angles are compared through the orientation of the two points seen from
//! the anchor rather than through `atan2`, so points on one ray always sort
//! by distance and the order agrees with the turn test the scan applies.
//! Every point lies on or above the anchor, which keeps that comparison
//! within a half-plane.
//!
//! Two in-place back-ends implement the same order:
//! - `selection_sort`: O(n²), the reference.
//! - `heap_sort`: O(n log n), max-heap under `is_larger`.
//!
//! Coincident points compare equal; their relative order after sorting is
//! unspecified and does not affect the hull.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::geom::{distance, orientation_eps, Orientation, Point, COLLINEAR_EPS};

/// `a` sorts after `b`: strictly larger angle, or equal angle and strictly
/// larger distance from `anchor`.
///
/// "Larger angle" means `anchor → b → a` turns left; rays closer than
/// [`COLLINEAR_EPS`] count as the same angle.
#[inline]
pub fn is_larger(a: Point, b: Point, anchor: Point) -> bool {
    match orientation_eps(anchor, b, a, COLLINEAR_EPS) {
        Orientation::CounterClockwise => true,
        Orientation::Clockwise => false,
        Orientation::Collinear => distance(anchor, a) > distance(anchor, b),
    }
}

/// Three-way form of [`is_larger`]. Consistent with it for finite,
/// non-coincident keys; coincident points compare `Equal`.
pub fn angular_cmp(a: Point, b: Point, anchor: Point) -> Ordering {
    if is_larger(a, b, anchor) {
        Ordering::Greater
    } else if is_larger(b, a, anchor) {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}

/// In-place selection sort by angular order.
pub fn selection_sort(points: &mut [Point], anchor: Point) {
    let n = points.len();
    for i in 0..n.saturating_sub(1) {
        let mut smallest = i;
        for j in (i + 1)..n {
            if is_larger(points[smallest], points[j], anchor) {
                smallest = j;
            }
        }
        if smallest != i {
            points.swap(i, smallest);
        }
    }
}

/// Restore the max-heap property below `root` within `heap`.
fn sift_down(heap: &mut [Point], mut root: usize, anchor: Point) {
    let n = heap.len();
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;
        if left < n && is_larger(heap[left], heap[largest], anchor) {
            largest = left;
        }
        if right < n && is_larger(heap[right], heap[largest], anchor) {
            largest = right;
        }
        if largest == root {
            return;
        }
        heap.swap(root, largest);
        root = largest;
    }
}

/// In-place heap sort by angular order.
pub fn heap_sort(points: &mut [Point], anchor: Point) {
    let n = points.len();
    for root in (0..n / 2).rev() {
        sift_down(points, root, anchor);
    }
    for end in (1..n).rev() {
        points.swap(0, end);
        sift_down(&mut points[..end], 0, anchor);
    }
}

/// Which sort back-end the scan uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortStrategy {
    Selection,
    #[default]
    Heap,
}

impl SortStrategy {
    pub const ALL: [SortStrategy; 2] = [SortStrategy::Selection, SortStrategy::Heap];

    /// Sort `points` in place around `anchor`.
    #[inline]
    pub fn sort(self, points: &mut [Point], anchor: Point) {
        match self {
            SortStrategy::Selection => selection_sort(points, anchor),
            SortStrategy::Heap => heap_sort(points, anchor),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SortStrategy::Selection => "selection",
            SortStrategy::Heap => "heap",
        }
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognized sort strategy name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownSortStrategy(pub String);

impl fmt::Display for UnknownSortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown sort strategy \"{}\" (expected \"selection\" or \"heap\")",
            self.0
        )
    }
}

impl std::error::Error for UnknownSortStrategy {}

impl FromStr for SortStrategy {
    type Err = UnknownSortStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "selection" => Ok(SortStrategy::Selection),
            "heap" => Ok(SortStrategy::Heap),
            _ => Err(UnknownSortStrategy(s.to_string())),
        }
    }
}
