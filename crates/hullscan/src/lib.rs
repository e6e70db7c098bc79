//! Planar convex hulls via Graham scan.
//!
//! Layout
//! - `geom`: point type and the three primitives everything else builds on
//!   (distance, orientation, polar angle) plus anchor selection.
//! - `stack`: bounded, checked stack of points used by the scan.
//! - `sort`: angular order around the anchor with two interchangeable
//!   back-ends (selection sort, heap sort).
//! - `scan`: the Graham scan itself and its configuration/error types.
//! - `io`: the count-prefixed text format for point sets and hulls.
//! - `rand`: seeded point clouds for tests, benches and the CLI.
//!
//! The library does no logging and no file I/O; callers own both.

pub mod geom;
pub mod io;
pub mod rand;
pub mod scan;
pub mod sort;
pub mod stack;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{
    distance, find_anchor, orientation, orientation_eps, polar_angle, Orientation, Point,
    COLLINEAR_EPS,
};
pub use scan::{convex_hull, graham_scan, HullCfg, HullError, DEFAULT_CAPACITY};
pub use sort::SortStrategy;
pub use stack::{BoundedStack, StackError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{
        distance, find_anchor, orientation, orientation_eps, polar_angle, Orientation, Point,
    };
    pub use crate::io::{format_points, parse_points, write_points, ParseError};
    pub use crate::rand::{draw_cloud, regular_polygon, CloudError, CloudShape, ReplayToken};
    pub use crate::scan::{convex_hull, graham_scan, HullCfg, HullError};
    pub use crate::sort::{heap_sort, is_larger, selection_sort, SortStrategy};
    pub use crate::stack::{BoundedStack, StackError};
}
