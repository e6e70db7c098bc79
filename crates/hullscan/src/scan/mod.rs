//! Graham scan over a bounded stack.
//!
//! Purpose
//! - Extract the convex hull of a point set as a counter-clockwise sequence
//!   starting at the anchor (minimum y, then minimum x).
//! - Keep the sort back-end selectable so the O(n²) and O(n log n) variants
//!   can be compared on identical inputs.
//!
//! Contract
//! - Input is assumed well formed (finite coordinates). Only the capacity
//!   bound is checked.
//! - All-or-nothing: on error no partial hull is returned.
//! - Collinear points on hull edges are dropped; only strict left turns remain.
//!
//! Code cross-refs: `geom::{orientation, find_anchor}`, `sort::SortStrategy`,
//! `stack::BoundedStack`.

mod graham;
mod types;

pub use graham::{convex_hull, graham_scan};
pub use types::{HullCfg, HullError, DEFAULT_CAPACITY};

#[cfg(test)]
mod tests;
