//! Seeded point clouds.
//!
//! Purpose
//! - Reproducible inputs for tests, benchmarks and the CLI `gen` command.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG,
//!   so the k-th cloud of a run can be regenerated without drawing the others.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;
use std::fmt;

use crate::geom::Point;

/// Region the cloud is drawn from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CloudShape {
    /// Uniform in the axis-aligned square `[-h, h]²`.
    Square { half_width: f64 },
    /// Uniform in the disk of the given radius (area-uniform).
    Disk { radius: f64 },
    /// Uniform angle on the circle of the given radius; every point is a hull vertex.
    Circle { radius: f64 },
}

impl Default for CloudShape {
    fn default() -> Self {
        CloudShape::Square { half_width: 100.0 }
    }
}

impl CloudShape {
    /// Half-width or radius.
    pub fn size(self) -> f64 {
        match self {
            CloudShape::Square { half_width } => half_width,
            CloudShape::Disk { radius } | CloudShape::Circle { radius } => radius,
        }
    }

    /// The size must be finite; its sign is ignored.
    pub fn validate(self) -> Result<(), CloudError> {
        let size = self.size();
        if !size.is_finite() {
            return Err(CloudError::NonFiniteSize { size });
        }
        Ok(())
    }
}

/// Rejected cloud parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CloudError {
    NonFiniteSize { size: f64 },
}

impl fmt::Display for CloudError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CloudError::NonFiniteSize { size } => {
                write!(f, "invalid cloud params: size must be finite, got {size}")
            }
        }
    }
}

impl std::error::Error for CloudError {}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `count` points from `shape`. Fails before drawing if the shape is invalid.
pub fn draw_cloud(
    shape: CloudShape,
    count: usize,
    tok: ReplayToken,
) -> Result<Vec<Point>, CloudError> {
    shape.validate()?;
    let mut rng = tok.to_std_rng();
    let points = (0..count)
        .map(|_| match shape {
            CloudShape::Square { half_width } => {
                let h = half_width.abs();
                Point::new(rng.gen_range(-h..=h), rng.gen_range(-h..=h))
            }
            CloudShape::Disk { radius } => {
                let r = radius.abs() * rng.gen::<f64>().sqrt();
                let theta = rng.gen::<f64>() * TAU;
                Point::new(r * theta.cos(), r * theta.sin())
            }
            CloudShape::Circle { radius } => {
                let theta = rng.gen::<f64>() * TAU;
                Point::new(radius * theta.cos(), radius * theta.sin())
            }
        })
        .collect();
    Ok(points)
}

/// Vertices of a regular `n`-gon centered at the origin, counter-clockwise from angle 0.
pub fn regular_polygon(n: usize, radius: f64) -> Vec<Point> {
    (0..n)
        .map(|k| {
            let theta = TAU * (k as f64) / (n as f64);
            Point::new(radius * theta.cos(), radius * theta.sin())
        })
        .collect()
}
