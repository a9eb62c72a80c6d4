//! Random planar point clouds (uniform or clustered) with replay tokens.
//!
//! Purpose
//! - Reproducible inputs for tests, benches and the CLI `gen`/`compare` commands.
//!   Clustered clouds give strongly non-uniform density around the dividing
//!   lines, which is where a badly chosen strip would go wrong.
//!
//! Model
//! - `Uniform`: `n` points uniform in `[0, side)²`.
//! - `Clustered`: `clusters` centers uniform in the box; each point picks a
//!   center and is offset uniformly in a disk of radius `spread`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::Point;

/// Cloud shape.
#[derive(Clone, Copy, Debug)]
pub enum CloudKind {
    Uniform,
    Clustered { clusters: usize, spread: f64 },
}

/// Cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub n: usize,
    /// Side length of the bounding box `[0, side)²`.
    pub side: f64,
    pub kind: CloudKind,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            n: 1000,
            side: 1.0,
            kind: CloudKind::Uniform,
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
    pub fn new(seed: u64) -> Self {
        Self { seed, index: 0 }
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

/// Draw a point cloud.
pub fn draw_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let side = if cfg.side > 0.0 { cfg.side } else { 1.0 };
    match cfg.kind {
        CloudKind::Uniform => (0..cfg.n)
            .map(|_| Point::new(rng.gen::<f64>() * side, rng.gen::<f64>() * side))
            .collect(),
        CloudKind::Clustered { clusters, spread } => {
            let centers: Vec<Point> = (0..clusters.max(1))
                .map(|_| Point::new(rng.gen::<f64>() * side, rng.gen::<f64>() * side))
                .collect();
            let spread = spread.max(0.0);
            (0..cfg.n)
                .map(|_| {
                    let c = centers[rng.gen_range(0..centers.len())];
                    let theta = rng.gen::<f64>() * std::f64::consts::TAU;
                    let r = spread * rng.gen::<f64>().sqrt();
                    c + Point::new(theta.cos() * r, theta.sin() * r)
                })
                .collect()
        }
    }
}

pub fn uniform_cloud(n: usize, tok: ReplayToken) -> Vec<Point> {
    draw_cloud(
        CloudCfg {
            n,
            ..CloudCfg::default()
        },
        tok,
    )
}

pub fn clustered_cloud(n: usize, clusters: usize, spread: f64, tok: ReplayToken) -> Vec<Point> {
    draw_cloud(
        CloudCfg {
            n,
            side: 1.0,
            kind: CloudKind::Clustered { clusters, spread },
        },
        tok,
    )
}
