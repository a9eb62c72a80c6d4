//! Closest pair of points in the plane.
//!
//! - `dc`: divide and conquer with bounded fork-join recursion (the main solver).
//! - `brute`: quadratic reference solvers used as oracles.
//! - `order`: X-major / Y-major in-place sorters for sub-ranges.
//! - `rand`: reproducible point clouds for tests, benches and the CLI.
//!
//! All solvers take the caller's slice directly. Every entry point except
//! `brute_force` leaves the slice X-sorted; copy first if the order matters.

pub mod api;
pub mod brute;
pub mod dc;
pub mod order;
pub mod rand;
pub mod types;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;
pub use types::{distance, ClosestPair, Point, SolveStats};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::brute::{brute_force, brute_force_sorted_x};
    pub use crate::dc::{
        divide_and_conquer, divide_and_conquer_parallel, SolveCfg, Solver, ThreadBudget,
    };
    pub use crate::rand::{draw_cloud, CloudCfg, CloudKind, ReplayToken};
    pub use crate::types::{distance, ClosestPair, Point, SolveStats};
}
