//! Named entry points, one per solver, plus re-exports of their inputs.
//!
//! `Algo` lets callers (the CLI, benches) pick a solver by name.

pub use crate::brute::{
    brute_force, brute_force_sorted_x, brute_force_sorted_x_with_stats, brute_force_with_stats,
};
pub use crate::dc::{
    divide_and_conquer, divide_and_conquer_parallel, divide_and_conquer_parallel_with_stats,
    divide_and_conquer_with_stats, SolveCfg, Solver, ThreadBudget,
};
pub use crate::rand::{clustered_cloud, draw_cloud, uniform_cloud, CloudCfg, CloudKind, ReplayToken};
pub use crate::types::{ClosestPair, Point, SolveStats};

/// Solver selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algo {
    BruteForce,
    BruteForceSortedX,
    DivideAndConquer,
    DivideAndConquerParallel,
}

impl Algo {
    pub const ALL: [Algo; 4] = [
        Algo::BruteForce,
        Algo::BruteForceSortedX,
        Algo::DivideAndConquer,
        Algo::DivideAndConquerParallel,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algo::BruteForce => "bf",
            Algo::BruteForceSortedX => "bf-x",
            Algo::DivideAndConquer => "dc",
            Algo::DivideAndConquerParallel => "dc-par",
        }
    }

    pub fn from_name(name: &str) -> Option<Algo> {
        Algo::ALL.into_iter().find(|a| a.name() == name)
    }

    /// Run the solver on `points`. `cfg` is only read by the parallel solver.
    pub fn solve(self, points: &mut [Point], cfg: SolveCfg) -> (ClosestPair, SolveStats) {
        match self {
            Algo::BruteForce => brute_force_with_stats(points),
            Algo::BruteForceSortedX => brute_force_sorted_x_with_stats(points),
            Algo::DivideAndConquer => divide_and_conquer_with_stats(points),
            Algo::DivideAndConquerParallel => divide_and_conquer_parallel_with_stats(points, cfg),
        }
    }
}
