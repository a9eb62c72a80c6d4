//! Recursive driver: split the X-sorted range, solve halves (forked when the
//! budget allows), then merge across the dividing line through the strip.

use crate::order::{sort_by_x, sort_by_y};
use crate::types::{ClosestPair, Point, SolveStats};

use super::budget::{SolveCfg, ThreadBudget};
use super::strip::strip_merge;

/// Sequential divide and conquer (budget 1). Leaves `points` X-sorted.
pub fn divide_and_conquer(points: &mut [Point]) -> ClosestPair {
    divide_and_conquer_with_stats(points).0
}

pub fn divide_and_conquer_with_stats(points: &mut [Point]) -> (ClosestPair, SolveStats) {
    run(points, ThreadBudget::SEQUENTIAL, usize::MAX)
}

/// Divide and conquer with fork-join fan-out bounded by `cfg.threads`. Leaves `points` X-sorted.
pub fn divide_and_conquer_parallel(points: &mut [Point], cfg: SolveCfg) -> ClosestPair {
    divide_and_conquer_parallel_with_stats(points, cfg).0
}

pub fn divide_and_conquer_parallel_with_stats(
    points: &mut [Point],
    cfg: SolveCfg,
) -> (ClosestPair, SolveStats) {
    run(points, cfg.threads, cfg.parallel_cutoff.max(3))
}

fn run(points: &mut [Point], budget: ThreadBudget, cutoff: usize) -> (ClosestPair, SolveStats) {
    tracing::debug!(n = points.len(), threads = budget.get(), cutoff, "closest pair solve");
    sort_by_x(points);
    let (best, stats) = solve_range(points, budget, cutoff);
    tracing::debug!(
        dmin = best.dmin,
        distance_evals = stats.distance_evals,
        forks = stats.forks,
        "closest pair done"
    );
    (best, stats)
}

/// Solve an X-sorted range. On return the range is X-sorted again.
fn solve_range(
    points: &mut [Point],
    budget: ThreadBudget,
    cutoff: usize,
) -> (ClosestPair, SolveStats) {
    let n = points.len();
    if n < 2 {
        return (ClosestPair::none(), SolveStats::default());
    }
    if n == 2 {
        return (
            ClosestPair::of(points[0], points[1]),
            SolveStats::evals(1),
        );
    }

    let mid = (n - 1) / 2;
    let (left, right) = points.split_at_mut(mid + 1);
    let forked = budget.is_parallel() && n >= cutoff;
    let ((res_l, stats_l), (res_r, stats_r)) = if forked {
        let (b_l, b_r) = budget.split();
        rayon::join(
            || solve_range(left, b_l, cutoff),
            || solve_range(right, b_r, cutoff),
        )
    } else {
        (
            solve_range(left, ThreadBudget::SEQUENTIAL, cutoff),
            solve_range(right, ThreadBudget::SEQUENTIAL, cutoff),
        )
    };
    let mut best = res_l.better(res_r);
    let mut stats = stats_l + stats_r;
    if forked {
        stats.forks += 1;
    }

    // Both halves are X-sorted again, so `points[mid]` is the left half's rightmost point.
    let mid_x = points[mid].x;
    let d = best.dmin;
    let lo = points.partition_point(|p| p.x < mid_x - d);
    let hi = points.partition_point(|p| p.x <= mid_x + d);
    let strip = &mut points[lo..hi];
    if strip.len() >= 2 {
        sort_by_y(strip);
        stats += SolveStats::evals(strip_merge(strip, &mut best));
        sort_by_x(strip);
    }
    (best, stats)
}

/// Holds a solve configuration, set up before solving.
///
/// Reconfiguring needs `&mut self`, so the budget cannot change while a solve
/// borrowing the solver is in flight.
#[derive(Clone, Copy, Debug, Default)]
pub struct Solver {
    cfg: SolveCfg,
}

impl Solver {
    pub fn new(cfg: SolveCfg) -> Self {
        Self { cfg }
    }

    pub fn cfg(&self) -> SolveCfg {
        self.cfg
    }

    /// Values below 1 mean fully sequential.
    pub fn set_thread_budget(&mut self, n: usize) {
        self.cfg.threads = ThreadBudget::new(n);
    }

    /// Sequential solve; ignores the configured budget.
    pub fn solve(&self, points: &mut [Point]) -> ClosestPair {
        divide_and_conquer(points)
    }

    pub fn solve_parallel(&self, points: &mut [Point]) -> ClosestPair {
        divide_and_conquer_parallel(points, self.cfg)
    }

    pub fn solve_parallel_with_stats(&self, points: &mut [Point]) -> (ClosestPair, SolveStats) {
        divide_and_conquer_parallel_with_stats(points, self.cfg)
    }
}
