//! Divide-and-conquer closest pair with bounded fork-join recursion.
//!
//! Purpose
//! - O(n log n) closest-pair search over a caller-owned point slice, sequential
//!   or with `rayon::join` fan-out bounded by a `ThreadBudget`.
//!
//! Model
//! - The caller's slice is sorted by X once; each level splits at `mid`,
//!   solves `[0, mid]` and `[mid+1, n)`, keeps the better half result, and
//!   scans the strip `|x − x_mid| <= dmin` in Y order.
//! - Invariant: every recursive call returns with its range X-sorted, so the
//!   parent never re-sorts globally. Only the strip is Y-sorted and restored.
//! - Concurrency: halves are disjoint `&mut` sub-slices from `split_at_mut`;
//!   the parent merges only after `join` returns both.
//! - Budget: `n > 1` splits as `ceil(n/2)` / `floor(n/2)` top-down; budget 1
//!   never forks. Ranges shorter than `SolveCfg::parallel_cutoff` stay sequential.
//!
//! References
//! - Code cross-refs: `order::{sort_by_x,sort_by_y}`, `brute::brute_force` (oracle),
//!   `types::{ClosestPair,SolveStats}`

mod budget;
mod driver;
mod strip;

pub use budget::{SolveCfg, ThreadBudget};
pub use driver::{
    divide_and_conquer, divide_and_conquer_parallel, divide_and_conquer_parallel_with_stats,
    divide_and_conquer_with_stats, Solver,
};
pub use strip::strip_merge;
