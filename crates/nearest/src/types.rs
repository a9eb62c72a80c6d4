//! Point and result types shared by all closest-pair solvers.
//!
//! - `Point`: plain `nalgebra::Vector2<f64>`; equality is by coordinate value.
//! - `ClosestPair`: best distance plus the two points achieving it, or the
//!   `+∞` sentinel when no pair exists.
//! - `SolveStats`: distance-evaluation and fork counters reported by the `*_with_stats` entry points.
//!
//! References
//! - Code cross-refs: `order::{sort_by_x,sort_by_y}`, `dc::strip_merge`, `brute::brute_force`

use nalgebra::Vector2;

/// A point in the plane.
pub type Point = Vector2<f64>;

/// Euclidean distance `‖p − q‖₂`.
#[inline]
pub fn distance(p: &Point, q: &Point) -> f64 {
    (p - q).norm()
}

/// Best pair found by a solver.
///
/// Invariant: if `dmin` is finite then `dmin == distance(p1, p2)`.
/// With fewer than two input points `dmin` is `+∞` and `p1`, `p2` are the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClosestPair {
    pub dmin: f64,
    pub p1: Point,
    pub p2: Point,
}

impl ClosestPair {
    /// Sentinel: no pair exists.
    #[inline]
    pub fn none() -> Self {
        Self {
            dmin: f64::INFINITY,
            p1: Point::zeros(),
            p2: Point::zeros(),
        }
    }

    /// Exact result for two points.
    #[inline]
    pub fn of(p1: Point, p2: Point) -> Self {
        Self {
            dmin: distance(&p1, &p2),
            p1,
            p2,
        }
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        self.dmin.is_finite()
    }

    /// Replace `self` with the pair `(p, q)` at distance `d` if `d` is strictly smaller.
    #[inline]
    pub(crate) fn offer(&mut self, p: &Point, q: &Point, d: f64) {
        if d < self.dmin {
            self.dmin = d;
            self.p1 = *p;
            self.p2 = *q;
        }
    }

    /// The strictly better of two results; ties keep `self`.
    #[inline]
    pub fn better(self, other: Self) -> Self {
        if other.dmin < self.dmin {
            other
        } else {
            self
        }
    }
}

impl Default for ClosestPair {
    fn default() -> Self {
        Self::none()
    }
}

/// Work counters for one solve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Number of point-to-point distance evaluations.
    pub distance_evals: u64,
    /// Number of `rayon::join` forks. Concurrent tasks are at most `forks + 1`.
    pub forks: u64,
}

impl SolveStats {
    #[inline]
    pub fn evals(distance_evals: u64) -> Self {
        Self {
            distance_evals,
            forks: 0,
        }
    }

    /// Leaf tasks of the fork tree.
    #[inline]
    pub fn tasks(&self) -> u64 {
        self.forks + 1
    }
}

impl std::ops::Add for SolveStats {
    type Output = SolveStats;
    #[inline]
    fn add(mut self, rhs: SolveStats) -> Self::Output {
        self += rhs;
        self
    }
}

impl std::ops::AddAssign for SolveStats {
    #[inline]
    fn add_assign(&mut self, rhs: SolveStats) {
        self.distance_evals += rhs.distance_evals;
        self.forks += rhs.forks;
    }
}
