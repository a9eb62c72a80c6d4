//! Quadratic reference solvers, used as correctness oracles for `dc`.

use crate::order::sort_by_x;
use crate::types::{distance, ClosestPair, Point, SolveStats};

/// All-pairs scan, O(n²). Does not reorder the input.
pub fn brute_force(points: &[Point]) -> ClosestPair {
    brute_force_with_stats(points).0
}

pub fn brute_force_with_stats(points: &[Point]) -> (ClosestPair, SolveStats) {
    let mut best = ClosestPair::none();
    let mut stats = SolveStats::default();
    for (i, p) in points.iter().enumerate() {
        for q in &points[i + 1..] {
            stats += SolveStats::evals(1);
            best.offer(p, q, distance(p, q));
        }
    }
    (best, stats)
}

/// Sorts by X, then scans pairs and stops each inner loop once the X-gap reaches
/// the current best. Worst case O(n²). Leaves `points` X-sorted.
pub fn brute_force_sorted_x(points: &mut [Point]) -> ClosestPair {
    brute_force_sorted_x_with_stats(points).0
}

pub fn brute_force_sorted_x_with_stats(points: &mut [Point]) -> (ClosestPair, SolveStats) {
    sort_by_x(points);
    let mut best = ClosestPair::none();
    let mut stats = SolveStats::default();
    for (i, p) in points.iter().enumerate() {
        for q in &points[i + 1..] {
            if q.x - p.x >= best.dmin {
                break;
            }
            stats += SolveStats::evals(1);
            best.offer(p, q, distance(p, q));
        }
    }
    (best, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::is_sorted_by_x;
    use nalgebra::vector;

    #[test]
    fn triangle_example() {
        let pts = vec![vector![0.0, 0.0], vector![3.0, 4.0], vector![1.0, 1.0]];
        let r = brute_force(&pts);
        assert!((r.dmin - 2f64.sqrt()).abs() < 1e-12);
        // Input order untouched.
        assert_eq!(pts[1], vector![3.0, 4.0]);
    }

    #[test]
    fn sorted_x_matches_and_sorts() {
        let mut pts = vec![
            vector![5.0, 0.0],
            vector![0.0, 0.0],
            vector![0.2, 3.0],
            vector![5.1, 0.1],
        ];
        let oracle = brute_force(&pts);
        let (r, stats) = brute_force_sorted_x_with_stats(&mut pts);
        assert_eq!(r.dmin, oracle.dmin);
        assert!(is_sorted_by_x(&pts));
        assert!(stats.distance_evals <= 6);
    }

    #[test]
    fn degenerate_sizes() {
        assert!(!brute_force(&[]).is_found());
        assert!(!brute_force(&[vector![1.0, 1.0]]).is_found());
        assert!(!brute_force_sorted_x(&mut []).is_found());
        assert!(!brute_force_sorted_x(&mut [vector![1.0, 1.0]]).is_found());
        let (_, stats) = brute_force_with_stats(&[vector![0.0, 0.0]; 5]);
        assert_eq!(stats.distance_evals, 10);
    }
}
