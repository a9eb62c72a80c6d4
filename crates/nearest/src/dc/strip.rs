//! Strip merge over a Y-sorted slice.

use crate::types::{distance, ClosestPair, Point};

/// Scan a Y-sorted strip for a pair closer than `best`, updating it in place.
///
/// For each `i`, candidates `j > i` are visited while `y_j − y_i < best.dmin`;
/// Y-sortedness makes every later `j` at least as far. Returns the number of
/// distance evaluations.
pub fn strip_merge(strip: &[Point], best: &mut ClosestPair) -> u64 {
    let mut evals = 0;
    for (i, p) in strip.iter().enumerate() {
        for q in &strip[i + 1..] {
            if q.y - p.y >= best.dmin {
                break;
            }
            evals += 1;
            best.offer(p, q, distance(p, q));
        }
    }
    evals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::sort_by_y;
    use nalgebra::vector;

    #[test]
    fn improves_on_cross_pair() {
        // Incumbent 1.0; (0,0)-(0.3,0.4) is 0.5.
        let mut strip = vec![vector![0.3, 0.4], vector![-0.1, 5.0], vector![0.0, 0.0]];
        sort_by_y(&mut strip);
        let mut best = ClosestPair::of(vector![10.0, 0.0], vector![11.0, 0.0]);
        strip_merge(&strip, &mut best);
        assert!((best.dmin - 0.5).abs() < 1e-12);
    }

    #[test]
    fn y_gap_prunes_candidates() {
        let strip: Vec<_> = (0..10).map(|k| vector![0.0, 10.0 * k as f64]).collect();
        let mut best = ClosestPair::of(vector![0.0, 0.0], vector![0.0, 1.0]);
        let evals = strip_merge(&strip, &mut best);
        assert_eq!(evals, 0);
        assert_eq!(best.dmin, 1.0);
    }

    #[test]
    fn window_shrinks_as_best_improves() {
        let strip = vec![vector![0.0, 0.0], vector![2.0, 1.0], vector![0.0, 3.0]];
        let mut best = ClosestPair::none();
        let evals = strip_merge(&strip, &mut best);
        // (0,0)-(2,1) sets dmin=√5, which cuts (0,0)-(0,3) but not (2,1)-(0,3).
        assert_eq!(evals, 2);
        assert!((best.dmin - 5f64.sqrt()).abs() < 1e-12);
    }
}
