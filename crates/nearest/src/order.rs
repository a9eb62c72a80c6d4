//! Axis sorters: in-place ordering of a sub-range by X-major or Y-major composite key.
//!
//! A sub-range is passed as a sub-slice, so nothing outside it can be touched.
//! Keys are compared with `f64::total_cmp`; with the secondary axis as tie-break
//! only bit-identical points compare equal, so the unstable sort is unambiguous.

use std::cmp::Ordering;

use crate::types::Point;

/// X-major order: ascending `x`, ties by ascending `y`.
#[inline]
pub fn cmp_xy(a: &Point, b: &Point) -> Ordering {
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}

/// Y-major order: ascending `y`, ties by ascending `x`.
#[inline]
pub fn cmp_yx(a: &Point, b: &Point) -> Ordering {
    a.y.total_cmp(&b.y).then_with(|| a.x.total_cmp(&b.x))
}

pub fn sort_by_x(points: &mut [Point]) {
    points.sort_unstable_by(cmp_xy);
}

pub fn sort_by_y(points: &mut [Point]) {
    points.sort_unstable_by(cmp_yx);
}

pub fn is_sorted_by_x(points: &[Point]) -> bool {
    points.windows(2).all(|w| cmp_xy(&w[0], &w[1]) != Ordering::Greater)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn x_sort_breaks_ties_by_y() {
        let mut pts = vec![vector![1.0, 2.0], vector![0.0, 5.0], vector![1.0, -1.0]];
        sort_by_x(&mut pts);
        assert_eq!(pts, vec![vector![0.0, 5.0], vector![1.0, -1.0], vector![1.0, 2.0]]);
        assert!(is_sorted_by_x(&pts));
    }

    #[test]
    fn y_sort_breaks_ties_by_x() {
        let mut pts = vec![vector![3.0, 0.0], vector![-2.0, 0.0], vector![0.0, -4.0]];
        sort_by_y(&mut pts);
        assert_eq!(pts, vec![vector![0.0, -4.0], vector![-2.0, 0.0], vector![3.0, 0.0]]);
    }

    #[test]
    fn sorting_a_subrange_leaves_the_rest_alone() {
        let mut pts = vec![
            vector![9.0, 9.0],
            vector![3.0, 1.0],
            vector![1.0, 3.0],
            vector![2.0, 2.0],
            vector![-9.0, -9.0],
        ];
        sort_by_y(&mut pts[1..4]);
        assert_eq!(pts[0], vector![9.0, 9.0]);
        assert_eq!(pts[4], vector![-9.0, -9.0]);
        assert_eq!(&pts[1..4], &[vector![3.0, 1.0], vector![2.0, 2.0], vector![1.0, 3.0]]);
        sort_by_x(&mut pts[1..4]);
        assert!(is_sorted_by_x(&pts[1..4]));
        assert!(!is_sorted_by_x(&pts));
    }
}
