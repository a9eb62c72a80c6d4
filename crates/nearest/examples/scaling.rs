//! Distance-evaluation counts of divide and conquer vs brute force.
//!
//! Prints one row per size: n, brute-force evals, D&C evals, and their ratio.
//! Counts are deterministic for a fixed seed, unlike wall-clock timings.

use nearest::api::{brute_force_sorted_x_with_stats, divide_and_conquer_with_stats, ReplayToken};
use nearest::rand::uniform_cloud;

fn main() {
    println!("{:>8} {:>14} {:>14} {:>12} {:>10}", "n", "all_pairs", "bf_x", "dc", "dc/pairs");
    for k in 6..=14 {
        let n = 1usize << k;
        let pts = uniform_cloud(n, ReplayToken::new(k as u64));
        let all_pairs = (n * (n - 1) / 2) as u64;
        let (r_bf, bf) = brute_force_sorted_x_with_stats(&mut pts.clone());
        let (r_dc, dc) = divide_and_conquer_with_stats(&mut pts.clone());
        assert_eq!(r_bf.dmin, r_dc.dmin, "solvers disagree at n={n}");
        println!(
            "{:>8} {:>14} {:>14} {:>12} {:>10.2e}",
            n,
            all_pairs,
            bf.distance_evals,
            dc.distance_evals,
            dc.distance_evals as f64 / all_pairs as f64
        );
    }
}
