//! Thread budget and solve configuration.

/// Upper bound on fork-join fan-out for one solve. Always at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ThreadBudget(usize);

impl ThreadBudget {
    pub const SEQUENTIAL: ThreadBudget = ThreadBudget(1);

    /// Values below 1 are treated as 1.
    #[inline]
    pub fn new(n: usize) -> Self {
        Self(n.max(1))
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0
    }

    #[inline]
    pub fn is_parallel(self) -> bool {
        self.0 > 1
    }

    /// Budgets for the (left, right) halves: `ceil(n/2)` and `floor(n/2)`, each at least 1.
    #[inline]
    pub fn split(self) -> (ThreadBudget, ThreadBudget) {
        let left = self.0 - self.0 / 2;
        (ThreadBudget::new(left), ThreadBudget::new(self.0 / 2))
    }
}

impl Default for ThreadBudget {
    fn default() -> Self {
        Self::SEQUENTIAL
    }
}

impl From<usize> for ThreadBudget {
    fn from(n: usize) -> Self {
        Self::new(n)
    }
}

/// Divide-and-conquer configuration.
#[derive(Clone, Copy, Debug)]
pub struct SolveCfg {
    pub threads: ThreadBudget,
    /// Sub-ranges shorter than this recurse sequentially even with budget left.
    pub parallel_cutoff: usize,
}

impl SolveCfg {
    pub const DEFAULT_PARALLEL_CUTOFF: usize = 1024;

    pub fn with_threads(n: usize) -> Self {
        Self {
            threads: ThreadBudget::new(n),
            ..Self::default()
        }
    }
}

impl Default for SolveCfg {
    fn default() -> Self {
        Self {
            threads: ThreadBudget::SEQUENTIAL,
            parallel_cutoff: Self::DEFAULT_PARALLEL_CUTOFF,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_clamps_to_one() {
        assert_eq!(ThreadBudget::new(0).get(), 1);
        assert!(!ThreadBudget::new(0).is_parallel());
        assert!(ThreadBudget::from(2).is_parallel());
    }

    #[test]
    fn split_halves_and_never_drops_below_one() {
        let s = |n| {
            let (l, r) = ThreadBudget::new(n).split();
            (l.get(), r.get())
        };
        assert_eq!(s(1), (1, 1));
        assert_eq!(s(2), (1, 1));
        assert_eq!(s(3), (2, 1));
        assert_eq!(s(8), (4, 4));
    }
}
