//! Fixed-size index combinations and binomial coefficients.

use std::iter::FusedIterator;

/// Iterator over every strictly increasing sequence of `k` indices drawn
/// from `0..n`, in lexicographic order.
///
/// Only the current sequence is kept in memory; the iterator is `Clone`,
/// so a fresh copy restarts from wherever the original was cloned.
///
/// # Example
///
/// ```
/// use math::combination::Combinations;
///
/// let all: Vec<Vec<usize>> = Combinations::new(4, 2).collect();
/// assert_eq!(
///     all,
///     vec![
///         vec![0, 1], vec![0, 2], vec![0, 3],
///         vec![1, 2], vec![1, 3],
///         vec![2, 3],
///     ]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    /// `k == 0` yields exactly one empty combination; `k > n` yields none.
    pub fn new(n: usize, k: usize) -> Self {
        Combinations {
            n,
            indices: (0..k).collect(),
            started: false,
            done: k > n,
        }
    }

    /// Advances `indices` to the next combination in place.
    /// Returns false once the last one has been passed.
    fn advance(&mut self) -> bool {
        let k = self.indices.len();
        // Rightmost position that can still move right
        let Some(pos) = (0..k).rev().find(|&i| self.indices[i] < self.n - k + i) else {
            return false;
        };
        self.indices[pos] += 1;
        for i in pos + 1..k {
            self.indices[i] = self.indices[i - 1] + 1;
        }
        true
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
        } else if !self.advance() {
            self.done = true;
            return None;
        }
        Some(self.indices.clone())
    }
}

impl FusedIterator for Combinations {}

/// Returns an iterator over the `k`-element index combinations of `0..n`.
pub fn combinations(n: usize, k: usize) -> Combinations {
    Combinations::new(n, k)
}

/// Number of `k`-element subsets of an `n`-element set.
///
/// Returns None if the result does not fit in a u64.
///
/// # Example
///
/// ```
/// use math::combination::binomial;
///
/// assert_eq!(binomial(5, 3), Some(10));
/// assert_eq!(binomial(3, 5), Some(0));
/// assert_eq!(binomial(100, 50), None);
/// ```
pub fn binomial(n: u64, k: u64) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        // Exact at every step: result * (n - i) is divisible by (i + 1)
        result = result * (n - i) as u128 / (i + 1) as u128;
        if result > u64::MAX as u128 {
            return None;
        }
    }
    Some(result as u64)
}
