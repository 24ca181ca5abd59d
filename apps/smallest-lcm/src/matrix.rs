//! Per-number prime exponent table.

use std::collections::HashMap;

use math::{prime_factors, primes_up_to};
use tracing::{debug, warn};

use crate::config::FactorLookup;
use crate::error::{Error, Result};

/// A prime factor that had no column and was left out of its row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DroppedFactor {
    pub index: usize,
    pub number: u64,
    pub factor: u64,
}

/// Exponent of every column prime in every input number.
///
/// Rows follow the input order and columns follow `primes`, which is
/// ascending. Frozen once built.
#[derive(Clone, Debug)]
pub struct ExponentMatrix {
    primes: Vec<u64>,
    rows: Vec<Vec<u32>>,
    sieve_bound: u64,
    dropped: Vec<DroppedFactor>,
}

impl ExponentMatrix {
    pub fn build(numbers: &[u64], lookup: FactorLookup) -> Result<Self> {
        let max = numbers.iter().copied().max().unwrap_or(0);
        let sieve_bound = max.isqrt();
        let factorizations: Vec<Vec<u64>> = numbers.iter().map(|&n| prime_factors(n)).collect();

        let mut primes = primes_up_to(sieve_bound);
        if lookup == FactorLookup::ByValue {
            let mut large: Vec<u64> = factorizations
                .iter()
                .flatten()
                .copied()
                .filter(|&f| f > sieve_bound)
                .collect();
            large.sort_unstable();
            large.dedup();
            primes.extend(large);
        }

        let columns: HashMap<u64, usize> =
            primes.iter().enumerate().map(|(col, &p)| (p, col)).collect();
        let mut rows = vec![vec![0u32; primes.len()]; numbers.len()];
        let mut dropped = Vec::new();

        for (index, (&number, factors)) in numbers.iter().zip(&factorizations).enumerate() {
            for &factor in factors {
                match columns.get(&factor) {
                    Some(&col) => rows[index][col] += 1,
                    None if lookup == FactorLookup::Strict => {
                        return Err(Error::FactorizationIncomplete { number, factor });
                    }
                    None => {
                        warn!(
                            number,
                            factor,
                            sieve_bound,
                            "prime factor above the sieve bound dropped from exponent matrix"
                        );
                        dropped.push(DroppedFactor { index, number, factor });
                    }
                }
            }
        }

        debug!(
            rows = rows.len(),
            columns = primes.len(),
            sieve_bound,
            dropped = dropped.len(),
            "built exponent matrix"
        );

        Ok(ExponentMatrix {
            primes,
            rows,
            sieve_bound,
            dropped,
        })
    }

    /// Column primes, ascending.
    pub fn primes(&self) -> &[u64] {
        &self.primes
    }

    pub fn num_primes(&self) -> usize {
        self.primes.len()
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, index: usize) -> &[u32] {
        &self.rows[index]
    }

    pub fn exponent(&self, row: usize, col: usize) -> u32 {
        self.rows[row][col]
    }

    /// `floor(sqrt(max(numbers)))`, the bound of the base prime list.
    pub fn sieve_bound(&self) -> u64 {
        self.sieve_bound
    }

    pub fn dropped(&self) -> &[DroppedFactor] {
        &self.dropped
    }

    /// True when every prime factor of every number landed in a column.
    pub fn is_complete(&self) -> bool {
        self.dropped.is_empty()
    }

    /// Multiplies a row's prime powers back together.
    /// Returns None on u64 overflow.
    pub fn reconstruct(&self, index: usize) -> Option<u64> {
        self.primes
            .iter()
            .zip(&self.rows[index])
            .try_fold(1u64, |acc, (&p, &e)| acc.checked_mul(p.checked_pow(e)?))
    }
}
