//! Candidate LCM evaluation and the minimality scan over combinations.

use math::{binomial, combinations};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::matrix::ExponentMatrix;

/// One evaluated combination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub lcm: u64,
    /// Ascending input indices.
    pub combination: Vec<usize>,
    /// Max exponent per matrix column across the combination's rows.
    pub powers: Vec<u32>,
    /// Entries of the whole input set that divide `lcm`.
    pub divisible_count: usize,
}

impl Candidate {
    /// Counts divisors over the full input set, not just the combination.
    pub fn qualifies(&self, req_numbers: usize) -> bool {
        self.divisible_count >= req_numbers
    }
}

/// Builds the candidate LCM of `combination` from per-prime maximum
/// exponents, then counts how many `numbers` divide it.
pub fn evaluate(
    numbers: &[u64],
    matrix: &ExponentMatrix,
    combination: Vec<usize>,
) -> Result<Candidate> {
    let mut lcm: u64 = 1;
    let mut powers = vec![0u32; matrix.num_primes()];

    for (col, &prime) in matrix.primes().iter().enumerate() {
        let exponent = combination
            .iter()
            .map(|&row| matrix.exponent(row, col))
            .max()
            .unwrap_or(0);
        powers[col] = exponent;

        let overflow = Error::ArithmeticOverflow { prime, exponent };
        let power = prime.checked_pow(exponent).ok_or(overflow.clone())?;
        lcm = lcm.checked_mul(power).ok_or(overflow)?;
    }

    let divisible_count = numbers.iter().filter(|&&n| lcm.is_multiple_of(n)).count();

    Ok(Candidate {
        lcm,
        combination,
        powers,
        divisible_count,
    })
}

/// Scans every `req_numbers`-combination in lexicographic order and keeps
/// the first qualifying candidate with the strictly smallest LCM.
pub fn find_smallest_lcm(
    numbers: &[u64],
    req_numbers: usize,
    matrix: &ExponentMatrix,
) -> Result<Candidate> {
    log_scan(numbers.len(), req_numbers);

    let best = combinations(numbers.len(), req_numbers).try_fold(
        None::<Candidate>,
        |best, combination| -> Result<Option<Candidate>> {
            let candidate = evaluate(numbers, matrix, combination)?;
            if candidate.qualifies(req_numbers)
                && best.as_ref().is_none_or(|b| candidate.lcm < b.lcm)
            {
                debug!(lcm = candidate.lcm, combination = ?candidate.combination, "new best");
                Ok(Some(candidate))
            } else {
                Ok(best)
            }
        },
    )?;

    finish(best, req_numbers)
}

/// Parallel form of [`find_smallest_lcm`] with an identical result.
///
/// Candidates are reduced by `(lcm, combination)`; since combinations are
/// generated in lexicographic order, the smallest pair is the one the
/// sequential scan would have kept.
pub fn find_smallest_lcm_parallel(
    numbers: &[u64],
    req_numbers: usize,
    matrix: &ExponentMatrix,
) -> Result<Candidate> {
    log_scan(numbers.len(), req_numbers);

    let best = combinations(numbers.len(), req_numbers)
        .par_bridge()
        .map(|combination| evaluate(numbers, matrix, combination))
        .filter(|result| {
            result
                .as_ref()
                .map_or(true, |candidate| candidate.qualifies(req_numbers))
        })
        .try_reduce_with(|a, b| {
            if (a.lcm, &a.combination) <= (b.lcm, &b.combination) {
                Ok(a)
            } else {
                Ok(b)
            }
        })
        .transpose()?;

    finish(best, req_numbers)
}

fn log_scan(n: usize, req_numbers: usize) {
    match binomial(n as u64, req_numbers as u64) {
        Some(total) => debug!(n, req_numbers, total, "scanning combinations"),
        None => debug!(n, req_numbers, "scanning more than u64::MAX combinations"),
    }
}

fn finish(best: Option<Candidate>, req_numbers: usize) -> Result<Candidate> {
    let best = best.ok_or(Error::NoSolutionFound { req_numbers })?;
    info!(lcm = best.lcm, combination = ?best.combination, "smallest LCM found");
    Ok(best)
}
