//! Console rendering of the winning candidate.

use std::fmt;

use crate::matrix::ExponentMatrix;
use crate::search::Candidate;

const POWERS_HEADER: &str = "The powers of the prime factors needed to calculate the smallest LCM (starting 2, 3, 5, 7, 11, etc.):";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub lcm: u64,
    /// Input values of the winning combination, in index order.
    pub numbers: Vec<u64>,
    pub primes: Vec<u64>,
    pub powers: Vec<u32>,
    pub show_factorization: bool,
}

impl Report {
    pub fn new(numbers: &[u64], matrix: &ExponentMatrix, best: &Candidate) -> Self {
        Report {
            lcm: best.lcm,
            numbers: best.combination.iter().map(|&i| numbers[i]).collect(),
            primes: matrix.primes().to_vec(),
            powers: best.powers.clone(),
            show_factorization: false,
        }
    }

    /// Adds a `p^e * ...` line for the nonzero powers.
    pub fn with_factorization(mut self, show: bool) -> Self {
        self.show_factorization = show;
        self
    }

    fn factorization(&self) -> String {
        let terms: Vec<String> = self
            .primes
            .iter()
            .zip(&self.powers)
            .filter(|&(_, &e)| e > 0)
            .map(|(p, e)| format!("{}^{}", p, e))
            .collect();
        if terms.is_empty() {
            "1".to_string()
        } else {
            terms.join(" * ")
        }
    }
}

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Smallest LCM: {}", self.lcm)?;
        writeln!(f, "Combination: {}", join(&self.numbers))?;
        writeln!(f, "{}", POWERS_HEADER)?;
        write!(f, "{}", join(&self.powers))?;
        if self.show_factorization {
            write!(f, "\nFactorization: {}", self.factorization())?;
        }
        Ok(())
    }
}
