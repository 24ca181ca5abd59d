//! Search configuration and up-front validation.

use clap::ValueEnum;

use crate::error::{Error, Result};

/// Input set used when none is supplied.
pub const DEFAULT_NUMBERS: [u64; 5] = [1247, 1455, 1423, 7845, 9676];

/// Combination size used when none is supplied.
pub const DEFAULT_REQ_NUMBERS: usize = 3;

/// How prime factors are mapped onto exponent matrix columns.
///
/// The column primes always start with every prime up to
/// `floor(sqrt(max(numbers)))`. A number can still carry one prime factor
/// above that bound, and the variants differ in what happens to it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum FactorLookup {
    /// Drop factors above the bound (logged, but they never reach an LCM).
    SieveBound,
    /// Fail with `FactorizationIncomplete` on a factor above the bound.
    Strict,
    /// Append a column for every prime factor above the bound.
    #[default]
    ByValue,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    pub numbers: Vec<u64>,
    pub req_numbers: usize,
    pub factor_lookup: FactorLookup,
    pub parallel: bool,
}

impl SearchConfig {
    pub fn new(numbers: Vec<u64>, req_numbers: usize) -> Self {
        SearchConfig {
            numbers,
            req_numbers,
            factor_lookup: FactorLookup::default(),
            parallel: false,
        }
    }

    pub fn with_factor_lookup(mut self, factor_lookup: FactorLookup) -> Self {
        self.factor_lookup = factor_lookup;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Rejects an empty or zero-containing input set and a required count
    /// outside `1..=numbers.len()`.
    pub fn validate(&self) -> Result<()> {
        if self.numbers.is_empty() {
            return Err(Error::InvalidConfiguration(
                "numbers must not be empty".to_string(),
            ));
        }
        if let Some(pos) = self.numbers.iter().position(|&n| n == 0) {
            return Err(Error::InvalidConfiguration(format!(
                "numbers must be positive, found 0 at position {}",
                pos
            )));
        }
        if self.req_numbers == 0 {
            return Err(Error::InvalidConfiguration(
                "req_numbers must be at least 1".to_string(),
            ));
        }
        if self.req_numbers > self.numbers.len() {
            return Err(Error::InvalidConfiguration(format!(
                "req_numbers ({}) exceeds the number of inputs ({})",
                self.req_numbers,
                self.numbers.len()
            )));
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_NUMBERS.to_vec(), DEFAULT_REQ_NUMBERS)
    }
}
