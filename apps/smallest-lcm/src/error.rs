//! Error types for the smallest-LCM search.

use thiserror::Error;

/// Result type alias for smallest-LCM operations
pub type Result<T> = std::result::Result<T, Error>;

/// Terminal failures of a search run. None of these are retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input set or required count rejected before any work is done
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// No combination reached the required divisible count
    #[error("No combination is divisible by at least {req_numbers} of the input numbers")]
    NoSolutionFound { req_numbers: usize },

    /// Candidate LCM left the u64 range
    #[error("Arithmetic overflow while accumulating {prime}^{exponent} into a candidate LCM")]
    ArithmeticOverflow { prime: u64, exponent: u32 },

    /// A prime factor has no column in the exponent matrix
    #[error("Factorization of {number} is incomplete: prime factor {factor} is above the sieve bound")]
    FactorizationIncomplete { number: u64, factor: u64 },
}
