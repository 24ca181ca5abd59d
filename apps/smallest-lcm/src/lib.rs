pub mod config;
pub mod error;
pub mod matrix;
pub mod report;
pub mod search;

pub use config::{DEFAULT_NUMBERS, DEFAULT_REQ_NUMBERS, FactorLookup, SearchConfig};
pub use error::{Error, Result};
pub use matrix::{DroppedFactor, ExponentMatrix};
pub use report::Report;
pub use search::{Candidate, evaluate, find_smallest_lcm, find_smallest_lcm_parallel};

use tracing::debug;

/// Validate `config`, build the exponent matrix, scan all combinations and
/// return the report for the smallest qualifying LCM.
pub fn run(config: &SearchConfig) -> Result<Report> {
    config.validate()?;
    debug!(
        numbers = ?config.numbers,
        req_numbers = config.req_numbers,
        factor_lookup = ?config.factor_lookup,
        parallel = config.parallel,
        "starting search"
    );

    let matrix = ExponentMatrix::build(&config.numbers, config.factor_lookup)?;
    let best = if config.parallel {
        find_smallest_lcm_parallel(&config.numbers, config.req_numbers, &matrix)?
    } else {
        find_smallest_lcm(&config.numbers, config.req_numbers, &matrix)?
    };
    Ok(Report::new(&config.numbers, &matrix, &best))
}
