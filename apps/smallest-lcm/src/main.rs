use anyhow::{Context, Result};
use clap::Parser;
use smallest_lcm::{DEFAULT_NUMBERS, DEFAULT_REQ_NUMBERS, FactorLookup, SearchConfig, run};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "smallest-lcm")]
#[command(about = "Find the smallest LCM of K numbers that at least K of the inputs divide")]
struct Cli {
    /// Input numbers, comma- or space-separated [default: 1247,1455,1423,7845,9676]
    #[arg(short, long, value_delimiter = ',', num_args = 1..)]
    numbers: Vec<u64>,

    /// How many numbers go into each combination [default: 3]
    #[arg(short = 'k', long)]
    req_numbers: Option<usize>,

    /// How prime factors above sqrt(max) are handled
    #[arg(long, value_enum, default_value_t = FactorLookup::ByValue)]
    factor_lookup: FactorLookup,

    /// Evaluate combinations on all cores
    #[arg(short, long)]
    parallel: bool,

    /// Debug logging and an extra factorization line
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    let numbers = if cli.numbers.is_empty() {
        DEFAULT_NUMBERS.to_vec()
    } else {
        cli.numbers
    };
    let config = SearchConfig::new(numbers, cli.req_numbers.unwrap_or(DEFAULT_REQ_NUMBERS))
        .with_factor_lookup(cli.factor_lookup)
        .with_parallel(cli.parallel);

    let report = run(&config).context("smallest LCM search failed")?;
    println!("{}", report.with_factorization(cli.verbose));
    Ok(())
}
