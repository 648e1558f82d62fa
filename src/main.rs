use anyhow::Result;
use clap::Parser;

use percolate::stats::PercolationStats;

/// Estimate the site percolation threshold by Monte Carlo simulation
///
/// Repeatedly opens random sites on an n-by-n grid until a path of open
/// sites connects the top row to the bottom row, then reports the mean open
/// fraction across trials with a 95% confidence interval.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Grid dimension n (the grid has n*n sites)
    #[clap(value_name = "N")]
    grid_size: usize,

    /// Number of independent trials
    #[clap(value_name = "TRIALS")]
    trials: usize,

    /// Base seed for reproducible runs (drawn from entropy if omitted)
    #[clap(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let stats = match args.seed {
        Some(seed) => PercolationStats::run_seeded(args.grid_size, args.trials, seed)?,
        None => PercolationStats::run(args.grid_size, args.trials)?,
    };

    println!("mean                    = {}", stats.mean());
    println!("stddev                  = {}", stats.stddev());
    println!(
        "95% confidence interval = [{}, {}]",
        stats.confidence_lo(),
        stats.confidence_hi()
    );
    Ok(())
}
