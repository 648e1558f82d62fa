/// Monte Carlo estimation of the percolation threshold
///
/// Runs repeated independent experiments: each trial opens uniformly random
/// sites on a fresh n-by-n grid until it percolates and records the open
/// fraction at that moment. Trials share nothing, so they run in parallel
/// via rayon; every trial owns its grid and an RNG derived from the base
/// seed and the trial index, which makes seeded runs reproducible no matter
/// how the trials are scheduled.
use anyhow::{bail, Result};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::percolation::Percolation;

/// 95% confidence multiplier for the normal approximation
const CONFIDENCE_95: f64 = 1.96;

#[derive(Debug)]
pub struct PercolationStats {
    grid_size: usize,
    thresholds: Vec<f64>,
    mean: f64,
    stddev: f64,
}

impl PercolationStats {
    /// Perform `trials` independent experiments on an n-by-n grid, with the
    /// base seed drawn from system entropy
    pub fn run(n: usize, trials: usize) -> Result<Self> {
        Self::run_seeded(n, trials, rand::thread_rng().gen())
    }

    /// Perform `trials` independent experiments with a fixed base seed
    pub fn run_seeded(n: usize, trials: usize, seed: u64) -> Result<Self> {
        if n == 0 {
            bail!("grid size must be positive, got 0");
        }
        if trials == 0 {
            bail!("trial count must be positive, got 0");
        }

        let thresholds: Vec<f64> = (0..trials)
            .into_par_iter()
            .map(|trial| {
                let mut rng = StdRng::seed_from_u64(splitmix64(seed.wrapping_add(trial as u64)));
                let fraction = run_trial(n, &mut rng)?;
                debug!("trial {trial}: open fraction {fraction:.4}");
                Ok(fraction)
            })
            .collect::<Result<_>>()?;

        let mean = thresholds.iter().sum::<f64>() / trials as f64;
        // Sample stddev is undefined for a single observation. NaN here is
        // deliberate and propagates into the confidence interval.
        let stddev = if trials == 1 {
            f64::NAN
        } else {
            let variance = thresholds
                .iter()
                .map(|x| (x - mean).powi(2))
                .sum::<f64>()
                / (trials - 1) as f64;
            variance.sqrt()
        };
        info!("{trials} trials on a {n}x{n} grid: mean {mean:.4}, stddev {stddev:.4}");

        Ok(PercolationStats {
            grid_size: n,
            thresholds,
            mean,
            stddev,
        })
    }

    /// Grid dimension the experiments ran on
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Number of trials performed
    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    /// Open fraction recorded by each trial
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Sample mean of the percolation threshold
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample standard deviation of the percolation threshold, NaN when
    /// only one trial was run
    pub fn stddev(&self) -> f64 {
        self.stddev
    }

    /// Low endpoint of the 95% confidence interval, NaN when only one
    /// trial was run
    pub fn confidence_lo(&self) -> f64 {
        self.mean - CONFIDENCE_95 * self.stddev / (self.trials() as f64).sqrt()
    }

    /// High endpoint of the 95% confidence interval, NaN when only one
    /// trial was run
    pub fn confidence_hi(&self) -> f64 {
        self.mean + CONFIDENCE_95 * self.stddev / (self.trials() as f64).sqrt()
    }
}

/// Open uniformly random sites until the grid percolates, returning the
/// fraction of sites open at that moment
///
/// Drawing an already-open site is a harmless no-op; termination holds with
/// probability 1 since opening every site always percolates.
fn run_trial<R: Rng>(n: usize, rng: &mut R) -> Result<f64> {
    let mut grid = Percolation::new(n)?;
    while !grid.percolates() {
        let row = rng.gen_range(1..=n);
        let col = rng.gen_range(1..=n);
        grid.open(row, col)?;
    }
    Ok(grid.number_of_open_sites() as f64 / (n * n) as f64)
}

/// Mix the per-trial seed so consecutive trial indices produce unrelated
/// RNG streams (splitmix64 finalizer)
fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
