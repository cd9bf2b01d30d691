//! Uniform random sampling without replacement.
//!
//! Notes:
//! - `random_sample_with_rng` takes the random source explicitly; use it (or a
//!   seeded [`RandomSampler`]) wherever a reproducible sample is needed.
//! - `random_sample` draws from `rand::rng()` and is not reproducible across
//!   calls.

use rand::prelude::*;
use tracing::debug;

use crate::error::{Result, SampleError};
use crate::sample::Sample;
use crate::table::{RowId, Table};

/// Random sampler with an optional fixed seed.
#[derive(Debug, Clone, Default)]
pub struct RandomSampler {
    seed: Option<u64>,
}

impl RandomSampler {
    /// Create an unseeded sampler.
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Set random seed.
    ///
    /// Every call then draws from a fresh `StdRng` seeded with `seed`, so
    /// repeated calls on the same table return the same sample.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// A fresh generator: seeded when a seed is set, from OS entropy otherwise.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        }
    }

    /// Draw `n` distinct rows uniformly at random.
    pub fn sample<'t>(&self, table: &'t Table, n: usize) -> Result<Sample<'t>> {
        random_sample_with_rng(table, n, &mut self.rng())
    }
}

/// Draw `n` distinct rows from `table` using the thread-local RNG.
pub fn random_sample(table: &Table, n: usize) -> Result<Sample<'_>> {
    random_sample_with_rng(table, n, &mut rand::rng())
}

/// Draw `n` distinct rows from `table` using a caller-supplied RNG.
///
/// Every size-`n` subset is equally likely. Rows come back in draw order.
///
/// Fails with `InvalidParameter` unless `1 <= n <= table.row_count()`.
pub fn random_sample_with_rng<'t, R: Rng + ?Sized>(
    table: &'t Table,
    n: usize,
    rng: &mut R,
) -> Result<Sample<'t>> {
    let rows = table.row_count();
    if n == 0 || n > rows {
        return Err(SampleError::out_of_range(
            "n",
            format!("must be in 1..={rows} (got {n})"),
        ));
    }

    let ids: Vec<RowId> = rand::seq::index::sample(rng, rows, n)
        .into_iter()
        .map(|i| table.rows()[i].id())
        .collect();

    debug!(requested = n, rows, "random sample drawn");
    Ok(Sample::new(table, ids))
}
