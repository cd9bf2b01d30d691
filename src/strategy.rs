//! Picking a sampling method as data.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::coverage::{coverage_sample_with_target, CoverageTarget};
use crate::error::Result;
use crate::random::random_sample_with_rng;
use crate::sample::Sample;
use crate::table::Table;
use crate::topk::top_k_sample;

/// Default row count for random and top-k sampling.
pub const DEFAULT_SAMPLE_COUNT: usize = 5;

/// One of the three selection methods with its parameters.
///
/// Serialised with a `method` tag:
/// `{"method": "top_k", "k": 10}`, `{"method": "coverage", "target": 0.6}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum Strategy {
    Random { n: usize },
    TopK { k: usize },
    Coverage { target: CoverageTarget },
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Random { .. } => "random",
            Strategy::TopK { .. } => "top_k",
            Strategy::Coverage { .. } => "coverage",
        }
    }

    /// Whether the method reads the amount column at all.
    pub fn uses_amounts(&self) -> bool {
        !matches!(self, Strategy::Random { .. })
    }

    /// Run the method against `table`.
    ///
    /// `rng` is only drawn from by `Random`, which also ignores
    /// `amount_column`.
    pub fn apply<'t, R: Rng + ?Sized>(
        &self,
        table: &'t Table,
        amount_column: &str,
        rng: &mut R,
    ) -> Result<Sample<'t>> {
        match *self {
            Strategy::Random { n } => random_sample_with_rng(table, n, rng),
            Strategy::TopK { k } => top_k_sample(table, amount_column, k),
            Strategy::Coverage { target } => {
                coverage_sample_with_target(table, amount_column, target)
            }
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Random {
            n: DEFAULT_SAMPLE_COUNT,
        }
    }
}
