//! Top-k selection by amount.

use tracing::debug;

use crate::error::{Result, SampleError};
use crate::rank::rank_descending;
use crate::sample::Sample;
use crate::table::Table;

/// Stateless top-k sampler.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopKSampler;

impl TopKSampler {
    pub fn sample<'t>(
        &self,
        table: &'t Table,
        amount_column: &str,
        k: usize,
    ) -> Result<Sample<'t>> {
        top_k_sample(table, amount_column, k)
    }
}

/// The `k` rows with the largest amounts, largest first.
///
/// Rows with equal amounts keep their original order, so a tie at the cut-off
/// always resolves to the earlier row.
///
/// # Errors
///
/// - `InvalidParameter` unless `1 <= k <= table.row_count()`.
/// - `InvalidColumn` if `amount_column` is missing or not numeric.
pub fn top_k_sample<'t>(table: &'t Table, amount_column: &str, k: usize) -> Result<Sample<'t>> {
    let rows = table.row_count();
    if k == 0 || k > rows {
        return Err(SampleError::out_of_range(
            "k",
            format!("must be in 1..={rows} (got {k})"),
        ));
    }

    let column = table.amount_column(amount_column)?;
    let ids = rank_descending(&column)
        .into_iter()
        .take(k)
        .map(|(id, _)| id)
        .collect();

    debug!(column = amount_column, k, rows, "top-k sample selected");
    Ok(Sample::new(table, ids))
}
