//! Plain-text summaries for showing a table or a sample to a person.

use std::fmt;

use crate::rank::{rank_descending, ranked_total};
use crate::sample::Sample;
use crate::table::{AmountColumn, Table};

/// What a sample covers, measured on one amount column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleSummary {
    pub selected: usize,
    pub rows: usize,
    pub sampled_amount: f64,
    pub total_amount: f64,
}

impl SampleSummary {
    pub fn new(sample: &Sample<'_>, amounts: &AmountColumn<'_>) -> Self {
        let sampled_amount: f64 = sample.ids().iter().filter_map(|id| amounts.get(*id)).sum();
        // Same summation order as the coverage sampler, so a reported share
        // matches the ratio it stopped on.
        let total_amount = ranked_total(&rank_descending(amounts));
        Self {
            selected: sample.len(),
            rows: sample.table().row_count(),
            sampled_amount,
            total_amount,
        }
    }

    /// Share of the total amount held by the sample, or `None` when the total
    /// is not positive.
    pub fn coverage(&self) -> Option<f64> {
        (self.total_amount > 0.0).then(|| self.sampled_amount / self.total_amount)
    }
}

impl fmt::Display for SampleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} rows, amount {} of {}",
            self.selected, self.rows, self.sampled_amount, self.total_amount
        )?;
        if let Some(c) = self.coverage() {
            write!(f, " ({:.1}%)", c * 100.0)?;
        }
        Ok(())
    }
}

/// Render the first `limit` rows of `table` as an aligned text grid.
///
/// The leftmost column is the row id.
pub fn render_preview(table: &Table, limit: usize) -> String {
    let mut grid: Vec<Vec<String>> = Vec::with_capacity(limit.min(table.row_count()) + 1);
    grid.push(
        std::iter::once("#".to_string())
            .chain(table.columns().iter().cloned())
            .collect(),
    );
    for row in table.rows().iter().take(limit) {
        grid.push(
            std::iter::once(row.id().to_string())
                .chain(row.cells().iter().map(|c| c.to_string()))
                .collect(),
        );
    }

    let widths: Vec<usize> = (0..grid[0].len())
        .map(|i| {
            grid.iter()
                .map(|line| line[i].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for line in &grid {
        let cells: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{cell:<w$}"))
            .collect();
        out.push_str(cells.join("  ").trim_end());
        out.push('\n');
    }
    if table.row_count() > limit {
        out.push_str(&format!("... {} more rows\n", table.row_count() - limit));
    }
    out
}
