//! Descending ranking shared by the top-k and coverage samplers.

use crate::table::{AmountColumn, RowId};

/// Rows ordered by amount, largest first.
///
/// Ties keep original row order (smaller `RowId` first), so equal amounts
/// always rank the same way for the same table.
pub fn rank_descending(column: &AmountColumn<'_>) -> Vec<(RowId, f64)> {
    let mut ranked: Vec<(RowId, f64)> = column.iter().collect();
    ranked.sort_by(|(id_a, a), (id_b, b)| b.total_cmp(a).then_with(|| id_a.cmp(id_b)));
    ranked
}

/// Sum of a ranking, added largest first.
///
/// Coverage ratios are taken against this sum, so a running total over the
/// whole ranking ends on it bit-for-bit.
pub fn ranked_total(ranked: &[(RowId, f64)]) -> f64 {
    ranked.iter().map(|(_, a)| a).sum()
}
