//! Cumulative coverage sampling.
//!
//! Walks rows from the largest amount down and stops at the first row where
//! the running total reaches the requested share of the column total. The
//! result is the shortest descending prefix that covers the target.
//!
//! Negative amounts are taken at face value. They rank last and lower the
//! total, which can make a target reachable earlier than the positive rows
//! alone would suggest; cleaning them is left to the caller.
//!
//! Amounts far smaller than the largest ones can vanish in the floating-point
//! sum: with `[1e16, 1.0, 1.0]` the total is `1e16`, so a 100 % target is met
//! by the first row alone.
//!
//! A total that is zero, negative, or overflows to infinity has no meaningful
//! share and is rejected with `DegenerateInput`.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{Result, SampleError};
use crate::rank::{rank_descending, ranked_total};
use crate::sample::Sample;
use crate::table::{RowId, Table};

/// Default coverage target: 60 % of the total amount.
pub const DEFAULT_COVERAGE_PERCENT: u8 = 60;

/// Fraction of the total amount to cover, in `(0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct CoverageTarget(f64);

impl CoverageTarget {
    /// Validate a fraction. NaN and anything outside `(0, 1]` is rejected.
    pub fn new(fraction: f64) -> Result<Self> {
        if fraction > 0.0 && fraction <= 1.0 {
            Ok(Self(fraction))
        } else {
            Err(SampleError::out_of_range(
                "target_coverage",
                format!("must be in (0, 1] (got {fraction})"),
            ))
        }
    }

    /// Validate a whole percentage, e.g. `60` for 60 %.
    pub fn from_percent(percent: u8) -> Result<Self> {
        Self::new(f64::from(percent) / 100.0)
    }

    pub fn fraction(self) -> f64 {
        self.0
    }
}

impl Default for CoverageTarget {
    fn default() -> Self {
        Self(f64::from(DEFAULT_COVERAGE_PERCENT) / 100.0)
    }
}

impl TryFrom<f64> for CoverageTarget {
    type Error = SampleError;

    fn try_from(fraction: f64) -> Result<Self> {
        Self::new(fraction)
    }
}

impl From<CoverageTarget> for f64 {
    fn from(target: CoverageTarget) -> f64 {
        target.0
    }
}

/// Stateless coverage sampler.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoverageSampler;

impl CoverageSampler {
    pub fn sample<'t>(
        &self,
        table: &'t Table,
        amount_column: &str,
        target_coverage: f64,
    ) -> Result<Sample<'t>> {
        coverage_sample(table, amount_column, target_coverage)
    }
}

/// Smallest set of largest rows whose amounts reach `target_coverage` of the
/// column total.
///
/// The boundary is inclusive: a row whose running share lands exactly on the
/// target is selected and ends the walk. If the target is never reached every
/// row is returned. Rows come back largest first.
///
/// # Errors
///
/// - `InvalidParameter` if `target_coverage` is outside `(0, 1]`.
/// - `InvalidColumn` if `amount_column` is missing or not numeric.
/// - `DegenerateInput` if the column total is zero, negative or not finite.
pub fn coverage_sample<'t>(
    table: &'t Table,
    amount_column: &str,
    target_coverage: f64,
) -> Result<Sample<'t>> {
    let target = CoverageTarget::new(target_coverage)?;
    coverage_sample_with_target(table, amount_column, target)
}

/// [`coverage_sample`] with an already validated target.
pub fn coverage_sample_with_target<'t>(
    table: &'t Table,
    amount_column: &str,
    target: CoverageTarget,
) -> Result<Sample<'t>> {
    let column = table.amount_column(amount_column)?;
    let ranked = rank_descending(&column);

    let total = ranked_total(&ranked);
    if !(total.is_finite() && total > 0.0) {
        return Err(SampleError::DegenerateInput { total });
    }

    let mut running = 0.0;
    let mut ids: Vec<RowId> = Vec::new();
    for (id, amount) in ranked {
        running += amount;
        ids.push(id);
        trace!(row = %id, running, "coverage step");
        if running / total >= target.fraction() {
            break;
        }
    }

    debug!(
        column = amount_column,
        target = target.fraction(),
        selected = ids.len(),
        rows = table.row_count(),
        covered = running / total,
        "coverage sample selected"
    );
    Ok(Sample::new(table, ids))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Value;

    fn amounts(values: &[f64]) -> Table {
        Table::new(
            vec!["amount".into()],
            values.iter().map(|&a| vec![Value::Number(a)]),
        )
        .expect("valid table")
    }

    fn selected(s: &Sample<'_>) -> Vec<f64> {
        let col = s.table().amount_column("amount").expect("numeric");
        s.ids().iter().filter_map(|id| col.get(*id)).collect()
    }

    #[test]
    fn stops_at_first_prefix_reaching_target() {
        // total 260, 60 % = 156: 100 (0.385) then 180 (0.692).
        let t = amounts(&[20.0, 100.0, 10.0, 80.0, 50.0]);
        let s = coverage_sample(&t, "amount", 0.6).expect("valid target");
        assert_eq!(selected(&s), vec![100.0, 80.0]);
        assert_eq!(
            s.ids().iter().map(|id| id.index()).collect::<Vec<_>>(),
            vec![1, 3]
        );
    }

    #[test]
    fn boundary_is_inclusive() {
        // 50 / 100 lands exactly on 0.5.
        let t = amounts(&[50.0, 30.0, 20.0]);
        let s = coverage_sample(&t, "amount", 0.5).expect("valid target");
        assert_eq!(selected(&s), vec![50.0]);
    }

    #[test]
    fn full_target_returns_every_positive_row() {
        let t = amounts(&[0.1, 0.2, 0.3, 0.4, 0.7]);
        let s = coverage_sample(&t, "amount", 1.0).expect("valid target");
        assert_eq!(s.len(), 5);
    }

    #[test]
    fn zero_total_is_degenerate() {
        let t = amounts(&[0.0, 0.0, 0.0]);
        assert_eq!(
            coverage_sample(&t, "amount", 0.6).expect_err("zero total"),
            SampleError::DegenerateInput { total: 0.0 }
        );

        let empty = amounts(&[]);
        assert!(matches!(
            coverage_sample(&empty, "amount", 0.6),
            Err(SampleError::DegenerateInput { .. })
        ));

        let negative = amounts(&[5.0, -10.0]);
        assert!(matches!(
            coverage_sample(&negative, "amount", 0.6),
            Err(SampleError::DegenerateInput { .. })
        ));
    }

    #[test]
    fn overflowing_total_is_degenerate() {
        // Each amount is finite, their sum is not.
        let t = amounts(&[1e308, 1e308, 1.0]);
        assert_eq!(
            coverage_sample(&t, "amount", 0.1).expect_err("infinite total"),
            SampleError::DegenerateInput {
                total: f64::INFINITY
            }
        );
    }

    #[test]
    fn tie_at_stop_row_prefers_earlier_row() {
        // total 22: 7 (0.318) then the first 5 (0.545).
        let t = amounts(&[5.0, 7.0, 5.0, 5.0]);
        let s = coverage_sample(&t, "amount", 0.5).expect("valid target");
        assert_eq!(s.ids(), &[RowId::new(1), RowId::new(0)]);

        let again = CoverageSampler
            .sample(&t, "amount", 0.5)
            .expect("valid target");
        assert_eq!(s.ids(), again.ids());
    }

    #[test]
    fn tiny_amounts_can_vanish_from_the_total() {
        let t = amounts(&[1.0, 1e16, 1.0]);
        let s = coverage_sample(&t, "amount", 1.0).expect("valid target");
        assert_eq!(s.ids(), &[RowId::new(1)]);
    }

    #[test]
    fn negative_amounts_are_taken_at_face_value() {
        // total 100: 120 alone already exceeds it.
        let t = amounts(&[-20.0, 120.0]);
        let s = coverage_sample(&t, "amount", 1.0).expect("positive total");
        assert_eq!(selected(&s), vec![120.0]);
    }

    #[test]
    fn rejects_targets_outside_unit_interval() {
        let t = amounts(&[1.0, 2.0]);
        for bad in [0.0, -0.1, 1.5, f64::NAN] {
            assert!(matches!(
                coverage_sample(&t, "amount", bad),
                Err(SampleError::InvalidParameter {
                    name: "target_coverage",
                    ..
                })
            ));
        }
    }

    #[test]
    fn parameter_checked_before_column() {
        let t = amounts(&[1.0]);
        assert!(matches!(
            coverage_sample(&t, "nope", 2.0),
            Err(SampleError::InvalidParameter { .. })
        ));
        assert!(matches!(
            coverage_sample(&t, "nope", 0.5),
            Err(SampleError::InvalidColumn { .. })
        ));
    }

    #[test]
    fn target_from_percent() {
        assert_eq!(CoverageTarget::from_percent(60).map(|t| t.fraction()), Ok(0.6));
        assert_eq!(CoverageTarget::from_percent(100).map(|t| t.fraction()), Ok(1.0));
        assert!(CoverageTarget::from_percent(0).is_err());
        assert!(CoverageTarget::from_percent(101).is_err());
        assert_eq!(CoverageTarget::default().fraction(), 0.6);
    }
}
