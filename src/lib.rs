//! `audit-sampling`: pick rows of a transaction table for manual audit.
//!
//! Three selection methods, each a pure function over an immutable [`Table`]:
//! - `random`: `n` rows uniformly at random, without replacement.
//! - `topk`: the `k` rows with the largest amounts.
//! - `coverage`: the fewest largest rows whose amounts reach a target share
//!   of the column total.
//!
//! Samples refer back to their source rows through [`RowId`]s. `csv_io` and
//! `report` are the thin layers for getting tables in and samples out.

#![forbid(unsafe_code)]

pub mod coverage;
pub mod csv_io;
pub mod error;
pub mod random;
pub mod rank;
pub mod report;
pub mod sample;
pub mod strategy;
pub mod table;
pub mod topk;

pub use coverage::{
    coverage_sample, coverage_sample_with_target, CoverageSampler, CoverageTarget,
    DEFAULT_COVERAGE_PERCENT,
};
pub use csv_io::{export_csv, load_csv, read_csv, write_csv};
pub use error::{DataError, Result, SampleError};
pub use random::{random_sample, random_sample_with_rng, RandomSampler};
pub use report::{render_preview, SampleSummary};
pub use sample::Sample;
pub use strategy::{Strategy, DEFAULT_SAMPLE_COUNT};
pub use table::{AmountColumn, Row, RowId, Table, Value};
pub use topk::{top_k_sample, TopKSampler};
