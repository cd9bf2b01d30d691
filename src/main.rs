use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use audit_sampling::{
    export_csv, load_csv, render_preview, write_csv, CoverageTarget, RandomSampler,
    SampleSummary, Strategy, DEFAULT_COVERAGE_PERCENT, DEFAULT_SAMPLE_COUNT,
};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Select transaction rows for manual audit")]
struct Args {
    /// Input table (CSV, or TSV by extension).
    #[arg(long)]
    input: PathBuf,

    /// Column holding the transaction amounts.
    #[arg(long = "amount-column")]
    amount_column: String,

    /// Write the sample here instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the first N input rows to stderr before sampling.
    #[arg(long)]
    preview: Option<usize>,

    #[command(subcommand)]
    method: Method,
}

#[derive(Subcommand, Debug)]
enum Method {
    /// Uniform random rows.
    Random {
        #[arg(long, default_value_t = DEFAULT_SAMPLE_COUNT)]
        count: usize,

        /// Fixed seed for a reproducible sample.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// The largest rows by amount.
    Top {
        #[arg(long, default_value_t = DEFAULT_SAMPLE_COUNT)]
        count: usize,
    },
    /// The fewest largest rows covering a share of the total amount.
    Coverage {
        #[arg(long, default_value_t = DEFAULT_COVERAGE_PERCENT,
              value_parser = clap::value_parser!(u8).range(1..=100))]
        percent: u8,
    },
}

impl Method {
    fn strategy(&self) -> Result<Strategy> {
        Ok(match *self {
            Method::Random { count, .. } => Strategy::Random { n: count },
            Method::Top { count } => Strategy::TopK { k: count },
            Method::Coverage { percent } => Strategy::Coverage {
                target: CoverageTarget::from_percent(percent)?,
            },
        })
    }

    fn sampler(&self) -> RandomSampler {
        match *self {
            Method::Random { seed: Some(s), .. } => RandomSampler::new().with_seed(s),
            _ => RandomSampler::new(),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let table = load_csv(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;
    if let Some(limit) = args.preview {
        eprint!("{}", render_preview(&table, limit));
    }

    let strategy = args.method.strategy()?;
    let mut rng = args.method.sampler().rng();
    let sample = strategy
        .apply(&table, &args.amount_column, &mut rng)
        .with_context(|| format!("{} sampling failed", strategy.name()))?;

    match table.amount_column(&args.amount_column) {
        Ok(amounts) => info!(
            method = strategy.name(),
            "{}",
            SampleSummary::new(&sample, &amounts)
        ),
        Err(_) => info!(method = strategy.name(), rows = sample.len(), "sample selected"),
    }

    match &args.output {
        Some(path) => export_csv(&sample, path)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => write_csv(&sample, io::stdout().lock()).context("failed to write sample")?,
    }
    Ok(())
}
