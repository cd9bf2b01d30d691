//! Same ledger, three ways: random, top-k and 60 % coverage.
//!
//! Coverage picks the fewest largest entries whose amounts reach the target
//! share of the total; top-k with the same row count would pick the same rows,
//! but coverage decides the count from the data.

use audit_sampling::{
    coverage_sample, render_preview, top_k_sample, RandomSampler, SampleSummary, Table, Value,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Many small invoices, a few big ones.
    let amounts: Vec<f64> = (0..40)
        .map(|i| (10_000.0 / (1.0 + i as f64).powf(1.3)).round())
        .collect();
    let table = Table::new(
        vec!["invoice".into(), "amount".into()],
        amounts
            .iter()
            .enumerate()
            .map(|(i, &a)| vec![Value::from(format!("INV-{:03}", i + 1)), Value::Number(a)]),
    )?;
    let column = table.amount_column("amount")?;

    println!("{}", render_preview(&table, 5));

    let random = RandomSampler::new().with_seed(7).sample(&table, 5)?;
    let top = top_k_sample(&table, "amount", 5)?;
    let coverage = coverage_sample(&table, "amount", 0.6)?;

    println!("random (seed 7): {}", SampleSummary::new(&random, &column));
    println!("top 5:           {}", SampleSummary::new(&top, &column));
    println!("60% coverage:    {}", SampleSummary::new(&coverage, &column));

    let ids: Vec<String> = coverage.ids().iter().map(|id| id.to_string()).collect();
    println!("coverage rows:   {}", ids.join(", "));

    Ok(())
}
