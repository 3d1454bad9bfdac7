use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use customer_lens::data::export::export_file;
use customer_lens::data::generate::{generate, parse_count, DEFAULT_CUSTOMER_COUNT};
use customer_lens::data::stats::compute_stats;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Write a synthetic customer dataset to .csv, .json or .parquet
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of customers to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_CUSTOMER_COUNT, value_parser = parse_count)]
    count: usize,

    /// Seed for the random generator
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Output path; the extension selects the format
    #[arg(short, long, default_value = "sample_customers.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut rng = StdRng::seed_from_u64(args.seed);
    let customers = generate(args.count, &mut rng);

    export_file(&args.output, &customers)
        .with_context(|| format!("writing {}", args.output.display()))?;

    let stats = compute_stats(&customers);
    println!(
        "Wrote {} customers to {} (churn rate {:.1}%)",
        stats.total_customers,
        args.output.display(),
        stats.churn_rate * 100.0
    );
    Ok(())
}
