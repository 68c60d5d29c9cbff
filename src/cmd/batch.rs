use super::OutputFormat;
use crate::reports;
use clap::Args;
use facedv::config::Config;
use facedv::error::FdResult;
use facedv::loader::load_batch_from_file;
use facedv::rank::{classify, RankInfo};
use facedv::scorer::{ScoreResult, Scorer};
use rayon::prelude::*;
use serde::Serialize;
use std::cmp::Reverse;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    #[command(flatten)]
    pub config: Config,

    /// CSV file, header row of field names, one person per row.
    #[arg(short, long)]
    pub input: PathBuf,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct BatchRow<'a> {
    id: &'a str,
    rank: &'a RankInfo,
    result: &'a ScoreResult,
}

pub fn run(args: &BatchArgs, scorer: &Scorer) -> FdResult<()> {
    info!("📂 Loading batch: {}", args.input.display());
    let entries = load_batch_from_file(&args.input)?;

    let start = Instant::now();
    let mut results: Vec<(String, ScoreResult, RankInfo)> = entries
        .par_iter()
        .map(|entry| {
            let result = scorer.score(&entry.measurements);
            let rank = classify(result.total_dev as f64);
            (entry.id.clone(), result, rank)
        })
        .collect();
    info!(
        "⚖️  Scored {} rows in {:.2?}",
        results.len(),
        start.elapsed()
    );

    // Stable: ties keep file order.
    results.sort_by_key(|(_, r, _)| Reverse(r.total_dev));

    match args.format {
        OutputFormat::Json => {
            let rows: Vec<BatchRow> = results
                .iter()
                .map(|(id, result, rank)| BatchRow { id, rank, result })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Table => {
            println!("\n🏆 === RANKING === 🏆");
            reports::print_batch_report(&results);
        }
    }

    Ok(())
}
