use super::OutputFormat;
use crate::reports;
use clap::Args;
use facedv::api::{build_report, ResultReport};
use facedv::config::Config;
use facedv::error::FdResult;
use facedv::loader::load_measurements_from_file;
use facedv::scorer::{ScoreResult, Scorer, PART_COUNT};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub config: Config,

    /// JSON file with one set of measurements.
    #[arg(short, long)]
    pub input: PathBuf,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct ScoreOutput<'a> {
    result: &'a ScoreResult,
    report: &'a ResultReport,
}

pub fn run(args: &ScoreArgs, scorer: &Scorer, debug: bool) -> FdResult<()> {
    info!("📂 Loading measurements: {}", args.input.display());
    let measurements = load_measurements_from_file(&args.input)?;
    info!(
        "📏 {} of {} parts measured ({})",
        measurements.measured_parts(),
        PART_COUNT,
        measurements.gender
    );

    let details = scorer.score_details(&measurements);
    let report = build_report(&details.result);

    match args.format {
        OutputFormat::Json => {
            let out = ScoreOutput {
                result: &details.result,
                report: &report,
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Table => {
            println!("\n🔎 === FACE DV === 🔎");
            reports::print_summary(&report);
            reports::print_part_report(&report);
            if debug {
                reports::print_trace_report(&details);
            }
        }
    }

    Ok(())
}
