use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use facedv::config::Config;
use facedv::error::FdResult;
use facedv::scorer::Scorer;
use std::path::PathBuf;
use std::process;
use tracing::{error, info, warn, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with scoring parameters and standards.
    #[arg(global = true, long)]
    config: Option<PathBuf>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score one set of measurements.
    Score(cmd::score::ScoreArgs),
    /// Score every row of a CSV file and rank them.
    Batch(cmd::batch::BatchArgs),
    /// Show the rank tier for a score.
    Rank(cmd::rank::RankArgs),
}

fn init_tracing(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// File parameters are the base; flags typed on the command line win.
fn build_scorer(
    config_path: Option<&PathBuf>,
    cli_config: &Config,
    sub_matches: Option<&ArgMatches>,
) -> FdResult<Scorer> {
    let config = match config_path {
        Some(path) => {
            info!("⚖️  Loading Config from: {}", path.display());
            let mut file_config = Config::load_from_file(path)?;
            if let Some(m) = sub_matches {
                file_config.params.merge_from_cli(&cli_config.params, m);
            }
            file_config
        }
        None => {
            warn!("⚠️  No config file given. Using embedded defaults.");
            cli_config.clone()
        }
    };

    Scorer::new(config)
}

fn run(cli: &Cli, matches: &ArgMatches) -> FdResult<()> {
    match &cli.command {
        Commands::Score(args) => {
            let scorer = build_scorer(
                cli.config.as_ref(),
                &args.config,
                matches.subcommand_matches("score"),
            )?;
            cmd::score::run(args, &scorer, cli.debug)
        }
        Commands::Batch(args) => {
            let scorer = build_scorer(
                cli.config.as_ref(),
                &args.config,
                matches.subcommand_matches("batch"),
            )?;
            cmd::batch::run(args, &scorer)
        }
        Commands::Rank(args) => {
            cmd::rank::run(args);
            Ok(())
        }
    }
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_tracing(cli.debug);

    if let Err(e) = run(&cli, &matches) {
        error!("❌ {}", e);
        process::exit(1);
    }
}
