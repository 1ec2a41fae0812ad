use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use fontaine::config::Config;
use fontaine::error::FResult;
use fontaine::scorer::Scorer;
use std::process;
use tracing::{error, info, warn, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with tier tables, rating thresholds and score bounds.
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rate every artifact and character of a player snapshot.
    Rate(cmd::rate::RateArgs),
    /// Compare one character across players.
    Cohort(cmd::cohort::CohortArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let result = match &cli.command {
        Commands::Rate(args) => {
            // Flattened scoring flags live inside the subcommand's matches.
            let sub_matches = matches.subcommand_matches("rate").unwrap_or(&matches);
            build_scorer(&cli, &args.config, sub_matches)
                .and_then(|scorer| cmd::rate::run(args, &scorer))
        }
        Commands::Cohort(args) => cmd::cohort::run(args),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}

/// Resolves the configuration (defaults < --config file < explicit flags)
/// and builds the scorer from it.
fn build_scorer(cli: &Cli, cli_config: &Config, sub_matches: &ArgMatches) -> FResult<Scorer> {
    let config = match &cli.config {
        Some(path) => {
            info!("⚖️  Loading config from: {}", path);
            let mut file_config = Config::load_from_file(path)?;
            file_config.merge_from_cli(cli_config, sub_matches);
            file_config
        }
        None => {
            if cli.debug {
                warn!("No config file given. Using embedded defaults.");
            }
            cli_config.clone()
        }
    };

    Scorer::new(&config)
}
