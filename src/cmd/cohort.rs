use crate::reports;
use clap::Args;
use fontaine::cohort::{analyze, write_csv, StatBundle};
use fontaine::error::FResult;
use std::fs::{self, File};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct CohortArgs {
    /// JSON array of one character's stats across players.
    #[arg(short, long)]
    pub input: String,

    /// Also export the raw stats as CSV.
    #[arg(long)]
    pub csv: Option<String>,

    /// Print the styled cohort as JSON instead of a table.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: &CohortArgs) -> FResult<()> {
    let content = fs::read_to_string(&args.input)?;
    let characters: Vec<StatBundle> = serde_json::from_str(&content)?;
    info!("📂 Loaded {} entries from {}", characters.len(), args.input);

    let report = analyze(&characters)?;

    if let Some(ref path) = args.csv {
        write_csv(&characters, File::create(path)?)?;
        info!("💾 Wrote CSV to {}", path);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let title = characters
        .first()
        .map(|c| c.name.as_str())
        .filter(|n| !n.is_empty())
        .unwrap_or("Cohort");
    println!("\n📊 === {} ACROSS {} PLAYERS === 📊", title, characters.len());
    reports::print_cohort_report(&report);
    Ok(())
}
