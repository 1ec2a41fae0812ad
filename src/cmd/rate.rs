use crate::reports;
use clap::Args;
use fontaine::config::Config;
use fontaine::error::FResult;
use fontaine::player::{rate_player, PlayerSnapshot};
use fontaine::scorer::Scorer;

#[derive(Args, Debug, Clone)]
pub struct RateArgs {
    #[command(flatten)]
    pub config: Config,

    /// Player snapshot (JSON).
    #[arg(short, long)]
    pub player: String,

    /// Only show characters whose name contains this text.
    #[arg(short = 'n', long)]
    pub character: Option<String>,

    /// Print the report as JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: &RateArgs, scorer: &Scorer) -> FResult<()> {
    let snapshot = PlayerSnapshot::load_from_file(&args.player)?;
    let mut report = rate_player(scorer, &snapshot)?;

    if let Some(ref filter) = args.character {
        let filter = filter.to_lowercase();
        report
            .characters
            .retain(|c| c.name.to_lowercase().contains(&filter));
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "\n⚖️  === JUDGEMENT: {} ({}) === ⚖️",
        report.nickname, report.uid
    );
    if report.characters.is_empty() {
        println!("No characters found matching criteria.");
        return Ok(());
    }

    reports::print_player_report(&report);
    reports::print_breakdown_report(&report);
    Ok(())
}
