//! Suggest command - Ask the advisor for the next move

use anyhow::Result;
use clap::Parser;

use crate::{
    analysis::Advisor,
    cli::{
        commands::warn_if_slow,
        config::{BoardArgs, CommonArgs},
        output::create_spinner,
    },
};

#[derive(Parser, Debug, Clone)]
#[command(about = "Suggest the next move")]
pub struct SuggestArgs {
    #[command(flatten)]
    pub board: BoardArgs,

    #[command(flatten)]
    pub common: CommonArgs,

    /// Print the suggestion as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: SuggestArgs) -> Result<()> {
    let state = args.board.resolve()?;
    if state.turn() > 0 {
        warn_if_slow(&state);
    }

    let mut advisor = Advisor::new(&args.common.advisor_config());
    let spinner = create_spinner("Searching game tree", !args.common.no_progress && !args.json);
    let suggestion = advisor.suggest(&state);
    spinner.finish_and_clear();
    let suggestion = suggestion?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&suggestion)?);
    } else {
        println!(
            "{} should play {} ({})",
            state.next_player(),
            suggestion.position,
            suggestion.tier
        );
    }
    Ok(())
}
