//! Self-play command - Let the advisor play both sides to the end

use anyhow::Result;
use clap::Parser;

use crate::{
    analysis::Advisor,
    cli::{
        commands::warn_if_slow,
        config::{BoardArgs, CommonArgs},
        output::{create_spinner, print_flags, print_section},
    },
    tictactoe::{Game, RenderOptions, render_board},
};

#[derive(Parser, Debug, Clone)]
#[command(about = "Let the advisor play against itself")]
pub struct SelfPlayArgs {
    #[command(flatten)]
    pub board: BoardArgs,

    #[command(flatten)]
    pub common: CommonArgs,

    /// Draw boards without padding
    #[arg(long)]
    pub compact: bool,

    /// Disable ANSI colours
    #[arg(long)]
    pub no_color: bool,

    /// Print the finished game record as JSON at the end
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: SelfPlayArgs) -> Result<()> {
    let mut state = args.board.resolve()?;
    let mut advisor = Advisor::new(&args.common.advisor_config());
    let options = RenderOptions::default()
        .with_compact(args.compact)
        .with_color(!args.no_color);

    print!("{}", render_board(&state, options));
    while !state.game_over() {
        if state.turn() > 0 {
            warn_if_slow(&state);
        }
        let player = state.next_player();
        let spinner = create_spinner(&format!("{player} is thinking"), !args.common.no_progress);
        let suggestion = advisor.suggest(&state);
        spinner.finish_and_clear();
        let suggestion = suggestion?;

        state = state.apply_move(suggestion.position)?;
        println!(
            "\nTurn {}: {player} plays {} ({})",
            state.turn(),
            suggestion.position,
            suggestion.tier
        );
        print!("{}", render_board(&state, options));
    }

    print_section("Result");
    print_flags(&state);

    if args.json {
        match Game::from_state(&state) {
            Some(game) => println!("{}", serde_json::to_string_pretty(&game)?),
            None => println!("{}", serde_json::to_string_pretty(&state.move_history())?),
        }
    }
    Ok(())
}
