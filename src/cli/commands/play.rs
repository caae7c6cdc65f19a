//! Play command - Replay a move list and show the resulting board

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{
        config::BoardArgs,
        output::{print_flags, print_section},
    },
    tictactoe::{BoardFlags, BoardSize, Player, RenderOptions, render_board, render_game},
};

#[derive(Parser, Debug, Clone)]
#[command(about = "Replay moves and show the board")]
pub struct PlayArgs {
    #[command(flatten)]
    pub board: BoardArgs,

    /// Show every turn from the start, not just the final board
    #[arg(long)]
    pub history: bool,

    /// Draw boards without padding
    #[arg(long)]
    pub compact: bool,

    /// Disable ANSI colours
    #[arg(long)]
    pub no_color: bool,

    /// Print the resulting state as JSON instead of drawing it
    #[arg(long)]
    pub json: bool,
}

/// JSON view of a board state
#[derive(Debug, Serialize)]
pub struct StateReport {
    pub size: BoardSize,
    pub turn: usize,
    pub next_player: Option<Player>,
    pub game_over: bool,
    pub flags: BoardFlags,
    /// Move indices applied since the last known empty board
    pub moves: Option<Vec<usize>>,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let state = args.board.resolve()?;

    if args.json {
        let report = StateReport {
            size: state.size(),
            turn: state.turn(),
            next_player: (!state.game_over()).then(|| state.next_player()),
            game_over: state.game_over(),
            flags: state.flags().clone(),
            moves: state.move_history(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let options = RenderOptions::default()
        .with_compact(args.compact)
        .with_color(!args.no_color);
    if args.history {
        print!("{}", render_game(&state, options));
    } else {
        print!("{}", render_board(&state, options));
    }

    print_section("Position");
    print_flags(&state);
    Ok(())
}
