//! nrow CLI - Replay, analyze and auto-play N-in-a-row games
//!
//! This CLI provides:
//! - Replaying move lists and rendering boards
//! - Exhaustive game-tree statistics for a position
//! - Move suggestions and advisor-vs-advisor games

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "nrow")]
#[command(version, about = "N-in-a-row board engine and move advisor", long_about = None)]
struct Cli {
    /// Log advisor decisions to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay moves and show the board
    Play(nrow::cli::commands::play::PlayArgs),

    /// Count wins and win depths for every available move
    Stats(nrow::cli::commands::stats::StatsArgs),

    /// Suggest the next move
    Suggest(nrow::cli::commands::suggest::SuggestArgs),

    /// Let the advisor play against itself
    SelfPlay(nrow::cli::commands::self_play::SelfPlayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    nrow::cli::init_logging(cli.verbose);

    match cli.command {
        Commands::Play(args) => nrow::cli::commands::play::execute(args),
        Commands::Stats(args) => nrow::cli::commands::stats::execute(args),
        Commands::Suggest(args) => nrow::cli::commands::suggest::execute(args),
        Commands::SelfPlay(args) => nrow::cli::commands::self_play::execute(args),
    }
}
