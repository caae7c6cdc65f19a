//! Stats command - Per-move game-tree statistics for a position

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    analysis::{PositionStats, get_stats},
    cli::{
        commands::warn_if_slow,
        config::BoardArgs,
        output::{create_spinner, print_flags, print_section, print_stats_table},
    },
};

#[derive(Parser, Debug, Clone)]
#[command(about = "Count wins and win depths for every available move")]
pub struct StatsArgs {
    #[command(flatten)]
    pub board: BoardArgs,

    /// Hide the progress spinner
    #[arg(long)]
    pub no_progress: bool,

    /// Print the stats as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Write the stats as JSON to a file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: StatsArgs) -> Result<()> {
    let state = args.board.resolve()?;
    warn_if_slow(&state);

    let spinner = create_spinner("Searching game tree", !args.no_progress && !args.json);
    let stats = get_stats(&state)?;
    spinner.finish_and_clear();

    if let Some(path) = &args.export {
        export_stats(&stats, path)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    print_section("Position");
    print_flags(&state);
    if stats.is_empty() {
        println!("\nNo moves available.");
    } else {
        print_section("Continuations");
        print_stats_table(&stats);
    }
    if let Some(path) = &args.export {
        println!("\nStats exported to: {}", path.display());
    }
    Ok(())
}

/// Write stats to `path` as pretty-printed JSON
pub fn export_stats(stats: &PositionStats, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(stats)?;
    std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}
