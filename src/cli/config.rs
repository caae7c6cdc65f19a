//! Shared argument types for CLI commands

use anyhow::{Result, bail};
use clap::Args;

use crate::{analysis::AdvisorConfig, tictactoe::BoardState};

/// Options shared by commands that search the game tree
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Random seed for reproducible tie-breaking
    #[arg(long)]
    pub seed: Option<u64>,

    /// Hide the progress spinner
    #[arg(long)]
    pub no_progress: bool,
}

impl CommonArgs {
    pub fn advisor_config(&self) -> AdvisorConfig {
        AdvisorConfig::new().with_optional_seed(self.seed)
    }
}

/// Where the position to work on comes from
#[derive(Args, Debug, Clone, Default)]
pub struct BoardArgs {
    /// Board size (3, 4 or 5); defaults to 3, or to the size of --board
    #[arg(long, short = 's')]
    pub size: Option<usize>,

    /// Comma-separated move indices to apply, e.g. 5,1,2
    #[arg(long, short = 'm', value_delimiter = ',')]
    pub moves: Vec<usize>,

    /// Starting board as rows of X, O and '.', separated by '/', e.g. "XO./.X./..."
    #[arg(long, short = 'b')]
    pub board: Option<String>,
}

impl BoardArgs {
    /// Build the starting board and apply the requested moves
    pub fn resolve(&self) -> Result<BoardState> {
        let start = match &self.board {
            Some(text) => {
                let state = BoardState::from_string(text)?;
                if let Some(size) = self.size.filter(|&n| n != state.size().get()) {
                    bail!(
                        "--size {size} does not match the {} board given with --board",
                        state.size()
                    );
                }
                state
            }
            None => BoardState::new(self.size.unwrap_or(3))?,
        };
        Ok(start.apply_moves(&self.moves)?)
    }
}
