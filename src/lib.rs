//! N-in-a-row board engine
//!
//! This crate provides:
//! - Immutable board states for 3x3, 4x4 and 5x5 boards, linked to their
//!   predecessors by a single move
//! - Win and draw classification over rows, columns and both diagonals
//! - An exhaustive game-tree search that counts wins and win depths for
//!   every continuation and recommends the next move
//! - Terminal rendering and a non-interactive command-line front end

pub mod analysis;
pub mod cli;
pub mod error;
pub mod tictactoe;

pub use analysis::{
    Advisor, AdvisorConfig, MoveStats, PositionStats, Suggestion, Tier, get_stats,
    next_suggested_move, suggest_move,
};
pub use error::{Error, Result};
pub use tictactoe::{BoardFlags, BoardSize, BoardState, Cell, Coord, Player, WinLine, WinType};
