//! N-in-a-row board states for square boards of size 3 to 5

pub mod board;
pub mod coords;
pub mod flags;
pub mod game;
pub mod lines;
pub mod render;

pub use board::{BoardState, Cell, Player};
pub use coords::{BoardSize, Coord};
pub use flags::BoardFlags;
pub use game::{Game, GameOutcome};
pub use lines::{Diagonal, LineAnalyzer, WinLine, WinType};
pub use render::{RenderOptions, render_board, render_game};
