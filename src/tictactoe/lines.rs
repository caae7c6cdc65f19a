//! Winning line geometry for square boards

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{BoardSize, Cell, Coord, Player};

/// Orientation of a completed line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinType {
    Row,
    Column,
    Diagonal,
}

/// One of the two corner-to-corner diagonals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Diagonal {
    /// Top-left to bottom-right
    NwSe,
    /// Bottom-left to top-right
    SwNe,
}

/// A full row, column or diagonal of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinLine {
    Row(usize),
    Column(usize),
    Diagonal(Diagonal),
}

impl WinLine {
    pub fn win_type(self) -> WinType {
        match self {
            WinLine::Row(_) => WinType::Row,
            WinLine::Column(_) => WinType::Column,
            WinLine::Diagonal(_) => WinType::Diagonal,
        }
    }

    /// Cells on this line, ordered by increasing `x` (rows, diagonals) or `y` (columns)
    pub fn coords(self, size: BoardSize) -> Vec<Coord> {
        let n = size.get();
        match self {
            WinLine::Row(y) => (0..n).map(|x| Coord::new(x, y)).collect(),
            WinLine::Column(x) => (0..n).map(|y| Coord::new(x, y)).collect(),
            WinLine::Diagonal(Diagonal::NwSe) => (0..n).map(|i| Coord::new(i, i)).collect(),
            WinLine::Diagonal(Diagonal::SwNe) => (0..n).map(|x| Coord::new(x, n - x - 1)).collect(),
        }
    }

    /// Every line on the board in scan order: rows top to bottom, columns
    /// left to right, then the NW-SE and SW-NE diagonals.
    pub fn all(size: BoardSize) -> impl Iterator<Item = WinLine> {
        let n = size.get();
        (0..n)
            .map(WinLine::Row)
            .chain((0..n).map(WinLine::Column))
            .chain([
                WinLine::Diagonal(Diagonal::NwSe),
                WinLine::Diagonal(Diagonal::SwNe),
            ])
    }
}

impl fmt::Display for WinLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WinLine::Row(y) => write!(f, "row {y}"),
            WinLine::Column(x) => write!(f, "column {x}"),
            WinLine::Diagonal(Diagonal::NwSe) => write!(f, "diagonal nw_se"),
            WinLine::Diagonal(Diagonal::SwNe) => write!(f, "diagonal sw_ne"),
        }
    }
}

/// Utility for finding completed lines in a row-major cell grid
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// The player owning `line`, if every cell on it holds that player's mark
    pub fn line_owner(cells: &[Cell], size: BoardSize, line: WinLine) -> Option<Player> {
        let mut coords = line.coords(size).into_iter();
        let first = coords.next()?;
        let owner = cells[first.index(size)].player()?;
        coords
            .all(|c| cells[c.index(size)] == owner.to_cell())
            .then_some(owner)
    }

    /// All completed lines in scan order
    pub fn completed_lines(cells: &[Cell], size: BoardSize) -> Vec<(WinLine, Player)> {
        WinLine::all(size)
            .filter_map(|line| Self::line_owner(cells, size, line).map(|owner| (line, owner)))
            .collect()
    }
}
