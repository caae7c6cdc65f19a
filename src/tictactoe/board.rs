//! Immutable board state and move application

use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

use serde::{Deserialize, Serialize};

use super::{BoardFlags, BoardSize, Coord};
use crate::{Error, Result};

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }

    /// Decode a raw grid value: `None` is empty, `0` is X, `1` is O
    pub fn from_raw(value: Option<u8>) -> Option<Cell> {
        match value {
            None => Some(Cell::Empty),
            Some(0) => Some(Cell::X),
            Some(1) => Some(Cell::O),
            Some(_) => None,
        }
    }

    pub fn player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game. X (player 0) always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// Numeric player identifier (X = 0, O = 1)
    pub fn index(self) -> usize {
        match self {
            Player::X => 0,
            Player::O => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// An immutable snapshot of the board.
///
/// The state lives behind an `Arc`, so cloning is cheap and every state
/// produced by a move holds a shared back-reference to its parent: sibling
/// states point at the same parent allocation. Equality and hashing only
/// look at the size and the cells, never at the history.
#[derive(Debug, Clone)]
pub struct BoardState {
    node: Arc<Node>,
}

#[derive(Debug)]
struct Node {
    size: BoardSize,
    cells: Vec<Cell>,
    turn: usize,
    current_player: Option<Player>,
    last_move: Option<Coord>,
    parent: Option<BoardState>,
    flags: BoardFlags,
}

impl BoardState {
    /// Create an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] unless `size` is 3, 4 or 5.
    pub fn new(size: usize) -> Result<Self> {
        let size = BoardSize::new(size)?;
        Ok(Self::empty(size))
    }

    pub fn empty(size: BoardSize) -> Self {
        let cells = vec![Cell::Empty; size.cell_count()];
        let flags = BoardFlags::compute(&cells, size);
        Self::from_node(Node {
            size,
            cells,
            turn: 0,
            current_player: None,
            last_move: None,
            parent: None,
            flags,
        })
    }

    fn from_node(node: Node) -> Self {
        BoardState {
            node: Arc::new(node),
        }
    }

    /// Create a board from a row-major grid of raw values (`grid[y][x]`).
    ///
    /// `None` is an empty cell, `Some(0)` a mark by X and `Some(1)` a mark by O.
    /// The history of such a board is unknown, so it has no parent and no
    /// last move.
    ///
    /// Every value is checked before the grid's shape, so a grid with both a
    /// short row and a bad value reports the value.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidSize`] if the grid does not have 3 to 5 rows
    /// - [`Error::InvalidCellValue`] for any value other than `None`, `0`, `1`
    /// - [`Error::NotSquare`] if a row length differs from the row count
    /// - [`Error::UnbalancedMoves`] unless X has as many marks as O or one more
    pub fn from_grid<R: AsRef<[Option<u8>]>>(grid: &[R]) -> Result<Self> {
        let size = BoardSize::new(grid.len())?;
        let n = size.get();

        let mut cells = Vec::with_capacity(size.cell_count());
        for (y, row) in grid.iter().enumerate() {
            for (x, &value) in row.as_ref().iter().enumerate() {
                let cell = Cell::from_raw(value).ok_or_else(|| Error::InvalidCellValue {
                    row: y,
                    column: x,
                    value: value.map_or_else(String::new, |v| v.to_string()),
                })?;
                cells.push(cell);
            }
        }

        if let Some((y, row)) = grid
            .iter()
            .enumerate()
            .find(|&(_, row)| row.as_ref().len() != n)
        {
            return Err(Error::NotSquare {
                row: y,
                expected: n,
                got: row.as_ref().len(),
            });
        }

        Self::from_cells(size, cells)
    }

    /// Create a board from a string of `X`, `O` and `.` characters, with rows
    /// separated by `/` or whitespace, e.g. `"XO./.X./..."`.
    ///
    /// # Errors
    ///
    /// Same as [`BoardState::from_grid`]; unknown characters are reported as
    /// [`Error::InvalidCellValue`].
    pub fn from_string(s: &str) -> Result<Self> {
        let rows: Vec<&str> = s
            .split(|c: char| c == '/' || c.is_whitespace())
            .filter(|row| !row.is_empty())
            .collect();

        let mut grid = Vec::with_capacity(rows.len());
        for (y, row) in rows.iter().enumerate() {
            let mut values = Vec::with_capacity(row.len());
            for (x, c) in row.chars().enumerate() {
                let cell = Cell::from_char(c).ok_or_else(|| Error::InvalidCellValue {
                    row: y,
                    column: x,
                    value: c.to_string(),
                })?;
                values.push(cell.player().map(|p| p.index() as u8));
            }
            grid.push(values);
        }

        Self::from_grid(&grid)
    }

    fn from_cells(size: BoardSize, cells: Vec<Cell>) -> Result<Self> {
        let x_count = cells.iter().filter(|c| **c == Cell::X).count();
        let o_count = cells.iter().filter(|c| **c == Cell::O).count();
        if x_count != o_count && x_count != o_count + 1 {
            return Err(Error::UnbalancedMoves { x_count, o_count });
        }

        let turn = x_count + o_count;
        let current_player = match turn {
            0 => None,
            t if t % 2 == 1 => Some(Player::X),
            _ => Some(Player::O),
        };
        let flags = BoardFlags::compute(&cells, size);

        Ok(Self::from_node(Node {
            size,
            cells,
            turn,
            current_player,
            last_move: None,
            parent: None,
            flags,
        }))
    }

    /// Apply a move for the next player and return the resulting state.
    ///
    /// # Errors
    ///
    /// - [`Error::GameAlreadyOver`] if this state is terminal
    /// - [`Error::PositionOutOfRange`] if `position` is not in `[1, size²]`
    /// - [`Error::PositionOccupied`] if the cell already holds a mark
    #[must_use = "apply_move returns a new board state; the original is unchanged"]
    pub fn apply_move(&self, position: usize) -> Result<BoardState> {
        if self.game_over() {
            return Err(Error::GameAlreadyOver);
        }

        let size = self.size();
        let coord = Coord::from_position(position, size)?;
        let index = coord.index(size);
        if self.node.cells[index] != Cell::Empty {
            return Err(Error::PositionOccupied { position });
        }

        let player = self.next_player();
        let mut cells = self.node.cells.clone();
        cells[index] = player.to_cell();
        let flags = BoardFlags::compute(&cells, size);

        Ok(Self::from_node(Node {
            size,
            cells,
            turn: self.node.turn + 1,
            current_player: Some(player),
            last_move: Some(coord),
            parent: Some(self.clone()),
            flags,
        }))
    }

    /// Apply a sequence of moves in order
    pub fn apply_moves(&self, positions: &[usize]) -> Result<BoardState> {
        let mut state = self.clone();
        for &position in positions {
            state = state.apply_move(position)?;
        }
        Ok(state)
    }

    pub fn size(&self) -> BoardSize {
        self.node.size
    }

    /// Cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.node.cells
    }

    /// Iterate over the rows of the board, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.node.cells.chunks(self.node.size.get())
    }

    pub fn cell(&self, coord: Coord) -> Cell {
        self.node.cells[coord.index(self.node.size)]
    }

    /// Number of moves made to reach this state
    pub fn turn(&self) -> usize {
        self.node.turn
    }

    /// The player who made the most recent move
    pub fn current_player(&self) -> Option<Player> {
        self.node.current_player
    }

    /// The player who moves next
    pub fn next_player(&self) -> Player {
        self.node.current_player.map_or(Player::X, Player::opponent)
    }

    /// Coordinate of the most recent move, if known
    pub fn last_move(&self) -> Option<Coord> {
        self.node.last_move
    }

    /// Move index of the most recent move, if known
    pub fn last_position(&self) -> Option<usize> {
        self.node.last_move.map(|c| c.to_position(self.node.size))
    }

    pub fn parent(&self) -> Option<&BoardState> {
        self.node.parent.as_ref()
    }

    /// True when both handles refer to the same state allocation
    pub fn ptr_eq(&self, other: &BoardState) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }

    pub fn flags(&self) -> &BoardFlags {
        &self.node.flags
    }

    pub fn winner(&self) -> Option<Player> {
        self.node.flags.winner
    }

    /// True once the board is full or someone has won
    pub fn game_over(&self) -> bool {
        self.node.flags.full || self.node.flags.winner.is_some()
    }

    /// True if the move index is on the board and its cell is empty
    pub fn position_available(&self, position: usize) -> bool {
        Coord::from_position(position, self.size())
            .is_ok_and(|coord| self.cell(coord) == Cell::Empty)
    }

    /// Available move indices in ascending order; empty once the game is over
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.game_over() {
            return Vec::new();
        }
        self.size()
            .positions()
            .filter(|&p| self.position_available(p))
            .collect()
    }

    /// The chain of states leading to this one, oldest first, ending with `self`
    pub fn history(&self) -> Vec<&BoardState> {
        let mut chain = Vec::with_capacity(self.turn() + 1);
        let mut current = Some(self);
        while let Some(state) = current {
            chain.push(state);
            current = state.parent();
        }
        chain.reverse();
        chain
    }

    /// Move indices applied along the history.
    ///
    /// Returns `None` when some state in the chain has no known last move,
    /// such as a board imported from a grid mid-game.
    pub fn move_history(&self) -> Option<Vec<usize>> {
        self.history()
            .into_iter()
            .skip(1)
            .map(BoardState::last_position)
            .collect()
    }
}

impl PartialEq for BoardState {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size() && self.cells() == other.cells()
    }
}

impl Eq for BoardState {}

impl Hash for BoardState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size().hash(state);
        self.cells().hash(state);
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}
