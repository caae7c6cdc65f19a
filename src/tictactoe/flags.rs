//! Derived board classification, computed once per board state

use serde::{Deserialize, Serialize};

use super::{BoardSize, Cell, Coord, Player, WinLine, WinType, lines::LineAnalyzer};

/// Classification flags for a board state.
///
/// `win_line` and `winner` come from the first completed line in scan order
/// (rows, columns, NW-SE, SW-NE). `win_positions` holds the cells of every
/// completed line, so a move finishing two lines at once reports both.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoardFlags {
    /// No moves have been made yet
    pub empty: bool,
    /// All positions filled
    pub full: bool,
    /// Board full without a winner
    pub stalemate: bool,
    pub winner: Option<Player>,
    pub win_line: Option<WinLine>,
    /// Deduplicated cells of all completed lines, in scan order
    pub win_positions: Vec<Coord>,
}

impl BoardFlags {
    pub(crate) fn compute(cells: &[Cell], size: BoardSize) -> Self {
        let marks = cells.iter().filter(|c| **c != Cell::Empty).count();
        let mut flags = BoardFlags {
            empty: marks == 0,
            full: marks == size.cell_count(),
            ..Default::default()
        };

        if marks >= size.min_marks_for_win() {
            for (line, owner) in LineAnalyzer::completed_lines(cells, size) {
                if flags.winner.is_none() {
                    flags.winner = Some(owner);
                    flags.win_line = Some(line);
                }
                for coord in line.coords(size) {
                    if !flags.win_positions.contains(&coord) {
                        flags.win_positions.push(coord);
                    }
                }
            }
        }

        flags.stalemate = flags.full && flags.winner.is_none();
        flags
    }

    pub fn win_type(&self) -> Option<WinType> {
        self.win_line.map(WinLine::win_type)
    }

    /// True when `coord` belongs to a completed line
    pub fn is_win_position(&self, coord: Coord) -> bool {
        self.win_positions.contains(&coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Diagonal;

    fn cells_from(rows: &str) -> Vec<Cell> {
        rows.chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                'X' => Cell::X,
                'O' => Cell::O,
                _ => Cell::Empty,
            })
            .collect()
    }

    #[test]
    fn empty_board_flags() {
        let size = BoardSize::new(3).unwrap();
        let flags = BoardFlags::compute(&[Cell::Empty; 9], size);
        assert!(flags.empty);
        assert!(!flags.full);
        assert!(!flags.stalemate);
        assert_eq!(flags.winner, None);
        assert!(flags.win_positions.is_empty());
    }

    #[test]
    fn below_threshold_skips_win_scan() {
        // Not reachable in play, but shows the mark-count gate.
        let size = BoardSize::new(3).unwrap();
        let flags = BoardFlags::compute(&cells_from("XXX ... ..."), size);
        assert_eq!(flags.winner, None);
    }

    #[test]
    fn double_diagonal_reports_first_line_and_all_cells() {
        let size = BoardSize::new(3).unwrap();
        let flags = BoardFlags::compute(&cells_from("XOX OXO XOX"), size);
        assert_eq!(flags.winner, Some(Player::X));
        assert_eq!(flags.win_line, Some(WinLine::Diagonal(Diagonal::NwSe)));
        assert_eq!(flags.win_type(), Some(WinType::Diagonal));
        assert_eq!(flags.win_positions.len(), 5);
        assert!(flags.is_win_position(Coord::new(2, 0)));
        assert!(flags.is_win_position(Coord::new(1, 1)));
        assert!(!flags.stalemate);
        assert!(flags.full);
    }

    #[test]
    fn row_and_column_sharing_a_corner() {
        let size = BoardSize::new(3).unwrap();
        let flags = BoardFlags::compute(&cells_from("XXX XOO XO."), size);
        assert_eq!(flags.win_line, Some(WinLine::Row(0)));
        assert_eq!(flags.win_positions.len(), 5);
    }

    #[test]
    fn full_board_without_line_is_stalemate() {
        let size = BoardSize::new(3).unwrap();
        let flags = BoardFlags::compute(&cells_from("OXX XXO OOX"), size);
        assert!(flags.full);
        assert!(flags.stalemate);
        assert_eq!(flags.winner, None);
    }
}
