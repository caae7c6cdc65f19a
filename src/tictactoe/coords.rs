//! Board dimensions and move-index coordinates
//!
//! Move indices are the external position encoding: 1-based and row-major,
//! so on a 3x3 board:
//!
//! ```text
//! 1 2 3
//! 4 5 6
//! 7 8 9
//! ```
//!
//! Coordinates are zero-based `(x, y)` with `(0, 0)` in the top-left corner.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Side length of a square board, restricted to 3, 4 or 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct BoardSize(usize);

impl BoardSize {
    pub const MIN: usize = 3;
    pub const MAX: usize = 5;

    /// Validate a side length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] unless `size` is 3, 4 or 5.
    pub fn new(size: usize) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&size) {
            Ok(Self(size))
        } else {
            Err(Error::InvalidSize { size })
        }
    }

    /// Side length of the board
    pub fn get(self) -> usize {
        self.0
    }

    /// Total number of cells (`size²`)
    pub fn cell_count(self) -> usize {
        self.0 * self.0
    }

    /// Fewest marks on the board before any line can be complete.
    ///
    /// The first player needs `size` marks, and by then the second player
    /// has made `size - 1` moves.
    pub fn min_marks_for_win(self) -> usize {
        self.0 * 2 - 1
    }

    /// All move indices in ascending order
    pub fn positions(self) -> impl Iterator<Item = usize> {
        1..=self.cell_count()
    }

    /// Check that a move index lies on the board.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PositionOutOfRange`] for indices outside `[1, size²]`.
    pub fn check_position(self, position: usize) -> Result<()> {
        if (1..=self.cell_count()).contains(&position) {
            Ok(())
        } else {
            Err(Error::PositionOutOfRange {
                position,
                max: self.cell_count(),
            })
        }
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = Error;

    fn try_from(size: usize) -> std::result::Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0}", self.0)
    }
}

/// Zero-based cell coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Convert a 1-based move index into a coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PositionOutOfRange`] for indices outside `[1, size²]`.
    pub fn from_position(position: usize, size: BoardSize) -> Result<Self> {
        size.check_position(position)?;
        let n = size.get();
        Ok(Self {
            x: (position - 1) % n,
            y: (position - 1) / n,
        })
    }

    /// Convert back to a 1-based move index
    pub fn to_position(self, size: BoardSize) -> usize {
        self.y * size.get() + self.x + 1
    }

    /// Offset into a row-major cell vector
    pub(crate) fn index(self, size: BoardSize) -> usize {
        self.y * size.get() + self.x
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
