//! Full 20×20 game board: a fixed grid of optional marks.

use crate::common::{BoardError, Coordinate};
use crate::config::BOARD_SIZE;

const N: usize = BOARD_SIZE as usize;

/// A player's symbol occupying a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The opposing mark.
    pub fn other(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// Fixed-size board. Cells start empty and transition to a mark at most once
/// per game; placement never overwrites.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Mark>; N]; N],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            cells: [[None; N]; N],
        }
    }

    /// Whether (x, y) lies within [0, BOARD_SIZE) on both axes.
    pub fn in_bounds(x: i32, y: i32) -> bool {
        (0..BOARD_SIZE).contains(&x) && (0..BOARD_SIZE).contains(&y)
    }

    /// Mark at (x, y), or an error if the coordinate is out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Result<Option<Mark>, BoardError> {
        if !Self::in_bounds(x, y) {
            return Err(BoardError::OutOfBounds { x, y });
        }
        Ok(self.cells[y as usize][x as usize])
    }

    /// Mark at (x, y), treating out-of-bounds as empty. Line scans use this
    /// so that runs terminate cleanly at the board edge.
    pub fn at(&self, x: i32, y: i32) -> Option<Mark> {
        if !Self::in_bounds(x, y) {
            return None;
        }
        self.cells[y as usize][x as usize]
    }

    /// Place `mark` on the empty cell at (x, y).
    pub fn set(&mut self, x: i32, y: i32, mark: Mark) -> Result<(), BoardError> {
        if !Self::in_bounds(x, y) {
            return Err(BoardError::OutOfBounds { x, y });
        }
        if self.cells[y as usize][x as usize].is_some() {
            return Err(BoardError::CellOccupied { x, y });
        }
        self.cells[y as usize][x as usize] = Some(mark);
        Ok(())
    }

    /// True when the cell exists and holds no mark.
    pub fn is_empty_cell(&self, cell: Coordinate) -> bool {
        Self::in_bounds(cell.x, cell.y) && self.at(cell.x, cell.y).is_none()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl core::fmt::Debug for Board {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Board {{")?;
        for row in self.cells.iter() {
            write!(f, "  ")?;
            for cell in row.iter() {
                let ch = match cell {
                    Some(m) => m.as_char(),
                    None => '.',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
