//! Common types for Tic-Tac-Shift: board coordinates and board errors.

/// A 0-indexed (x, y) position on the full board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Coordinate { x, y }
    }
}

impl core::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Errors returned by direct board access.
///
/// Validated callers (the turn controller and evaluator) never produce these;
/// hitting one indicates a caller contract violation rather than a state the
/// game can reach through legal play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside [0, BOARD_SIZE) on either axis.
    OutOfBounds { x: i32, y: i32 },
    /// Attempted to place a mark on a cell that already holds one.
    CellOccupied { x: i32, y: i32 },
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds { x, y } => {
                write!(f, "OutOfBounds: x={}, y={}", x, y)
            }
            BoardError::CellOccupied { x, y } => {
                write!(f, "CellOccupied: x={}, y={}", x, y)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
