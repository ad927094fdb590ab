//! A compact set of board coordinates backed by one bitmask per row.
//!
//! Avoids heap allocation so the win-detector's immediate-win sets stay cheap
//! to build and copy.

use crate::common::Coordinate;
use crate::config::BOARD_SIZE;

const N: usize = BOARD_SIZE as usize;

/// Set of coordinates on the full board. Rows are u32 masks; BOARD_SIZE must
/// stay ≤ 32 for this representation.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct CellSet {
    rows: [u32; N],
}

impl CellSet {
    /// Create an empty set.
    pub fn new() -> Self {
        CellSet { rows: [0; N] }
    }

    fn index(x: i32, y: i32) -> Option<(usize, u32)> {
        if !(0..BOARD_SIZE).contains(&x) || !(0..BOARD_SIZE).contains(&y) {
            return None;
        }
        Some((y as usize, 1u32 << x))
    }

    /// Insert (x, y). Out-of-bounds coordinates are ignored; callers insert
    /// only cells they have already bounds-checked.
    pub fn insert(&mut self, x: i32, y: i32) {
        if let Some((row, bit)) = Self::index(x, y) {
            self.rows[row] |= bit;
        }
    }

    /// Membership test; out-of-bounds coordinates are never members.
    pub fn contains(&self, cell: Coordinate) -> bool {
        match Self::index(cell.x, cell.y) {
            Some((row, bit)) => self.rows[row] & bit != 0,
            None => false,
        }
    }

    /// Number of coordinates in the set.
    pub fn len(&self) -> usize {
        self.rows.iter().map(|r| r.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|&r| r == 0)
    }
}

impl core::fmt::Debug for CellSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "CellSet {{")?;
        let mut first = true;
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                if self.contains(Coordinate::new(x, y)) {
                    if !first {
                        write!(f, ", ")?;
                    }
                    write!(f, "({}, {})", x, y)?;
                    first = false;
                }
            }
        }
        write!(f, "}}")
    }
}
