//! Viewport geometry: the movable 3×3 window, shift legality, and the strip
//! of cells a shift newly exposes.

use crate::common::Coordinate;
use crate::config::{BOARD_SIZE, VIEW_SIZE, VISIBLE_SIZE};

/// A single-step shift of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit delta applied to the viewport origin. Y grows downward.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Top-left origin of the 3×3 viewport. Invariant:
/// 0 ≤ x, y ≤ BOARD_SIZE − VIEW_SIZE.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
}

impl Viewport {
    /// Viewport centered on the board, where every game starts.
    pub fn centered() -> Self {
        let start = (BOARD_SIZE - VIEW_SIZE) / 2;
        Viewport { x: start, y: start }
    }

    fn origin_in_range(x: i32, y: i32) -> bool {
        (0..=BOARD_SIZE - VIEW_SIZE).contains(&x) && (0..=BOARD_SIZE - VIEW_SIZE).contains(&y)
    }

    /// Origin after a one-step shift, or `None` when the shift would push the
    /// window past the board edge. Edge shifts are rejected, not clamped.
    pub fn shifted(self, dir: Direction) -> Option<Viewport> {
        let (dx, dy) = dir.delta();
        let (nx, ny) = (self.x + dx, self.y + dy);
        if Self::origin_in_range(nx, ny) {
            Some(Viewport { x: nx, y: ny })
        } else {
            None
        }
    }

    /// The VIEW_SIZE cells along the edge of `new` that did not overlap with
    /// `self` before the shift. Empty when the origin is unchanged.
    pub fn revealed_strip(self, new: Viewport) -> Strip {
        let cells = if new.x > self.x {
            let col = new.x + VIEW_SIZE - 1;
            core::array::from_fn(|dy| Coordinate::new(col, new.y + dy as i32))
        } else if new.x < self.x {
            core::array::from_fn(|dy| Coordinate::new(new.x, new.y + dy as i32))
        } else if new.y > self.y {
            let row = new.y + VIEW_SIZE - 1;
            core::array::from_fn(|dx| Coordinate::new(new.x + dx as i32, row))
        } else if new.y < self.y {
            core::array::from_fn(|dx| Coordinate::new(new.x + dx as i32, new.y))
        } else {
            return Strip::empty();
        };
        Strip { cells: Some(cells) }
    }

    /// True when (x, y) lies inside the 3×3 window.
    pub fn contains(self, cell: Coordinate) -> bool {
        (self.x..self.x + VIEW_SIZE).contains(&cell.x)
            && (self.y..self.y + VIEW_SIZE).contains(&cell.y)
    }

    /// Top-left of the 5×5 displayed window:
    /// `clamp(viewport_origin - 1, 0, BOARD_SIZE - VISIBLE_SIZE)` per axis.
    /// The click-to-cell mapping in any front end must use this exact clamp.
    pub fn visible_origin(self) -> (i32, i32) {
        let max = BOARD_SIZE - VISIBLE_SIZE;
        ((self.x - 1).clamp(0, max), (self.y - 1).clamp(0, max))
    }
}

/// The cells newly exposed by the most recent shift: exactly VIEW_SIZE
/// coordinates along one edge of the new viewport, or empty after any
/// placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Strip {
    cells: Option<[Coordinate; VIEW_SIZE as usize]>,
}

impl Strip {
    pub fn empty() -> Self {
        Strip { cells: None }
    }

    /// Slice of strip cells; empty when no shift has occurred since the last
    /// placement.
    pub fn cells(&self) -> &[Coordinate] {
        match &self.cells {
            Some(cells) => cells,
            None => &[],
        }
    }

    pub fn contains(&self, cell: Coordinate) -> bool {
        self.cells().iter().any(|&c| c == cell)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_none()
    }
}
