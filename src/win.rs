//! Win detection and line scanning over the four board directions.

use crate::board::{Board, Mark};
use crate::cellset::CellSet;
use crate::config::BOARD_SIZE;

/// Scan directions {→, ↓, ↘, ↗}. Scans are row-major then in this order so
/// results are deterministic.
pub const LINE_DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Length of a winning run.
pub const WIN_RUN: i32 = 3;

/// The first mark with a run of WIN_RUN consecutive same-mark cells along any
/// scan direction, if one exists. At most one mark can legitimately have just
/// won, so the scan order only matters for determinism.
pub fn check_winner(board: &Board) -> Option<Mark> {
    for y in 0..BOARD_SIZE {
        for x in 0..BOARD_SIZE {
            let mark = match board.at(x, y) {
                Some(m) => m,
                None => continue,
            };
            for (dx, dy) in LINE_DIRECTIONS {
                if (1..WIN_RUN).all(|i| board.at(x + i * dx, y + i * dy) == Some(mark)) {
                    return Some(mark);
                }
            }
        }
    }
    None
}

/// Every empty cell where placing `mark` would win immediately.
///
/// Each trial runs on a stack copy of the board, so the caller's board is
/// untouched and no trial leaks into the next.
pub fn winning_cells_for(board: &Board, mark: Mark) -> CellSet {
    let mut wins = CellSet::new();
    for y in 0..BOARD_SIZE {
        for x in 0..BOARD_SIZE {
            if board.at(x, y).is_some() {
                continue;
            }
            let mut probe = *board;
            if probe.set(x, y, mark).is_err() {
                continue;
            }
            if check_winner(&probe) == Some(mark) {
                wins.insert(x, y);
            }
        }
    }
    wins
}

/// Sum over the four directions of the squared length of the contiguous
/// `mark` run through (x, y), counting the cell itself in each direction.
/// Squaring rewards longer aligned runs superlinearly.
pub fn line_score(board: &Board, x: i32, y: i32, mark: Mark) -> i32 {
    let mut score = 0;
    for (dx, dy) in LINE_DIRECTIONS {
        let mut count = 1;
        for sign in [1, -1] {
            let mut step = 1;
            while board.at(x + dx * step * sign, y + dy * step * sign) == Some(mark) {
                count += 1;
                step += 1;
            }
        }
        score += count * count;
    }
    score
}
