//! Heuristic move selection for the computer opponent.
//!
//! One ply only: every legal action (placing in the current strip, or
//! shifting the viewport) is scored, the candidates from both classes are
//! pooled into a single comparison, and the winner is drawn uniformly at
//! random from the actions tied at the maximum score. The weights are policy
//! constants; their relative magnitudes fix the dominance behavior (a win
//! always beats a block, a block always beats positional play) and must not
//! be rescaled.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::board::Board;
use crate::common::Coordinate;
use crate::config::{BOARD_SIZE, CPU_MARK, PLAYER_MARK};
use crate::viewport::{Direction, Strip, Viewport};
use crate::win::{check_winner, line_score, winning_cells_for};
use rand::Rng;

/// Score for a placement that wins the game outright.
pub const WIN_SCORE: f64 = 1_000_000.0;
/// Bonus for occupying a cell the player could win with next turn.
pub const BLOCK_SCORE: f64 = 200_000.0;
/// Weight on the computer's own line score after the trial placement.
pub const OWN_LINE_WEIGHT: f64 = 8.0;
/// Weight on the player's line score through the same cell.
pub const OPPONENT_LINE_WEIGHT: f64 = 3.0;
/// Weight on the center bias, for placements and shifts alike.
pub const CENTER_WEIGHT: f64 = 5.0;

/// One concrete action available to the computer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CpuAction {
    /// Place the computer's mark on an empty strip cell.
    Place(Coordinate),
    /// Shift the viewport one step.
    Shift(Direction),
}

/// An action together with its heuristic score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredAction {
    pub action: CpuAction,
    pub score: f64,
}

/// Negative distance from (x, y) to the board's geometric center; a mild
/// preference for central cells and central viewports.
pub fn center_bias(x: i32, y: i32) -> f64 {
    let center = (BOARD_SIZE - 1) as f64 / 2.0;
    -libm::hypot(x as f64 - center, y as f64 - center)
}

/// Score every legal action from this position: one candidate per empty
/// strip cell and one per legal shift direction. An absent or fully occupied
/// strip contributes no placement candidates; at least two shift directions
/// are always legal, so the result is never empty in reachable states.
pub fn candidate_actions(board: &Board, viewport: Viewport, strip: &Strip) -> Vec<ScoredAction> {
    let mut candidates = Vec::new();

    let empties: Vec<Coordinate> = strip
        .cells()
        .iter()
        .copied()
        .filter(|&c| board.is_empty_cell(c))
        .collect();
    if !empties.is_empty() {
        let player_wins = winning_cells_for(board, PLAYER_MARK);
        for cell in empties {
            let mut probe = *board;
            if probe.set(cell.x, cell.y, CPU_MARK).is_err() {
                continue;
            }
            let score = if check_winner(&probe) == Some(CPU_MARK) {
                WIN_SCORE
            } else {
                let mut score = 0.0;
                if player_wins.contains(cell) {
                    score += BLOCK_SCORE;
                }
                score += OWN_LINE_WEIGHT * line_score(&probe, cell.x, cell.y, CPU_MARK) as f64;
                score +=
                    OPPONENT_LINE_WEIGHT * line_score(&probe, cell.x, cell.y, PLAYER_MARK) as f64;
                score += CENTER_WEIGHT * center_bias(cell.x, cell.y);
                score
            };
            candidates.push(ScoredAction {
                action: CpuAction::Place(cell),
                score,
            });
        }
    }

    for dir in Direction::ALL {
        if let Some(new) = viewport.shifted(dir) {
            // Shift scoring ignores board content; it is a pure positional
            // preference for central viewports, anchored at the window center.
            let score = CENTER_WEIGHT * center_bias(new.x + 1, new.y + 1);
            candidates.push(ScoredAction {
                action: CpuAction::Shift(dir),
                score,
            });
        }
    }

    candidates
}

/// The subset of `candidates` tied at the maximum score, in candidate order.
pub fn best_actions(candidates: &[ScoredAction]) -> Vec<ScoredAction> {
    let best = match candidates
        .iter()
        .map(|c| c.score)
        .max_by(|a, b| a.total_cmp(b))
    {
        Some(best) => best,
        None => return Vec::new(),
    };
    candidates.iter().copied().filter(|c| c.score == best).collect()
}

/// Pick the computer's action: uniform draw over the top-scored candidates.
/// Returns `None` only when no action is legal, which no reachable game state
/// produces.
pub fn choose_action<R: Rng + ?Sized>(
    board: &Board,
    viewport: Viewport,
    strip: &Strip,
    rng: &mut R,
) -> Option<CpuAction> {
    let candidates = candidate_actions(board, viewport, strip);
    let best = best_actions(&candidates);
    if best.is_empty() {
        return None;
    }
    let pick = rng.random_range(0..best.len());
    Some(best[pick].action)
}
