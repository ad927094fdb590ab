//! Turn controller: owns the aggregate game state and drives the
//! player/computer alternation.
//!
//! Every accepted player action runs the computer's reply inline before
//! returning, so callers always see the game back in an interactive state
//! (or over). Illegal actions are rejected with `false` and leave the state
//! untouched.

use crate::ai::{choose_action, CpuAction};
use crate::board::{Board, Mark};
use crate::common::Coordinate;
use crate::config::{CPU_MARK, PLAYER_MARK};
use crate::viewport::{Direction, Strip, Viewport};
use crate::win::check_winner;
use rand::Rng;

/// Whose action the game is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Turn {
    Player,
    Cpu,
}

/// Coarse game status derived from the terminal flag and winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    PlayerWon,
    CpuWon,
}

/// A single game: board, viewport, strip, mover, and terminal state.
/// Construct a fresh one to restart; a finished game never mutates again.
pub struct Game {
    board: Board,
    viewport: Viewport,
    strip: Strip,
    current: Turn,
    over: bool,
    winner: Option<Mark>,
    message: &'static str,
}

impl Game {
    /// Start a new game: empty board, centered viewport, empty strip, player
    /// to move.
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            viewport: Viewport::centered(),
            strip: Strip::empty(),
            current: Turn::Player,
            over: false,
            winner: None,
            message: "",
        }
    }

    /// Build a game from an arbitrary (non-terminal) position. Intended for
    /// tests and tooling that need to start mid-game.
    pub fn from_parts(board: Board, viewport: Viewport, strip: Strip, current: Turn) -> Self {
        Game {
            board,
            viewport,
            strip,
            current,
            over: false,
            winner: None,
            message: "",
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn strip(&self) -> &Strip {
        &self.strip
    }

    pub fn current(&self) -> Turn {
        self.current
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(m) if m == PLAYER_MARK => GameStatus::PlayerWon,
            Some(_) => GameStatus::CpuWon,
            None => GameStatus::InProgress,
        }
    }

    /// Shift the viewport on the player's behalf. Returns `false` (state
    /// unchanged) when the game is over, it is not the player's turn, or the
    /// shift would leave the board. On success the revealed strip replaces
    /// the previous one and the computer replies before this returns.
    pub fn player_shift<R: Rng + ?Sized>(&mut self, dir: Direction, rng: &mut R) -> bool {
        if self.over || self.current != Turn::Player {
            log::debug!("shift {:?} rejected: not accepting player actions", dir);
            return false;
        }
        let new = match self.viewport.shifted(dir) {
            Some(v) => v,
            None => {
                log::debug!("shift {:?} rejected: viewport at board edge", dir);
                return false;
            }
        };
        self.strip = self.viewport.revealed_strip(new);
        self.viewport = new;
        self.current = Turn::Cpu;
        self.cpu_take_turn(rng);
        true
    }

    /// Place the player's mark in the current strip. Returns `false` (state
    /// unchanged) when the game is over, it is not the player's turn, the
    /// strip is empty, the target is outside the strip, or the cell is
    /// occupied. A winning placement ends the game; otherwise the strip is
    /// cleared and the computer replies before this returns.
    pub fn player_place<R: Rng + ?Sized>(&mut self, cell: Coordinate, rng: &mut R) -> bool {
        if self.over || self.current != Turn::Player {
            log::debug!("placement at {} rejected: not accepting player actions", cell);
            return false;
        }
        if !self.strip.contains(cell) {
            log::debug!("placement at {} rejected: outside current strip", cell);
            return false;
        }
        if self.board.set(cell.x, cell.y, PLAYER_MARK).is_err() {
            log::debug!("placement at {} rejected: cell occupied", cell);
            return false;
        }
        if self.finish_if_won() {
            return true;
        }
        self.strip = Strip::empty();
        self.current = Turn::Cpu;
        self.cpu_take_turn(rng);
        true
    }

    /// Let the evaluator pick and apply the computer's action, then hand
    /// control back to the player unless the game just ended.
    fn cpu_take_turn<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let action = match choose_action(&self.board, self.viewport, &self.strip, rng) {
            Some(action) => action,
            None => {
                self.current = Turn::Player;
                return;
            }
        };
        log::debug!("cpu action: {:?}", action);
        match action {
            CpuAction::Place(cell) => {
                // Candidates only ever name empty in-bounds strip cells.
                if self.board.set(cell.x, cell.y, CPU_MARK).is_ok() {
                    if self.finish_if_won() {
                        return;
                    }
                    self.strip = Strip::empty();
                }
            }
            CpuAction::Shift(dir) => {
                if let Some(new) = self.viewport.shifted(dir) {
                    self.strip = self.viewport.revealed_strip(new);
                    self.viewport = new;
                }
            }
        }
        self.current = Turn::Player;
    }

    /// Check for a completed line and latch the terminal state if found.
    fn finish_if_won(&mut self) -> bool {
        if let Some(winner) = check_winner(&self.board) {
            self.over = true;
            self.winner = Some(winner);
            self.message = if winner == PLAYER_MARK {
                "You win!"
            } else {
                "CPU wins!"
            };
            log::debug!("game over: {}", self.message);
            true
        } else {
            false
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
