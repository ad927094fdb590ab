use crate::board::Mark;

/// Side length of the full board.
pub const BOARD_SIZE: i32 = 20;
/// Side length of the movable viewport window.
pub const VIEW_SIZE: i32 = 3;
/// Side length of the displayed window surrounding the viewport.
pub const VISIBLE_SIZE: i32 = 5;

/// The human always plays X, the computer always plays O.
pub const PLAYER_MARK: Mark = Mark::X;
pub const CPU_MARK: Mark = Mark::O;
