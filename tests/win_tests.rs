use tictacshift::{check_winner, line_score, winning_cells_for, Board, Coordinate, Mark};

fn board_with(marks: &[(i32, i32, Mark)]) -> Board {
    let mut board = Board::new();
    for &(x, y, mark) in marks {
        board.set(x, y, mark).unwrap();
    }
    board
}

#[test]
fn test_empty_board_has_no_winner() {
    assert_eq!(check_winner(&Board::new()), None);
}

#[test]
fn test_horizontal_win() {
    let board = board_with(&[(5, 5, Mark::X), (6, 5, Mark::X), (7, 5, Mark::X)]);
    assert_eq!(check_winner(&board), Some(Mark::X));
}

#[test]
fn test_vertical_win() {
    let board = board_with(&[(2, 2, Mark::O), (2, 3, Mark::O), (2, 4, Mark::O)]);
    assert_eq!(check_winner(&board), Some(Mark::O));
}

#[test]
fn test_diagonal_win() {
    let board = board_with(&[(1, 1, Mark::X), (2, 2, Mark::X), (3, 3, Mark::X)]);
    assert_eq!(check_winner(&board), Some(Mark::X));
}

#[test]
fn test_anti_diagonal_win() {
    let board = board_with(&[(3, 5, Mark::O), (4, 4, Mark::O), (5, 3, Mark::O)]);
    assert_eq!(check_winner(&board), Some(Mark::O));
}

#[test]
fn test_two_in_a_row_is_not_a_win() {
    let board = board_with(&[(5, 5, Mark::X), (6, 5, Mark::X)]);
    assert_eq!(check_winner(&board), None);
}

#[test]
fn test_broken_run_is_not_a_win() {
    let board = board_with(&[
        (5, 5, Mark::X),
        (6, 5, Mark::O),
        (7, 5, Mark::X),
        (8, 5, Mark::X),
    ]);
    assert_eq!(check_winner(&board), None);
}

#[test]
fn test_longer_run_still_wins() {
    let board = board_with(&[
        (5, 5, Mark::X),
        (6, 5, Mark::X),
        (7, 5, Mark::X),
        (8, 5, Mark::X),
    ]);
    assert_eq!(check_winner(&board), Some(Mark::X));
}

#[test]
fn test_winning_cells_at_run_ends() {
    let board = board_with(&[(5, 5, Mark::X), (6, 5, Mark::X)]);
    let wins = winning_cells_for(&board, Mark::X);
    assert!(wins.contains(Coordinate::new(4, 5)));
    assert!(wins.contains(Coordinate::new(7, 5)));
    assert_eq!(wins.len(), 2);
}

#[test]
fn test_winning_cell_in_gap() {
    let board = board_with(&[(5, 5, Mark::O), (7, 5, Mark::O)]);
    let wins = winning_cells_for(&board, Mark::O);
    assert!(wins.contains(Coordinate::new(6, 5)));
    assert_eq!(wins.len(), 1);
}

#[test]
fn test_winning_cells_respect_mark() {
    let board = board_with(&[(5, 5, Mark::X), (6, 5, Mark::X)]);
    assert!(winning_cells_for(&board, Mark::O).is_empty());
}

#[test]
fn test_winning_cells_do_not_mutate_board() {
    let board = board_with(&[(5, 5, Mark::X), (6, 5, Mark::X), (9, 9, Mark::O)]);
    let snapshot = board;
    let _ = winning_cells_for(&board, Mark::X);
    let _ = winning_cells_for(&board, Mark::O);
    assert_eq!(board, snapshot);
}

#[test]
fn test_line_score_lone_mark() {
    let board = board_with(&[(9, 9, Mark::X)]);
    // a run of 1 in each of the four directions
    assert_eq!(line_score(&board, 9, 9, Mark::X), 4);
}

#[test]
fn test_line_score_extends_run() {
    let board = board_with(&[(5, 5, Mark::X), (6, 5, Mark::X)]);
    // 2^2 horizontally plus 1 in each remaining direction
    assert_eq!(line_score(&board, 5, 5, Mark::X), 7);
}

#[test]
fn test_line_score_counts_cell_itself_for_either_mark() {
    // (5, 5) is empty; both neighbors on the row are X
    let board = board_with(&[(4, 5, Mark::X), (6, 5, Mark::X)]);
    // 3^2 horizontally plus 1 in each remaining direction
    assert_eq!(line_score(&board, 5, 5, Mark::X), 12);
}

#[test]
fn test_line_score_stops_at_board_edge() {
    let board = board_with(&[(0, 0, Mark::O), (1, 0, Mark::O)]);
    // horizontal run of 2, vertical 1, diagonal 1, anti-diagonal 1
    assert_eq!(line_score(&board, 0, 0, Mark::O), 7);
}
