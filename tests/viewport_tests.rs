use tictacshift::{Coordinate, Direction, Strip, Viewport, BOARD_SIZE, VIEW_SIZE};

const MAX_ORIGIN: i32 = BOARD_SIZE - VIEW_SIZE;

#[test]
fn test_centered_start() {
    assert_eq!(Viewport::centered(), Viewport { x: 8, y: 8 });
}

#[test]
fn test_shift_rejected_at_top_left() {
    let vp = Viewport { x: 0, y: 0 };
    assert_eq!(vp.shifted(Direction::Up), None);
    assert_eq!(vp.shifted(Direction::Left), None);
    assert_eq!(vp.shifted(Direction::Down), Some(Viewport { x: 0, y: 1 }));
    assert_eq!(vp.shifted(Direction::Right), Some(Viewport { x: 1, y: 0 }));
}

#[test]
fn test_shift_rejected_at_bottom_right() {
    let vp = Viewport {
        x: MAX_ORIGIN,
        y: MAX_ORIGIN,
    };
    assert_eq!(vp.shifted(Direction::Down), None);
    assert_eq!(vp.shifted(Direction::Right), None);
    assert!(vp.shifted(Direction::Up).is_some());
    assert!(vp.shifted(Direction::Left).is_some());
}

#[test]
fn test_shift_inverse_returns_to_origin() {
    let vp = Viewport::centered();
    let right = vp.shifted(Direction::Right).unwrap();
    assert_eq!(right.shifted(Direction::Left), Some(vp));
    let up = vp.shifted(Direction::Up).unwrap();
    assert_eq!(up.shifted(Direction::Down), Some(vp));
}

#[test]
fn test_revealed_strip_up_from_center() {
    // the scenario from a fresh game: shift up from (8, 8)
    let old = Viewport::centered();
    let new = old.shifted(Direction::Up).unwrap();
    assert_eq!(new, Viewport { x: 8, y: 7 });
    let strip = old.revealed_strip(new);
    assert_eq!(
        strip.cells(),
        &[
            Coordinate::new(8, 7),
            Coordinate::new(9, 7),
            Coordinate::new(10, 7)
        ]
    );
}

#[test]
fn test_revealed_strip_right_is_new_rightmost_column() {
    let old = Viewport { x: 8, y: 8 };
    let new = old.shifted(Direction::Right).unwrap();
    let strip = old.revealed_strip(new);
    assert_eq!(
        strip.cells(),
        &[
            Coordinate::new(11, 8),
            Coordinate::new(11, 9),
            Coordinate::new(11, 10)
        ]
    );
}

#[test]
fn test_revealed_strip_left_is_new_leftmost_column() {
    let old = Viewport { x: 8, y: 8 };
    let new = old.shifted(Direction::Left).unwrap();
    let strip = old.revealed_strip(new);
    assert_eq!(
        strip.cells(),
        &[
            Coordinate::new(7, 8),
            Coordinate::new(7, 9),
            Coordinate::new(7, 10)
        ]
    );
}

#[test]
fn test_revealed_strip_down_is_new_bottom_row() {
    let old = Viewport { x: 8, y: 8 };
    let new = old.shifted(Direction::Down).unwrap();
    let strip = old.revealed_strip(new);
    assert_eq!(
        strip.cells(),
        &[
            Coordinate::new(8, 11),
            Coordinate::new(9, 11),
            Coordinate::new(10, 11)
        ]
    );
}

#[test]
fn test_unmoved_viewport_reveals_nothing() {
    let vp = Viewport::centered();
    assert!(vp.revealed_strip(vp).is_empty());
}

#[test]
fn test_strip_outside_overlap() {
    let old = Viewport::centered();
    for dir in Direction::ALL {
        let new = old.shifted(dir).unwrap();
        let strip = old.revealed_strip(new);
        assert_eq!(strip.cells().len(), VIEW_SIZE as usize);
        for &cell in strip.cells() {
            assert!(new.contains(cell));
            assert!(!old.contains(cell));
        }
    }
}

#[test]
fn test_strip_contains() {
    let old = Viewport::centered();
    let new = old.shifted(Direction::Up).unwrap();
    let strip = old.revealed_strip(new);
    assert!(strip.contains(Coordinate::new(9, 7)));
    assert!(!strip.contains(Coordinate::new(9, 8)));
    assert!(!Strip::empty().contains(Coordinate::new(9, 7)));
}

#[test]
fn test_visible_origin_clamp() {
    assert_eq!(Viewport { x: 0, y: 0 }.visible_origin(), (0, 0));
    assert_eq!(Viewport { x: 1, y: 1 }.visible_origin(), (0, 0));
    assert_eq!(Viewport { x: 8, y: 8 }.visible_origin(), (7, 7));
    assert_eq!(
        Viewport {
            x: MAX_ORIGIN,
            y: MAX_ORIGIN
        }
        .visible_origin(),
        (15, 15)
    );
}
