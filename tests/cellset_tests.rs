use tictacshift::{CellSet, Coordinate, BOARD_SIZE};

#[test]
fn test_new_set_is_empty() {
    let set = CellSet::new();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
    assert!(!set.contains(Coordinate::new(0, 0)));
}

#[test]
fn test_insert_and_contains() {
    let mut set = CellSet::new();
    set.insert(3, 5);
    set.insert(0, 0);
    set.insert(BOARD_SIZE - 1, BOARD_SIZE - 1);
    assert!(set.contains(Coordinate::new(3, 5)));
    assert!(set.contains(Coordinate::new(0, 0)));
    assert!(set.contains(Coordinate::new(BOARD_SIZE - 1, BOARD_SIZE - 1)));
    assert!(!set.contains(Coordinate::new(5, 3)));
    assert_eq!(set.len(), 3);
}

#[test]
fn test_double_insert_counts_once() {
    let mut set = CellSet::new();
    set.insert(4, 4);
    set.insert(4, 4);
    assert_eq!(set.len(), 1);
}

#[test]
fn test_out_of_bounds_ignored() {
    let mut set = CellSet::new();
    set.insert(-1, 0);
    set.insert(0, BOARD_SIZE);
    assert!(set.is_empty());
    assert!(!set.contains(Coordinate::new(-1, 0)));
}
