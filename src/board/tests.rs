use super::*;

#[test]
fn test_mark_opponent() {
    assert_eq!(Mark::X.opponent(), Mark::O);
    assert_eq!(Mark::O.opponent(), Mark::X);
    assert_eq!(Mark::Empty.opponent(), Mark::Empty);
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(1, 2);
    assert_eq!(pos.row, 1);
    assert_eq!(pos.col, 2);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(1, 1); // Center
    assert_eq!(pos.to_index(), 4);

    let pos2 = Pos::from_index(4);
    assert_eq!(pos2.row, 1);
    assert_eq!(pos2.col, 1);

    assert_eq!(Pos::new(2, 2).to_index(), 8);
    assert_eq!(Pos::from_index(8), Pos::new(2, 2));
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(2, 2));
    assert!(Pos::is_valid(1, 1));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(3, 0));
    assert!(!Pos::is_valid(0, 3));
}

#[test]
fn test_board_constants() {
    assert_eq!(GRID_SIZE, 3);
    assert_eq!(TOTAL_CELLS, 9);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_place_and_remove() {
    let mut board = Board::new();
    let pos = Pos::new(1, 1);

    assert!(board.is_empty(pos));
    board.place_mark(pos, Mark::X);
    assert_eq!(board.get(pos), Mark::X);
    assert!(!board.is_empty(pos));

    board.remove_mark(pos);
    assert!(board.is_empty(pos));
    assert_eq!(board, Board::new());
}

#[test]
fn test_empty_cells_row_major() {
    let board = Board::new();
    let cells = board.empty_cells();
    assert_eq!(cells.len(), 9);
    assert_eq!(cells[0], Pos::new(0, 0));
    assert_eq!(cells[1], Pos::new(0, 1));
    assert_eq!(cells[8], Pos::new(2, 2));

    // Must stay sorted in index order
    for pair in cells.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn test_empty_cells_skips_occupied() {
    let mut board = Board::new();
    board.place_mark(Pos::new(0, 0), Mark::X);
    board.place_mark(Pos::new(1, 1), Mark::O);

    let cells = board.empty_cells();
    assert_eq!(cells.len(), 7);
    assert_eq!(cells[0], Pos::new(0, 1));
    assert!(!cells.contains(&Pos::new(0, 0)));
    assert!(!cells.contains(&Pos::new(1, 1)));
}

#[test]
fn test_board_full() {
    let mut board = Board::new();
    assert!(!board.is_full());
    assert!(board.is_board_empty());

    for idx in 0..TOTAL_CELLS {
        let mark = if idx % 2 == 0 { Mark::X } else { Mark::O };
        board.place_mark(Pos::from_index(idx), mark);
    }

    assert!(board.is_full());
    assert_eq!(board.mark_count(), 9);
    assert!(board.empty_cells().is_empty());
}
