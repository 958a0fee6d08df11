//! Win condition checking for tic-tac-toe
//!
//! A player wins by occupying all three cells of any of the 8 lines:
//! 3 rows, 3 columns, 2 diagonals. Every check scans all 8 lines.

use crate::board::{Board, Mark, Pos};

/// The 8 winning lines as (row, col) cell triples: rows, columns, diagonals.
const WIN_LINES: [[(u8, u8); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Check if the given mark has three-in-a-row
pub fn has_three_in_row(board: &Board, mark: Mark) -> bool {
    find_winning_line(board, mark).is_some()
}

/// Find the winning line for a mark, if one exists.
///
/// Returns the three cells of the first completed line in `WIN_LINES`
/// order. Used by the GUI to highlight the winning cells.
pub fn find_winning_line(board: &Board, mark: Mark) -> Option<[Pos; 3]> {
    if mark == Mark::Empty {
        return None;
    }

    for line in &WIN_LINES {
        if line
            .iter()
            .all(|&(row, col)| board.get(Pos::new(row, col)) == mark)
        {
            let cells = line.map(|(row, col)| Pos::new(row, col));
            return Some(cells);
        }
    }
    None
}

/// Determine the winner, if any. X is checked first.
pub fn check_winner(board: &Board) -> Option<Mark> {
    if has_three_in_row(board, Mark::X) {
        Some(Mark::X)
    } else if has_three_in_row(board, Mark::O) {
        Some(Mark::O)
    } else {
        None
    }
}

/// True iff the board is full with no winner
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && check_winner(board).is_none()
}

/// Check if a mark may be placed at the position
#[inline]
pub fn is_valid_move(board: &Board, pos: Pos) -> bool {
    board.is_empty(pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_rows_detected() {
        for row in 0..3u8 {
            let mut board = Board::new();
            for col in 0..3u8 {
                board.place_mark(Pos::new(row, col), Mark::X);
            }
            assert!(has_three_in_row(&board, Mark::X), "row {} not detected", row);
            assert!(!has_three_in_row(&board, Mark::O));
            assert_eq!(check_winner(&board), Some(Mark::X));
        }
    }

    #[test]
    fn test_all_columns_detected() {
        for col in 0..3u8 {
            let mut board = Board::new();
            for row in 0..3u8 {
                board.place_mark(Pos::new(row, col), Mark::O);
            }
            assert!(has_three_in_row(&board, Mark::O), "column {} not detected", col);
            assert!(!has_three_in_row(&board, Mark::X));
            assert_eq!(check_winner(&board), Some(Mark::O));
        }
    }

    #[test]
    fn test_main_diagonal_detected() {
        let mut board = Board::new();
        for i in 0..3u8 {
            board.place_mark(Pos::new(i, i), Mark::X);
        }
        assert!(has_three_in_row(&board, Mark::X));
        assert_eq!(
            find_winning_line(&board, Mark::X),
            Some([Pos::new(0, 0), Pos::new(1, 1), Pos::new(2, 2)])
        );
    }

    #[test]
    fn test_anti_diagonal_detected() {
        let mut board = Board::new();
        for i in 0..3u8 {
            board.place_mark(Pos::new(i, 2 - i), Mark::O);
        }
        assert!(has_three_in_row(&board, Mark::O));
        assert_eq!(
            find_winning_line(&board, Mark::O),
            Some([Pos::new(0, 2), Pos::new(1, 1), Pos::new(2, 0)])
        );
    }

    #[test]
    fn test_no_false_positive() {
        let board = Board::new();
        assert!(!has_three_in_row(&board, Mark::X));
        assert!(!has_three_in_row(&board, Mark::O));
        assert_eq!(check_winner(&board), None);
        assert!(find_winning_line(&board, Mark::Empty).is_none());

        // Two-in-a-row with the third cell held by the opponent
        let mut board = Board::new();
        board.place_mark(Pos::new(0, 0), Mark::X);
        board.place_mark(Pos::new(0, 1), Mark::X);
        board.place_mark(Pos::new(0, 2), Mark::O);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_not_a_win() {
        // X on the diagonal corners, O in the center
        let mut board = Board::new();
        board.place_mark(Pos::new(0, 0), Mark::X);
        board.place_mark(Pos::new(2, 2), Mark::X);
        board.place_mark(Pos::new(1, 1), Mark::O);
        assert_eq!(check_winner(&board), None);
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_board() {
        // X O X
        // X O O
        // O X X
        let mut board = Board::new();
        let layout = [
            (Mark::X, 0, 0), (Mark::O, 0, 1), (Mark::X, 0, 2),
            (Mark::X, 1, 0), (Mark::O, 1, 1), (Mark::O, 1, 2),
            (Mark::O, 2, 0), (Mark::X, 2, 1), (Mark::X, 2, 2),
        ];
        for (mark, row, col) in layout {
            board.place_mark(Pos::new(row, col), mark);
        }
        assert_eq!(check_winner(&board), None);
        assert!(is_draw(&board));
    }

    #[test]
    fn test_valid_move() {
        let mut board = Board::new();
        assert!(is_valid_move(&board, Pos::new(1, 1)));
        board.place_mark(Pos::new(1, 1), Mark::X);
        assert!(!is_valid_move(&board, Pos::new(1, 1)));
    }
}
