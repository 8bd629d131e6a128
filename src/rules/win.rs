//! Win condition checking for Tic-Tac-Toe
//!
//! Outcomes:
//! 1. Three in a line (row, column or diagonal) wins for that mark
//! 2. A full board with no completed line is a tie

use crate::board::{Board, Mark, Pos};

/// The 8 ways to win: 3 rows, 3 columns, 2 diagonals (cell indices)
const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2], // Top row
    [3, 4, 5], // Middle row
    [6, 7, 8], // Bottom row
    [0, 3, 6], // Left column
    [1, 4, 7], // Middle column
    [2, 5, 8], // Right column
    [0, 4, 8], // Main diagonal
    [2, 4, 6], // Anti-diagonal
];

/// Final outcome of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The given mark completed a line
    Win(Mark),
    /// Full board, no completed line
    Tie,
}

/// Check for a round outcome.
///
/// Returns `Some(Outcome::Win(mark))` if any of the 8 lines is fully
/// occupied by `mark`, `Some(Outcome::Tie)` if the board is full with no
/// such line, and `None` while the game is still in progress.
pub fn winner(board: &Board) -> Option<Outcome> {
    for line in &WIN_LINES {
        let first = board.get(Pos::from_index(line[0]));
        if first != Mark::Empty
            && board.get(Pos::from_index(line[1])) == first
            && board.get(Pos::from_index(line[2])) == first
        {
            return Some(Outcome::Win(first));
        }
    }

    if board.is_full() {
        return Some(Outcome::Tie);
    }

    None
}

/// Find the completed line if one exists (for GUI highlighting)
pub fn winning_line(board: &Board) -> Option<[Pos; 3]> {
    for line in &WIN_LINES {
        let first = board.get(Pos::from_index(line[0]));
        if first != Mark::Empty
            && board.get(Pos::from_index(line[1])) == first
            && board.get(Pos::from_index(line[2])) == first
        {
            return Some([
                Pos::from_index(line[0]),
                Pos::from_index(line[1]),
                Pos::from_index(line[2]),
            ]);
        }
    }
    None
}

/// True iff the round has concluded (win or tie)
#[inline]
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a board directly from 9 marks (row-major)
    fn board_from_marks(marks: [Mark; 9]) -> Board {
        let mut board = Board::new();
        for (idx, &mark) in marks.iter().enumerate() {
            if mark != Mark::Empty {
                board = board.with_move(Pos::from_index(idx), mark).unwrap();
            }
        }
        board
    }

    const E: Mark = Mark::Empty;
    const X: Mark = Mark::X;
    const O: Mark = Mark::O;

    #[test]
    fn test_row_win() {
        let board = board_from_marks([X, X, X, O, O, E, E, E, E]);
        assert_eq!(winner(&board), Some(Outcome::Win(X)));
        assert!(is_terminal(&board));
    }

    #[test]
    fn test_all_rows_win() {
        for row in 0..3 {
            let mut marks = [E; 9];
            for col in 0..3 {
                marks[row * 3 + col] = O;
            }
            let board = board_from_marks(marks);
            assert_eq!(winner(&board), Some(Outcome::Win(O)), "row {}", row);
        }
    }

    #[test]
    fn test_all_columns_win() {
        for col in 0..3 {
            let mut marks = [E; 9];
            for row in 0..3 {
                marks[row * 3 + col] = X;
            }
            let board = board_from_marks(marks);
            assert_eq!(winner(&board), Some(Outcome::Win(X)), "column {}", col);
        }
    }

    #[test]
    fn test_main_diagonal_win() {
        let board = board_from_marks([X, O, E, O, X, E, E, E, X]);
        assert_eq!(winner(&board), Some(Outcome::Win(X)));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = board_from_marks([X, X, O, E, O, X, O, E, E]);
        assert_eq!(winner(&board), Some(Outcome::Win(O)));
    }

    #[test]
    fn test_tie_on_full_board() {
        // X O X
        // X O O
        // O X X
        let board = board_from_marks([X, O, X, X, O, O, O, X, X]);
        assert_eq!(winner(&board), Some(Outcome::Tie));
        assert!(is_terminal(&board));
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_in_progress_has_no_winner() {
        let board = board_from_marks([X, O, E, E, X, E, E, E, E]);
        assert_eq!(winner(&board), None);
        assert!(!is_terminal(&board));
    }

    #[test]
    fn test_empty_board_not_terminal() {
        let board = Board::new();
        assert_eq!(winner(&board), None);
        assert!(!is_terminal(&board));
    }

    #[test]
    fn test_winning_line_positions() {
        let board = board_from_marks([X, X, X, O, O, E, E, E, E]);
        let line = winning_line(&board).unwrap();
        assert_eq!(
            line,
            [Pos::from_index(0), Pos::from_index(1), Pos::from_index(2)]
        );
    }

    #[test]
    fn test_win_on_last_cell_is_win_not_tie() {
        // X O X
        // X O O
        // X X O  -- left column is three X
        let board = board_from_marks([X, O, X, X, O, O, X, X, O]);
        assert_eq!(winner(&board), Some(Outcome::Win(X)));
    }
}
