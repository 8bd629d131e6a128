//! Board structure with value semantics
//!
//! `Board` is a `Copy` value over the 9 cells. Making a move produces a new
//! board rather than mutating in place, so the search can branch without any
//! make/unmake bookkeeping. Whose turn it is falls out of the mark counts
//! (X always moves first), so no separate turn field can drift out of sync
//! with the cells.

use super::{BoardError, Mark, Pos, BOARD_SIZE, TOTAL_CELLS};

/// Game board: 9 cells, row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; TOTAL_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; TOTAL_CELLS],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get mark at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Mark {
        self.cells[pos.to_index()]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Mark::Empty
    }

    /// Count cells holding the given mark
    #[inline]
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&c| c == mark).count()
    }

    /// Check if every cell is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Mark::Empty)
    }

    /// All empty cells, in index order. Empty iff the board is full.
    pub fn legal_moves(&self) -> Vec<Pos> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &c)| c == Mark::Empty)
            .map(|(i, _)| Pos::from_index(i))
            .collect()
    }

    /// The mark to move, derived from the cell counts.
    ///
    /// X always moves first, so X is to move exactly when the counts are
    /// equal.
    #[inline]
    pub fn to_move(&self) -> Mark {
        if self.count(Mark::X) == self.count(Mark::O) {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// Return a new board with `mark` placed at `pos`.
    ///
    /// The receiver is left untouched. Fails if `pos` lies outside the 3x3
    /// grid or the target cell is occupied.
    pub fn with_move(&self, pos: Pos, mark: Mark) -> Result<Board, BoardError> {
        if pos.row >= BOARD_SIZE as u8 || pos.col >= BOARD_SIZE as u8 {
            return Err(BoardError::OutOfRange {
                index: pos.to_index(),
            });
        }
        if !self.is_empty(pos) {
            return Err(BoardError::CellOccupied { pos });
        }

        let mut next = *self;
        next.cells[pos.to_index()] = mark;
        Ok(next)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                write!(f, "{}", self.get(Pos::new(row as u8, col as u8)))?;
                if col + 1 < BOARD_SIZE {
                    write!(f, "|")?;
                }
            }
            if row + 1 < BOARD_SIZE {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Play out a sequence of indices, alternating from X
    fn board_from_moves(moves: &[usize]) -> Board {
        let mut board = Board::new();
        for &idx in moves {
            let mark = board.to_move();
            board = board.with_move(Pos::from_index(idx), mark).unwrap();
        }
        board
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.legal_moves().len(), 9);
        assert_eq!(board.count(Mark::X), 0);
        assert_eq!(board.count(Mark::O), 0);
        assert!(!board.is_full());
    }

    #[test]
    fn test_x_moves_first() {
        let board = Board::new();
        assert_eq!(board.to_move(), Mark::X);
    }

    #[test]
    fn test_turn_alternates_with_counts() {
        let board = board_from_moves(&[0]);
        assert_eq!(board.to_move(), Mark::O);
        let board = board_from_moves(&[0, 4]);
        assert_eq!(board.to_move(), Mark::X);
        let board = board_from_moves(&[0, 4, 8]);
        assert_eq!(board.to_move(), Mark::O);
    }

    #[test]
    fn test_with_move_does_not_mutate_input() {
        let board = Board::new();
        let next = board.with_move(Pos::from_index(4), Mark::X).unwrap();
        assert!(board.is_empty(Pos::from_index(4)));
        assert_eq!(next.get(Pos::from_index(4)), Mark::X);
    }

    #[test]
    fn test_with_move_occupied_cell_fails() {
        let board = board_from_moves(&[4]);
        let err = board.with_move(Pos::from_index(4), Mark::O).unwrap_err();
        assert_eq!(
            err,
            BoardError::CellOccupied {
                pos: Pos::from_index(4)
            }
        );
        // Input unchanged
        assert_eq!(board.get(Pos::from_index(4)), Mark::X);
        assert_eq!(board.count(Mark::O), 0);
    }

    #[test]
    fn test_with_move_out_of_range_fails() {
        let board = Board::new();
        let err = board.with_move(Pos::from_index(9), Mark::X).unwrap_err();
        assert_eq!(err, BoardError::OutOfRange { index: 9 });
    }

    #[test]
    fn test_legal_moves_after_two_moves() {
        // X at 0, O at 4: X to move, 7 cells remain
        let board = board_from_moves(&[0, 4]);
        assert_eq!(board.to_move(), Mark::X);

        let legal = board.legal_moves();
        assert_eq!(legal.len(), 7);
        assert!(!legal.contains(&Pos::from_index(0)));
        assert!(!legal.contains(&Pos::from_index(4)));
    }

    #[test]
    fn test_full_board_has_no_legal_moves() {
        let board = board_from_moves(&[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(board.is_full());
        assert!(board.legal_moves().is_empty());
    }

    #[test]
    fn test_index_round_trip() {
        for idx in 0..9 {
            assert_eq!(Pos::from_index(idx).to_index(), idx);
        }
        assert_eq!(Pos::from_index(5), Pos::new(1, 2));
    }
}
