//! Minimax search with alpha-beta pruning
//!
//! X maximizes and O minimizes. Values are exact game-theoretic outcomes:
//! +1 for an eventual X win, -1 for an eventual O win, 0 for a tie under
//! optimal play by both sides. Pruning skips subtrees that provably cannot
//! affect the final decision, so it never changes the returned value versus
//! exhaustive search.
//!
//! The search is a pure function of the input board: each recursive call
//! operates on its own derived board value, so there is no make/unmake
//! state and no shared mutation.
//!
//! # Example
//!
//! ```
//! use tictactoe::board::Board;
//! use tictactoe::search::best_move;
//!
//! let board = Board::new();
//! let result = best_move(&board);
//! // Perfect play from the empty board is a tie
//! assert_eq!(result.value, 0);
//! assert!(result.best_move.is_some());
//! ```

use crate::board::{Board, Mark, Pos, TOTAL_CELLS};
use crate::rules::{is_terminal, winner, Outcome};

/// Infinity for alpha-beta bounds; utilities are confined to -1..=1
const INF: i32 = 2;

/// Fixed move ordering: center, corners, then edges.
///
/// Strong moves tend to come first, which makes alpha-beta cutoffs fire
/// earlier. Ordering never changes the backed-up value, only which move is
/// reported when several tie (the first in this order wins ties).
const MOVE_ORDER: [usize; TOTAL_CELLS] = [4, 0, 2, 6, 8, 1, 3, 5, 7];

/// Search result: the chosen move and its exact value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found; `None` only when the input board is terminal
    pub best_move: Option<Pos>,
    /// Game-theoretic value: +1 X wins, -1 O wins, 0 tie
    pub value: i32,
    /// Positions visited, for diagnostics
    pub nodes: u64,
}

/// Static utility of a board: +1 if X has won, -1 if O has won, 0 otherwise
fn utility(board: &Board) -> i32 {
    match winner(board) {
        Some(Outcome::Win(Mark::X)) => 1,
        Some(Outcome::Win(Mark::O)) => -1,
        _ => 0,
    }
}

/// Find the optimal move for the side to move.
///
/// On a terminal board this is the recursive base case, not an error: the
/// result carries no move and the static utility of the position.
pub fn best_move(board: &Board) -> SearchResult {
    let mut nodes = 0;
    let (mov, value) = minimax(board, -INF, INF, &mut nodes);
    SearchResult {
        best_move: mov,
        value,
        nodes,
    }
}

/// Recursive minimax over derived board values, threading alpha/beta.
///
/// `alpha` is the best value the maximizer can already guarantee, `beta`
/// the best the minimizer can. Once `beta <= alpha` the remaining siblings
/// cannot influence the result and are skipped.
fn minimax(board: &Board, mut alpha: i32, mut beta: i32, nodes: &mut u64) -> (Option<Pos>, i32) {
    *nodes += 1;

    if is_terminal(board) {
        return (None, utility(board));
    }

    let turn = board.to_move();
    let is_max = turn == Mark::X;

    let mut best_move = None;
    let mut best_value = if is_max { -INF } else { INF };

    for idx in MOVE_ORDER {
        let pos = Pos::from_index(idx);
        if !board.is_empty(pos) {
            continue;
        }

        // Derived successor; cannot fail on an in-range empty cell
        let next = match board.with_move(pos, turn) {
            Ok(next) => next,
            Err(_) => continue,
        };
        let (_, value) = minimax(&next, alpha, beta, nodes);

        if is_max {
            // Strict improvement only: ties keep the earlier-ordered move
            if value > best_value {
                best_value = value;
                best_move = Some(pos);
            }
            alpha = alpha.max(best_value);
        } else {
            if value < best_value {
                best_value = value;
                best_move = Some(pos);
            }
            beta = beta.min(best_value);
        }

        if beta <= alpha {
            break;
        }
    }

    (best_move, best_value)
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Mark = Mark::Empty;
    const X: Mark = Mark::X;
    const O: Mark = Mark::O;

    fn board_from_marks(marks: [Mark; 9]) -> Board {
        let mut board = Board::new();
        for (idx, &mark) in marks.iter().enumerate() {
            if mark != Mark::Empty {
                board = board.with_move(Pos::from_index(idx), mark).unwrap();
            }
        }
        board
    }

    /// Plain minimax without pruning, for cross-checking values
    fn exhaustive_value(board: &Board) -> i32 {
        if is_terminal(board) {
            return utility(board);
        }
        let turn = board.to_move();
        let values = board
            .legal_moves()
            .into_iter()
            .map(|pos| exhaustive_value(&board.with_move(pos, turn).unwrap()));
        if turn == Mark::X {
            values.max().unwrap()
        } else {
            values.min().unwrap()
        }
    }

    #[test]
    fn test_empty_board_is_a_tie_and_opens_center() {
        let result = best_move(&Board::new());
        assert_eq!(result.value, 0);
        // All opening moves tie; the fixed order reports the center first
        assert_eq!(result.best_move, Some(Pos::from_index(4)));
    }

    #[test]
    fn test_terminal_board_returns_no_move() {
        let won = board_from_marks([X, X, X, O, O, E, E, E, E]);
        let result = best_move(&won);
        assert_eq!(result.best_move, None);
        assert_eq!(result.value, 1);

        let tie = board_from_marks([X, O, X, X, O, O, O, X, X]);
        let result = best_move(&tie);
        assert_eq!(result.best_move, None);
        assert_eq!(result.value, 0);
    }

    #[test]
    fn test_x_takes_the_winning_cell() {
        // X X _      X to move: completing the top row wins
        // O O _
        // _ _ _
        let board = board_from_marks([X, X, E, O, O, E, E, E, E]);
        assert_eq!(board.to_move(), X);

        let result = best_move(&board);
        assert_eq!(result.best_move, Some(Pos::from_index(2)));
        assert_eq!(result.value, 1);
    }

    #[test]
    fn test_o_takes_the_winning_cell() {
        // O X X      O to move: completing the main diagonal wins
        // _ _ X
        // _ _ O
        let board = board_from_marks([O, X, X, E, E, X, E, E, O]);
        assert_eq!(board.to_move(), O);

        let result = best_move(&board);
        assert_eq!(result.best_move, Some(Pos::from_index(4)));
        assert_eq!(result.value, -1);
    }

    #[test]
    fn test_o_blocks_the_immediate_threat() {
        // X X _      O to move: must block at index 2
        // _ O _
        // _ _ _
        let board = board_from_marks([X, X, E, E, O, E, E, E, E]);
        assert_eq!(board.to_move(), O);

        let result = best_move(&board);
        assert_eq!(result.best_move, Some(Pos::from_index(2)));
        assert_eq!(result.value, 0);
    }

    #[test]
    fn test_x_blocks_when_it_cannot_win() {
        // O O _      X to move: no win available, block at index 2
        // _ X _
        // _ X _
        let board = board_from_marks([O, O, E, E, X, E, E, X, E]);
        assert_eq!(board.to_move(), X);

        let result = best_move(&board);
        assert_eq!(result.best_move, Some(Pos::from_index(2)));
        assert_eq!(result.value, 0);
    }

    #[test]
    fn test_move_is_always_legal() {
        // Spot-check a handful of mid-game positions
        let boards = [
            board_from_marks([X, E, E, E, O, E, E, E, E]),
            board_from_marks([X, O, X, E, O, E, E, E, E]),
            board_from_marks([E, E, X, E, O, E, O, E, X]),
        ];
        for board in boards {
            let result = best_move(&board);
            let mov = result.best_move.unwrap();
            assert!(board.legal_moves().contains(&mov));
        }
    }

    #[test]
    fn test_search_is_idempotent() {
        let board = board_from_marks([X, E, E, E, O, E, E, E, E]);
        let first = best_move(&board);
        let second = best_move(&board);
        assert_eq!(first, second);
    }

    #[test]
    fn test_pruning_preserves_exhaustive_value() {
        let boards = [
            Board::new(),
            board_from_marks([X, E, E, E, O, E, E, E, E]),
            board_from_marks([X, X, E, E, O, E, E, E, O]),
            board_from_marks([X, O, X, E, O, E, E, E, E]),
            board_from_marks([O, O, E, X, E, E, X, E, E]),
        ];
        for board in boards {
            assert_eq!(best_move(&board).value, exhaustive_value(&board));
        }
    }

    #[test]
    fn test_pruning_reduces_visited_nodes() {
        let result = best_move(&Board::new());
        // The full tree has ~550k paths; pruning must cut far below that
        assert!(result.nodes < 100_000, "visited {} nodes", result.nodes);
    }

    #[test]
    fn test_perfect_self_play_always_ties() {
        let mut board = Board::new();
        while !is_terminal(&board) {
            let result = best_move(&board);
            let mov = result.best_move.expect("non-terminal board has a move");
            board = board.with_move(mov, board.to_move()).unwrap();
        }
        assert_eq!(winner(&board), Some(Outcome::Tie));
    }

    #[test]
    fn test_double_corner_trap_is_defused_by_edge() {
        // X _ _      O to move against opposite corners: only an edge
        // _ O _      holds the draw; a corner reply loses to a fork
        // _ _ X
        let board = board_from_marks([X, E, E, E, O, E, E, E, X]);
        assert_eq!(board.to_move(), O);

        let result = best_move(&board);
        assert_eq!(result.value, 0);
        // Corner replies evaluate to +1, so the first drawing move in the
        // fixed order is the top edge
        assert_eq!(result.best_move, Some(Pos::from_index(1)));

        // And the corner reply indeed loses
        let corner = board.with_move(Pos::from_index(2), O).unwrap();
        assert_eq!(best_move(&corner).value, 1);
    }
}
