//! Tic-Tac-Toe engine with an optimal-play computer opponent
//!
//! The computer plays perfectly via minimax with alpha-beta pruning: from
//! any position it achieves the game-theoretic outcome, so it never loses.
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation as an immutable 9-cell value
//! - [`rules`]: Win and terminal detection over the 8 fixed lines
//! - [`search`]: Minimax search with alpha-beta pruning and move ordering
//! - [`ui`]: Native GUI built on egui/eframe
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{best_move, Board, Mark, Pos};
//!
//! let board = Board::new();
//!
//! // X opens in the corner
//! let board = board.with_move(Pos::from_index(0), Mark::X).unwrap();
//!
//! // The engine answers for O
//! let result = best_move(&board);
//! if let Some(pos) = result.best_move {
//!     let board = board.with_move(pos, Mark::O).unwrap();
//!     println!("Computer plays at ({}, {})", pos.row, pos.col);
//!     assert_eq!(board.to_move(), Mark::X);
//! }
//! ```
//!
//! # Turn derivation
//!
//! Whose turn it is is never stored: X always moves first, so the side to
//! move is X exactly when both marks occur equally often on the board. The
//! turn therefore cannot desynchronize from the cells.

pub mod board;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, BoardError, Mark, Pos, BOARD_SIZE, TOTAL_CELLS};
pub use rules::{is_terminal, winner, Outcome};
pub use search::{best_move, SearchResult};
