//! Search module for the Tic-Tac-Toe engine
//!
//! Contains the minimax search with alpha-beta pruning. The 3x3 game tree
//! is small enough to search exhaustively, so the result is the exact
//! game-theoretic value of the position.

pub mod minimax;

pub use minimax::{best_move, SearchResult};
