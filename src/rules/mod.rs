//! Game rules (win and terminal detection)

pub mod win;

// Re-exports
pub use win::{is_terminal, winner, winning_line, Outcome};
