use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("Cell index {index} is outside the 3x3 board")]
    OutOfRange { index: usize },
    #[error("Cannot place a mark on a cell that is already occupied")]
    CellOccupied { pos: crate::board::Pos },
}
