use crate::types::{CellCount, Coord};
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("board needs at least 2 rows and 2 columns, got {rows}x{cols}")]
    InvalidDimensions { rows: Coord, cols: Coord },
    #[error("cannot place {mines} mines on a board with only {cells} cells")]
    TooManyMines { mines: CellCount, cells: CellCount },
    #[error("coordinates outside the board")]
    InvalidCoords,
}

pub type Result<T> = core::result::Result<T, GameError>;
