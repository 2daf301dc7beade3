use thiserror::Error;

use crate::cell::Pos;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("cell {pos} is outside the {width}x{height} grid")]
    OutOfBounds {
        pos: Pos,
        width: usize,
        height: usize,
    },

    #[error("cells {a} and {b} are not adjacent")]
    NotAdjacent { a: Pos, b: Pos },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to set up logging: {0}")]
    Logging(String),
}
