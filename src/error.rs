use crate::board::{Move, Side};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// `play` was called for a side with no legal move; the caller should pass instead.
    #[error("no legal moves for {side}")]
    NoLegalMoves { side: Side },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("illegal move {mv} for {side}")]
    IllegalMove { side: Side, mv: Move },
    #[error("expected 64 cells, found {0}")]
    CellCount(usize),
    #[error("unknown cell glyph {0:?}")]
    UnknownGlyph(char),
    #[error("bad coordinate {0:?}")]
    BadCoordinate(String),
    #[error("unknown side {0:?}")]
    UnknownSide(String),
}
