//! Board collaborator: sides, cells, moves and the `GameBoard` interface the
//! search consumes. `othello::Board` is the concrete 8x8 implementation.

use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod othello;

pub use othello::Board;

pub const SIZE: usize = 8;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Black,
    White,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    pub fn to_cell(self) -> Cell {
        match self {
            Side::Black => Cell::Black,
            Side::White => Cell::White,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Black => f.write_str("black"),
            Side::White => f.write_str("white"),
        }
    }
}

impl FromStr for Side {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "b" | "black" | "x" => Ok(Side::Black),
            "w" | "white" | "o" => Ok(Side::White),
            _ => Err(BoardError::UnknownSide(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    pub fn owner(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Side::Black),
            Cell::White => Some(Side::White),
        }
    }

    pub fn is_empty(self) -> bool { self == Cell::Empty }
}

/// A disc placement. Rows and columns are zero-based; `d3` is row 2, col 3.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Move {
    pub row: u8,
    pub col: u8,
}

impl Move {
    pub fn new(row: u8, col: u8) -> Self { Self { row, col } }

    pub fn index(self) -> usize { self.row as usize * SIZE + self.col as usize }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}

impl FromStr for Move {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.trim().as_bytes();
        if bytes.len() != 2 { return Err(BoardError::BadCoordinate(s.to_string())); }
        let col = bytes[0].to_ascii_lowercase().wrapping_sub(b'a');
        let row = bytes[1].wrapping_sub(b'1');
        if (col as usize) < SIZE && (row as usize) < SIZE {
            Ok(Move::new(row, col))
        } else {
            Err(BoardError::BadCoordinate(s.to_string()))
        }
    }
}

/// The operations the search needs from a board. Implementations must keep
/// clones independent: playing on a clone never affects the original.
pub trait GameBoard: Clone {
    fn cell(&self, row: usize, col: usize) -> Cell;

    /// Legal moves for `side`, in a stable enumeration order.
    fn legal_moves(&self, side: Side) -> Vec<Move>;

    /// Apply `mv` for `side`. `mv` must come from `legal_moves(side)`.
    fn play(&mut self, side: Side, mv: Move);

    fn count(&self, side: Side) -> u32;
}
