use super::{Cell, GameBoard, Move, Side, SIZE};
use crate::error::BoardError;
use std::fmt;
use std::str::FromStr;

const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
    black_count: u32,
    white_count: u32,
}

impl Default for Board {
    fn default() -> Self { Self::new() }
}

impl Board {
    /// Standard opening: d4/e5 White, e4/d5 Black.
    pub fn new() -> Self {
        let mut cells = [[Cell::Empty; SIZE]; SIZE];
        cells[3][3] = Cell::White;
        cells[3][4] = Cell::Black;
        cells[4][3] = Cell::Black;
        cells[4][4] = Cell::White;
        Self { cells, black_count: 2, white_count: 2 }
    }

    pub fn empty() -> Self {
        Self { cells: [[Cell::Empty; SIZE]; SIZE], black_count: 0, white_count: 0 }
    }

    /// Place a cell without flipping anything. Used to set up positions.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
        self.recount();
    }

    pub fn is_legal(&self, side: Side, row: usize, col: usize) -> bool {
        if row >= SIZE || col >= SIZE || !self.cells[row][col].is_empty() { return false; }
        DIRECTIONS.iter().any(|&(dr, dc)| self.flips_in_direction(side, row, col, dr, dc) > 0)
    }

    /// Validating variant of `GameBoard::play`. Returns the number of flipped discs.
    pub fn try_play(&mut self, side: Side, mv: Move) -> Result<u32, BoardError> {
        if !self.is_legal(side, mv.row as usize, mv.col as usize) {
            return Err(BoardError::IllegalMove { side, mv });
        }
        Ok(self.place(side, mv))
    }

    pub fn has_moves(&self, side: Side) -> bool {
        (0..SIZE).any(|row| (0..SIZE).any(|col| self.is_legal(side, row, col)))
    }

    pub fn is_game_over(&self) -> bool {
        !self.has_moves(Side::Black) && !self.has_moves(Side::White)
    }

    // Number of opponent discs bracketed in direction (dr, dc); 0 if the run is not closed.
    fn flips_in_direction(&self, side: Side, row: usize, col: usize, dr: i8, dc: i8) -> u32 {
        let mine = side.to_cell();
        let theirs = side.other().to_cell();
        let mut r = row as i8 + dr;
        let mut c = col as i8 + dc;
        let mut run = 0;
        while (0..SIZE as i8).contains(&r) && (0..SIZE as i8).contains(&c) {
            let cell = self.cells[r as usize][c as usize];
            if cell == theirs {
                run += 1;
            } else if cell == mine {
                return run;
            } else {
                return 0;
            }
            r += dr;
            c += dc;
        }
        0
    }

    fn place(&mut self, side: Side, mv: Move) -> u32 {
        let (row, col) = (mv.row as usize, mv.col as usize);
        let mine = side.to_cell();
        let mut flipped = 0;
        for &(dr, dc) in &DIRECTIONS {
            let n = self.flips_in_direction(side, row, col, dr, dc);
            let (mut r, mut c) = (row as i8, col as i8);
            for _ in 0..n {
                r += dr;
                c += dc;
                self.cells[r as usize][c as usize] = mine;
            }
            flipped += n;
        }
        self.cells[row][col] = mine;
        let (own, opp) = match side {
            Side::Black => (&mut self.black_count, &mut self.white_count),
            Side::White => (&mut self.white_count, &mut self.black_count),
        };
        *own += flipped + 1;
        *opp -= flipped;
        flipped
    }

    fn recount(&mut self) {
        let mut black = 0;
        let mut white = 0;
        for cell in self.cells.iter().flatten() {
            match cell {
                Cell::Black => black += 1,
                Cell::White => white += 1,
                Cell::Empty => {}
            }
        }
        self.black_count = black;
        self.white_count = white;
    }
}

impl GameBoard for Board {
    fn cell(&self, row: usize, col: usize) -> Cell { self.cells[row][col] }

    fn legal_moves(&self, side: Side) -> Vec<Move> {
        let mut moves = Vec::with_capacity(16);
        for row in 0..SIZE {
            for col in 0..SIZE {
                if self.is_legal(side, row, col) { moves.push(Move::new(row as u8, col as u8)); }
            }
        }
        moves
    }

    fn play(&mut self, side: Side, mv: Move) {
        debug_assert!(self.is_legal(side, mv.row as usize, mv.col as usize), "illegal move {mv} for {side}");
        self.place(side, mv);
    }

    fn count(&self, side: Side) -> u32 {
        match side {
            Side::Black => self.black_count,
            Side::White => self.white_count,
        }
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Reads 64 cells in row-major order: `X`/`B` black, `O`/`W` white,
    /// `.`/`-` empty. Whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::empty();
        let mut idx = 0usize;
        for ch in s.chars().filter(|c| !c.is_whitespace()) {
            let cell = match ch {
                'X' | 'x' | 'B' | 'b' => Cell::Black,
                'O' | 'o' | 'W' | 'w' => Cell::White,
                '.' | '-' => Cell::Empty,
                other => return Err(BoardError::UnknownGlyph(other)),
            };
            if idx >= SIZE * SIZE { return Err(BoardError::CellCount(idx + 1)); }
            board.cells[idx / SIZE][idx % SIZE] = cell;
            idx += 1;
        }
        if idx != SIZE * SIZE { return Err(BoardError::CellCount(idx)); }
        board.recount();
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "{}", r + 1)?;
            for cell in row {
                let glyph = match cell { Cell::Black => 'X', Cell::White => 'O', Cell::Empty => '.' };
                write!(f, " {glyph}")?;
            }
            writeln!(f)?;
        }
        write!(f, "X: {}  O: {}", self.black_count, self.white_count)
    }
}
