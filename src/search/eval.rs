use crate::board::{Cell, GameBoard, Side, SIZE};
use serde::{Deserialize, Serialize};

// Hand-tuned per-square weights: corners and edges up, X/C squares down.
pub const SQUARE_WEIGHTS: [[i32; SIZE]; SIZE] = [
    [20, -4, 11, 8, 8, 11, -4, 20],
    [-4, -7, -4, 1, 1, -4, -7, -4],
    [11, -4, 2, 2, 2, 2, -4, 11],
    [8, 1, 2, -3, -3, 2, 1, 8],
    [8, 1, 2, -3, -3, 2, 1, 8],
    [11, -4, 2, 2, 2, 2, -4, 11],
    [-4, -7, -4, 1, 1, -4, -7, -4],
    [20, -4, 11, 8, 8, 11, -4, 20],
];

// Compass offsets, paired by index. Row offset first, column offset second.
const ROW_BIAS: [i8; 8] = [-1, -1, 0, 1, 1, 1, 0, -1];
const COL_BIAS: [i8; 8] = [0, 1, 1, 1, 0, -1, -1, -1];

// Each corner with its two edge neighbours and its diagonal neighbour.
const CORNERS: [((usize, usize), [(usize, usize); 3]); 4] = [
    ((0, 0), [(0, 1), (1, 1), (1, 0)]),
    ((0, 7), [(0, 6), (1, 6), (1, 7)]),
    ((7, 7), [(6, 7), (6, 6), (7, 6)]),
    ((7, 0), [(7, 1), (6, 1), (6, 0)]),
];

pub const CORNER_SCALE: f64 = 25.0;
pub const CORNER_ADJACENT_SCALE: f64 = -12.5;

/// Multipliers applied to each sub-heuristic when combining the final score.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    pub piece_count: f64,
    pub corner: f64,
    pub corner_adjacent: f64,
    pub mobility: f64,
    pub frontier: f64,
    pub positional: f64,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            piece_count: 10.0,
            corner: 801.724,
            corner_adjacent: 382.026,
            mobility: 78.922,
            frontier: 74.396,
            positional: 10.0,
        }
    }
}

/// The six sub-heuristics before weighting, all from one side's perspective.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EvalTerms {
    pub piece_count: f64,
    pub corner: f64,
    pub corner_adjacent: f64,
    pub mobility: f64,
    pub frontier: f64,
    pub positional: f64,
}

impl EvalTerms {
    pub fn score(&self, w: &EvalWeights) -> f64 {
        w.piece_count * self.piece_count
            + w.corner * self.corner
            + w.corner_adjacent * self.corner_adjacent
            + w.mobility * self.mobility
            + w.frontier * self.frontier
            + w.positional * self.positional
    }
}

/// Maps a 0..=100 share onto a signed scale: shares of 50 or less become negative.
pub fn normalize(x: f64) -> f64 {
    if x <= 50.0 { x - 100.0 } else { x }
}

/// Integer percentage of `own` in `own + opp`, truncated toward zero.
/// `None` when both are zero.
pub fn percentage(own: u32, opp: u32) -> Option<f64> {
    let total = own + opp;
    if total == 0 { return None; }
    Some(f64::from(100 * own / total))
}

fn signed(cell: Cell, side: Side) -> f64 {
    match cell.owner() {
        Some(s) if s == side => 1.0,
        Some(_) => -1.0,
        None => 0.0,
    }
}

fn has_empty_neighbour<B: GameBoard>(board: &B, row: usize, col: usize) -> bool {
    ROW_BIAS.iter().zip(COL_BIAS.iter()).any(|(&dr, &dc)| {
        let r = row as i32 + dr as i32;
        let c = col as i32 + dc as i32;
        (0..SIZE as i32).contains(&r) && (0..SIZE as i32).contains(&c)
            && board.cell(r as usize, c as usize).is_empty()
    })
}

pub fn eval_terms<B: GameBoard>(board: &B, side: Side) -> EvalTerms {
    let opp = side.other();
    let mut positional = 0i32;
    let mut own_frontier = 0u32;
    let mut opp_frontier = 0u32;

    for row in 0..SIZE {
        for col in 0..SIZE {
            let Some(owner) = board.cell(row, col).owner() else { continue };
            let mine = owner == side;
            if mine { positional += SQUARE_WEIGHTS[row][col]; } else { positional -= SQUARE_WEIGHTS[row][col]; }
            if has_empty_neighbour(board, row, col) {
                if mine { own_frontier += 1; } else { opp_frontier += 1; }
            }
        }
    }

    let frontier = if own_frontier + opp_frontier > 0 {
        let raw = -(100.0 * f64::from(own_frontier)) / f64::from(own_frontier + opp_frontier);
        if raw > -50.0 { 100.0 + raw } else { raw }
    } else {
        0.0
    };

    let piece_count = percentage(board.count(side), board.count(opp)).map_or(0.0, normalize);

    let own_moves = board.legal_moves(side).len() as u32;
    let opp_moves = board.legal_moves(opp).len() as u32;
    let mobility = percentage(own_moves, opp_moves).map_or(0.0, normalize);

    let mut corner = 0.0;
    let mut corner_adjacent = 0.0;
    for ((cr, cc), adjacent) in CORNERS {
        let cell = board.cell(cr, cc);
        if cell.is_empty() {
            corner_adjacent += adjacent.iter().map(|&(r, c)| signed(board.cell(r, c), side)).sum::<f64>();
        } else {
            corner += signed(cell, side);
        }
    }

    EvalTerms {
        piece_count,
        corner: corner * CORNER_SCALE,
        corner_adjacent: corner_adjacent * CORNER_ADJACENT_SCALE,
        mobility,
        frontier,
        positional: f64::from(positional),
    }
}

/// Static evaluator. Pure: the same board and side always give the same score,
/// higher is better for `side`.
#[derive(Clone, Debug, Default)]
pub struct Evaluator {
    weights: EvalWeights,
}

impl Evaluator {
    pub fn new(weights: EvalWeights) -> Self { Self { weights } }

    pub fn weights(&self) -> &EvalWeights { &self.weights }

    pub fn evaluate<B: GameBoard>(&self, board: &B, side: Side) -> f64 {
        eval_terms(board, side).score(&self.weights)
    }
}
