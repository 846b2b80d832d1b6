use crate::board::{GameBoard, Move, Side};
use crate::search::clock::Clock;
use crate::search::eval::Evaluator;
use log::{debug, warn};
use std::time::Duration;

pub const DEFAULT_DEPTH: u32 = 5;
pub const DEFAULT_MOVETIME: Duration = Duration::from_millis(1980);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchParams {
    /// Plies searched below each root move.
    pub depth: u32,
    /// Soft budget measured from the start of the root search. `None` disables it.
    pub movetime: Option<Duration>,
    /// Deterministic alternative to `movetime`: stop expanding after this many nodes.
    pub max_nodes: Option<u64>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self { depth: DEFAULT_DEPTH, movetime: Some(DEFAULT_MOVETIME), max_nodes: None }
    }
}

impl SearchParams {
    /// Fixed depth, no time or node budget.
    pub fn unlimited(depth: u32) -> Self {
        Self { depth, movetime: None, max_nodes: None }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: f64,
    pub nodes: u64,
    pub elapsed: Duration,
    /// True when the time or node budget returned a bound instead of a searched value.
    pub cut_off: bool,
}

/// One position in the search tree.
///
/// `owner` is the side whose move produced `board`; the side to move here is
/// `owner.other()`. Nodes owned by the searching side are minimizing layers,
/// the others are maximizing layers.
#[derive(Debug, Clone)]
pub struct Node<B> {
    pub board: B,
    pub owner: Side,
    pub depth: u32,
    pub alpha: f64,
    pub beta: f64,
}

impl<B> Node<B> {
    /// Full window node reached after `owner` played into `board`.
    pub fn new(board: B, owner: Side, depth: u32) -> Self {
        Self { board, owner, depth, alpha: f64::NEG_INFINITY, beta: f64::INFINITY }
    }
}

pub struct Searcher<'a, C: Clock> {
    own: Side,
    evaluator: &'a Evaluator,
    clock: C,
    start: Duration,
    params: SearchParams,
    nodes: u64,
    cut_off: bool,
}

impl<'a, C: Clock> Searcher<'a, C> {
    /// Starts the deadline: the budget is measured from this call.
    pub fn new(own: Side, evaluator: &'a Evaluator, clock: C, params: SearchParams) -> Self {
        let start = clock.now();
        Self { own, evaluator, clock, start, params, nodes: 0, cut_off: false }
    }

    pub fn nodes(&self) -> u64 { self.nodes }

    pub fn cut_off(&self) -> bool { self.cut_off }

    pub fn elapsed(&self) -> Duration { self.clock.now().saturating_sub(self.start) }

    fn out_of_budget(&self) -> bool {
        if let Some(limit) = self.params.max_nodes { if self.nodes >= limit { return true; } }
        if let Some(movetime) = self.params.movetime { if self.elapsed() >= movetime { return true; } }
        false
    }

    /// Fail-hard alpha-beta. Leaves are always scored from the searching side's
    /// perspective. When the budget is spent the node returns its own bound
    /// (`alpha` on minimizing layers, `beta` on maximizing ones) without expanding.
    pub fn search<B: GameBoard>(&mut self, node: Node<B>) -> f64 {
        let Node { board, owner, depth, mut alpha, mut beta } = node;
        let minimizing = owner == self.own;

        if self.out_of_budget() {
            self.cut_off = true;
            return if minimizing { alpha } else { beta };
        }
        self.nodes += 1;

        if depth == 0 { return self.evaluator.evaluate(&board, self.own); }
        let mover = owner.other();
        let moves = board.legal_moves(mover);
        if moves.is_empty() { return self.evaluator.evaluate(&board, self.own); }

        for mv in moves {
            let mut child = board.clone();
            child.play(mover, mv);
            let score = self.search(Node { board: child, owner: mover, depth: depth - 1, alpha, beta });
            if minimizing {
                beta = beta.min(score);
                if alpha >= beta { return alpha; }
            } else {
                alpha = alpha.max(score);
                if alpha >= beta { return beta; }
            }
        }
        if minimizing { beta } else { alpha }
    }

    /// Scores every legal root move with a full window and keeps the first
    /// strictly best one. `best_move` is `None` when the side has no move.
    pub fn search_root<B: GameBoard>(&mut self, board: &B) -> SearchResult {
        let mut best_move = None;
        let mut best_score = f64::NEG_INFINITY;
        for mv in board.legal_moves(self.own) {
            let mut child = board.clone();
            child.play(self.own, mv);
            let score = self.search(Node::new(child, self.own, self.params.depth));
            debug!("root {mv}: {score:.3}");
            if best_move.is_none() || score > best_score {
                best_move = Some(mv);
                best_score = score;
            }
        }
        if self.cut_off {
            warn!("search budget exhausted after {} nodes in {:?}", self.nodes, self.elapsed());
        }
        SearchResult {
            best_move,
            score: best_score,
            nodes: self.nodes,
            elapsed: self.elapsed(),
            cut_off: self.cut_off,
        }
    }
}
