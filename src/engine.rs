use crate::board::{GameBoard, Move, Side};
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::search::alphabeta::{SearchParams, SearchResult, Searcher};
use crate::search::clock::{Clock, WallClock};
use crate::search::eval::Evaluator;
use log::info;

/// A player bound to one side for its whole lifetime.
pub struct Engine<C: Clock = WallClock> {
    side: Side,
    params: SearchParams,
    evaluator: Evaluator,
    clock: C,
}

impl Engine<WallClock> {
    pub fn new(side: Side) -> Self { Self::with_config(side, &EngineConfig::default()) }

    pub fn with_config(side: Side, config: &EngineConfig) -> Self {
        Self {
            side,
            params: config.search_params(),
            evaluator: Evaluator::new(config.weights),
            clock: WallClock::default(),
        }
    }
}

impl<C: Clock> Engine<C> {
    /// Replace the time source, e.g. with a `ManualClock` in tests.
    pub fn with_clock<D: Clock>(self, clock: D) -> Engine<D> {
        Engine { side: self.side, params: self.params, evaluator: self.evaluator, clock }
    }

    pub fn with_params(mut self, params: SearchParams) -> Self {
        self.params = params;
        self
    }

    pub fn side(&self) -> Side { self.side }

    pub fn params(&self) -> &SearchParams { &self.params }

    pub fn evaluator(&self) -> &Evaluator { &self.evaluator }

    /// Full root search. The deadline starts when this is called.
    pub fn search<B: GameBoard>(&self, board: &B) -> SearchResult {
        let mut searcher = Searcher::new(self.side, &self.evaluator, &self.clock, self.params);
        searcher.search_root(board)
    }

    /// Choose a move for this engine's side. Ties go to the move the board
    /// enumerates first.
    pub fn play<B: GameBoard>(&self, board: &B) -> Result<Move, EngineError> {
        let result = self.search(board);
        let mv = result.best_move.ok_or(EngineError::NoLegalMoves { side: self.side })?;
        info!(
            "{} plays {} (score {:.3}, {} nodes, {:?}{})",
            self.side, mv, result.score, result.nodes, result.elapsed,
            if result.cut_off { ", cut off" } else { "" }
        );
        Ok(mv)
    }
}

/// Host-facing factory: an engine for `side` with the default settings.
pub fn create_bot(side: Side) -> Engine {
    Engine::new(side)
}
