//! Othello move selection: a fixed-depth, time-bounded alpha-beta search over
//! a six-term static evaluator.
//!
//! ```
//! use othbot::board::{Board, GameBoard, Side};
//! use othbot::engine::Engine;
//! use othbot::search::alphabeta::SearchParams;
//!
//! let board = Board::new();
//! let engine = Engine::new(Side::Black).with_params(SearchParams::unlimited(2));
//! let mv = engine.play(&board).unwrap();
//! assert!(board.legal_moves(Side::Black).contains(&mv));
//! ```
pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod perft;
pub mod search;
pub mod selfplay;
