use othbot::board::{Board, GameBoard, Move, Side};
use othbot::engine::{create_bot, Engine};
use othbot::error::EngineError;
use othbot::search::alphabeta::{Node, SearchParams, Searcher};
use othbot::search::clock::{ManualClock, WallClock};
use othbot::search::eval::Evaluator;
use std::time::{Duration, Instant};

#[test]
fn opening_move_is_legal_and_deterministic() {
    let b = Board::new();
    let engine = Engine::new(Side::Black).with_params(SearchParams::unlimited(5));
    let first = engine.play(&b).unwrap();
    let second = engine.play(&b).unwrap();
    assert!(b.legal_moves(Side::Black).contains(&first));
    assert_eq!(first, second);
    assert_eq!(b, Board::new(), "play must not mutate the caller's board");
}

#[test]
fn equal_scores_keep_the_first_enumerated_move() {
    // The opening is symmetric: d3, c4, f5 and e6 lead to mirror-image trees.
    let b = Board::new();
    let eval = Evaluator::default();
    let moves = b.legal_moves(Side::Black);
    let scores: Vec<f64> = moves
        .iter()
        .map(|&m| {
            let mut child = b.clone();
            child.play(Side::Black, m);
            let mut s = Searcher::new(Side::Black, &eval, WallClock::default(), SearchParams::unlimited(3));
            s.search(Node::new(child, Side::Black, 3))
        })
        .collect();
    assert!(scores.windows(2).all(|w| w[0] == w[1]), "scores differ: {scores:?}");

    let engine = Engine::new(Side::Black).with_params(SearchParams::unlimited(3));
    assert_eq!(engine.play(&b).unwrap(), moves[0]);
    assert_eq!(moves[0], Move::new(2, 3));
}

#[test]
fn takes_an_available_corner() {
    // White can take a1 by bracketing b2 with c3
    let b: Board = "
        ........
        .X......
        ..O.....
        ...XX...
        ...XO...
        ........
        ........
        ........"
        .parse()
        .unwrap();
    let engine = Engine::new(Side::White).with_params(SearchParams::unlimited(1));
    assert_eq!(engine.play(&b).unwrap(), Move::new(0, 0));
}

#[test]
fn no_legal_moves_is_an_error() {
    let engine = create_bot(Side::White);
    assert_eq!(engine.play(&Board::empty()), Err(EngineError::NoLegalMoves { side: Side::White }));
    let full: Board = "X".repeat(64).parse().unwrap();
    assert_eq!(engine.play(&full), Err(EngineError::NoLegalMoves { side: Side::White }));
}

#[test]
fn zero_budget_still_returns_the_first_move() {
    let clock = ManualClock::new();
    let params = SearchParams { depth: 5, movetime: Some(Duration::ZERO), max_nodes: None };
    let engine = Engine::new(Side::Black).with_params(params).with_clock(&clock);
    let res = engine.search(&Board::new());
    assert!(res.cut_off);
    assert_eq!(res.nodes, 0);
    assert_eq!(res.best_move, Some(Move::new(2, 3)));
    assert_eq!(res.score, f64::NEG_INFINITY);
}

#[test]
fn default_budget_returns_in_time() {
    let mut b = Board::new();
    for (side, mv) in [(Side::Black, "d3"), (Side::White, "c3"), (Side::Black, "c4"), (Side::White, "e3")] {
        b.try_play(side, mv.parse().unwrap()).unwrap();
    }
    let engine = create_bot(Side::Black);
    let t0 = Instant::now();
    let mv = engine.play(&b).unwrap();
    assert!(t0.elapsed() < Duration::from_millis(2500), "took {:?}", t0.elapsed());
    assert!(b.legal_moves(Side::Black).contains(&mv));
}

#[test]
fn engine_keeps_its_side() {
    let engine = create_bot(Side::White);
    assert_eq!(engine.side(), Side::White);
    assert_eq!(*engine.params(), SearchParams::default());
    let mv = engine.with_params(SearchParams::unlimited(2)).play(&Board::new()).unwrap();
    assert!(Board::new().legal_moves(Side::White).contains(&mv));
}
