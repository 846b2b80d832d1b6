use othbot::board::{Board, Cell, GameBoard, Move, Side};
use othbot::search::alphabeta::{Node, SearchParams, Searcher};
use othbot::search::clock::{ManualClock, WallClock};
use othbot::search::eval::Evaluator;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::cell::Cell as Counter;
use std::rc::Rc;
use std::time::Duration;

// Delegates to `Board` and counts move enumerations.
#[derive(Clone)]
struct CountingBoard {
    inner: Board,
    enumerations: Rc<Counter<usize>>,
}

impl GameBoard for CountingBoard {
    fn cell(&self, row: usize, col: usize) -> Cell { self.inner.cell(row, col) }
    fn legal_moves(&self, side: Side) -> Vec<Move> {
        self.enumerations.set(self.enumerations.get() + 1);
        self.inner.legal_moves(side)
    }
    fn play(&mut self, side: Side, mv: Move) { self.inner.play(side, mv) }
    fn count(&self, side: Side) -> u32 { self.inner.count(side) }
}

fn random_position(seed: u64, plies: usize) -> (Board, Side) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut b = Board::new();
    let mut side = Side::Black;
    for _ in 0..plies {
        let moves = b.legal_moves(side);
        if moves.is_empty() {
            if b.legal_moves(side.other()).is_empty() { break; }
        } else {
            b.play(side, moves[rng.gen_range(0..moves.len())]);
        }
        side = side.other();
    }
    // `side` is to move, so the other side produced this position
    (b, side.other())
}

// Unpruned reference with the same layer roles and leaf perspective.
fn minimax(eval: &Evaluator, own: Side, board: &Board, owner: Side, depth: u32) -> f64 {
    let mover = owner.other();
    let moves = board.legal_moves(mover);
    if depth == 0 || moves.is_empty() { return eval.evaluate(board, own); }
    let scores = moves.into_iter().map(|m| {
        let mut child = board.clone();
        child.play(mover, m);
        minimax(eval, own, &child, mover, depth - 1)
    });
    if owner == own { scores.fold(f64::INFINITY, f64::min) } else { scores.fold(f64::NEG_INFINITY, f64::max) }
}

#[test]
fn depth_zero_returns_static_eval_from_searching_side() {
    let eval = Evaluator::default();
    let (b, _) = random_position(7, 12);
    let expected = eval.evaluate(&b, Side::White);
    for owner in [Side::Black, Side::White] {
        for (alpha, beta) in [(f64::NEG_INFINITY, f64::INFINITY), (5.0, 6.0), (1e9, -1e9)] {
            let mut s = Searcher::new(Side::White, &eval, WallClock::default(), SearchParams::unlimited(0));
            let got = s.search(Node { board: b.clone(), owner, depth: 0, alpha, beta });
            assert_eq!(got, expected, "owner={owner} alpha={alpha} beta={beta}");
        }
    }
}

#[test]
fn expired_deadline_returns_bound_without_enumerating() {
    let eval = Evaluator::default();
    let clock = ManualClock::new();
    let params = SearchParams { depth: 5, movetime: Some(Duration::from_millis(10)), max_nodes: None };
    let mut s = Searcher::new(Side::Black, &eval, &clock, params);
    clock.advance(Duration::from_millis(11));

    let enumerations = Rc::new(Counter::new(0));
    let board = CountingBoard { inner: Board::new(), enumerations: enumerations.clone() };

    let own = s.search(Node { board: board.clone(), owner: Side::Black, depth: 5, alpha: -3.0, beta: 7.0 });
    let opp = s.search(Node { board, owner: Side::White, depth: 5, alpha: -3.0, beta: 7.0 });
    assert_eq!(own, -3.0);
    assert_eq!(opp, 7.0);
    assert_eq!(enumerations.get(), 0);
    assert_eq!(s.nodes(), 0);
    assert!(s.cut_off());
}

#[test]
fn deadline_is_measured_from_searcher_start() {
    let eval = Evaluator::default();
    let clock = ManualClock::new();
    clock.advance(Duration::from_secs(100));
    let params = SearchParams { depth: 2, movetime: Some(Duration::from_millis(10)), max_nodes: None };
    let mut s = Searcher::new(Side::Black, &eval, &clock, params);
    let v = s.search(Node::new(Board::new(), Side::Black, 2));
    assert!(!s.cut_off());
    assert!(v.is_finite());
}

#[test]
fn node_budget_cuts_like_the_deadline() {
    let eval = Evaluator::default();
    let params = SearchParams { depth: 4, movetime: None, max_nodes: Some(1) };
    let mut s = Searcher::new(Side::Black, &eval, WallClock::default(), params);
    // the root node is expanded, every child hits the budget and returns its beta (+inf)
    let v = s.search(Node::new(Board::new(), Side::Black, 4));
    assert_eq!(s.nodes(), 1);
    assert!(s.cut_off());
    assert_eq!(v, f64::INFINITY);
}

#[test]
fn pruning_matches_brute_force_minimax() {
    let eval = Evaluator::default();
    for seed in 0..12u64 {
        let plies = (seed as usize * 5) % 40;
        let (b, owner) = random_position(seed, plies);
        for own in [Side::Black, Side::White] {
            for depth in 1..=3 {
                let expected = minimax(&eval, own, &b, owner, depth);
                let mut s = Searcher::new(own, &eval, WallClock::default(), SearchParams::unlimited(depth));
                let got = s.search(Node::new(b.clone(), owner, depth));
                assert_eq!(got, expected, "seed={seed} own={own} owner={owner} depth={depth}");
            }
        }
    }
}

#[test]
fn pruning_visits_fewer_nodes_than_the_full_tree() {
    let eval = Evaluator::default();
    let (b, owner) = random_position(3, 10);
    let mut s = Searcher::new(Side::Black, &eval, WallClock::default(), SearchParams::unlimited(4));
    s.search(Node::new(b.clone(), owner, 4));

    fn count(board: &Board, owner: Side, depth: u32) -> u64 {
        let mover = owner.other();
        let moves = board.legal_moves(mover);
        if depth == 0 || moves.is_empty() { return 1; }
        1 + moves.into_iter().map(|m| { let mut c = board.clone(); c.play(mover, m); count(&c, mover, depth - 1) }).sum::<u64>()
    }
    assert!(s.nodes() <= count(&b, owner, 4));
}

#[test]
fn terminal_position_is_evaluated_even_with_depth_left() {
    let eval = Evaluator::default();
    let mut b = Board::empty();
    b.set(0, 0, Cell::Black);
    b.set(7, 7, Cell::White);
    let mut s = Searcher::new(Side::Black, &eval, WallClock::default(), SearchParams::unlimited(5));
    let got = s.search(Node::new(b.clone(), Side::Black, 5));
    assert_eq!(got, eval.evaluate(&b, Side::Black));
    assert_eq!(s.nodes(), 1);
}
