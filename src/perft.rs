use crate::board::{GameBoard, Side};

// Leaf count of the move tree with `side` to move. A forced pass is one ply;
// a position where neither side can move is a leaf.
pub fn perft<B: GameBoard>(board: &B, side: Side, depth: u32) -> u64 {
    perft_inner(board, side, depth, false)
}

fn perft_inner<B: GameBoard>(board: &B, side: Side, depth: u32, passed: bool) -> u64 {
    if depth == 0 { return 1; }
    let moves = board.legal_moves(side);
    if moves.is_empty() {
        if passed { return 1; }
        return perft_inner(board, side.other(), depth - 1, true);
    }
    let mut nodes = 0u64;
    for m in moves {
        let mut child = board.clone();
        child.play(side, m);
        nodes += perft_inner(&child, side.other(), depth - 1, false);
    }
    nodes
}
