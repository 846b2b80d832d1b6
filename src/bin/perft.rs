use clap::Parser;
use othbot::board::{Board, Side};
use othbot::perft::perft;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "perft", about = "Count Othello move-tree leaves from the opening or a given board")]
struct Args {
    /// Search depth
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// Board file (64 cells of X/O/.); the standard opening when omitted
    #[arg(long)]
    board: Option<std::path::PathBuf>,
    /// Side to move
    #[arg(long, default_value = "black")]
    side: Side,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let board: Board = match &args.board {
        Some(p) => std::fs::read_to_string(p)?.parse()?,
        None => Board::new(),
    };
    let t0 = Instant::now();
    let nodes = perft(&board, args.side, args.depth);
    let dt = t0.elapsed().as_secs_f64();
    if args.nps {
        let nps = if dt > 0.0 { nodes as f64 / dt } else { 0.0 };
        println!("nodes: {} elapsed: {:.3}s nps: {:.0}", nodes, dt, nps);
    } else {
        println!("nodes: {}", nodes);
    }
    Ok(())
}
