use anyhow::{Context, Result};
use clap::Parser;
use othbot::board::{Board, GameBoard, Side};
use othbot::config::EngineConfig;
use othbot::engine::Engine;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "othbot", version, about = "Pick an Othello move for one side", long_about = None)]
struct Args {
    /// Board file: 64 cells of X/O/. in row-major order. Reads stdin when omitted or "-".
    #[arg(value_name = "BOARD")]
    board: Option<PathBuf>,

    /// Side to move: black or white
    #[arg(long, default_value = "black")]
    side: Side,

    /// Engine config (JSON). Command line flags override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Plies searched below each root move
    #[arg(long)]
    depth: Option<u32>,

    /// Soft time budget in milliseconds (0 disables the deadline)
    #[arg(long)]
    movetime_ms: Option<u64>,

    /// Stop expanding after this many nodes
    #[arg(long)]
    max_nodes: Option<u64>,

    /// Print the board and search statistics
    #[arg(long)]
    verbose: bool,
}

fn read_board(path: Option<&PathBuf>) -> Result<Board> {
    let text = match path {
        Some(p) if p.as_os_str() != "-" => {
            std::fs::read_to_string(p).with_context(|| format!("reading board {}", p.display()))?
        }
        _ => {
            let mut s = String::new();
            std::io::stdin().read_to_string(&mut s)?;
            s
        }
    };
    Ok(text.parse()?)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(p) => EngineConfig::from_path(p)?,
        None => EngineConfig::default(),
    };
    if let Some(d) = args.depth { config.depth = d; }
    if let Some(t) = args.movetime_ms { config.movetime_ms = (t > 0).then_some(t); }
    if args.max_nodes.is_some() { config.max_nodes = args.max_nodes; }

    let board = read_board(args.board.as_ref())?;
    if args.verbose { println!("{board}"); }
    if board.legal_moves(args.side).is_empty() {
        println!("pass");
        return Ok(());
    }

    let engine = Engine::with_config(args.side, &config);
    let res = engine.search(&board);
    let mv = res.best_move.context("no move found")?;
    if args.verbose {
        println!("score={:.3} nodes={} elapsed={:.3}s cut_off={}", res.score, res.nodes, res.elapsed.as_secs_f64(), res.cut_off);
    }
    println!("{mv}");
    Ok(())
}
