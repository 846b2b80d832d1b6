use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use othbot::board::Side;
use othbot::config::EngineConfig;
use othbot::selfplay::{generate_games, write_jsonl, Opponent, SelfPlayParams};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "othbot-selfplay", about = "Play engine games and write them as JSON lines")]
struct Args {
    #[arg(long, default_value_t = 10)]
    games: usize,
    #[arg(long, default_value_t = 128)]
    max_plies: usize,
    #[arg(long, default_value_t = 1)]
    threads: usize,
    #[arg(long, default_value_t = 5)]
    depth: u32,
    /// Soft time budget per move; omit for fixed-depth games
    #[arg(long)]
    movetime_ms: Option<u64>,
    #[arg(long)]
    max_nodes: Option<u64>,
    /// engine (both sides) or random (engine against a random mover)
    #[arg(long, value_enum, default_value = "random")]
    opponent: OpponentArg,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(long, default_value = "out/selfplay.jsonl")]
    out: PathBuf,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum OpponentArg {
    Engine,
    Random,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let params = SelfPlayParams {
        games: a.games,
        max_plies: a.max_plies,
        threads: a.threads,
        opponent: match a.opponent { OpponentArg::Engine => Opponent::Engine, OpponentArg::Random => Opponent::Random },
        engine: EngineConfig { depth: a.depth, movetime_ms: a.movetime_ms, max_nodes: a.max_nodes, ..EngineConfig::default() },
        seed: a.seed,
    };

    let bar = ProgressBar::new(a.games as u64);
    bar.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} games [{elapsed_precise}]")?);
    let games = generate_games(&params, |_| bar.inc(1))?;
    bar.finish();

    let wins = |side: Side| games.iter().filter(|g| g.winner == Some(side)).count();
    let engine_wins = games.iter().filter(|g| g.engine_side.is_some() && g.winner == g.engine_side).count();
    eprintln!("black={} white={} draws/unfinished={}", wins(Side::Black), wins(Side::White), games.len() - wins(Side::Black) - wins(Side::White));
    if params.opponent == Opponent::Random { eprintln!("engine won {engine_wins}/{}", games.len()); }

    write_jsonl(&games, &a.out)?;
    eprintln!("Wrote {} games to {}", games.len(), a.out.display());
    Ok(())
}
