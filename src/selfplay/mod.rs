use crate::board::{Board, GameBoard, Move, Side};
use crate::config::EngineConfig;
use crate::engine::Engine;
use crate::error::EngineError;
use anyhow::{Context, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Opponent {
    /// The engine plays both sides.
    Engine,
    /// Seeded uniform random mover. The engine takes Black in even games, White in odd.
    Random,
}

#[derive(Clone, Debug)]
pub struct SelfPlayParams {
    pub games: usize,
    pub max_plies: usize,
    pub threads: usize,
    pub opponent: Opponent,
    pub engine: EngineConfig,
    pub seed: u64,
}

impl Default for SelfPlayParams {
    fn default() -> Self {
        Self { games: 1, max_plies: 128, threads: 1, opponent: Opponent::Engine, engine: EngineConfig::default(), seed: 42 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// `None` entries are passes.
    pub moves: Vec<Option<Move>>,
    /// Side the engine played against the random opponent; `None` in engine-vs-engine games.
    pub engine_side: Option<Side>,
    pub black: u32,
    pub white: u32,
    /// `None` for a draw or a game stopped at `max_plies`.
    pub winner: Option<Side>,
    pub finished: bool,
}

pub fn play_game(params: &SelfPlayParams, game_index: usize) -> Result<GameRecord, EngineError> {
    let mut rng = SmallRng::seed_from_u64(params.seed ^ game_index as u64);
    let engine_side = match params.opponent {
        Opponent::Engine => None,
        Opponent::Random => Some(if game_index % 2 == 0 { Side::Black } else { Side::White }),
    };
    let black = Engine::with_config(Side::Black, &params.engine);
    let white = Engine::with_config(Side::White, &params.engine);

    let mut board = Board::new();
    let mut side = Side::Black;
    let mut moves = Vec::new();
    let mut finished = false;
    while moves.len() < params.max_plies {
        let legal = board.legal_moves(side);
        if legal.is_empty() {
            if board.legal_moves(side.other()).is_empty() { finished = true; break; }
            moves.push(None);
            side = side.other();
            continue;
        }
        let random_turn = engine_side.is_some_and(|s| s != side);
        let mv = if random_turn {
            legal[rng.gen_range(0..legal.len())]
        } else {
            match side { Side::Black => black.play(&board)?, Side::White => white.play(&board)? }
        };
        board.play(side, mv);
        moves.push(Some(mv));
        side = side.other();
    }
    if !finished { finished = board.is_game_over(); }

    let (b, w) = (board.count(Side::Black), board.count(Side::White));
    let winner = if !finished || b == w { None } else if b > w { Some(Side::Black) } else { Some(Side::White) };
    Ok(GameRecord { moves, engine_side, black: b, white: w, winner, finished })
}

/// Plays `params.games` independent games. `on_game` runs after each finished
/// game (possibly from a worker thread). Results are in game order.
pub fn generate_games<F>(params: &SelfPlayParams, on_game: F) -> Result<Vec<GameRecord>>
where
    F: Fn(&GameRecord) + Sync,
{
    let run = |i: usize| -> Result<GameRecord> {
        let game = play_game(params, i).with_context(|| format!("game {i}"))?;
        on_game(&game);
        Ok(game)
    };
    if params.threads <= 1 {
        return (0..params.games).map(run).collect();
    }
    let pool = rayon::ThreadPoolBuilder::new().num_threads(params.threads).build()?;
    pool.install(|| (0..params.games).into_par_iter().map(run).collect())
}

pub fn write_jsonl<P: AsRef<Path>>(games: &[GameRecord], path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    let mut w = BufWriter::new(File::create(path).with_context(|| format!("creating {}", path.display()))?);
    for g in games {
        serde_json::to_writer(&mut w, g)?;
        writeln!(w)?;
    }
    w.flush()?;
    Ok(())
}

pub fn read_jsonl<P: AsRef<Path>>(path: P) -> Result<Vec<GameRecord>> {
    let path = path.as_ref();
    let rdr = BufReader::new(File::open(path).with_context(|| format!("opening {}", path.display()))?);
    let mut games: Vec<GameRecord> = Vec::new();
    for (n, line) in rdr.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        let game: GameRecord = serde_json::from_str(&line).with_context(|| format!("{}:{}", path.display(), n + 1))?;
        games.push(game);
    }
    Ok(games)
}
