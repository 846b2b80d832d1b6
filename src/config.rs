use crate::search::alphabeta::{SearchParams, DEFAULT_DEPTH, DEFAULT_MOVETIME};
use crate::search::eval::EvalWeights;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Engine settings. Every field is optional in JSON; missing fields keep the
/// tuned defaults (depth 5, 1980 ms, no node budget, stock weights).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub depth: u32,
    pub movetime_ms: Option<u64>,
    pub max_nodes: Option<u64>,
    pub weights: EvalWeights,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            movetime_ms: Some(DEFAULT_MOVETIME.as_millis() as u64),
            max_nodes: None,
            weights: EvalWeights::default(),
        }
    }
}

impl EngineConfig {
    pub fn load_from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::load_from_json(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn search_params(&self) -> SearchParams {
        SearchParams {
            depth: self.depth,
            movetime: self.movetime_ms.map(Duration::from_millis),
            max_nodes: self.max_nodes,
        }
    }
}
