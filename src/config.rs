use serde::{Deserialize, Serialize};

use crate::error::EngineError;

pub const DEFAULT_DEPTH: u8 = 7;
pub const DEFAULT_WORKERS: usize = 4;

/// Tunables for the AI players.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies searched from the root, root move included.
    pub depth: u8,
    /// Threads in the root worker pool.
    pub workers: usize,
    /// Chance that a root move tying the best score so far replaces it.
    /// `1.0` always prefers the later tied move.
    pub tie_break_probability: f64,
    /// Seed for the tie-break generator; entropy when unset.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            workers: DEFAULT_WORKERS,
            tie_break_probability: 1.0,
            seed: None,
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.depth == 0 {
            return Err(invalid("depth must be at least 1"));
        }
        if self.workers == 0 {
            return Err(invalid("workers must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.tie_break_probability) {
            return Err(invalid(&format!(
                "tie_break_probability {} outside 0..=1",
                self.tie_break_probability
            )));
        }
        Ok(())
    }
}

fn invalid(message: &str) -> EngineError {
    EngineError::InvalidConfig {
        message: message.to_string(),
    }
}
