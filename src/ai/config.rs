//! AI configuration parameters.

use serde::{Deserialize, Serialize};

use crate::core::Difficulty;

/// AI configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AiConfig {
    /// Heuristic tier for move choice and cube decisions.
    pub difficulty: Difficulty,

    /// Random seed for the agent's RNG.
    /// Same seed produces the same choices from the same positions.
    pub seed: u64,

    /// Scale of the random tie-breaking noise added at the normal tier.
    /// 0 makes the normal tier fully deterministic.
    pub jitter: f64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            seed: 42,
            jitter: 1.0,
        }
    }
}

impl AiConfig {
    /// Set the difficulty tier.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the jitter scale. Negative values are treated as 0.
    pub fn with_jitter(mut self, jitter: f64) -> Self {
        self.jitter = jitter.max(0.0);
        self
    }
}
