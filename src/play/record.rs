//! Exported game records.
//!
//! A `GameRecord` is the finished (or abandoned) game as submitted to a
//! leaderboard: the configuration, the full action log, and the outcome.
//! It is not a save format; `replay` rebuilds the final state from the log.

use serde::{Deserialize, Serialize};

use crate::core::{ActionRecord, Color, GameConfig, GameState, RecordError, WinType};
use crate::rules::replay;

/// Outcome and action log of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Settings the game was played under.
    pub config: GameConfig,

    /// Every accepted action, in order.
    pub history: Vec<ActionRecord>,

    /// Winner, if the game finished.
    pub winner: Option<Color>,

    /// How the game was won.
    pub win_type: Option<WinType>,

    /// Points awarded to the winner.
    pub score: Option<u32>,

    /// Cube value when the game ended.
    pub cube_value: u32,

    /// Turn number the game ended on.
    pub turns: u32,
}

impl GameRecord {
    /// Snapshot a game's log and outcome.
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        Self {
            config: state.config,
            history: state.history.iter().cloned().collect(),
            winner: state.winner,
            win_type: state.win_type,
            score: state.score,
            cube_value: state.cube.value,
            turns: state.turn_number,
        }
    }

    /// Whether the game reached a result.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    /// Compact binary encoding for submission.
    pub fn to_bytes(&self) -> Result<Vec<u8>, RecordError> {
        bincode::serialize(self).map_err(RecordError::Encode)
    }

    /// Decode a record produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RecordError> {
        bincode::deserialize(bytes).map_err(RecordError::Decode)
    }

    /// Re-dispatch the log from a fresh game.
    pub fn replay(&self) -> Result<GameState, RecordError> {
        replay(self.config, &self.history)
    }
}
