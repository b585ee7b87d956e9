//! Error types for the reducer and for game records.

use super::moves::{Dest, Source};
use super::state::Phase;

/// Rejection of an action by the reducer.
///
/// The state the action was dispatched against is never modified.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("action not allowed in phase {actual:?}")]
    WrongPhase { actual: Phase },

    #[error("invalid dice roll ({0}, {1}): each die must be 1-6")]
    InvalidDie(u8, u8),

    #[error("illegal move {from:?} -> {to:?}")]
    IllegalMove { from: Source, to: Dest },

    #[error("no legal moves from {0:?}")]
    NoMovesFrom(Source),

    #[error("cannot offer double: {0}")]
    CannotDouble(&'static str),

    #[error("game is already over")]
    GameOver,
}

/// Errors from encoding or decoding a game record.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("failed to encode record: {0}")]
    Encode(#[source] bincode::Error),

    #[error("failed to decode record: {0}")]
    Decode(#[source] bincode::Error),

    #[error("replay rejected action #{index}: {source}")]
    Replay { index: usize, source: RuleError },
}
