//! Reducer actions and the action history.
//!
//! Actions are the only way a `GameState` changes. Accepted actions are
//! recorded as `ActionRecord`s, which is the roll/move log used for
//! replay and leaderboard submission.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::moves::{Dest, Source};
use super::state::WinType;

/// A discrete game action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Supply the two dice values for this turn.
    RollDice(u8, u8),
    /// UI selection of a source to move from (toggles).
    SelectPoint(Source),
    /// Move one checker along a legal `(from, to)` pair.
    MoveChecker { from: Source, to: Dest },
    /// End the current player's turn.
    CompleteTurn,
    /// Offer to double the stakes.
    OfferDouble,
    /// Take the offered double.
    AcceptDouble,
    /// Refuse the offered double and concede.
    DeclineDouble,
    /// Terminate the game externally (e.g. resignation).
    EndGame { winner: Color, win_type: WinType },
    /// Reset to the starting position.
    NewGame,
}

impl Action {
    /// Whether the action belongs in the replay log.
    ///
    /// Point selection is UI state and doesn't affect the game.
    #[must_use]
    pub fn is_recorded(&self) -> bool {
        !matches!(self, Action::SelectPoint(_))
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player on turn when the action was taken.
    pub player: Color,

    /// The action taken.
    pub action: Action,

    /// Turn number when action was taken.
    pub turn: u32,

    /// Sequence number within the game.
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: Color, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}
