//! Game state: board, dice, cube, phase, and history.
//!
//! `GameState` is an immutable value. Every transition in `rules` takes a
//! `&GameState` and returns a new one; the board and dice are small fixed-size
//! values and the history is an `im::Vector`, so cloning a state for
//! speculative play is cheap.
//!
//! ## Phases
//!
//! ```text
//! Rolling --RollDice--> Moving --CompleteTurn--> Rolling (other player)
//!    |                     |
//!    |                     +--last checker borne off--> GameOver
//!    +--OfferDouble--> DoubleOffered --AcceptDouble--> Rolling
//!                            |
//!                            +--DeclineDouble--> GameOver
//! ```

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::board::Board;
use super::color::Color;
use super::config::GameConfig;
use super::cube::DoublingCube;
use super::dice::Dice;
use super::moves::Source;

/// Turn phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for dice; the current player may offer a double.
    Rolling,
    /// Dice rolled; checkers are being moved.
    Moving,
    /// Current player offered a double; the opponent must respond.
    DoubleOffered,
    /// Terminal.
    GameOver,
}

/// How decisively a game was won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinType {
    Normal,
    Gammon,
    Backgammon,
}

impl WinType {
    /// Points multiplier for this kind of win.
    #[must_use]
    pub const fn multiplier(self) -> u32 {
        match self {
            WinType::Normal => 1,
            WinType::Gammon => 2,
            WinType::Backgammon => 3,
        }
    }
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Checker positions.
    pub board: Board,

    /// Dice for the current turn (empty while rolling).
    pub dice: Dice,

    /// Player on turn.
    pub current_player: Color,

    /// Turn phase.
    pub phase: Phase,

    /// Doubling cube.
    pub cube: DoublingCube,

    /// Winner once terminal.
    pub winner: Option<Color>,

    /// Win type once terminal.
    pub win_type: Option<WinType>,

    /// Final score once terminal.
    pub score: Option<u32>,

    /// Turn number (starts at 1).
    pub turn_number: u32,

    /// Point currently selected in the UI.
    pub selected: Option<Source>,

    /// Settings this game was created with.
    pub config: GameConfig,

    /// Accepted actions in order.
    pub history: Vector<ActionRecord>,
}

impl GameState {
    /// Fresh game in the starting position.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::at_position(config, Board::starting(), config.starting_player)
    }

    /// Game in the rolling phase at an arbitrary position.
    #[must_use]
    pub fn at_position(config: GameConfig, board: Board, current_player: Color) -> Self {
        Self {
            board,
            dice: Dice::none(),
            current_player,
            phase: Phase::Rolling,
            cube: DoublingCube::default(),
            winner: None,
            win_type: None,
            score: None,
            turn_number: 1,
            selected: None,
            config,
            history: Vector::new(),
        }
    }

    /// Same state with the given dice rolled and the phase set to moving.
    ///
    /// Builds positions directly for analysis and tests; games go through
    /// `Action::RollDice`.
    ///
    /// # Panics
    ///
    /// Panics if either die is outside 1-6.
    #[must_use]
    pub fn with_roll(mut self, a: u8, b: u8) -> Self {
        assert!(
            (1..=6).contains(&a) && (1..=6).contains(&b),
            "dice must be 1-6, got ({a}, {b})"
        );
        self.dice = Dice::from_roll(a, b);
        self.phase = Phase::Moving;
        self
    }

    /// The player not on turn.
    #[must_use]
    pub fn opponent(&self) -> Color {
        self.current_player.opponent()
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Append an accepted action to the history.
    pub(crate) fn record(&mut self, action: super::action::Action) {
        let sequence = self.history.len() as u32;
        self.history.push_back(ActionRecord::new(
            self.current_player,
            action,
            self.turn_number,
            sequence,
        ));
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
