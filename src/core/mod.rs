//! Core engine types: colors, board, dice, cube, moves, actions, state,
//! configuration, errors, and deterministic RNG.
//!
//! Everything here is plain data. The rules that act on it live in `rules`.

pub mod action;
pub mod board;
pub mod color;
pub mod config;
pub mod cube;
pub mod dice;
pub mod error;
pub mod moves;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use board::{Board, BoardViolation, Point};
pub use color::{Color, ColorMap, Side, BAR_PIPS, CHECKERS_PER_COLOR, POINT_COUNT};
pub use config::{Difficulty, GameConfig};
pub use cube::{DoublingCube, MAX_CUBE_VALUE};
pub use dice::{Dice, DiceSource, FixedDice};
pub use error::{RecordError, RuleError};
pub use moves::{Dest, Move, Source};
pub use rng::GameRng;
pub use state::{GameState, Phase, WinType};
