//! # backgammon-engine
//!
//! A backgammon rules engine: legal-move generation, the doubling cube,
//! scoring, and a tiered computer opponent.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: every rule takes a `&GameState` and returns a
//!    new one. The move generator and the AI apply candidate moves to
//!    throwaway copies to see what follows.
//!
//! 2. **One way in**: a game changes only through `rules::dispatch` with an
//!    `Action`. Every accepted action is appended to the state's history,
//!    which replays to the same state.
//!
//! 3. **Injected randomness**: the engine never rolls dice. Dice arrive in
//!    `Action::RollDice`; the AI and self-play draw from a seeded `GameRng`.
//!
//! ## Modules
//!
//! - `core`: colors, board, dice, cube, moves, actions, state, config, RNG
//! - `rules`: move generation, move application, scoring, the reducer
//! - `ai`: evaluator, move selection, doubling decisions, agents
//! - `play`: self-play driver and exported game records

pub mod ai;
pub mod core;
pub mod play;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Board, Color, Dest, Dice, DiceSource, Difficulty, DoublingCube,
    GameConfig, GameRng, GameState, Move, Phase, RecordError, RuleError, Source, WinType,
};

pub use crate::rules::{apply_move, dispatch, legal_moves, reduce, replay, Reduction};

pub use crate::ai::{Agent, AiConfig, HeuristicAgent};

pub use crate::play::{self_play, GameRecord};
