//! Computer opponent.
//!
//! ## Overview
//!
//! Three difficulty tiers share one pipeline:
//!
//! - **Evaluator**: scores a position for one color
//! - **Selector**: picks a move (random, heuristic, or one-ply lookahead)
//!   and plays out a whole turn
//! - **Doubling**: decides when to offer and when to take the cube
//! - **Agent**: bundles the above with a seeded RNG behind a trait the
//!   self-play driver can call
//!
//! ## Usage
//!
//! ```rust
//! use backgammon_engine::ai::{AiConfig, HeuristicAgent};
//! use backgammon_engine::core::{Difficulty, GameState};
//!
//! let mut agent = HeuristicAgent::new(AiConfig::default().with_difficulty(Difficulty::Hard));
//! let state = GameState::default().with_roll(3, 1);
//! let plan = agent.plan_turn(&state);
//! assert_eq!(plan.moves.len(), 2);
//! ```
//!
//! All randomness comes from the agent's own `GameRng`; the same seed and
//! position always give the same choice.

mod agent;
mod config;
mod doubling;
mod evaluator;
mod selector;

pub use agent::{Agent, HeuristicAgent};
pub use config::AiConfig;
pub use doubling::{
    is_bear_off_race, pip_lead, should_accept_double, should_double, win_probability,
};
pub use evaluator::{
    bear_off_progress, blot_exposure, evaluate, evaluate_board, home_board_score, prime_length,
    prime_score, race_score,
};
pub use selector::{move_heuristic, select_move, select_turn_sequence, TurnPlan};
