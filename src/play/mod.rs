//! Self-play and exported game records.
//!
//! ```rust
//! use backgammon_engine::ai::HeuristicAgent;
//! use backgammon_engine::core::{GameConfig, GameRng};
//! use backgammon_engine::play::self_play;
//!
//! let mut white = HeuristicAgent::default();
//! let mut black = HeuristicAgent::default();
//! let mut dice = GameRng::new(7).for_context("dice");
//!
//! let record = self_play(&mut white, &mut black, &mut dice, GameConfig::default(), 500).unwrap();
//! let bytes = record.to_bytes().unwrap();
//! assert!(!bytes.is_empty());
//! ```

mod record;
mod self_play;

pub use record::GameRecord;
pub use self_play::self_play;
