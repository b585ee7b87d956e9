//! Players that can drive a game.
//!
//! An `Agent` answers the three questions a game asks of a player: which
//! move to make, whether to offer the cube, and whether to take it. The
//! self-play driver owns the rules; agents only choose.

use crate::core::{GameRng, GameState, Move};

use super::config::AiConfig;
use super::doubling::{should_accept_double, should_double};
use super::selector::{select_move, select_turn_sequence, TurnPlan};

// =============================================================================
// Agent
// =============================================================================

/// Decision maker for one side of a game.
pub trait Agent {
    /// Choose one of `moves` for the player on turn.
    ///
    /// Returns `None` if `moves` is empty.
    fn choose_move(&mut self, state: &GameState, moves: &[Move]) -> Option<Move>;

    /// Whether to offer a double before rolling.
    fn offer_double(&mut self, state: &GameState) -> bool;

    /// Whether to take a double offered by the player on turn.
    fn accept_double(&mut self, state: &GameState) -> bool;
}

// =============================================================================
// Heuristic Agent
// =============================================================================

/// Agent backed by the tiered heuristics.
///
/// Carries its own seeded RNG so two agents in one game draw from
/// independent streams.
#[derive(Clone, Debug)]
pub struct HeuristicAgent {
    config: AiConfig,
    rng: GameRng,
}

impl HeuristicAgent {
    /// Create an agent from its configuration.
    #[must_use]
    pub fn new(config: AiConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self { config, rng }
    }

    /// Plan every move of the current turn without touching `state`.
    pub fn plan_turn(&mut self, state: &GameState) -> TurnPlan {
        select_turn_sequence(state, &self.config, &mut self.rng)
    }
}

impl Default for HeuristicAgent {
    fn default() -> Self {
        Self::new(AiConfig::default())
    }
}

impl Agent for HeuristicAgent {
    fn choose_move(&mut self, state: &GameState, moves: &[Move]) -> Option<Move> {
        select_move(state, moves, &self.config, &mut self.rng)
    }

    fn offer_double(&mut self, state: &GameState) -> bool {
        should_double(state, self.config.difficulty, &mut self.rng)
    }

    fn accept_double(&mut self, state: &GameState) -> bool {
        should_accept_double(state, self.config.difficulty, &mut self.rng)
    }
}
