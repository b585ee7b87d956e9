//! AI-vs-AI games driven entirely through the reducer.
//!
//! The driver never touches the board directly: every roll, move, and cube
//! decision is dispatched as an `Action`, so the resulting history replays
//! to the same final state.

use crate::ai::Agent;
use crate::core::{Action, ColorMap, DiceSource, GameConfig, GameState, RuleError};
use crate::rules::{can_offer_double, dispatch, legal_moves};

use super::record::GameRecord;

/// Play one game between two agents.
///
/// Each turn: the player on turn may offer a double (the opponent accepts
/// or declines), then rolls from `dice`, then moves one checker at a time
/// until no legal move remains, then completes the turn.
///
/// Stops at game over or once `max_turns` turns have been played; an
/// unfinished game is returned with `winner: None`.
pub fn self_play<'a>(
    white: &'a mut dyn Agent,
    black: &'a mut dyn Agent,
    dice: &mut dyn DiceSource,
    config: GameConfig,
    max_turns: u32,
) -> Result<GameRecord, RuleError> {
    let mut agents = ColorMap::new(white, black);
    let mut state = GameState::new(config);

    while !state.is_terminal() && state.turn_number <= max_turns {
        state = play_turn(state, &mut agents, dice)?;
    }

    Ok(GameRecord::from_state(&state))
}

fn play_turn(
    mut state: GameState,
    agents: &mut ColorMap<&mut dyn Agent>,
    dice: &mut dyn DiceSource,
) -> Result<GameState, RuleError> {
    let color = state.current_player;

    if can_offer_double(&state) && agents[color].offer_double(&state) {
        state = dispatch(&state, &Action::OfferDouble)?;
        let response = if agents[color.opponent()].accept_double(&state) {
            Action::AcceptDouble
        } else {
            Action::DeclineDouble
        };
        state = dispatch(&state, &response)?;
        if state.is_terminal() {
            return Ok(state);
        }
    }

    let (a, b) = dice.roll();
    state = dispatch(&state, &Action::RollDice(a, b))?;

    while !state.is_terminal() {
        let moves = legal_moves(&state);
        let Some(mv) = agents[color].choose_move(&state, &moves) else {
            break;
        };
        state = dispatch(
            &state,
            &Action::MoveChecker {
                from: mv.from,
                to: mv.to,
            },
        )?;
    }

    if state.is_terminal() {
        return Ok(state);
    }
    dispatch(&state, &Action::CompleteTurn)
}
