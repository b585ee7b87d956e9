//! Turn and doubling-cube state machine.
//!
//! `dispatch` is the single entry point for changing a game: it validates an
//! `Action` against the current phase and the legal-move set, and returns a
//! new `GameState`. The input state is never modified, so a rejected action
//! leaves the caller holding exactly the state it had.
//!
//! Eligibility (phase, cube ownership and cap, legal `(from, to)` pairs) is
//! always re-checked here rather than trusted from the caller.

use crate::core::{
    Action, ActionRecord, Color, Dest, Dice, GameConfig, GameState, Phase, RecordError,
    RuleError, Source, WinType,
};

use super::apply::apply_move;
use super::movegen::{legal_moves, legal_moves_from};
use super::scoring::{bear_off_winner, detect_win_type, score};

/// Outcome of `reduce`: the next state, plus the rejection if there was one.
///
/// On rejection `state` is the unchanged input.
#[derive(Clone, Debug)]
pub struct Reduction {
    pub state: GameState,
    pub rejected: Option<RuleError>,
}

impl Reduction {
    /// Whether the action was accepted.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.rejected.is_none()
    }
}

/// Reducer form of `dispatch`: never fails, reports rejections alongside
/// the (unchanged) state.
#[must_use]
pub fn reduce(state: &GameState, action: &Action) -> Reduction {
    match dispatch(state, action) {
        Ok(next) => Reduction {
            state: next,
            rejected: None,
        },
        Err(err) => Reduction {
            state: state.clone(),
            rejected: Some(err),
        },
    }
}

/// Apply an action, returning the next state or the reason it was refused.
pub fn dispatch(state: &GameState, action: &Action) -> Result<GameState, RuleError> {
    if state.is_terminal() && *action != Action::NewGame {
        return Err(RuleError::GameOver);
    }

    let mut next = match *action {
        Action::RollDice(a, b) => roll_dice(state, a, b)?,
        Action::SelectPoint(source) => select_point(state, source)?,
        Action::MoveChecker { from, to } => move_checker(state, from, to)?,
        Action::CompleteTurn => {
            expect_phase(state, Phase::Moving)?;
            let mut next = state.clone();
            next.record(*action);
            next.current_player = state.opponent();
            next.dice = Dice::none();
            next.selected = None;
            next.turn_number += 1;
            next.phase = Phase::Rolling;
            return Ok(next);
        }
        Action::OfferDouble => {
            double_eligibility(state)?;
            let mut next = state.clone();
            next.phase = Phase::DoubleOffered;
            next
        }
        Action::AcceptDouble => {
            expect_phase(state, Phase::DoubleOffered)?;
            let mut next = state.clone();
            next.cube = state.cube.accepted_by(state.opponent(), state.config.cube_cap());
            next.phase = Phase::Rolling;
            next
        }
        Action::DeclineDouble => {
            expect_phase(state, Phase::DoubleOffered)?;
            let mut next = state.clone();
            next.record(*action);
            return Ok(finish(next, state.current_player, WinType::Normal));
        }
        Action::EndGame { winner, win_type } => {
            let mut next = state.clone();
            next.record(*action);
            return Ok(finish(next, winner, win_type));
        }
        Action::NewGame => return Ok(GameState::new(state.config)),
    };

    if action.is_recorded() {
        next.record(*action);
    }
    if let Some(winner) = bear_off_winner(&next.board) {
        let win_type = detect_win_type(&next.board, winner.opponent());
        return Ok(finish(next, winner, win_type));
    }
    Ok(next)
}

/// Whether the player on turn may offer a double right now.
#[must_use]
pub fn can_offer_double(state: &GameState) -> bool {
    double_eligibility(state).is_ok()
}

/// Legal destinations for the currently selected point.
#[must_use]
pub fn selected_destinations(state: &GameState) -> Vec<Dest> {
    let Some(source) = state.selected else {
        return Vec::new();
    };
    let mut dests: Vec<Dest> = legal_moves_from(state, source)
        .into_iter()
        .map(|m| m.to)
        .collect();
    dests.sort_unstable();
    dests.dedup();
    dests
}

/// Rebuild a game by re-dispatching its recorded actions.
pub fn replay<'a>(
    config: GameConfig,
    records: impl IntoIterator<Item = &'a ActionRecord>,
) -> Result<GameState, RecordError> {
    records
        .into_iter()
        .enumerate()
        .try_fold(GameState::new(config), |state, (index, record)| {
            dispatch(&state, &record.action).map_err(|source| RecordError::Replay { index, source })
        })
}

fn expect_phase(state: &GameState, phase: Phase) -> Result<(), RuleError> {
    if state.phase == phase {
        Ok(())
    } else {
        Err(RuleError::WrongPhase {
            actual: state.phase,
        })
    }
}

fn double_eligibility(state: &GameState) -> Result<(), RuleError> {
    expect_phase(state, Phase::Rolling)?;
    if !state.cube.below(state.config.cube_cap()) {
        return Err(RuleError::CannotDouble("cube is at its maximum"));
    }
    if !state.cube.may_offer(state.current_player) {
        return Err(RuleError::CannotDouble("opponent owns the cube"));
    }
    Ok(())
}

fn roll_dice(state: &GameState, a: u8, b: u8) -> Result<GameState, RuleError> {
    expect_phase(state, Phase::Rolling)?;
    if !(1..=6).contains(&a) || !(1..=6).contains(&b) {
        return Err(RuleError::InvalidDie(a, b));
    }
    let mut next = state.clone();
    next.dice = Dice::from_roll(a, b);
    next.phase = Phase::Moving;
    Ok(next)
}

fn select_point(state: &GameState, source: Source) -> Result<GameState, RuleError> {
    expect_phase(state, Phase::Moving)?;
    let mut next = state.clone();
    if state.selected == Some(source) {
        next.selected = None;
    } else if legal_moves_from(state, source).is_empty() {
        return Err(RuleError::NoMovesFrom(source));
    } else {
        next.selected = Some(source);
    }
    Ok(next)
}

fn move_checker(state: &GameState, from: Source, to: Dest) -> Result<GameState, RuleError> {
    expect_phase(state, Phase::Moving)?;

    // Several dice can realise the same bear-off; spend the smallest
    let mv = legal_moves(state)
        .into_iter()
        .filter(|m| m.from == from && m.to == to)
        .min_by_key(|m| m.die)
        .ok_or(RuleError::IllegalMove { from, to })?;

    let mut next = apply_move(state, &mv)?;
    next.selected = None;
    Ok(next)
}

fn finish(mut state: GameState, winner: Color, win_type: WinType) -> GameState {
    state.phase = Phase::GameOver;
    state.winner = Some(winner);
    state.win_type = Some(win_type);
    state.score = Some(score(win_type, state.cube.value, state.config.difficulty));
    state.selected = None;
    state
}
