//! Move selection by difficulty tier.
//!
//! - **Easy**: uniform random over the legal moves.
//! - **Normal**: per-move heuristic plus half the post-move evaluation plus
//!   random jitter.
//! - **Hard**: one-ply lookahead. Each candidate is scored by the best
//!   position reachable with one more move, or by its own position when no
//!   continuation exists.
//!
//! Every candidate is tried with `apply_move`, so the state being searched
//! is never modified.

use std::cmp::Ordering;

use crate::core::{Color, Dest, Difficulty, GameRng, GameState, Move, Source};
use crate::rules::{apply_move, legal_moves};

use super::config::AiConfig;
use super::evaluator::evaluate;

const HIT_BONUS: f64 = 10.0;
const BEAR_OFF_BONUS: f64 = 8.0;
const MAKE_POINT_BONUS: f64 = 6.0;
const BREAK_POINT_PENALTY: f64 = -4.0;
const BAR_ENTRY_BONUS: f64 = 5.0;

/// Weight of the post-move evaluation at the normal tier.
const NORMAL_EVAL_WEIGHT: f64 = 0.5;

/// Tie-breaking noise at the hard tier.
const HARD_JITTER: f64 = 0.01;

/// Moves chosen for a whole turn and the position they lead to.
#[derive(Clone, Debug)]
pub struct TurnPlan {
    pub moves: Vec<Move>,
    pub state: GameState,
}

/// Pick one move from `moves` for the player on turn.
///
/// Returns `None` only when `moves` is empty.
pub fn select_move(
    state: &GameState,
    moves: &[Move],
    config: &AiConfig,
    rng: &mut GameRng,
) -> Option<Move> {
    let color = state.current_player;
    match config.difficulty {
        Difficulty::Easy => rng.choose(moves).copied(),
        Difficulty::Normal => best(moves.iter().filter_map(|mv| {
            let next = apply_move(state, mv).ok()?;
            let score = move_heuristic(state, mv)
                + NORMAL_EVAL_WEIGHT * evaluate(&next, color, Difficulty::Normal)
                + config.jitter * rng.gen_f64();
            Some((*mv, score))
        })),
        Difficulty::Hard => best(moves.iter().filter_map(|mv| {
            let score = lookahead_score(state, mv, color)?;
            Some((*mv, score + HARD_JITTER * rng.gen_f64()))
        })),
    }
}

/// Play out the current turn: pick a move, apply it, recompute the legal
/// set, and repeat until no move remains.
///
/// Legal moves are re-derived after every step because earlier choices
/// change which dice are still forced.
pub fn select_turn_sequence(state: &GameState, config: &AiConfig, rng: &mut GameRng) -> TurnPlan {
    let mut current = state.clone();
    let mut moves = Vec::new();
    loop {
        let legal = legal_moves(&current);
        let Some(mv) = select_move(&current, &legal, config, rng) else {
            break;
        };
        let Ok(next) = apply_move(&current, &mv) else {
            break;
        };
        moves.push(mv);
        current = next;
    }
    TurnPlan {
        moves,
        state: current,
    }
}

/// Tactical score of a single move before looking at the resulting position.
#[must_use]
pub fn move_heuristic(state: &GameState, mv: &Move) -> f64 {
    let color = state.current_player;
    let board = &state.board;
    let mut score = 0.0;

    if mv.hits {
        score += HIT_BONUS;
    }
    if mv.is_entry() {
        score += BAR_ENTRY_BONUS;
    }
    match mv.to {
        Dest::BearOff => score += BEAR_OFF_BONUS,
        Dest::Point(to) if board.points[to as usize].count(color) == 1 => {
            score += MAKE_POINT_BONUS;
        }
        Dest::Point(_) => {}
    }
    if let Source::Point(from) = mv.from {
        if board.points[from as usize].count(color) == 2 {
            score += BREAK_POINT_PENALTY;
        }
    }
    score
}

fn lookahead_score(state: &GameState, mv: &Move, color: Color) -> Option<f64> {
    let next = apply_move(state, mv).ok()?;
    let best_continuation = legal_moves(&next)
        .iter()
        .filter_map(|follow| apply_move(&next, follow).ok())
        .map(|after| evaluate(&after, color, Difficulty::Hard))
        .max_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    Some(best_continuation.unwrap_or_else(|| evaluate(&next, color, Difficulty::Hard)))
}

fn best(scored: impl Iterator<Item = (Move, f64)>) -> Option<Move> {
    scored
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(Ordering::Equal))
        .map(|(mv, _)| mv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, GameConfig};

    fn hit_position() -> GameState {
        // Black blot on 7 is three pips in front of White's point on 10
        let board = Board::from_layout(&[(10, 2), (5, 13)], &[(7, 1), (20, 14)]);
        GameState::at_position(GameConfig::default(), board, Color::White).with_roll(3, 1)
    }

    #[test]
    fn test_empty_moves_yield_none() {
        let state = GameState::default();
        let mut rng = GameRng::new(1);
        for difficulty in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
            let config = AiConfig::default().with_difficulty(difficulty);
            assert_eq!(select_move(&state, &[], &config, &mut rng), None);
        }
    }

    #[test]
    fn test_easy_picks_a_legal_move() {
        let state = GameState::default().with_roll(6, 4);
        let moves = legal_moves(&state);
        let config = AiConfig::default().with_difficulty(Difficulty::Easy);
        let mut rng = GameRng::new(9);

        for _ in 0..20 {
            let mv = select_move(&state, &moves, &config, &mut rng).unwrap();
            assert!(moves.contains(&mv));
        }
    }

    #[test]
    fn test_heuristic_components() {
        let state = hit_position();
        let hit = Move {
            from: Source::Point(10),
            to: Dest::Point(7),
            die: 3,
            hits: true,
        };
        // Hit, minus breaking the 10-point
        assert_eq!(move_heuristic(&state, &hit), HIT_BONUS + BREAK_POINT_PENALTY);

        let quiet = Move {
            from: Source::Point(5),
            to: Dest::Point(2),
            die: 3,
            hits: false,
        };
        assert_eq!(move_heuristic(&state, &quiet), 0.0);
    }

    #[test]
    fn test_normal_prefers_hit() {
        let state = hit_position();
        let moves = legal_moves(&state);
        let config = AiConfig::default().with_jitter(0.0);
        let mut rng = GameRng::new(3);

        let mv = select_move(&state, &moves, &config, &mut rng).unwrap();
        assert!(mv.hits, "expected a hit, got {mv:?}");
    }

    #[test]
    fn test_hard_turn_includes_hit() {
        let state = hit_position();
        let config = AiConfig::default().with_difficulty(Difficulty::Hard);
        let mut rng = GameRng::new(3);

        let plan = select_turn_sequence(&state, &config, &mut rng);
        assert_eq!(plan.moves.len(), 2);
        assert_eq!(plan.state.board.bar[Color::Black], 1);
    }

    #[test]
    fn test_turn_sequence_uses_all_dice() {
        let config = AiConfig::default();
        let mut rng = GameRng::new(11);

        let plan = select_turn_sequence(&GameState::default().with_roll(3, 1), &config, &mut rng);
        assert_eq!(plan.moves.len(), 2);
        assert_eq!(plan.state.dice.remaining_count(), 0);

        let plan = select_turn_sequence(&GameState::default().with_roll(6, 6), &config, &mut rng);
        assert_eq!(plan.moves.len(), 4);
        assert_eq!(plan.state.board.validate(), Ok(()));
    }

    #[test]
    fn test_turn_sequence_deterministic() {
        let state = GameState::default().with_roll(5, 2);
        for difficulty in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
            let config = AiConfig::default().with_difficulty(difficulty);
            let a = select_turn_sequence(&state, &config, &mut GameRng::new(5));
            let b = select_turn_sequence(&state, &config, &mut GameRng::new(5));
            assert_eq!(a.moves, b.moves);
        }
    }

    #[test]
    fn test_input_state_untouched() {
        let state = GameState::default().with_roll(4, 2);
        let before = state.clone();
        let _ = select_turn_sequence(&state, &AiConfig::default(), &mut GameRng::new(2));
        assert_eq!(state, before);
    }
}
