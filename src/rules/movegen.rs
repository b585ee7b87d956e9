//! Legal move generation.
//!
//! ## Pipeline
//!
//! 1. **Bar priority**: with a checker on the bar, only entries are legal.
//! 2. **Raw union**: per occupied point and per distinct unused die, regular
//!    moves plus bear-offs when every checker is home.
//! 3. **Dice usage**: the raw union is narrowed so the player uses as many
//!    dice as the position allows (both dice, the larger die, or the most
//!    doubles).
//! 4. **De-duplication** by `(from, to, die)`.
//!
//! Step 3 probes hypothetical futures by applying candidates with
//! `apply_move`, which never touches the state it is given.

use rustc_hash::FxHashSet;

use crate::core::{Board, Color, Dest, GameState, Move, Phase, Source};

use super::apply::apply_move;

/// All legal moves for the player on turn.
///
/// Returns an empty list outside the moving phase or when no die can be
/// played.
#[must_use]
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    let raw = raw_moves(state);
    if raw.is_empty() {
        return raw;
    }
    dedup(enforce_dice_usage(state, raw))
}

/// Whether the player on turn can still move.
#[must_use]
pub fn has_legal_moves(state: &GameState) -> bool {
    // The dice rule only narrows a non-empty raw set, never empties it
    !raw_moves(state).is_empty()
}

/// Legal moves starting at `from`.
#[must_use]
pub fn legal_moves_from(state: &GameState, from: Source) -> Vec<Move> {
    legal_moves(state)
        .into_iter()
        .filter(|m| m.from == from)
        .collect()
}

/// Bar entries for the player on turn, ignoring the dice-usage rule.
///
/// One move per distinct unused die whose entry point isn't blocked.
#[must_use]
pub fn legal_bar_entries(state: &GameState) -> Vec<Move> {
    let color = state.current_player;
    let side = color.side();
    let board = &state.board;

    state
        .dice
        .distinct_remaining()
        .into_iter()
        .filter_map(|die| {
            let entry = side.entry_point(die);
            let point = board.points[entry];
            (!point.is_blocked_for(color)).then(|| Move {
                from: Source::Bar,
                to: Dest::Point(entry as u8),
                die,
                hits: point.is_blot_of(color.opponent()),
            })
        })
        .collect()
}

/// Whether `color` may bear off: nothing on the bar, nothing outside home.
#[must_use]
pub fn can_bear_off(board: &Board, color: Color) -> bool {
    board.all_home(color)
}

/// Moves available before the dice-usage rule is applied.
pub(crate) fn raw_moves(state: &GameState) -> Vec<Move> {
    if state.phase != Phase::Moving || state.dice.remaining_count() == 0 {
        return Vec::new();
    }
    if state.board.bar[state.current_player] > 0 {
        return legal_bar_entries(state);
    }

    let color = state.current_player;
    let side = color.side();
    let board = &state.board;
    let dice = state.dice.distinct_remaining();
    let bearing_off = can_bear_off(board, color);
    let furthest = board.furthest_checker(color);

    let mut moves = Vec::new();
    for from in board.occupied_by(color) {
        for &die in &dice {
            match side.advance(from, die) {
                Some(to) => {
                    let point = board.points[to];
                    if point.is_blocked_for(color) {
                        continue;
                    }
                    moves.push(Move {
                        from: Source::Point(from as u8),
                        to: Dest::Point(to as u8),
                        die,
                        hits: point.is_blot_of(color.opponent()),
                    });
                }
                None if bearing_off => {
                    // Overshooting dice may only retire the rearmost checker
                    let exact = side.pip(from) == die as u32;
                    if exact || furthest == Some(from) {
                        moves.push(Move {
                            from: Source::Point(from as u8),
                            to: Dest::BearOff,
                            die,
                            hits: false,
                        });
                    }
                }
                None => {}
            }
        }
    }
    moves
}

/// Narrow the raw move set so the turn uses as many dice as possible.
fn enforce_dice_usage(state: &GameState, raw: Vec<Move>) -> Vec<Move> {
    let remaining = state.dice.remaining_count();
    if remaining <= 1 {
        return raw;
    }

    let distinct = state.dice.distinct_remaining();
    if distinct.len() == 1 {
        return keep_deepest(state, raw);
    }

    let (low, high) = (distinct[0], distinct[distinct.len() - 1]);

    // Moves after which the other die is still playable
    let both: Vec<Move> = raw
        .iter()
        .copied()
        .filter(|m| {
            apply_move(state, m)
                .map(|next| !raw_moves(&next).is_empty())
                .unwrap_or(false)
        })
        .collect();
    if !both.is_empty() {
        return both;
    }

    let with_high: Vec<Move> = raw.iter().copied().filter(|m| m.die == high).collect();
    if !with_high.is_empty() {
        return with_high;
    }
    raw.into_iter().filter(|m| m.die == low).collect()
}

/// Under doubles, keep the first moves that allow the most dice to be played.
///
/// Several first moves may tie; all of them stay legal.
fn keep_deepest(state: &GameState, raw: Vec<Move>) -> Vec<Move> {
    let scored: Vec<(Move, usize)> = raw
        .into_iter()
        .map(|m| {
            let depth = apply_move(state, &m)
                .map(|next| 1 + max_dice_playable(&next))
                .unwrap_or(0);
            (m, depth)
        })
        .collect();

    let best = scored.iter().map(|&(_, d)| d).max().unwrap_or(0);
    scored
        .into_iter()
        .filter(|&(_, d)| d == best)
        .map(|(m, _)| m)
        .collect()
}

/// Most dice that can still be played from `state` in any sequence.
fn max_dice_playable(state: &GameState) -> usize {
    let limit = state.dice.remaining_count();
    let mut best = 0;
    for m in raw_moves(state) {
        let Ok(next) = apply_move(state, &m) else {
            continue;
        };
        best = best.max(1 + max_dice_playable(&next));
        if best == limit {
            break;
        }
    }
    best
}

fn dedup(moves: Vec<Move>) -> Vec<Move> {
    let mut seen = FxHashSet::default();
    moves.into_iter().filter(|m| seen.insert(m.key())).collect()
}
