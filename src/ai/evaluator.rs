//! Heuristic position evaluation in three tiers.
//!
//! Scores are from one color's point of view; higher is better for that
//! color. The tiers build on each other:
//!
//! - **Easy**: pip advantage, bar difference, checkers borne off.
//! - **Normal**: adds a flat blot penalty and prime strength.
//! - **Hard**: replaces the blot count with shot-aware exposure and adds
//!   home-board control and bear-off progress.

use crate::core::{Board, Color, Difficulty, GameState, CHECKERS_PER_COLOR};

/// Penalty per blot at the normal tier.
const BLOT_WEIGHT: f64 = -3.0;

/// Exposure weight for a blot within direct range (1-6 pips) or hittable
/// straight from the bar.
const DIRECT_SHOT: f64 = 4.0;

/// Exposure weight for a blot only reachable with both dice (7-12 pips).
const INDIRECT_SHOT: f64 = 1.5;

/// Evaluate the position for `color` at the given tier.
#[must_use]
pub fn evaluate(state: &GameState, color: Color, difficulty: Difficulty) -> f64 {
    evaluate_board(&state.board, color, difficulty)
}

/// Board-only form of `evaluate`.
#[must_use]
pub fn evaluate_board(board: &Board, color: Color, difficulty: Difficulty) -> f64 {
    let base = race_score(board, color);
    match difficulty {
        Difficulty::Easy => base,
        Difficulty::Normal => {
            base + BLOT_WEIGHT * board.blot_count(color) as f64 + prime_score(board, color)
        }
        Difficulty::Hard => {
            base - blot_exposure(board, color)
                + prime_score(board, color)
                + home_board_score(board, color)
                + bear_off_progress(board, color)
        }
    }
}

/// `pipAdvantage + 10 * (oppBar - myBar) + 5 * myBorneOff`.
#[must_use]
pub fn race_score(board: &Board, color: Color) -> f64 {
    let opponent = color.opponent();
    let pip_advantage = board.pip_count(opponent) as f64 - board.pip_count(color) as f64;
    let bar_diff = board.bar[opponent] as f64 - board.bar[color] as f64;
    pip_advantage + 10.0 * bar_diff + 5.0 * board.borne_off[color] as f64
}

/// Longest run of consecutive made points and the total number of made
/// points for `color`.
#[must_use]
pub fn prime_length(board: &Board, color: Color) -> (u32, u32) {
    let mut longest = 0;
    let mut run = 0;
    let mut made = 0;
    for point in &board.points {
        if point.count(color) >= 2 {
            run += 1;
            made += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    (longest, made)
}

/// `3 * longestRun + madePoints`, plus escalating bonuses for 4-, 5- and
/// 6-point primes.
#[must_use]
pub fn prime_score(board: &Board, color: Color) -> f64 {
    let (longest, made) = prime_length(board, color);
    let bonus = match longest {
        0..=3 => 0.0,
        4 => 5.0,
        5 => 12.0,
        _ => 25.0,
    };
    3.0 * longest as f64 + made as f64 + bonus
}

/// Total exposure of `color`'s blots to opponent shots.
///
/// A blot is exposed if the opponent can enter onto it from the bar or has a
/// checker 1-6 pips (direct) or 7-12 pips (combined) behind it. The penalty
/// grows with the blot's distance from home, since a hit there costs more.
#[must_use]
pub fn blot_exposure(board: &Board, color: Color) -> f64 {
    let side = color.side();
    board
        .occupied_by(color)
        .filter(|&p| board.points[p].checkers == 1)
        .map(|p| shot_weight(board, color, p) * (1.0 + side.pip(p) as f64 / 12.0))
        .sum()
}

fn shot_weight(board: &Board, color: Color, blot: usize) -> f64 {
    let opponent = color.opponent();
    let opp_side = opponent.side();

    if board.bar[opponent] > 0 && (1..=6).any(|die| opp_side.entry_point(die) == blot) {
        return DIRECT_SHOT;
    }

    let mut weight: f64 = 0.0;
    for from in board.occupied_by(opponent) {
        // Pips the opponent must travel from `from` to reach the blot
        let distance = (blot as i32 - from as i32) * opp_side.direction as i32;
        match distance {
            1..=6 => return DIRECT_SHOT,
            7..=12 => weight = weight.max(INDIRECT_SHOT),
            _ => {}
        }
    }
    weight
}

/// Home-board control: made home points, weighted toward the bear-off edge,
/// with a bonus once three, four, or five points are closed.
#[must_use]
pub fn home_board_score(board: &Board, color: Color) -> f64 {
    let side = color.side();
    let mut made = 0;
    let mut score = 0.0;
    for point in side.home() {
        if board.points[point].count(color) >= 2 {
            made += 1;
            score += 2.0 + 0.5 * (7 - side.pip(point)) as f64;
        }
    }
    let bonus = match made {
        0..=2 => 0.0,
        3 => 4.0,
        4 => 8.0,
        _ => 15.0,
    };
    score + bonus
}

/// Bear-off progress: checkers off, a flat bonus once everything is home,
/// and extra weight as the count approaches 15.
#[must_use]
pub fn bear_off_progress(board: &Board, color: Color) -> f64 {
    let off = board.borne_off[color] as f64;
    let home_bonus = if board.all_home(color) { 10.0 } else { 0.0 };
    let closing = (off - 10.0).max(0.0) * 4.0;
    let finished = if board.borne_off[color] >= CHECKERS_PER_COLOR {
        50.0
    } else {
        0.0
    };
    2.0 * off + home_bonus + closing + finished
}
