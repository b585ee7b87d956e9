//! Doubling-cube decisions.
//!
//! Offering is gated by the same eligibility check the reducer enforces, so
//! the advisor never proposes a double `dispatch` would reject. Accepting is
//! judged from the opponent's side, since the offer is made on the
//! offerer's turn.

use crate::core::{Board, Color, Difficulty, GameRng, GameState};
use crate::rules::can_offer_double;

const PIP_WEIGHT: f64 = 0.01;
const BORNE_OFF_WEIGHT: f64 = 0.02;
const BAR_WEIGHT: f64 = 0.05;

/// Hard tier offers only inside this win-probability window; above it the
/// position is worth playing on for a gammon.
const DOUBLE_WINDOW: (f64, f64) = (0.70, 0.90);

/// Equity credit for owning the cube after taking.
const CUBE_OWNERSHIP_BONUS: f64 = 0.03;

/// Pip lead of `color` over its opponent. Negative when trailing.
#[must_use]
pub fn pip_lead(board: &Board, color: Color) -> i64 {
    i64::from(board.pip_count(color.opponent())) - i64::from(board.pip_count(color))
}

/// Rough chance that `color` wins from here, clamped to `[0.05, 0.95]`.
///
/// Linear in pip lead, borne-off difference, and bar difference.
#[must_use]
pub fn win_probability(state: &GameState, color: Color) -> f64 {
    let board = &state.board;
    let opponent = color.opponent();
    let off = f64::from(board.borne_off[color]) - f64::from(board.borne_off[opponent]);
    let bar = f64::from(board.bar[opponent]) - f64::from(board.bar[color]);
    let p = 0.5
        + PIP_WEIGHT * pip_lead(board, color) as f64
        + BORNE_OFF_WEIGHT * off
        + BAR_WEIGHT * bar;
    p.clamp(0.05, 0.95)
}

/// Both sides have every checker home and nothing on the bar.
#[must_use]
pub fn is_bear_off_race(board: &Board) -> bool {
    Color::ALL.into_iter().all(|c| board.all_home(c))
}

/// Whether the player on turn should offer a double.
pub fn should_double(state: &GameState, difficulty: Difficulty, rng: &mut GameRng) -> bool {
    if !can_offer_double(state) {
        return false;
    }
    let color = state.current_player;
    let board = &state.board;
    let lead = pip_lead(board, color);

    match difficulty {
        Difficulty::Easy => lead > 0 && rng.gen_bool(0.25),
        Difficulty::Normal => {
            let bar_advantage =
                i64::from(board.bar[color.opponent()]) - i64::from(board.bar[color]);
            lead >= 20 || (lead >= 10 && bar_advantage >= 1)
        }
        Difficulty::Hard => {
            if is_bear_off_race(board) {
                return lead > 15;
            }
            let p = win_probability(state, color);
            (DOUBLE_WINDOW.0..=DOUBLE_WINDOW.1).contains(&p)
        }
    }
}

/// Whether the player facing a double should take it.
///
/// The offer is pending on the offerer's turn, so the acceptor is the
/// player not on turn.
pub fn should_accept_double(state: &GameState, difficulty: Difficulty, rng: &mut GameRng) -> bool {
    let p = win_probability(state, state.opponent());
    match difficulty {
        Difficulty::Easy => p > 0.20 || rng.gen_bool(0.30),
        Difficulty::Normal => p >= 0.25,
        Difficulty::Hard => p + CUBE_OWNERSHIP_BONUS >= 0.22,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Action, GameConfig, Phase};
    use crate::rules::dispatch;

    fn position(white: &[(usize, u8)], black: &[(usize, u8)]) -> GameState {
        GameState::at_position(
            GameConfig::default(),
            Board::from_layout(white, black),
            Color::White,
        )
    }

    #[test]
    fn test_even_start() {
        let state = GameState::default();
        assert_eq!(pip_lead(&state.board, Color::White), 0);
        assert_eq!(win_probability(&state, Color::White), 0.5);
    }

    #[test]
    fn test_probability_clamped() {
        // White 90 pips, Black 360
        let state = position(&[(5, 15)], &[(0, 15)]);
        assert_eq!(win_probability(&state, Color::White), 0.95);
        assert_eq!(win_probability(&state, Color::Black), 0.05);
    }

    #[test]
    fn test_ineligible_never_doubles() {
        let state = position(&[(5, 15)], &[(0, 15)]).with_roll(3, 1);
        let mut rng = GameRng::new(0);
        for difficulty in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
            assert!(!should_double(&state, difficulty, &mut rng));
        }
    }

    #[test]
    fn test_normal_needs_lead() {
        let mut rng = GameRng::new(0);
        assert!(!should_double(&GameState::default(), Difficulty::Normal, &mut rng));
        assert!(should_double(
            &position(&[(5, 15)], &[(0, 15)]),
            Difficulty::Normal,
            &mut rng
        ));
    }

    #[test]
    fn test_normal_bar_advantage_lowers_threshold() {
        let mut rng = GameRng::new(0);

        // White 90 pips; Black 75 on the board plus 25 on the bar
        let mut state = position(&[(5, 15)], &[(19, 13), (14, 1)]);
        state.board.bar[Color::Black] = 1;
        assert_eq!(pip_lead(&state.board, Color::White), 10);
        assert!(should_double(&state, Difficulty::Normal, &mut rng));

        // Lead of 15 with nobody on the bar
        let state = position(&[(5, 15)], &[(19, 9), (14, 6)]);
        assert_eq!(pip_lead(&state.board, Color::White), 15);
        assert!(!should_double(&state, Difficulty::Normal, &mut rng));
    }

    #[test]
    fn test_hard_too_good_to_double() {
        let state = position(&[(5, 15)], &[(0, 15)]);
        assert!(!should_double(&state, Difficulty::Hard, &mut GameRng::new(0)));
    }

    #[test]
    fn test_hard_doubles_in_window() {
        // Lead of 25 pips: p = 0.75
        let state = position(&[(5, 15)], &[(16, 14), (21, 1)]);
        assert_eq!(pip_lead(&state.board, Color::White), 25);
        assert!(should_double(&state, Difficulty::Hard, &mut GameRng::new(0)));
    }

    #[test]
    fn test_hard_bear_off_race_uses_pip_lead() {
        let mut rng = GameRng::new(0);
        // 15 pips vs 90
        assert!(should_double(
            &position(&[(0, 15)], &[(18, 15)]),
            Difficulty::Hard,
            &mut rng
        ));
        // 15 vs 15
        assert!(!should_double(
            &position(&[(0, 15)], &[(23, 15)]),
            Difficulty::Hard,
            &mut rng
        ));
    }

    #[test]
    fn test_accept_thresholds() {
        // Black trails by 28 pips: p = 0.22 for the taker
        let state = position(&[(5, 15)], &[(16, 14), (18, 1)]);
        let state = dispatch(&state, &Action::OfferDouble).unwrap();
        assert_eq!(state.phase, Phase::DoubleOffered);

        let mut rng = GameRng::new(0);
        assert!(should_accept_double(&state, Difficulty::Easy, &mut rng));
        assert!(!should_accept_double(&state, Difficulty::Normal, &mut rng));
        assert!(should_accept_double(&state, Difficulty::Hard, &mut rng));
    }

    #[test]
    fn test_hopeless_take_declined() {
        let state = position(&[(5, 15)], &[(0, 15)]);
        let mut rng = GameRng::new(0);
        assert!(!should_accept_double(&state, Difficulty::Normal, &mut rng));
        assert!(!should_accept_double(&state, Difficulty::Hard, &mut rng));
    }
}
