//! Game end detection and scoring.

use crate::core::{Board, Color, Difficulty, WinType, CHECKERS_PER_COLOR};

/// Whether either color has borne off all its checkers.
#[must_use]
pub fn check_game_over(board: &Board) -> bool {
    bear_off_winner(board).is_some()
}

/// The color that has borne off all its checkers, if any.
#[must_use]
pub fn bear_off_winner(board: &Board) -> Option<Color> {
    Color::ALL
        .into_iter()
        .find(|&c| board.borne_off[c] >= CHECKERS_PER_COLOR)
}

/// Classify a win by the loser's position.
///
/// - `Normal`: the loser has borne off at least one checker.
/// - `Backgammon`: none borne off and a checker on the bar or in the
///   winner's home board.
/// - `Gammon`: none borne off otherwise.
#[must_use]
pub fn detect_win_type(board: &Board, loser: Color) -> WinType {
    if board.borne_off[loser] > 0 {
        return WinType::Normal;
    }
    let winner_home = loser.opponent().side();
    let in_winner_home = board.occupied_by(loser).any(|i| winner_home.is_home(i));
    if board.bar[loser] > 0 || in_winner_home {
        WinType::Backgammon
    } else {
        WinType::Gammon
    }
}

/// Points awarded: win type x cube value x difficulty bonus.
#[must_use]
pub fn score(win_type: WinType, cube_value: u32, difficulty: Difficulty) -> u32 {
    win_type.multiplier() * cube_value * difficulty.bonus()
}
