//! Pure move application.
//!
//! `apply_move` returns a new state and never modifies its input, so the
//! generator and the AI can try candidate moves freely.

use crate::core::{Dest, GameState, Move, RuleError, Source, POINT_COUNT};

/// Apply one half-move for the player on turn.
///
/// 1. Spends a die: the exact value if unused, or for a bear-off any larger
///    unused die.
/// 2. Lifts a checker from the bar or the source point.
/// 3. Bears it off, or lands it, sending a lone opponent checker to the bar.
///
/// The phase is left alone; ending the game is the reducer's job.
pub fn apply_move(state: &GameState, mv: &Move) -> Result<GameState, RuleError> {
    let illegal = RuleError::IllegalMove {
        from: mv.from,
        to: mv.to,
    };
    let color = state.current_player;
    let mut next = state.clone();

    next.dice
        .spend(mv.die, mv.is_bear_off())
        .ok_or_else(|| illegal.clone())?;

    match mv.from {
        Source::Bar => {
            if next.board.bar[color] == 0 {
                return Err(illegal);
            }
            next.board.bar[color] -= 1;
        }
        Source::Point(index) => {
            let index = index as usize;
            if index >= POINT_COUNT || next.board.points[index].count(color) == 0 {
                return Err(illegal);
            }
            next.board.lift(index);
        }
    }

    match mv.to {
        Dest::BearOff => next.board.borne_off[color] += 1,
        Dest::Point(index) => {
            let index = index as usize;
            if index >= POINT_COUNT || next.board.points[index].is_blocked_for(color) {
                return Err(illegal);
            }
            next.board.land(index, color);
        }
    }

    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Color, GameConfig, Point};

    #[test]
    fn test_apply_does_not_mutate_input() {
        let state = GameState::default().with_roll(3, 1);
        let mv = Move {
            from: Source::Point(7),
            to: Dest::Point(4),
            die: 3,
            hits: false,
        };

        let next = apply_move(&state, &mv).unwrap();

        assert_eq!(state.board, Board::starting());
        assert_eq!(state.dice.used(), &[false, false]);
        assert_eq!(next.board.points[7], Point::new(Color::White, 2));
        assert_eq!(next.board.points[4], Point::new(Color::White, 1));
        assert_eq!(next.dice.used(), &[true, false]);
    }

    #[test]
    fn test_bar_entry_marks_matching_die() {
        let mut state = GameState::default().with_roll(6, 1);
        state.board.points[5].checkers -= 1;
        state.board.bar[Color::White] = 1;

        let mv = Move {
            from: Source::Bar,
            to: Dest::Point(23),
            die: 1,
            hits: false,
        };
        let next = apply_move(&state, &mv).unwrap();

        assert_eq!(next.dice.used(), &[false, true]);
        assert_eq!(next.dice.remaining().as_slice(), &[6]);
        assert_eq!(next.board.bar[Color::White], 0);
        assert_eq!(next.board.points[23].checkers, 3);
    }

    #[test]
    fn test_hit_sends_blot_to_bar() {
        let board = Board::from_layout(&[(10, 15)], &[(8, 1), (20, 14)]);
        let state = GameState::at_position(GameConfig::default(), board, Color::White)
            .with_roll(2, 5);
        let mv = Move {
            from: Source::Point(10),
            to: Dest::Point(8),
            die: 2,
            hits: true,
        };

        let next = apply_move(&state, &mv).unwrap();

        assert_eq!(next.board.bar[Color::Black], 1);
        assert_eq!(next.board.points[8], Point::new(Color::White, 1));
        assert_eq!(next.board.validate(), Ok(()));
    }

    #[test]
    fn test_bear_off_with_higher_die() {
        let mut board = Board::from_layout(&[(2, 1)], &[(20, 15)]);
        board.borne_off[Color::White] = 14;
        let state = GameState::at_position(GameConfig::default(), board, Color::White)
            .with_roll(6, 5);

        // Move names the distance; the smallest larger die is spent
        let mv = Move {
            from: Source::Point(2),
            to: Dest::BearOff,
            die: 3,
            hits: false,
        };
        let next = apply_move(&state, &mv).unwrap();

        assert_eq!(next.board.borne_off[Color::White], 15);
        assert_eq!(next.dice.used(), &[false, true]);
    }

    #[test]
    fn test_rejects_unavailable_die() {
        let state = GameState::default().with_roll(3, 1);
        let mv = Move {
            from: Source::Point(12),
            to: Dest::Point(10),
            die: 2,
            hits: false,
        };
        assert!(matches!(
            apply_move(&state, &mv),
            Err(RuleError::IllegalMove { .. })
        ));
    }

    #[test]
    fn test_rejects_empty_source() {
        let state = GameState::default().with_roll(3, 1);
        let mv = Move {
            from: Source::Point(9),
            to: Dest::Point(6),
            die: 3,
            hits: false,
        };
        assert!(apply_move(&state, &mv).is_err());
    }

    #[test]
    fn test_rejects_off_board_points() {
        let state = GameState::default().with_roll(3, 1);
        let from_nowhere = Move {
            from: Source::Point(30),
            to: Dest::Point(27),
            die: 3,
            hits: false,
        };
        let to_nowhere = Move {
            from: Source::Point(23),
            to: Dest::Point(24),
            die: 1,
            hits: false,
        };

        assert!(matches!(
            apply_move(&state, &from_nowhere),
            Err(RuleError::IllegalMove { .. })
        ));
        assert!(matches!(
            apply_move(&state, &to_nowhere),
            Err(RuleError::IllegalMove { .. })
        ));
    }
}
