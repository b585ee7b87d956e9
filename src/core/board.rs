//! Board representation: 24 points, the bar, and the bear-off trays.
//!
//! The board is a fixed-size `Copy` value, so speculative move application
//! (forced-die resolution, AI lookahead) copies it in constant time.
//!
//! ## Invariants
//!
//! - A point never holds checkers of both colors; an empty point has no color.
//! - For each color: checkers on points + bar + borne off == 15.
//!
//! `Board::validate` checks both.

use serde::{Deserialize, Serialize};

use super::color::{Color, ColorMap, BAR_PIPS, CHECKERS_PER_COLOR, POINT_COUNT};

/// A single board point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Number of checkers on the point.
    pub checkers: u8,
    /// Owner of the checkers, `None` when empty.
    pub color: Option<Color>,
}

impl Point {
    /// An empty point.
    pub const EMPTY: Point = Point {
        checkers: 0,
        color: None,
    };

    /// A point holding `checkers` of `color`.
    #[must_use]
    pub const fn new(color: Color, checkers: u8) -> Self {
        if checkers == 0 {
            Self::EMPTY
        } else {
            Self {
                checkers,
                color: Some(color),
            }
        }
    }

    /// Number of checkers of `color` on this point.
    #[must_use]
    pub fn count(&self, color: Color) -> u8 {
        if self.color == Some(color) {
            self.checkers
        } else {
            0
        }
    }

    /// Two or more checkers of the opponent of `color`.
    #[must_use]
    pub fn is_blocked_for(&self, color: Color) -> bool {
        self.count(color.opponent()) >= 2
    }

    /// Exactly one checker of `color`.
    #[must_use]
    pub fn is_blot_of(&self, color: Color) -> bool {
        self.count(color) == 1
    }
}

/// Full board position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Points indexed 0..24.
    pub points: [Point; POINT_COUNT],
    /// Checkers waiting to re-enter.
    pub bar: ColorMap<u8>,
    /// Checkers permanently removed.
    pub borne_off: ColorMap<u8>,
}

/// Invariant violation found by `Board::validate`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardViolation {
    /// Checker total for a color is not 15.
    CheckerCount { color: Color, total: u32 },
    /// A point has a color but no checkers, or checkers but no color.
    InconsistentPoint { index: usize },
}

impl Board {
    /// A board with no checkers anywhere.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            points: [Point::EMPTY; POINT_COUNT],
            bar: ColorMap::default(),
            borne_off: ColorMap::default(),
        }
    }

    /// Standard starting layout.
    ///
    /// White: 2 on index 23, 5 on 12, 3 on 7, 5 on 5.
    /// Black mirrors it: 2 on 0, 5 on 11, 3 on 16, 5 on 18.
    #[must_use]
    pub fn starting() -> Self {
        Self::from_layout(
            &[(23, 2), (12, 5), (7, 3), (5, 5)],
            &[(0, 2), (11, 5), (16, 3), (18, 5)],
        )
    }

    /// Build a board from `(index, checkers)` placements per color.
    ///
    /// Bar and bear-off start empty; set them directly for test positions.
    #[must_use]
    pub fn from_layout(white: &[(usize, u8)], black: &[(usize, u8)]) -> Self {
        let mut board = Self::empty();
        for &(index, checkers) in white {
            board.points[index] = Point::new(Color::White, checkers);
        }
        for &(index, checkers) in black {
            board.points[index] = Point::new(Color::Black, checkers);
        }
        board
    }

    /// Checkers of `color` on the points (excludes bar and bear-off).
    #[must_use]
    pub fn checkers_on_points(&self, color: Color) -> u32 {
        self.points.iter().map(|p| p.count(color) as u32).sum()
    }

    /// Total checkers of `color` across points, bar, and bear-off.
    #[must_use]
    pub fn total_checkers(&self, color: Color) -> u32 {
        self.checkers_on_points(color) + self.bar[color] as u32 + self.borne_off[color] as u32
    }

    /// Indices of points holding `color`.
    pub fn occupied_by(&self, color: Color) -> impl Iterator<Item = usize> + '_ {
        (0..POINT_COUNT).filter(move |&i| self.points[i].count(color) > 0)
    }

    /// Pip count: distance every checker must travel to bear off.
    #[must_use]
    pub fn pip_count(&self, color: Color) -> u32 {
        let side = color.side();
        let on_points: u32 = self
            .occupied_by(color)
            .map(|i| side.pip(i) * self.points[i].checkers as u32)
            .sum();
        on_points + self.bar[color] as u32 * BAR_PIPS
    }

    /// Checkers of `color` outside its home board, bar included.
    #[must_use]
    pub fn checkers_outside_home(&self, color: Color) -> u32 {
        let side = color.side();
        let on_points: u32 = self
            .occupied_by(color)
            .filter(|&i| !side.is_home(i))
            .map(|i| self.points[i].checkers as u32)
            .sum();
        on_points + self.bar[color] as u32
    }

    /// Every remaining checker of `color` is in its home board.
    #[must_use]
    pub fn all_home(&self, color: Color) -> bool {
        self.checkers_outside_home(color) == 0
    }

    /// Occupied point of `color` furthest from its bear-off edge.
    #[must_use]
    pub fn furthest_checker(&self, color: Color) -> Option<usize> {
        let side = color.side();
        self.occupied_by(color).max_by_key(|&i| side.pip(i))
    }

    /// Number of points holding exactly one checker of `color`.
    #[must_use]
    pub fn blot_count(&self, color: Color) -> u32 {
        self.points.iter().filter(|p| p.is_blot_of(color)).count() as u32
    }

    /// Take one checker off `index`, clearing the owner at zero.
    pub(crate) fn lift(&mut self, index: usize) {
        let point = &mut self.points[index];
        point.checkers = point.checkers.saturating_sub(1);
        if point.checkers == 0 {
            point.color = None;
        }
    }

    /// Place one checker of `color` on `index`.
    ///
    /// A lone opponent checker there is sent to its bar first.
    /// Returns true if a checker was hit.
    pub(crate) fn land(&mut self, index: usize, color: Color) -> bool {
        let opponent = color.opponent();
        let hit = self.points[index].is_blot_of(opponent);
        if hit {
            self.points[index] = Point::EMPTY;
            self.bar[opponent] += 1;
        }
        let point = &mut self.points[index];
        point.checkers += 1;
        point.color = Some(color);
        hit
    }

    /// Check the board invariants.
    pub fn validate(&self) -> Result<(), BoardViolation> {
        for (index, point) in self.points.iter().enumerate() {
            if (point.checkers == 0) != point.color.is_none() {
                return Err(BoardViolation::InconsistentPoint { index });
            }
        }
        for color in Color::ALL {
            let total = self.total_checkers(color);
            if total != CHECKERS_PER_COLOR as u32 {
                return Err(BoardViolation::CheckerCount { color, total });
            }
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_layout_is_valid() {
        let board = Board::starting();
        assert_eq!(board.validate(), Ok(()));
        assert_eq!(board.points[23], Point::new(Color::White, 2));
        assert_eq!(board.points[0], Point::new(Color::Black, 2));
    }

    #[test]
    fn test_starting_pip_counts() {
        let board = Board::starting();
        assert_eq!(board.pip_count(Color::White), 167);
        assert_eq!(board.pip_count(Color::Black), 167);
    }

    #[test]
    fn test_point_helpers() {
        let point = Point::new(Color::Black, 1);
        assert!(point.is_blot_of(Color::Black));
        assert!(!point.is_blocked_for(Color::White));
        assert_eq!(point.count(Color::White), 0);

        let made = Point::new(Color::Black, 2);
        assert!(made.is_blocked_for(Color::White));
        assert!(!made.is_blocked_for(Color::Black));

        assert_eq!(Point::new(Color::White, 0), Point::EMPTY);
    }

    #[test]
    fn test_land_hits_blot() {
        let mut board = Board::from_layout(&[(10, 1)], &[(8, 1)]);
        let hit = board.land(8, Color::White);

        assert!(hit);
        assert_eq!(board.points[8], Point::new(Color::White, 1));
        assert_eq!(board.bar[Color::Black], 1);
    }

    #[test]
    fn test_lift_clears_color() {
        let mut board = Board::from_layout(&[(4, 1)], &[]);
        board.lift(4);
        assert_eq!(board.points[4], Point::EMPTY);
    }

    #[test]
    fn test_furthest_checker() {
        let board = Board::from_layout(&[(1, 3), (4, 2)], &[(19, 1), (22, 4)]);
        assert_eq!(board.furthest_checker(Color::White), Some(4));
        assert_eq!(board.furthest_checker(Color::Black), Some(19));
    }

    #[test]
    fn test_all_home() {
        let mut board = Board::from_layout(&[(0, 10), (5, 5)], &[(18, 15)]);
        assert!(board.all_home(Color::White));
        assert!(board.all_home(Color::Black));

        board.points[5].checkers = 4;
        board.bar[Color::White] = 1;
        assert!(!board.all_home(Color::White));
    }

    #[test]
    fn test_validate_detects_bad_count() {
        let board = Board::from_layout(&[(0, 14)], &[(18, 15)]);
        assert_eq!(
            board.validate(),
            Err(BoardViolation::CheckerCount {
                color: Color::White,
                total: 14
            })
        );
    }

    #[test]
    fn test_serialization() {
        let board = Board::starting();
        let json = serde_json::to_string(&board).unwrap();
        let restored: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, restored);
    }
}
