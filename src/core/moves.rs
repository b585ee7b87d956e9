//! Checker move representation.
//!
//! Moves are short-lived values: the generator produces them, the applier
//! consumes them. They are `Copy` and hashable so candidate sets can be
//! de-duplicated cheaply.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// Where a checker moves from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Source {
    /// Re-entering from the bar.
    Bar,
    /// A board point index (0..24).
    Point(u8),
}

/// Where a checker moves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dest {
    /// A board point index (0..24).
    Point(u8),
    /// Removed from the board.
    BearOff,
}

/// A single half-move using one die.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Source,
    pub to: Dest,
    /// Die value this move consumes (1..=6).
    pub die: u8,
    /// Lands on a lone opponent checker.
    pub hits: bool,
}

impl Move {
    /// Whether the checker enters from the bar.
    #[must_use]
    pub fn is_entry(&self) -> bool {
        self.from == Source::Bar
    }

    /// Whether the checker is borne off.
    #[must_use]
    pub fn is_bear_off(&self) -> bool {
        self.to == Dest::BearOff
    }

    /// Key used for de-duplication.
    #[must_use]
    pub fn key(&self) -> (Source, Dest, u8) {
        (self.from, self.to, self.die)
    }

    /// Standard notation from the mover's perspective, e.g. `bar/20*`, `6/off`.
    ///
    /// ```
    /// use backgammon_engine::core::{Color, Dest, Move, Source};
    ///
    /// let mv = Move { from: Source::Point(12), to: Dest::Point(7), die: 5, hits: false };
    /// assert_eq!(mv.notation(Color::White), "13/8");
    /// ```
    #[must_use]
    pub fn notation(&self, mover: Color) -> String {
        let side = mover.side();
        let from = match self.from {
            Source::Bar => "bar".to_string(),
            Source::Point(p) => side.pip(p as usize).to_string(),
        };
        let to = match self.to {
            Dest::BearOff => "off".to_string(),
            Dest::Point(p) => side.pip(p as usize).to_string(),
        };
        let hit = if self.hits { "*" } else { "" };
        format!("{from}/{to}{hit}")
    }
}
