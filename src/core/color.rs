//! Checker colors and the per-color side table.
//!
//! ## Color
//!
//! The two sides of the board. White moves from point index 23 toward 0,
//! Black from 0 toward 23.
//!
//! ## Side
//!
//! Every direction-dependent formula (movement direction, home range, bar
//! entry point, pip distance) is resolved once per color into a `Side` and
//! looked up from there. Nothing else in the crate branches on color to
//! compute geometry.
//!
//! ## ColorMap
//!
//! Fixed two-slot per-color storage indexed by `Color`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut, RangeInclusive};

/// Number of points on the board.
pub const POINT_COUNT: usize = 24;

/// Checkers per color.
pub const CHECKERS_PER_COLOR: u8 = 15;

/// Pip distance of a checker on the bar.
pub const BAR_PIPS: u32 = 25;

/// A side of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors, White first.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// The other color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Slot index for per-color arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Geometry for this color.
    #[must_use]
    pub fn side(self) -> &'static Side {
        &SIDES[self.index()]
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Direction-dependent geometry for one color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Side {
    /// Index step per pip moved (-1 for White, +1 for Black).
    pub direction: i8,
    /// First point index of the home board (lowest index).
    home_low: u8,
    /// Last point index of the home board (highest index).
    home_high: u8,
    /// Point index reached by entering from the bar with a die of 0.
    /// Entry point for die `d` is `entry_origin + d * direction`.
    entry_origin: i8,
}

static SIDES: [Side; 2] = [
    Side {
        direction: -1,
        home_low: 0,
        home_high: 5,
        entry_origin: 24,
    },
    Side {
        direction: 1,
        home_low: 18,
        home_high: 23,
        entry_origin: -1,
    },
];

impl Side {
    /// Home board point indices.
    #[must_use]
    pub fn home(&self) -> RangeInclusive<usize> {
        self.home_low as usize..=self.home_high as usize
    }

    /// Check whether a point index lies in this color's home board.
    #[must_use]
    pub fn is_home(&self, point: usize) -> bool {
        self.home().contains(&point)
    }

    /// Point index where a checker enters from the bar with the given die.
    ///
    /// `24 - die` for White, `die - 1` for Black.
    #[must_use]
    pub fn entry_point(&self, die: u8) -> usize {
        (self.entry_origin + die as i8 * self.direction) as usize
    }

    /// Pip distance from a point to the bear-off edge (1..=24).
    #[must_use]
    pub fn pip(&self, point: usize) -> u32 {
        BAR_PIPS - (point as i32 - self.entry_origin as i32).unsigned_abs()
    }

    /// Destination after moving `pips` from `point`.
    ///
    /// Returns `None` when the move runs past the bear-off edge.
    #[must_use]
    pub fn advance(&self, point: usize, pips: u8) -> Option<usize> {
        let dest = point as i32 + pips as i32 * self.direction as i32;
        (0..POINT_COUNT as i32).contains(&dest).then_some(dest as usize)
    }
}

/// Per-color storage with O(1) access.
///
/// ```
/// use backgammon_engine::core::{Color, ColorMap};
///
/// let mut bar: ColorMap<u8> = ColorMap::default();
/// bar[Color::Black] += 1;
/// assert_eq!(bar[Color::White], 0);
/// assert_eq!(bar[Color::Black], 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; 2],
}

impl<T> ColorMap<T> {
    /// Create from explicit White and Black values.
    #[must_use]
    pub const fn new(white: T, black: T) -> Self {
        Self {
            data: [white, black],
        }
    }

    /// Iterate over (Color, &T) pairs, White first.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        Color::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        &self.data[color.index()]
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        &mut self.data[color.index()]
    }
}
