//! Game configuration.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::cube::MAX_CUBE_VALUE;

/// Difficulty tier. Selects the AI heuristics and the score bonus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    /// Score multiplier for winning at this difficulty.
    #[must_use]
    pub const fn bonus(self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Normal => 2,
            Difficulty::Hard => 3,
        }
    }
}

/// Per-game settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Difficulty used for scoring.
    pub difficulty: Difficulty,

    /// Color that rolls first.
    pub starting_player: Color,

    /// Cube value at which no further doubles may be offered.
    ///
    /// Read through `cube_cap`, which keeps it a power of two in
    /// `1..=MAX_CUBE_VALUE` even when set directly or deserialized.
    pub max_cube: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            starting_player: Color::White,
            max_cube: MAX_CUBE_VALUE,
        }
    }
}

impl GameConfig {
    /// Set the difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the starting player.
    pub fn with_starting_player(mut self, color: Color) -> Self {
        self.starting_player = color;
        self
    }

    /// Set the cube cap, rounded down to a power of two in
    /// `1..=MAX_CUBE_VALUE`.
    pub fn with_max_cube(mut self, max_cube: u32) -> Self {
        self.max_cube = power_of_two_cap(max_cube);
        self
    }

    /// Effective cube cap.
    #[must_use]
    pub fn cube_cap(&self) -> u32 {
        power_of_two_cap(self.max_cube)
    }
}

fn power_of_two_cap(value: u32) -> u32 {
    let clamped = value.clamp(1, MAX_CUBE_VALUE);
    1 << (u32::BITS - 1 - clamped.leading_zeros())
}
