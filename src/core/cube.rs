//! Doubling cube.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// Highest cube value.
pub const MAX_CUBE_VALUE: u32 = 64;

/// Stake multiplier and who may turn it next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DoublingCube {
    /// Current stake (1, 2, 4, ..., 64).
    pub value: u32,
    /// Side that may offer the next double; `None` means either side.
    pub owner: Option<Color>,
}

impl Default for DoublingCube {
    fn default() -> Self {
        Self {
            value: 1,
            owner: None,
        }
    }
}

impl DoublingCube {
    /// Whether `color` holds the right to offer, ignoring the cap.
    #[must_use]
    pub fn may_offer(&self, color: Color) -> bool {
        self.owner.map_or(true, |owner| owner == color)
    }

    /// Whether the cube is below `max` and can still be doubled.
    #[must_use]
    pub fn below(&self, max: u32) -> bool {
        self.value < max
    }

    /// Cube after `acceptor` takes a double: value doubles (capped at `max`),
    /// ownership passes to the acceptor.
    #[must_use]
    pub fn accepted_by(self, acceptor: Color, max: u32) -> Self {
        Self {
            value: (self.value * 2).min(max),
            owner: Some(acceptor),
        }
    }
}
