//! Dice for one turn and the external dice source seam.
//!
//! A roll of two different values yields two half-moves; doubles expand to
//! four identical entries. `values` and `used` always have equal length.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Dice values for the current turn and which of them are spent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dice {
    values: SmallVec<[u8; 4]>,
    used: SmallVec<[bool; 4]>,
}

impl Dice {
    /// No dice (between turns).
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Dice for a roll of `a` and `b`. Doubles expand to four entries.
    #[must_use]
    pub fn from_roll(a: u8, b: u8) -> Self {
        let values: SmallVec<[u8; 4]> = if a == b {
            SmallVec::from_slice(&[a; 4])
        } else {
            SmallVec::from_slice(&[a, b])
        };
        let used = SmallVec::from_elem(false, values.len());
        Self { values, used }
    }

    /// All rolled values, spent or not.
    #[must_use]
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Parallel spent flags.
    #[must_use]
    pub fn used(&self) -> &[bool] {
        &self.used
    }

    /// Whether the turn has dice at all.
    #[must_use]
    pub fn is_rolled(&self) -> bool {
        !self.values.is_empty()
    }

    /// Unspent values in roll order.
    #[must_use]
    pub fn remaining(&self) -> SmallVec<[u8; 4]> {
        self.values
            .iter()
            .zip(self.used.iter())
            .filter(|(_, used)| !**used)
            .map(|(v, _)| *v)
            .collect()
    }

    /// Number of unspent dice.
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.used.iter().filter(|&&u| !u).count()
    }

    /// Distinct unspent values, ascending.
    #[must_use]
    pub fn distinct_remaining(&self) -> SmallVec<[u8; 4]> {
        let mut values = self.remaining();
        values.sort_unstable();
        values.dedup();
        values
    }

    /// Check whether an unspent die of exactly `value` exists.
    #[must_use]
    pub fn has_unused(&self, value: u8) -> bool {
        self.find_unused(|v| v == value).is_some()
    }

    /// Mark one die spent for a move of `value` pips.
    ///
    /// An exact match is preferred. When `allow_higher` is set (bearing off),
    /// the smallest unspent die above `value` is used instead.
    /// Returns the slot that was spent.
    pub fn spend(&mut self, value: u8, allow_higher: bool) -> Option<usize> {
        let slot = self.find_unused(|v| v == value).or_else(|| {
            if !allow_higher {
                return None;
            }
            self.values
                .iter()
                .enumerate()
                .filter(|&(i, &v)| !self.used[i] && v > value)
                .min_by_key(|&(_, &v)| v)
                .map(|(i, _)| i)
        })?;
        self.used[slot] = true;
        Some(slot)
    }

    fn find_unused(&self, pred: impl Fn(u8) -> bool) -> Option<usize> {
        (0..self.values.len()).find(|&i| !self.used[i] && pred(self.values[i]))
    }
}

/// Source of dice rolls.
///
/// The engine only consumes already-resolved values; whatever produces them
/// (seeded RNG, commit-reveal service, scripted test) sits behind this trait.
pub trait DiceSource {
    /// Produce the next roll as two values in 1..=6.
    fn roll(&mut self) -> (u8, u8);
}

/// Scripted dice for tests and replays.
///
/// Cycles through the script once exhausted.
#[derive(Clone, Debug)]
pub struct FixedDice {
    script: VecDeque<(u8, u8)>,
}

impl FixedDice {
    /// Create from a non-empty list of rolls.
    #[must_use]
    pub fn new(rolls: &[(u8, u8)]) -> Self {
        assert!(!rolls.is_empty(), "FixedDice needs at least one roll");
        Self {
            script: rolls.iter().copied().collect(),
        }
    }
}

impl DiceSource for FixedDice {
    fn roll(&mut self) -> (u8, u8) {
        let next = self.script.pop_front().unwrap_or((1, 2));
        self.script.push_back(next);
        next
    }
}
