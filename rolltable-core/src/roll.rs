//! Exhaustive enumeration of joint roll outcomes.

use smallvec::SmallVec;
use thiserror::Error;

use crate::combo::Combination;
use crate::dice::{SIDES_PER_DIE, Side};

/// Sides chosen for one joint outcome, stored inline for combinations of
/// up to six dice.
pub type SideSet = SmallVec<[Side; SIDES_PER_DIE]>;

/// Errors raised when enumeration is requested on an unusable combination.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RollError {
    #[error("cannot enumerate the rolls of an empty combination")]
    EmptyCombination,
}

/// One joint result of rolling every die in a combination once, in the
/// combination's die order.
///
/// The aggregate queries sum unconditionally; callers apply the
/// miss-handling policy of whichever statistic they compute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Outcome {
    sides: SideSet,
}

impl Outcome {
    #[must_use]
    pub fn sides(&self) -> &[Side] {
        &self.sides
    }

    /// True when any die in the roll landed on its miss face.
    #[must_use]
    pub fn is_miss(&self) -> bool {
        self.sides.iter().any(|side| side.miss)
    }

    #[must_use]
    pub fn total_range(&self) -> u32 {
        self.sides.iter().map(|side| u32::from(side.range)).sum()
    }

    #[must_use]
    pub fn total_hearts(&self) -> u32 {
        self.sides.iter().map(|side| u32::from(side.hearts)).sum()
    }

    #[must_use]
    pub fn total_shields(&self) -> u32 {
        self.sides.iter().map(|side| u32::from(side.shields)).sum()
    }

    #[must_use]
    pub fn total_surges(&self) -> u32 {
        self.sides.iter().map(|side| u32::from(side.surges)).sum()
    }

    /// Surges with a missed roll forced to zero.
    #[must_use]
    pub fn effective_surges(&self) -> u32 {
        if self.is_miss() { 0 } else { self.total_surges() }
    }

    /// Hearts with a missed roll forced to zero.
    #[must_use]
    pub fn effective_hearts(&self) -> u32 {
        if self.is_miss() { 0 } else { self.total_hearts() }
    }
}

impl Combination {
    /// Every possible joint outcome, one side chosen per die: exactly
    /// `6^n` outcomes for `n` dice, no duplicates.
    ///
    /// The sequence is deterministic: the first die varies slowest and the
    /// last die cycles through its faces fastest. Built as an iterative
    /// cross-product fold so deep combinations never grow the call stack.
    ///
    /// # Errors
    ///
    /// Returns `RollError::EmptyCombination` when the combination holds no
    /// dice.
    pub fn enumerate(&self) -> Result<Vec<Outcome>, RollError> {
        if self.is_empty() {
            return Err(RollError::EmptyCombination);
        }

        let mut partials: Vec<SideSet> = vec![SideSet::new()];
        for die in self {
            let mut grown = Vec::with_capacity(partials.len() * SIDES_PER_DIE);
            for partial in &partials {
                for side in die.sides() {
                    let mut next = partial.clone();
                    next.push(*side);
                    grown.push(next);
                }
            }
            partials = grown;
        }

        Ok(partials
            .into_iter()
            .map(|sides| Outcome { sides })
            .collect())
    }
}
