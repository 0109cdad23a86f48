//! Ordered groupings of dice analyzed together as one table row.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::dice::Die;

/// An ordered sequence of dice rolled together. The same die may appear
/// more than once. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combination {
    dice: Vec<Die>,
}

impl Combination {
    #[must_use]
    pub fn new(dice: Vec<Die>) -> Self {
        Self { dice }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    #[must_use]
    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    /// Total order used for table rows: shorter combinations first, ties
    /// broken element-wise by each member die's order key. Combinations
    /// with equal keys keep their input order under a stable sort.
    #[must_use]
    pub fn table_order(&self, other: &Self) -> Ordering {
        self.dice
            .len()
            .cmp(&other.dice.len())
            .then_with(|| {
                self.dice
                    .iter()
                    .zip(&other.dice)
                    .map(|(a, b)| a.order().cmp(&b.order()))
                    .find(|ord| ord.is_ne())
                    .unwrap_or(Ordering::Equal)
            })
    }
}

impl<'a> IntoIterator for &'a Combination {
    type Item = &'a Die;
    type IntoIter = std::slice::Iter<'a, Die>;

    fn into_iter(self) -> Self::IntoIter {
        self.dice.iter()
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: Vec<&str> = self.dice.iter().map(Die::code).collect();
        write!(f, "[{}]", codes.join("+"))
    }
}
