//! Die and side definitions for the asymmetric combat dice.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Number of faces every die carries.
pub const SIDES_PER_DIE: usize = 6;

/// One face of a die: the attribute values scored when it lands face up.
///
/// A miss face nullifies the roll for attack statistics, so construction
/// paths normalize a miss side to all-zero attributes; stored values on a
/// miss side never leak into a statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Side {
    #[serde(default)]
    pub shields: u8,
    #[serde(default)]
    pub surges: u8,
    #[serde(default)]
    pub hearts: u8,
    #[serde(default)]
    pub range: u8,
    #[serde(default)]
    pub miss: bool,
}

impl Side {
    /// The miss face: no attribute contributes anything.
    #[must_use]
    pub const fn miss() -> Self {
        Self {
            shields: 0,
            surges: 0,
            hearts: 0,
            range: 0,
            miss: true,
        }
    }

    /// A copy with the miss invariant applied: a miss side carries zeroes.
    #[must_use]
    pub const fn normalized(self) -> Self {
        if self.miss { Self::miss() } else { self }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.miss {
            return write!(f, "X");
        }
        let mut parts: Vec<String> = Vec::new();
        if self.shields > 0 {
            parts.push("▢".repeat(usize::from(self.shields)));
        }
        if self.range > 0 {
            parts.push(self.range.to_string());
        }
        if self.hearts > 0 {
            parts.push("♥".repeat(usize::from(self.hearts)));
        }
        if self.surges > 0 {
            parts.push("☇".repeat(usize::from(self.surges)));
        }
        write!(f, "|{}|", parts.join(" "))
    }
}

/// Errors raised when a die definition violates its invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DieError {
    #[error("a die needs exactly {SIDES_PER_DIE} sides (got {count})")]
    WrongSideCount { count: usize },
}

/// A named die with exactly six equally likely faces.
///
/// `order` is a stable tie-break used when sorting combinations for
/// display; it carries no probability weight.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Die {
    name: String,
    code: String,
    sides: [Side; SIDES_PER_DIE],
    order: i32,
}

impl Die {
    /// Build a die from its face list.
    ///
    /// # Errors
    ///
    /// Returns `DieError::WrongSideCount` unless exactly six sides are
    /// supplied.
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        sides: Vec<Side>,
        order: i32,
    ) -> Result<Self, DieError> {
        let count = sides.len();
        let sides: [Side; SIDES_PER_DIE] = sides
            .try_into()
            .map_err(|_| DieError::WrongSideCount { count })?;
        Ok(Self {
            name: name.into(),
            code: code.into(),
            sides: sides.map(Side::normalized),
            order,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub const fn sides(&self) -> &[Side; SIDES_PER_DIE] {
        &self.sides
    }

    /// Display-sort tie-break key.
    #[must_use]
    pub const fn order(&self) -> i32 {
        self.order
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let faces: Vec<String> = self.sides.iter().map(ToString::to_string).collect();
        write!(f, "{{{}: {}}}", self.name, faces.join("-"))
    }
}
