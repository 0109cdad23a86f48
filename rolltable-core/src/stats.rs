//! Attribute statistics over exhaustively enumerated rolls.
//!
//! One experiment produces one [`ResultTable`]: an average column plus one
//! pass-rate column per threshold, with rows in combination display order.
//! Each attribute carries its own miss-handling policy, including the
//! surge/heart quirk of a hit-count denominator under an all-outcomes
//! predicate.

use thiserror::Error;

use crate::combo::Combination;
use crate::numbers::{u64_to_f64, usize_to_f64};
use crate::roll::{Outcome, RollError};
use crate::table::ResultTable;

/// Errors raised while aggregating one combination's statistics.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatsError {
    #[error(transparent)]
    Roll(#[from] RollError),
    #[error("combination {combination} has no non-miss outcomes to average")]
    EmptyHitSet { combination: String },
}

/// The die attribute an experiment measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Range,
    Surges,
    Hearts,
    Shields,
}

impl Attribute {
    /// Unconditional attribute sum for one outcome.
    #[must_use]
    pub fn total(self, outcome: &Outcome) -> u32 {
        match self {
            Self::Range => outcome.total_range(),
            Self::Surges => outcome.total_surges(),
            Self::Hearts => outcome.total_hearts(),
            Self::Shields => outcome.total_shields(),
        }
    }

    /// Attribute sum with a missed roll forced to zero.
    #[must_use]
    pub fn effective(self, outcome: &Outcome) -> u32 {
        match self {
            Self::Surges => outcome.effective_surges(),
            Self::Hearts => outcome.effective_hearts(),
            Self::Range | Self::Shields => {
                if outcome.is_miss() {
                    0
                } else {
                    self.total(outcome)
                }
            }
        }
    }
}

/// How miss outcomes enter an experiment's denominator and predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissPolicy {
    /// Misses leave both the averages and the threshold pool (range).
    ExcludeMisses,
    /// Misses stay in the threshold pool with their value forced to zero,
    /// while the denominator still counts only non-miss outcomes (surges
    /// and hearts).
    ZeroOnMiss,
    /// Every outcome counts; the miss concept does not apply (shields).
    CountAll,
}

/// Direction of a threshold test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdTest {
    /// Meet or exceed the bar; column headers render as `{t}+`.
    AtLeast,
    /// Stay at or under the bar; headers render right-aligned (attribute
    /// tests, conventionally listed high-to-low).
    AtMost,
}

impl ThresholdTest {
    #[must_use]
    const fn passes(self, value: u32, threshold: u32) -> bool {
        match self {
            Self::AtLeast => value >= threshold,
            Self::AtMost => value <= threshold,
        }
    }

    fn header(self, threshold: u32) -> String {
        match self {
            Self::AtLeast => format!("{threshold}+"),
            Self::AtMost => format!("{threshold:>8}"),
        }
    }
}

/// Everything that parameterizes one experiment table.
///
/// `icon` is an opaque marker the renderer maps to a glyph; it is appended
/// verbatim after the two-decimal average. `None` drops the average column
/// entirely (attribute tests), leaving a blank first header and cell.
#[derive(Debug, Clone, Copy)]
pub struct Experiment<'a> {
    pub title: &'static str,
    pub icon: Option<&'a str>,
    pub attribute: Attribute,
    pub policy: MissPolicy,
    pub test: ThresholdTest,
}

impl<'a> Experiment<'a> {
    #[must_use]
    pub const fn ranges(icon: &'a str) -> Self {
        Self {
            title: "Ranges",
            icon: Some(icon),
            attribute: Attribute::Range,
            policy: MissPolicy::ExcludeMisses,
            test: ThresholdTest::AtLeast,
        }
    }

    #[must_use]
    pub const fn surges(icon: &'a str) -> Self {
        Self {
            title: "Surges",
            icon: Some(icon),
            attribute: Attribute::Surges,
            policy: MissPolicy::ZeroOnMiss,
            test: ThresholdTest::AtLeast,
        }
    }

    #[must_use]
    pub const fn hearts(icon: &'a str) -> Self {
        Self {
            title: "Hearts",
            icon: Some(icon),
            attribute: Attribute::Hearts,
            policy: MissPolicy::ZeroOnMiss,
            test: ThresholdTest::AtLeast,
        }
    }

    #[must_use]
    pub const fn shields(icon: &'a str) -> Self {
        Self {
            title: "Shields",
            icon: Some(icon),
            attribute: Attribute::Shields,
            policy: MissPolicy::CountAll,
            test: ThresholdTest::AtLeast,
        }
    }

    /// Shield total at-or-under a bar, the defender's attribute-test view.
    #[must_use]
    pub const fn attribute_test() -> Experiment<'static> {
        Experiment {
            title: "Attribute tests",
            icon: None,
            attribute: Attribute::Shields,
            policy: MissPolicy::CountAll,
            test: ThresholdTest::AtMost,
        }
    }
}

/// Compute the formatted row for one combination under one experiment:
/// the average cell first (blank for attribute tests), then one pass-rate
/// cell per threshold, formatted `"{:.1}%"`.
///
/// This is the strict surface: callers that must not lose a row get the
/// typed error. The batch [`run_experiment`] wrapper skips and logs
/// instead.
///
/// # Errors
///
/// Forwards `RollError::EmptyCombination`, and returns
/// `StatsError::EmptyHitSet` when every outcome misses under a policy
/// whose denominator is the hit count.
pub fn combination_row(
    experiment: &Experiment<'_>,
    thresholds: &[u32],
    combination: &Combination,
) -> Result<Vec<String>, StatsError> {
    let outcomes = combination.enumerate()?;

    let denominator = match experiment.policy {
        MissPolicy::CountAll => outcomes.len(),
        MissPolicy::ExcludeMisses | MissPolicy::ZeroOnMiss => {
            outcomes.iter().filter(|o| !o.is_miss()).count()
        }
    };
    if denominator == 0 {
        return Err(StatsError::EmptyHitSet {
            combination: combination.to_string(),
        });
    }

    let mut values = Vec::with_capacity(thresholds.len() + 1);
    match experiment.icon {
        Some(icon) => {
            let numerator: u64 = outcomes
                .iter()
                .filter(|o| matches!(experiment.policy, MissPolicy::CountAll) || !o.is_miss())
                .map(|o| u64::from(experiment.attribute.total(o)))
                .sum();
            let average = u64_to_f64(numerator) / usize_to_f64(denominator);
            values.push(format!("{average:.2} {icon}"));
        }
        None => values.push(String::new()),
    }

    for &threshold in thresholds {
        let passes = outcomes
            .iter()
            .filter(|o| outcome_passes(experiment, o, threshold))
            .count();
        let rate = usize_to_f64(passes) * 100.0 / usize_to_f64(denominator);
        values.push(format!("{rate:.1}%"));
    }

    Ok(values)
}

fn outcome_passes(experiment: &Experiment<'_>, outcome: &Outcome, threshold: u32) -> bool {
    let value = match experiment.policy {
        MissPolicy::ExcludeMisses => {
            if outcome.is_miss() {
                return false;
            }
            experiment.attribute.total(outcome)
        }
        MissPolicy::ZeroOnMiss => experiment.attribute.effective(outcome),
        MissPolicy::CountAll => experiment.attribute.total(outcome),
    };
    experiment.test.passes(value, threshold)
}

/// Run one experiment over a combination list and assemble its table.
///
/// Combinations are sorted into display order first. A combination whose
/// row fails (empty combination, empty hit set) is skipped with a warning
/// so one bad entry never aborts the whole table.
#[must_use]
pub fn run_experiment(
    experiment: &Experiment<'_>,
    thresholds: &[u32],
    combinations: &[Combination],
) -> ResultTable {
    let mut sorted = combinations.to_vec();
    sorted.sort_by(|a, b| a.table_order(b));

    let mut columns = Vec::with_capacity(thresholds.len() + 1);
    columns.push(if experiment.icon.is_some() {
        "AVG".to_string()
    } else {
        String::new()
    });
    for &threshold in thresholds {
        columns.push(experiment.test.header(threshold));
    }

    let mut table = ResultTable::new(experiment.title, columns);
    for combination in sorted {
        match combination_row(experiment, thresholds, &combination) {
            Ok(values) => table.push_row(combination, values),
            Err(err) => log::warn!("skipping combination {combination}: {err}"),
        }
    }
    table
}

/// Range statistics: averages and `t+` pass rates over non-miss outcomes.
#[must_use]
pub fn experiment_ranges(
    icon: &str,
    thresholds: &[u32],
    combinations: &[Combination],
) -> ResultTable {
    run_experiment(&Experiment::ranges(icon), thresholds, combinations)
}

/// Surge statistics: hit-count averages, all-outcome pass rates.
#[must_use]
pub fn experiment_surges(
    icon: &str,
    thresholds: &[u32],
    combinations: &[Combination],
) -> ResultTable {
    run_experiment(&Experiment::surges(icon), thresholds, combinations)
}

/// Heart statistics: hit-count averages, all-outcome pass rates.
#[must_use]
pub fn experiment_hearts(
    icon: &str,
    thresholds: &[u32],
    combinations: &[Combination],
) -> ResultTable {
    run_experiment(&Experiment::hearts(icon), thresholds, combinations)
}

/// Shield statistics over every outcome; shield dice carry no miss face.
#[must_use]
pub fn experiment_shields(
    icon: &str,
    thresholds: &[u32],
    combinations: &[Combination],
) -> ResultTable {
    run_experiment(&Experiment::shields(icon), thresholds, combinations)
}

/// Attribute tests: chance of rolling at most `t` shields, no average
/// column.
#[must_use]
pub fn experiment_attribute_test(thresholds: &[u32], combinations: &[Combination]) -> ResultTable {
    run_experiment(&Experiment::attribute_test(), thresholds, combinations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::{Die, Side};

    fn attack_die() -> Die {
        let sides = vec![
            Side::miss(),
            Side {
                range: 2,
                hearts: 2,
                surges: 1,
                ..Side::default()
            },
            Side {
                range: 3,
                hearts: 2,
                ..Side::default()
            },
            Side {
                range: 4,
                hearts: 2,
                ..Side::default()
            },
            Side {
                range: 5,
                hearts: 1,
                ..Side::default()
            },
            Side {
                range: 6,
                hearts: 1,
                surges: 1,
                ..Side::default()
            },
        ];
        Die::new("blue", "Uu", sides, 0).expect("six sides")
    }

    fn all_miss_die() -> Die {
        Die::new("void", "Vo", vec![Side::miss(); 6], 0).expect("six sides")
    }

    #[test]
    fn range_average_excludes_the_miss_face() {
        let combo = Combination::new(vec![attack_die()]);
        let row = combination_row(&Experiment::ranges("icon"), &[4], &combo).expect("rows");
        // (2+3+4+5+6)/5 and three of five faces at range 4 or more.
        assert_eq!(row[0], "4.00 icon");
        assert_eq!(row[1], "60.0%");
    }

    #[test]
    fn surge_rates_divide_all_outcome_passes_by_hit_count() {
        let combo = Combination::new(vec![attack_die()]);
        let row = combination_row(&Experiment::surges("icon"), &[1], &combo).expect("rows");
        // Two surge faces among five hits; the miss face stays in the
        // predicate pool at zero surges.
        assert_eq!(row[0], "0.40 icon");
        assert_eq!(row[1], "40.0%");
    }

    #[test]
    fn attribute_test_row_has_a_blank_first_cell() {
        let shield_die = Die::new(
            "gray",
            "Gr",
            vec![
                Side::default(),
                Side {
                    shields: 1,
                    ..Side::default()
                },
                Side {
                    shields: 1,
                    ..Side::default()
                },
                Side {
                    shields: 1,
                    ..Side::default()
                },
                Side {
                    shields: 2,
                    ..Side::default()
                },
                Side {
                    shields: 3,
                    ..Side::default()
                },
            ],
            5,
        )
        .expect("six sides");
        let combo = Combination::new(vec![shield_die]);
        let row =
            combination_row(&Experiment::attribute_test(), &[3, 0], &combo).expect("rows");
        assert_eq!(row[0], "");
        assert_eq!(row[1], "100.0%");
        // Only the blank face rolls zero shields.
        assert_eq!(row[2], "16.7%");
    }

    #[test]
    fn all_miss_combination_surfaces_empty_hit_set() {
        let combo = Combination::new(vec![all_miss_die()]);
        let err = combination_row(&Experiment::ranges("icon"), &[1], &combo).unwrap_err();
        assert!(matches!(err, StatsError::EmptyHitSet { .. }));
    }

    #[test]
    fn batch_run_skips_unusable_combinations() {
        let combos = vec![
            Combination::new(Vec::new()),
            Combination::new(vec![all_miss_die()]),
            Combination::new(vec![attack_die()]),
        ];
        let table = experiment_ranges("icon", &[1, 2], &combos);
        assert_eq!(table.rows().len(), 1);
        assert_eq!(table.rows()[0].combination.to_string(), "[Uu]");
    }

    #[test]
    fn threshold_headers_follow_test_direction() {
        let combo = vec![Combination::new(vec![attack_die()])];
        let table = experiment_ranges("icon", &[1, 2], &combo);
        assert_eq!(table.columns(), ["AVG", "1+", "2+"]);
        let tests = experiment_attribute_test(&[6, 5], &combo);
        assert_eq!(tests.columns(), ["", "       6", "       5"]);
    }
}
