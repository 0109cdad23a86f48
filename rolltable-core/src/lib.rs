//! Rolltable core engine
//!
//! Exact probability tables for the asymmetric six-sided dice of a
//! tabletop combat game. This crate enumerates every joint outcome of a
//! dice combination and reduces it to per-attribute averages and
//! threshold pass rates; rendering, die catalogs, and experiment
//! sequencing live with the consumers.

pub mod combo;
pub mod dice;
pub mod numbers;
pub mod roll;
pub mod stats;
pub mod table;

// Re-export commonly used types
pub use combo::Combination;
pub use dice::{Die, DieError, SIDES_PER_DIE, Side};
pub use roll::{Outcome, RollError, SideSet};
pub use stats::{
    Attribute, Experiment, MissPolicy, StatsError, ThresholdTest, combination_row,
    experiment_attribute_test, experiment_hearts, experiment_ranges, experiment_shields,
    experiment_surges, run_experiment,
};
pub use table::{ResultRow, ResultTable};
