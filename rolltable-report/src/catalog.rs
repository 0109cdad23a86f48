//! The die catalog and the standard combination lists.
//!
//! Face values match the published game dice. Everything is built and
//! returned as owned data; nothing lives in module-level state.

use rolltable_core::{Combination, Die, DieError, Side};

fn shield(shields: u8) -> Side {
    Side {
        shields,
        ..Side::default()
    }
}

fn attack(range: u8, hearts: u8, surges: u8) -> Side {
    Side {
        range,
        hearts,
        surges,
        ..Side::default()
    }
}

/// The full set of game dice: three defense dice, the attack die, and the
/// three power dice.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub black: Die,
    pub gray: Die,
    pub brown: Die,
    pub blue: Die,
    pub yellow: Die,
    pub red: Die,
    pub green: Die,
}

impl Catalog {
    /// Build the standard catalog.
    ///
    /// # Errors
    ///
    /// Returns `DieError` if a die definition carries the wrong side
    /// count, which would mean the catalog itself is broken.
    pub fn standard() -> Result<Self, DieError> {
        Ok(Self {
            black: Die::new(
                "black",
                "Bl",
                vec![
                    shield(0),
                    shield(2),
                    shield(2),
                    shield(2),
                    shield(3),
                    shield(4),
                ],
                6,
            )?,
            gray: Die::new(
                "gray",
                "Gr",
                vec![
                    shield(0),
                    shield(1),
                    shield(1),
                    shield(1),
                    shield(2),
                    shield(3),
                ],
                5,
            )?,
            brown: Die::new(
                "brown",
                "Br",
                vec![
                    shield(0),
                    shield(0),
                    shield(0),
                    shield(1),
                    shield(1),
                    shield(2),
                ],
                4,
            )?,
            blue: Die::new(
                "blue",
                "Uu",
                vec![
                    Side::miss(),
                    attack(2, 2, 1),
                    attack(3, 2, 0),
                    attack(4, 2, 0),
                    attack(5, 1, 0),
                    attack(6, 1, 1),
                ],
                0,
            )?,
            yellow: Die::new(
                "yellow",
                "Ye",
                vec![
                    attack(1, 0, 1),
                    attack(1, 1, 0),
                    attack(0, 2, 0),
                    attack(0, 2, 1),
                    attack(0, 1, 1),
                    attack(2, 1, 0),
                ],
                2,
            )?,
            red: Die::new(
                "red",
                "Re",
                vec![
                    attack(0, 1, 0),
                    attack(0, 2, 0),
                    attack(0, 2, 0),
                    attack(0, 2, 0),
                    attack(0, 3, 0),
                    attack(0, 3, 1),
                ],
                3,
            )?,
            green: Die::new(
                "green",
                "Gn",
                vec![
                    attack(0, 1, 0),
                    attack(1, 1, 1),
                    attack(1, 1, 0),
                    attack(1, 0, 1),
                    attack(0, 1, 1),
                    attack(0, 0, 1),
                ],
                1,
            )?,
        })
    }
}

fn combo(dice: &[&Die]) -> Combination {
    Combination::new(dice.iter().map(|die| (*die).clone()).collect())
}

/// The attack pools a hero can realistically assemble: the blue die plus
/// every common power-die loadout.
fn attack_standard(c: &Catalog) -> Vec<Combination> {
    vec![
        combo(&[&c.blue, &c.green]),
        combo(&[&c.blue, &c.green]),
        combo(&[&c.blue, &c.yellow]),
        combo(&[&c.blue, &c.red]),
        combo(&[&c.blue, &c.green, &c.green]),
        combo(&[&c.blue, &c.yellow, &c.green]),
        combo(&[&c.blue, &c.yellow, &c.yellow]),
        combo(&[&c.blue, &c.red, &c.green]),
        combo(&[&c.blue, &c.red, &c.yellow]),
        combo(&[&c.blue, &c.red, &c.yellow, &c.green]),
        combo(&[&c.blue, &c.red, &c.green, &c.green]),
        combo(&[&c.blue, &c.red, &c.red]),
        combo(&[&c.blue, &c.yellow, &c.yellow, &c.green]),
        combo(&[&c.blue, &c.yellow, &c.yellow, &c.green, &c.green]),
    ]
}

pub fn range_combinations(c: &Catalog) -> Vec<Combination> {
    vec![
        combo(&[&c.blue]),
        combo(&[&c.green]),
        combo(&[&c.yellow]),
        combo(&[&c.blue, &c.green]),
        combo(&[&c.blue, &c.yellow]),
        combo(&[&c.blue, &c.green, &c.green]),
        combo(&[&c.blue, &c.yellow, &c.green]),
        combo(&[&c.blue, &c.yellow, &c.yellow]),
    ]
}

pub fn surge_combinations(c: &Catalog) -> Vec<Combination> {
    let mut combos = vec![
        combo(&[&c.blue]),
        combo(&[&c.green]),
        combo(&[&c.yellow]),
        combo(&[&c.red]),
    ];
    combos.extend(attack_standard(c));
    // Apothecary heal loadouts.
    combos.push(combo(&[&c.red, &c.green]));
    combos.push(combo(&[&c.red, &c.red]));
    combos
}

pub fn heart_combinations(c: &Catalog) -> Vec<Combination> {
    let mut combos = vec![
        combo(&[&c.blue]),
        combo(&[&c.yellow]),
        combo(&[&c.red]),
        combo(&[&c.red, &c.red]),
    ];
    combos.extend(attack_standard(c));
    combos.push(combo(&[&c.red, &c.green]));
    combos
}

pub fn shield_combinations(c: &Catalog) -> Vec<Combination> {
    vec![
        combo(&[&c.brown]),
        combo(&[&c.gray]),
        combo(&[&c.black]),
        combo(&[&c.gray, &c.brown]),
        combo(&[&c.gray, &c.gray]),
        combo(&[&c.black, &c.brown]),
        combo(&[&c.black, &c.gray]),
        combo(&[&c.gray, &c.brown, &c.brown]),
        combo(&[&c.gray, &c.gray, &c.brown]),
        combo(&[&c.black, &c.gray, &c.brown]),
        combo(&[&c.black, &c.gray, &c.gray]),
        combo(&[&c.black, &c.black, &c.gray]),
    ]
}

pub fn attribute_test_combinations(c: &Catalog) -> Vec<Combination> {
    vec![combo(&[&c.black, &c.gray])]
}
