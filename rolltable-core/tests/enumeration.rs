use std::collections::HashSet;

use rolltable_core::{Combination, Die, Side};

fn shield_die(name: &str, code: &str, shields: [u8; 6], order: i32) -> Die {
    let sides = shields
        .into_iter()
        .map(|shields| Side {
            shields,
            ..Side::default()
        })
        .collect();
    Die::new(name, code, sides, order).expect("six sides")
}

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

#[test]
fn outcome_count_is_six_to_the_n_and_distinct() {
    let gray = shield_die("gray", "Gr", [0, 1, 1, 1, 2, 3], 5);
    let black = shield_die("black", "Bl", [0, 2, 2, 2, 3, 4], 6);
    let brown = shield_die("brown", "Br", [0, 0, 0, 1, 1, 2], 4);

    let cases = [
        Combination::new(vec![attack_die()]),
        Combination::new(vec![black.clone(), gray.clone()]),
        Combination::new(vec![attack_die(), gray.clone(), brown.clone()]),
        Combination::new(vec![black, gray, brown, attack_die()]),
    ];

    for combination in cases {
        let outcomes = combination.enumerate().expect("non-empty combination");
        let expected = 6_usize.pow(u32::try_from(combination.len()).expect("small length"));
        assert_eq!(
            outcomes.len(),
            expected,
            "combination {combination} produced the wrong outcome count"
        );
        let distinct: HashSet<_> = outcomes.iter().collect();
        assert_eq!(
            distinct.len(),
            expected,
            "combination {combination} produced duplicate outcomes"
        );
    }
}

#[test]
fn enumeration_is_deterministic() {
    let gray = shield_die("gray", "Gr", [0, 1, 1, 1, 2, 3], 5);
    let combination = Combination::new(vec![attack_die(), gray.clone(), gray]);

    let first = combination.enumerate().expect("non-empty combination");
    let second = combination.enumerate().expect("non-empty combination");
    assert_eq!(first, second);
}

#[test]
fn every_face_of_every_die_appears() {
    let gray = shield_die("gray", "Gr", [0, 1, 1, 1, 2, 3], 5);
    let combination = Combination::new(vec![attack_die(), gray]);
    let outcomes = combination.enumerate().expect("non-empty combination");

    for (position, die) in combination.dice().iter().enumerate() {
        for face in die.sides() {
            assert!(
                outcomes.iter().any(|o| o.sides()[position] == *face),
                "face {face} of {} never appears at position {position}",
                die.name()
            );
        }
    }
}
