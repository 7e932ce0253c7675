/*
names.rs

Copyright 2025 Hervé Quatremain

This file is part of G-Brain.

G-Brain is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

G-Brain is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
G-Brain. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Generate random player names.
//!
//! A name combines a random adjective and a random noun, like "Silent Fox".
//! Generation retries a few times when the combination is already taken, and
//! accepts the duplicate after that: two players sharing a name merge their
//! records, which is preferable to failing the creation.

use rand::Rng;

/// Adjective half of the generated names.
const ADJECTIVES: [&str; 24] = [
    "Swift", "Bold", "Clever", "Mighty", "Brave", "Wise", "Bright", "Quick", "Sharp", "Noble",
    "Calm", "Fierce", "Gentle", "Steady", "Silent", "Swift", "Wild", "Tame", "Ancient", "Young",
    "Golden", "Silver", "Red", "Blue",
];

/// Noun half of the generated names.
const NOUNS: [&str; 24] = [
    "Wolf", "Eagle", "Lion", "Tiger", "Bear", "Fox", "Hawk", "Raven", "Phoenix", "Dragon",
    "Falcon", "Panther", "Jaguar", "Lynx", "Owl", "Stag", "Warrior", "Hunter", "Scout",
    "Guardian", "Explorer", "Sage", "Mage", "Ranger",
];

/// Number of attempts before accepting a name that is already taken.
const MAX_ATTEMPTS: usize = 10;

/// Generate a random player name that is not in the provided list.
///
/// After [`MAX_ATTEMPTS`] collisions the last generated name is returned
/// even if it is taken.
pub fn generate_random_name(existing: &[String]) -> String {
    let mut rng = rand::rng();
    let mut name: String = String::new();

    for _ in 0..MAX_ATTEMPTS {
        let adjective: &str = ADJECTIVES[rng.random_range(0..ADJECTIVES.len())];
        let noun: &str = NOUNS[rng.random_range(0..NOUNS.len())];
        name = format!("{adjective} {noun}");
        if !existing.iter().any(|n| n == &name) {
            return name;
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_name_is_adjective_noun() {
        let name = generate_random_name(&[]);
        let mut parts = name.split(' ');
        let adjective = parts.next().unwrap_or_default();
        let noun = parts.next().unwrap_or_default();
        assert!(ADJECTIVES.contains(&adjective), "bad adjective in {name}");
        assert!(NOUNS.contains(&noun), "bad noun in {name}");
        assert_eq!(parts.next(), None);
    }

    #[test]
    fn generation_avoids_existing_names() {
        // All the combinations but one are taken; repeated generation must
        // eventually land on the free one instead of always colliding.
        let free = "Swift Wolf".to_string();
        let existing: Vec<String> = ADJECTIVES
            .iter()
            .flat_map(|a| NOUNS.iter().map(move |n| format!("{a} {n}")))
            .filter(|name| name != &free)
            .collect();
        let mut found_free = false;
        for _ in 0..5000 {
            if generate_random_name(&existing) == free {
                found_free = true;
                break;
            }
        }
        assert!(found_free);
    }

    #[test]
    fn generation_accepts_collision_when_everything_is_taken() {
        let existing: Vec<String> = ADJECTIVES
            .iter()
            .flat_map(|a| NOUNS.iter().map(move |n| format!("{a} {n}")))
            .collect();
        let name = generate_random_name(&existing);
        assert!(existing.contains(&name));
    }
}
