/*
catalog_test.rs

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

//! Tests for the level catalog: family dispatch, metadata integrity, and
//! score-configuration resolution.

use gbrain::catalog::{self, ScoreTarget};

#[test]
fn level_ids_resolve_to_their_family() {
    for (level_id, tag) in [
        ("boolean-gates-1", "boolean-gates"),
        ("color-sorting-15", "color-sorting"),
        ("control-zone-4", "control-zone"),
        ("formal-words-8", "formal-words"),
        ("fill-estimation-14", "fill-estimation"),
    ] {
        let family = catalog::family_for(level_id);
        match family {
            Some(family) => assert_eq!(family.tag(), tag),
            None => panic!("no family for {level_id}"),
        }
    }

    assert!(catalog::family_for("color").is_none());
    assert!(catalog::family_for("color-sorting").is_none());
    assert!(catalog::family_for("nonexistent-level").is_none());
}

#[test]
fn the_catalog_is_consistent() {
    let levels = catalog::levels();
    assert_eq!(levels.len(), 10 + 15 + 4 + 8 + 14);

    let mut ids: Vec<&str> = levels.iter().map(|l| l.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), levels.len(), "duplicate level identifiers");

    for level in &levels {
        assert!(
            level.id.starts_with(&format!("{}-", level.section)),
            "level {} carries the wrong section {}",
            level.id,
            level.section
        );
        assert!(level.required_completions > 0, "level {}", level.id);
        assert!(!level.title.is_empty());
    }
}

#[test]
fn sections_group_the_same_levels() {
    let sections = catalog::sections();
    assert_eq!(sections.len(), 5);

    let total: usize = sections.iter().map(|s| s.levels.len()).sum();
    assert_eq!(total, catalog::levels().len());

    for section in &sections {
        for level in &section.levels {
            assert_eq!(level.section, section.id);
        }
    }
}

#[test]
fn score_configs_resolve_per_family() {
    let config = catalog::score_config("color-sorting-1").expect("no score config");
    assert_eq!(config.primary_score, "swaps");
    assert_eq!(config.target, ScoreTarget::Minimize);

    let config = catalog::score_config("formal-words-3").expect("no score config");
    assert_eq!(config.primary_score, "attempts");
    assert_eq!(config.target, ScoreTarget::Minimize);

    let config = catalog::score_config("fill-estimation-10").expect("no score config");
    assert_eq!(config.primary_score, "accuracy");
    assert_eq!(config.target, ScoreTarget::Maximize);

    // The free hue challenge and the families without metrics have no config
    assert!(catalog::score_config("color-sorting-15").is_none());
    assert!(catalog::score_config("boolean-gates-1").is_none());
    assert!(catalog::score_config("control-zone-1").is_none());

    // Unknown levels propagate the absence
    assert!(catalog::score_config("color-sorting-99").is_none());
    assert!(catalog::score_config("nonexistent-level").is_none());
}

#[test]
fn required_completions_follow_the_family_rules() {
    let levels = catalog::levels();
    let required = |id: &str| {
        levels
            .iter()
            .find(|l| l.id == id)
            .map(|l| l.required_completions)
    };

    assert_eq!(required("boolean-gates-5"), Some(3));
    assert_eq!(required("color-sorting-3"), Some(5));
    assert_eq!(required("control-zone-2"), Some(3));
    // Writing levels validate faster than the yes/no decision levels
    assert_eq!(required("formal-words-2"), Some(5));
    assert_eq!(required("formal-words-6"), Some(20));
    assert_eq!(required("fill-estimation-7"), Some(5));
}
