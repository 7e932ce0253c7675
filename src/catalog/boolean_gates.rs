/*
boolean_gates.rs

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

//! Boolean-gate levels.
//!
//! The player faces a wall of levers and a set of outputs. Some levers feed
//! a hidden boolean function, the other levers are decoys; the player must
//! work out which levers drive which outputs.
//!
//! The levels are fixed: the lever layout and the boolean function of each
//! level are part of its configuration.

use crate::catalog::{LevelFamily, LevelMeta, ScoreConfig, Source};

/// Hidden function of a level. It receives the states of the active levers,
/// in lever order, and returns the output states.
pub type BooleanFunction = fn(&[bool]) -> Vec<bool>;

/// Configuration of a boolean-gate level.
pub struct BooleanGatesConfig {
    /// Total number of levers on the wall, decoys included.
    pub max_levers: usize,

    /// Number of levers the player may flip in one attempt.
    pub max_active_levers: usize,

    /// Indices (zero-based) of the levers connected to the function.
    pub active_lever_indices: &'static [usize],

    /// Number of outputs.
    pub num_outputs: usize,

    /// Level title.
    pub title: &'static str,

    /// Level subtitle.
    pub subtitle: &'static str,

    /// The hidden boolean function.
    pub boolean_function: BooleanFunction,
}

/// State of an active lever, false when the function receives fewer inputs
/// than it reads.
fn lever(inputs: &[bool], i: usize) -> bool {
    inputs.get(i).copied().unwrap_or(false)
}

fn gates_1(inputs: &[bool]) -> Vec<bool> {
    let (a, b, c) = (lever(inputs, 0), lever(inputs, 1), lever(inputs, 2));
    let (d, e, f) = (lever(inputs, 3), lever(inputs, 4), lever(inputs, 5));
    // Output 1 = OR(inputs 1, 2, 3), Output 2 = OR(inputs 4, 5, 6)
    vec![a || b || c, d || e || f]
}

fn gates_2(inputs: &[bool]) -> Vec<bool> {
    let (a, b, c) = (lever(inputs, 0), lever(inputs, 1), lever(inputs, 2));
    let (d, e, f) = (lever(inputs, 3), lever(inputs, 4), lever(inputs, 5));
    // Output 1 = OR(1, 2), Output 2 = OR(4, 5), Output 3 = OR(6, 8)
    vec![a || b, c || d, e || f]
}

fn gates_3(inputs: &[bool]) -> Vec<bool> {
    let (a, b, c) = (lever(inputs, 0), lever(inputs, 1), lever(inputs, 2));
    let (d, e, f) = (lever(inputs, 3), lever(inputs, 4), lever(inputs, 5));
    // Output 1 = AND(1, 3), Output 2 = AND(4, 5), Output 3 = AND(7, 8)
    vec![a && b, c && d, e && f]
}

fn gates_4(inputs: &[bool]) -> Vec<bool> {
    let (a, b, c) = (lever(inputs, 0), lever(inputs, 1), lever(inputs, 2));
    let (d, e, f) = (lever(inputs, 3), lever(inputs, 4), lever(inputs, 5));
    // Output 1 = OR(1, 2, 3), Output 2 = AND(5, 6, 7)
    // Lever 5 (index 4) is active but not used
    vec![a || b || c, d && e && f]
}

fn gates_5(inputs: &[bool]) -> Vec<bool> {
    let (a, b, c) = (lever(inputs, 0), lever(inputs, 1), lever(inputs, 2));
    let (d, e, f) = (lever(inputs, 3), lever(inputs, 4), lever(inputs, 5));
    let (g, h) = (lever(inputs, 6), lever(inputs, 7));
    // Output 1 = OR(1, 2, 3), Output 2 = OR(5, 6, 7), Output 3 = OR(8, 10)
    vec![a || b || c, d || e || f, g || h]
}

fn gates_6(inputs: &[bool]) -> Vec<bool> {
    let (a, b, c) = (lever(inputs, 0), lever(inputs, 1), lever(inputs, 2));
    let (d, e, f) = (lever(inputs, 3), lever(inputs, 4), lever(inputs, 5));
    let (g, h) = (lever(inputs, 6), lever(inputs, 7));
    // Output 1 = OR(1, 2), Output 2 = OR(4, 5), Output 3 = OR(6, 8), Output 4 = OR(9, 10)
    vec![a || b, c || d, e || f, g || h]
}

fn gates_7(inputs: &[bool]) -> Vec<bool> {
    let (a, b, c) = (lever(inputs, 0), lever(inputs, 1), lever(inputs, 2));
    let (d, e, f) = (lever(inputs, 3), lever(inputs, 4), lever(inputs, 5));
    let (g, h, i) = (lever(inputs, 6), lever(inputs, 7), lever(inputs, 8));
    // Output 1 = OR(1, 2, 3, 4), Output 2 = OR(6, 7), Output 3 = OR(9, 10, 11)
    vec![a || b || c || d, e || f, g || h || i]
}

fn gates_8(inputs: &[bool]) -> Vec<bool> {
    let (a, b, c) = (lever(inputs, 0), lever(inputs, 1), lever(inputs, 2));
    let (d, e, f) = (lever(inputs, 3), lever(inputs, 4), lever(inputs, 5));
    let (g, h) = (lever(inputs, 6), lever(inputs, 7));
    let (i, j) = (lever(inputs, 8), lever(inputs, 9));
    // Output 1 = OR(1, 2), Output 2 = AND(4, 5, 6), Output 3 = OR(7, 9), Output 4 = AND(10, 11, 12)
    vec![a || b, c && d && e, f || g, h && i && j]
}

fn gates_9(inputs: &[bool]) -> Vec<bool> {
    let (a, b, c) = (lever(inputs, 0), lever(inputs, 1), lever(inputs, 2));
    let (d, e, f) = (lever(inputs, 3), lever(inputs, 4), lever(inputs, 5));
    let (g, h) = (lever(inputs, 6), lever(inputs, 7));
    let (i, j, k, l) = (
        lever(inputs, 8),
        lever(inputs, 9),
        lever(inputs, 10),
        lever(inputs, 11),
    );
    // Output 1 = OR(1, 2, 3), Output 2 = AND(5, 6, 7), Output 3 = XOR(9, 10),
    // Output 4 = OR(11, 12, 14, 15)
    vec![a || b || c, d && e && f, g != h, i || j || k || l]
}

fn gates_10(inputs: &[bool]) -> Vec<bool> {
    let (a, b, c) = (lever(inputs, 0), lever(inputs, 1), lever(inputs, 2));
    let (d, e) = (lever(inputs, 3), lever(inputs, 4));
    let (f, g) = (lever(inputs, 5), lever(inputs, 6));
    let (h, i) = (lever(inputs, 7), lever(inputs, 8));
    let (j, k, l) = (lever(inputs, 9), lever(inputs, 10), lever(inputs, 11));
    // Output 1 = OR(1, 2, 3), Output 2 = AND(5, 6), Output 3 = XOR(8, 9),
    // Output 4 = NAND(10, 11), Output 5 = OR(13, 14, 15)
    vec![a || b || c, d && e, f != g, !(h && i), j || k || l]
}

/// Return the configuration of the given boolean-gate level, or None.
pub fn get_level_config(level_id: &str) -> Option<BooleanGatesConfig> {
    let config: BooleanGatesConfig = match level_id {
        "boolean-gates-1" => BooleanGatesConfig {
            max_levers: 6,
            max_active_levers: 3,
            active_lever_indices: &[0, 1, 2, 3, 4, 5],
            num_outputs: 2,
            title: "Boolean Gates 1: Simple OR Patterns",
            subtitle: "Multiple outputs with OR gates - find which levers control which outputs",
            boolean_function: gates_1,
        },
        "boolean-gates-2" => BooleanGatesConfig {
            max_levers: 8,
            max_active_levers: 4,
            // Dummy levers at 3 and 7
            active_lever_indices: &[0, 1, 3, 4, 5, 7],
            num_outputs: 3,
            title: "Boolean Gates 2: OR Gate Patterns",
            subtitle: "Three outputs, each with its own OR group",
            boolean_function: gates_2,
        },
        "boolean-gates-3" => BooleanGatesConfig {
            max_levers: 9,
            max_active_levers: 4,
            // Dummy levers at 1, 4, 5, and 8
            active_lever_indices: &[0, 2, 3, 4, 6, 7],
            num_outputs: 3,
            title: "Boolean Gates 3: AND Patterns",
            subtitle: "AND gates with multiple outputs",
            boolean_function: gates_3,
        },
        "boolean-gates-4" => BooleanGatesConfig {
            max_levers: 8,
            max_active_levers: 4,
            // Dummy levers at 3 and 7
            active_lever_indices: &[0, 1, 2, 4, 5, 6],
            num_outputs: 2,
            title: "Boolean Gates 4: Mixed Patterns",
            subtitle: "Mix of OR and AND gates - some levers do nothing",
            boolean_function: gates_4,
        },
        "boolean-gates-5" => BooleanGatesConfig {
            max_levers: 10,
            max_active_levers: 5,
            // Dummy levers at 3 and 8
            active_lever_indices: &[0, 1, 2, 4, 5, 6, 7, 9],
            num_outputs: 3,
            title: "Boolean Gates 5: Triple Groups",
            subtitle: "Three outputs, each OR of three inputs",
            boolean_function: gates_5,
        },
        "boolean-gates-6" => BooleanGatesConfig {
            max_levers: 10,
            max_active_levers: 5,
            // Dummy levers at 2 and 6
            active_lever_indices: &[0, 1, 3, 4, 5, 7, 8, 9],
            num_outputs: 4,
            title: "Boolean Gates 6: Four Output Groups",
            subtitle: "Four outputs, each OR of two inputs",
            boolean_function: gates_6,
        },
        "boolean-gates-7" => BooleanGatesConfig {
            max_levers: 12,
            max_active_levers: 6,
            // Dummy levers at 4, 7, and 11
            active_lever_indices: &[0, 1, 2, 3, 5, 6, 8, 9, 10],
            num_outputs: 3,
            title: "Boolean Gates 7: Complex OR Patterns",
            subtitle: "Larger groups with mixed logic",
            boolean_function: gates_7,
        },
        "boolean-gates-8" => BooleanGatesConfig {
            max_levers: 12,
            max_active_levers: 6,
            // Dummy levers at 2 and 7
            active_lever_indices: &[0, 1, 3, 4, 5, 6, 8, 9, 10, 11],
            num_outputs: 4,
            title: "Boolean Gates 8: Multiple Patterns",
            subtitle: "Four outputs with varied gate combinations",
            boolean_function: gates_8,
        },
        "boolean-gates-9" => BooleanGatesConfig {
            max_levers: 15,
            max_active_levers: 7,
            // Dummy levers at 3, 7, and 12
            active_lever_indices: &[0, 1, 2, 4, 5, 6, 8, 9, 10, 11, 13, 14],
            num_outputs: 4,
            title: "Boolean Gates 9: Advanced Patterns",
            subtitle: "Complex patterns with XOR and mixed gates - find the useless levers",
            boolean_function: gates_9,
        },
        "boolean-gates-10" => BooleanGatesConfig {
            max_levers: 16,
            max_active_levers: 8,
            // Dummy levers at 3, 6, 11, and 15
            active_lever_indices: &[0, 1, 2, 4, 5, 7, 8, 9, 10, 12, 13, 14],
            num_outputs: 5,
            title: "Boolean Gates 10: Ultimate Challenge",
            subtitle: "Most complex with multiple gate types and patterns",
            boolean_function: gates_10,
        },
        _ => return None,
    };
    Some(config)
}

/// Short catalog descriptions, in level order.
const DESCRIPTIONS: [&str; 10] = [
    "Open the door using a simple AND gate.",
    "Two inputs, one output - use OR logic.",
    "Master the exclusive OR operation.",
    "Combine AND with NOT for NAND.",
    "Three inputs, one output - increasing complexity.",
    "Two outputs from three inputs.",
    "Combine multiple gates for a challenge.",
    "Four inputs require careful logic.",
    "Complex boolean expressions with multiple outputs.",
    "The most complex boolean puzzle.",
];

/// The boolean-gate level family.
pub struct BooleanGates;

impl LevelFamily for BooleanGates {
    fn tag(&self) -> &'static str {
        "boolean-gates"
    }

    fn title(&self) -> &'static str {
        "Boolean Gates"
    }

    fn levels(&self) -> Vec<LevelMeta> {
        (1..=DESCRIPTIONS.len())
            .filter_map(|n| {
                let id: String = format!("{}-{n}", self.tag());
                let config = get_level_config(&id)?;
                Some(LevelMeta {
                    id,
                    title: config.title.to_string(),
                    description: DESCRIPTIONS[n - 1].to_string(),
                    tags: vec!["logic", "boolean"],
                    section: self.tag(),
                    source: Source::Fixed,
                    required_completions: 3,
                })
            })
            .collect()
    }

    fn score_config(&self, _level_id: &str) -> Option<ScoreConfig> {
        // Boolean-gate levels do not track a score metric
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_levels_have_configs() {
        for n in 1..=10 {
            let config = get_level_config(&format!("boolean-gates-{n}"));
            assert!(config.is_some(), "missing config for level {n}");
        }
        assert!(get_level_config("boolean-gates-11").is_none());
    }

    #[test]
    fn active_levers_stay_within_the_wall() {
        for n in 1..=10 {
            let config = get_level_config(&format!("boolean-gates-{n}")).unwrap();
            for &index in config.active_lever_indices {
                assert!(index < config.max_levers, "lever {index} out of range in level {n}");
            }
        }
    }

    #[test]
    fn functions_produce_the_declared_output_count() {
        for n in 1..=10 {
            let config = get_level_config(&format!("boolean-gates-{n}")).unwrap();
            let inputs = vec![true; config.active_lever_indices.len()];
            let outputs = (config.boolean_function)(&inputs);
            assert_eq!(outputs.len(), config.num_outputs, "level {n}");
        }
    }

    #[test]
    fn simple_or_level_follows_its_truth_table() {
        let config = get_level_config("boolean-gates-1").unwrap();
        let f = config.boolean_function;
        assert_eq!(f(&[false, false, false, false, false, false]), vec![false, false]);
        assert_eq!(f(&[true, false, false, false, false, false]), vec![true, false]);
        assert_eq!(f(&[false, false, false, false, false, true]), vec![false, true]);
        assert_eq!(f(&[true, true, true, true, true, true]), vec![true, true]);
    }
}
