/*
fill_estimation.rs

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

//! Fill-estimation levels.
//!
//! A shape is filled to a random percentage and the player estimates the
//! fill level. The easy levels are multiple choice; the harder levels ask
//! for a value and accept an answer within the level's tolerance.

use rand::Rng;

use crate::catalog::{LevelFamily, LevelMeta, ScoreConfig, ScoreTarget, Source};

/// Shape whose fill level the player estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Circular gauge with a needle.
    Gauge,

    /// Square filling bottom-up.
    Square,

    /// Ring filling clockwise.
    DiskRing,

    /// Disk filling from the center.
    DiskFilled,
}

/// Difficulty tier of a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

/// Configuration of a fill-estimation level.
pub struct FillEstimationConfig {
    /// Shape shown to the player.
    pub shape: Shape,

    /// Difficulty tier.
    pub difficulty: Difficulty,

    /// Level title.
    pub title: &'static str,

    /// Level subtitle.
    pub subtitle: &'static str,

    /// For the easy levels, the number of multiple-choice options; for the
    /// others, the accepted distance (percentage points) to the true value.
    pub tolerance: u32,
}

/// Generate the fill percentage for an attempt.
///
/// The extremes are avoided: an empty or full shape would give the answer
/// away.
pub fn random_fill_percentage() -> u32 {
    rand::rng().random_range(5..=95)
}

/// Minimum distance between two multiple-choice options, so that the options
/// stay visually distinguishable.
const MIN_OPTION_DISTANCE: u32 = 15;

/// Generate sorted multiple-choice options containing the correct answer,
/// completed with distractors at least [`MIN_OPTION_DISTANCE`] away from
/// each other.
pub fn multiple_choice_options(correct_answer: u32, num_options: usize) -> Vec<u32> {
    let mut rng = rand::rng();
    let mut options: Vec<u32> = vec![correct_answer];

    while options.len() < num_options {
        let candidate: u32 = rng.random_range(0..=100);
        if options
            .iter()
            .all(|existing| candidate.abs_diff(*existing) >= MIN_OPTION_DISTANCE)
        {
            options.push(candidate);
        }
    }
    options.sort_unstable();
    options
}

/// Title, subtitle, shape, difficulty, and tolerance of each level, in
/// level order.
const LEVELS: [(&str, &str, Shape, Difficulty, u32); 14] = [
    (
        "Fill Estimation 1: Gauge Reading",
        "Pick the fill level of the gauge",
        Shape::Gauge,
        Difficulty::Easy,
        4,
    ),
    (
        "Fill Estimation 2: Square Fill",
        "Pick the fill level of the square",
        Shape::Square,
        Difficulty::Easy,
        4,
    ),
    (
        "Fill Estimation 3: Ring Fill",
        "Pick the fill level of the ring",
        Shape::DiskRing,
        Difficulty::Easy,
        4,
    ),
    (
        "Fill Estimation 4: Gauge Precision",
        "Estimate the gauge within 10 percent",
        Shape::Gauge,
        Difficulty::Medium,
        10,
    ),
    (
        "Fill Estimation 5: Square Precision",
        "Estimate the square within 10 percent",
        Shape::Square,
        Difficulty::Medium,
        10,
    ),
    (
        "Fill Estimation 6: Disk Precision",
        "Estimate the disk within 10 percent",
        Shape::DiskFilled,
        Difficulty::Medium,
        10,
    ),
    (
        "Fill Estimation 7: Sharp Gauge",
        "Estimate the gauge within 5 percent",
        Shape::Gauge,
        Difficulty::Hard,
        5,
    ),
    (
        "Fill Estimation 8: Sharp Square",
        "Estimate the square within 5 percent",
        Shape::Square,
        Difficulty::Hard,
        5,
    ),
    (
        "Fill Estimation 9: Sharp Ring",
        "Estimate the ring within 5 percent",
        Shape::DiskRing,
        Difficulty::Hard,
        5,
    ),
    (
        "Fill Estimation 10: Expert Gauge",
        "Estimate the gauge within 1 percent",
        Shape::Gauge,
        Difficulty::Expert,
        1,
    ),
    (
        "Fill Estimation 11: Expert Square",
        "Estimate the square within 1 percent",
        Shape::Square,
        Difficulty::Expert,
        1,
    ),
    (
        "Fill Estimation 12: Expert Disk",
        "Estimate the disk within 1 percent",
        Shape::DiskFilled,
        Difficulty::Expert,
        1,
    ),
    (
        "Fill Estimation 13: Disk Reading",
        "Pick the fill level of the disk",
        Shape::DiskFilled,
        Difficulty::Easy,
        4,
    ),
    (
        "Fill Estimation 14: Sharp Disk",
        "Estimate the disk within 5 percent",
        Shape::DiskFilled,
        Difficulty::Hard,
        5,
    ),
];

/// Return the configuration of the given fill-estimation level, or None.
pub fn get_level_config(level_id: &str) -> Option<FillEstimationConfig> {
    let number: usize = level_id.strip_prefix("fill-estimation-")?.parse().ok()?;
    let (title, subtitle, shape, difficulty, tolerance) = *LEVELS.get(number.checked_sub(1)?)?;
    Some(FillEstimationConfig {
        shape,
        difficulty,
        title,
        subtitle,
        tolerance,
    })
}

/// The fill-estimation level family.
pub struct FillEstimation;

impl LevelFamily for FillEstimation {
    fn tag(&self) -> &'static str {
        "fill-estimation"
    }

    fn title(&self) -> &'static str {
        "Fill Estimation"
    }

    fn levels(&self) -> Vec<LevelMeta> {
        (1..=LEVELS.len())
            .filter_map(|n| {
                let id: String = format!("{}-{n}", self.tag());
                let config = get_level_config(&id)?;
                Some(LevelMeta {
                    id,
                    title: config.title.to_string(),
                    description: config.subtitle.to_string(),
                    tags: vec!["estimation", "proportions"],
                    section: self.tag(),
                    source: Source::Procgen,
                    required_completions: 5,
                })
            })
            .collect()
    }

    fn score_config(&self, level_id: &str) -> Option<ScoreConfig> {
        get_level_config(level_id)?;
        Some(ScoreConfig {
            primary_score: "accuracy",
            target: ScoreTarget::Maximize,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_percentage_avoids_the_extremes() {
        for _ in 0..100 {
            let fill = random_fill_percentage();
            assert!((5..=95).contains(&fill));
        }
    }

    #[test]
    fn options_contain_the_answer_and_stay_apart() {
        for _ in 0..20 {
            let correct = random_fill_percentage();
            let options = multiple_choice_options(correct, 4);
            assert_eq!(options.len(), 4);
            assert!(options.contains(&correct));
            for pair in options.windows(2) {
                assert!(pair[1] - pair[0] >= MIN_OPTION_DISTANCE);
            }
        }
    }

    #[test]
    fn all_levels_resolve() {
        for n in 1..=14 {
            assert!(get_level_config(&format!("fill-estimation-{n}")).is_some());
        }
        assert!(get_level_config("fill-estimation-15").is_none());
        assert!(get_level_config("fill-estimation-x").is_none());
    }
}
