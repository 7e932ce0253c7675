/*
catalog.rs

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

//! The level catalog.
//!
//! Levels are grouped into families, one module per family.
//! Each family implements the [`LevelFamily`] trait and registers itself in
//! [`families`]; level identifiers are built from the family tag and a level
//! number, like `color-sorting-7`.
//!
//! Besides its [`LevelMeta`] catalog entry, every level has a
//! family-specific configuration object (lever layouts, color generators,
//! question generators, and so on) exposed by its family module through a
//! `get_level_config` function.
//!
//! For developers: add your new family module to the list of modules below
//! and to the [`families`] registry.

pub mod boolean_gates;
pub mod color_sorting;
pub mod control_zone;
pub mod fill_estimation;
pub mod formal_words;
pub mod lesson;

use strum_macros::Display;

/// How the content of a level is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Source {
    /// The level content is generated when the level is opened.
    Procgen,

    /// The level content is fixed.
    Fixed,
}

/// Direction in which a score metric improves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ScoreTarget {
    /// Higher values are better.
    Maximize,

    /// Lower values are better.
    Minimize,
}

/// Which score metric of a level is authoritative for best-score tracking,
/// and in which direction.
#[derive(Debug, Clone, Copy)]
pub struct ScoreConfig {
    /// Name of the primary score metric, as reported in the completion
    /// scores.
    pub primary_score: &'static str,

    /// Direction in which the metric improves.
    pub target: ScoreTarget,
}

/// Catalog entry for a level.
#[derive(Debug, Clone)]
pub struct LevelMeta {
    /// Level identifier.
    pub id: String,

    /// Level title.
    pub title: String,

    /// Short description of the level.
    pub description: String,

    /// Free-form tags.
    pub tags: Vec<&'static str>,

    /// Tag of the family the level belongs to.
    pub section: &'static str,

    /// How the level content is produced.
    pub source: Source,

    /// Number of consecutive successful completions required to validate
    /// the level.
    pub required_completions: usize,
}

/// A group of levels sharing a family.
#[derive(Debug, Clone)]
pub struct LevelSection {
    /// Family tag, used as the section identifier.
    pub id: &'static str,

    /// Section title.
    pub title: &'static str,

    /// The section's levels.
    pub levels: Vec<LevelMeta>,
}

/// A family of levels.
pub trait LevelFamily {
    /// Family tag: the level identifiers of the family start with this tag
    /// followed by a dash.
    fn tag(&self) -> &'static str;

    /// Family title, used as the section title.
    fn title(&self) -> &'static str;

    /// Catalog entries of the family's levels.
    fn levels(&self) -> Vec<LevelMeta>;

    /// Score configuration of the given level, or None when the level does
    /// not track a score or is not in this family.
    fn score_config(&self, level_id: &str) -> Option<ScoreConfig>;
}

/// Return the registered level families.
pub fn families() -> Vec<Box<dyn LevelFamily>> {
    vec![
        Box::new(boolean_gates::BooleanGates),
        Box::new(color_sorting::ColorSorting),
        Box::new(control_zone::ControlZone),
        Box::new(formal_words::FormalWords),
        Box::new(fill_estimation::FillEstimation),
    ]
}

/// Return the family that owns the given level identifier, or None.
pub fn family_for(level_id: &str) -> Option<Box<dyn LevelFamily>> {
    families()
        .into_iter()
        .find(|family| match level_id.strip_prefix(family.tag()) {
            Some(rest) => rest.starts_with('-'),
            None => false,
        })
}

/// Return the catalog sections, one per family.
pub fn sections() -> Vec<LevelSection> {
    families()
        .iter()
        .map(|family| LevelSection {
            id: family.tag(),
            title: family.title(),
            levels: family.levels(),
        })
        .collect()
}

/// Return the flattened list of all the levels.
pub fn levels() -> Vec<LevelMeta> {
    families().iter().flat_map(|family| family.levels()).collect()
}

/// Return the score configuration for the given level, or None when the
/// level is unknown or does not track a score.
pub fn score_config(level_id: &str) -> Option<ScoreConfig> {
    family_for(level_id).and_then(|family| family.score_config(level_id))
}
