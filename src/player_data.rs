/*
player_data.rs

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

//! Per-player progress records.
//!
//! A [`PlayerData`] object stores everything G-Brain knows about one player:
//! the level attempts they started, the outcomes they reached, and their best
//! score for each level.
//! The object is saved every time the player starts or finishes a level, and
//! is restored when the player is selected.
//! See the [`crate::saver::player`] module that saves and restores
//! [`PlayerData`] objects.
//!
//! All the timestamps are milliseconds since the Unix epoch, so that records
//! written by earlier releases keep loading unchanged.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Outcome of a level attempt.
#[derive(Serialize, Deserialize, Display, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CompletionStatus {
    Success,
    Failure,
}

/// Record of a player opening a level.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LevelStart {
    /// Identifier of the level.
    pub level_id: String,

    /// When the level was opened.
    pub start_time: i64,
}

/// Record of a finished level attempt.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LevelCompletion {
    /// Identifier of the level.
    pub level_id: String,

    /// Whether the player solved the level.
    pub status: CompletionStatus,

    /// When the attempt ended.
    pub completion_time: i64,

    /// Milliseconds between the matched start and the completion, or zero
    /// when no start could be matched.
    pub time_spent: i64,

    /// Score metrics reported for this attempt, indexed by metric name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<HashMap<String, f64>>,
}

/// Best value reached so far for a level's primary score metric.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BestScore {
    /// Identifier of the level.
    pub level_id: String,

    /// Best value of the primary score metric.
    pub score: f64,

    /// When this value was first reached.
    pub achieved_at: i64,
}

/// Progress record for one player.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerData {
    /// Player name, which is also the suffix of the storage key.
    pub user_name: String,

    /// Level starts, in the order they were recorded.
    pub level_starts: Vec<LevelStart>,

    /// Level completions, in the order they were recorded.
    pub level_completions: Vec<LevelCompletion>,

    /// Best scores, at most one entry per level.
    /// Records saved before best scores existed do not have this list, so it
    /// defaults to empty when loading.
    #[serde(default)]
    pub best_scores: Vec<BestScore>,
}

impl PlayerData {
    /// Create an empty [`PlayerData`] object for the given player name.
    pub fn new(user_name: &str) -> Self {
        Self {
            user_name: user_name.to_string(),
            level_starts: Vec::new(),
            level_completions: Vec::new(),
            best_scores: Vec::new(),
        }
    }

    /// Return the best score recorded for the given level, or None.
    pub fn best_score(&self, level_id: &str) -> Option<&BestScore> {
        self.best_scores.iter().find(|bs| bs.level_id == level_id)
    }

    /// Return the starts recorded for the given level, in recording order.
    pub fn starts_for_level(&self, level_id: &str) -> Vec<&LevelStart> {
        self.level_starts
            .iter()
            .filter(|s| s.level_id == level_id)
            .collect()
    }

    /// Return the completions recorded for the given level, in recording
    /// order.
    pub fn completions_for_level(&self, level_id: &str) -> Vec<&LevelCompletion> {
        self.level_completions
            .iter()
            .filter(|c| c.level_id == level_id)
            .collect()
    }
}
