/*
session.rs

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

//! Manage the players and their progress records.
//!
//! The main object, [`PlayerSession`], owns the persistence backend and a
//! one-slot cache holding the record of the player being played.
//! The UI layer creates one session, selects or creates a player, and then
//! reports level starts and completions as the player works through the
//! puzzles.
//! See the [`crate::validation`] module that derives level mastery from the
//! records the session keeps.
//!
//! Every mutation updates the cached record first and then writes it to the
//! backend. Nothing is reported to the caller when persistence fails: the
//! backend logs the failure and the session carries on with the in-memory
//! record.

use std::collections::HashMap;

use chrono::Utc;
use log::debug;

use crate::catalog;
use crate::catalog::ScoreTarget;
use crate::names;
use crate::player_data::{BestScore, CompletionStatus, LevelCompletion, LevelStart, PlayerData};
use crate::saver::backend::KeyValueStore;
use crate::saver::player::SaverPlayer;

/// A new start for a level is dropped when another start for the same level
/// is within this window. This absorbs double calls from the UI layer when a
/// level view is rebuilt.
pub const DUPLICATE_START_WINDOW_MS: i64 = 2000;

/// Record of the player whose data is cached.
struct CachedPlayer {
    /// Player name.
    name: String,

    /// The player's progress record.
    data: PlayerData,
}

/// Manage the players and their progress records.
pub struct PlayerSession {
    /// Saver for the player records.
    saver: SaverPlayer,

    /// Record of the player being played. Only one record is kept in memory;
    /// selecting another player replaces it.
    cache: Option<CachedPlayer>,
}

impl PlayerSession {
    /// Create a [`PlayerSession`] object on top of the provided persistence
    /// backend.
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self {
            saver: SaverPlayer::new(store),
            cache: None,
        }
    }

    /// Return the name of the currently selected player, or an empty string
    /// if no player is selected.
    pub fn current_player(&self) -> String {
        self.saver.current_player()
    }

    /// Return the names of all the stored players, sorted.
    pub fn all_player_names(&self) -> Vec<String> {
        self.saver.player_names()
    }

    /// Create a player and select it.
    ///
    /// When no name is provided, a random one is generated (see
    /// [`crate::names`]). The created player starts with an empty record,
    /// which is persisted immediately. The name of the created player is
    /// returned.
    pub fn create_new_player(&mut self, name: Option<&str>) -> String {
        let player_name: String = match name {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => names::generate_random_name(&self.saver.player_names()),
        };
        let data = PlayerData::new(&player_name);
        self.saver.save(&data);
        self.saver.set_current_player(&player_name);
        self.cache = Some(CachedPlayer {
            name: player_name.clone(),
            data,
        });
        debug!("Created player {player_name}");
        player_name
    }

    /// Select the given player.
    ///
    /// A player that was never stored starts with an empty record.
    pub fn switch_player(&mut self, player_name: &str) {
        if player_name.is_empty() {
            return;
        }
        let data: PlayerData = self.saver.load(player_name);
        self.saver.set_current_player(player_name);
        self.cache = Some(CachedPlayer {
            name: player_name.to_string(),
            data,
        });
    }

    /// Rename a player, keeping its record.
    ///
    /// The record is stored under the new name and the old key is deleted.
    /// The current-player pointer follows the rename when it referenced the
    /// old name.
    pub fn rename_player(&mut self, old_name: &str, new_name: &str) {
        if old_name.is_empty() || new_name.is_empty() || old_name == new_name {
            return;
        }

        let mut data: PlayerData = self.saver.load(old_name);
        data.user_name = new_name.to_string();
        self.saver.save(&data);
        self.saver.delete(old_name);

        if self.saver.current_player() == old_name {
            self.saver.set_current_player(new_name);
        }
        self.cache = Some(CachedPlayer {
            name: new_name.to_string(),
            data,
        });
    }

    /// Delete the given player's record.
    ///
    /// When the deleted player was the selected one, the selection is
    /// cleared as well.
    pub fn delete_player(&mut self, player_name: &str) {
        self.saver.delete(player_name);

        if self.saver.current_player() == player_name {
            self.saver.clear_current_player();
            self.cache = None;
        } else if matches!(&self.cache, Some(c) if c.name == player_name) {
            self.cache = None;
        }
    }

    /// Return the progress record of the given player, or of the selected
    /// player when no name is provided.
    ///
    /// An empty record with an empty name is returned when no player
    /// resolves.
    pub fn player_data(&mut self, player_name: Option<&str>) -> PlayerData {
        match self.resolve_player(player_name) {
            Some(name) => {
                self.ensure_cached(&name);
                match &self.cache {
                    Some(c) => c.data.clone(),
                    None => PlayerData::new(&name),
                }
            }
            None => PlayerData::new(""),
        }
    }

    /// Reset the resolved player's record to an empty one.
    pub fn clear_player_data(&mut self, player_name: Option<&str>) {
        let Some(name) = self.resolve_player(player_name) else {
            return;
        };
        let data = PlayerData::new(&name);
        self.saver.save(&data);
        if matches!(&self.cache, Some(c) if c.name == name) {
            self.cache = Some(CachedPlayer { name, data });
        }
    }

    /// Record that the resolved player opened a level, using the current
    /// time.
    pub fn track_level_start(&mut self, level_id: &str, player_name: Option<&str>) {
        self.track_level_start_at(level_id, player_name, now_ms());
    }

    /// Record that the resolved player opened a level at the given time
    /// (milliseconds since the Unix epoch).
    ///
    /// The start is dropped when another start for the same level is within
    /// [`DUPLICATE_START_WINDOW_MS`].
    pub fn track_level_start_at(
        &mut self,
        level_id: &str,
        player_name: Option<&str>,
        start_time: i64,
    ) {
        let Some(name) = self.resolve_player(player_name) else {
            return;
        };
        self.ensure_cached(&name);
        let Some(cached) = self.cache.as_mut() else {
            return;
        };

        let duplicated: bool = cached.data.level_starts.iter().any(|s| {
            s.level_id == level_id && (start_time - s.start_time).abs() < DUPLICATE_START_WINDOW_MS
        });
        if duplicated {
            debug!("Dropping the duplicate start of level {level_id} for player {name}");
            return;
        }

        cached.data.level_starts.push(LevelStart {
            level_id: level_id.to_string(),
            start_time,
        });
        self.persist();
    }

    /// Record that the resolved player finished a level, using the current
    /// time.
    pub fn track_level_completion(
        &mut self,
        level_id: &str,
        status: CompletionStatus,
        scores: Option<HashMap<String, f64>>,
        player_name: Option<&str>,
    ) {
        self.track_level_completion_at(level_id, status, scores, player_name, now_ms());
    }

    /// Record that the resolved player finished a level at the given time
    /// (milliseconds since the Unix epoch).
    ///
    /// The completion is paired with the most recent start for the level
    /// that no earlier completion already consumed, and `time_spent` is the
    /// distance to that start (zero when no start matches).
    /// On a successful completion that carries the level's primary score
    /// metric, the player's best score for the level is updated when the new
    /// value strictly improves on the stored one.
    pub fn track_level_completion_at(
        &mut self,
        level_id: &str,
        status: CompletionStatus,
        scores: Option<HashMap<String, f64>>,
        player_name: Option<&str>,
        completion_time: i64,
    ) {
        let Some(name) = self.resolve_player(player_name) else {
            return;
        };
        self.ensure_cached(&name);
        let Some(cached) = self.cache.as_mut() else {
            return;
        };
        let data: &mut PlayerData = &mut cached.data;

        // Pair the completion with the most recent start for this level that
        // has no completion yet. A start is consumed by a completion whose
        // time_spent points back exactly to it; this rederives the pairing
        // from the stored records instead of storing a link.
        let mut starts: Vec<&LevelStart> = data.starts_for_level(level_id);
        starts.sort_by(|a, b| b.start_time.cmp(&a.start_time));
        let matched_start: Option<&LevelStart> = starts.into_iter().find(|s| {
            !data.level_completions.iter().any(|c| {
                c.level_id == level_id
                    && c.completion_time >= s.start_time
                    && c.time_spent == c.completion_time - s.start_time
            })
        });
        let time_spent: i64 = match matched_start {
            Some(s) => completion_time - s.start_time,
            None => 0,
        };

        data.level_completions.push(LevelCompletion {
            level_id: level_id.to_string(),
            status,
            completion_time,
            time_spent,
            scores: scores.clone(),
        });

        if status == CompletionStatus::Success
            && let Some(scores) = &scores
            && let Some(config) = catalog::score_config(level_id)
            && let Some(&value) = scores.get(config.primary_score)
        {
            Self::update_best_score(data, level_id, value, config.target, completion_time);
        }

        self.persist();
    }

    /// Return the resolved player's level starts, optionally restricted to
    /// one level.
    pub fn level_starts(
        &mut self,
        level_id: Option<&str>,
        player_name: Option<&str>,
    ) -> Vec<LevelStart> {
        let data: PlayerData = self.player_data(player_name);
        match level_id {
            Some(id) => data
                .level_starts
                .into_iter()
                .filter(|s| s.level_id == id)
                .collect(),
            None => data.level_starts,
        }
    }

    /// Return the resolved player's level completions, optionally restricted
    /// to one level.
    pub fn level_completions(
        &mut self,
        level_id: Option<&str>,
        player_name: Option<&str>,
    ) -> Vec<LevelCompletion> {
        let data: PlayerData = self.player_data(player_name);
        match level_id {
            Some(id) => data
                .level_completions
                .into_iter()
                .filter(|c| c.level_id == id)
                .collect(),
            None => data.level_completions,
        }
    }

    /// Return the resolved player's best score for the given level, or None.
    pub fn best_score(&mut self, level_id: &str, player_name: Option<&str>) -> Option<BestScore> {
        if self.resolve_player(player_name).is_none() {
            return None;
        }
        self.player_data(player_name).best_score(level_id).cloned()
    }

    /// Return the explicitly named player, or the selected one.
    ///
    /// Return None when neither resolves to a non-empty name.
    fn resolve_player(&self, player_name: Option<&str>) -> Option<String> {
        let name: String = match player_name {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => self.saver.current_player(),
        };
        if name.is_empty() { None } else { Some(name) }
    }

    /// Load the given player's record into the cache slot unless it is
    /// already there.
    fn ensure_cached(&mut self, player_name: &str) {
        let cached: bool = matches!(&self.cache, Some(c) if c.name == player_name);
        if !cached {
            self.cache = Some(CachedPlayer {
                name: player_name.to_string(),
                data: self.saver.load(player_name),
            });
        }
    }

    /// Write the cached record to the backend.
    fn persist(&mut self) {
        if let Some(cached) = &self.cache {
            self.saver.save(&cached.data);
        }
    }

    /// Update the player's best score for a level with a new primary-score
    /// value.
    ///
    /// The stored score is replaced only on strict improvement in the
    /// configured direction, so the first attempt that reached the best
    /// value keeps the achievement timestamp.
    fn update_best_score(
        data: &mut PlayerData,
        level_id: &str,
        value: f64,
        target: ScoreTarget,
        completion_time: i64,
    ) {
        let existing: Option<usize> = data
            .best_scores
            .iter()
            .position(|bs| bs.level_id == level_id);

        let improves: bool = match existing {
            Some(i) => match target {
                ScoreTarget::Maximize => value > data.best_scores[i].score,
                ScoreTarget::Minimize => value < data.best_scores[i].score,
            },
            None => true,
        };
        if !improves {
            return;
        }

        match existing {
            Some(i) => {
                data.best_scores[i].score = value;
                data.best_scores[i].achieved_at = completion_time;
            }
            None => data.best_scores.push(BestScore {
                level_id: level_id.to_string(),
                score: value,
                achieved_at: completion_time,
            }),
        }
        debug!("New best score {value} for level {level_id}");
    }
}

/// Return the current time in milliseconds since the Unix epoch.
fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}
