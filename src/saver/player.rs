/*
player.rs

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

//! Save and restore the per-player progress records.
//!
//! The saved object is a serialization of the
//! [`crate::player_data::PlayerData`] object in JSON format by using
//! [`serde`]. Each player is stored under its own key, built from
//! [`PLAYER_DATA_PREFIX`] and the player name, and a separate key remembers
//! which player is currently selected.
//!
//! A record that cannot be parsed is treated as absent: the player starts
//! over with an empty record instead of the application failing.

use log::warn;

use crate::player_data::PlayerData;
use crate::saver::backend::KeyValueStore;

/// Key that stores the name of the currently selected player.
pub const CURRENT_PLAYER_KEY: &str = "g-brain-current-player";

/// Prefix of the keys that store the player records.
pub const PLAYER_DATA_PREFIX: &str = "g-brain-player-data-";

/// Object to save and restore the player records.
pub struct SaverPlayer {
    /// Injected persistence backend.
    store: Box<dyn KeyValueStore>,
}

impl SaverPlayer {
    /// Create a [`SaverPlayer`] object on top of the provided backend.
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Return the storage key for the given player name.
    fn storage_key(player_name: &str) -> String {
        format!("{PLAYER_DATA_PREFIX}{player_name}")
    }

    /// Retrieve the [`PlayerData`] object for the given player.
    ///
    /// Return an empty record when the player has never been stored or when
    /// the stored value cannot be parsed.
    pub fn load(&self, player_name: &str) -> PlayerData {
        let stored: String = match self.store.get(&Self::storage_key(player_name)) {
            Some(s) => s,
            None => return PlayerData::new(player_name),
        };
        match serde_json::from_str::<PlayerData>(&stored) {
            Ok(data) => data,
            Err(error) => {
                warn!("Cannot parse the record of player {player_name}: {error}");
                PlayerData::new(player_name)
            }
        }
    }

    /// Save the provided [`PlayerData`] object under its player name.
    pub fn save(&mut self, data: &PlayerData) {
        match serde_json::to_string(data) {
            Ok(serialized) => {
                self.store.set(&Self::storage_key(&data.user_name), &serialized);
            }
            Err(error) => {
                warn!("Cannot serialize the record of player {}: {error}", data.user_name);
            }
        }
    }

    /// Delete the stored record of the given player.
    pub fn delete(&mut self, player_name: &str) {
        self.store.remove(&Self::storage_key(player_name));
    }

    /// Return the names of all the stored players, sorted.
    pub fn player_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .store
            .keys()
            .iter()
            .filter_map(|key| key.strip_prefix(PLAYER_DATA_PREFIX))
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();
        names.sort();
        names
    }

    /// Return the name of the currently selected player, or an empty string
    /// if no player is selected.
    pub fn current_player(&self) -> String {
        self.store.get(CURRENT_PLAYER_KEY).unwrap_or_default()
    }

    /// Record the given player as the currently selected one.
    pub fn set_current_player(&mut self, player_name: &str) {
        self.store.set(CURRENT_PLAYER_KEY, player_name);
    }

    /// Forget which player was selected.
    pub fn clear_current_player(&mut self) {
        self.store.remove(CURRENT_PLAYER_KEY);
    }
}
