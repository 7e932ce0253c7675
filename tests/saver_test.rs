/*
saver_test.rs

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

//! Tests for the persistence backends: directory-store round trips,
//! corrupt-record recovery, legacy records, and the no-op backend.

use std::collections::HashMap;

use gbrain::player_data::CompletionStatus;
use gbrain::saver::backend::{DirStore, KeyValueStore, MemoryStore, NullStore};
use gbrain::session::PlayerSession;

const T0: i64 = 1_700_000_000_000;

#[test]
fn dir_store_round_trips_values() {
    let dir = tempfile::tempdir().expect("cannot create a temporary directory");
    let mut store = DirStore::new(dir.path().to_path_buf());

    assert_eq!(store.get("missing"), None);

    store.set("g-brain-player-data-Swift Wolf", "{\"a\":1}");
    store.set("g-brain-current-player", "Swift Wolf");
    assert_eq!(
        store.get("g-brain-player-data-Swift Wolf"),
        Some("{\"a\":1}".to_string())
    );

    let mut keys = store.keys();
    keys.sort();
    assert_eq!(
        keys,
        vec![
            "g-brain-current-player".to_string(),
            "g-brain-player-data-Swift Wolf".to_string()
        ]
    );

    store.remove("g-brain-current-player");
    assert_eq!(store.get("g-brain-current-player"), None);
}

#[test]
fn dir_store_accepts_awkward_key_characters() {
    let dir = tempfile::tempdir().expect("cannot create a temporary directory");
    let mut store = DirStore::new(dir.path().to_path_buf());

    let key = "g-brain-player-data-a/b\\c 100%";
    store.set(key, "value");
    assert_eq!(store.get(key), Some("value".to_string()));
    assert_eq!(store.keys(), vec![key.to_string()]);
}

#[test]
fn progress_survives_a_session_restart() {
    let dir = tempfile::tempdir().expect("cannot create a temporary directory");

    {
        let mut session = PlayerSession::new(Box::new(DirStore::new(dir.path().to_path_buf())));
        session.create_new_player(Some("Alice"));
        session.track_level_start_at("color-sorting-1", None, T0);
        session.track_level_completion_at(
            "color-sorting-1",
            CompletionStatus::Success,
            Some(HashMap::from([("swaps".to_string(), 4.0)])),
            None,
            T0 + 60_000,
        );
    }

    let mut session = PlayerSession::new(Box::new(DirStore::new(dir.path().to_path_buf())));
    assert_eq!(session.current_player(), "Alice");
    let completions = session.level_completions(Some("color-sorting-1"), None);
    assert_eq!(completions.len(), 1);
    assert_eq!(completions[0].time_spent, 60_000);
    let best = session.best_score("color-sorting-1", None).expect("no best score");
    assert_eq!(best.score, 4.0);
}

#[test]
fn corrupt_records_fall_back_to_an_empty_record() {
    let mut store = MemoryStore::new();
    store.set("g-brain-player-data-Alice", "not json at all {");
    store.set("g-brain-current-player", "Alice");

    let mut session = PlayerSession::new(Box::new(store));
    let data = session.player_data(None);
    assert_eq!(data.user_name, "Alice");
    assert!(data.level_starts.is_empty());
    assert!(data.level_completions.is_empty());
    assert!(data.best_scores.is_empty());
}

#[test]
fn legacy_records_without_best_scores_still_load() {
    // Records saved before best scores existed have no bestScores field
    let mut store = MemoryStore::new();
    store.set(
        "g-brain-player-data-Old",
        "{\"userName\":\"Old\",\
          \"levelStarts\":[{\"levelId\":\"boolean-gates-1\",\"startTime\":1}],\
          \"levelCompletions\":[{\"levelId\":\"boolean-gates-1\",\"status\":\"success\",\
            \"completionTime\":2,\"timeSpent\":1}]}",
    );

    let mut session = PlayerSession::new(Box::new(store));
    let data = session.player_data(Some("Old"));
    assert_eq!(data.user_name, "Old");
    assert_eq!(data.level_starts.len(), 1);
    assert_eq!(data.level_completions.len(), 1);
    assert_eq!(data.level_completions[0].status, CompletionStatus::Success);
    assert_eq!(data.level_completions[0].scores, None);
    assert!(data.best_scores.is_empty());
}

#[test]
fn the_null_store_degrades_every_operation() {
    let mut session = PlayerSession::new(Box::new(NullStore::new()));

    // Creation succeeds in memory but nothing sticks
    let name = session.create_new_player(Some("Ghost"));
    assert_eq!(name, "Ghost");
    assert_eq!(session.current_player(), "");
    assert!(session.all_player_names().is_empty());

    // With no resolvable player, tracking is a no-op
    session.track_level_start_at("color-sorting-1", None, T0);
    session.track_level_completion_at(
        "color-sorting-1",
        CompletionStatus::Success,
        None,
        None,
        T0 + 1000,
    );
    assert!(session.level_starts(None, None).is_empty());
    assert!(session.level_completions(None, None).is_empty());

    // Explicitly named players read as empty records
    assert!(session.level_completions(None, Some("Ghost")).is_empty());
    assert!(session.best_score("color-sorting-1", Some("Ghost")).is_none());
}
