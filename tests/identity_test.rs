/*
identity_test.rs

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

//! Tests for player management: creation, selection, renaming, and deletion.

use gbrain::player_data::CompletionStatus;
use gbrain::saver::backend::MemoryStore;
use gbrain::session::PlayerSession;

const T0: i64 = 1_700_000_000_000;

#[test]
fn creating_a_player_selects_it() {
    let mut session = PlayerSession::new(Box::new(MemoryStore::new()));

    let name = session.create_new_player(Some("Alice"));
    assert_eq!(name, "Alice");
    assert_eq!(session.current_player(), "Alice");
    assert_eq!(session.all_player_names(), vec!["Alice".to_string()]);
}

#[test]
fn creating_a_player_without_a_name_generates_one() {
    let mut session = PlayerSession::new(Box::new(MemoryStore::new()));

    let name = session.create_new_player(None);
    assert!(!name.is_empty());
    assert!(name.contains(' '), "expected an adjective-noun name, got {name}");
    assert_eq!(session.current_player(), name);

    // A second player gets a different name
    let other = session.create_new_player(None);
    assert_ne!(name, other);
    assert_eq!(session.all_player_names().len(), 2);
}

#[test]
fn switching_changes_the_selected_player() {
    let mut session = PlayerSession::new(Box::new(MemoryStore::new()));
    session.create_new_player(Some("Alice"));
    session.create_new_player(Some("Bob"));
    assert_eq!(session.current_player(), "Bob");

    session.switch_player("Alice");
    assert_eq!(session.current_player(), "Alice");

    // Switching to an empty name does nothing
    session.switch_player("");
    assert_eq!(session.current_player(), "Alice");
}

#[test]
fn player_names_are_sorted() {
    let mut session = PlayerSession::new(Box::new(MemoryStore::new()));
    session.create_new_player(Some("Zoe"));
    session.create_new_player(Some("Alice"));
    session.create_new_player(Some("Mallory"));

    assert_eq!(
        session.all_player_names(),
        vec!["Alice".to_string(), "Mallory".to_string(), "Zoe".to_string()]
    );
}

#[test]
fn renaming_preserves_the_history() {
    let mut session = PlayerSession::new(Box::new(MemoryStore::new()));
    session.create_new_player(Some("Alice"));
    session.track_level_completion_at(
        "color-sorting-1",
        CompletionStatus::Success,
        None,
        None,
        T0,
    );

    session.rename_player("Alice", "Bob");

    let completions = session.level_completions(Some("color-sorting-1"), Some("Bob"));
    assert_eq!(completions.len(), 1);
    assert_eq!(completions[0].completion_time, T0);

    // The old key is gone: querying Alice yields the default empty record
    assert!(session.level_completions(None, Some("Alice")).is_empty());
    assert_eq!(session.all_player_names(), vec!["Bob".to_string()]);

    // The selection followed the rename
    assert_eq!(session.current_player(), "Bob");
}

#[test]
fn renaming_another_player_keeps_the_selection() {
    let mut session = PlayerSession::new(Box::new(MemoryStore::new()));
    session.create_new_player(Some("Alice"));
    session.create_new_player(Some("Bob"));

    session.rename_player("Alice", "Carol");
    assert_eq!(session.current_player(), "Bob");
    assert_eq!(
        session.all_player_names(),
        vec!["Bob".to_string(), "Carol".to_string()]
    );
}

#[test]
fn renaming_rejects_degenerate_names() {
    let mut session = PlayerSession::new(Box::new(MemoryStore::new()));
    session.create_new_player(Some("Alice"));

    session.rename_player("Alice", "");
    session.rename_player("", "Bob");
    session.rename_player("Alice", "Alice");

    assert_eq!(session.all_player_names(), vec!["Alice".to_string()]);
    assert_eq!(session.current_player(), "Alice");
}

#[test]
fn deleting_the_selected_player_clears_the_selection() {
    let mut session = PlayerSession::new(Box::new(MemoryStore::new()));
    session.create_new_player(Some("Alice"));

    session.delete_player("Alice");

    assert_eq!(session.current_player(), "");
    assert!(session.all_player_names().is_empty());
}

#[test]
fn deleting_another_player_keeps_the_selection() {
    let mut session = PlayerSession::new(Box::new(MemoryStore::new()));
    session.create_new_player(Some("Alice"));
    session.create_new_player(Some("Bob"));

    session.delete_player("Alice");

    assert_eq!(session.current_player(), "Bob");
    assert_eq!(session.all_player_names(), vec!["Bob".to_string()]);
}

#[test]
fn records_are_kept_per_player() {
    let mut session = PlayerSession::new(Box::new(MemoryStore::new()));
    session.create_new_player(Some("Alice"));
    session.track_level_completion_at(
        "boolean-gates-1",
        CompletionStatus::Success,
        None,
        None,
        T0,
    );

    session.create_new_player(Some("Bob"));
    assert!(session.level_completions(None, None).is_empty());
    assert_eq!(session.level_completions(None, Some("Alice")).len(), 1);

    // Explicit names bypass the selection in both directions
    session.track_level_completion_at(
        "boolean-gates-1",
        CompletionStatus::Failure,
        None,
        Some("Alice"),
        T0 + 1000,
    );
    assert_eq!(session.level_completions(None, Some("Alice")).len(), 2);
    assert!(session.level_completions(None, Some("Bob")).is_empty());
}
