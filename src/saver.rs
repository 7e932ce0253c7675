/*
saver.rs

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

//! Save and restore the player records.
//!
//! The persistence backend is an explicit capability: the
//! [`backend::KeyValueStore`] trait abstracts a flat string key/value store,
//! and the session is constructed with one of its implementations.
//!
//! * [`backend::DirStore`] keeps one JSON file per key in a data directory.
//! * [`backend::MemoryStore`] keeps everything in memory. Nothing survives
//!   the process; this is the backend used by the tests.
//! * [`backend::NullStore`] stores nothing at all. Running without
//!   persistence is a configuration, not a runtime check: every read is
//!   empty and every write is dropped.
//!
//! The [`player::SaverPlayer`] object maps [`crate::player_data::PlayerData`]
//! records and the current-player pointer onto whichever backend was
//! injected.

pub mod backend;
pub mod player;
