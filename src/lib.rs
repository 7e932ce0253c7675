/*
lib.rs

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

//! G-Brain player progress core.
//!
//! G-Brain is a collection of small educational puzzles: boolean-gate
//! walls, color sorting, 2D transform navigation, formal-language word
//! puzzles, and fill estimation.
//! This crate holds everything below the user interface:
//!
//! * The [`catalog`] module describes the levels: metadata, per-family
//!   configuration, and the procedural content generators.
//! * The [`session`] module manages the players and records their level
//!   starts, completions, and best scores through an injected persistence
//!   backend (see [`saver`]).
//! * The [`validation`] module derives level mastery (consecutive
//!   successful completions) from the recorded history.
//!
//! The UI layer establishes a player with
//! [`session::PlayerSession::create_new_player`] or
//! [`session::PlayerSession::switch_player`], reports attempts with
//! [`session::PlayerSession::track_level_start`] and
//! [`session::PlayerSession::track_level_completion`], and queries
//! [`session::PlayerSession::validation_progress`] to decide when the next
//! level unlocks.

pub mod catalog;
pub mod cli_options;
pub mod names;
pub mod player_data;
pub mod saver;
pub mod session;
pub mod validation;
