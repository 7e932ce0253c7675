/*
validation.rs

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

//! Derive level mastery from the completion records.
//!
//! A level is validated once the player reached its required number of
//! consecutive successful completions, counted backward from the most recent
//! completion. A failure interrupts the run; older successes behind a
//! failure never count.
//!
//! Mastery is never stored. It is recomputed from the completion records on
//! every query, so it cannot drift from the history that the
//! [`crate::session::PlayerSession`] keeps.

use crate::catalog;
use crate::player_data::CompletionStatus;
use crate::session::PlayerSession;

/// Required completions for levels that are not in the catalog.
/// Records can reference levels that a later release removed; those still
/// get a sensible threshold.
pub const DEFAULT_REQUIRED_COMPLETIONS: usize = 3;

/// Return the number of consecutive successful completions required to
/// validate the given level.
pub fn required_completions_for_level(level_id: &str) -> usize {
    match catalog::levels().into_iter().find(|l| l.id == level_id) {
        Some(meta) => meta.required_completions,
        None => DEFAULT_REQUIRED_COMPLETIONS,
    }
}

impl PlayerSession {
    /// Return the resolved player's validation progress for the given level.
    ///
    /// The progress is the number of consecutive successful completions,
    /// from the most recent one backward, capped at the level's required
    /// count. A player that does not resolve has no progress.
    pub fn validation_progress(&mut self, level_id: &str, player_name: Option<&str>) -> usize {
        let required: usize = required_completions_for_level(level_id);

        let mut completions = self.level_completions(Some(level_id), player_name);
        completions.sort_by(|a, b| b.completion_time.cmp(&a.completion_time));

        let mut count: usize = 0;
        for completion in &completions {
            match completion.status {
                CompletionStatus::Success => {
                    count += 1;
                    // Counting beyond the requirement changes nothing
                    if count >= required {
                        break;
                    }
                }
                CompletionStatus::Failure => break,
            }
        }
        count
    }

    /// Whether the resolved player validated the given level.
    pub fn is_level_validated(&mut self, level_id: &str, player_name: Option<&str>) -> bool {
        self.validation_progress(level_id, player_name) >= required_completions_for_level(level_id)
    }
}
