/*
cli_options.rs

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

//! Process command-line options.
//!
//! These options are intended for developers and for inspecting a local
//! installation: they list the level catalog and dump the progress that the
//! UI layer recorded for a player.
//!
//! # Examples
//!
//! List the stored players:
//!
//! ```text
//! $ gbrain --players
//! Ancient Owl
//! Silver Fox *
//! ```
//!
//! Show the progress of the selected player:
//!
//! ```text
//! $ gbrain --progress
//! Progress of Silver Fox
//!
//! color-sorting-1      2/5
//! color-sorting-2      5/5  validated  best swaps: 4 (2025-11-02 17:40)
//! formal-words-1       1/5
//! ```

use clap::Parser;
use log::debug;
use std::env;
use std::path::PathBuf;

use crate::catalog;
use crate::player_data::PlayerData;
use crate::saver::backend::DirStore;
use crate::session::PlayerSession;
use crate::validation;

/// Inspect the G-Brain level catalog and player progress.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// List the levels
    #[arg(short, long, default_value_t = false)]
    ls: bool,

    /// List the stored players (the selected player is marked with *)
    #[arg(short, long, default_value_t = false)]
    players: bool,

    /// Show a player's progress and best scores (defaults to the selected player)
    #[arg(
        short = 'o',
        long,
        value_name = "NAME",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    progress: Option<String>,

    /// Directory where the player data is stored
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Enable debug messages
    #[arg(long, default_value_t = false)]
    debug: bool,
}

/// Return the directory where the player data is stored.
fn resolve_data_dir(arg: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = arg {
        return dir;
    }
    match dirs::data_dir() {
        Some(mut dir) => {
            dir.push("g-brain");
            dir
        }
        None => PathBuf::from(".g-brain"),
    }
}

/// Parse and process command-line options. Return the process exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    //
    // List the levels
    //
    if args.ls {
        for section in catalog::sections() {
            println!("{}", section.title);
            for level in &section.levels {
                println!("  {}  {} ({})", level.id, level.title, level.source);
            }
        }
        return 0;
    }

    let data_dir: PathBuf = resolve_data_dir(args.data_dir);
    debug!("Using data directory {data_dir:?}");
    let mut session = PlayerSession::new(Box::new(DirStore::new(data_dir)));

    //
    // List the players
    //
    if args.players {
        let current: String = session.current_player();
        for name in session.all_player_names() {
            if name == current {
                println!("{name} *");
            } else {
                println!("{name}");
            }
        }
        return 0;
    }

    //
    // Show a player's progress
    //
    if let Some(name) = args.progress {
        let player: Option<&str> = if name.is_empty() { None } else { Some(&name) };
        let data: PlayerData = session.player_data(player);
        if data.user_name.is_empty() {
            eprintln!("No player selected. Use --players to list the stored players.");
            return 1;
        }
        print_progress(&mut session, &data);
        return 0;
    }

    println!("Nothing to do. Try --help for the available options.");
    0
}

/// Print a player's validation progress and best scores.
fn print_progress(session: &mut PlayerSession, data: &PlayerData) {
    println!("Progress of {}", data.user_name);
    println!();

    let player: Option<&str> = Some(data.user_name.as_str());
    for level in catalog::levels() {
        if data.completions_for_level(&level.id).is_empty() {
            continue;
        }

        let progress: usize = session.validation_progress(&level.id, player);
        let required: usize = validation::required_completions_for_level(&level.id);
        let mut line: String = format!("{:<20} {progress}/{required}", level.id);

        if session.is_level_validated(&level.id, player) {
            line.push_str("  validated");
        }
        if let Some(config) = catalog::score_config(&level.id)
            && let Some(best) = session.best_score(&level.id, player)
        {
            line.push_str(&format!("  best {}: {}", config.primary_score, best.score));
            if let Some(when) = chrono::DateTime::from_timestamp_millis(best.achieved_at) {
                line.push_str(&format!(" ({})", when.format("%Y-%m-%d %H:%M")));
            }
        }
        println!("{line}");
    }
}
