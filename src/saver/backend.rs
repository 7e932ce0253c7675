/*
backend.rs

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

//! Key/value persistence backends.
//!
//! Backends never report errors to their callers: a failed read behaves like
//! a missing key and a failed write is dropped after being logged.
//! The worst outcome for the player is unrecorded progress, never a crash.

use log::{debug, error};
use std::collections::HashMap;
use std::fs::{self, File, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::PathBuf;

/// Flat string key/value store.
pub trait KeyValueStore {
    /// Return the value stored under the key, or None.
    fn get(&self, key: &str) -> Option<String>;

    /// Store the value under the key, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);

    /// Remove the key. Removing a missing key is not an error.
    fn remove(&mut self, key: &str);

    /// Return all the stored keys, in no particular order.
    fn keys(&self) -> Vec<String>;
}

/// File name extension for the [`DirStore`] value files.
const FILE_SUFFIX: &str = ".json";

/// Encode a key so that it can be used as a file name.
///
/// Player names can contain arbitrary characters; the few that cannot appear
/// in a file name are percent-encoded.
fn encode_key(key: &str) -> String {
    let mut encoded = String::with_capacity(key.len());
    for c in key.chars() {
        match c {
            '%' | '/' | '\\' => {
                encoded.push_str(&format!("%{:02x}", c as u32));
            }
            _ => encoded.push(c),
        }
    }
    encoded
}

/// Decode a file name back into the key it was encoded from.
fn decode_key(name: &str) -> String {
    let mut decoded = String::with_capacity(name.len());
    let mut chars = name.chars();
    while let Some(c) = chars.next() {
        if c == '%' {
            let hex: String = chars.by_ref().take(2).collect();
            match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                Some(decoded_char) => decoded.push(decoded_char),
                None => {
                    // Not one of our escapes; keep the characters as they are
                    decoded.push(c);
                    decoded.push_str(&hex);
                }
            }
        } else {
            decoded.push(c);
        }
    }
    decoded
}

/// Store that keeps one file per key in a data directory.
pub struct DirStore {
    /// Absolute path to the directory holding the value files.
    data_dir: PathBuf,
}

impl DirStore {
    /// Create a [`DirStore`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the values
    /// must be saved. The directory is created if it does not exist; when it
    /// cannot be created, the store behaves like an empty one and writes are
    /// dropped.
    pub fn new(data_dir: PathBuf) -> Self {
        debug!("Player data directory: {data_dir:?}");
        if let Err(error) = fs::create_dir_all(&data_dir) {
            error!("Cannot create the data directory {data_dir:?}: {error}");
        }
        Self { data_dir }
    }

    /// Return the path of the file that stores the given key.
    fn key_file(&self, key: &str) -> PathBuf {
        self.data_dir.join(encode_key(key) + FILE_SUFFIX)
    }
}

impl KeyValueStore for DirStore {
    fn get(&self, key: &str) -> Option<String> {
        let path: PathBuf = self.key_file(key);
        let file: File = match File::open(&path) {
            Ok(f) => f,
            Err(error) => {
                if error.kind() != ErrorKind::NotFound {
                    error!("Cannot read {path:?}: {error}");
                }
                return None;
            }
        };
        let mut reader: BufReader<File> = BufReader::new(file);
        let mut value: String = String::new();
        match reader.read_to_string(&mut value) {
            Ok(_) => Some(value),
            Err(error) => {
                error!("Cannot read {path:?}: {error}");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        let path: PathBuf = self.key_file(key);
        let file: File = match File::create(&path) {
            Ok(f) => f,
            Err(error) => {
                error!("Cannot write {path:?}: {error}");
                return;
            }
        };
        let mut writer: BufWriter<File> = BufWriter::new(file);
        if let Err(error) = writer.write_all(value.as_bytes()).and_then(|_| writer.flush()) {
            error!("Cannot write {path:?}: {error}");
        }
    }

    fn remove(&mut self, key: &str) {
        let _ = remove_file(self.key_file(key));
    }

    fn keys(&self) -> Vec<String> {
        let entries = match fs::read_dir(&self.data_dir) {
            Ok(e) => e,
            Err(error) => {
                error!("Cannot list the data directory {:?}: {error}", self.data_dir);
                return Vec::new();
            }
        };
        let mut keys: Vec<String> = Vec::new();
        for entry in entries.flatten() {
            let name = entry.file_name();
            if let Some(name) = name.to_str()
                && let Some(stem) = name.strip_suffix(FILE_SUFFIX)
            {
                keys.push(decode_key(stem));
            }
        }
        keys
    }
}

/// Store that keeps everything in memory.
#[derive(Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty [`MemoryStore`] object.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }

    fn keys(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }
}

/// Store that stores nothing.
///
/// Use this backend to run without persistence: every read is empty and
/// every write is silently dropped.
#[derive(Default)]
pub struct NullStore;

impl NullStore {
    /// Create a [`NullStore`] object.
    pub fn new() -> Self {
        Self
    }
}

impl KeyValueStore for NullStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&mut self, _key: &str, _value: &str) {}

    fn remove(&mut self, _key: &str) {}

    fn keys(&self) -> Vec<String> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_encoding_round_trip() {
        for key in ["Swift Wolf", "a/b", "100%", "plain", "back\\slash"] {
            assert_eq!(decode_key(&encode_key(key)), key);
        }
    }

    #[test]
    fn encoded_keys_have_no_path_separators() {
        let encoded = encode_key("a/b\\c");
        assert!(!encoded.contains('/'));
        assert!(!encoded.contains('\\'));
    }
}
