/*
formal_words.rs

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

//! Formal-words levels.
//!
//! String puzzles over small alphabets: the player concatenates or reverses
//! words, and decides palindrome, prefix, suffix, and substring questions.
//! The early levels use English words so that the operations feel familiar;
//! the later levels switch to binary and hexadecimal words, where only the
//! formal definition helps.
//!
//! Every level generates a fresh [`Question`] each time it is opened.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::{LevelFamily, LevelMeta, ScoreConfig, ScoreTarget, Source};

/// English words used by the real-word levels.
const ENGLISH_WORDS: [&str; 60] = [
    "cat", "dog", "bird", "fish", "tree", "house", "car", "book", "pen", "desk", "sun", "moon",
    "star", "cloud", "rain", "snow", "wind", "water", "fire", "earth", "red", "blue", "green",
    "yellow", "orange", "purple", "black", "white", "gray", "brown", "big", "small", "tall",
    "short", "long", "wide", "narrow", "thick", "thin", "heavy", "run", "walk", "jump", "fly",
    "swim", "climb", "fall", "rise", "stop", "go", "apple", "banana", "orange", "grape", "pear",
    "peach", "berry", "mango", "lemon", "lime",
];

/// Formal alphabets the generators draw words from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alphabet {
    /// Characters 0 and 1.
    Binary,

    /// Characters 0 to 9 and a to f.
    Hex,
}

impl Alphabet {
    /// The characters of the alphabet.
    fn chars(&self) -> &'static [u8] {
        match self {
            Alphabet::Binary => b"01",
            Alphabet::Hex => b"0123456789abcdef",
        }
    }

    /// Name used in the question prompts.
    fn name(&self) -> &'static str {
        match self {
            Alphabet::Binary => "binary",
            Alphabet::Hex => "hex",
        }
    }
}

/// How the player answers a level's questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerType {
    /// Free text input.
    Text,

    /// Yes/no choice.
    Binary,

    /// Pick one option among several.
    MultipleChoice,
}

/// Kind of question a level asks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelType {
    RealConcatenate,
    FormalConcatenate,
    RealReverse,
    FormalReverse,
    PalindromeCheck,
    IsPrefix,
    IsSuffix,
    IsSubstring,
}

/// A generated question.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// Question shown to the player.
    pub prompt: String,

    /// Example showing the pattern.
    pub example: String,

    /// The expected answer.
    pub correct_answer: String,

    /// Choices for binary and multiple-choice answers.
    pub options: Option<Vec<String>>,
}

/// Configuration of a formal-words level.
pub struct FormalWordsConfig {
    /// Kind of question the level asks.
    pub level_type: LevelType,

    /// How the player answers.
    pub answer_type: AnswerType,

    /// Level title.
    pub title: &'static str,

    /// Level subtitle.
    pub subtitle: &'static str,

    /// Question generator.
    pub generate_question: fn() -> Question,
}

/// Generate a random word of the given length over the given alphabet.
pub fn generate_word(alphabet: Alphabet, length: usize) -> String {
    let mut rng = rand::rng();
    let chars: &[u8] = alphabet.chars();
    (0..length)
        .map(|_| chars[rng.random_range(0..chars.len())] as char)
        .collect()
}

/// Reverse a word.
pub fn reverse_string(word: &str) -> String {
    word.chars().rev().collect()
}

/// Whether a word reads the same forwards and backwards.
pub fn is_palindrome(word: &str) -> bool {
    word == reverse_string(word)
}

/// Turn a word into a palindrome of the same length by mirroring its first
/// half.
pub fn make_palindrome(word: &str) -> String {
    if is_palindrome(word) {
        return word.to_string();
    }
    let half: usize = word.len() / 2;
    let first_half: &str = &word[..half];
    let middle: &str = if word.len() % 2 == 1 {
        &word[half..half + 1]
    } else {
        ""
    };
    format!("{first_half}{middle}{}", reverse_string(first_half))
}

/// Number of choices produced for multiple-choice questions.
const NUM_CHOICES: usize = 8;

/// Generate shuffled multiple-choice options that contain the correct
/// answer, completed with unique random words of the same length.
pub fn multiple_choice_options(correct: &str, alphabet: Alphabet) -> Vec<String> {
    let mut options: Vec<String> = vec![correct.to_string()];
    while options.len() < NUM_CHOICES {
        let option: String = generate_word(alphabet, correct.len());
        if !options.contains(&option) {
            options.push(option);
        }
    }
    options.shuffle(&mut rand::rng());
    options
}

/// Pick a random alphabet.
fn random_alphabet() -> Alphabet {
    if rand::rng().random_bool(0.5) {
        Alphabet::Binary
    } else {
        Alphabet::Hex
    }
}

/// Pick a random English word.
fn random_english_word() -> &'static str {
    ENGLISH_WORDS[rand::rng().random_range(0..ENGLISH_WORDS.len())]
}

fn real_concatenate() -> Question {
    let mut rng = rand::rng();
    let num_words: usize = rng.random_range(2..=4);
    let words: Vec<&str> = (0..num_words).map(|_| random_english_word()).collect();

    Question {
        prompt: format!("Concatenate these words: {}", words.join(" + ")),
        example: "Example: \"cat\" + \"dog\" = \"catdog\"".to_string(),
        correct_answer: words.concat(),
        options: None,
    }
}

fn formal_concatenate() -> Question {
    let mut rng = rand::rng();
    let alphabet: Alphabet = random_alphabet();
    let num_words: usize = rng.random_range(2..=4);
    let words: Vec<String> = (0..num_words)
        .map(|_| generate_word(alphabet, rng.random_range(2..=4)))
        .collect();

    let example_1: String = generate_word(alphabet, 2);
    let example_2: String = generate_word(alphabet, 2);
    Question {
        prompt: format!(
            "Concatenate these {} words: {}",
            alphabet.name(),
            words.join(" + ")
        ),
        example: format!("Example: \"{example_1}\" + \"{example_2}\" = \"{example_1}{example_2}\""),
        correct_answer: words.concat(),
        options: None,
    }
}

fn real_reverse() -> Question {
    let word: &str = random_english_word();
    Question {
        prompt: format!("Write the reverse of: {word}"),
        example: "Example: reverse of \"cat\" is \"tac\"".to_string(),
        correct_answer: reverse_string(word),
        options: None,
    }
}

fn formal_reverse() -> Question {
    let mut rng = rand::rng();
    let alphabet: Alphabet = random_alphabet();
    let word: String = generate_word(alphabet, rng.random_range(3..=6));

    let example_word: &str = match alphabet {
        Alphabet::Binary => "101",
        Alphabet::Hex => "abc",
    };
    Question {
        prompt: format!("Write the reverse of this {} word: {word}", alphabet.name()),
        example: format!(
            "Example: reverse of \"{example_word}\" is \"{}\"",
            reverse_string(example_word)
        ),
        correct_answer: reverse_string(&word),
        options: None,
    }
}

/// Yes/no options shared by the decision questions.
fn yes_no() -> Option<Vec<String>> {
    Some(vec!["Yes".to_string(), "No".to_string()])
}

fn palindrome_check() -> Question {
    let mut rng = rand::rng();
    let alphabet: Alphabet = random_alphabet();
    let word: String = generate_word(alphabet, rng.random_range(3..=6));

    // Half of the questions present a palindrome
    let test_word: String = if rng.random_bool(0.5) {
        make_palindrome(&word)
    } else {
        word
    };

    let answer: &str = if is_palindrome(&test_word) { "Yes" } else { "No" };
    Question {
        prompt: format!("Is \"{test_word}\" a palindrome?"),
        example: match alphabet {
            Alphabet::Binary => "Example: \"101\" is a palindrome, \"110\" is not".to_string(),
            Alphabet::Hex => "Example: \"aba\" is a palindrome, \"abc\" is not".to_string(),
        },
        correct_answer: answer.to_string(),
        options: yes_no(),
    }
}

fn is_prefix_question() -> Question {
    let mut rng = rand::rng();
    let alphabet: Alphabet = random_alphabet();
    let base_length: usize = rng.random_range(4..=7);
    let base_word: String = generate_word(alphabet, base_length);

    let wanted: bool = rng.random_bool(0.5);
    let prefix_word: String = if wanted {
        base_word[..rng.random_range(1..base_length)].to_string()
    } else {
        let mut candidate: String = generate_word(alphabet, rng.random_range(1..=3));
        // Random short words can still be prefixes; break the match
        if base_word.starts_with(&candidate) {
            candidate.push(match alphabet {
                Alphabet::Binary => '1',
                Alphabet::Hex => 'a',
            });
        }
        candidate
    };

    let answer: &str = if base_word.starts_with(&prefix_word) { "Yes" } else { "No" };
    Question {
        prompt: format!("Is \"{prefix_word}\" a prefix of \"{base_word}\"?"),
        example: match alphabet {
            Alphabet::Binary => {
                "Example: \"10\" is a prefix of \"1011\", but \"11\" is not a prefix of \"1011\""
                    .to_string()
            }
            Alphabet::Hex => {
                "Example: \"ab\" is a prefix of \"abcd\", but \"cd\" is not a prefix of \"abcd\""
                    .to_string()
            }
        },
        correct_answer: answer.to_string(),
        options: yes_no(),
    }
}

fn is_suffix_question() -> Question {
    let mut rng = rand::rng();
    let alphabet: Alphabet = random_alphabet();
    let base_length: usize = rng.random_range(4..=7);
    let base_word: String = generate_word(alphabet, base_length);

    let wanted: bool = rng.random_bool(0.5);
    let suffix_word: String = if wanted {
        base_word[base_length - rng.random_range(1..base_length)..].to_string()
    } else {
        let mut candidate: String = generate_word(alphabet, rng.random_range(1..=3));
        if base_word.ends_with(&candidate) {
            candidate.insert(
                0,
                match alphabet {
                    Alphabet::Binary => '1',
                    Alphabet::Hex => 'a',
                },
            );
        }
        candidate
    };

    let answer: &str = if base_word.ends_with(&suffix_word) { "Yes" } else { "No" };
    Question {
        prompt: format!("Is \"{suffix_word}\" a suffix of \"{base_word}\"?"),
        example: match alphabet {
            Alphabet::Binary => {
                "Example: \"11\" is a suffix of \"1011\", but \"10\" is not a suffix of \"1011\""
                    .to_string()
            }
            Alphabet::Hex => {
                "Example: \"cd\" is a suffix of \"abcd\", but \"ab\" is not a suffix of \"abcd\""
                    .to_string()
            }
        },
        correct_answer: answer.to_string(),
        options: yes_no(),
    }
}

fn is_substring_question() -> Question {
    let mut rng = rand::rng();
    let alphabet: Alphabet = random_alphabet();
    let base_length: usize = rng.random_range(5..=8);
    let base_word: String = generate_word(alphabet, base_length);

    let wanted: bool = rng.random_bool(0.5);
    let sub_word: String = if wanted {
        let start: usize = rng.random_range(0..base_length - 2);
        let length: usize = rng.random_range(1..=3.min(base_length - start));
        base_word[start..start + length].to_string()
    } else {
        let mut candidate: String = generate_word(alphabet, rng.random_range(1..=3));
        if base_word.contains(&candidate) {
            candidate.insert_str(
                0,
                match alphabet {
                    Alphabet::Binary => "10",
                    Alphabet::Hex => "ab",
                },
            );
        }
        candidate
    };

    let answer: &str = if base_word.contains(&sub_word) { "Yes" } else { "No" };
    Question {
        prompt: format!("Is \"{sub_word}\" a substring of \"{base_word}\"?"),
        example: match alphabet {
            Alphabet::Binary => {
                "Example: \"01\" is a substring of \"1011\", but \"00\" is not a substring of \"1011\""
                    .to_string()
            }
            Alphabet::Hex => {
                "Example: \"bc\" is a substring of \"abcd\", but \"ac\" is not a substring of \"abcd\""
                    .to_string()
            }
        },
        correct_answer: answer.to_string(),
        options: yes_no(),
    }
}

/// Return the configuration of the given formal-words level, or None.
pub fn get_level_config(level_id: &str) -> Option<FormalWordsConfig> {
    let config: FormalWordsConfig = match level_id {
        "formal-words-1" => FormalWordsConfig {
            level_type: LevelType::RealConcatenate,
            answer_type: AnswerType::Text,
            title: "Formal Words 1: Real Word Concatenation",
            subtitle: "Concatenate 2-4 English words together",
            generate_question: real_concatenate,
        },
        "formal-words-2" => FormalWordsConfig {
            level_type: LevelType::FormalConcatenate,
            answer_type: AnswerType::Text,
            title: "Formal Words 2: Formal Word Concatenation",
            subtitle: "Concatenate 2-4 binary or hexadecimal words together",
            generate_question: formal_concatenate,
        },
        "formal-words-3" => FormalWordsConfig {
            level_type: LevelType::RealReverse,
            answer_type: AnswerType::Text,
            title: "Formal Words 3: Real Word Reverse",
            subtitle: "Write the reverse of an English word",
            generate_question: real_reverse,
        },
        "formal-words-4" => FormalWordsConfig {
            level_type: LevelType::FormalReverse,
            answer_type: AnswerType::Text,
            title: "Formal Words 4: Formal Word Reverse",
            subtitle: "Write the reverse of a binary or hexadecimal word",
            generate_question: formal_reverse,
        },
        "formal-words-5" => FormalWordsConfig {
            level_type: LevelType::PalindromeCheck,
            answer_type: AnswerType::Binary,
            title: "Formal Words 5: Palindrome Check",
            subtitle: "Determine if a binary or hexadecimal word is a palindrome",
            generate_question: palindrome_check,
        },
        "formal-words-6" => FormalWordsConfig {
            level_type: LevelType::IsPrefix,
            answer_type: AnswerType::Binary,
            title: "Formal Words 6: Is Prefix",
            subtitle: "Determine if one word is a prefix of another",
            generate_question: is_prefix_question,
        },
        "formal-words-7" => FormalWordsConfig {
            level_type: LevelType::IsSuffix,
            answer_type: AnswerType::Binary,
            title: "Formal Words 7: Is Suffix",
            subtitle: "Determine if one word is a suffix of another",
            generate_question: is_suffix_question,
        },
        "formal-words-8" => FormalWordsConfig {
            level_type: LevelType::IsSubstring,
            answer_type: AnswerType::Binary,
            title: "Formal Words 8: Is Substring",
            subtitle: "Determine if one word is a substring of another",
            generate_question: is_substring_question,
        },
        _ => return None,
    };
    Some(config)
}

/// Number of levels in the family.
const NUM_LEVELS: usize = 8;

/// The formal-words level family.
pub struct FormalWords;

impl LevelFamily for FormalWords {
    fn tag(&self) -> &'static str {
        "formal-words"
    }

    fn title(&self) -> &'static str {
        "Formal Words"
    }

    fn levels(&self) -> Vec<LevelMeta> {
        (1..=NUM_LEVELS)
            .filter_map(|n| {
                let id: String = format!("{}-{n}", self.tag());
                let config = get_level_config(&id)?;
                // The decision levels are quick yes/no questions, so
                // validating them takes a longer run than the writing levels
                let required_completions: usize = match config.answer_type {
                    AnswerType::Text => 5,
                    _ => 20,
                };
                Some(LevelMeta {
                    id,
                    title: config.title.to_string(),
                    description: config.subtitle.to_string(),
                    tags: vec!["strings", "formal-languages"],
                    section: self.tag(),
                    source: Source::Procgen,
                    required_completions,
                })
            })
            .collect()
    }

    fn score_config(&self, level_id: &str) -> Option<ScoreConfig> {
        get_level_config(level_id)?;
        Some(ScoreConfig {
            primary_score: "attempts",
            target: ScoreTarget::Minimize,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_words_use_their_alphabet() {
        for _ in 0..20 {
            let word = generate_word(Alphabet::Binary, 6);
            assert_eq!(word.len(), 6);
            assert!(word.chars().all(|c| c == '0' || c == '1'));

            let word = generate_word(Alphabet::Hex, 4);
            assert!(word.chars().all(|c| c.is_ascii_hexdigit() && !c.is_uppercase()));
        }
    }

    #[test]
    fn make_palindrome_produces_palindromes() {
        for word in ["abc", "10", "abcd", "12345", "aa"] {
            let palindrome = make_palindrome(word);
            assert_eq!(palindrome.len(), word.len());
            assert!(is_palindrome(&palindrome), "{palindrome} is not a palindrome");
        }
    }

    #[test]
    fn multiple_choice_options_are_unique_and_contain_the_answer() {
        let options = multiple_choice_options("1011", Alphabet::Binary);
        assert_eq!(options.len(), NUM_CHOICES);
        assert!(options.contains(&"1011".to_string()));
        let mut deduped = options.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), NUM_CHOICES);
    }

    #[test]
    fn concatenation_answer_matches_the_prompt() {
        for _ in 0..20 {
            let question = real_concatenate();
            let words: String = question
                .prompt
                .trim_start_matches("Concatenate these words: ")
                .split(" + ")
                .collect();
            assert_eq!(words, question.correct_answer);
        }
    }

    #[test]
    fn decision_questions_answer_their_own_prompt() {
        for _ in 0..50 {
            let question = is_prefix_question();
            assert!(matches!(question.correct_answer.as_str(), "Yes" | "No"));
            assert_eq!(question.options, yes_no());

            let question = palindrome_check();
            assert!(matches!(question.correct_answer.as_str(), "Yes" | "No"));
        }
    }
}
