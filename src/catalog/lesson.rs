/*
lesson.rs

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

//! Lesson pages.
//!
//! Each level family opens with a lesson introducing its concepts.
//! Lessons are plain content: they are not levels, are not tracked, and have
//! no score. The content is HTML, rendered by the UI layer.

/// Content of a lesson page.
pub struct LessonConfig {
    /// Lesson title.
    pub title: &'static str,

    /// Lesson body, as HTML paragraphs.
    pub content: &'static str,

    /// Tag of the section the lesson introduces.
    pub section_id: &'static str,
}

/// Return the lesson with the given identifier, or None.
pub fn get_lesson_config(lesson_id: &str) -> Option<LessonConfig> {
    let config: LessonConfig = match lesson_id {
        "lesson-boolean-gates" => LessonConfig {
            title: "Introduction to Boolean Gates",
            content: "\
<p>Welcome to Boolean Gates! This section will teach you the fundamentals of boolean logic through interactive puzzles.</p>\n\
<p>Boolean gates are the building blocks of digital circuits. You'll learn about AND, OR, NOT, and other logical operations.</p>\n\
<p>Each puzzle will present you with inputs and gates, and your task is to connect them correctly to achieve the desired output.</p>\n\
<p>Take your time to understand each concept before moving on to the exercises.</p>",
            section_id: "boolean-gates",
        },
        "lesson-color-sorting" => LessonConfig {
            title: "Introduction to Color Sorting",
            content: "\
<p>Welcome to Color Sorting! This section challenges you to organize colors based on different properties.</p>\n\
<p>You'll learn to sort colors by various attributes like brightness, hue, saturation, and more.</p>\n\
<p>Each level will present you with a set of colors that need to be arranged in a specific order.</p>\n\
<p>Pay attention to the subtle differences between colors and use your visual skills to complete each challenge.</p>",
            section_id: "color-sorting",
        },
        "lesson-control-zone" => LessonConfig {
            title: "Introduction to Control Zone",
            content: "\
<p>Welcome to Control Zone! This section focuses on spatial reasoning and precise movement.</p>\n\
<p>You'll learn to navigate objects to target zones while avoiding obstacles and following specific rules.</p>\n\
<p>Each puzzle requires careful planning and precise control to move objects to their designated areas.</p>\n\
<p>Think ahead and plan your movements carefully to succeed in each challenge.</p>",
            section_id: "control-zone",
        },
        "lesson-formal-words" => LessonConfig {
            title: "Introduction to Formal Words",
            content: "\
<p>Welcome to Formal Words! This section explores formal language theory and string manipulation.</p>\n\
<p>You'll learn about formal languages, patterns, and string operations like concatenation, prefixes, and suffixes.</p>\n\
<p>Each puzzle will test your understanding of how strings can be constructed and manipulated according to formal rules.</p>\n\
<p>Focus on the patterns and rules presented in each exercise to solve the challenges.</p>",
            section_id: "formal-words",
        },
        _ => return None,
    };
    Some(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lessons_match_their_sections() {
        for section in ["boolean-gates", "color-sorting", "control-zone", "formal-words"] {
            let lesson = get_lesson_config(&format!("lesson-{section}"));
            match lesson {
                Some(lesson) => assert_eq!(lesson.section_id, section),
                None => panic!("missing lesson for section {section}"),
            }
        }
        assert!(get_lesson_config("lesson-fill-estimation").is_none());
    }
}
