/*
control_zone.rs

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

//! Control-zone levels.
//!
//! The player must move a token into a target zone.
//! The buttons do not move the token directly: each button adjusts one
//! parameter of a 2D transform (translation distance, rotation angle), and
//! the token position is the composition of the transforms.
//! The player has to discover what each button controls.

use rand::Rng;

use crate::catalog::{LevelFamily, LevelMeta, ScoreConfig, Source};

/// A point in level coordinates. The origin is the top-left corner and the
/// y axis points down, so a direction of 270 degrees moves the token up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// An axis-aligned rectangle, used for the target zone and the obstacles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A 2D transform the player adjusts through the buttons.
#[derive(Debug, Clone, PartialEq)]
pub enum Transform {
    /// Move the token along a fixed direction (degrees).
    Translation {
        id: &'static str,
        direction: f64,
        distance: f64,
    },

    /// Rotate the token around a fixed center (degrees).
    Rotation {
        id: &'static str,
        angle: f64,
        center_x: f64,
        center_y: f64,
        min_angle: f64,
        max_angle: f64,
    },
}

impl Transform {
    /// Identifier of the transform, referenced by the buttons.
    pub fn id(&self) -> &'static str {
        match self {
            Transform::Translation { id, .. } => id,
            Transform::Rotation { id, .. } => id,
        }
    }
}

/// Parameter of a transform that a button adjusts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformProperty {
    Distance,
    Angle,
}

/// A button of the level's control panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    /// Button identifier.
    pub id: &'static str,

    /// Label shown to the player. Labels are deliberately neutral so that
    /// the player has to discover what the button does.
    pub label: &'static str,

    /// Identifier of the transform the button adjusts.
    pub transform_id: &'static str,

    /// Parameter of the transform the button adjusts.
    pub property: TransformProperty,

    /// Amount added to the parameter on each press.
    pub increment: f64,
}

/// Configuration of a control-zone level.
pub struct ControlZoneConfig {
    /// Level title.
    pub title: &'static str,

    /// Level subtitle.
    pub subtitle: &'static str,

    /// Zone the token must reach.
    pub target_zone: Rect,

    /// Starting position of the token.
    pub initial_player_pos: Point,

    /// Transforms composing the token position.
    pub transforms: Vec<Transform>,

    /// Obstacles the token cannot cross.
    pub obstacles: Vec<Rect>,

    /// The control panel.
    pub buttons: Vec<Button>,
}

/// Minimum angle (degrees) a generated diagonal keeps away from the
/// horizontal, so the diagonal button never degenerates into a plain
/// left/right move.
const DIAGONAL_THRESHOLD_DEG: f64 = 20.0;

/// Generate a random direction that is not too close to horizontal.
///
/// Gives up after a bounded number of draws and falls back to 45 degrees.
pub fn random_diagonal_direction() -> f64 {
    let mut rng = rand::rng();

    for _ in 0..100 {
        let direction: f64 = rng.random_range(0.0..360.0);
        let dist_from_0: f64 = direction.min(360.0 - direction);
        let dist_from_180: f64 = (direction - 180.0).abs();
        if dist_from_0.min(dist_from_180) >= DIAGONAL_THRESHOLD_DEG {
            return direction;
        }
    }
    45.0
}

/// Return the configuration of the given control-zone level, or None.
pub fn get_level_config(level_id: &str) -> Option<ControlZoneConfig> {
    let config: ControlZoneConfig = match level_id {
        "control-zone-1" => ControlZoneConfig {
            title: "Control Zone 1: Simple Translation",
            subtitle: "Use the buttons to move the player to the target zone",
            target_zone: Rect { x: 300.0, y: 150.0, width: 40.0, height: 40.0 },
            initial_player_pos: Point { x: 300.0, y: 300.0 },
            transforms: vec![Transform::Translation {
                id: "vertical",
                direction: 270.0,
                distance: 0.0,
            }],
            obstacles: Vec::new(),
            buttons: vec![
                Button {
                    id: "up",
                    label: "Button A",
                    transform_id: "vertical",
                    property: TransformProperty::Distance,
                    increment: 20.0,
                },
                Button {
                    id: "down",
                    label: "Button B",
                    transform_id: "vertical",
                    property: TransformProperty::Distance,
                    increment: -20.0,
                },
            ],
        },
        "control-zone-2" => ControlZoneConfig {
            title: "Control Zone 2: Two Directions",
            subtitle: "Navigate using two button pairs",
            target_zone: Rect { x: 450.0, y: 150.0, width: 40.0, height: 40.0 },
            initial_player_pos: Point { x: 300.0, y: 300.0 },
            transforms: vec![
                Transform::Translation { id: "vertical", direction: 270.0, distance: 0.0 },
                Transform::Translation { id: "horizontal", direction: 0.0, distance: 0.0 },
            ],
            obstacles: Vec::new(),
            buttons: vec![
                Button {
                    id: "up",
                    label: "Button A",
                    transform_id: "vertical",
                    property: TransformProperty::Distance,
                    increment: 20.0,
                },
                Button {
                    id: "down",
                    label: "Button B",
                    transform_id: "vertical",
                    property: TransformProperty::Distance,
                    increment: -20.0,
                },
                Button {
                    id: "left",
                    label: "Button C",
                    transform_id: "horizontal",
                    property: TransformProperty::Distance,
                    increment: -20.0,
                },
                Button {
                    id: "right",
                    label: "Button D",
                    transform_id: "horizontal",
                    property: TransformProperty::Distance,
                    increment: 20.0,
                },
            ],
        },
        "control-zone-3" => ControlZoneConfig {
            title: "Control Zone 3: Diagonal Movement",
            subtitle: "Find the diagonal translation pattern",
            target_zone: Rect { x: 450.0, y: 450.0, width: 40.0, height: 40.0 },
            initial_player_pos: Point { x: 150.0, y: 150.0 },
            transforms: vec![
                Transform::Translation { id: "vertical", direction: 270.0, distance: 0.0 },
                Transform::Translation {
                    id: "diagonal",
                    direction: random_diagonal_direction(),
                    distance: 0.0,
                },
            ],
            obstacles: Vec::new(),
            buttons: vec![
                Button {
                    id: "up",
                    label: "Button A",
                    transform_id: "vertical",
                    property: TransformProperty::Distance,
                    increment: 20.0,
                },
                Button {
                    id: "down",
                    label: "Button B",
                    transform_id: "vertical",
                    property: TransformProperty::Distance,
                    increment: -20.0,
                },
                Button {
                    id: "diag-forward",
                    label: "Button C",
                    transform_id: "diagonal",
                    property: TransformProperty::Distance,
                    increment: 20.0,
                },
                Button {
                    id: "diag-back",
                    label: "Button D",
                    transform_id: "diagonal",
                    property: TransformProperty::Distance,
                    increment: -20.0,
                },
            ],
        },
        "control-zone-4" => ControlZoneConfig {
            title: "Control Zone 4: Translation and Rotation",
            subtitle: "Combine translation with rotation around the center",
            target_zone: Rect { x: 450.0, y: 150.0, width: 40.0, height: 40.0 },
            initial_player_pos: Point { x: 300.0, y: 300.0 },
            transforms: vec![
                Transform::Translation { id: "vertical", direction: 270.0, distance: 0.0 },
                Transform::Rotation {
                    id: "rotate",
                    angle: 0.0,
                    center_x: 300.0,
                    center_y: 300.0,
                    min_angle: -360.0,
                    max_angle: 360.0,
                },
            ],
            obstacles: Vec::new(),
            buttons: vec![
                Button {
                    id: "up",
                    label: "Button A",
                    transform_id: "vertical",
                    property: TransformProperty::Distance,
                    increment: 20.0,
                },
                Button {
                    id: "down",
                    label: "Button B",
                    transform_id: "vertical",
                    property: TransformProperty::Distance,
                    increment: -20.0,
                },
                Button {
                    id: "rotate-cw",
                    label: "Button C",
                    transform_id: "rotate",
                    property: TransformProperty::Angle,
                    increment: 15.0,
                },
                Button {
                    id: "rotate-ccw",
                    label: "Button D",
                    transform_id: "rotate",
                    property: TransformProperty::Angle,
                    increment: -15.0,
                },
            ],
        },
        _ => return None,
    };
    Some(config)
}

/// Number of levels in the family.
const NUM_LEVELS: usize = 4;

/// The control-zone level family.
pub struct ControlZone;

impl LevelFamily for ControlZone {
    fn tag(&self) -> &'static str {
        "control-zone"
    }

    fn title(&self) -> &'static str {
        "Control Zone"
    }

    fn levels(&self) -> Vec<LevelMeta> {
        (1..=NUM_LEVELS)
            .filter_map(|n| {
                let id: String = format!("{}-{n}", self.tag());
                let config = get_level_config(&id)?;
                // Only the diagonal level draws part of its configuration at
                // generation time
                let source: Source = if id == "control-zone-3" {
                    Source::Procgen
                } else {
                    Source::Fixed
                };
                Some(LevelMeta {
                    id,
                    title: config.title.to_string(),
                    description: config.subtitle.to_string(),
                    tags: vec!["geometry", "spatial"],
                    section: self.tag(),
                    source,
                    required_completions: 3,
                })
            })
            .collect()
    }

    fn score_config(&self, _level_id: &str) -> Option<ScoreConfig> {
        // Control-zone levels do not track a score metric
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_direction_stays_away_from_horizontal() {
        for _ in 0..100 {
            let direction = random_diagonal_direction();
            let dist_from_0 = direction.min(360.0 - direction);
            let dist_from_180 = (direction - 180.0).abs();
            assert!(dist_from_0.min(dist_from_180) >= DIAGONAL_THRESHOLD_DEG);
        }
    }

    #[test]
    fn buttons_reference_declared_transforms() {
        for n in 1..=NUM_LEVELS {
            let config = get_level_config(&format!("control-zone-{n}")).unwrap();
            for button in &config.buttons {
                assert!(
                    config.transforms.iter().any(|t| t.id() == button.transform_id),
                    "dangling transform {} in level {n}",
                    button.transform_id
                );
            }
        }
    }
}
