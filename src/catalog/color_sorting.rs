/*
color_sorting.rs

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

//! Color-sorting levels.
//!
//! The player receives a shuffled set of colors and must arrange them by one
//! property: a single RGB channel, or the hue, saturation, or brightness
//! axis of the HSV representation.
//!
//! All the levels are generated when they are opened.
//! The easy generators produce colors that differ in the sorting property
//! only, on an equidistant ramp; the challenge generators also vary a second
//! property and spread the sorting property on non-equidistant values, so
//! neighboring colors can be arbitrarily close.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::{LevelFamily, LevelMeta, ScoreConfig, ScoreTarget, Source};

/// A color in RGB representation, one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Property the colors of a level must be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorProperty {
    Redness,
    Greenness,
    Blueness,
    Hue,
    Saturation,
    Brightness,
}

/// How the colors of a level are generated.
#[derive(Debug, Clone, Copy)]
pub enum ColorGenerator {
    /// Equidistant ramp along the sorting property; the other properties are
    /// random but shared by all the colors.
    Ramp(ColorProperty),

    /// Non-equidistant values along the sorting property, with a second
    /// property varying from color to color.
    Mixed(ColorProperty),
}

/// Configuration of a color-sorting level.
pub struct ColorSortingConfig {
    /// Number of colors to sort.
    pub num_colors: usize,

    /// Property the colors must be sorted by.
    pub property: ColorProperty,

    /// Generator producing the level's colors.
    pub generator: ColorGenerator,

    /// Level title.
    pub title: &'static str,

    /// Level subtitle.
    pub subtitle: &'static str,
}

impl ColorSortingConfig {
    /// Generate the shuffled colors for the level.
    pub fn generate_colors(&self) -> Vec<Rgb> {
        let mut colors: Vec<Rgb> = match self.generator {
            ColorGenerator::Ramp(property) => ramp_colors(property, self.num_colors),
            ColorGenerator::Mixed(property) => mixed_colors(property, self.num_colors),
        };
        colors.shuffle(&mut rand::rng());
        colors
    }
}

/// Convert a color from HSV to RGB.
///
/// The hue is in degrees (0 to 360), the saturation and the value are
/// percentages (0 to 100).
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    let s: f64 = s / 100.0;
    let v: f64 = v / 100.0;
    let c: f64 = v * s;
    let x: f64 = c * (1.0 - (((h / 60.0) % 2.0) - 1.0).abs());
    let m: f64 = v - c;

    let (r, g, b): (f64, f64, f64) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb {
        r: ((r + m) * 255.0).round() as u8,
        g: ((g + m) * 255.0).round() as u8,
        b: ((b + m) * 255.0).round() as u8,
    }
}

/// Convert a color from RGB to HSV.
///
/// Return the hue in degrees (0 to 360) and the saturation and value as
/// fractions (0 to 1).
pub fn rgb_to_hsv(color: Rgb) -> (f64, f64, f64) {
    let r: f64 = color.r as f64 / 255.0;
    let g: f64 = color.g as f64 / 255.0;
    let b: f64 = color.b as f64 / 255.0;

    let max: f64 = r.max(g).max(b);
    let min: f64 = r.min(g).min(b);
    let diff: f64 = max - min;

    let mut h: f64 = if diff == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / diff) % 6.0
    } else if max == g {
        (b - r) / diff + 2.0
    } else {
        (r - g) / diff + 4.0
    };
    h = (h * 60.0).round();
    if h < 0.0 {
        h += 360.0;
    }

    let s: f64 = if max == 0.0 { 0.0 } else { diff / max };
    (h, s, max)
}

/// Return the value of the given property for a color.
///
/// Channel properties are byte values (0 to 255), the hue is in degrees, and
/// the saturation and brightness are percentages.
pub fn property_value(color: Rgb, property: ColorProperty) -> u32 {
    match property {
        ColorProperty::Redness => color.r as u32,
        ColorProperty::Greenness => color.g as u32,
        ColorProperty::Blueness => color.b as u32,
        ColorProperty::Hue => rgb_to_hsv(color).0 as u32,
        ColorProperty::Saturation => (rgb_to_hsv(color).1 * 100.0).round() as u32,
        ColorProperty::Brightness => (rgb_to_hsv(color).2 * 100.0).round() as u32,
    }
}

/// Generate an equidistant color ramp along the given property.
fn ramp_colors(property: ColorProperty, num_colors: usize) -> Vec<Rgb> {
    let mut rng = rand::rng();
    let mut colors: Vec<Rgb> = Vec::with_capacity(num_colors);

    match property {
        ColorProperty::Redness | ColorProperty::Greenness | ColorProperty::Blueness => {
            let step: u32 = 255 / (num_colors as u32 - 1);
            // The two other channels are random but identical for all the
            // colors, so only the ramp channel distinguishes them
            let fixed_1: u8 = rng.random_range(0..=255);
            let fixed_2: u8 = rng.random_range(0..=255);
            for i in 0..num_colors {
                let value: u8 = (i as u32 * step).min(255) as u8;
                colors.push(match property {
                    ColorProperty::Redness => Rgb { r: value, g: fixed_1, b: fixed_2 },
                    ColorProperty::Greenness => Rgb { r: fixed_1, g: value, b: fixed_2 },
                    _ => Rgb { r: fixed_1, g: fixed_2, b: value },
                });
            }
        }
        ColorProperty::Hue => {
            let step: f64 = 360.0 / num_colors as f64;
            let s: f64 = rng.random_range(50..90) as f64;
            let v: f64 = rng.random_range(50..90) as f64;
            for i in 0..num_colors {
                colors.push(hsv_to_rgb((i as f64 * step) % 360.0, s, v));
            }
        }
        ColorProperty::Saturation => {
            let step: f64 = 100.0 / (num_colors as f64 - 1.0);
            let h: f64 = rng.random_range(0..360) as f64;
            let v: f64 = rng.random_range(50..90) as f64;
            for i in 0..num_colors {
                colors.push(hsv_to_rgb(h, (i as f64 * step).min(100.0), v));
            }
        }
        ColorProperty::Brightness => {
            let step: f64 = 100.0 / (num_colors as f64 - 1.0);
            let h: f64 = rng.random_range(0..360) as f64;
            let s: f64 = rng.random_range(50..90) as f64;
            for i in 0..num_colors {
                colors.push(hsv_to_rgb(h, s, (i as f64 * step).min(100.0)));
            }
        }
    }
    colors
}

/// Generate unique values covering the full range: the minimum and the
/// maximum are always included, the values in between are random.
fn non_equidistant_values(num_values: usize, min: u32, max: u32) -> Vec<u32> {
    let mut rng = rand::rng();
    let mut values: Vec<u32> = vec![min, max];
    while values.len() < num_values {
        let random: u32 = rng.random_range(min..=max);
        if !values.contains(&random) {
            values.push(random);
        }
    }
    values.sort_unstable();
    values
}

/// Generate colors with non-equidistant values along the given property and
/// a second varying property.
fn mixed_colors(property: ColorProperty, num_colors: usize) -> Vec<Rgb> {
    let mut rng = rand::rng();
    let mut colors: Vec<Rgb> = Vec::with_capacity(num_colors);

    match property {
        ColorProperty::Redness | ColorProperty::Greenness | ColorProperty::Blueness => {
            // One channel is fixed, the third one varies freely
            let fixed: u8 = rng.random_range(0..=255);
            let values: Vec<u32> = non_equidistant_values(num_colors, 0, 255);
            for value in values {
                let varying: u8 = rng.random_range(0..=255);
                let value: u8 = value as u8;
                colors.push(match property {
                    ColorProperty::Redness => Rgb { r: value, g: fixed, b: varying },
                    ColorProperty::Greenness => Rgb { r: fixed, g: value, b: varying },
                    _ => Rgb { r: fixed, g: varying, b: value },
                });
            }
        }
        ColorProperty::Hue => {
            // Saturation fixed, brightness varying
            let s: f64 = rng.random_range(50..90) as f64;
            for h in non_equidistant_values(num_colors, 0, 359) {
                let v: f64 = rng.random_range(50..90) as f64;
                colors.push(hsv_to_rgb(h as f64, s, v));
            }
        }
        ColorProperty::Saturation => {
            // Hue fixed, brightness varying
            let h: f64 = rng.random_range(0..360) as f64;
            for s in non_equidistant_values(num_colors, 0, 100) {
                let v: f64 = rng.random_range(50..90) as f64;
                colors.push(hsv_to_rgb(h, s as f64, v));
            }
        }
        ColorProperty::Brightness => {
            // Hue fixed, saturation varying
            let h: f64 = rng.random_range(0..360) as f64;
            for v in non_equidistant_values(num_colors, 0, 100) {
                let s: f64 = rng.random_range(50..90) as f64;
                colors.push(hsv_to_rgb(h, s as f64, v as f64));
            }
        }
    }
    colors
}

/// Return the configuration of the given color-sorting level, or None.
pub fn get_level_config(level_id: &str) -> Option<ColorSortingConfig> {
    let config: ColorSortingConfig = match level_id {
        "color-sorting-1" => ColorSortingConfig {
            num_colors: 5,
            property: ColorProperty::Redness,
            generator: ColorGenerator::Ramp(ColorProperty::Redness),
            title: "Color Sorting 1: Sort by Redness",
            subtitle: "Arrange colors from least red to most red (5 colors)",
        },
        "color-sorting-2" => ColorSortingConfig {
            num_colors: 5,
            property: ColorProperty::Greenness,
            generator: ColorGenerator::Ramp(ColorProperty::Greenness),
            title: "Color Sorting 2: Sort by Greenness",
            subtitle: "Arrange colors from least green to most green (5 colors)",
        },
        "color-sorting-3" => ColorSortingConfig {
            num_colors: 5,
            property: ColorProperty::Blueness,
            generator: ColorGenerator::Ramp(ColorProperty::Blueness),
            title: "Color Sorting 3: Sort by Blueness",
            subtitle: "Arrange colors from least blue to most blue (5 colors)",
        },
        "color-sorting-4" => ColorSortingConfig {
            num_colors: 10,
            property: ColorProperty::Redness,
            generator: ColorGenerator::Ramp(ColorProperty::Redness),
            title: "Color Sorting 4: More Redness",
            subtitle: "Sort 10 colors by redness",
        },
        "color-sorting-5" => ColorSortingConfig {
            num_colors: 10,
            property: ColorProperty::Greenness,
            generator: ColorGenerator::Ramp(ColorProperty::Greenness),
            title: "Color Sorting 5: More Greenness",
            subtitle: "Sort 10 colors by greenness",
        },
        "color-sorting-6" => ColorSortingConfig {
            num_colors: 5,
            property: ColorProperty::Hue,
            generator: ColorGenerator::Ramp(ColorProperty::Hue),
            title: "Color Sorting 6: Sort by Hue",
            subtitle: "Arrange colors in hue order (circular - any starting point works)",
        },
        "color-sorting-7" => ColorSortingConfig {
            num_colors: 10,
            property: ColorProperty::Hue,
            generator: ColorGenerator::Ramp(ColorProperty::Hue),
            title: "Color Sorting 7: More Hues",
            subtitle: "Sort 10 colors by hue (circular order)",
        },
        "color-sorting-8" => ColorSortingConfig {
            num_colors: 5,
            property: ColorProperty::Saturation,
            generator: ColorGenerator::Ramp(ColorProperty::Saturation),
            title: "Color Sorting 8: Sort by Saturation",
            subtitle: "Arrange colors from least saturated to most saturated",
        },
        "color-sorting-9" => ColorSortingConfig {
            num_colors: 5,
            property: ColorProperty::Brightness,
            generator: ColorGenerator::Ramp(ColorProperty::Brightness),
            title: "Color Sorting 9: Sort by Brightness",
            subtitle: "Arrange colors from darkest to brightest",
        },
        "color-sorting-10" => ColorSortingConfig {
            num_colors: 10,
            property: ColorProperty::Saturation,
            generator: ColorGenerator::Ramp(ColorProperty::Saturation),
            title: "Color Sorting 10: More Saturation",
            subtitle: "Sort 10 colors by saturation",
        },
        "color-sorting-11" => ColorSortingConfig {
            num_colors: 10,
            property: ColorProperty::Brightness,
            generator: ColorGenerator::Ramp(ColorProperty::Brightness),
            title: "Color Sorting 11: More Brightness",
            subtitle: "Sort 10 colors by brightness",
        },
        "color-sorting-12" => ColorSortingConfig {
            num_colors: 20,
            property: ColorProperty::Redness,
            generator: ColorGenerator::Mixed(ColorProperty::Redness),
            title: "Color Sorting 12: Challenge Redness",
            subtitle: "Sort 20 colors by redness (colors vary in other properties too)",
        },
        "color-sorting-13" => ColorSortingConfig {
            num_colors: 20,
            property: ColorProperty::Hue,
            generator: ColorGenerator::Mixed(ColorProperty::Hue),
            title: "Color Sorting 13: Challenge Hue",
            subtitle: "Sort 20 colors by hue (colors vary in brightness, saturation fixed)",
        },
        "color-sorting-14" => ColorSortingConfig {
            num_colors: 50,
            property: ColorProperty::Brightness,
            generator: ColorGenerator::Mixed(ColorProperty::Brightness),
            title: "Color Sorting 14: Ultimate Challenge",
            subtitle: "Sort 50 colors by brightness (colors vary in saturation, hue fixed)",
        },
        "color-sorting-15" => ColorSortingConfig {
            num_colors: 50,
            property: ColorProperty::Hue,
            generator: ColorGenerator::Mixed(ColorProperty::Hue),
            title: "Color Sorting 15: Ultimate Hue Challenge",
            subtitle: "Sort 50 colors by hue (colors vary in brightness, saturation fixed)",
        },
        _ => return None,
    };
    Some(config)
}

/// Number of levels in the family.
const NUM_LEVELS: usize = 15;

/// The color-sorting level family.
pub struct ColorSorting;

impl LevelFamily for ColorSorting {
    fn tag(&self) -> &'static str {
        "color-sorting"
    }

    fn title(&self) -> &'static str {
        "Color Sorting"
    }

    fn levels(&self) -> Vec<LevelMeta> {
        (1..=NUM_LEVELS)
            .filter_map(|n| {
                let id: String = format!("{}-{n}", self.tag());
                let config = get_level_config(&id)?;
                Some(LevelMeta {
                    id,
                    title: config.title.to_string(),
                    description: config.subtitle.to_string(),
                    tags: vec!["colors", "perception"],
                    section: self.tag(),
                    source: Source::Procgen,
                    required_completions: 5,
                })
            })
            .collect()
    }

    fn score_config(&self, level_id: &str) -> Option<ScoreConfig> {
        // The last level is a free challenge without score tracking
        if level_id == "color-sorting-15" || get_level_config(level_id).is_none() {
            return None;
        }
        Some(ScoreConfig {
            primary_score: "swaps",
            target: ScoreTarget::Minimize,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsv_round_trip_on_primaries() {
        assert_eq!(hsv_to_rgb(0.0, 100.0, 100.0), Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(hsv_to_rgb(120.0, 100.0, 100.0), Rgb { r: 0, g: 255, b: 0 });
        assert_eq!(hsv_to_rgb(240.0, 100.0, 100.0), Rgb { r: 0, g: 0, b: 255 });
        assert_eq!(rgb_to_hsv(Rgb { r: 255, g: 0, b: 0 }).0, 0.0);
        assert_eq!(rgb_to_hsv(Rgb { r: 0, g: 255, b: 0 }).0, 120.0);
    }

    #[test]
    fn ramp_colors_differ_in_the_ramp_property_only() {
        let colors = ramp_colors(ColorProperty::Redness, 5);
        assert_eq!(colors.len(), 5);
        let mut redness: Vec<u32> = colors.iter().map(|c| property_value(*c, ColorProperty::Redness)).collect();
        redness.sort_unstable();
        redness.dedup();
        assert_eq!(redness.len(), 5, "ramp values must be distinct");
        // The other channels are shared
        assert!(colors.iter().all(|c| c.g == colors[0].g && c.b == colors[0].b));
    }

    #[test]
    fn non_equidistant_values_cover_the_range() {
        let values = non_equidistant_values(20, 0, 255);
        assert_eq!(values.len(), 20);
        assert_eq!(values[0], 0);
        assert_eq!(values[19], 255);
        let mut deduped = values.clone();
        deduped.dedup();
        assert_eq!(deduped.len(), 20, "values must be unique");
    }

    #[test]
    fn level_generators_produce_the_declared_color_count() {
        for n in 1..=NUM_LEVELS {
            let config = get_level_config(&format!("color-sorting-{n}")).unwrap();
            assert_eq!(config.generate_colors().len(), config.num_colors, "level {n}");
        }
    }
}
