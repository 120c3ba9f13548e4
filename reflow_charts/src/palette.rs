// Copyright 2026 the Reflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Default color palettes and per-element color resolution.

use peniko::Color;
use peniko::color::palette::css;

use crate::data::ChartConfig;

/// Length of the cyclic default palettes.
pub const PALETTE_LEN: usize = 7;

/// Default fill palette for bar charts, cycled by point index.
pub const BAR_PALETTE: [Color; PALETTE_LEN] = [
    Color::from_rgb8(0xfb, 0xb0, 0x33),
    Color::from_rgb8(0x2f, 0x2f, 0x2f),
    Color::from_rgb8(0xff, 0xb6, 0xc1),
    Color::from_rgb8(0xb0, 0xc4, 0xde),
    Color::from_rgb8(0xd3, 0xd3, 0xd3),
    Color::from_rgb8(0x20, 0xb2, 0xaa),
    Color::from_rgb8(0xfa, 0xfa, 0xd2),
];

/// Default fill palette for pie charts, cycled by point index.
pub const PIE_PALETTE: [Color; PALETTE_LEN] = [
    Color::from_rgb8(0x90, 0xee, 0x90),
    Color::from_rgb8(0xad, 0xd8, 0xe6),
    Color::from_rgb8(0xff, 0xb6, 0xc1),
    Color::from_rgb8(0xb0, 0xc4, 0xde),
    Color::from_rgb8(0xd3, 0xd3, 0xd3),
    Color::from_rgb8(0x20, 0xb2, 0xaa),
    Color::from_rgb8(0xfa, 0xfa, 0xd2),
];

/// Resolves the shape fill for the point at `index`.
///
/// Resolution order: group override > per-point color > palette color at
/// `index % PALETTE_LEN`.
pub fn series_fill(config: &ChartConfig, index: usize, palette: &[Color; PALETTE_LEN]) -> Color {
    if let Some(group) = &config.color_override {
        return group.fill;
    }
    if let Some(color) = config.points[index].color {
        return color;
    }
    palette[index % PALETTE_LEN]
}

/// Resolves the value-label color for the point at `index`.
///
/// Resolution order: group override > per-point font color > black.
pub fn label_fill(config: &ChartConfig, index: usize) -> Color {
    if let Some(group) = &config.color_override {
        return group.font;
    }
    config.points[index].font_color.unwrap_or(css::BLACK)
}
