// Copyright 2026 the Reflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis guide mark generation, shared by the cartesian chart kinds.
//!
//! The category (x) axis places one label and one tick line per band; the
//! value (y) axis places tick labels from a [`TickPlan`] with full-width
//! grid lines across the plot. Tick values above the data maximum select the
//! step but are not rendered.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Point, Rect};
use peniko::Brush;
use peniko::color::palette::css;
use reflow_core::{Mark, MarkId, TextAnchor, TextBaseline, TextMark};

use crate::scale::{ScaleBand, ScaleLinear};
use crate::ticks::{TickPlan, format_tick};
use crate::z_order;

/// Gap between a tick line's end and its label.
const TICK_LABEL_GAP: f64 = 3.0;

/// A stroke paint plus width.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Creates a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// The bottom category axis: one tick + label per band, optional title.
///
/// Category labels are presentation-only — the accessible name for a data
/// point lives on its shape, so backends should hide these from readers.
#[derive(Clone, Debug)]
pub struct CategoryAxis<'a> {
    /// Stable-id base; each generated mark uses a deterministic offset.
    pub id_base: u64,
    /// One label per band, in band order.
    pub labels: &'a [&'a str],
    /// Optional axis title, centered below the labels.
    pub title: Option<&'a str>,
    /// Label/title font size.
    pub font_size: f64,
    /// Tick line length below the plot.
    pub tick_size: f64,
    /// Tick line stroke.
    pub rule: StrokeStyle,
}

impl CategoryAxis<'_> {
    /// Generates axis marks for the given plot and reserved axis rectangle.
    pub fn marks(&self, band: &ScaleBand, plot: Rect, axis_rect: Rect) -> Vec<Mark> {
        let y = plot.y1;
        let mut out = Vec::new();

        for (i, label) in self.labels.iter().enumerate() {
            let x = band.center(i);

            let mut tick = BezPath::new();
            tick.move_to((x, y));
            tick.line_to((x, y + self.tick_size));
            out.push(Mark::stroked_path(
                MarkId::from_raw(self.id_base + i as u64),
                z_order::AXIS_RULES,
                tick,
                self.rule.brush.clone(),
                self.rule.stroke_width,
            ));

            out.push(Mark::text(
                MarkId::from_raw(self.id_base + 1000 + i as u64),
                z_order::AXIS_LABELS,
                TextMark::new(Point::new(x, y + self.tick_size + TICK_LABEL_GAP), *label)
                    .with_font_size(self.font_size)
                    .with_anchor(TextAnchor::Middle)
                    .with_baseline(TextBaseline::Hanging)
                    .with_fill(css::BLACK),
            ));
        }

        if let Some(title) = self.title {
            // Title strip at the outer edge of the reserved rectangle.
            let x = 0.5 * (plot.x0 + plot.x1);
            out.push(Mark::text(
                MarkId::from_raw(self.id_base + 9000),
                z_order::AXIS_TITLES,
                TextMark::new(Point::new(x, axis_rect.y1 - self.font_size), title)
                    .with_font_size(self.font_size)
                    .with_anchor(TextAnchor::Middle)
                    .with_baseline(TextBaseline::Hanging)
                    .with_fill(css::BLACK),
            ));
        }

        out
    }
}

/// The left value axis: tick labels from a [`TickPlan`], grid lines across
/// the plot, optional rotated title.
#[derive(Clone, Debug)]
pub struct ValueAxis<'a> {
    /// Stable-id base; each generated mark uses a deterministic offset.
    pub id_base: u64,
    /// The tick plan for the axis.
    pub plan: TickPlan,
    /// Optional rotated axis title at the left edge.
    pub title: Option<&'a str>,
    /// Label/title font size.
    pub font_size: f64,
    /// Grid line stroke; `None` disables grid lines.
    pub grid: Option<StrokeStyle>,
}

impl ValueAxis<'_> {
    /// Generates axis marks for the given plot and reserved axis rectangle.
    ///
    /// `linear` must already be instantiated over the plot's vertical extent
    /// (inverted range).
    pub fn marks(&self, linear: &ScaleLinear, plot: Rect, axis_rect: Rect) -> Vec<Mark> {
        let step = self.plan.step();
        let max = linear.domain_max();
        let mut out = Vec::new();

        for (i, v) in self.plan.values().iter().copied().enumerate() {
            if v > max + 1e-9 {
                continue;
            }
            let y = linear.map(v);

            if let Some(grid) = &self.grid {
                let mut line = BezPath::new();
                line.move_to((plot.x0, y));
                line.line_to((plot.x1, y));
                out.push(Mark::stroked_path(
                    MarkId::from_raw(self.id_base + i as u64),
                    z_order::GRID_LINES,
                    line,
                    grid.brush.clone(),
                    grid.stroke_width,
                ));
            }

            out.push(Mark::text(
                MarkId::from_raw(self.id_base + 1000 + i as u64),
                z_order::AXIS_LABELS,
                TextMark::new(
                    Point::new(plot.x0 - TICK_LABEL_GAP, y),
                    format_tick(v, step),
                )
                .with_font_size(self.font_size)
                .with_anchor(TextAnchor::End)
                .with_baseline(TextBaseline::Middle)
                .with_fill(css::BLACK),
            ));
        }

        if let Some(title) = self.title {
            let y = 0.5 * (plot.y0 + plot.y1);
            out.push(Mark::text(
                MarkId::from_raw(self.id_base + 9000),
                z_order::AXIS_TITLES,
                TextMark::new(Point::new(axis_rect.x0 + self.font_size, y), title)
                    .with_font_size(self.font_size)
                    .with_angle(-90.0)
                    .with_anchor(TextAnchor::Middle)
                    .with_baseline(TextBaseline::Middle)
                    .with_fill(css::BLACK),
            ));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use reflow_core::MarkPayload;

    use crate::scale::{ScaleBandSpec, ScaleLinearSpec};

    use super::*;

    #[test]
    fn category_axis_emits_tick_and_label_per_band() {
        let band = ScaleBandSpec::new(3).instantiate((40.0, 380.0));
        let plot = Rect::new(40.0, 60.0, 380.0, 260.0);
        let axis_rect = Rect::new(40.0, 260.0, 380.0, 300.0);
        let axis = CategoryAxis {
            id_base: 0,
            labels: &["A", "B", "C"],
            title: Some("Month"),
            font_size: 16.0,
            tick_size: 2.0,
            rule: StrokeStyle::default(),
        };
        let marks = axis.marks(&band, plot, axis_rect);
        // 3 ticks + 3 labels + title.
        assert_eq!(marks.len(), 7);
        let texts: Vec<_> = marks
            .iter()
            .filter_map(|m| match &m.payload {
                MarkPayload::Text(t) => Some(t.text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, ["A", "B", "C", "Month"]);
    }

    #[test]
    fn value_axis_skips_ticks_above_the_data_maximum() {
        let linear = ScaleLinearSpec::new((0.0, 30.0)).instantiate((260.0, 60.0));
        let plot = Rect::new(40.0, 60.0, 380.0, 260.0);
        let axis_rect = Rect::new(0.0, 60.0, 40.0, 260.0);
        let axis = ValueAxis {
            id_base: 0,
            plan: crate::ticks::TickPlan::for_max(30.0),
            title: None,
            font_size: 16.0,
            grid: Some(StrokeStyle::default()),
        };
        let marks = axis.marks(&linear, plot, axis_rect);
        // Plan is {bound 35, count 7}: values 0..=35, but 35 > 30 is skipped,
        // leaving 7 rendered ticks as grid + label pairs.
        assert_eq!(marks.len(), 14);
        let labels: Vec<_> = marks
            .iter()
            .filter_map(|m| match &m.payload {
                MarkPayload::Text(t) => Some(t.text.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, ["0", "5", "10", "15", "20", "25", "30"]);
    }
}
