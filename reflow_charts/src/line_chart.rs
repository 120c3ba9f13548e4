// Copyright 2026 the Reflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The line chart renderer.
//!
//! Points sit at band centers in dataset order — reordering the dataset
//! changes the path shape. The renderer also owns the tooltip overlay state:
//! a two-state machine (`Idle -> Showing(index) -> Idle`) per chart
//! instance, so multiple charts on one page never interfere. Entering a new
//! point while a tooltip shows replaces it, which keeps the invariant that
//! at most one overlay exists at any time.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Point, Rect};
use peniko::color::palette::css;
use reflow_core::{Mark, MarkId, TextAnchor, TextBaseline, TextMark};
use reflow_text::{TextMeasurer, measure_or_estimate};

use crate::axis::{CategoryAxis, StrokeStyle, ValueAxis};
use crate::chart::{
    Chart, PATH_ID, SERIES_IDS, TITLE_ID, TOOLTIP_IDS, X_AXIS_IDS, Y_AXIS_IDS, XyFrame,
    arrange_xy, chart_title_mark,
};
use crate::data::{ChartConfig, ConfigError};
use crate::label::{chart_label, format_value, point_label};
use crate::layout::ContainerMetrics;
use crate::scale::{ScaleBandSpec, ScaleLinearSpec};
use crate::ticks::TickPlan;
use crate::z_order;

/// Point marker radius in pixels.
const MARKER_RADIUS: f64 = 7.0;
/// Tooltip base extent; the width grows with the measured value text.
const TOOLTIP_BASE: f64 = 20.0;
/// Tooltip corner radius.
const TOOLTIP_CORNER: f64 = 2.0;

/// Tooltip overlay state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TooltipState {
    Idle,
    Showing(usize),
}

/// A line chart: a straight-line path through the points in dataset order,
/// with circular markers and an on-demand tooltip overlay.
#[derive(Clone, Debug)]
pub struct LineChart {
    id_base: u64,
    config: ChartConfig,
    plan: TickPlan,
    band: ScaleBandSpec,
    linear: ScaleLinearSpec,
    tooltip: TooltipState,
}

impl LineChart {
    /// Builds a line chart, validating the dataset first.
    pub fn new(id_base: u64, config: ChartConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let max = config.max_value();
        Ok(Self {
            id_base,
            plan: TickPlan::for_max(max),
            band: ScaleBandSpec::new(config.points.len()),
            linear: ScaleLinearSpec::new((0.0, max)),
            config,
            tooltip: TooltipState::Idle,
        })
    }

    /// The chart's configuration.
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Pointer entered the marker at `index`: show its tooltip, replacing
    /// any tooltip currently shown. Out-of-range indices are ignored.
    pub fn pointer_enter(&mut self, index: usize) {
        if index < self.config.points.len() {
            self.tooltip = TooltipState::Showing(index);
        }
    }

    /// Pointer left the chart: hide the tooltip.
    pub fn pointer_leave(&mut self) {
        self.tooltip = TooltipState::Idle;
    }

    /// Keyboard focus landed on the marker at `index` (same transition as
    /// [`Self::pointer_enter`]).
    pub fn focus(&mut self, index: usize) {
        self.pointer_enter(index);
    }

    /// Keyboard focus left the marker (same transition as
    /// [`Self::pointer_leave`]).
    pub fn blur(&mut self) {
        self.pointer_leave();
    }

    /// The index whose tooltip is currently shown, if any.
    pub fn tooltip(&self) -> Option<usize> {
        match self.tooltip {
            TooltipState::Idle => None,
            TooltipState::Showing(index) => Some(index),
        }
    }

    fn mark_id(&self, offset: u64) -> MarkId {
        MarkId::from_raw(self.id_base.wrapping_add(offset))
    }

    fn tooltip_marks(
        &self,
        frame: &XyFrame,
        container: &ContainerMetrics,
        measurer: &dyn TextMeasurer,
    ) -> Vec<Mark> {
        let TooltipState::Showing(index) = self.tooltip else {
            return Vec::new();
        };
        let point = &self.config.points[index];
        let x = frame.band.center(index);
        let y = frame.linear.map(point.value);

        let text = format_value(point.value);
        let text_w = measure_or_estimate(measurer, &text, &container.text_style()).advance_width;
        let w = TOOLTIP_BASE + text_w;
        let h = TOOLTIP_BASE;
        let rect = Rect::new(x - w / 2.0, y - 1.5 * h, x + w / 2.0, y - 0.5 * h);

        alloc::vec![
            Mark::round_rect(
                self.mark_id(TOOLTIP_IDS),
                z_order::TOOLTIP,
                rect,
                TOOLTIP_CORNER,
                css::WHITE_SMOKE,
            ),
            Mark::text(
                self.mark_id(TOOLTIP_IDS + 1),
                z_order::TOOLTIP,
                TextMark::new(Point::new(x, rect.y0 + h / 2.0), text)
                    .with_font_size(container.font_size)
                    .with_anchor(TextAnchor::Middle)
                    .with_baseline(TextBaseline::Middle)
                    .with_fill(css::BLACK),
            ),
        ]
    }
}

impl Chart for LineChart {
    fn resize(&self, container: &ContainerMetrics, measurer: &dyn TextMeasurer) -> Vec<Mark> {
        let frame = arrange_xy(
            &self.config,
            &self.plan,
            &self.band,
            &self.linear,
            container,
            measurer,
        );
        let plot = frame.layout.plot;
        let mut out = Vec::new();

        // The interpolated path, in dataset order.
        let mut path = BezPath::new();
        for (i, point) in self.config.points.iter().enumerate() {
            let pt = (frame.band.center(i), frame.linear.map(point.value));
            if i == 0 {
                path.move_to(pt);
            } else {
                path.line_to(pt);
            }
        }
        out.push(Mark::stroked_path(
            self.mark_id(PATH_ID),
            z_order::SERIES_STROKE,
            path,
            self.config.line_color,
            2.0,
        ));

        for (i, point) in self.config.points.iter().enumerate() {
            out.push(Mark::circle(
                self.mark_id(SERIES_IDS + i as u64),
                z_order::SERIES_POINTS,
                Point::new(frame.band.center(i), frame.linear.map(point.value)),
                MARKER_RADIUS,
                self.config.line_color,
            ));
        }

        let labels: Vec<&str> = self.config.points.iter().map(|p| p.text.as_str()).collect();
        if let Some(axis_rect) = frame.layout.axis_bottom {
            let axis = CategoryAxis {
                id_base: self.id_base.wrapping_add(X_AXIS_IDS),
                labels: &labels,
                title: self.config.x_title.as_deref(),
                font_size: container.font_size,
                tick_size: container.tick_size(),
                rule: StrokeStyle::default(),
            };
            out.extend(axis.marks(&frame.band, plot, axis_rect));
        }
        if let Some(axis_rect) = frame.layout.axis_left {
            let axis = ValueAxis {
                id_base: self.id_base.wrapping_add(Y_AXIS_IDS),
                plan: self.plan,
                title: self.config.y_title.as_deref(),
                font_size: container.font_size,
                grid: Some(StrokeStyle::solid(css::LIGHT_GRAY, 1.0)),
            };
            out.extend(axis.marks(&frame.linear, plot, axis_rect));
        }

        out.extend(chart_title_mark(
            self.mark_id(TITLE_ID),
            self.config.title.as_deref(),
            &frame.layout,
            container,
            measurer,
        ));

        out.extend(self.tooltip_marks(&frame, container, measurer));

        out
    }

    fn accessible_label(&self) -> String {
        chart_label(
            "Line",
            self.config.title.as_deref(),
            self.config.x_title.as_deref(),
            self.config.y_title.as_deref(),
        )
    }

    fn point_label(&self, index: usize) -> Option<String> {
        self.config.points.get(index).map(|p| {
            point_label(
                self.config.y_title.as_deref(),
                p.value,
                self.config.x_title.as_deref(),
                &p.text,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use alloc::vec::Vec;

    use reflow_core::MarkPayload;
    use reflow_text::HeuristicTextMeasurer;

    use crate::data::DataPoint;

    use super::*;

    fn chart() -> LineChart {
        LineChart::new(
            100,
            ChartConfig::new(vec![
                DataPoint::new(10.0, "A"),
                DataPoint::new(30.0, "B"),
                DataPoint::new(5.0, "C"),
            ])
            .with_title("Trend"),
        )
        .expect("valid config")
    }

    fn tooltip_rects(marks: &[Mark]) -> Vec<&Mark> {
        marks
            .iter()
            .filter(|m| matches!(m.payload, MarkPayload::RoundRect(_)))
            .collect()
    }

    #[test]
    fn idle_chart_shows_no_tooltip() {
        let chart = chart();
        let marks = chart.resize(
            &ContainerMetrics::new(400.0, 300.0, 16.0),
            &HeuristicTextMeasurer,
        );
        assert!(tooltip_rects(&marks).is_empty());
        assert_eq!(chart.tooltip(), None);
    }

    #[test]
    fn at_most_one_tooltip_across_any_event_sequence() {
        let mut chart = chart();
        let container = ContainerMetrics::new(400.0, 300.0, 16.0);

        chart.pointer_enter(0);
        chart.pointer_enter(2); // enter a new point before leaving the old one
        chart.focus(1);
        assert_eq!(chart.tooltip(), Some(1));
        let marks = chart.resize(&container, &HeuristicTextMeasurer);
        assert_eq!(tooltip_rects(&marks).len(), 1);

        chart.blur();
        assert_eq!(chart.tooltip(), None);
        let marks = chart.resize(&container, &HeuristicTextMeasurer);
        assert!(tooltip_rects(&marks).is_empty());
    }

    #[test]
    fn out_of_range_enter_is_ignored() {
        let mut chart = chart();
        chart.pointer_enter(99);
        assert_eq!(chart.tooltip(), None);
    }

    #[test]
    fn path_visits_points_in_dataset_order() {
        let chart = chart();
        let marks = chart.resize(
            &ContainerMetrics::new(400.0, 300.0, 16.0),
            &HeuristicTextMeasurer,
        );
        let path = marks
            .iter()
            .find_map(|m| match &m.payload {
                MarkPayload::Path(p) if m.id == MarkId::from_raw(100 + PATH_ID) => Some(&p.path),
                _ => None,
            })
            .expect("missing line path");
        let centers: Vec<_> = marks
            .iter()
            .filter_map(|m| match &m.payload {
                MarkPayload::Circle(c) => Some(c.center),
                _ => None,
            })
            .collect();
        assert_eq!(centers.len(), 3);
        assert_eq!(path.elements().len(), 3);
        // Middle point holds the maximum, so its marker sits highest.
        assert!(centers[1].y < centers[0].y);
        assert!(centers[1].y < centers[2].y);
    }
}
