// Copyright 2026 the Reflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The bar chart renderer.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::color::palette::css;
use reflow_core::{Mark, MarkId, TextAnchor, TextBaseline, TextMark};
use reflow_text::TextMeasurer;

use crate::axis::{CategoryAxis, StrokeStyle, ValueAxis};
use crate::chart::{
    Chart, LABEL_IDS, SERIES_IDS, TITLE_ID, X_AXIS_IDS, Y_AXIS_IDS, arrange_xy, chart_title_mark,
};
use crate::data::{ChartConfig, ConfigError};
use crate::label::{chart_label, format_value, point_label};
use crate::layout::ContainerMetrics;
use crate::palette::{BAR_PALETTE, label_fill, series_fill};
use crate::scale::{ScaleBandSpec, ScaleLinearSpec};
use crate::ticks::TickPlan;
use crate::z_order;

/// A vertical bar chart: one padded band per data point, bars anchored at
/// the plot bottom, value labels just inside the bar tops.
#[derive(Clone, Debug)]
pub struct BarChart {
    id_base: u64,
    config: ChartConfig,
    plan: TickPlan,
    band: ScaleBandSpec,
    linear: ScaleLinearSpec,
}

impl BarChart {
    /// Builds a bar chart, validating the dataset first.
    ///
    /// The scale domains and tick plan are fixed here; only pixel ranges
    /// change on resize.
    pub fn new(id_base: u64, config: ChartConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let max = config.max_value();
        Ok(Self {
            id_base,
            plan: TickPlan::for_max(max),
            band: ScaleBandSpec::new(config.points.len()),
            linear: ScaleLinearSpec::new((0.0, max)),
            config,
        })
    }

    /// The chart's configuration.
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// The chart's tick plan.
    pub fn tick_plan(&self) -> TickPlan {
        self.plan
    }

    fn mark_id(&self, offset: u64) -> MarkId {
        MarkId::from_raw(self.id_base.wrapping_add(offset))
    }
}

impl Chart for BarChart {
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
        let bw = frame.band.band_width();
        let line_height = container.line_height();
        let mut out = Vec::new();

        for (i, point) in self.config.points.iter().enumerate() {
            let x0 = frame.band.x(i);
            // Top-left-anchored space: a taller value means a smaller y and
            // a larger height down to the plot bottom.
            let top = frame.linear.map(point.value);
            out.push(Mark::rect(
                self.mark_id(SERIES_IDS + i as u64),
                z_order::SERIES_FILL,
                Rect::new(x0, top, x0 + bw, plot.y1),
                series_fill(&self.config, i, &BAR_PALETTE),
            ));

            out.push(Mark::text(
                self.mark_id(LABEL_IDS + i as u64),
                z_order::VALUE_LABELS,
                TextMark::new(
                    Point::new(frame.band.center(i), top + line_height),
                    format_value(point.value),
                )
                .with_font_size(container.font_size)
                .with_anchor(TextAnchor::Middle)
                .with_baseline(TextBaseline::Alphabetic)
                .with_fill(label_fill(&self.config, i)),
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

        out
    }

    fn accessible_label(&self) -> String {
        chart_label(
            "Bar",
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
