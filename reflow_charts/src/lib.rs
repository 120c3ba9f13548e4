// Copyright 2026 the Reflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Responsive chart layout and rendering on top of `reflow_core`.
//!
//! The hard part of keeping a chart correct inside a resizable container is
//! not drawing shapes — it is the layout: deriving scale domains from data,
//! picking a readable tick count, and reserving margin space for titles and
//! tick labels *before* placing the plot area. This crate owns that core:
//!
//! - **[`TickPlan`]** picks a human-friendly axis step and tick count from a
//!   single maximum value.
//! - **Scales** ([`ScaleBand`], [`ScaleLinear`]) map category indices and
//!   values into pixel space; domains are fixed at construction, ranges are
//!   re-derived on every resize.
//! - **Layout** ([`ChartLayout`], [`PieLayout`]) turns container metrics and
//!   measured text extents into a clamped plot rectangle.
//! - **Renderers** ([`BarChart`], [`LineChart`], [`PieChart`]) own one
//!   immutable dataset each and recompute the full mark list per resize;
//!   `reflow_core::Scene` diffs it for the drawing backend.
//!
//! Datasets are validated once, at construction. Every `resize` is a pure
//! function of the current container measurements, so resizing twice at one
//! size produces an identical frame (and an empty diff).

#![no_std]

extern crate alloc;

mod axis;
mod bar_chart;
mod chart;
#[cfg(test)]
mod chart_tests;
mod data;
#[cfg(not(feature = "std"))]
mod float;
mod label;
mod layout;
mod line_chart;
mod palette;
mod pie_chart;
mod scale;
mod ticks;
mod z_order;

pub use axis::{CategoryAxis, StrokeStyle, ValueAxis};
pub use bar_chart::BarChart;
pub use chart::Chart;
pub use data::{ChartConfig, ColorOverride, ConfigError, DataPoint};
pub use label::{chart_label, format_value, point_label};
pub use layout::{
    ChartLayout, ChartLayoutSpec, ContainerMetrics, PIE_MIN_LABEL_FONT, PIE_PADDING, PIE_VIEW_BOX,
    PieLayout, Size, TITLE_FALLBACK_HEIGHT, Y_TITLE_MARGIN,
};
pub use line_chart::LineChart;
pub use palette::{BAR_PALETTE, PALETTE_LEN, PIE_PALETTE, label_fill, series_fill};
pub use pie_chart::PieChart;
pub use scale::{BAND_PADDING, ScaleBand, ScaleBandSpec, ScaleLinear, ScaleLinearSpec};
pub use ticks::{MAX_TICKS, TickPlan, format_tick};
pub use z_order::*;

// Re-exported so chart hosts only need this crate for the common path.
pub use reflow_text::{HeuristicTextMeasurer, TextMeasurer, TextStyle};
