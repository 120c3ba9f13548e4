// Copyright 2026 the Reflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Margin reservation and plot-area arrangement.
//!
//! This follows the same basic shape as WPF-style layout:
//! - **Measure**: determine the margin each guide (title, axes) needs, from
//!   container font metrics and measured text extents.
//! - **Arrange**: place the plot rectangle inside the container after
//!   reserving those margins.
//!
//! All reservations are recomputed from scratch on every resize — the
//! arranged layout is a pure function of current measurements and never
//! carries state across calls.

use kurbo::Rect;
use reflow_text::{TextMeasurer, TextMetrics, TextStyle, measure_or_estimate};

/// A width/height pair in chart coordinate units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in chart coordinate units.
    pub width: f64,
    /// Height in chart coordinate units.
    pub height: f64,
}

/// The container measurements a chart reads at the start of every resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerMetrics {
    /// Current container width in pixels.
    pub width: f64,
    /// Current container height in pixels.
    pub height: f64,
    /// Current computed font size in pixels.
    pub font_size: f64,
}

impl ContainerMetrics {
    /// Creates container metrics.
    pub fn new(width: f64, height: f64, font_size: f64) -> Self {
        Self {
            width,
            height,
            font_size,
        }
    }

    /// One line of text: `1.25 * font_size`.
    pub fn line_height(&self) -> f64 {
        1.25 * self.font_size
    }

    /// Axis tick line length: `0.125 * font_size`.
    pub fn tick_size(&self) -> f64 {
        0.125 * self.font_size
    }

    /// The container extent as a [`Size`].
    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// The text style used for all chart text at this container's font size.
    pub fn text_style(&self) -> TextStyle {
        TextStyle::new(self.font_size)
    }
}

/// Title strip height assumed when the title text cannot be measured (or no
/// title exists), so layout stays stable before first paint.
pub const TITLE_FALLBACK_HEIGHT: f64 = 40.0;

/// Fixed left-margin widening applied when a rotated y-axis title is present.
pub const Y_TITLE_MARGIN: f64 = 20.0;

/// Layout inputs for a single chart: the container plus per-side margins.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChartLayoutSpec {
    /// The container extent (outer chart bounds).
    pub view_size: Size,
    /// Reserved title strip height above the plot.
    pub title_top: Option<f64>,
    /// Reserved width for the left (value) axis.
    pub axis_left: Option<f64>,
    /// Reserved height for the bottom (category) axis.
    pub axis_bottom: Option<f64>,
    /// Constant padding to the right of the plot.
    pub right_padding: f64,
}

/// Output of the arrange pass.
///
/// Fully recomputed per resize; holds the plot origin/extent and the
/// reserved guide rectangles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayout {
    /// Outer chart bounds.
    pub view: Rect,
    /// Reserved rectangle for the chart title strip (if any).
    pub title_top: Option<Rect>,
    /// Reserved rectangle for the left axis (if any).
    pub axis_left: Option<Rect>,
    /// Reserved rectangle for the bottom axis (if any).
    pub axis_bottom: Option<Rect>,
    /// The plot rectangle, within which data-bearing shapes are drawn.
    pub plot: Rect,
}

impl ChartLayout {
    /// Computes a layout from the provided specification.
    ///
    /// Margins clamp at zero, and so does the plot extent: when reservations
    /// exceed the container, the result is a degenerate but well-defined
    /// layout rather than an error — a squashed chart beats a failed render.
    pub fn arrange(spec: &ChartLayoutSpec) -> Self {
        let title_top_h = spec.title_top.unwrap_or(0.0).max(0.0);
        let axis_left_w = spec.axis_left.unwrap_or(0.0).max(0.0);
        let axis_bottom_h = spec.axis_bottom.unwrap_or(0.0).max(0.0);
        let right_padding = spec.right_padding.max(0.0);

        let view_w = spec.view_size.width.max(0.0);
        let view_h = spec.view_size.height.max(0.0);

        let plot_w = (view_w - axis_left_w - right_padding).max(0.0);
        let plot_h = (view_h - title_top_h - axis_bottom_h).max(0.0);

        let plot = Rect::new(
            axis_left_w,
            title_top_h,
            axis_left_w + plot_w,
            title_top_h + plot_h,
        );

        let title_top = (title_top_h > 0.0).then(|| Rect::new(0.0, 0.0, view_w, title_top_h));
        let axis_left = (axis_left_w > 0.0)
            .then(|| Rect::new(plot.x0 - axis_left_w, plot.y0, plot.x0, plot.y1));
        let axis_bottom = (axis_bottom_h > 0.0)
            .then(|| Rect::new(plot.x0, plot.y1, plot.x1, plot.y1 + axis_bottom_h));

        Self {
            view: Rect::new(0.0, 0.0, view_w, view_h),
            title_top,
            axis_left,
            axis_bottom,
            plot,
        }
    }
}

/// Height of the title strip text: measured when possible, otherwise
/// [`TITLE_FALLBACK_HEIGHT`].
pub(crate) fn title_text_height(
    measurer: &dyn TextMeasurer,
    title: Option<&str>,
    style: &TextStyle,
) -> f64 {
    title
        .and_then(|t| measurer.measure(t, style))
        .map_or(TITLE_FALLBACK_HEIGHT, |m: TextMetrics| m.line_height())
}

/// Top reservation: title text height plus one line of breathing room below.
pub(crate) fn top_reservation(
    container: &ContainerMetrics,
    title: Option<&str>,
    measurer: &dyn TextMeasurer,
) -> f64 {
    title_text_height(measurer, title, &container.text_style()) + container.line_height()
}

/// Bottom reservation: one line for category labels, another when an x-axis
/// title is present, plus the tick length.
pub(crate) fn bottom_reservation(container: &ContainerMetrics, has_x_title: bool) -> f64 {
    let lines = if has_x_title { 2.0 } else { 1.0 };
    container.line_height() * lines + container.tick_size()
}

/// Left reservation: the widest rendered y tick label plus a gap, widened to
/// a rotated-title column plus [`Y_TITLE_MARGIN`] when a y-axis title exists.
pub(crate) fn left_reservation(
    container: &ContainerMetrics,
    max_tick_label_width: f64,
    has_y_title: bool,
) -> f64 {
    let gap = if has_y_title {
        container.line_height() + Y_TITLE_MARGIN
    } else {
        container.line_height()
    };
    max_tick_label_width.max(0.0) + gap
}

/// Widest measured tick label among `labels`.
pub(crate) fn max_label_width<I, S>(measurer: &dyn TextMeasurer, labels: I, style: &TextStyle) -> f64
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    let mut max_w = 0.0_f64;
    for label in labels {
        let metrics = measure_or_estimate(measurer, label.as_ref(), style);
        max_w = max_w.max(metrics.advance_width);
    }
    max_w
}

/// Reference view-box extent for pie geometry.
pub const PIE_VIEW_BOX: f64 = 400.0;
/// Padding between the pie and the view-box edge.
pub const PIE_PADDING: f64 = 20.0;
/// Lower bound for pie label font size, in view-box units.
pub const PIE_MIN_LABEL_FONT: f64 = 10.0;

/// Isotropic pie layout.
///
/// Sector geometry lives in a fixed `400x400` view box and is scaled by the
/// backend's viewport transform, so only the label font size responds to
/// resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieLayout {
    /// `min(container width, height) / 400`.
    pub scaling_factor: f64,
    /// Label font size in view-box units, floored at [`PIE_MIN_LABEL_FONT`].
    pub label_font_size: f64,
}

impl PieLayout {
    /// Computes the pie layout for the current container size.
    pub fn compute(container: &ContainerMetrics) -> Self {
        let min_dimension = container.width.min(container.height).max(0.0);
        let scaling_factor = min_dimension / PIE_VIEW_BOX;
        let label_font_size = (Self::radius() * 0.1 * scaling_factor).max(PIE_MIN_LABEL_FONT);
        Self {
            scaling_factor,
            label_font_size,
        }
    }

    /// The pie radius in view-box units.
    pub fn radius() -> f64 {
        PIE_VIEW_BOX / 2.0 - PIE_PADDING
    }

    /// The pie center in view-box units.
    pub fn center() -> kurbo::Point {
        kurbo::Point::new(PIE_VIEW_BOX / 2.0, PIE_VIEW_BOX / 2.0)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use reflow_text::HeuristicTextMeasurer;

    use super::*;

    fn container() -> ContainerMetrics {
        ContainerMetrics::new(400.0, 300.0, 16.0)
    }

    #[test]
    fn arrange_places_plot_inside_margins() {
        let layout = ChartLayout::arrange(&ChartLayoutSpec {
            view_size: Size {
                width: 400.0,
                height: 300.0,
            },
            title_top: Some(60.0),
            axis_left: Some(50.0),
            axis_bottom: Some(40.0),
            right_padding: 20.0,
        });

        assert_eq!(layout.plot, Rect::new(50.0, 60.0, 380.0, 260.0));
        let title = layout.title_top.expect("missing title strip");
        assert_eq!(title, Rect::new(0.0, 0.0, 400.0, 60.0));
        let bottom = layout.axis_bottom.expect("missing bottom axis rect");
        assert!((bottom.y0 - layout.plot.y1).abs() < 1e-9);
    }

    #[test]
    fn overflowing_reservations_clamp_to_zero_plot() {
        let layout = ChartLayout::arrange(&ChartLayoutSpec {
            view_size: Size {
                width: 60.0,
                height: 50.0,
            },
            title_top: Some(60.0),
            axis_left: Some(80.0),
            axis_bottom: Some(40.0),
            right_padding: 20.0,
        });
        assert_eq!(layout.plot.width(), 0.0);
        assert_eq!(layout.plot.height(), 0.0);
    }

    #[test]
    fn bottom_reservation_grows_with_x_title() {
        let c = container();
        let without = bottom_reservation(&c, false);
        let with = bottom_reservation(&c, true);
        assert!((without - (c.line_height() + c.tick_size())).abs() < 1e-9);
        assert!((with - without - c.line_height()).abs() < 1e-9);
    }

    #[test]
    fn top_reservation_uses_fallback_without_title() {
        let c = container();
        let top = top_reservation(&c, None, &HeuristicTextMeasurer);
        assert!((top - (TITLE_FALLBACK_HEIGHT + c.line_height())).abs() < 1e-9);

        let measured = top_reservation(&c, Some("Title"), &HeuristicTextMeasurer);
        assert!((measured - (16.0 + c.line_height())).abs() < 1e-9);
    }

    #[test]
    fn left_reservation_widens_for_y_title() {
        let c = container();
        let plain = left_reservation(&c, 30.0, false);
        let titled = left_reservation(&c, 30.0, true);
        assert!((plain - (30.0 + c.line_height())).abs() < 1e-9);
        assert!((titled - plain - Y_TITLE_MARGIN).abs() < 1e-9);
    }

    #[test]
    fn pie_layout_scales_label_font_with_min_dimension() {
        let layout = PieLayout::compute(&container());
        // min dimension 300, factor 0.75, radius 180 -> 13.5.
        assert!((layout.scaling_factor - 0.75).abs() < 1e-9);
        assert!((layout.label_font_size - 13.5).abs() < 1e-9);

        let tiny = PieLayout::compute(&ContainerMetrics::new(80.0, 80.0, 16.0));
        assert_eq!(tiny.label_font_size, PIE_MIN_LABEL_FONT);
    }
}
