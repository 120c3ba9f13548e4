// Copyright 2026 the Reflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The chart capability trait and shared cartesian composition.
//!
//! A chart renderer is constructed once from a validated [`ChartConfig`] and
//! exposes a single idempotent operation: `resize`, invoked by the host
//! whenever the container's measured size changes (including once right
//! after construction). `resize` recomputes everything — reservation, scale
//! ranges, per-element geometry — from the current measurements and returns
//! the full mark frame; `reflow_core::Scene` turns that into backend diffs.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;
use reflow_core::{Mark, MarkId, TextAnchor, TextBaseline, TextMark};
use reflow_text::TextMeasurer;

use peniko::color::palette::css;

use crate::data::ChartConfig;
use crate::layout::{
    ChartLayout, ChartLayoutSpec, ContainerMetrics, bottom_reservation, left_reservation,
    max_label_width, title_text_height, top_reservation,
};
use crate::scale::{ScaleBand, ScaleBandSpec, ScaleLinear, ScaleLinearSpec};
use crate::ticks::{TickPlan, format_tick};
use crate::z_order;

/// A chart renderer: built once, resized many times.
pub trait Chart {
    /// Recomputes layout and geometry for the current container size and
    /// returns the full mark frame.
    ///
    /// Pure in the sense that equal container metrics (and equal renderer
    /// state) always produce an equal frame; nothing is memoized across
    /// calls.
    fn resize(&self, container: &ContainerMetrics, measurer: &dyn TextMeasurer) -> Vec<Mark>;

    /// The chart-level accessible label.
    fn accessible_label(&self) -> String;

    /// The accessible label for the data element at `index`, if it exists.
    fn point_label(&self, index: usize) -> Option<String>;
}

// Mark-id group strides within a chart's id space.
pub(crate) const SERIES_IDS: u64 = 0;
pub(crate) const LABEL_IDS: u64 = 100_000;
pub(crate) const X_AXIS_IDS: u64 = 200_000;
pub(crate) const Y_AXIS_IDS: u64 = 300_000;
pub(crate) const TITLE_ID: u64 = 400_000;
pub(crate) const PATH_ID: u64 = 500_000;
pub(crate) const TOOLTIP_IDS: u64 = 600_000;

/// The per-resize state of a cartesian chart: arranged layout plus
/// instantiated scales. Discarded at the end of each resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct XyFrame {
    pub(crate) layout: ChartLayout,
    pub(crate) band: ScaleBand,
    pub(crate) linear: ScaleLinear,
}

/// Measure-and-arrange for the cartesian chart kinds.
///
/// Reservation order matters: the left margin depends on the *rendered* tick
/// labels, which the tick plan fixes independently of pixel size, so the
/// margins can all be computed before the plot rectangle exists.
pub(crate) fn arrange_xy(
    config: &ChartConfig,
    plan: &TickPlan,
    band_spec: &ScaleBandSpec,
    linear_spec: &ScaleLinearSpec,
    container: &ContainerMetrics,
    measurer: &dyn TextMeasurer,
) -> XyFrame {
    let style = container.text_style();
    let max = linear_spec.domain.1;
    let step = plan.step();
    let tick_label_w = max_label_width(
        measurer,
        plan.values()
            .iter()
            .copied()
            .filter(|v| *v <= max + 1e-9)
            .map(|v| format_tick(v, step)),
        &style,
    );

    let spec = ChartLayoutSpec {
        view_size: container.size(),
        title_top: Some(top_reservation(
            container,
            config.title.as_deref(),
            measurer,
        )),
        axis_left: Some(left_reservation(
            container,
            tick_label_w,
            config.y_title.is_some(),
        )),
        axis_bottom: Some(bottom_reservation(container, config.x_title.is_some())),
        right_padding: container.line_height(),
    };
    let layout = ChartLayout::arrange(&spec);

    let band = band_spec.instantiate((layout.plot.x0, layout.plot.x1));
    let linear = linear_spec.instantiate((layout.plot.y1, layout.plot.y0));

    XyFrame {
        layout,
        band,
        linear,
    }
}

/// Emits the chart title mark, centered in the reserved title strip.
pub(crate) fn chart_title_mark(
    id: MarkId,
    title: Option<&str>,
    layout: &ChartLayout,
    container: &ContainerMetrics,
    measurer: &dyn TextMeasurer,
) -> Option<Mark> {
    let title = title?;
    let rect = layout.title_top?;
    let text_h = title_text_height(measurer, Some(title), &container.text_style());
    Some(Mark::text(
        id,
        z_order::TITLES,
        TextMark::new(
            Point::new(0.5 * (rect.x0 + rect.x1), rect.y0 + 0.5 * text_h),
            title,
        )
        .with_font_size(container.font_size)
        .with_anchor(TextAnchor::Middle)
        .with_baseline(TextBaseline::Middle)
        .with_fill(css::BLACK),
    ))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use reflow_text::HeuristicTextMeasurer;

    use crate::data::DataPoint;

    use super::*;

    fn sample_config() -> ChartConfig {
        ChartConfig::new(vec![
            DataPoint::new(10.0, "A"),
            DataPoint::new(30.0, "B"),
            DataPoint::new(5.0, "C"),
        ])
    }

    #[test]
    fn arrange_is_deterministic_for_equal_inputs() {
        let config = sample_config();
        let plan = TickPlan::for_max(30.0);
        let band = ScaleBandSpec::new(3);
        let linear = ScaleLinearSpec::new((0.0, 30.0));
        let container = ContainerMetrics::new(400.0, 300.0, 16.0);

        let a = arrange_xy(
            &config,
            &plan,
            &band,
            &linear,
            &container,
            &HeuristicTextMeasurer,
        );
        let b = arrange_xy(
            &config,
            &plan,
            &band,
            &linear,
            &container,
            &HeuristicTextMeasurer,
        );
        assert_eq!(a, b);
        assert!(a.layout.plot.width() > 0.0);
        assert!(a.layout.plot.height() > 0.0);
    }

    #[test]
    fn y_title_widens_the_left_margin() {
        let plan = TickPlan::for_max(30.0);
        let band = ScaleBandSpec::new(3);
        let linear = ScaleLinearSpec::new((0.0, 30.0));
        let container = ContainerMetrics::new(400.0, 300.0, 16.0);

        let plain = arrange_xy(
            &sample_config(),
            &plan,
            &band,
            &linear,
            &container,
            &HeuristicTextMeasurer,
        );
        let titled = arrange_xy(
            &sample_config().with_y_title("Units"),
            &plan,
            &band,
            &linear,
            &container,
            &HeuristicTextMeasurer,
        );
        assert!(titled.layout.plot.x0 > plain.layout.plot.x0);
    }
}
