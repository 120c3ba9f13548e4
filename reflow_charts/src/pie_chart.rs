// Copyright 2026 the Reflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pie chart renderer.
//!
//! Sector geometry lives in the fixed 400x400 view box (see
//! [`PieLayout`]); the backend's viewport transform scales it to the
//! container, so resize only updates the label font size. Sector order is
//! dataset order — no value sort is applied, so the on-screen order always
//! matches the input order. The angle origin sits at 12 o'clock and sweeps
//! clockwise.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use core::f64::consts::{FRAC_PI_2, TAU};

use kurbo::{BezPath, Circle, Point, Shape};
use reflow_core::{Mark, MarkId, TextAnchor, TextBaseline, TextMark};
use reflow_text::TextMeasurer;

use crate::chart::{Chart, LABEL_IDS, SERIES_IDS};
use crate::data::{ChartConfig, ConfigError};
use crate::label::{chart_label, format_value};
use crate::layout::{ContainerMetrics, PieLayout};
use crate::palette::{PIE_PALETTE, label_fill, series_fill};
use crate::z_order;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Curve flattening tolerance for sector paths, in view-box units.
const SECTOR_TOLERANCE: f64 = 0.1;

/// A pie chart: one sector per data point, labels at the arc centroids.
#[derive(Clone, Debug)]
pub struct PieChart {
    id_base: u64,
    config: ChartConfig,
}

impl PieChart {
    /// Builds a pie chart, validating the dataset first.
    pub fn new(id_base: u64, config: ChartConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { id_base, config })
    }

    /// The chart's configuration.
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Sector sweep angles in radians, in dataset order.
    ///
    /// Proportional to `value / sum(values)`. An all-zero dataset is a
    /// defined degenerate case: every sweep is zero (no visible sectors),
    /// never a division by zero.
    pub fn sweeps(&self) -> Vec<f64> {
        let sum: f64 = self.config.points.iter().map(|p| p.value).sum();
        self.config
            .points
            .iter()
            .map(|p| if sum > 0.0 { TAU * p.value / sum } else { 0.0 })
            .collect()
    }

    fn mark_id(&self, offset: u64) -> MarkId {
        MarkId::from_raw(self.id_base.wrapping_add(offset))
    }
}

impl Chart for PieChart {
    fn resize(&self, container: &ContainerMetrics, _measurer: &dyn TextMeasurer) -> Vec<Mark> {
        let layout = PieLayout::compute(container);
        let center = PieLayout::center();
        let radius = PieLayout::radius();
        let circle = Circle::new(center, radius);
        let mut out = Vec::new();

        // Clockwise from 12 o'clock; kurbo's angle parameter starts at the
        // +x axis, so sector angles shift by a quarter turn.
        let sweeps = self.sweeps();
        let mut start = 0.0;
        for (i, point) in self.config.points.iter().enumerate() {
            let sweep = sweeps[i];
            let path: BezPath = if sweep > 0.0 {
                circle
                    .segment(0.0, start - FRAC_PI_2, sweep)
                    .path_elements(SECTOR_TOLERANCE)
                    .collect()
            } else {
                BezPath::new()
            };
            out.push(Mark::filled_path(
                self.mark_id(SERIES_IDS + i as u64),
                z_order::SERIES_FILL,
                path,
                series_fill(&self.config, i, &PIE_PALETTE),
            ));

            // Label at the arc centroid: half radius along the mid-angle.
            let mid = start + 0.5 * sweep - FRAC_PI_2;
            let pos = Point::new(
                center.x + 0.5 * radius * mid.cos(),
                center.y + 0.5 * radius * mid.sin(),
            );
            out.push(Mark::text(
                self.mark_id(LABEL_IDS + i as u64),
                z_order::VALUE_LABELS,
                TextMark::new(
                    pos,
                    format!("{}: {}", point.text, format_value(point.value)),
                )
                .with_font_size(layout.label_font_size)
                .with_anchor(TextAnchor::Middle)
                .with_baseline(TextBaseline::Middle)
                .with_fill(label_fill(&self.config, i)),
            ));

            start += sweep;
        }

        out
    }

    fn accessible_label(&self) -> String {
        chart_label(
            "Pie",
            self.config.title.as_deref(),
            self.config.x_title.as_deref(),
            self.config.y_title.as_deref(),
        )
    }

    fn point_label(&self, index: usize) -> Option<String> {
        self.config
            .points
            .get(index)
            .map(|p| format!("{}: {}", p.text, format_value(p.value)))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::format;

    use reflow_core::MarkPayload;
    use reflow_text::HeuristicTextMeasurer;

    use crate::data::DataPoint;

    use super::*;

    fn chart(values: &[f64]) -> PieChart {
        let points = values
            .iter()
            .enumerate()
            .map(|(i, v)| DataPoint::new(*v, format!("p{i}")))
            .collect();
        PieChart::new(0, ChartConfig::new(points)).expect("valid config")
    }

    #[test]
    fn sweeps_sum_to_a_full_turn() {
        let chart = chart(&[10.0, 30.0, 5.0]);
        let total: f64 = chart.sweeps().iter().sum();
        assert!((total - TAU).abs() < 1e-9);
    }

    #[test]
    fn sector_order_matches_dataset_order() {
        // The largest value sits in the middle; sweeps must not be sorted.
        let chart = chart(&[10.0, 30.0, 5.0]);
        let sweeps = chart.sweeps();
        assert!(sweeps[1] > sweeps[0]);
        assert!(sweeps[0] > sweeps[2]);
    }

    #[test]
    fn all_zero_dataset_renders_no_visible_sectors() {
        let chart = chart(&[0.0, 0.0]);
        let sweeps = chart.sweeps();
        assert!(sweeps.iter().all(|s| *s == 0.0));

        let marks = chart.resize(
            &ContainerMetrics::new(400.0, 300.0, 16.0),
            &HeuristicTextMeasurer,
        );
        for mark in &marks {
            if let MarkPayload::Path(p) = &mark.payload {
                assert!(p.path.elements().is_empty(), "zero sweep must emit no path");
            }
        }
    }

    #[test]
    fn only_label_font_size_responds_to_resize() {
        let chart = chart(&[10.0, 30.0, 5.0]);
        let small = chart.resize(
            &ContainerMetrics::new(400.0, 300.0, 16.0),
            &HeuristicTextMeasurer,
        );
        let large = chart.resize(
            &ContainerMetrics::new(800.0, 600.0, 16.0),
            &HeuristicTextMeasurer,
        );

        for (a, b) in small.iter().zip(large.iter()) {
            match (&a.payload, &b.payload) {
                (MarkPayload::Path(pa), MarkPayload::Path(pb)) => {
                    assert_eq!(pa.path, pb.path, "sector geometry must not change");
                }
                (MarkPayload::Text(ta), MarkPayload::Text(tb)) => {
                    assert_eq!(ta.pos, tb.pos, "label anchors must not change");
                    assert!(tb.font_size > ta.font_size, "label font must scale up");
                }
                _ => panic!("mark kinds must be stable across resizes"),
            }
        }
    }
}
