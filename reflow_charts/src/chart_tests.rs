// Copyright 2026 the Reflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end renderer tests: resize determinism, scene diffs, and the
//! worked layout example from the chart kinds' shared pipeline.

extern crate std;

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;

use reflow_core::{Mark, MarkDiff, Scene};
use reflow_text::HeuristicTextMeasurer;

use crate::bar_chart::BarChart;
use crate::chart::Chart;
use crate::data::{ChartConfig, DataPoint};
use crate::layout::ContainerMetrics;
use crate::line_chart::LineChart;
use crate::pie_chart::PieChart;
use crate::ticks::TickPlan;

fn sample_points() -> Vec<DataPoint> {
    vec![
        DataPoint::new(10.0, "A"),
        DataPoint::new(30.0, "B"),
        DataPoint::new(5.0, "C"),
    ]
}

fn sample_config() -> ChartConfig {
    ChartConfig::new(sample_points())
        .with_title("Sample")
        .with_x_title("Category")
        .with_y_title("Value")
}

fn charts() -> Vec<Box<dyn Chart>> {
    vec![
        Box::new(BarChart::new(0, sample_config()).expect("valid config")),
        Box::new(LineChart::new(0, sample_config()).expect("valid config")),
        Box::new(PieChart::new(0, sample_config()).expect("valid config")),
    ]
}

#[test]
fn resize_is_idempotent_for_an_unchanged_container() {
    let container = ContainerMetrics::new(400.0, 300.0, 16.0);
    for chart in charts() {
        let first = chart.resize(&container, &HeuristicTextMeasurer);
        let second = chart.resize(&container, &HeuristicTextMeasurer);
        assert_eq!(first, second, "equal container must yield an equal frame");

        let mut scene = Scene::new();
        scene.tick(first);
        let diffs = scene.tick(second);
        assert!(diffs.is_empty(), "second tick at the same size must not diff");
    }
}

#[test]
fn size_changes_update_without_element_churn() {
    // The skeleton (one shape + one label per point, guides, titles) exists
    // independent of size; a resize may only move and restyle it.
    for chart in charts() {
        let mut scene = Scene::new();
        scene.tick(chart.resize(&ContainerMetrics::new(400.0, 300.0, 16.0), &HeuristicTextMeasurer));
        let diffs = scene.tick(
            chart.resize(&ContainerMetrics::new(640.0, 360.0, 16.0), &HeuristicTextMeasurer),
        );
        assert!(!diffs.is_empty(), "a real size change must re-lay-out");
        assert!(
            diffs.iter().all(|d| matches!(d, MarkDiff::Update { .. })),
            "resize must never create or destroy skeleton elements"
        );
    }
}

#[test]
fn tooltip_overlay_enters_and_exits_through_the_scene() {
    let container = ContainerMetrics::new(400.0, 300.0, 16.0);
    let mut chart = LineChart::new(0, sample_config()).expect("valid config");
    let mut scene = Scene::new();
    scene.tick(chart.resize(&container, &HeuristicTextMeasurer));
    let baseline = scene.len();

    chart.pointer_enter(1);
    let diffs = scene.tick(chart.resize(&container, &HeuristicTextMeasurer));
    assert!(
        diffs.iter().all(|d| matches!(d, MarkDiff::Enter { .. })),
        "showing a tooltip must only add overlay marks"
    );
    assert_eq!(scene.len(), baseline + 2);

    // Moving to another point reuses the overlay elements in place.
    chart.pointer_enter(2);
    let diffs = scene.tick(chart.resize(&container, &HeuristicTextMeasurer));
    assert!(diffs.iter().all(|d| matches!(d, MarkDiff::Update { .. })));
    assert_eq!(scene.len(), baseline + 2);

    chart.pointer_leave();
    let diffs = scene.tick(chart.resize(&container, &HeuristicTextMeasurer));
    assert!(diffs.iter().all(|d| matches!(d, MarkDiff::Exit { .. })));
    assert_eq!(scene.len(), baseline);
}

#[test]
fn worked_example_matches_the_documented_plan() {
    // Dataset [10, 30, 5] in a 400x300 container: domain [0, 30] and a
    // {bound 35, count 7} tick plan.
    let chart = BarChart::new(0, sample_config()).expect("valid config");
    assert_eq!(chart.tick_plan(), TickPlan {
        bound: 35.0,
        count: 7
    });

    let marks = chart.resize(
        &ContainerMetrics::new(400.0, 300.0, 16.0),
        &HeuristicTextMeasurer,
    );
    // 3 bars + 3 value labels + 3 x ticks + 3 x labels + x title
    // + 7 grid lines + 7 y labels + y title + chart title.
    assert_eq!(marks.len(), 29);
}

#[test]
fn degenerate_containers_still_render() {
    // Reservations exceed a tiny container; layout clamps instead of
    // failing, and every skeleton element is still emitted.
    let container = ContainerMetrics::new(30.0, 20.0, 16.0);
    for chart in charts() {
        let marks = chart.resize(&container, &HeuristicTextMeasurer);
        assert!(!marks.is_empty());
        assert!(marks.iter().all(|m| mark_is_finite(m)), "no NaN geometry");
    }
}

fn mark_is_finite(mark: &Mark) -> bool {
    use reflow_core::MarkPayload;
    match &mark.payload {
        MarkPayload::Rect(r) => r.rect.x0.is_finite() && r.rect.y1.is_finite(),
        MarkPayload::RoundRect(r) => r.rect.x0.is_finite() && r.rect.y1.is_finite(),
        MarkPayload::Circle(c) => c.center.x.is_finite() && c.center.y.is_finite(),
        MarkPayload::Path(p) => p
            .path
            .elements()
            .iter()
            .all(|el| el.end_point().is_none_or(|p| p.x.is_finite() && p.y.is_finite())),
        MarkPayload::Text(t) => t.pos.x.is_finite() && t.pos.y.is_finite(),
    }
}
