// Copyright 2026 the Reflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end chart demo: build the three chart kinds from one dataset,
//! drive `resize` the way a host does (twice at one size, then at another),
//! and dump the diffed scenes through the SVG backend.

mod svg;

use kurbo::Rect;
use peniko::color::palette::css;
use reflow_charts::{
    BarChart, Chart, ChartConfig, ContainerMetrics, DataPoint, HeuristicTextMeasurer, LineChart,
    PIE_VIEW_BOX, PieChart,
};
use reflow_core::Scene;

fn sample_config() -> ChartConfig {
    ChartConfig::new(vec![
        DataPoint::new(10.0, "A"),
        DataPoint::new(30.0, "B"),
        DataPoint::new(5.0, "C"),
        DataPoint::new(18.0, "D").with_color(css::REBECCA_PURPLE),
    ])
    .with_title("Weekly totals")
    .with_x_title("Group")
    .with_y_title("Count")
    .with_line_color(css::STEEL_BLUE)
}

fn main() {
    let measurer = HeuristicTextMeasurer;
    let initial = ContainerMetrics::new(400.0, 300.0, 16.0);
    let resized = ContainerMetrics::new(640.0, 360.0, 16.0);

    let bar = BarChart::new(0x1_0000_0000, sample_config()).expect("bar config is valid");
    let mut line = LineChart::new(0x2_0000_0000, sample_config()).expect("line config is valid");
    // Leave a tooltip showing so the overlay ends up in the dump.
    line.pointer_enter(1);
    let pie = PieChart::new(0x3_0000_0000, sample_config()).expect("pie config is valid");

    render("reflow_bar.svg", &bar, &measurer, initial, resized, false);
    render("reflow_line.svg", &line, &measurer, initial, resized, false);
    render("reflow_pie.svg", &pie, &measurer, initial, resized, true);
}

fn render(
    file: &str,
    chart: &dyn Chart,
    measurer: &HeuristicTextMeasurer,
    initial: ContainerMetrics,
    resized: ContainerMetrics,
    fixed_view_box: bool,
) {
    let mut scene = Scene::new();
    let mut svg_scene = svg::SvgScene::default();

    // Initial layout, then a repeat at the same size: the second tick must
    // be diff-free (resize is idempotent), so nothing reaches the backend.
    svg_scene.apply_diffs(&scene.tick(chart.resize(&initial, measurer)));
    let repeat = scene.tick(chart.resize(&initial, measurer));
    assert!(repeat.is_empty(), "resize at an unchanged size must not diff");

    // A real size change updates elements in place.
    svg_scene.apply_diffs(&scene.tick(chart.resize(&resized, measurer)));

    if fixed_view_box {
        // Pie geometry lives in its reference view box; the viewport
        // transform does the scaling.
        svg_scene.set_view_box(Rect::new(0.0, 0.0, PIE_VIEW_BOX, PIE_VIEW_BOX));
        let side = resized.width.min(resized.height);
        svg_scene.set_size(side, side);
    } else {
        svg_scene.set_view_box(Rect::new(0.0, 0.0, resized.width, resized.height));
        svg_scene.set_size(resized.width, resized.height);
    }
    svg_scene.set_aria_label(chart.accessible_label());

    std::fs::write(file, svg_scene.to_svg_string()).expect("write svg output");
    println!("wrote {file}");
}
