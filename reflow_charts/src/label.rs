// Copyright 2026 the Reflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accessible label composition.
//!
//! The only externally observable artifacts of this system are the geometry
//! written to the drawing backend and these label strings; backends assign
//! them to elements (e.g. `aria-label`). Absent titles render as empty
//! strings rather than being omitted, so the label shape is stable.

extern crate alloc;

use alloc::format;
use alloc::string::String;

/// Formats a data value for labels, using the shortest round-trip form
/// (`30`, not `30.0`).
pub fn format_value(value: f64) -> String {
    format!("{value}")
}

/// The chart-level accessible label:
/// `"{kind} chart, title: {t}, X axis title: {x}, Y axis text: {y}"`.
pub fn chart_label(
    kind: &str,
    title: Option<&str>,
    x_title: Option<&str>,
    y_title: Option<&str>,
) -> String {
    format!(
        "{kind} chart, title: {}, X axis title: {}, Y axis text: {}",
        title.unwrap_or(""),
        x_title.unwrap_or(""),
        y_title.unwrap_or("")
    )
}

/// The per-element accessible label:
/// `"Y axis: {yTitle}: {value}, X axis: {xTitle}: {text}"`.
pub fn point_label(y_title: Option<&str>, value: f64, x_title: Option<&str>, text: &str) -> String {
    format!(
        "Y axis: {}: {}, X axis: {}: {}",
        y_title.unwrap_or(""),
        format_value(value),
        x_title.unwrap_or(""),
        text
    )
}
