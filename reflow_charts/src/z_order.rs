// Copyright 2026 the Reflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Suggested z-order conventions for chart-generated marks.
//!
//! `reflow_core` marks carry an explicit `z_index` for render ordering. The
//! chart layer sets z-indexes consistently so backends don't have to
//! hand-tune paint order. Renderers should sort by `(z_index, MarkId)` for a
//! deterministic tie-break.

/// Gridlines drawn behind series.
pub const GRID_LINES: i32 = -50;

/// Filled series marks (bars, pie sectors).
pub const SERIES_FILL: i32 = 0;
/// Stroked series marks (line paths).
pub const SERIES_STROKE: i32 = 10;
/// Point markers drawn above lines.
pub const SERIES_POINTS: i32 = 20;

/// Axis tick marks.
pub const AXIS_RULES: i32 = 30;
/// Axis tick labels.
pub const AXIS_LABELS: i32 = 40;
/// Per-point value labels.
pub const VALUE_LABELS: i32 = 45;
/// Axis title labels.
pub const AXIS_TITLES: i32 = 50;

/// Chart-level titles.
pub const TITLES: i32 = 80;
/// Transient tooltip overlays, above everything else.
pub const TOOLTIP: i32 = 90;
