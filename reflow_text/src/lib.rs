// Copyright 2026 the Reflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for chart layout.
//!
//! Responsive chart layout reserves margins for titles and tick labels
//! *before* placing the plot area, and label extents depend on font rendering
//! the layout core does not control. Layout code therefore depends on this
//! tiny measurement interface instead of a shaping engine.
//!
//! Measurement is fallible: a backend may be asked to measure text whose
//! element is not attached yet. Callers go through [`measure_or_estimate`],
//! which falls back to the documented heuristic estimate instead of failing
//! layout.
//!
//! This crate is intentionally:
//! - small and dependency-free,
//! - `no_std`-friendly (it uses `alloc` only for owned font family names),
//! - backend-agnostic (native shaping engines and web canvas measurement can
//!   both implement the same trait).

#![no_std]

extern crate alloc;

use alloc::sync::Arc;

/// A minimal, fallible text measurement interface.
///
/// Returns `None` when the backend cannot measure the given text right now
/// (for example, the element is not attached to a render tree yet).
pub trait TextMeasurer {
    /// Measure a single line of text.
    ///
    /// `text` is treated as a single line; callers should split on `\n` if
    /// they want multi-line layout.
    fn measure(&self, text: &str, style: &TextStyle) -> Option<TextMetrics>;
}

/// Measures through `measurer`, falling back to [`estimate`] when the
/// measurer cannot produce metrics.
pub fn measure_or_estimate(
    measurer: &dyn TextMeasurer,
    text: &str,
    style: &TextStyle,
) -> TextMetrics {
    measurer
        .measure(text, style)
        .unwrap_or_else(|| estimate(text, style))
}

/// The constant heuristic estimate: ~0.6 em average glyph advance, 0.8 em
/// ascent, 0.2 em descent.
pub fn estimate(text: &str, style: &TextStyle) -> TextMetrics {
    TextMetrics {
        advance_width: 0.6 * style.font_size * text.chars().count() as f64,
        ascent: 0.8 * style.font_size,
        descent: 0.2 * style.font_size,
        leading: 0.0,
    }
}

/// Text styling inputs relevant to measurement.
///
/// Just enough to make chart layout consistent; richer typography belongs in
/// a higher-level text system.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in the chart's coordinate system (typically pixels).
    pub font_size: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
}

impl TextStyle {
    /// Creates a sans-serif style with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
        }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(12.0)
    }
}

/// Font family selection for measurement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family (CSS `serif`).
    Serif,
    /// A generic sans-serif family (CSS `sans-serif`).
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
    /// A named family (e.g. `"Inter"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the font family string for CSS-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// Measured metrics for a single line of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    /// The advance width (useful for horizontal layout).
    pub advance_width: f64,
    /// Distance from baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from baseline to the bottom of typical glyphs.
    pub descent: f64,
    /// Additional line spacing beyond ascent+descent.
    pub leading: f64,
}

impl TextMetrics {
    /// Returns `ascent + descent + leading`.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent + self.leading
    }
}

/// A measurer that always answers with the heuristic [`estimate`].
///
/// Suitable for demos, tests, and as the layout fallback path.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> Option<TextMetrics> {
        Some(estimate(text, style))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    struct Unmeasurable;

    impl TextMeasurer for Unmeasurable {
        fn measure(&self, _text: &str, _style: &TextStyle) -> Option<TextMetrics> {
            None
        }
    }

    #[test]
    fn estimate_scales_with_glyph_count() {
        let style = TextStyle::new(10.0);
        let short = estimate("ab", &style);
        let long = estimate("abcd", &style);
        assert!(long.advance_width > short.advance_width);
        assert_eq!(short.line_height(), 10.0);
    }

    #[test]
    fn unmeasurable_backend_falls_back_to_estimate() {
        let style = TextStyle::new(16.0);
        let metrics = measure_or_estimate(&Unmeasurable, "42", &style);
        assert_eq!(metrics, estimate("42", &style));
    }
}
