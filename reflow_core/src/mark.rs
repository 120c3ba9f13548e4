// Copyright 2026 the Reflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mark types: the unit of communication between renderers and backends.

extern crate alloc;

use alloc::string::String;

use kurbo::{BezPath, Point, Rect, Shape};
use peniko::Brush;

/// Stable identity for a mark.
///
/// Renderers allocate ids deterministically at construction time (a base id
/// plus fixed offsets), so the same visual element keeps the same id across
/// frames and diffs stay minimal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Creates a mark id from a raw value.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns this id shifted by `delta` (wrapping).
    pub fn offset(self, delta: u64) -> Self {
        Self(self.0.wrapping_add(delta))
    }
}

/// The coarse kind of a mark, independent of its payload data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkKind {
    /// An axis-aligned rectangle.
    Rect,
    /// An axis-aligned rectangle with rounded corners.
    RoundRect,
    /// A circle.
    Circle,
    /// An arbitrary filled/stroked path.
    Path,
    /// A single line of text.
    Text,
}

/// Horizontal text anchoring, matching the SVG `text-anchor` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Anchor at the start of the text.
    Start,
    /// Anchor at the center of the text.
    Middle,
    /// Anchor at the end of the text.
    End,
}

/// Vertical text baseline, matching the SVG `dominant-baseline` values used
/// by chart backends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The alphabetic baseline.
    Alphabetic,
    /// The visual midline.
    Middle,
    /// The hanging baseline (text hangs below the anchor).
    Hanging,
}

/// A filled rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct RectMark {
    /// Geometry in scene coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
}

/// A filled rectangle with rounded corners.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundRectMark {
    /// Geometry in scene coordinates.
    pub rect: Rect,
    /// Corner radius in scene coordinates.
    pub radius: f64,
    /// Fill paint.
    pub fill: Brush,
}

/// A filled circle.
#[derive(Clone, Debug, PartialEq)]
pub struct CircleMark {
    /// Center in scene coordinates.
    pub center: Point,
    /// Radius in scene coordinates.
    pub radius: f64,
    /// Fill paint.
    pub fill: Brush,
}

/// A filled and/or stroked path.
#[derive(Clone, Debug, PartialEq)]
pub struct PathMark {
    /// Path data in scene coordinates.
    pub path: BezPath,
    /// Fill paint.
    pub fill: Brush,
    /// Stroke paint. Ignored when `stroke_width` is zero.
    pub stroke: Brush,
    /// Stroke width in scene coordinates. Zero disables the stroke.
    pub stroke_width: f64,
}

/// A single line of text (unshaped).
#[derive(Clone, Debug, PartialEq)]
pub struct TextMark {
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content.
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Rotation angle in degrees around `pos`.
    pub angle: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
}

impl TextMark {
    /// Creates a text mark with default styling (12px, start/middle, black).
    pub fn new(pos: Point, text: impl Into<String>) -> Self {
        Self {
            pos,
            text: text.into(),
            font_size: 12.0,
            angle: 0.0,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Middle,
            fill: Brush::default(),
        }
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the rotation angle (degrees).
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Sets the horizontal anchor.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the vertical baseline.
    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }
}

/// The data carried by one mark.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkPayload {
    /// A filled rectangle.
    Rect(RectMark),
    /// A filled rounded rectangle.
    RoundRect(RoundRectMark),
    /// A filled circle.
    Circle(CircleMark),
    /// A filled/stroked path.
    Path(PathMark),
    /// A line of text.
    Text(TextMark),
}

impl MarkPayload {
    /// Returns the coarse kind of this payload.
    pub fn kind(&self) -> MarkKind {
        match self {
            Self::Rect(_) => MarkKind::Rect,
            Self::RoundRect(_) => MarkKind::RoundRect,
            Self::Circle(_) => MarkKind::Circle,
            Self::Path(_) => MarkKind::Path,
            Self::Text(_) => MarkKind::Text,
        }
    }

    /// Returns geometric bounds in scene coordinates.
    ///
    /// Text bounds depend on shaping, which lives downstream; text payloads
    /// return `None` and backends estimate or measure as needed.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Rect(r) => Some(r.rect),
            Self::RoundRect(r) => Some(r.rect),
            Self::Circle(c) => {
                let r = c.radius.abs();
                Some(Rect::new(
                    c.center.x - r,
                    c.center.y - r,
                    c.center.x + r,
                    c.center.y + r,
                ))
            }
            Self::Path(p) => Some(p.path.bounding_box()),
            Self::Text(_) => None,
        }
    }
}

/// A stable-identity visual element with explicit render order.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Stable identity.
    pub id: MarkId,
    /// Render order hint; backends sort by `(z_index, id)`.
    pub z_index: i32,
    /// The visual payload.
    pub payload: MarkPayload,
}

impl Mark {
    /// Creates a mark from a payload.
    pub fn new(id: MarkId, z_index: i32, payload: MarkPayload) -> Self {
        Self {
            id,
            z_index,
            payload,
        }
    }

    /// Creates a rectangle mark.
    pub fn rect(id: MarkId, z_index: i32, rect: Rect, fill: impl Into<Brush>) -> Self {
        Self::new(
            id,
            z_index,
            MarkPayload::Rect(RectMark {
                rect,
                fill: fill.into(),
            }),
        )
    }

    /// Creates a rounded-rectangle mark.
    pub fn round_rect(
        id: MarkId,
        z_index: i32,
        rect: Rect,
        radius: f64,
        fill: impl Into<Brush>,
    ) -> Self {
        Self::new(
            id,
            z_index,
            MarkPayload::RoundRect(RoundRectMark {
                rect,
                radius,
                fill: fill.into(),
            }),
        )
    }

    /// Creates a circle mark.
    pub fn circle(
        id: MarkId,
        z_index: i32,
        center: Point,
        radius: f64,
        fill: impl Into<Brush>,
    ) -> Self {
        Self::new(
            id,
            z_index,
            MarkPayload::Circle(CircleMark {
                center,
                radius,
                fill: fill.into(),
            }),
        )
    }

    /// Creates a filled path mark with no stroke.
    pub fn filled_path(id: MarkId, z_index: i32, path: BezPath, fill: impl Into<Brush>) -> Self {
        Self::new(
            id,
            z_index,
            MarkPayload::Path(PathMark {
                path,
                fill: fill.into(),
                stroke: Brush::default(),
                stroke_width: 0.0,
            }),
        )
    }

    /// Creates a stroked path mark with a transparent fill.
    pub fn stroked_path(
        id: MarkId,
        z_index: i32,
        path: BezPath,
        stroke: impl Into<Brush>,
        stroke_width: f64,
    ) -> Self {
        Self::new(
            id,
            z_index,
            MarkPayload::Path(PathMark {
                path,
                fill: Brush::Solid(peniko::Color::TRANSPARENT),
                stroke: stroke.into(),
                stroke_width,
            }),
        )
    }

    /// Creates a text mark.
    pub fn text(id: MarkId, z_index: i32, text: TextMark) -> Self {
        Self::new(id, z_index, MarkPayload::Text(text))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn circle_bounds_are_centered() {
        let mark = Mark::circle(
            MarkId::from_raw(1),
            0,
            Point::new(10.0, 20.0),
            5.0,
            css::TOMATO,
        );
        let bounds = mark.payload.bounds().expect("circle has bounds");
        assert_eq!(bounds, Rect::new(5.0, 15.0, 15.0, 25.0));
    }

    #[test]
    fn text_has_no_intrinsic_bounds() {
        let mark = Mark::text(
            MarkId::from_raw(2),
            0,
            TextMark::new(Point::new(0.0, 0.0), "label"),
        );
        assert_eq!(mark.payload.kind(), MarkKind::Text);
        assert!(mark.payload.bounds().is_none());
    }
}
