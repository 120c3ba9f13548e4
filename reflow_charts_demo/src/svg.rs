// Copyright 2026 the Reflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG drawing backend for `reflow_charts_demo`.
//!
//! Applies scene diffs to a retained element map and serializes it to an SVG
//! document — the reference implementation of the backend contract: enters
//! create elements, updates restyle them, exits remove them.

use std::collections::HashMap;

use kurbo::Rect;
use peniko::Brush;
use reflow_core::{MarkDiff, MarkId, MarkPayload, TextAnchor, TextBaseline};

#[derive(Debug, Default)]
pub(crate) struct SvgScene {
    marks: HashMap<MarkId, (i32, MarkPayload)>,
    view_box: Option<Rect>,
    size: Option<(f64, f64)>,
    aria_label: Option<String>,
}

impl SvgScene {
    /// Sets the `viewBox` rectangle (the pie chart's fixed coordinate
    /// space; cartesian charts use container coordinates directly).
    pub(crate) fn set_view_box(&mut self, view_box: Rect) {
        self.view_box = Some(view_box);
    }

    /// Sets the rendered width/height attributes.
    pub(crate) fn set_size(&mut self, width: f64, height: f64) {
        self.size = Some((width, height));
    }

    /// Sets the root `aria-label`.
    pub(crate) fn set_aria_label(&mut self, label: impl Into<String>) {
        self.aria_label = Some(label.into());
    }

    pub(crate) fn apply_diffs(&mut self, diffs: &[MarkDiff]) {
        for diff in diffs {
            match diff {
                MarkDiff::Enter {
                    id, z_index, new, ..
                } => {
                    self.marks.insert(*id, (*z_index, new.clone()));
                }
                MarkDiff::Update {
                    id,
                    new_z_index,
                    new,
                } => {
                    self.marks.insert(*id, (*new_z_index, new.clone()));
                }
                MarkDiff::Exit { id } => {
                    self.marks.remove(id);
                }
            }
        }
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let view_box = self
            .view_box
            .unwrap_or_else(|| Rect::new(0.0, 0.0, 400.0, 300.0));
        let (width, height) = self.size.unwrap_or((view_box.width(), view_box.height()));

        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" role="img" "#);
        if let Some(label) = &self.aria_label {
            out.push_str(&format!(r#"aria-label="{}" "#, escape_xml(label)));
        }
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{width}" height="{height}" preserveAspectRatio="xMinYMin meet">"#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
        ));
        out.push('\n');

        let mut ids: Vec<_> = self.marks.keys().copied().collect();
        ids.sort_by_key(|id| {
            let (z, _payload) = &self.marks[id];
            (*z, *id)
        });

        for id in ids {
            let (_z, payload) = &self.marks[&id];
            match payload {
                MarkPayload::Rect(r) => {
                    out.push_str(&format!(
                        r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                        r.rect.x0,
                        r.rect.y0,
                        r.rect.width(),
                        r.rect.height(),
                    ));
                    write_paint_attr(&mut out, "fill", &r.fill);
                    out.push_str("/>\n");
                }
                MarkPayload::RoundRect(r) => {
                    out.push_str(&format!(
                        r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}""#,
                        r.rect.x0,
                        r.rect.y0,
                        r.rect.width(),
                        r.rect.height(),
                        r.radius,
                    ));
                    write_paint_attr(&mut out, "fill", &r.fill);
                    out.push_str("/>\n");
                }
                MarkPayload::Circle(c) => {
                    out.push_str(&format!(
                        r#"<circle cx="{}" cy="{}" r="{}""#,
                        c.center.x, c.center.y, c.radius,
                    ));
                    write_paint_attr(&mut out, "fill", &c.fill);
                    out.push_str("/>\n");
                }
                MarkPayload::Path(p) => {
                    let d = p.path.to_svg();
                    out.push_str(&format!(r#"<path d="{d}""#));
                    write_paint_attr(&mut out, "fill", &p.fill);
                    if p.stroke_width > 0.0 {
                        write_paint_attr(&mut out, "stroke", &p.stroke);
                        out.push_str(&format!(r#" stroke-width="{}""#, p.stroke_width));
                    }
                    out.push_str("/>\n");
                }
                MarkPayload::Text(t) => {
                    let baseline = match t.baseline {
                        TextBaseline::Middle => "middle",
                        TextBaseline::Alphabetic => "alphabetic",
                        TextBaseline::Hanging => "hanging",
                    };
                    out.push_str(&format!(
                        r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="{baseline}""#,
                        t.pos.x, t.pos.y, t.font_size,
                    ));
                    if t.angle != 0.0 {
                        out.push_str(&format!(
                            r#" transform="rotate({} {} {})""#,
                            t.angle, t.pos.x, t.pos.y
                        ));
                    }
                    out.push_str(match t.anchor {
                        TextAnchor::Start => r#" text-anchor="start""#,
                        TextAnchor::Middle => r#" text-anchor="middle""#,
                        TextAnchor::End => r#" text-anchor="end""#,
                    });
                    write_paint_attr(&mut out, "fill", &t.fill);
                    out.push('>');
                    out.push_str(&escape_xml(&t.text));
                    out.push_str("</text>\n");
                }
            }
        }

        out.push_str("</svg>\n");
        out
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let paint = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (paint, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
