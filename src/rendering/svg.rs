//! SVG document surface
//!
//! Produces a standalone `<svg>` element sized to the map container. Colors
//! and fonts are left to an external stylesheet targeting the
//! `geotick-container` and `geotick-outline` classes.

use crate::{
    core::{
        constants::{CONTAINER_CLASS, OUTLINE_CLASS},
        geo::Point,
    },
    rendering::{
        primitives::{DrawCommand, RectPrimitive, TextPrimitive},
        surface::DrawSurface,
    },
    Result,
};
use std::fmt::Write as _;

#[derive(Debug, Default, Clone)]
pub struct SvgSurface {
    size: Point,
    elements: Vec<DrawCommand>,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Serializes the current primitives into an SVG document
    pub fn to_svg_string(&self) -> String {
        let mut svg = String::new();
        let (width, height) = (fmt_num(self.size.x), fmt_num(self.size.y));
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" class="{CONTAINER_CLASS}" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        );

        for element in &self.elements {
            match element {
                DrawCommand::Rect(rect) => write_rect(&mut svg, rect),
                DrawCommand::Text(text) => write_text(&mut svg, text),
            }
        }

        svg.push_str("</svg>\n");
        svg
    }
}

impl DrawSurface for SvgSurface {
    fn attach(&mut self, size: Point) -> Result<()> {
        self.size = size;
        Ok(())
    }

    fn clear(&mut self) {
        self.elements.clear();
    }

    fn draw_rect(&mut self, rect: RectPrimitive) -> Result<()> {
        rect.validate()?;
        self.elements.push(DrawCommand::Rect(rect));
        Ok(())
    }

    fn draw_text(&mut self, text: TextPrimitive) -> Result<()> {
        text.validate()?;
        self.elements.push(DrawCommand::Text(text));
        Ok(())
    }
}

fn write_rect(svg: &mut String, rect: &RectPrimitive) {
    let _ = writeln!(
        svg,
        r#"  <rect class="{OUTLINE_CLASS}" x="{}" y="{}" width="{}" height="{}"/>"#,
        fmt_num(rect.x),
        fmt_num(rect.y),
        fmt_num(rect.width),
        fmt_num(rect.height),
    );
}

fn write_text(svg: &mut String, text: &TextPrimitive) {
    let (x, y) = (fmt_num(text.x), fmt_num(text.y));
    let _ = writeln!(
        svg,
        r#"  <text class="{OUTLINE_CLASS}" x="{x}" y="{y}" transform="rotate({}, {x}, {y})" style="font-size: {}px">{}</text>"#,
        fmt_num(text.rotation_deg),
        fmt_num(text.font_size_px),
        escape_xml(&text.text),
    );
}

/// Three decimals, trailing zeros trimmed
fn fmt_num(value: f64) -> String {
    let formatted = format!("{value:.3}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_owned(),
        other => other.to_owned(),
    }
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
