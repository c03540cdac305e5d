//! SVG output: a [`PathSink`] that writes filled paths as SVG elements.

#[cfg(test)]
#[path = "svg_test.rs"]
mod svg_test;

use crate::color::Color;
use crate::geometry::Point;
use crate::path::PathSink;

/// One filled `<path>` element.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgPathElement {
    pub fill: Color,
    /// Path data (`M x y L x y ...`).
    pub data: String,
}

/// Collects fills as SVG path elements.
#[derive(Debug, Clone, Default)]
pub struct SvgPath {
    elements: Vec<SvgPathElement>,
    open: Option<SvgPathElement>,
}

impl SvgPath {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed path elements, in paint order.
    #[must_use]
    pub fn elements(&self) -> &[SvgPathElement] {
        &self.elements
    }

    /// Standalone SVG document covering a `width` x `height` surface.
    #[must_use]
    pub fn to_document(&self, width: f64, height: f64) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        ));
        out.push('\n');
        for el in &self.elements {
            out.push_str(&format!(r#"  <path fill="{}" fill-rule="nonzero" d="{}"/>"#, el.fill, el.data));
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }

    fn push_segment(&mut self, op: char, point: Point) {
        if let Some(el) = self.open.as_mut() {
            if !el.data.is_empty() {
                el.data.push(' ');
            }
            el.data.push_str(&format!("{op}{} {}", point.x, point.y));
        }
    }
}

impl PathSink for SvgPath {
    fn begin_fill(&mut self, color: Color) {
        self.open = Some(SvgPathElement { fill: color, data: String::new() });
    }

    fn move_to(&mut self, point: Point) {
        self.push_segment('M', point);
    }

    fn line_to(&mut self, point: Point) {
        self.push_segment('L', point);
    }

    fn fill(&mut self) {
        if let Some(el) = self.open.take() {
            self.elements.push(el);
        }
    }
}
