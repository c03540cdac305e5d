//! Path sinks: the drawing surface interface the renderer writes into.
//!
//! The renderer never touches a concrete surface. It emits `begin_fill`,
//! `move_to`, `line_to` and `fill` into a [`PathSink`]; the browser canvas,
//! the SVG writer and the in-memory [`PathRecorder`] all implement it.
//! [`PathCounter`] keeps only totals, for callers that want stats without
//! holding the path in memory.

#[cfg(test)]
#[path = "path_test.rs"]
mod path_test;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::geometry::Point;

/// A surface that accepts one filled path at a time.
///
/// `fill` must use the nonzero winding rule: the renderer relies on
/// reverse-wound sub-paths cancelling the outer boundary.
pub trait PathSink {
    /// Start a new path that will be filled with `color`.
    fn begin_fill(&mut self, color: Color);
    /// Start a new sub-path at `point`.
    fn move_to(&mut self, point: Point);
    /// Extend the current sub-path to `point`.
    fn line_to(&mut self, point: Point);
    /// Fill the accumulated path.
    fn fill(&mut self);
}

/// One recorded drawing command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathCommand {
    BeginFill { color: Color },
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Fill,
}

/// Sink that keeps every command in order.
#[derive(Debug, Clone, Default)]
pub struct PathRecorder {
    commands: Vec<PathCommand>,
}

impl PathRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Number of `fill` commands recorded.
    #[must_use]
    pub fn fill_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::Fill))
            .count()
    }

    /// Vertices of every sub-path, split at each `move_to`.
    ///
    /// Line commands before the first `move_to` have no sub-path and are dropped.
    #[must_use]
    pub fn subpaths(&self) -> Vec<Vec<Point>> {
        let mut out: Vec<Vec<Point>> = Vec::new();
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo { x, y } => out.push(vec![Point::new(x, y)]),
                PathCommand::LineTo { x, y } => {
                    if let Some(current) = out.last_mut() {
                        current.push(Point::new(x, y));
                    }
                }
                PathCommand::BeginFill { .. } | PathCommand::Fill => {}
            }
        }
        out
    }

    /// Sub-paths beyond each fill's outer boundary, i.e. the holes.
    #[must_use]
    pub fn cut_count(&self) -> usize {
        let begins = self
            .commands
            .iter()
            .filter(|c| matches!(c, PathCommand::BeginFill { .. }))
            .count();
        self.subpaths().len().saturating_sub(begins)
    }

    /// Serialise the recorded commands as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error if serialisation fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.commands)
    }
}

impl PathSink for PathRecorder {
    fn begin_fill(&mut self, color: Color) {
        self.commands.push(PathCommand::BeginFill { color });
    }

    fn move_to(&mut self, point: Point) {
        self.commands.push(PathCommand::MoveTo { x: point.x, y: point.y });
    }

    fn line_to(&mut self, point: Point) {
        self.commands.push(PathCommand::LineTo { x: point.x, y: point.y });
    }

    fn fill(&mut self) {
        self.commands.push(PathCommand::Fill);
    }
}

/// Sink that only counts commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathCounter {
    pub fills: u64,
    pub subpaths: u64,
    pub segments: u64,
}

impl PathCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PathSink for PathCounter {
    fn begin_fill(&mut self, _color: Color) {}

    fn move_to(&mut self, _point: Point) {
        self.subpaths += 1;
    }

    fn line_to(&mut self, _point: Point) {
        self.segments += 1;
    }

    fn fill(&mut self) {
        self.fills += 1;
    }
}

/// Shoelace signed area of a polygon.
///
/// With y pointing down the sign is positive for a clockwise loop on screen
/// and negative for a counter-clockwise one. A repeated closing vertex adds
/// nothing.
#[must_use]
pub fn signed_area(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for (i, a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        twice += a.x * b.y - b.x * a.y;
    }
    twice / 2.0
}
