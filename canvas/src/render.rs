//! Fractal rendering: subdivides a triangle into a Sierpinski path.
//!
//! The whole fractal is a single filled path. The outer boundary is traced
//! clockwise (`p1 -> p2 -> p3`), and every removed centre triangle is traced
//! counter-clockwise (`n1 -> n3 -> n2`). Under the nonzero fill rule the
//! reversed sub-paths cancel the outer winding, so one `fill` paints the
//! solid regions and leaves the holes empty.
//!
//! Subdivision runs over an explicit work stack bounded by [`RenderLimits`],
//! so work stays finite however small `min_size` is relative to the triangle.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use serde::Serialize;

use crate::consts::{DEFAULT_MAX_CUTS, DEFAULT_MAX_DEPTH};
use crate::geometry::{Point, Triangle};
use crate::path::PathSink;

/// Axis-aligned bounding box of a sub-triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Smallest box containing all three points.
    #[must_use]
    pub fn of(a: Point, b: Point, c: Point) -> Self {
        let min_x = a.x.min(b.x).min(c.x);
        let min_y = a.y.min(b.y).min(c.y);
        let max_x = a.x.max(b.x).max(c.x);
        let max_y = a.y.max(b.y).max(c.y);
        Self { x: min_x, y: min_y, width: max_x - min_x, height: max_y - min_y }
    }

    /// Whether the box overlaps `[0, width] x [0, height]`. Touching edges count.
    #[must_use]
    pub fn intersects_surface(&self, width: f64, height: f64) -> bool {
        !(self.x > width || self.y > height || self.x + self.width < 0.0 || self.y + self.height < 0.0)
    }
}

/// A triangle during subdivision: corners, edge midpoints and bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubTriangle {
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
    /// Midpoint of `p1`-`p2`.
    pub n1: Point,
    /// Midpoint of `p2`-`p3`.
    pub n2: Point,
    /// Midpoint of `p3`-`p1`.
    pub n3: Point,
    pub bounds: Bounds,
}

impl SubTriangle {
    #[must_use]
    pub fn new(p1: Point, p2: Point, p3: Point) -> Self {
        Self {
            p1,
            p2,
            p3,
            n1: p1.midpoint(p2),
            n2: p2.midpoint(p3),
            n3: p3.midpoint(p1),
            bounds: Bounds::of(p1, p2, p3),
        }
    }

    #[must_use]
    pub fn from_triangle(triangle: &Triangle) -> Self {
        Self::new(triangle.p1, triangle.p2, triangle.p3)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.bounds.width
    }

    /// Whether all three corners are finite. `Bounds::of` skips NaN
    /// coordinates, so the box alone cannot tell.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.p1.is_finite() && self.p2.is_finite() && self.p3.is_finite()
    }

    /// The three corner sub-triangles, in visiting order.
    #[must_use]
    pub fn children(&self) -> [SubTriangle; 3] {
        [
            SubTriangle::new(self.p1, self.n1, self.n3),
            SubTriangle::new(self.n1, self.p2, self.n2),
            SubTriangle::new(self.n3, self.n2, self.p3),
        ]
    }
}

/// Counters describing one render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RenderStats {
    /// Centre triangles cut out of the fill.
    pub cuts: u64,
    /// Sub-triangles examined, including the root.
    pub visited: u64,
    /// Sub-triangles pruned because they were off the surface.
    pub culled: u64,
    /// Deepest level that emitted a cut.
    pub max_depth: u32,
    /// Whether subdivision was stopped by the depth ceiling or the cut budget.
    pub truncated: bool,
}

impl RenderStats {
    /// Combine counters from two renders.
    #[must_use]
    pub fn merge(self, other: RenderStats) -> RenderStats {
        RenderStats {
            cuts: self.cuts + other.cuts,
            visited: self.visited + other.visited,
            culled: self.culled + other.culled,
            max_depth: self.max_depth.max(other.max_depth),
            truncated: self.truncated || other.truncated,
        }
    }
}

/// Work bounds for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderLimits {
    /// Deepest level that may be cut. The root is depth 0.
    pub max_depth: u32,
    /// Cuts emitted before the render stops early.
    pub max_cuts: u64,
}

impl Default for RenderLimits {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH, max_cuts: DEFAULT_MAX_CUTS }
    }
}

/// Render `triangle` onto a `surface_width` x `surface_height` surface.
///
/// Uses the default [`RenderLimits`].
pub fn render<S: PathSink + ?Sized>(
    triangle: &Triangle,
    surface_width: f64,
    surface_height: f64,
    sink: &mut S,
) -> RenderStats {
    render_with_limits(triangle, surface_width, surface_height, RenderLimits::default(), sink)
}

/// Render `triangle` within `limits`.
///
/// Emits exactly one `begin_fill` / `fill` pair. Hitting the depth ceiling or
/// the cut budget is reported through [`RenderStats::truncated`] and a
/// warning, never by failing mid-render. Branches with non-finite corners are
/// treated as leaves.
pub fn render_with_limits<S: PathSink + ?Sized>(
    triangle: &Triangle,
    surface_width: f64,
    surface_height: f64,
    limits: RenderLimits,
    sink: &mut S,
) -> RenderStats {
    let root = SubTriangle::from_triangle(triangle);
    let min_size = triangle.min_size();
    let mut stats = RenderStats::default();

    sink.begin_fill(triangle.options.fill);
    plot(sink, root.p1, root.p2, root.p3);

    let mut stack = vec![(root, 0_u32)];
    while let Some((tri, depth)) = stack.pop() {
        stats.visited += 1;

        if !tri.is_finite() || tri.width() < min_size {
            continue;
        }
        if !tri.bounds.intersects_surface(surface_width, surface_height) {
            stats.culled += 1;
            continue;
        }
        if depth >= limits.max_depth {
            stats.truncated = true;
            continue;
        }
        if stats.cuts >= limits.max_cuts {
            stats.truncated = true;
            break;
        }

        plot(sink, tri.n1, tri.n3, tri.n2);
        stats.cuts += 1;
        stats.max_depth = stats.max_depth.max(depth);

        // Reversed so the first child is popped first.
        for child in tri.children().into_iter().rev() {
            stack.push((child, depth + 1));
        }
    }

    sink.fill();

    if stats.truncated {
        tracing::warn!(
            max_depth = limits.max_depth,
            max_cuts = limits.max_cuts,
            min_size,
            cuts = stats.cuts,
            "subdivision hit work limit"
        );
    }
    tracing::trace!(?stats, "triangle rendered");
    stats
}

/// Trace a closed triangle `a -> b -> c -> a`.
fn plot<S: PathSink + ?Sized>(sink: &mut S, a: Point, b: Point, c: Point) {
    sink.move_to(a);
    sink.line_to(b);
    sink.line_to(c);
    sink.line_to(a);
}
