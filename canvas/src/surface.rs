//! Browser surface: draws the explorer scene to a 2D canvas context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It reads engine state and produces pixels; it does not mutate any
//! application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<_, JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::color::Color;
use crate::engine::EngineCore;
use crate::geometry::Point;
use crate::path::PathSink;
use crate::render::RenderStats;

/// Draw the full scene.
///
/// Coordinates are CSS pixels; `dpr` is the device pixel ratio of the backing store.
///
/// # Errors
///
/// Returns `Err` if the transform cannot be set.
pub fn draw(ctx: &CanvasRenderingContext2d, core: &EngineCore, dpr: f64) -> Result<RenderStats, JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, core.viewport_width, core.viewport_height);

    let mut sink = CanvasSink(ctx);
    Ok(core.render_into(&mut sink))
}

/// [`PathSink`] over a borrowed canvas context.
///
/// `fill` uses the context's default nonzero winding rule.
pub struct CanvasSink<'a>(pub &'a CanvasRenderingContext2d);

impl PathSink for CanvasSink<'_> {
    fn begin_fill(&mut self, color: Color) {
        self.0.begin_path();
        self.0.set_fill_style_str(&color.to_hex());
    }

    fn move_to(&mut self, point: Point) {
        self.0.move_to(point.x, point.y);
    }

    fn line_to(&mut self, point: Point) {
        self.0.line_to(point.x, point.y);
    }

    fn fill(&mut self) {
        self.0.fill();
    }
}
