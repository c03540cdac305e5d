//! Explorer engine: scene state plus the gesture handlers that mutate it.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::color::Color;
use crate::config::{ConfigError, ExplorerConfig};
use crate::consts::COMPANION_RATIO;
use crate::geometry::{Point, Triangle, TriangleOptions, fitted_rect};
use crate::input::{Control, InputState, WheelDelta, ZoomDirection};
use crate::path::PathSink;
use crate::render::{RenderStats, render_with_limits};
use crate::surface;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    RenderNeeded,
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Clone)]
pub struct EngineCore {
    pub config: ExplorerConfig,
    pub triangles: Vec<Triangle>,
    pub input: InputState,
    pub viewport_width: f64,
    pub viewport_height: f64,
    /// Zoom origin for the zoom controls.
    pub center: Point,
    options: TriangleOptions,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            config: ExplorerConfig::default(),
            triangles: Vec::new(),
            input: InputState::default(),
            viewport_width: 0.0,
            viewport_height: 0.0,
            center: Point::default(),
            options: TriangleOptions::default(),
        }
    }
}

impl EngineCore {
    /// Build an empty scene. Call [`EngineCore::set_viewport`] to populate it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `config` fails validation.
    pub fn new(config: ExplorerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let options = config.triangle_options()?;
        Ok(Self { config, options, ..Self::default() })
    }

    // --- Scene ---

    /// Resize the surface and rebuild the scene for it.
    pub fn set_viewport(&mut self, width: f64, height: f64) -> Action {
        self.viewport_width = width;
        self.viewport_height = height;
        self.reset()
    }

    /// Replace every triangle with a fresh scene fitted to the viewport.
    pub fn reset(&mut self) -> Action {
        let (w, h) = (self.viewport_width, self.viewport_height);
        let (x, y, tri_w, tri_h) = fitted_rect(w, h);

        self.triangles.clear();
        self.triangles.push(Triangle::from_rect(x, y, tri_w, tri_h, self.options));
        if self.config.companion {
            let companion_options = self.options.with_fill(Color::default());
            self.triangles.push(Triangle::from_rect(
                x,
                y,
                tri_w * COMPANION_RATIO,
                tri_h * COMPANION_RATIO,
                companion_options,
            ));
        }
        self.center = Point::new(w / 2.0, h / 2.0);
        self.input = InputState::Idle;

        tracing::debug!(width = w, height = h, triangles = self.triangles.len(), "scene reset");
        Action::RenderNeeded
    }

    // --- Transforms ---

    /// Translate every triangle. Non-finite offsets are ignored.
    pub fn pan(&mut self, dx: f64, dy: f64) -> Action {
        if !(dx.is_finite() && dy.is_finite()) {
            tracing::warn!(dx, dy, "ignoring non-finite pan");
            return Action::None;
        }
        for tri in &mut self.triangles {
            tri.move_by(dx, dy);
        }
        Action::RenderNeeded
    }

    /// Dilate every triangle about `origin`.
    ///
    /// Ignored unless `origin` is finite and `factor` is finite and positive.
    pub fn zoom(&mut self, origin: Point, factor: f64) -> Action {
        if !origin.is_finite() || !factor.is_finite() || factor <= 0.0 {
            tracing::warn!(?origin, factor, "ignoring invalid zoom");
            return Action::None;
        }
        for tri in &mut self.triangles {
            tri.scale(origin, factor);
        }
        Action::RenderNeeded
    }

    fn zoom_step(&mut self, origin: Point, direction: ZoomDirection) -> Action {
        let factor = match direction {
            ZoomDirection::In => self.config.scale_step,
            ZoomDirection::Out => 1.0 / self.config.scale_step,
        };
        self.zoom(origin, factor)
    }

    // --- Input events ---

    /// Zoom about the pointer.
    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta) -> Action {
        match delta.zoom_direction() {
            Some(direction) => self.zoom_step(screen_pt, direction),
            None => Action::None,
        }
    }

    /// Start a drag pan.
    pub fn on_pointer_down(&mut self, screen_pt: Point) -> Action {
        self.input = InputState::Panning { last_screen: screen_pt };
        Action::None
    }

    /// Continue a drag pan by the distance moved since the last event.
    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Action {
        let InputState::Panning { last_screen } = self.input else {
            return Action::None;
        };
        if !screen_pt.is_finite() {
            return Action::None;
        }
        self.input = InputState::Panning { last_screen: screen_pt };
        self.pan(screen_pt.x - last_screen.x, screen_pt.y - last_screen.y)
    }

    /// End a drag pan.
    pub fn on_pointer_up(&mut self, _screen_pt: Point) -> Action {
        self.input = InputState::Idle;
        Action::None
    }

    /// Apply a toolbar control.
    pub fn on_control(&mut self, control: Control) -> Action {
        if let Some((ux, uy)) = control.pan_direction() {
            let step = self.config.pan_step;
            return self.pan(ux * step, uy * step);
        }
        match control {
            Control::ZoomIn => self.zoom_step(self.center, ZoomDirection::In),
            Control::ZoomOut => self.zoom_step(self.center, ZoomDirection::Out),
            Control::Reset => self.reset(),
            Control::Left | Control::Right | Control::Up | Control::Down => Action::None,
        }
    }

    // --- Render ---

    /// Render every triangle in order, one fill each.
    pub fn render_into<S: PathSink + ?Sized>(&self, sink: &mut S) -> RenderStats {
        self.triangles.iter().fold(RenderStats::default(), |acc, tri| {
            let limits = self.config.render_limits();
            let stats = render_with_limits(tri, self.viewport_width, self.viewport_height, limits, sink);
            acc.merge(stats)
        })
    }
}

/// The full explorer. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    dpr: f64,
    pub core: EngineCore,
}

impl Engine {
    /// Create an engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas has no 2D context or `config` is invalid.
    pub fn new(canvas: HtmlCanvasElement, config: ExplorerConfig) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| js_sys::Error::new("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let core = EngineCore::new(config).map_err(|e| js_sys::Error::new(&e.to_string()))?;
        let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
        Ok(Self { canvas, ctx, dpr, core })
    }

    // --- Viewport ---

    /// Resize the backing store for the device pixel ratio and rebuild the scene.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Action {
        self.dpr = dpr;
        self.canvas.set_width(backing_size(width_css, dpr));
        self.canvas.set_height(backing_size(height_css, dpr));
        self.core.set_viewport(width_css, height_css)
    }

    // --- Delegated input events ---

    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta) -> Action {
        self.core.on_wheel(screen_pt, delta)
    }

    pub fn on_pointer_down(&mut self, screen_pt: Point) -> Action {
        self.core.on_pointer_down(screen_pt)
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Action {
        self.core.on_pointer_move(screen_pt)
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point) -> Action {
        self.core.on_pointer_up(screen_pt)
    }

    pub fn on_control(&mut self, control: Control) -> Action {
        self.core.on_control(control)
    }

    // --- Render ---

    /// Draw the current scene to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a `Canvas2D` transform call fails.
    pub fn render(&self) -> Result<RenderStats, JsValue> {
        surface::draw(&self.ctx, &self.core, self.dpr)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn backing_size(css: f64, dpr: f64) -> u32 {
    (css * dpr).round().max(0.0) as u32
}
