//! Interactive Sierpinski triangle explorer.
//!
//! This crate is compiled to WebAssembly and runs in the browser, and is also
//! used natively by the command-line renderer. It owns the fractal geometry,
//! the subdivision renderer, and the scene state that pan/zoom/resize
//! gestures mutate. The host layer is responsible only for wiring DOM events
//! to the engine and calling render when an [`engine::Action`] asks for it.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`geometry`] | Points, the root [`geometry::Triangle`] and its move/scale transforms |
//! | [`render`] | Subdivision with visibility culling, a depth ceiling and a cut budget |
//! | [`path`] | The [`path::PathSink`] drawing interface, an in-memory recorder and a counting sink |
//! | [`svg`] | SVG document output |
//! | [`surface`] | Canvas2D output |
//! | [`input`] | Controls, wheel deltas and the drag-pan state machine |
//! | [`config`] | Validated explorer configuration |
//! | [`color`] | Colour parsing and formatting |
//! | [`consts`] | Shared numeric constants (steps, thresholds, ratios) |

pub mod color;
pub mod config;
pub mod consts;
pub mod engine;
pub mod geometry;
pub mod input;
pub mod path;
pub mod render;
pub mod surface;
pub mod svg;
