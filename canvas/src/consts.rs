//! Shared numeric constants for the explorer.

// ── Geometry ────────────────────────────────────────────────────

/// Height-to-side ratio of an equilateral triangle, √3 / 2.
pub const EQUILATERAL_HEIGHT_RATIO: f64 = 0.866_025_403_784_438_6;

/// Side ratio of the companion triangle relative to the main one.
pub const COMPANION_RATIO: f64 = 0.25;

// ── Rendering ───────────────────────────────────────────────────

/// Default subdivision stop width in pixels. Lower is finer and slower.
pub const DEFAULT_MIN_SIZE: f64 = 5.0;

/// Default hard ceiling on subdivision depth.
///
/// A fully visible triangle cut to depth 16 already carries about 21 million
/// cuts, so [`DEFAULT_MAX_CUTS`] is usually the binding limit.
pub const DEFAULT_MAX_DEPTH: u32 = 16;

/// Default cut budget for one render.
pub const DEFAULT_MAX_CUTS: u64 = 1 << 20;

// ── Gestures ────────────────────────────────────────────────────

/// Pixels moved per directional control.
pub const DEFAULT_PAN_STEP: f64 = 30.0;

/// Zoom factor per wheel notch or zoom control.
pub const DEFAULT_SCALE_STEP: f64 = 1.1;
