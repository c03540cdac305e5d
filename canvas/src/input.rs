//! Input model: toolbar controls, wheel deltas and the drag-pan state machine.
//!
//! The host translates DOM events into these types. `InputState` tracks the
//! pan gesture between pointer-down and pointer-up so each move can be
//! applied as an incremental offset.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::str::FromStr;

use crate::geometry::Point;

/// Toolbar buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Shift the fractal right, revealing what lies to the left.
    Left,
    /// Shift the fractal left.
    Right,
    /// Shift the fractal down, revealing what lies above.
    Up,
    /// Shift the fractal up.
    Down,
    /// Zoom in about the surface centre.
    ZoomIn,
    /// Zoom out about the surface centre.
    ZoomOut,
    /// Rebuild the scene from scratch.
    Reset,
}

impl Control {
    /// Unit direction of a pan control, or `None` for zoom/reset.
    #[must_use]
    pub fn pan_direction(self) -> Option<(f64, f64)> {
        match self {
            Self::Left => Some((1.0, 0.0)),
            Self::Right => Some((-1.0, 0.0)),
            Self::Up => Some((0.0, 1.0)),
            Self::Down => Some((0.0, -1.0)),
            Self::ZoomIn | Self::ZoomOut | Self::Reset => None,
        }
    }
}

/// Error for an unknown control name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown control: {0:?}")]
pub struct UnknownControl(pub String);

impl FromStr for Control {
    type Err = UnknownControl;

    /// Accepts the element ids the toolbar uses (`left`, `in`, `reset`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "in" => Ok(Self::ZoomIn),
            "out" => Ok(Self::ZoomOut),
            "reset" => Ok(Self::Reset),
            other => Err(UnknownControl(other.to_string())),
        }
    }
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Zoom direction implied by a wheel event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl WheelDelta {
    /// Scrolling up zooms in, scrolling down zooms out. Horizontal-only
    /// scrolls carry no zoom.
    #[must_use]
    pub fn zoom_direction(self) -> Option<ZoomDirection> {
        if self.dy < 0.0 {
            Some(ZoomDirection::In)
        } else if self.dy > 0.0 {
            Some(ZoomDirection::Out)
        } else {
            None
        }
    }
}

/// Gesture state between pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Dragging the fractal around.
    Panning {
        /// Screen position of the previous pointer event.
        last_screen: Point,
    },
}
