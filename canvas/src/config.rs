//! Explorer configuration: gesture steps, render quality and colours.
//!
//! Hosts pass configuration as JSON (every field optional). Values are
//! validated once at load so the render loop never sees a threshold that
//! could stall subdivision.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::consts::{DEFAULT_MAX_CUTS, DEFAULT_MAX_DEPTH, DEFAULT_MIN_SIZE, DEFAULT_PAN_STEP, DEFAULT_SCALE_STEP};
use crate::geometry::{GeometryError, TriangleOptions};
use crate::render::RenderLimits;

/// Errors produced while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration document could not be parsed.
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value outside its allowed range.
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Parse(_) => "E_CONFIG_PARSE",
            Self::Invalid { .. } => "E_CONFIG_INVALID",
        }
    }
}

impl From<GeometryError> for ConfigError {
    fn from(err: GeometryError) -> Self {
        match err {
            GeometryError::InvalidMinSize(v) => {
                Self::Invalid { field: "min_size", reason: format!("must be finite and > 0, got {v}") }
            }
        }
    }
}

/// Tunables for an explorer scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Pixels moved per directional control.
    pub pan_step: f64,
    /// Zoom factor per wheel notch or zoom control; its inverse zooms out.
    pub scale_step: f64,
    /// Subdivision stop width.
    pub min_size: f64,
    /// Hard ceiling on subdivision depth.
    pub max_depth: u32,
    /// Cut budget per triangle render.
    pub max_cuts: u64,
    /// Main triangle colour.
    pub fill: Color,
    /// Add the quarter-size companion triangle on reset.
    pub companion: bool,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            pan_step: DEFAULT_PAN_STEP,
            scale_step: DEFAULT_SCALE_STEP,
            min_size: DEFAULT_MIN_SIZE,
            max_depth: DEFAULT_MAX_DEPTH,
            max_cuts: DEFAULT_MAX_CUTS,
            fill: Color::default(),
            companion: true,
        }
    }
}

impl ExplorerConfig {
    /// Parse and validate a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or colours and
    /// [`ConfigError::Invalid`] for out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field is in range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.pan_step.is_finite() || self.pan_step <= 0.0 {
            return Err(invalid("pan_step", format!("must be finite and > 0, got {}", self.pan_step)));
        }
        if !self.scale_step.is_finite() || self.scale_step <= 1.0 {
            return Err(invalid("scale_step", format!("must be finite and > 1, got {}", self.scale_step)));
        }
        if self.max_depth == 0 {
            return Err(invalid("max_depth", "must be at least 1".to_string()));
        }
        if self.max_cuts == 0 {
            return Err(invalid("max_cuts", "must be at least 1".to_string()));
        }
        self.triangle_options()?;
        Ok(())
    }

    /// Work bounds applied to each triangle render.
    #[must_use]
    pub fn render_limits(&self) -> RenderLimits {
        RenderLimits { max_depth: self.max_depth, max_cuts: self.max_cuts }
    }

    /// Options for the main triangle.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidMinSize`] if `min_size` is out of range.
    pub fn triangle_options(&self) -> Result<TriangleOptions, GeometryError> {
        TriangleOptions::new(self.fill, self.min_size)
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}
