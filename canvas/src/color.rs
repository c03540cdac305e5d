//! Fill colours: parsing CSS-style colour strings into a typed RGB value.
//!
//! Hosts read colours from stylesheets (`getComputedStyle` reports
//! `rgb(r, g, b)`) or from configuration (`#rgb` / `#rrggbb`). Everything is
//! normalised to [`Color`] and formatted back as `#rrggbb` for the drawing
//! surface.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors produced when parsing a colour string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// The string is neither a hex colour nor an `rgb(...)` triple.
    #[error("unrecognised colour format: {0:?}")]
    Format(String),

    /// A channel is not a valid number in range.
    #[error("invalid colour channel {channel:?} in {input:?}")]
    Channel { input: String, channel: String },
}

impl ColorError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Format(_) => "E_COLOR_FORMAT",
            Self::Channel { .. } => "E_COLOR_CHANNEL",
        }
    }
}

/// An opaque RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0xff, 0x00, 0x00)
    }
}

impl Color {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` form, lowercase.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(trimmed, hex);
        }
        if let Some(inner) = trimmed
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_rgb_triple(trimmed, inner);
        }
        Err(ColorError::Format(s.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

fn parse_hex(input: &str, hex: &str) -> Result<Color, ColorError> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::Channel { input: input.to_string(), channel: hex.to_string() });
    }
    let channel = |digits: &str| {
        u8::from_str_radix(digits, 16)
            .map_err(|_| ColorError::Channel { input: input.to_string(), channel: digits.to_string() })
    };
    match hex.len() {
        // Shorthand: each digit is doubled, so `f` becomes `ff`.
        3 => {
            let r = channel(&hex[0..1])?;
            let g = channel(&hex[1..2])?;
            let b = channel(&hex[2..3])?;
            Ok(Color::rgb(r * 0x11, g * 0x11, b * 0x11))
        }
        6 => Ok(Color::rgb(channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        _ => Err(ColorError::Format(input.to_string())),
    }
}

fn parse_rgb_triple(input: &str, inner: &str) -> Result<Color, ColorError> {
    let parts = inner.split(',').map(str::trim).collect::<Vec<_>>();
    let &[r, g, b] = parts.as_slice() else {
        return Err(ColorError::Format(input.to_string()));
    };
    let channel = |digits: &str| {
        digits
            .parse::<u8>()
            .map_err(|_| ColorError::Channel { input: input.to_string(), channel: digits.to_string() })
    };
    Ok(Color::rgb(channel(r)?, channel(g)?, channel(b)?))
}
