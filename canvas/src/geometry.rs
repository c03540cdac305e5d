//! Plane geometry: points, the fractal's root triangle, and its pan/zoom transforms.
//!
//! A [`Triangle`] is the only mutable scene object. Gestures reach it through
//! [`Triangle::move_by`] and [`Triangle::scale`]; the renderer only reads its
//! three points and options.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use crate::color::Color;
use crate::consts::{DEFAULT_MIN_SIZE, EQUILATERAL_HEIGHT_RATIO};

/// Errors raised while building a triangle.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// The subdivision threshold must be a finite, positive width.
    #[error("min_size must be finite and > 0, got {0}")]
    InvalidMinSize(f64),
}

impl GeometryError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidMinSize(_) => "E_INVALID_MIN_SIZE",
        }
    }
}

/// A point in surface space (CSS pixels, y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Point halfway between `self` and `other`.
    #[must_use]
    pub fn midpoint(self, other: Point) -> Point {
        Point {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Translate by `(dx, dy)`.
    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Point {
        Point { x: self.x + dx, y: self.y + dy }
    }

    /// Dilate about `origin`: `origin + (self - origin) * factor`.
    #[must_use]
    pub fn dilate(self, origin: Point, factor: f64) -> Point {
        Point {
            x: (self.x - origin.x) * factor + origin.x,
            y: (self.y - origin.y) * factor + origin.y,
        }
    }
}

/// Rendering options carried by a triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleOptions {
    /// Colour of the filled region.
    pub fill: Color,
    /// Subdivision stops once a sub-triangle's bounding width drops below this.
    min_size: f64,
}

impl Default for TriangleOptions {
    fn default() -> Self {
        Self { fill: Color::default(), min_size: DEFAULT_MIN_SIZE }
    }
}

impl TriangleOptions {
    /// Build options, rejecting a threshold that could never stop subdivision.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidMinSize`] if `min_size` is not finite or not positive.
    pub fn new(fill: Color, min_size: f64) -> Result<Self, GeometryError> {
        if !min_size.is_finite() || min_size <= 0.0 {
            return Err(GeometryError::InvalidMinSize(min_size));
        }
        Ok(Self { fill, min_size })
    }

    #[must_use]
    pub fn min_size(&self) -> f64 {
        self.min_size
    }

    /// Same threshold, different colour.
    #[must_use]
    pub fn with_fill(self, fill: Color) -> Self {
        Self { fill, ..self }
    }
}

/// The root triangle of a Sierpinski scene.
///
/// ```text
///            /\
///           /p2\
///          /    \
///         /______\
///        /\n1  n2/\
///       /  \    /  \
///      /    \n3/    \
///     /p1____\/____p3\
/// ```
///
/// `p2` is conventionally the apex. With y pointing down, `p1 -> p2 -> p3`
/// runs clockwise on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
    pub options: TriangleOptions,
}

impl Triangle {
    #[must_use]
    pub fn new(p1: Point, p2: Point, p3: Point, options: TriangleOptions) -> Self {
        Self { p1, p2, p3, options }
    }

    /// Upright triangle inscribed in the rectangle at `(x, y)` of the given size:
    /// base along the bottom edge, apex at the top-centre.
    #[must_use]
    pub fn from_rect(x: f64, y: f64, width: f64, height: f64, options: TriangleOptions) -> Self {
        Self {
            p1: Point::new(x, y + height),
            p2: Point::new(x + width / 2.0, y),
            p3: Point::new(x + width, y + height),
            options,
        }
    }

    /// Largest equilateral triangle that fits a `width` x `height` surface.
    ///
    /// A wide surface centres the triangle horizontally at full height; a tall
    /// one spans the full width and rests on the bottom edge.
    #[must_use]
    pub fn fit_to_surface(width: f64, height: f64, options: TriangleOptions) -> Self {
        let (x, y, w, h) = fitted_rect(width, height);
        Self::from_rect(x, y, w, h, options)
    }

    /// Translate all three points by `(dx, dy)`.
    pub fn move_by(&mut self, dx: f64, dy: f64) {
        self.p1 = self.p1.offset(dx, dy);
        self.p2 = self.p2.offset(dx, dy);
        self.p3 = self.p3.offset(dx, dy);
    }

    /// Dilate all three points about `origin`.
    ///
    /// `factor > 1` zooms in and `0 < factor < 1` zooms out. The caller must
    /// keep `factor > 0`: a negative factor flips the triangle and zero
    /// collapses it to `origin`.
    pub fn scale(&mut self, origin: Point, factor: f64) {
        self.p1 = self.p1.dilate(origin, factor);
        self.p2 = self.p2.dilate(origin, factor);
        self.p3 = self.p3.dilate(origin, factor);
    }

    #[must_use]
    pub fn points(&self) -> [Point; 3] {
        [self.p1, self.p2, self.p3]
    }

    #[must_use]
    pub fn min_size(&self) -> f64 {
        self.options.min_size
    }
}

/// `(x, y, width, height)` of the bounding rectangle used by [`Triangle::fit_to_surface`].
#[must_use]
pub fn fitted_rect(surface_width: f64, surface_height: f64) -> (f64, f64, f64, f64) {
    if EQUILATERAL_HEIGHT_RATIO * surface_width < surface_height {
        let height = EQUILATERAL_HEIGHT_RATIO * surface_width;
        (0.0, surface_height - height, surface_width, height)
    } else {
        let width = surface_height / EQUILATERAL_HEIGHT_RATIO;
        ((surface_width - width) / 2.0, 0.0, width, surface_height)
    }
}
