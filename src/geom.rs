#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// A point in screen (client) pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width/height pair in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The smaller of the two dimensions.
    #[must_use]
    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }
}

/// An axis-aligned bounding rectangle in client pixels, as reported by
/// `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// A rectangle with zero width or height cannot be used as a reference
    /// frame for percentages.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Horizontal position of `x` within this rectangle, in percent.
    #[must_use]
    pub fn x_percent(&self, x: f64) -> f64 {
        (x - self.left) * 100.0 / self.width
    }

    /// Vertical position of `y` within this rectangle, in percent.
    #[must_use]
    pub fn y_percent(&self, y: f64) -> f64 {
        (y - self.top) * 100.0 / self.height
    }
}

/// Pixel dimensions of the slide canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CanvasDimensions {
    pub width: f64,
    pub height: f64,
}

impl CanvasDimensions {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Convert a pixel size to normalized (0..1) canvas units.
    ///
    /// Returns `None` when the canvas has no area yet.
    #[must_use]
    pub fn normalize(&self, size: Size) -> Option<Size> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        Some(Size { width: size.width / self.width, height: size.height / self.height })
    }
}

impl From<Rect> for CanvasDimensions {
    fn from(rect: Rect) -> Self {
        Self { width: rect.width, height: rect.height }
    }
}
