//! Fill paints and stroke options.

use crate::types::Color;

/// How a shape's interior or outline is colored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    /// Solid color fill.
    Solid(Color),
}

impl Paint {
    /// Create a solid color paint.
    #[inline]
    pub const fn solid(color: Color) -> Self {
        Self::Solid(color)
    }

    /// Get the solid color, if this is a solid paint.
    #[inline]
    pub fn as_solid(&self) -> Option<Color> {
        match self {
            Self::Solid(c) => Some(*c),
        }
    }

    /// Whether painting with this would leave no visible mark.
    #[inline]
    pub fn is_transparent(&self) -> bool {
        match self {
            Self::Solid(c) => c.a <= 0.0,
        }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

impl Default for Paint {
    fn default() -> Self {
        Self::Solid(Color::BLACK)
    }
}

/// Outline paint and line width.
///
/// Lines use butt caps and miter joins, like a fresh canvas context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub paint: Paint,
    /// Line width in pixels.
    pub width: f32,
}

impl Default for Stroke {
    fn default() -> Self {
        Self::new(Color::BLACK, 1.0)
    }
}

impl Stroke {
    /// Stroke with the given paint and width.
    #[inline]
    pub fn new(paint: impl Into<Paint>, width: f32) -> Self {
        Self {
            paint: paint.into(),
            width,
        }
    }

    /// Same width in another paint.
    #[inline]
    pub fn with_paint(self, paint: impl Into<Paint>) -> Self {
        Self::new(paint, self.width)
    }

    /// Whether stroking with this would leave no visible mark.
    #[inline]
    pub fn is_invisible(&self) -> bool {
        self.width <= 0.0 || self.paint.is_transparent()
    }
}

/// Fill rule deciding which regions of a self-overlapping path are inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillRule {
    /// Non-zero winding rule.
    #[default]
    NonZero,
    /// Even-odd rule.
    EvenOdd,
}
