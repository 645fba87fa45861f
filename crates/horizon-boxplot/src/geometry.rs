//! Orientation-aware pixel geometry shared by all glyphs.
//!
//! A glyph has a *value axis* carrying the statistical magnitude and a
//! *cross axis* carrying category thickness. Vertical glyphs put values on y,
//! horizontal glyphs on x. Every helper here takes `(cross, value)` pairs so
//! glyph code is written once for both orientations.

use horizon_boxplot_render::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Direction of the value axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Orientation {
    /// Values run along y; the box has a width.
    Vertical,
    /// Values run along x; the box has a height.
    Horizontal,
}

/// Cross-axis size of the central box.
///
/// The variant fixes the orientation: a width means a vertical glyph, a
/// height means a horizontal one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Extent {
    /// Box width of a vertical glyph.
    Width(f32),
    /// Box height of a horizontal glyph.
    Height(f32),
}

impl Extent {
    /// Orientation implied by this extent.
    #[inline]
    pub fn orientation(self) -> Orientation {
        match self {
            Extent::Width(_) => Orientation::Vertical,
            Extent::Height(_) => Orientation::Horizontal,
        }
    }

    /// Size along the cross axis in pixels.
    #[inline]
    pub fn size(self) -> f32 {
        match self {
            Extent::Width(size) | Extent::Height(size) => size,
        }
    }
}

/// Pixel placement of one glyph for one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Anchor (center) of the glyph.
    pub position: Point,
    /// Cross-axis size of the box, which also fixes the orientation.
    pub extent: Extent,
    /// Pixel coordinate of the value axis baseline (zero line).
    pub base: f32,
}

impl Geometry {
    /// Geometry of a vertical glyph centered at `x, y` with box `width`.
    pub fn vertical(x: f32, y: f32, width: f32) -> Self {
        Self {
            position: Point::new(x, y),
            extent: Extent::Width(width),
            base: 0.0,
        }
    }

    /// Geometry of a horizontal glyph centered at `x, y` with box `height`.
    pub fn horizontal(x: f32, y: f32, height: f32) -> Self {
        Self {
            position: Point::new(x, y),
            extent: Extent::Height(height),
            base: 0.0,
        }
    }

    /// Set the value-axis baseline.
    pub fn with_base(mut self, base: f32) -> Self {
        self.base = base;
        self
    }

    /// Orientation of the glyph.
    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.extent.orientation()
    }

    /// Whether the value axis is vertical.
    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.orientation() == Orientation::Vertical
    }

    /// Cross-axis size of the box.
    #[inline]
    pub fn size(&self) -> f32 {
        self.extent.size()
    }

    /// Cross-axis coordinate of the anchor.
    #[inline]
    pub fn cross_center(&self) -> f32 {
        self.cross_of(self.position)
    }

    /// Value-axis coordinate of the anchor.
    #[inline]
    pub fn value_center(&self) -> f32 {
        self.value_of(self.position)
    }

    /// Cross-axis coordinate where the box starts.
    #[inline]
    pub fn cross_start(&self) -> f32 {
        self.cross_center() - self.size() / 2.0
    }

    /// Cross-axis component of a pixel point.
    #[inline]
    pub fn cross_of(&self, p: Point) -> f32 {
        if self.is_vertical() { p.x } else { p.y }
    }

    /// Value-axis component of a pixel point.
    #[inline]
    pub fn value_of(&self, p: Point) -> f32 {
        if self.is_vertical() { p.y } else { p.x }
    }

    /// Pixel point from cross-axis and value-axis coordinates.
    #[inline]
    pub fn point(&self, cross: f32, value: f32) -> Point {
        if self.is_vertical() {
            Point::new(cross, value)
        } else {
            Point::new(value, cross)
        }
    }

    /// Point on the anchor line at a value-axis coordinate.
    #[inline]
    pub fn on_center_line(&self, value: f32) -> Point {
        self.point(self.cross_center(), value)
    }

    /// Rectangle spanning the box's cross extent between two values.
    ///
    /// The value length may be negative; the rectangle is not normalized.
    pub fn span_rect(&self, value_from: f32, value_to: f32) -> Rect {
        let cross = self.cross_start();
        let size = self.size();
        if self.is_vertical() {
            Rect::new(cross, value_from, size, value_to - value_from)
        } else {
            Rect::new(value_from, cross, value_to - value_from, size)
        }
    }

    /// Bounds spanning the box's cross extent and a value range.
    ///
    /// `value_low` is the smaller data value: it becomes the bottom edge of a
    /// vertical glyph and the left edge of a horizontal one.
    pub fn span_bounds(&self, value_low: f32, value_high: f32) -> Bounds {
        let cross_start = self.cross_start();
        let cross_end = cross_start + self.size();
        if self.is_vertical() {
            Bounds::new(cross_start, value_high, cross_end, value_low)
        } else {
            Bounds::new(value_low, cross_start, value_high, cross_end)
        }
    }
}

/// Axis-aligned edges of a glyph in pixel space.
///
/// Edges are stored as given. When values arrive in increasing pixel order
/// `top` may be greater than `bottom`, so containment treats each edge pair
/// as an unordered span and [`inflate`](Self::inflate) grows that span
/// outward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Bounds {
    /// Bounds of an element that has not been laid out yet.
    pub const ZERO: Self = Self {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    /// Create bounds from four edges.
    #[inline]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Grow every side outward by `padding`.
    ///
    /// A non-negative padding always yields a superset of `self`.
    pub fn inflate(&self, padding: f32) -> Self {
        let (left, right) = grow(self.left, self.right, padding);
        let (top, bottom) = grow(self.top, self.bottom, padding);
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Same region with `left <= right` and `top <= bottom`.
    pub fn normalized(&self) -> Self {
        Self {
            left: self.left.min(self.right),
            top: self.top.min(self.bottom),
            right: self.left.max(self.right),
            bottom: self.top.max(self.bottom),
        }
    }

    /// Swap the roles of x and y.
    pub fn transpose(&self) -> Self {
        Self {
            left: self.top,
            top: self.left,
            right: self.bottom,
            bottom: self.right,
        }
    }

    /// Horizontal extent.
    #[inline]
    pub fn width(&self) -> f32 {
        (self.right - self.left).abs()
    }

    /// Vertical extent.
    #[inline]
    pub fn height(&self) -> f32 {
        (self.bottom - self.top).abs()
    }

    /// Whether `x` lies between the left and right edges (inclusive).
    #[inline]
    pub fn contains_x(&self, x: f32) -> bool {
        between(x, self.left, self.right)
    }

    /// Whether `y` lies between the top and bottom edges (inclusive).
    #[inline]
    pub fn contains_y(&self, y: f32) -> bool {
        between(y, self.top, self.bottom)
    }

    /// Whether a point lies inside the bounds (edges inclusive).
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.contains_x(p.x) && self.contains_y(p.y)
    }

    /// Whether `other` lies entirely inside `self`.
    pub fn encloses(&self, other: &Bounds) -> bool {
        let outer = self.normalized();
        let inner = other.normalized();
        outer.left <= inner.left
            && outer.top <= inner.top
            && outer.right >= inner.right
            && outer.bottom >= inner.bottom
    }

    /// Convert to a rectangle with non-negative size.
    pub fn to_rect(&self) -> Rect {
        let n = self.normalized();
        Rect::new(n.left, n.top, n.right - n.left, n.bottom - n.top)
    }
}

#[inline]
fn between(v: f32, a: f32, b: f32) -> bool {
    v >= a.min(b) && v <= a.max(b)
}

#[inline]
fn grow(start: f32, end: f32, padding: f32) -> (f32, f32) {
    if start <= end {
        (start - padding, end + padding)
    } else {
        (start + padding, end - padding)
    }
}
