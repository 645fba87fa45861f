//! The glyph contract and the closed set of glyph variants.
//!
//! Every glyph supplies its own bounds, outliers, items, center, area and
//! drawing. Hit-testing comes from the shared tiered machinery in
//! [`array`](crate::array); variants may narrow it, as the box-and-whisker
//! glyph does for its range queries against unpadded bounds.

use horizon_boxplot_render::{Point, Renderer};

use crate::array::{self, ArrayContainer};
use crate::boxplot::BoxplotSummary;
use crate::geometry::{Bounds, Geometry};
use crate::jitter::ElementKey;
use crate::style::GlyphStyle;

/// Everything a glyph needs besides its own data for one query.
#[derive(Debug, Clone, Copy)]
pub struct GlyphContext<'a> {
    /// Pixel placement.
    pub geometry: &'a Geometry,
    /// Resolved style.
    pub style: &'a GlyphStyle,
    /// Jitter identity.
    pub key: ElementKey,
}

/// A point-like part of a glyph under the cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointHit {
    /// Position in the outlier or item sequence.
    pub index: usize,
    /// Value-axis pixel coordinate of the point.
    pub value: f32,
    /// Pixel position of the point.
    pub point: Point,
}

/// Which tier of a glyph matched a hit test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hit {
    /// Inside the padded bounds.
    Box,
    /// Near an outlier marker.
    Outlier(PointHit),
    /// Near a jittered item point.
    Item(PointHit),
}

impl Hit {
    /// The matched outlier or item, if the hit was on a point.
    pub fn point_hit(&self) -> Option<&PointHit> {
        match self {
            Hit::Box => None,
            Hit::Outlier(hit) | Hit::Item(hit) => Some(hit),
        }
    }
}

/// Where a tooltip should be anchored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipAnchor {
    /// Anchor position in pixels.
    pub position: Point,
    /// The outlier under the cursor, for outlier-specific labels.
    pub outlier: Option<PointHit>,
}

/// Drawable and hit-testable statistical glyph.
pub trait Glyph {
    /// Axis-aligned bounds in pixel space.
    fn bounds(&self, geometry: &Geometry) -> Bounds;

    /// Value-axis coordinates of outlier markers.
    fn outliers(&self) -> &[f32];

    /// Value-axis coordinates of scattered items.
    fn items(&self) -> &[f32];

    /// Logical center used for tooltip following.
    fn center_point(&self, geometry: &Geometry) -> Point;

    /// Size used to order overlapping glyphs.
    fn area(&self, geometry: &Geometry) -> f32;

    /// Distance from the baseline used as an auto-scaling hint.
    fn height(&self, geometry: &Geometry) -> f32;

    /// Draw the glyph.
    fn draw<R: Renderer>(&self, renderer: &mut R, cx: &GlyphContext<'_>);

    /// Bounds grown by the style's hit padding.
    fn hit_bounds(&self, cx: &GlyphContext<'_>) -> Bounds {
        array::hit_bounds(self, cx)
    }

    /// Whether the point hits the glyph.
    fn in_range(&self, cx: &GlyphContext<'_>, point: Point) -> bool {
        self.hit_test(cx, point).is_some()
    }

    /// Whether the point lies in the glyph's band along the category axis.
    fn in_label_range(&self, cx: &GlyphContext<'_>, point: Point) -> bool {
        array::label_in_range(self, cx, point)
    }

    /// Whether `x` lies within the hit bounds horizontally.
    fn in_x_range(&self, cx: &GlyphContext<'_>, x: f32) -> bool {
        self.hit_bounds(cx).contains_x(x)
    }

    /// Whether `y` lies within the hit bounds vertically.
    fn in_y_range(&self, cx: &GlyphContext<'_>, y: f32) -> bool {
        self.hit_bounds(cx).contains_y(y)
    }

    /// The outlier near the point, if any.
    fn outlier_in_range(&self, cx: &GlyphContext<'_>, point: Point) -> Option<PointHit> {
        array::outlier_in_range(self.outliers(), cx, point)
    }

    /// The jittered item near the point, if any.
    fn item_in_range(&self, cx: &GlyphContext<'_>, point: Point) -> Option<PointHit> {
        array::item_in_range(self.items(), cx, point)
    }

    /// First matching tier: box, then outlier, then item.
    fn hit_test(&self, cx: &GlyphContext<'_>, point: Point) -> Option<Hit> {
        array::hit_test(self, cx, point)
    }

    /// Tooltip anchor for a pointer event.
    fn tooltip_position(&self, cx: &GlyphContext<'_>, event: Option<Point>) -> TooltipAnchor {
        array::tooltip_position(self, cx, event)
    }
}

/// The glyph variants an element can display.
#[derive(Debug, Clone, PartialEq)]
pub enum GlyphKind {
    /// Quartile box with whiskers, median and outliers.
    BoxAndWhiskers(BoxplotSummary),
    /// Scattered items and outliers without a summary shape.
    Array(ArrayContainer),
}

impl From<BoxplotSummary> for GlyphKind {
    fn from(summary: BoxplotSummary) -> Self {
        GlyphKind::BoxAndWhiskers(summary)
    }
}

impl From<ArrayContainer> for GlyphKind {
    fn from(container: ArrayContainer) -> Self {
        GlyphKind::Array(container)
    }
}

macro_rules! dispatch {
    ($self:ident, $glyph:ident => $body:expr) => {
        match $self {
            GlyphKind::BoxAndWhiskers($glyph) => $body,
            GlyphKind::Array($glyph) => $body,
        }
    };
}

impl Glyph for GlyphKind {
    fn bounds(&self, geometry: &Geometry) -> Bounds {
        dispatch!(self, g => g.bounds(geometry))
    }

    fn outliers(&self) -> &[f32] {
        dispatch!(self, g => g.outliers())
    }

    fn items(&self) -> &[f32] {
        dispatch!(self, g => g.items())
    }

    fn center_point(&self, geometry: &Geometry) -> Point {
        dispatch!(self, g => g.center_point(geometry))
    }

    fn area(&self, geometry: &Geometry) -> f32 {
        dispatch!(self, g => g.area(geometry))
    }

    fn height(&self, geometry: &Geometry) -> f32 {
        dispatch!(self, g => g.height(geometry))
    }

    fn draw<R: Renderer>(&self, renderer: &mut R, cx: &GlyphContext<'_>) {
        dispatch!(self, g => g.draw(renderer, cx))
    }

    fn in_range(&self, cx: &GlyphContext<'_>, point: Point) -> bool {
        dispatch!(self, g => g.in_range(cx, point))
    }

    fn in_label_range(&self, cx: &GlyphContext<'_>, point: Point) -> bool {
        dispatch!(self, g => g.in_label_range(cx, point))
    }

    fn in_x_range(&self, cx: &GlyphContext<'_>, x: f32) -> bool {
        dispatch!(self, g => g.in_x_range(cx, x))
    }

    fn in_y_range(&self, cx: &GlyphContext<'_>, y: f32) -> bool {
        dispatch!(self, g => g.in_y_range(cx, y))
    }

    fn hit_test(&self, cx: &GlyphContext<'_>, point: Point) -> Option<Hit> {
        dispatch!(self, g => g.hit_test(cx, point))
    }
}
