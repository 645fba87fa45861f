//! Box-and-whisker glyph.

use horizon_boxplot_render::{Path, Point, Renderer};
use serde::{Deserialize, Serialize};

use crate::array;
use crate::geometry::{Bounds, Geometry};
use crate::glyph::{Glyph, GlyphContext};

/// Precomputed five-number summary plus outliers, in value-axis pixels.
///
/// `whisker_min <= q1 <= median <= q3 <= whisker_max` is expected but not
/// checked; inverted input draws an inverted shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxplotSummary {
    pub q1: f32,
    pub median: f32,
    pub q3: f32,
    pub whisker_min: f32,
    pub whisker_max: f32,
    #[serde(default)]
    pub outliers: Vec<f32>,
}

impl BoxplotSummary {
    /// Summary without outliers.
    pub fn new(whisker_min: f32, q1: f32, median: f32, q3: f32, whisker_max: f32) -> Self {
        Self {
            q1,
            median,
            q3,
            whisker_min,
            whisker_max,
            outliers: Vec::new(),
        }
    }

    /// Attach outlier values.
    pub fn with_outliers(mut self, outliers: impl Into<Vec<f32>>) -> Self {
        self.outliers = outliers.into();
        self
    }

    /// Interquartile range, always non-negative.
    #[inline]
    pub fn iqr(&self) -> f32 {
        (self.q3 - self.q1).abs()
    }

    /// Whiskers and caps, plus the median line unless it is stroked on its
    /// own.
    fn whisker_path(&self, geometry: &Geometry, include_median: bool) -> Path {
        let mut path = Path::new();
        add_cap(&mut path, geometry, self.whisker_min);
        path.add_segment(
            geometry.on_center_line(self.whisker_min),
            geometry.on_center_line(self.q1),
        );
        add_cap(&mut path, geometry, self.whisker_max);
        path.add_segment(
            geometry.on_center_line(self.whisker_max),
            geometry.on_center_line(self.q3),
        );
        if include_median {
            add_cap(&mut path, geometry, self.median);
        }
        path
    }
}

/// Line across the full box extent at a value.
fn add_cap(path: &mut Path, geometry: &Geometry, value: f32) {
    let start = geometry.cross_start();
    path.add_segment(
        geometry.point(start, value),
        geometry.point(start + geometry.size(), value),
    );
}

impl Glyph for BoxplotSummary {
    /// Whisker extent along the value axis, box extent across it.
    fn bounds(&self, geometry: &Geometry) -> Bounds {
        geometry.span_bounds(self.whisker_min, self.whisker_max)
    }

    fn outliers(&self) -> &[f32] {
        &self.outliers
    }

    fn items(&self) -> &[f32] {
        &[]
    }

    /// The median on the anchor line.
    fn center_point(&self, geometry: &Geometry) -> Point {
        geometry.on_center_line(self.median)
    }

    fn area(&self, geometry: &Geometry) -> f32 {
        self.iqr() * geometry.size()
    }

    fn height(&self, geometry: &Geometry) -> f32 {
        geometry.base - self.q1.min(self.q3)
    }

    /// Only the unpadded bounds count; outliers are reachable through
    /// [`Glyph::hit_test`] and [`Glyph::outlier_in_range`].
    fn in_range(&self, cx: &GlyphContext<'_>, point: Point) -> bool {
        self.bounds(cx.geometry).contains(point)
    }

    fn in_label_range(&self, cx: &GlyphContext<'_>, point: Point) -> bool {
        array::band_contains(&self.bounds(cx.geometry), cx.geometry, point)
    }

    fn in_x_range(&self, cx: &GlyphContext<'_>, x: f32) -> bool {
        self.bounds(cx.geometry).contains_x(x)
    }

    fn in_y_range(&self, cx: &GlyphContext<'_>, y: f32) -> bool {
        self.bounds(cx.geometry).contains_y(y)
    }

    fn draw<R: Renderer>(&self, renderer: &mut R, cx: &GlyphContext<'_>) {
        let geometry = cx.geometry;
        let style = cx.style;
        let border = style.border_stroke();

        let quartiles = geometry.span_rect(self.q1, self.q3);
        renderer.fill_rect(quartiles, style.background_color);
        if let Some(lower) = style.lower_color {
            renderer.fill_rect(geometry.span_rect(self.q1, self.median), lower);
        }
        renderer.stroke_rect(quartiles, &border);

        let median_color = style.median_color;
        renderer.stroke_path(&self.whisker_path(geometry, median_color.is_none()), &border);
        if let Some(color) = median_color {
            let mut median = Path::new();
            add_cap(&mut median, geometry, self.median);
            renderer.stroke_path(&median, &border.with_paint(color));
        }

        array::draw_outliers(renderer, &self.outliers, cx);
    }
}
