//! Shared machinery for glyphs made of a central shape plus scattered points.
//!
//! The free functions here are the default implementations behind the
//! [`Glyph`] trait's provided methods. They are kept generic over the glyph so
//! any variant can reuse them, and public so a variant that narrows one tier
//! can still call the others directly.
//!
//! Hit-testing evaluates three tiers in order and the first match wins:
//!
//! 1. the padded bounds ([`Hit::Box`]),
//! 2. an outlier marker on the center line ([`Hit::Outlier`]),
//! 3. a jittered item point ([`Hit::Item`]).

use horizon_boxplot_render::{FillRule, Path, Point, Renderer};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::geometry::{Bounds, Geometry};
use crate::glyph::{Glyph, GlyphContext, Hit, PointHit, TooltipAnchor};
use crate::jitter::Jitter;

/// Padded bounds used for box hits and range queries.
pub fn hit_bounds<G: Glyph + ?Sized>(glyph: &G, cx: &GlyphContext<'_>) -> Bounds {
    glyph.bounds(cx.geometry).inflate(cx.style.hit_padding)
}

/// Tier 1: whether the point lies within the padded bounds.
pub fn box_in_range<G: Glyph + ?Sized>(glyph: &G, cx: &GlyphContext<'_>, point: Point) -> bool {
    hit_bounds(glyph, cx).contains(point)
}

/// Whether the point lies in the glyph's padded band along the category
/// axis, ignoring the value axis.
pub fn label_in_range<G: Glyph + ?Sized>(glyph: &G, cx: &GlyphContext<'_>, point: Point) -> bool {
    band_contains(&hit_bounds(glyph, cx), cx.geometry, point)
}

/// Whether the point lies within `bounds` along the category axis only.
pub fn band_contains(bounds: &Bounds, geometry: &Geometry, point: Point) -> bool {
    if geometry.is_vertical() {
        bounds.contains_x(point.x)
    } else {
        bounds.contains_y(point.y)
    }
}

/// Tier 2: the first outlier within the hit radius of the point.
///
/// The point must first be within the hit radius of the center line across
/// the cross axis; then outliers are compared along the value axis in
/// sequence order.
pub fn outlier_in_range(outliers: &[f32], cx: &GlyphContext<'_>, point: Point) -> Option<PointHit> {
    if !cx.style.outliers_enabled() {
        return None;
    }
    let geometry = cx.geometry;
    let radius = cx.style.outlier_hit_radius;
    if (geometry.cross_of(point) - geometry.cross_center()).abs() > radius {
        return None;
    }
    let value = geometry.value_of(point);
    outliers
        .iter()
        .position(|&o| (o - value).abs() <= radius)
        .map(|index| PointHit {
            index,
            value: outliers[index],
            point: geometry.on_center_line(outliers[index]),
        })
}

/// Pixel positions of jittered items, in sequence order.
///
/// The jitter is regenerated from the element key on every call, so drawing
/// and hit-testing always agree.
pub fn item_points(items: &[f32], cx: &GlyphContext<'_>) -> Vec<Point> {
    let geometry = cx.geometry;
    let crosses = Jitter::spread(cx.key, geometry.cross_start(), geometry.size(), items.len());
    items
        .iter()
        .zip(crosses)
        .map(|(&value, cross)| geometry.point(cross, value))
        .collect()
}

/// Tier 3: the first jittered item within the hit radius of the point.
pub fn item_in_range(items: &[f32], cx: &GlyphContext<'_>, point: Point) -> Option<PointHit> {
    if !cx.style.items_enabled() || items.is_empty() {
        return None;
    }
    let geometry = cx.geometry;
    // The scatter envelope is the full extent either side of the center line.
    if (geometry.cross_of(point) - geometry.cross_center()).abs() > geometry.size() {
        return None;
    }
    let radius = cx.style.outlier_hit_radius;
    item_points(items, cx)
        .into_iter()
        .enumerate()
        .find(|(_, p)| p.distance(point) <= radius)
        .map(|(index, p)| PointHit {
            index,
            value: items[index],
            point: p,
        })
}

/// Run the three tiers in order.
pub fn hit_test<G: Glyph + ?Sized>(glyph: &G, cx: &GlyphContext<'_>, point: Point) -> Option<Hit> {
    let hit = if box_in_range(glyph, cx, point) {
        Some(Hit::Box)
    } else if let Some(outlier) = glyph.outlier_in_range(cx, point) {
        Some(Hit::Outlier(outlier))
    } else {
        glyph.item_in_range(cx, point).map(Hit::Item)
    };
    trace!(x = point.x, y = point.y, ?hit, "glyph hit test");
    hit
}

/// Tooltip anchor: pinned to the outlier under the cursor, else the center.
pub fn tooltip_position<G: Glyph + ?Sized>(
    glyph: &G,
    cx: &GlyphContext<'_>,
    event: Option<Point>,
) -> TooltipAnchor {
    let outlier = event.and_then(|p| glyph.outlier_in_range(cx, p));
    match outlier {
        Some(hit) => TooltipAnchor {
            position: hit.point,
            outlier: Some(hit),
        },
        None => TooltipAnchor {
            position: glyph.center_point(cx.geometry),
            outlier: None,
        },
    }
}

/// Draw jittered item markers.
pub fn draw_items<R: Renderer>(renderer: &mut R, items: &[f32], cx: &GlyphContext<'_>) {
    let style = cx.style;
    if !style.items_enabled() || items.is_empty() {
        trace!(radius = style.item_radius, count = items.len(), "items skipped");
        return;
    }
    let stroke = style.item_stroke();
    renderer.save();
    for point in item_points(items, cx) {
        renderer.draw_point(
            style.item_style,
            style.item_radius,
            point,
            style.item_background_color,
            &stroke,
        );
    }
    renderer.restore();
}

/// Fill one circle per outlier on the center line, as a single path.
pub fn draw_outliers<R: Renderer>(renderer: &mut R, outliers: &[f32], cx: &GlyphContext<'_>) {
    let style = cx.style;
    if !style.outliers_enabled() || outliers.is_empty() {
        trace!(radius = style.outlier_radius, count = outliers.len(), "outliers skipped");
        return;
    }
    let mut path = Path::new();
    for &value in outliers {
        path.add_circle(cx.geometry.on_center_line(value), style.outlier_radius);
    }
    renderer.fill_path(&path, style.outlier_color, FillRule::NonZero);
}

/// Raw item and outlier values of a generic distribution glyph.
///
/// Both sequences are value-axis pixel coordinates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrayContainer {
    pub items: Vec<f32>,
    pub outliers: Vec<f32>,
}

impl ArrayContainer {
    /// Container with items and outliers.
    pub fn new(items: impl Into<Vec<f32>>, outliers: impl Into<Vec<f32>>) -> Self {
        Self {
            items: items.into(),
            outliers: outliers.into(),
        }
    }

    /// Smallest and largest value over items and outliers.
    pub fn value_range(&self) -> Option<(f32, f32)> {
        self.items
            .iter()
            .chain(&self.outliers)
            .copied()
            .fold(None, |range, v| match range {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

impl Glyph for ArrayContainer {
    fn bounds(&self, geometry: &Geometry) -> Bounds {
        let value = geometry.value_center();
        let (low, high) = self.value_range().unwrap_or((value, value));
        geometry.span_bounds(low, high)
    }

    fn outliers(&self) -> &[f32] {
        &self.outliers
    }

    fn items(&self) -> &[f32] {
        &self.items
    }

    fn center_point(&self, geometry: &Geometry) -> Point {
        geometry.position
    }

    fn area(&self, geometry: &Geometry) -> f32 {
        self.value_range()
            .map_or(0.0, |(low, high)| (high - low) * geometry.size())
    }

    fn height(&self, _geometry: &Geometry) -> f32 {
        0.0
    }

    fn draw<R: Renderer>(&self, renderer: &mut R, cx: &GlyphContext<'_>) {
        draw_items(renderer, &self.items, cx);
        draw_outliers(renderer, &self.outliers, cx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jitter::ElementKey;
    use crate::style::GlyphStyle;
    use horizon_boxplot_render::{DrawCommand, PathCommand, PointStyle, RecordingRenderer};

    fn context<'a>(geometry: &'a Geometry, style: &'a GlyphStyle) -> GlyphContext<'a> {
        GlyphContext {
            geometry,
            style,
            key: ElementKey::new(1, 4),
        }
    }

    #[test]
    fn test_value_range() {
        assert_eq!(ArrayContainer::default().value_range(), None);
        let c = ArrayContainer::new([40.0, 20.0, 60.0], [5.0]);
        assert_eq!(c.value_range(), Some((5.0, 60.0)));
    }

    #[test]
    fn test_container_bounds_and_area() {
        let geometry = Geometry::vertical(100.0, 50.0, 20.0);
        let c = ArrayContainer::new([40.0, 20.0, 60.0], [80.0]);
        assert_eq!(c.bounds(&geometry), Bounds::new(90.0, 80.0, 110.0, 20.0));
        assert_eq!(c.area(&geometry), 60.0 * 20.0);
        assert_eq!(c.center_point(&geometry), Point::new(100.0, 50.0));
        assert_eq!(c.height(&geometry), 0.0);
    }

    #[test]
    fn test_empty_container_collapses_to_anchor() {
        let geometry = Geometry::horizontal(30.0, 70.0, 10.0);
        let c = ArrayContainer::default();
        assert_eq!(c.bounds(&geometry), Bounds::new(30.0, 65.0, 30.0, 75.0));
        assert_eq!(c.area(&geometry), 0.0);
    }

    #[test]
    fn test_outlier_requires_center_line() {
        let geometry = Geometry::vertical(100.0, 0.0, 40.0);
        let style = GlyphStyle::default();
        let cx = context(&geometry, &style);
        let outliers = [10.0, 95.0];

        let hit = outlier_in_range(&outliers, &cx, Point::new(105.0, 97.0)).unwrap();
        assert_eq!(hit.index, 1);
        assert_eq!(hit.point, Point::new(100.0, 95.0));

        assert!(outlier_in_range(&outliers, &cx, Point::new(109.0, 95.0)).is_none());
        assert!(outlier_in_range(&outliers, &cx, Point::new(100.0, 50.0)).is_none());
    }

    #[test]
    fn test_first_outlier_in_sequence_wins() {
        let geometry = Geometry::vertical(0.0, 0.0, 10.0);
        let style = GlyphStyle::default();
        let cx = context(&geometry, &style);
        let hit = outlier_in_range(&[12.0, 10.0], &cx, Point::new(0.0, 10.0)).unwrap();
        assert_eq!(hit.index, 0);
        assert_eq!(hit.value, 12.0);
    }

    #[test]
    fn test_items_disabled_by_default() {
        let geometry = Geometry::vertical(100.0, 0.0, 40.0);
        let style = GlyphStyle::default();
        let cx = context(&geometry, &style);
        let items = [50.0];
        let p = item_points(&items, &cx)[0];
        assert!(item_in_range(&items, &cx, p).is_none());
    }

    #[test]
    fn test_item_hit_at_drawn_point() {
        let geometry = Geometry::horizontal(0.0, 200.0, 30.0);
        let style = GlyphStyle::default().with_items(2.0, PointStyle::Circle);
        let cx = context(&geometry, &style);
        let items = [10.0, 60.0, 110.0];

        for (index, p) in item_points(&items, &cx).into_iter().enumerate() {
            let hit = item_in_range(&items, &cx, p).unwrap();
            assert_eq!(hit.index, index);
            assert_eq!(hit.point, p);
            assert!((185.0..215.0).contains(&p.y));
        }
    }

    #[test]
    fn test_item_points_stay_below_far_edge() {
        let geometry = Geometry::vertical(1000.0, 0.0, 1.0);
        let style = GlyphStyle::default().with_items(1.0, PointStyle::Circle);
        let items = [5.0; 20];
        for element_index in 0..1000 {
            let cx = GlyphContext {
                key: ElementKey::new(2, element_index),
                ..context(&geometry, &style)
            };
            for p in item_points(&items, &cx) {
                assert!((999.5..1000.5).contains(&p.x), "x {} at element {element_index}", p.x);
            }
        }
    }

    #[test]
    fn test_item_envelope_is_full_extent() {
        let geometry = Geometry::vertical(100.0, 0.0, 10.0);
        let style = GlyphStyle::default()
            .with_items(1.0, PointStyle::Circle)
            .with_outlier_hit_radius(1000.0);
        let cx = context(&geometry, &style);
        let items = [50.0];
        assert!(item_in_range(&items, &cx, Point::new(110.0, 50.0)).is_some());
        assert!(item_in_range(&items, &cx, Point::new(110.5, 50.0)).is_none());
    }

    #[test]
    fn test_hit_test_order() {
        let geometry = Geometry::vertical(100.0, 50.0, 20.0);
        let style = GlyphStyle::default().with_items(2.0, PointStyle::Circle);
        let cx = context(&geometry, &style);
        let c = ArrayContainer::new([40.0, 60.0], [10.0]);

        assert_eq!(c.hit_test(&cx, Point::new(100.0, 50.0)), Some(Hit::Box));
        // Padded bounds end at 8; the outlier hit radius reaches down to 2.
        assert!(matches!(
            c.hit_test(&cx, Point::new(100.0, 3.0)),
            Some(Hit::Outlier(PointHit { index: 0, .. }))
        ));
        assert_eq!(c.hit_test(&cx, Point::new(300.0, 40.0)), None);
        assert!(!c.in_range(&cx, Point::new(300.0, 40.0)));
    }

    #[test]
    fn test_label_range_ignores_value_axis() {
        let geometry = Geometry::vertical(100.0, 50.0, 20.0);
        let style = GlyphStyle::default();
        let cx = context(&geometry, &style);
        let c = ArrayContainer::new([40.0], []);
        assert!(c.in_label_range(&cx, Point::new(91.0, 5000.0)));
        assert!(!c.in_label_range(&cx, Point::new(120.0, 40.0)));
    }

    #[test]
    fn test_tooltip_pins_to_outlier() {
        let geometry = Geometry::horizontal(50.0, 100.0, 20.0);
        let style = GlyphStyle::default();
        let cx = context(&geometry, &style);
        let c = ArrayContainer::new([40.0, 60.0], [200.0]);

        let anchor = c.tooltip_position(&cx, Some(Point::new(203.0, 104.0)));
        assert_eq!(anchor.position, Point::new(200.0, 100.0));
        assert_eq!(anchor.outlier.map(|o| o.index), Some(0));

        let anchor = c.tooltip_position(&cx, None);
        assert_eq!(anchor.position, Point::new(50.0, 100.0));
        assert!(anchor.outlier.is_none());
    }

    #[test]
    fn test_draw_outliers_single_path() {
        let geometry = Geometry::vertical(100.0, 0.0, 40.0);
        let style = GlyphStyle::default();
        let cx = context(&geometry, &style);
        let mut renderer = RecordingRenderer::new();
        draw_outliers(&mut renderer, &[10.0, 95.0], &cx);

        let commands = renderer.commands();
        assert_eq!(commands.len(), 1);
        let DrawCommand::FillPath { path, .. } = &commands[0] else {
            panic!("expected a path fill, got {:?}", commands[0]);
        };
        let arcs: Vec<_> = path
            .commands()
            .iter()
            .filter_map(|c| match c {
                PathCommand::Arc { center, radius, .. } => Some((*center, *radius)),
                _ => None,
            })
            .collect();
        assert_eq!(
            arcs,
            vec![(Point::new(100.0, 10.0), 2.0), (Point::new(100.0, 95.0), 2.0)]
        );
    }

    #[test]
    fn test_draw_items_scoped_by_save_restore() {
        let geometry = Geometry::vertical(100.0, 0.0, 40.0);
        let style = GlyphStyle::default().with_items(3.0, PointStyle::Circle);
        let cx = context(&geometry, &style);
        let mut renderer = RecordingRenderer::new();
        draw_items(&mut renderer, &[10.0, 20.0, 30.0], &cx);

        // A circle is filled then stroked.
        assert_eq!(renderer.commands().len(), 6);
        assert_eq!(renderer.state_depth(), 0);
    }
}
