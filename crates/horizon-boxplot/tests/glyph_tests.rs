//! Integration tests for element geometry, hit-testing and drawing.

use horizon_boxplot::prelude::*;
use horizon_boxplot::render::{DrawCommand, PathCommand, Point, PointStyle, RecordingRenderer};
use horizon_boxplot::{Jitter, array, resolve_style};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn summary() -> BoxplotSummary {
    BoxplotSummary::new(30.0, 50.0, 60.0, 70.0, 90.0).with_outliers([10.0, 95.0])
}

fn vertical_element(style: GlyphStyle) -> Element {
    let mut element = Element::new(ElementKey::new(2, 5));
    element.bind(ViewModel::new(
        Geometry::vertical(100.0, 60.0, 40.0),
        style,
        summary(),
    ));
    element
}

fn horizontal_element(style: GlyphStyle) -> Element {
    let mut element = Element::new(ElementKey::new(2, 5));
    element.bind(ViewModel::new(
        Geometry::horizontal(60.0, 100.0, 40.0),
        style,
        summary(),
    ));
    element
}

fn probe_points() -> Vec<Point> {
    let mut points = Vec::new();
    for x in (60..=140).step_by(3) {
        for y in (0..=110).step_by(3) {
            points.push(Point::new(x as f32, y as f32));
        }
    }
    points
}

#[test]
fn test_reference_box_scenario() {
    init_tracing();
    let element = vertical_element(GlyphStyle::default());

    assert_eq!(element.bounds(), Bounds::new(80.0, 90.0, 120.0, 30.0));
    assert_eq!(element.center_point(), Point::new(100.0, 60.0));
    assert_eq!(element.area(), 800.0);

    let cursor = Point::new(100.0, 10.0);
    assert!(!element.in_range(cursor));
    let Some(Hit::Outlier(outlier)) = element.hit_test(cursor) else {
        panic!("expected an outlier hit");
    };
    assert_eq!(outlier.index, 0);
    assert_eq!(outlier.value, 10.0);
    assert_eq!(outlier.point, Point::new(100.0, 10.0));
}

#[test]
fn test_hit_bounds_enclose_bounds() {
    for padding in [0.0, 0.5, 2.0, 10.0] {
        let style = GlyphStyle::default().with_hit_padding(padding);
        for element in [vertical_element(style.clone()), horizontal_element(style)] {
            let bounds = element.bounds();
            let hit = element.hit_bounds();
            assert!(hit.encloses(&bounds), "padding {padding}: {hit:?} vs {bounds:?}");
            if padding == 0.0 {
                assert_eq!(hit, bounds);
            }
        }
    }
}

#[test]
fn test_box_wins_but_outlier_still_reported() {
    let element = vertical_element(GlyphStyle::default());
    // Outlier at 95 lies inside the padded bounds that reach up to 92.
    let cursor = Point::new(100.0, 91.0);

    assert_eq!(element.hit_test(cursor), Some(Hit::Box));
    // Range queries use the unpadded bounds, which end at 90.
    assert!(!element.in_range(cursor));
    let outlier = element.outlier_in_range(cursor).expect("outlier near cursor");
    assert_eq!(outlier.index, 1);
    assert_eq!(outlier.value, 95.0);
}

#[test]
fn test_orientation_symmetry() {
    let style = GlyphStyle::default().with_items(2.0, PointStyle::Circle);
    let vertical = vertical_element(style.clone());
    let horizontal = horizontal_element(style);

    assert_eq!(
        vertical.bounds().transpose().normalized(),
        horizontal.bounds().normalized()
    );
    assert_eq!(vertical.center_point().transpose(), horizontal.center_point());
    assert_eq!(vertical.area(), horizontal.area());

    for p in probe_points() {
        let q = p.transpose();
        assert_eq!(vertical.in_range(p), horizontal.in_range(q), "at {p:?}");
        assert_eq!(
            vertical.hit_test(p).is_some(),
            horizontal.hit_test(q).is_some(),
            "at {p:?}"
        );
        assert_eq!(vertical.in_label_range(p), horizontal.in_label_range(q), "at {p:?}");
    }
}

#[test]
fn test_area_uses_absolute_iqr_and_scales_with_extent() {
    let geometry = Geometry::vertical(0.0, 0.0, 10.0);
    let s = summary();
    let mut swapped = summary();
    std::mem::swap(&mut swapped.q1, &mut swapped.q3);
    assert_eq!(s.area(&geometry), swapped.area(&geometry));

    let wide = Geometry::vertical(0.0, 0.0, 30.0);
    assert_eq!(s.area(&wide), 3.0 * s.area(&geometry));
}

#[test]
fn test_zero_outlier_radius_disables_tier() {
    let style = GlyphStyle::default().with_outlier_radius(0.0);
    let element = vertical_element(style);

    let mut renderer = RecordingRenderer::new();
    element.draw(&mut renderer);
    let arcs = renderer
        .commands()
        .iter()
        .filter_map(DrawCommand::path)
        .flat_map(|path| path.commands())
        .filter(|c| matches!(c, PathCommand::Arc { .. }))
        .count();
    assert_eq!(arcs, 0);
    // Only the box background is filled.
    assert_eq!(renderer.commands().iter().filter(|c| c.is_fill()).count(), 1);

    assert!(element.outlier_in_range(Point::new(100.0, 10.0)).is_none());
    assert_eq!(element.hit_test(Point::new(100.0, 10.0)), None);
}

#[test]
fn test_jitter_matches_between_draw_and_hit_test() {
    init_tracing();
    let style = GlyphStyle::default().with_items(3.0, PointStyle::Circle);
    let items = vec![20.0, 45.0, 70.0, 95.0];
    let mut element = Element::new(ElementKey::new(1, 7));
    element.bind(ViewModel::new(
        Geometry::vertical(100.0, 50.0, 40.0),
        style,
        ArrayContainer::new(items.clone(), Vec::new()),
    ));

    let mut renderer = RecordingRenderer::new();
    element.draw(&mut renderer);
    let drawn: Vec<Point> = renderer
        .commands()
        .iter()
        .filter(|c| c.is_fill())
        .filter_map(DrawCommand::path)
        .filter_map(|path| match path.commands().get(1) {
            Some(PathCommand::Arc { center, .. }) => Some(*center),
            _ => None,
        })
        .collect();
    assert_eq!(drawn.len(), items.len());

    let view = element.view().expect("bound");
    let cx = view.context(element.key());
    assert_eq!(drawn, array::item_points(&items, &cx));

    for (index, point) in drawn.iter().enumerate() {
        let hit = element.item_in_range(*point).expect("item under its own marker");
        assert_eq!(hit.index, index);
        assert_eq!(hit.value, items[index]);
    }

    // Redrawing reproduces the same positions.
    let mut again = RecordingRenderer::new();
    element.draw(&mut again);
    assert_eq!(renderer.commands(), again.commands());

    let crosses = Jitter::spread(element.key(), 80.0, 40.0, items.len());
    assert_eq!(drawn.iter().map(|p| p.x).collect::<Vec<_>>(), crosses);
}

#[test]
fn test_item_hits_behind_outliers() {
    let style = GlyphStyle::default().with_items(2.0, PointStyle::Triangle);
    let container = ArrayContainer::new([40.0], [40.0]);
    let mut element = Element::new(ElementKey::new(0, 1));
    element.bind(ViewModel::new(
        Geometry::vertical(100.0, 50.0, 4.0),
        style,
        container.clone(),
    ));

    // Outside the padded band (96..=104) but within the outlier hit radius.
    let cursor = Point::new(107.0, 40.0);
    assert!(matches!(element.hit_test(cursor), Some(Hit::Outlier(_))));

    let view = element.view().expect("bound");
    let item = array::item_points(&container.items, &view.context(element.key()))[0];
    assert!(element.item_in_range(item).is_some());
}

#[test]
fn test_styles_resolve_from_config() {
    let defaults = GlyphStyle::from_toml_str(
        r##"
        hitPadding = 0
        outlierHitRadius = 4
        "##,
    )
    .unwrap();
    let dataset = StyleOverrides::from_json_str(r##"{"borderColor": "#FF0000"}"##).unwrap();
    let mut element_overrides = StyleOverrides::default();
    element_overrides.set_option("outlierRadius", "3").unwrap();

    let style = resolve_style(&defaults, &dataset, &element_overrides);
    let element = vertical_element(style);

    assert_eq!(element.hit_bounds(), element.bounds());
    assert!(element.outlier_in_range(Point::new(100.0, 15.0)).is_none());
    assert!(element.outlier_in_range(Point::new(100.0, 14.0)).is_some());

    let mut renderer = RecordingRenderer::new();
    element.draw(&mut renderer);
    let Some(DrawCommand::FillPath { path, .. }) = renderer.commands().last() else {
        panic!("outliers are drawn last");
    };
    assert!(path.commands().iter().any(
        |c| matches!(c, PathCommand::Arc { radius, .. } if *radius == 3.0)
    ));
}

#[test]
fn test_tooltip_reports_outlier_without_mutation() {
    let element = horizontal_element(GlyphStyle::default());

    let anchor = element.tooltip_position(Some(Point::new(12.0, 103.0)));
    assert_eq!(anchor.position, Point::new(10.0, 100.0));
    assert_eq!(anchor.outlier.map(|o| o.index), Some(0));

    let anchor = element.tooltip_position(Some(Point::new(60.0, 100.0)));
    assert_eq!(anchor.position, element.center_point());
    assert!(anchor.outlier.is_none());

    assert_eq!(element.tooltip_position(None).position, Point::new(60.0, 100.0));
}
