//! Integration tests for the recording renderer and marker drawing.

use horizon_boxplot_render::{
    Color, DrawCommand, FillRule, Path, PathCommand, Point, PointStyle, RecordingRenderer, Rect,
    Renderer, Size, Stroke,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn test_every_marker_style_records_visible_output() {
    init_tracing();
    let stroke = Stroke::new(Color::BLACK, 1.0);

    for style in PointStyle::ALL {
        let mut renderer = RecordingRenderer::new();
        renderer.begin_frame(Color::WHITE, Size::new(100.0, 100.0));
        renderer.draw_point(style, 5.0, Point::new(50.0, 50.0), Color::RED, &stroke);

        let expected = if style.is_filled() { 2 } else { 1 };
        assert_eq!(
            renderer.commands().len(),
            expected,
            "unexpected command count for {style}"
        );
        assert!(renderer.commands().last().is_some_and(DrawCommand::is_stroke));
    }
}

#[test]
fn test_outline_paths_are_replayable() {
    let mut renderer = RecordingRenderer::new();
    let mut path = Path::new();
    path.add_circle(Point::new(10.0, 10.0), 2.0)
        .add_circle(Point::new(10.0, 40.0), 2.0);
    renderer.fill_path(&path, Color::GRAY, FillRule::NonZero);

    let replayed = renderer.commands()[0].path().expect("fill path command");
    assert_eq!(replayed.subpath_count(), 2);
    let arcs = replayed
        .commands()
        .iter()
        .filter(|cmd| matches!(cmd, PathCommand::Arc { .. }))
        .count();
    assert_eq!(arcs, 2);
}

#[test]
fn test_negative_size_rect_is_recorded_verbatim() {
    // Inverted quartiles produce negative heights; the surface takes them as-is.
    let mut renderer = RecordingRenderer::new();
    let rect = Rect::new(80.0, 70.0, 40.0, -20.0);
    renderer.fill_rect(rect, Color::BLUE);

    match &renderer.commands()[0] {
        DrawCommand::FillRect { rect: recorded, .. } => {
            assert_eq!(*recorded, rect);
            assert_eq!(recorded.normalized(), Rect::new(80.0, 50.0, 40.0, 20.0));
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_color_and_point_style() {
    let color: Color = serde_json::from_str("\"#FF000080\"").unwrap();
    assert!((color.a - 0.5).abs() < 0.01);
    assert_eq!(serde_json::to_string(&Color::BLUE).unwrap(), "\"#0000FFFF\"");

    let style: PointStyle = serde_json::from_str("\"rectRot\"").unwrap();
    assert_eq!(style, PointStyle::RectRot);
    assert!(serde_json::from_str::<Color>("\"red\"").is_err());
}
