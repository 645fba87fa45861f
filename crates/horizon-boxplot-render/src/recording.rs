//! Display-list renderer that records draw commands.
//!
//! [`RecordingRenderer`] implements [`Renderer`] without rasterizing anything.
//! Every call is stored as a [`DrawCommand`] with the opacity in effect, so a
//! host can replay the list onto its own canvas, and tests can assert on the
//! exact primitives a glyph issued.

use tracing::{debug, trace};

use crate::paint::{FillRule, Paint, Stroke};
use crate::path::Path;
use crate::renderer::{FrameStats, RenderStateStack, Renderer};
use crate::types::{Color, Rect, Size};

/// A single recorded drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// `fill_rect` call.
    FillRect { rect: Rect, paint: Paint, opacity: f32 },
    /// `stroke_rect` call.
    StrokeRect { rect: Rect, stroke: Stroke, opacity: f32 },
    /// `fill_path` call.
    FillPath {
        path: Path,
        paint: Paint,
        fill_rule: FillRule,
        opacity: f32,
    },
    /// `stroke_path` call.
    StrokePath { path: Path, stroke: Stroke, opacity: f32 },
}

impl DrawCommand {
    /// Whether this command fills an area.
    pub fn is_fill(&self) -> bool {
        matches!(self, Self::FillRect { .. } | Self::FillPath { .. })
    }

    /// Whether this command strokes an outline.
    pub fn is_stroke(&self) -> bool {
        !self.is_fill()
    }

    /// The path of a path command.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::FillPath { path, .. } | Self::StrokePath { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// A [`Renderer`] that records commands instead of drawing them.
#[derive(Debug, Clone)]
pub struct RecordingRenderer {
    commands: Vec<DrawCommand>,
    state: RenderStateStack,
    clear_color: Color,
    viewport_size: Size,
    stats: FrameStats,
}

impl Default for RecordingRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingRenderer {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            state: RenderStateStack::new(),
            clear_color: Color::TRANSPARENT,
            viewport_size: Size::ZERO,
            stats: FrameStats::default(),
        }
    }

    /// Commands recorded since the last `begin_frame`.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the recorder empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Clear color of the current frame.
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    /// Viewport size of the current frame.
    pub fn viewport_size(&self) -> Size {
        self.viewport_size
    }

    /// Current save/restore depth.
    pub fn state_depth(&self) -> usize {
        self.state.depth()
    }

    fn record(&mut self, command: DrawCommand) {
        trace!(?command, "recorded draw command");
        self.stats.draw_calls += 1;
        self.commands.push(command);
    }

    fn skip(&mut self) {
        self.stats.skipped_calls += 1;
    }
}

impl Renderer for RecordingRenderer {
    fn begin_frame(&mut self, clear_color: Color, viewport_size: Size) {
        self.commands.clear();
        self.state.reset();
        self.stats = FrameStats::default();
        self.clear_color = clear_color;
        self.viewport_size = viewport_size;
    }

    fn end_frame(&mut self) -> FrameStats {
        debug!(
            draw_calls = self.stats.draw_calls,
            skipped = self.stats.skipped_calls,
            "frame recorded"
        );
        std::mem::take(&mut self.stats)
    }

    fn save(&mut self) {
        self.state.save();
    }

    fn restore(&mut self) {
        self.state.restore();
    }

    fn reset(&mut self) {
        self.state.reset();
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.state.current_mut().opacity = opacity.clamp(0.0, 1.0);
    }

    fn opacity(&self) -> f32 {
        self.state.current().opacity
    }

    fn fill_rect(&mut self, rect: Rect, paint: impl Into<Paint>) {
        let paint = paint.into();
        if paint.is_transparent() {
            self.skip();
            return;
        }
        let opacity = self.opacity();
        self.record(DrawCommand::FillRect { rect, paint, opacity });
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke) {
        if stroke.is_invisible() {
            self.skip();
            return;
        }
        let opacity = self.opacity();
        self.record(DrawCommand::StrokeRect {
            rect,
            stroke: *stroke,
            opacity,
        });
    }

    fn fill_path(&mut self, path: &Path, paint: impl Into<Paint>, fill_rule: FillRule) {
        let paint = paint.into();
        if path.is_empty() || paint.is_transparent() {
            self.skip();
            return;
        }
        let opacity = self.opacity();
        self.record(DrawCommand::FillPath {
            path: path.clone(),
            paint,
            fill_rule,
            opacity,
        });
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke) {
        if path.is_empty() || stroke.is_invisible() {
            self.skip();
            return;
        }
        let opacity = self.opacity();
        self.record(DrawCommand::StrokePath {
            path: path.clone(),
            stroke: *stroke,
            opacity,
        });
    }
}
