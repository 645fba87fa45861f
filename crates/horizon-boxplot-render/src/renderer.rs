//! The drawing surface glyphs paint onto.
//!
//! Hosts implement [`Renderer`] over their own canvas; the crate ships
//! [`RecordingRenderer`](crate::RecordingRenderer) as a display-list backend.

use crate::paint::{FillRule, Paint, Stroke};
use crate::path::Path;
use crate::point_style::PointStyle;
use crate::types::{Color, Point, Rect, Size};

/// Counters reported by [`Renderer::end_frame`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Primitives that reached the surface.
    pub draw_calls: u32,
    /// Number of draw calls skipped because they would leave no visible mark.
    pub skipped_calls: u32,
}

/// A canvas-like 2D surface.
///
/// Fill and stroke styles travel with each call as [`Paint`] and [`Stroke`]
/// values, so glyph code never leaves colors or line widths behind. The only
/// mutable surface state is opacity, scoped with [`save`](Renderer::save) and
/// [`restore`](Renderer::restore):
///
/// ```ignore
/// renderer.begin_frame(Color::WHITE, viewport);
/// renderer.save();
/// renderer.set_opacity(0.5);
/// element.draw(&mut renderer);
/// renderer.restore();
/// let stats = renderer.end_frame();
/// ```
pub trait Renderer {
    /// Begin a new frame cleared to `clear_color`.
    fn begin_frame(&mut self, clear_color: Color, viewport_size: Size);

    /// Finish the frame and hand back its counters.
    fn end_frame(&mut self) -> FrameStats;

    // =========================================================================
    // State Management
    // =========================================================================

    /// Save the current render state.
    fn save(&mut self);

    /// Restore the previously saved render state.
    fn restore(&mut self);

    /// Reset all state to defaults.
    fn reset(&mut self);

    /// Opacity applied to everything drawn until the next restore.
    fn set_opacity(&mut self, opacity: f32);

    /// Opacity currently in effect.
    fn opacity(&self) -> f32;

    // =========================================================================
    // Drawing - Rectangles
    // =========================================================================

    /// Fill a rectangle. Negative sizes extend up or left of the origin.
    fn fill_rect(&mut self, rect: Rect, paint: impl Into<Paint>);

    /// Stroke the outline of a rectangle.
    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke);

    // =========================================================================
    // Drawing - Paths
    // =========================================================================

    /// Fill every subpath of `path`.
    fn fill_path(&mut self, path: &Path, paint: impl Into<Paint>, fill_rule: FillRule);

    /// Stroke every subpath of `path`.
    fn stroke_path(&mut self, path: &Path, stroke: &Stroke);

    // =========================================================================
    // Drawing - Convenience
    // =========================================================================

    /// Fill a circle.
    #[inline]
    fn fill_circle(&mut self, center: Point, radius: f32, paint: impl Into<Paint>) {
        self.fill_path(&Path::circle(center, radius), paint, FillRule::NonZero);
    }

    /// Draw a point marker centered at `center`.
    ///
    /// Filled styles are filled with `fill` and then outlined with `stroke`;
    /// line-only styles are stroked. Nothing is drawn for a non-positive radius.
    fn draw_point(
        &mut self,
        style: PointStyle,
        radius: f32,
        center: Point,
        fill: impl Into<Paint>,
        stroke: &Stroke,
    ) {
        let path = Path::point_marker(style, radius, center);
        if path.is_empty() {
            return;
        }
        if style.is_filled() {
            self.fill_path(&path, fill, FillRule::NonZero);
        }
        self.stroke_path(&path, stroke);
    }
}

/// Surface state captured by [`Renderer::save`].
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub opacity: f32,
}

impl Default for RenderState {
    fn default() -> Self {
        Self { opacity: 1.0 }
    }
}

/// Save/restore bookkeeping shared by renderer implementations.
#[derive(Debug, Clone, Default)]
pub struct RenderStateStack {
    stack: Vec<RenderState>,
    current: RenderState,
}

impl RenderStateStack {
    /// Empty stack at full opacity.
    pub fn new() -> Self {
        Self::default()
    }

    /// State in effect.
    #[inline]
    pub fn current(&self) -> &RenderState {
        &self.current
    }

    /// Mutable state in effect.
    #[inline]
    pub fn current_mut(&mut self) -> &mut RenderState {
        &mut self.current
    }

    /// Push a copy of the state in effect.
    pub fn save(&mut self) {
        self.stack.push(self.current.clone());
    }

    /// Pop the last saved state. An unbalanced restore is ignored.
    pub fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.current = state;
        } else {
            tracing::warn!("restore() called without a matching save()");
        }
    }

    /// Drop all saved states and return to full opacity.
    pub fn reset(&mut self) {
        self.stack.clear();
        self.current = RenderState::default();
    }

    /// Number of saved states.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
