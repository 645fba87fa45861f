//! Drawing-surface primitives for Horizon Boxplot.
//!
//! This crate defines the boundary between statistical glyphs and the canvas
//! they are painted on: pixel-space geometry types, paints and strokes, paths
//! with arcs, point-marker shapes, and the [`Renderer`] trait.
//!
//! # Using the Renderer
//!
//! Glyphs only ever talk to `impl Renderer`. The bundled
//! [`RecordingRenderer`] keeps a display list of what was drawn:
//!
//! ```
//! use horizon_boxplot_render::{
//!     Color, DrawCommand, Point, PointStyle, RecordingRenderer, Rect, Renderer, Size, Stroke,
//! };
//!
//! let mut renderer = RecordingRenderer::new();
//! renderer.begin_frame(Color::WHITE, Size::new(800.0, 600.0));
//!
//! renderer.fill_rect(Rect::new(10.0, 10.0, 100.0, 50.0), Color::RED);
//! renderer.draw_point(
//!     PointStyle::Triangle,
//!     4.0,
//!     Point::new(60.0, 35.0),
//!     Color::BLUE,
//!     &Stroke::new(Color::BLACK, 1.0),
//! );
//!
//! assert!(matches!(renderer.commands()[0], DrawCommand::FillRect { .. }));
//! let stats = renderer.end_frame();
//! assert_eq!(stats.draw_calls, 3);
//! ```
//!
//! # Features
//!
//! - `serde`: (de)serialize [`Color`] as a `#RRGGBBAA` string and
//!   [`PointStyle`] as its camelCase name.

mod error;
mod paint;
mod path;
mod point_style;
mod recording;
mod renderer;
mod types;

pub use error::{RenderError, RenderResult};

// Renderer API
pub use recording::{DrawCommand, RecordingRenderer};
pub use renderer::{FrameStats, RenderState, RenderStateStack, Renderer};

// Drawing types
pub use paint::{FillRule, Paint, Stroke};
pub use path::{Path, PathCommand};
pub use point_style::PointStyle;
pub use types::{Color, Point, Rect, Size};
