//! Box-and-whisker glyphs for Horizon charts.
//!
//! This crate is the geometric element model behind box plots:
//!
//! - **Bounds**: orientation-aware glyph extents from a precomputed summary
//! - **Jitter**: reproducible scatter of raw item points across the box
//! - **Hit-testing**: box, then outlier markers, then jittered items
//! - **Drawing**: box, whiskers, median and markers on any [`Renderer`](render::Renderer)
//!
//! All values are already-scaled pixel coordinates; nothing here maps data to
//! pixels or computes quartiles.
//!
//! # Example
//!
//! ```
//! use horizon_boxplot::prelude::*;
//! use horizon_boxplot::render::{Point, RecordingRenderer};
//!
//! let mut element = Element::new(ElementKey::new(0, 0));
//! element.bind(ViewModel::new(
//!     Geometry::vertical(100.0, 60.0, 40.0),
//!     GlyphStyle::default(),
//!     BoxplotSummary::new(30.0, 50.0, 60.0, 70.0, 90.0).with_outliers([10.0, 95.0]),
//! ));
//!
//! assert_eq!(element.bounds(), Bounds::new(80.0, 90.0, 120.0, 30.0));
//! assert_eq!(element.area(), 800.0);
//!
//! match element.hit_test(Point::new(100.0, 10.0)) {
//!     Some(Hit::Outlier(outlier)) => assert_eq!(outlier.index, 0),
//!     other => panic!("unexpected hit {other:?}"),
//! }
//!
//! let mut renderer = RecordingRenderer::new();
//! element.draw(&mut renderer);
//! assert!(!renderer.commands().is_empty());
//! ```

pub mod array;
pub mod boxplot;
pub mod element;
pub mod geometry;
pub mod glyph;
pub mod jitter;
pub mod style;
pub mod view_model;

mod error;

pub use error::{Error, Result};

/// Drawing-surface primitives.
pub mod render {
    pub use horizon_boxplot_render::*;
}

pub use array::ArrayContainer;
pub use boxplot::BoxplotSummary;
pub use element::Element;
pub use geometry::{Bounds, Extent, Geometry, Orientation};
pub use glyph::{Glyph, GlyphContext, GlyphKind, Hit, PointHit, TooltipAnchor};
pub use jitter::{ElementKey, Jitter};
pub use style::{DEFAULT_COLOR, GlyphStyle, StyleOverrides, resolve_style};
pub use view_model::ViewModel;

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::array::ArrayContainer;
    pub use crate::boxplot::BoxplotSummary;
    pub use crate::element::Element;
    pub use crate::geometry::{Bounds, Geometry, Orientation};
    pub use crate::glyph::{Glyph, GlyphKind, Hit, PointHit, TooltipAnchor};
    pub use crate::jitter::ElementKey;
    pub use crate::style::{GlyphStyle, StyleOverrides};
    pub use crate::view_model::ViewModel;
    pub use horizon_boxplot_render::Renderer;
}
