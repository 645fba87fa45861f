//! Per-frame snapshot of one element.

use crate::geometry::Geometry;
use crate::glyph::{GlyphContext, GlyphKind};
use crate::jitter::ElementKey;
use crate::style::GlyphStyle;

/// Resolved geometry, style and glyph data for one render pass.
///
/// Built by the host for every layout pass and bound to an
/// [`Element`](crate::Element), which replaces it wholesale on the next pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub geometry: Geometry,
    pub style: GlyphStyle,
    pub glyph: GlyphKind,
}

impl ViewModel {
    /// Create a view model from its parts.
    pub fn new(geometry: Geometry, style: GlyphStyle, glyph: impl Into<GlyphKind>) -> Self {
        Self {
            geometry,
            style,
            glyph: glyph.into(),
        }
    }

    /// Borrow this view model as a glyph context for `key`.
    #[inline]
    pub fn context(&self, key: ElementKey) -> GlyphContext<'_> {
        GlyphContext {
            geometry: &self.geometry,
            style: &self.style,
            key,
        }
    }
}
