//! Point marker styles.

use std::fmt;
use std::str::FromStr;

use crate::error::{RenderError, RenderResult};

/// Shape of a point marker drawn by [`Renderer::draw_point`](crate::Renderer::draw_point).
///
/// Names follow the host charting vocabulary (`"circle"`, `"crossRot"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum PointStyle {
    /// Filled circle.
    #[default]
    Circle,
    /// Upright plus sign.
    Cross,
    /// Plus sign rotated by 45 degrees.
    CrossRot,
    /// Short horizontal stroke starting at the center.
    Dash,
    /// Horizontal stroke through the center.
    Line,
    /// Axis-aligned square.
    Rect,
    /// Square with rounded corners.
    RectRounded,
    /// Square rotated by 45 degrees.
    RectRot,
    /// Union of `Cross` and `CrossRot`.
    Star,
    /// Upward equilateral triangle.
    Triangle,
}

impl PointStyle {
    /// All marker styles, in declaration order.
    pub const ALL: [PointStyle; 10] = [
        PointStyle::Circle,
        PointStyle::Cross,
        PointStyle::CrossRot,
        PointStyle::Dash,
        PointStyle::Line,
        PointStyle::Rect,
        PointStyle::RectRounded,
        PointStyle::RectRot,
        PointStyle::Star,
        PointStyle::Triangle,
    ];

    /// The camelCase name of the style.
    pub fn name(&self) -> &'static str {
        match self {
            PointStyle::Circle => "circle",
            PointStyle::Cross => "cross",
            PointStyle::CrossRot => "crossRot",
            PointStyle::Dash => "dash",
            PointStyle::Line => "line",
            PointStyle::Rect => "rect",
            PointStyle::RectRounded => "rectRounded",
            PointStyle::RectRot => "rectRot",
            PointStyle::Star => "star",
            PointStyle::Triangle => "triangle",
        }
    }

    /// Whether the marker has an interior to fill.
    ///
    /// Line-only markers are stroked and never filled.
    pub fn is_filled(&self) -> bool {
        !matches!(
            self,
            PointStyle::Cross
                | PointStyle::CrossRot
                | PointStyle::Dash
                | PointStyle::Line
                | PointStyle::Star
        )
    }
}

impl fmt::Display for PointStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PointStyle {
    type Err = RenderError;

    fn from_str(s: &str) -> RenderResult<Self> {
        PointStyle::ALL
            .into_iter()
            .find(|style| style.name() == s)
            .ok_or_else(|| RenderError::UnknownPointStyle(s.to_string()))
    }
}
