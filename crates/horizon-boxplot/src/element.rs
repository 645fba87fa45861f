//! Long-lived element wrapper.
//!
//! An [`Element`] exists once per data point and survives across frames. Each
//! layout pass binds a fresh [`ViewModel`]; between passes, and before the
//! first one, the element has no geometry and every query answers with a safe
//! default instead of failing.

use horizon_boxplot_render::{Point, Renderer};
use tracing::{debug, trace};

use crate::geometry::Bounds;
use crate::glyph::{Glyph, Hit, PointHit, TooltipAnchor};
use crate::jitter::ElementKey;
use crate::view_model::ViewModel;

/// One glyph in a chart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    key: ElementKey,
    view: Option<ViewModel>,
}

impl Element {
    /// Create an unbound element.
    pub fn new(key: ElementKey) -> Self {
        Self { key, view: None }
    }

    /// Identity used to seed item jitter.
    #[inline]
    pub fn key(&self) -> ElementKey {
        self.key
    }

    /// The bound view model, if any.
    #[inline]
    pub fn view(&self) -> Option<&ViewModel> {
        self.view.as_ref()
    }

    /// Whether a view model is bound.
    #[inline]
    pub fn is_bound(&self) -> bool {
        self.view.is_some()
    }

    /// Bind the view model for the current pass, returning the previous one.
    pub fn bind(&mut self, view: ViewModel) -> Option<ViewModel> {
        debug!(
            dataset = self.key.dataset_index,
            index = self.key.element_index,
            orientation = ?view.geometry.orientation(),
            "element bound"
        );
        self.view.replace(view)
    }

    /// Drop the bound view model.
    pub fn unbind(&mut self) -> Option<ViewModel> {
        let previous = self.view.take();
        if previous.is_some() {
            debug!(
                dataset = self.key.dataset_index,
                index = self.key.element_index,
                "element unbound"
            );
        }
        previous
    }

    /// Whether the value axis is vertical; `false` when unbound.
    pub fn is_vertical(&self) -> bool {
        self.view.as_ref().is_some_and(|v| v.geometry.is_vertical())
    }

    /// Glyph bounds, or [`Bounds::ZERO`] when unbound.
    pub fn bounds(&self) -> Bounds {
        self.view
            .as_ref()
            .map_or(Bounds::ZERO, |v| v.glyph.bounds(&v.geometry))
    }

    /// Padded hit bounds, or [`Bounds::ZERO`] when unbound.
    pub fn hit_bounds(&self) -> Bounds {
        self.view
            .as_ref()
            .map_or(Bounds::ZERO, |v| v.glyph.hit_bounds(&v.context(self.key)))
    }

    /// Whether the point hits the glyph.
    pub fn in_range(&self, point: Point) -> bool {
        self.view
            .as_ref()
            .is_some_and(|v| v.glyph.in_range(&v.context(self.key), point))
    }

    /// Whether the point lies in the glyph's category band.
    pub fn in_label_range(&self, point: Point) -> bool {
        self.view
            .as_ref()
            .is_some_and(|v| v.glyph.in_label_range(&v.context(self.key), point))
    }

    /// Whether `x` is within the hit bounds horizontally.
    pub fn in_x_range(&self, x: f32) -> bool {
        self.view
            .as_ref()
            .is_some_and(|v| v.glyph.in_x_range(&v.context(self.key), x))
    }

    /// Whether `y` is within the hit bounds vertically.
    pub fn in_y_range(&self, y: f32) -> bool {
        self.view
            .as_ref()
            .is_some_and(|v| v.glyph.in_y_range(&v.context(self.key), y))
    }

    /// The outlier under the point.
    pub fn outlier_in_range(&self, point: Point) -> Option<PointHit> {
        let view = self.view.as_ref()?;
        view.glyph.outlier_in_range(&view.context(self.key), point)
    }

    /// The jittered item under the point.
    pub fn item_in_range(&self, point: Point) -> Option<PointHit> {
        let view = self.view.as_ref()?;
        view.glyph.item_in_range(&view.context(self.key), point)
    }

    /// Full three-tier hit test.
    pub fn hit_test(&self, point: Point) -> Option<Hit> {
        let Some(view) = self.view.as_ref() else {
            trace!(x = point.x, y = point.y, "hit test on unbound element");
            return None;
        };
        view.glyph.hit_test(&view.context(self.key), point)
    }

    /// Tooltip anchor; the origin with no outlier when unbound.
    pub fn tooltip_position(&self, event: Option<Point>) -> TooltipAnchor {
        match self.view.as_ref() {
            Some(view) => view.glyph.tooltip_position(&view.context(self.key), event),
            None => TooltipAnchor {
                position: Point::ZERO,
                outlier: None,
            },
        }
    }

    /// Center used for tooltip following; the origin when unbound.
    pub fn center_point(&self) -> Point {
        self.view
            .as_ref()
            .map_or(Point::ZERO, |v| v.glyph.center_point(&v.geometry))
    }

    /// Ordering size; `0` when unbound.
    pub fn area(&self) -> f32 {
        self.view
            .as_ref()
            .map_or(0.0, |v| v.glyph.area(&v.geometry))
    }

    /// Auto-scaling hint; `0` when unbound.
    pub fn height(&self) -> f32 {
        self.view
            .as_ref()
            .map_or(0.0, |v| v.glyph.height(&v.geometry))
    }

    /// Draw the glyph; nothing is drawn when unbound.
    pub fn draw<R: Renderer>(&self, renderer: &mut R) {
        match self.view.as_ref() {
            Some(view) => view.glyph.draw(renderer, &view.context(self.key)),
            None => trace!(
                dataset = self.key.dataset_index,
                index = self.key.element_index,
                "draw skipped for unbound element"
            ),
        }
    }
}
