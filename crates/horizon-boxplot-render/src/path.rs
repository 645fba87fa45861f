//! 2D paths and point-marker outlines.

use std::f32::consts::{FRAC_1_SQRT_2, FRAC_PI_4, TAU};

use crate::point_style::PointStyle;
use crate::types::{Point, Rect};

/// Commands that make up a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Move to a point without drawing.
    MoveTo(Point),
    /// Draw a line to a point.
    LineTo(Point),
    /// Draw a quadratic bezier curve.
    QuadTo { control: Point, end: Point },
    /// Draw a circular arc, angles in radians measured clockwise from +x.
    Arc {
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
    },
    /// Close the current subpath.
    Close,
}

/// A 2D path for complex shapes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Create a new empty path.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Move to a point without drawing.
    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(p));
        self
    }

    /// Draw a line to a point.
    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(PathCommand::LineTo(p));
        self
    }

    /// Draw a quadratic bezier curve.
    pub fn quad_to(&mut self, control: Point, end: Point) -> &mut Self {
        self.commands.push(PathCommand::QuadTo { control, end });
        self
    }

    /// Draw a circular arc around `center`.
    pub fn arc(&mut self, center: Point, radius: f32, start_angle: f32, end_angle: f32) -> &mut Self {
        self.commands.push(PathCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        });
        self
    }

    /// Close the current subpath.
    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Append a full circle as its own subpath.
    ///
    /// Starting a new subpath keeps consecutive circles from being joined
    /// by a connecting segment.
    pub fn add_circle(&mut self, center: Point, radius: f32) -> &mut Self {
        self.move_to(Point::new(center.x + radius, center.y))
            .arc(center, radius, 0.0, TAU)
            .close()
    }

    /// Append a straight segment as its own subpath.
    pub fn add_segment(&mut self, from: Point, to: Point) -> &mut Self {
        self.move_to(from).line_to(to)
    }

    /// Get the path commands.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Check if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of subpaths (each starts with a `MoveTo`).
    pub fn subpath_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, PathCommand::MoveTo(_)))
            .count()
    }

    /// Create a rectangle path.
    pub fn rect(rect: Rect) -> Self {
        let mut path = Self::new();
        path.move_to(Point::new(rect.left(), rect.top()))
            .line_to(Point::new(rect.right(), rect.top()))
            .line_to(Point::new(rect.right(), rect.bottom()))
            .line_to(Point::new(rect.left(), rect.bottom()))
            .close();
        path
    }

    /// Create a circle path.
    pub fn circle(center: Point, radius: f32) -> Self {
        let mut path = Self::new();
        path.add_circle(center, radius);
        path
    }

    /// Create a rounded rectangle path with a uniform corner radius.
    pub fn rounded_rect(rect: Rect, radius: f32) -> Self {
        let mut path = Self::new();
        let r = radius
            .min(rect.width().abs() / 2.0)
            .min(rect.height().abs() / 2.0)
            .max(0.0);

        // Start at top-left corner, after the rounded part
        path.move_to(Point::new(rect.left() + r, rect.top()));

        path.line_to(Point::new(rect.right() - r, rect.top()));
        if r > 0.0 {
            path.quad_to(
                Point::new(rect.right(), rect.top()),
                Point::new(rect.right(), rect.top() + r),
            );
        }

        path.line_to(Point::new(rect.right(), rect.bottom() - r));
        if r > 0.0 {
            path.quad_to(
                Point::new(rect.right(), rect.bottom()),
                Point::new(rect.right() - r, rect.bottom()),
            );
        }

        path.line_to(Point::new(rect.left() + r, rect.bottom()));
        if r > 0.0 {
            path.quad_to(
                Point::new(rect.left(), rect.bottom()),
                Point::new(rect.left(), rect.bottom() - r),
            );
        }

        path.line_to(Point::new(rect.left(), rect.top() + r));
        if r > 0.0 {
            path.quad_to(
                Point::new(rect.left(), rect.top()),
                Point::new(rect.left() + r, rect.top()),
            );
        }

        path.close();
        path
    }

    /// Create the outline of a point marker of the given style and radius.
    ///
    /// Returns an empty path for non-positive or non-finite radii.
    pub fn point_marker(style: PointStyle, radius: f32, center: Point) -> Self {
        if !(radius > 0.0 && radius.is_finite()) {
            return Self::new();
        }

        let Point { x, y } = center;
        match style {
            PointStyle::Circle => Self::circle(center, radius),
            PointStyle::Triangle => {
                let edge = 3.0 * radius / 3.0_f32.sqrt();
                let height = edge * 3.0_f32.sqrt() / 2.0;
                let mut path = Self::new();
                path.move_to(Point::new(x - edge / 2.0, y + height / 3.0))
                    .line_to(Point::new(x + edge / 2.0, y + height / 3.0))
                    .line_to(Point::new(x, y - 2.0 * height / 3.0))
                    .close();
                path
            }
            PointStyle::Rect => {
                let size = FRAC_1_SQRT_2 * radius;
                Self::rect(Rect::new(x - size, y - size, 2.0 * size, 2.0 * size))
            }
            PointStyle::RectRounded => {
                let offset = FRAC_1_SQRT_2 * radius;
                Self::rounded_rect(
                    Rect::new(x - offset, y - offset, 2.0 * offset, 2.0 * offset),
                    radius / 2.0,
                )
            }
            PointStyle::RectRot => {
                let mut path = Self::new();
                path.move_to(Point::new(x - radius, y))
                    .line_to(Point::new(x, y + radius))
                    .line_to(Point::new(x + radius, y))
                    .line_to(Point::new(x, y - radius))
                    .close();
                path
            }
            PointStyle::Cross => {
                let mut path = Self::new();
                add_cross(&mut path, center, radius);
                path
            }
            PointStyle::CrossRot => {
                let mut path = Self::new();
                add_cross_rot(&mut path, center, radius);
                path
            }
            PointStyle::Star => {
                let mut path = Self::new();
                add_cross(&mut path, center, radius);
                add_cross_rot(&mut path, center, radius);
                path
            }
            PointStyle::Line => {
                let mut path = Self::new();
                path.add_segment(Point::new(x - radius, y), Point::new(x + radius, y));
                path
            }
            PointStyle::Dash => {
                let mut path = Self::new();
                path.add_segment(center, Point::new(x + radius, y));
                path
            }
        }
    }
}

fn add_cross(path: &mut Path, c: Point, radius: f32) {
    path.add_segment(Point::new(c.x, c.y + radius), Point::new(c.x, c.y - radius))
        .add_segment(Point::new(c.x - radius, c.y), Point::new(c.x + radius, c.y));
}

fn add_cross_rot(path: &mut Path, c: Point, radius: f32) {
    let offset = FRAC_PI_4.cos() * radius;
    path.add_segment(
        Point::new(c.x - offset, c.y - offset),
        Point::new(c.x + offset, c.y + offset),
    )
    .add_segment(
        Point::new(c.x - offset, c.y + offset),
        Point::new(c.x + offset, c.y - offset),
    );
}
