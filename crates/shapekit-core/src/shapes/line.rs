//! Line shape.

use super::{ShapeId, ShapeStyle, ShapeTrait, box_between};
use kurbo::{Line as KurboLine, Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// A straight line segment.
///
/// The bounding box fields are derived from the endpoints and must be
/// recomputed (via [`Line::normalize`]) whenever an endpoint changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub(crate) id: ShapeId,
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
    /// Top-left corner of the bounding box.
    pub position: Point,
    /// Bounding box width.
    pub width: f64,
    /// Bounding box height.
    pub height: f64,
    /// Style properties.
    #[serde(flatten)]
    pub style: ShapeStyle,
}

impl Line {
    /// Create a new line with a normalized bounding box.
    pub fn new(id: impl Into<ShapeId>, start: Point, end: Point) -> Self {
        let mut line = Self {
            id: id.into(),
            start,
            end,
            position: Point::ZERO,
            width: 0.0,
            height: 0.0,
            style: ShapeStyle::default(),
        };
        line.normalize();
        line
    }

    /// Builder-style style setter.
    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = style;
        self
    }

    /// Recompute the bounding box from the endpoints.
    pub fn normalize(&mut self) {
        let (position, width, height) = box_between(self.start, self.end);
        self.position = position;
        self.width = width;
        self.height = height;
    }

    /// Move one endpoint and re-derive the bounding box.
    pub fn set_start(&mut self, start: Point) {
        self.start = start;
        self.normalize();
    }

    /// Move one endpoint and re-derive the bounding box.
    pub fn set_end(&mut self, end: Point) {
        self.end = end;
        self.normalize();
    }

    /// Get the length of the line.
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Get the midpoint of the line.
    pub fn midpoint(&self) -> Point {
        self.start.midpoint(self.end)
    }

    /// Get as a kurbo Line.
    pub fn as_kurbo(&self) -> KurboLine {
        KurboLine::new(self.start, self.end)
    }
}

impl ShapeTrait for Line {
    fn id(&self) -> &str {
        &self.id
    }

    fn bounds(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.width,
            self.position.y + self.height,
        )
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn translate(&mut self, delta: Vec2) {
        self.start += delta;
        self.end += delta;
        self.normalize();
    }
}
