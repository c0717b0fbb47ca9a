//! Circle shape.

use super::{ShapeId, ShapeStyle, ShapeTrait, box_between};
use kurbo::{Circle as KurboCircle, Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// A circle stored as its bounding box.
///
/// The rendered radius is half the larger box dimension, so a non-square box
/// still yields a circle (never an ellipse).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub(crate) id: ShapeId,
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

impl Circle {
    /// Create a new circle from its bounding box.
    pub fn new(id: impl Into<ShapeId>, position: Point, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            position,
            width,
            height,
            style: ShapeStyle::default(),
        }
    }

    /// Create a circle whose bounding box spans two corner points.
    pub fn from_corners(id: impl Into<ShapeId>, p1: Point, p2: Point) -> Self {
        let (position, width, height) = box_between(p1, p2);
        Self::new(id, position, width, height)
    }

    /// Builder-style style setter.
    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = style;
        self
    }

    /// Center of the bounding box.
    pub fn center(&self) -> Point {
        Point::new(
            self.position.x + self.width / 2.0,
            self.position.y + self.height / 2.0,
        )
    }

    /// Rendered radius.
    pub fn radius(&self) -> f64 {
        self.width.max(self.height) / 2.0
    }

    /// Get as a kurbo Circle.
    pub fn as_kurbo(&self) -> KurboCircle {
        KurboCircle::new(self.center(), self.radius())
    }
}

impl ShapeTrait for Circle {
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
        self.position += delta;
    }
}
