//! Shape definitions and normalization rules.

mod circle;
mod line;
mod rectangle;

pub use circle::Circle;
pub use line::Line;
pub use rectangle::Rectangle;

use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimum width and height a shape keeps after a resize.
pub const MIN_DIM: f64 = 10.0;

/// Unique identifier for shapes. Opaque to the engine.
pub type ShapeId = String;

/// Generate a fresh shape identifier.
pub fn new_shape_id() -> ShapeId {
    Uuid::new_v4().to_string()
}

/// Colour properties for shapes.
///
/// Colours are kept as the host's colour strings; the engine never parses them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeStyle {
    /// Stroke color.
    pub color: String,
    /// Fill color (None = no fill, persisted as `"none"`).
    #[serde(with = "fill_color", default)]
    pub fill_color: Option<String>,
}

impl ShapeStyle {
    pub fn new(color: impl Into<String>, fill_color: Option<String>) -> Self {
        Self {
            color: color.into(),
            fill_color,
        }
    }

    /// Build a style from host strings, treating `"none"` as no fill.
    pub fn from_host(color: &str, fill_color: &str) -> Self {
        Self::new(color, fill_color::parse(fill_color))
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            color: "#000000".to_string(),
            fill_color: None,
        }
    }
}

mod fill_color {
    use serde::{Deserialize, Deserializer, Serializer};

    pub const NONE: &str = "none";

    pub fn parse(value: &str) -> Option<String> {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(NONE) {
            None
        } else {
            Some(value.to_string())
        }
    }

    pub fn serialize<S: Serializer>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.as_deref().unwrap_or(NONE))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(parse(&value))
    }
}

/// Common trait for all shapes.
pub trait ShapeTrait {
    /// Get the unique identifier.
    fn id(&self) -> &str;

    /// Get the bounding box.
    fn bounds(&self) -> Rect;

    /// Get the style.
    fn style(&self) -> &ShapeStyle;

    /// Move the shape by `delta`, keeping every derived field in sync.
    fn translate(&mut self, delta: Vec2);
}

/// Enum wrapper for all shape types (for serialization and dispatch).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Line(Line),
    Rectangle(Rectangle),
    Circle(Circle),
}

impl Shape {
    pub fn id(&self) -> &str {
        match self {
            Shape::Line(s) => s.id(),
            Shape::Rectangle(s) => s.id(),
            Shape::Circle(s) => s.id(),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Line(s) => s.bounds(),
            Shape::Rectangle(s) => s.bounds(),
            Shape::Circle(s) => s.bounds(),
        }
    }

    /// Top-left corner of the bounding box.
    pub fn origin(&self) -> Point {
        self.bounds().origin()
    }

    pub fn style(&self) -> &ShapeStyle {
        match self {
            Shape::Line(s) => s.style(),
            Shape::Rectangle(s) => s.style(),
            Shape::Circle(s) => s.style(),
        }
    }

    pub fn translate(&mut self, delta: Vec2) {
        match self {
            Shape::Line(s) => s.translate(delta),
            Shape::Rectangle(s) => s.translate(delta),
            Shape::Circle(s) => s.translate(delta),
        }
    }

    /// Return a copy of this shape whose bounding box starts at `origin`.
    pub fn moved_to(&self, origin: Point) -> Shape {
        let mut shape = self.clone();
        shape.translate(origin - self.origin());
        shape
    }
}

/// Recompute a line's bounding box from its endpoints.
pub fn normalize_line(line: &Line) -> Line {
    let mut line = line.clone();
    line.normalize();
    line
}

/// Enforce the minimum-size invariant on a shape.
///
/// Lines are returned unchanged: their box is derived from the endpoints.
pub fn clamp_dimensions(shape: &Shape, min_dim: f64) -> Shape {
    match shape {
        Shape::Line(line) => Shape::Line(normalize_line(line)),
        Shape::Rectangle(rect) => {
            let mut rect = rect.clone();
            rect.width = rect.width.max(min_dim);
            rect.height = rect.height.max(min_dim);
            Shape::Rectangle(rect)
        }
        Shape::Circle(circle) => {
            let mut circle = circle.clone();
            circle.width = circle.width.max(min_dim);
            circle.height = circle.height.max(min_dim);
            Shape::Circle(circle)
        }
    }
}

/// Axis-aligned box spanned by two points.
pub(crate) fn box_between(p1: Point, p2: Point) -> (Point, f64, f64) {
    let rect = Rect::from_points(p1, p2);
    (rect.origin(), rect.width(), rect.height())
}
