//! Tool system: which shape a drawing gesture produces.

use crate::shapes::{Circle, Line, Rectangle, Shape, ShapeId, ShapeStyle};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Shapes whose box is smaller than this on both axes are not created.
pub const MIN_CREATE_SIZE: f64 = 5.0;

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    #[default]
    Select,
    Line,
    Rectangle,
    Circle,
}

impl ToolKind {
    /// Whether a gesture with this tool draws a new shape.
    pub fn creates_shapes(self) -> bool {
        !matches!(self, ToolKind::Select)
    }

    /// Host-facing name of the tool.
    pub fn as_str(self) -> &'static str {
        match self {
            ToolKind::Select => "select",
            ToolKind::Line => "line",
            ToolKind::Rectangle => "rectangle",
            ToolKind::Circle => "circle",
        }
    }
}

impl std::fmt::Display for ToolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ToolKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "select" => Ok(ToolKind::Select),
            "line" => Ok(ToolKind::Line),
            "rectangle" => Ok(ToolKind::Rectangle),
            "circle" => Ok(ToolKind::Circle),
            other => Err(format!("unknown tool: {other}")),
        }
    }
}

/// Create a shape from the start and end points of a drawing gesture.
///
/// Rectangles and circles take the min corner and absolute extent of the two
/// points; lines keep their endpoints as drawn. Returns `None` for tools that
/// don't draw.
pub fn create_shape(
    tool: ToolKind,
    id: impl Into<ShapeId>,
    start: Point,
    end: Point,
    style: &ShapeStyle,
) -> Option<Shape> {
    let shape = match tool {
        ToolKind::Line => Shape::Line(Line::new(id, start, end).with_style(style.clone())),
        ToolKind::Rectangle => {
            Shape::Rectangle(Rectangle::from_corners(id, start, end).with_style(style.clone()))
        }
        ToolKind::Circle => Shape::Circle(Circle::from_corners(id, start, end).with_style(style.clone())),
        ToolKind::Select => return None,
    };
    Some(shape)
}

/// Whether a freshly drawn shape falls under the creation discard rule.
pub fn is_too_small(shape: &Shape, threshold: f64) -> bool {
    let bounds = shape.bounds();
    bounds.width() < threshold && bounds.height() < threshold
}
