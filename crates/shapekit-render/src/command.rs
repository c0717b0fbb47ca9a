//! Draw primitives emitted by the planner.

use kurbo::{Circle, Line, Point, Rect, Stroke};
use shapekit_core::selection::HandleKind;

/// One drawing instruction for a canvas surface.
///
/// Colours are host colour strings passed through untouched.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    /// Clear the whole surface.
    Clear,
    Line {
        line: Line,
        color: String,
        stroke: Stroke,
    },
    Rect {
        rect: Rect,
        color: String,
        fill: Option<String>,
        stroke: Stroke,
    },
    Circle {
        circle: Circle,
        color: String,
        fill: Option<String>,
        stroke: Stroke,
    },
    /// Text centered on `position`.
    Text {
        text: String,
        position: Point,
        color: String,
    },
    /// A resize handle centered on `position`.
    Handle {
        position: Point,
        kind: HandleKind,
        size: f64,
        color: String,
    },
}

impl DrawCommand {
    /// Short tag, handy for logging and tests.
    pub fn name(&self) -> &'static str {
        match self {
            DrawCommand::Clear => "clear",
            DrawCommand::Line { .. } => "line",
            DrawCommand::Rect { .. } => "rect",
            DrawCommand::Circle { .. } => "circle",
            DrawCommand::Text { .. } => "text",
            DrawCommand::Handle { .. } => "handle",
        }
    }

    /// The stroke, for commands that have one.
    pub fn stroke(&self) -> Option<&Stroke> {
        match self {
            DrawCommand::Line { stroke, .. }
            | DrawCommand::Rect { stroke, .. }
            | DrawCommand::Circle { stroke, .. } => Some(stroke),
            _ => None,
        }
    }

    /// Whether this command is stroked with a dash pattern.
    pub fn is_dashed(&self) -> bool {
        self.stroke().is_some_and(|s| !s.dash_pattern.is_empty())
    }
}
