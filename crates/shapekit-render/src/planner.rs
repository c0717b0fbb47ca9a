//! Frame planning: shapes and interaction state in, ordered draw commands out.

use crate::command::DrawCommand;
use crate::sink::DrawSink;
use kurbo::Stroke;
use shapekit_core::annotation::annotate;
use shapekit_core::canvas::Canvas;
use shapekit_core::selection::get_handles;
use shapekit_core::shapes::Shape;

/// Everything needed to plan one frame.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    /// Shapes in collection order.
    pub shapes: &'a [Shape],
    /// Selected shape id, if any.
    pub selected: Option<&'a str>,
    /// Draw dimension labels next to each shape.
    pub show_annotations: bool,
    /// In-progress shape of a creation gesture.
    pub preview: Option<Shape>,
    /// Shape id to leave out, e.g. one the host just deleted.
    pub hidden: Option<&'a str>,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(shapes: &'a [Shape]) -> Self {
        Self {
            shapes,
            selected: None,
            show_annotations: false,
            preview: None,
            hidden: None,
        }
    }

    /// Build the context for the current state of a canvas.
    pub fn from_canvas(canvas: &'a Canvas) -> Self {
        Self::new(canvas.shapes())
            .with_selection(canvas.selected_id())
            .with_annotations(canvas.show_annotations())
            .with_preview(canvas.preview_shape())
    }

    pub fn with_selection(mut self, selected: Option<&'a str>) -> Self {
        self.selected = selected;
        self
    }

    pub fn with_annotations(mut self, show: bool) -> Self {
        self.show_annotations = show;
        self
    }

    pub fn with_preview(mut self, preview: Option<Shape>) -> Self {
        self.preview = preview;
        self
    }

    pub fn with_hidden_shape(mut self, hidden: Option<&'a str>) -> Self {
        self.hidden = hidden;
        self
    }

    fn is_hidden(&self, shape: &Shape) -> bool {
        self.hidden == Some(shape.id())
    }
}

/// Turns a [`RenderContext`] into draw commands.
///
/// Frame order is fixed: clear, then every visible shape body followed by its
/// labels, then the selected shape's handles, then the dashed preview.
#[derive(Debug, Clone)]
pub struct RenderPlanner {
    pub stroke_width: f64,
    /// Stroke width of the selected shape.
    pub selected_stroke_width: f64,
    pub selection_color: String,
    pub annotation_color: String,
    /// Edge length of a handle marker.
    pub handle_size: f64,
    /// Dash and gap length of the preview outline.
    pub preview_dash: f64,
}

impl Default for RenderPlanner {
    fn default() -> Self {
        Self {
            stroke_width: 2.0,
            selected_stroke_width: 3.0,
            selection_color: "#3b82f6".to_string(),
            annotation_color: "#555555".to_string(),
            handle_size: 8.0,
            preview_dash: 5.0,
        }
    }
}

impl RenderPlanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plan a full frame.
    pub fn plan(&self, ctx: &RenderContext<'_>) -> Vec<DrawCommand> {
        let mut commands = vec![DrawCommand::Clear];

        for shape in ctx.shapes.iter().filter(|s| !ctx.is_hidden(s)) {
            let selected = ctx.selected == Some(shape.id());
            commands.push(self.body(shape, selected, false));
            if ctx.show_annotations {
                self.push_annotations(shape, &mut commands);
            }
        }

        // Handles go on top of every body.
        if let Some(shape) = ctx
            .selected
            .and_then(|id| ctx.shapes.iter().find(|s| s.id() == id))
            .filter(|s| !ctx.is_hidden(s))
        {
            for handle in get_handles(shape) {
                commands.push(DrawCommand::Handle {
                    position: handle.position,
                    kind: handle.kind,
                    size: self.handle_size,
                    color: self.selection_color.clone(),
                });
            }
        }

        if let Some(preview) = &ctx.preview {
            commands.push(self.body(preview, false, true));
        }

        log::trace!("Planned {} draw commands", commands.len());
        commands
    }

    /// Plan a frame and hand each command to `sink`.
    pub fn render(&self, ctx: &RenderContext<'_>, sink: &mut impl DrawSink) {
        for command in self.plan(ctx) {
            sink.draw(command);
        }
    }

    fn body(&self, shape: &Shape, selected: bool, preview: bool) -> DrawCommand {
        let style = shape.style();
        let (color, stroke) = if selected {
            (self.selection_color.clone(), Stroke::new(self.selected_stroke_width))
        } else if preview {
            let dash = self.preview_dash;
            (style.color.clone(), Stroke::new(self.stroke_width).with_dashes(0.0, [dash, dash]))
        } else {
            (style.color.clone(), Stroke::new(self.stroke_width))
        };

        match shape {
            Shape::Line(line) => DrawCommand::Line {
                line: line.as_kurbo(),
                color,
                stroke,
            },
            Shape::Rectangle(rect) => DrawCommand::Rect {
                rect: rect.as_rect(),
                color,
                fill: style.fill_color.clone(),
                stroke,
            },
            Shape::Circle(circle) => DrawCommand::Circle {
                circle: circle.as_kurbo(),
                color,
                fill: style.fill_color.clone(),
                stroke,
            },
        }
    }

    fn push_annotations(&self, shape: &Shape, commands: &mut Vec<DrawCommand>) {
        commands.extend(annotate(shape).into_iter().map(|annotation| DrawCommand::Text {
            text: annotation.text(),
            position: annotation.anchor,
            color: self.annotation_color.clone(),
        }));
    }
}
