//! Reference host: owns the shape collection and applies controller events.

use crate::config::EngineConfig;
use crate::input::PointerEvent;
use crate::interaction::{InteractionContext, InteractionController, InteractionState, Outcome, ShapeEvent};
use crate::shapes::{Shape, ShapeId, ShapeStyle};
use crate::tools::ToolKind;

/// Runtime canvas state.
#[derive(Debug)]
pub struct Canvas {
    /// Shapes in collection order (also hit-test and draw order).
    shapes: Vec<Shape>,
    selected: Option<ShapeId>,
    tool: ToolKind,
    /// Style applied to new shapes.
    style: ShapeStyle,
    show_annotations: bool,
    controller: InteractionController,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Canvas {
    /// Create an empty canvas.
    pub fn new(config: EngineConfig) -> Self {
        Self::with_controller(InteractionController::new(config))
    }

    /// Create an empty canvas driven by a preconfigured controller.
    pub fn with_controller(controller: InteractionController) -> Self {
        Self {
            shapes: Vec::new(),
            selected: None,
            tool: ToolKind::default(),
            style: ShapeStyle::default(),
            show_annotations: false,
            controller,
        }
    }

    /// Replace the shape collection, e.g. after loading a saved drawing.
    pub fn load_shapes(&mut self, shapes: Vec<Shape>) {
        self.controller.reset();
        self.selected = None;
        self.shapes = shapes;
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_shape(&self) -> Option<&Shape> {
        let id = self.selected.as_deref()?;
        self.shapes.iter().find(|s| s.id() == id)
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    /// Set the current tool, abandoning any gesture in progress.
    pub fn set_tool(&mut self, tool: ToolKind) {
        if self.tool != tool {
            log::debug!("Tool {} -> {}", self.tool, tool);
        }
        self.tool = tool;
        self.controller.reset();
    }

    pub fn style(&self) -> &ShapeStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: ShapeStyle) {
        self.style = style;
    }

    pub fn show_annotations(&self) -> bool {
        self.show_annotations
    }

    pub fn set_show_annotations(&mut self, show: bool) {
        self.show_annotations = show;
    }

    pub fn interaction_state(&self) -> &InteractionState {
        self.controller.state()
    }

    /// Feed a pointer event through the controller and apply what it emits.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Outcome {
        let ctx = InteractionContext::new(self.tool, &self.shapes, self.selected.as_deref(), &self.style);
        let outcome = self.controller.handle(event, &ctx);
        if let Outcome::Emitted(shape_event) = &outcome {
            self.apply(shape_event.clone());
        }
        outcome
    }

    /// Apply a controller event to the collection.
    pub fn apply(&mut self, event: ShapeEvent) {
        match event {
            ShapeEvent::Added(shape) => self.shapes.push(shape),
            ShapeEvent::Selected(shape) => self.selected = shape.map(|s| s.id().to_string()),
            ShapeEvent::Updated(shape) => match self.shapes.iter_mut().find(|s| s.id() == shape.id()) {
                Some(slot) => *slot = shape,
                None => log::warn!("Ignoring update for unknown shape {}", shape.id()),
            },
        }
    }

    /// Remove a shape, clearing the selection if it pointed at it.
    pub fn delete_shape(&mut self, id: &str) -> Option<Shape> {
        let index = self.shapes.iter().position(|s| s.id() == id)?;
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        Some(self.shapes.remove(index))
    }

    /// The in-progress shape of a creation gesture, if any.
    pub fn preview_shape(&self) -> Option<Shape> {
        let ctx = InteractionContext::new(self.tool, &self.shapes, self.selected.as_deref(), &self.style);
        self.controller.preview_shape(&ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Point, Rect};

    fn canvas() -> Canvas {
        let mut n = 0;
        Canvas::with_controller(InteractionController::default().with_id_generator(move || {
            n += 1;
            format!("s{n}")
        }))
    }

    fn draw(canvas: &mut Canvas, tool: ToolKind, from: Point, to: Point) {
        canvas.set_tool(tool);
        canvas.handle_pointer(PointerEvent::Down(from));
        canvas.handle_pointer(PointerEvent::Move(to));
        canvas.handle_pointer(PointerEvent::Up(to));
    }

    #[test]
    fn test_draw_select_move() {
        let mut canvas = canvas();
        draw(&mut canvas, ToolKind::Rectangle, Point::new(10.0, 10.0), Point::new(60.0, 40.0));
        assert_eq!(canvas.shapes().len(), 1);
        assert!(canvas.selected_id().is_none());

        canvas.set_tool(ToolKind::Select);
        canvas.handle_pointer(PointerEvent::Down(Point::new(20.0, 20.0)));
        assert_eq!(canvas.selected_id(), Some("s1"));

        canvas.handle_pointer(PointerEvent::Move(Point::new(30.0, 25.0)));
        canvas.handle_pointer(PointerEvent::Up(Point::new(30.0, 25.0)));
        assert_eq!(canvas.shapes()[0].bounds(), Rect::new(20.0, 15.0, 70.0, 45.0));
    }

    #[test]
    fn test_resize_selected_through_handle() {
        let mut canvas = canvas();
        draw(&mut canvas, ToolKind::Circle, Point::new(0.0, 0.0), Point::new(100.0, 100.0));

        canvas.set_tool(ToolKind::Select);
        canvas.handle_pointer(PointerEvent::Down(Point::new(50.0, 50.0)));
        canvas.handle_pointer(PointerEvent::Up(Point::new(50.0, 50.0)));

        canvas.handle_pointer(PointerEvent::Down(Point::new(100.0, 100.0)));
        canvas.handle_pointer(PointerEvent::Move(Point::new(60.0, 80.0)));
        canvas.handle_pointer(PointerEvent::Leave);

        assert_eq!(canvas.selected_shape().map(Shape::bounds), Some(Rect::new(0.0, 0.0, 60.0, 80.0)));
    }

    #[test]
    fn test_set_tool_resets_gesture() {
        let mut canvas = canvas();
        canvas.set_tool(ToolKind::Line);
        canvas.handle_pointer(PointerEvent::Down(Point::new(0.0, 0.0)));
        assert!(canvas.preview_shape().is_some());

        canvas.set_tool(ToolKind::Select);
        assert!(canvas.interaction_state().is_idle());
        assert!(canvas.preview_shape().is_none());
        canvas.handle_pointer(PointerEvent::Up(Point::new(80.0, 80.0)));
        assert!(canvas.shapes().is_empty());
    }

    #[test]
    fn test_delete_clears_selection() {
        let mut canvas = canvas();
        draw(&mut canvas, ToolKind::Rectangle, Point::new(0.0, 0.0), Point::new(40.0, 40.0));
        draw(&mut canvas, ToolKind::Rectangle, Point::new(100.0, 0.0), Point::new(140.0, 40.0));

        canvas.set_tool(ToolKind::Select);
        canvas.handle_pointer(PointerEvent::Down(Point::new(10.0, 10.0)));
        canvas.handle_pointer(PointerEvent::Up(Point::new(10.0, 10.0)));

        assert!(canvas.delete_shape("s2").is_some());
        assert_eq!(canvas.selected_id(), Some("s1"));

        assert!(canvas.delete_shape("s1").is_some());
        assert!(canvas.selected_id().is_none());
        assert!(canvas.delete_shape("s1").is_none());
    }

    #[test]
    fn test_new_shapes_take_current_style() {
        let mut canvas = canvas();
        let style = ShapeStyle::from_host("#ff0000", "#00ff00");
        canvas.set_style(style.clone());
        draw(&mut canvas, ToolKind::Line, Point::new(0.0, 0.0), Point::new(50.0, 0.0));

        assert_eq!(canvas.shapes()[0].style(), &style);
    }

    #[test]
    fn test_unknown_update_is_ignored() {
        let mut canvas = canvas();
        let stray = Shape::Rectangle(crate::shapes::Rectangle::new("ghost", Point::ZERO, 10.0, 10.0));
        canvas.apply(ShapeEvent::Updated(stray));
        assert!(canvas.shapes().is_empty());
    }
}
