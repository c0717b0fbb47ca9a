//! Gesture state machine: turns pointer events into shape mutations.
//!
//! The controller never owns the shape collection. Each call borrows the
//! host's current shapes and selection through [`InteractionContext`] and
//! returns at most one [`ShapeEvent`] for the host to apply. Hosts must call
//! [`InteractionController::reset`] when the active tool changes mid-gesture.

use crate::config::EngineConfig;
use crate::input::PointerEvent;
use crate::selection::{HandleKind, apply_resize, find_handle_at, find_shape_at};
use crate::shapes::{Shape, ShapeId, ShapeStyle, new_shape_id};
use crate::tools::{ToolKind, create_shape, is_too_small};
use kurbo::{Point, Vec2};

/// Id carried by the in-progress preview shape. Never emitted.
pub const PREVIEW_SHAPE_ID: &str = "preview";

/// Current gesture mode.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    /// A drawing tool is dragging out a new shape.
    DrawingShape { start: Point, end: Point },
    /// A selected shape follows the pointer.
    DraggingShape {
        shape_id: ShapeId,
        /// Pointer position minus the shape origin at pointer-down.
        offset: Vec2,
    },
    /// A handle of the selected shape follows the pointer.
    ResizingShape {
        shape_id: ShapeId,
        handle: HandleKind,
        anchor: Point,
    },
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, InteractionState::Idle)
    }
}

/// Host state the controller reads for one event.
#[derive(Debug, Clone, Copy)]
pub struct InteractionContext<'a> {
    pub tool: ToolKind,
    pub shapes: &'a [Shape],
    pub selected: Option<&'a str>,
    /// Style applied to newly drawn shapes.
    pub style: &'a ShapeStyle,
}

impl<'a> InteractionContext<'a> {
    pub fn new(tool: ToolKind, shapes: &'a [Shape], selected: Option<&'a str>, style: &'a ShapeStyle) -> Self {
        Self {
            tool,
            shapes,
            selected,
            style,
        }
    }

    fn shape(&self, id: &str) -> Option<&'a Shape> {
        self.shapes.iter().find(|shape| shape.id() == id)
    }
}

/// Mutation proposed to the host.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeEvent {
    /// Append this shape to the collection.
    Added(Shape),
    /// Make this shape (or nothing) the selection.
    Selected(Option<Shape>),
    /// Replace the shape with the same id.
    Updated(Shape),
}

/// Result of handling one pointer event.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Nothing changed.
    Unchanged,
    /// No mutation, but the in-progress preview changed and the frame should be redrawn.
    Preview,
    /// The host should apply this event and redraw.
    Emitted(ShapeEvent),
}

impl Outcome {
    pub fn event(&self) -> Option<&ShapeEvent> {
        match self {
            Outcome::Emitted(event) => Some(event),
            _ => None,
        }
    }
}

type IdGenerator = Box<dyn FnMut() -> ShapeId + Send>;

/// Pointer gesture state machine.
pub struct InteractionController {
    config: EngineConfig,
    state: InteractionState,
    id_generator: IdGenerator,
}

impl std::fmt::Debug for InteractionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InteractionController")
            .field("config", &self.config)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl InteractionController {
    /// Create an idle controller that ids new shapes with UUIDs.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            state: InteractionState::Idle,
            id_generator: Box::new(new_shape_id),
        }
    }

    /// Replace the id generator used for created shapes.
    pub fn with_id_generator(mut self, generator: impl FnMut() -> ShapeId + Send + 'static) -> Self {
        self.id_generator = Box::new(generator);
        self
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Abandon any gesture in progress without emitting anything.
    pub fn reset(&mut self) {
        self.transition(InteractionState::Idle);
    }

    /// The shape a creation gesture would produce right now, for previews.
    pub fn preview_shape(&self, ctx: &InteractionContext<'_>) -> Option<Shape> {
        match self.state {
            InteractionState::DrawingShape { start, end } => {
                create_shape(ctx.tool, PREVIEW_SHAPE_ID, start, end, ctx.style)
            }
            _ => None,
        }
    }

    /// Process one pointer event.
    pub fn handle(&mut self, event: PointerEvent, ctx: &InteractionContext<'_>) -> Outcome {
        match event {
            PointerEvent::Down(point) => self.pointer_down(point, ctx),
            PointerEvent::Move(point) => self.pointer_move(point, ctx),
            PointerEvent::Up(_) | PointerEvent::Leave => self.pointer_up(event.position(), ctx),
        }
    }

    fn pointer_down(&mut self, point: Point, ctx: &InteractionContext<'_>) -> Outcome {
        if !self.state.is_idle() {
            log::debug!("Pointer down during {:?}, starting a new gesture", self.state);
            self.transition(InteractionState::Idle);
        }

        if ctx.tool.creates_shapes() {
            self.transition(InteractionState::DrawingShape { start: point, end: point });
            return Outcome::Preview;
        }

        // Handles of the current selection win over any shape body.
        if let Some(selected) = ctx.selected.and_then(|id| ctx.shape(id)) {
            if let Some(handle) = find_handle_at(point, selected, self.config.handle_tolerance) {
                self.transition(InteractionState::ResizingShape {
                    shape_id: selected.id().to_string(),
                    handle,
                    anchor: point,
                });
                return Outcome::Unchanged;
            }
        }

        match find_shape_at(point, ctx.shapes, self.config.line_hit_tolerance) {
            Some(shape) => {
                self.transition(InteractionState::DraggingShape {
                    shape_id: shape.id().to_string(),
                    offset: point - shape.origin(),
                });
                Outcome::Emitted(ShapeEvent::Selected(Some(shape.clone())))
            }
            None => Outcome::Emitted(ShapeEvent::Selected(None)),
        }
    }

    fn pointer_move(&mut self, point: Point, ctx: &InteractionContext<'_>) -> Outcome {
        let min_dim = self.config.min_dim;
        let updated = match &mut self.state {
            InteractionState::Idle => return Outcome::Unchanged,
            InteractionState::DrawingShape { end, .. } => {
                *end = point;
                return Outcome::Preview;
            }
            InteractionState::DraggingShape { shape_id, offset } => ctx.shape(shape_id).map(|shape| {
                let origin = Point::new(point.x - offset.x, point.y - offset.y);
                shape.moved_to(origin)
            }),
            InteractionState::ResizingShape { shape_id, handle, .. } => ctx
                .shape(shape_id)
                .map(|shape| apply_resize(shape, *handle, point, min_dim)),
        };

        match updated {
            Some(shape) => Outcome::Emitted(ShapeEvent::Updated(shape)),
            None => self.drop_gesture(),
        }
    }

    fn pointer_up(&mut self, point: Option<Point>, ctx: &InteractionContext<'_>) -> Outcome {
        let InteractionState::DrawingShape { start, end } = self.state else {
            self.transition(InteractionState::Idle);
            return Outcome::Unchanged;
        };
        self.transition(InteractionState::Idle);

        let end = point.unwrap_or(end);
        let id = (self.id_generator)();
        match create_shape(ctx.tool, id, start, end, ctx.style) {
            Some(shape) if !is_too_small(&shape, self.config.min_create_size) => {
                log::debug!("Created {} {}", ctx.tool, shape.id());
                Outcome::Emitted(ShapeEvent::Added(shape))
            }
            _ => {
                log::debug!("Discarded {} gesture from {:?} to {:?}", ctx.tool, start, end);
                // The preview still needs clearing.
                Outcome::Preview
            }
        }
    }

    /// The target shape vanished from the collection mid-gesture.
    fn drop_gesture(&mut self) -> Outcome {
        log::debug!("Gesture target missing, dropping {:?}", self.state);
        self.transition(InteractionState::Idle);
        Outcome::Unchanged
    }

    fn transition(&mut self, next: InteractionState) {
        if self.state != next {
            log::debug!("Interaction {:?} -> {:?}", self.state, next);
        }
        self.state = next;
    }
}
