//! Pointer input events.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Pointer event in canvas-local coordinates.
///
/// Hosts deliver these one at a time, in order: `Down`, any number of
/// `Move`, then `Up` or `Leave`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up(Point),
    /// Pointer left the surface. Ends the gesture like `Up`.
    Leave,
}

impl PointerEvent {
    /// The event position, if it carries one.
    pub fn position(&self) -> Option<Point> {
        match self {
            PointerEvent::Down(p) | PointerEvent::Move(p) | PointerEvent::Up(p) => Some(*p),
            PointerEvent::Leave => None,
        }
    }
}
