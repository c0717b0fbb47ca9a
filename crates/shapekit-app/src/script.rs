//! Gesture scripts: recorded host input replayed through a canvas.

use crate::error::{AppError, AppResult};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use shapekit_core::canvas::Canvas;
use shapekit_core::input::PointerEvent;
use shapekit_core::shapes::{Shape, ShapeStyle};
use shapekit_core::tools::ToolKind;
use std::fs;
use std::path::Path;

/// One host action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScriptStep {
    SetTool { tool: ToolKind },
    SetColors {
        color: String,
        #[serde(default = "no_fill")]
        fill_color: String,
    },
    ToggleAnnotations,
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up { x: f64, y: f64 },
    Leave,
    Delete { id: String },
}

fn no_fill() -> String {
    "none".to_string()
}

/// A starting collection plus the steps to run against it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub shapes: Vec<Shape>,
    pub steps: Vec<ScriptStep>,
}

impl Script {
    pub fn load(path: &Path) -> AppResult<Self> {
        let json = fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
        serde_json::from_str(&json).map_err(|e| AppError::json(path, e))
    }

    /// Run every step against `canvas`, returning how many mutations were applied.
    pub fn replay(&self, canvas: &mut Canvas) -> usize {
        if !self.shapes.is_empty() {
            canvas.load_shapes(self.shapes.clone());
        }

        let mut mutations = 0;
        for step in &self.steps {
            let event = match step {
                ScriptStep::SetTool { tool } => {
                    canvas.set_tool(*tool);
                    continue;
                }
                ScriptStep::SetColors { color, fill_color } => {
                    canvas.set_style(ShapeStyle::from_host(color, fill_color));
                    continue;
                }
                ScriptStep::ToggleAnnotations => {
                    canvas.set_show_annotations(!canvas.show_annotations());
                    continue;
                }
                ScriptStep::Delete { id } => {
                    match canvas.delete_shape(id) {
                        Some(_) => mutations += 1,
                        None => log::warn!("Script deletes unknown shape {}", id),
                    }
                    continue;
                }
                ScriptStep::Down { x, y } => PointerEvent::Down(Point::new(*x, *y)),
                ScriptStep::Move { x, y } => PointerEvent::Move(Point::new(*x, *y)),
                ScriptStep::Up { x, y } => PointerEvent::Up(Point::new(*x, *y)),
                ScriptStep::Leave => PointerEvent::Leave,
            };
            if canvas.handle_pointer(event).event().is_some() {
                mutations += 1;
            }
        }
        mutations
    }
}
