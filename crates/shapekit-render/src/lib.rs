//! shapekit render library
//!
//! Plans the draw commands for a frame and hands them to an injected surface.

pub mod command;
mod planner;
mod sink;

pub use command::DrawCommand;
pub use planner::{RenderContext, RenderPlanner};
pub use sink::{DrawSink, SvgSink};
