//! shapekit core library
//!
//! Shape model, hit-testing and the pointer interaction state machine for a
//! 2D shape editor, plus the host-side glue and storage used around them.

pub mod annotation;
pub mod canvas;
pub mod config;
pub mod geometry;
pub mod input;
pub mod interaction;
pub mod selection;
pub mod shapes;
pub mod storage;
pub mod tools;

pub use annotation::{Annotation, AnnotationKind, annotate};
pub use canvas::Canvas;
pub use config::EngineConfig;
pub use input::PointerEvent;
pub use interaction::{InteractionContext, InteractionController, InteractionState, Outcome, ShapeEvent};
pub use selection::{Handle, HandleKind};
pub use shapes::{Shape, ShapeId, ShapeStyle};
pub use storage::{DrawingRecord, FileStorage, MemoryStorage, Storage, StorageError, StorageResult};
pub use tools::ToolKind;
