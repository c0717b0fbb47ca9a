//! shapekit application shell
//!
//! Replays gesture scripts through the engine, exports frames as SVG and
//! manages saved drawings.

mod cli;
mod config;
mod error;
mod script;

pub use cli::{Cli, Command, USAGE};
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use script::{Script, ScriptStep};

use shapekit_core::canvas::Canvas;
use shapekit_core::storage::{Storage, StorageError};
use shapekit_render::{RenderContext, RenderPlanner, SvgSink};
use std::fmt::Write;
use std::fs;

/// Run a parsed command and return what it prints.
pub fn run(cli: Cli) -> AppResult<String> {
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Help => Ok(USAGE.to_string()),
        Command::Replay {
            script,
            load,
            svg,
            save,
        } => {
            let script = Script::load(&script)?;
            let mut canvas = Canvas::new(config.engine);
            canvas.set_show_annotations(config.show_annotations);

            if let Some(id) = load {
                let storage = config.open_storage()?;
                let record = pollster::block_on(storage.get(&id))?;
                log::info!("Loaded {} ({} shapes)", record.name, record.shapes.len());
                canvas.load_shapes(record.shapes);
            }

            let mutations = script.replay(&mut canvas);
            log::info!("Replayed {} steps, {} mutations", script.steps.len(), mutations);

            let mut out = serde_json::to_string_pretty(canvas.shapes())?;

            if let Some(path) = svg {
                let mut sink = SvgSink::new(config.width, config.height);
                if let Some(background) = &config.background {
                    sink = sink.with_background(background.clone());
                }
                RenderPlanner::new().render(&RenderContext::from_canvas(&canvas), &mut sink);
                fs::write(&path, sink.finish()).map_err(|e| AppError::io(&path, e))?;
                log::info!("Wrote {}", path.display());
            }

            if let Some(name) = save {
                let storage = config.open_storage()?;
                let record = pollster::block_on(storage.save(&name, canvas.shapes()))?;
                let _ = write!(out, "\nSaved {} as {}", record.name, record.id);
            }
            Ok(out)
        }
        Command::List => {
            let storage = config.open_storage()?;
            let records = pollster::block_on(storage.list_all())?;
            let mut out = String::new();
            for record in records {
                let _ = writeln!(
                    out,
                    "{}\t{}\t{} shapes\t{}",
                    record.id,
                    record.name,
                    record.shapes.len(),
                    record.last_modified
                );
            }
            Ok(out.trim_end().to_string())
        }
        Command::Delete { id } => {
            let storage = config.open_storage()?;
            if pollster::block_on(storage.delete_by_id(&id))? {
                Ok(format!("Deleted {id}"))
            } else {
                Err(StorageError::NotFound(id).into())
            }
        }
    }
}
