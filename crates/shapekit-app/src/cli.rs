//! Command-line parsing.

use crate::error::{AppError, AppResult};
use std::path::PathBuf;

pub const USAGE: &str = "\
Usage:
  shapekit replay <script.json> [--load <id>] [--svg <out.svg>] [--save <name>] [--config <file>]
  shapekit list [--config <file>]
  shapekit delete <id> [--config <file>]

Set RUST_LOG=debug to trace gestures.";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Replay {
        script: PathBuf,
        /// Saved drawing to start from.
        load: Option<String>,
        svg: Option<PathBuf>,
        save: Option<String>,
    },
    List,
    Delete {
        id: String,
    },
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cli {
    pub command: Command,
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parse arguments, excluding the program name.
    pub fn parse(args: impl IntoIterator<Item = String>) -> AppResult<Self> {
        let mut positional = Vec::new();
        let mut load = None;
        let mut svg = None;
        let mut save = None;
        let mut config = None;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--load" => load = Some(flag_value(&arg, args.next())?),
                "--svg" => svg = Some(PathBuf::from(flag_value(&arg, args.next())?)),
                "--save" => save = Some(flag_value(&arg, args.next())?),
                "--config" => config = Some(PathBuf::from(flag_value(&arg, args.next())?)),
                "-h" | "--help" => {
                    return Ok(Self {
                        command: Command::Help,
                        config,
                    });
                }
                flag if flag.starts_with("--") => {
                    return Err(AppError::Usage(format!("unknown option {flag}")));
                }
                _ => positional.push(arg),
            }
        }

        let mut positional = positional.into_iter();
        let command = match positional.next().as_deref() {
            None | Some("help") => Command::Help,
            Some("replay") => Command::Replay {
                script: PathBuf::from(required(positional.next(), "replay needs a script path")?),
                load: load.take(),
                svg: svg.take(),
                save: save.take(),
            },
            Some("list") => Command::List,
            Some("delete") => Command::Delete {
                id: required(positional.next(), "delete needs a drawing id")?,
            },
            Some(other) => return Err(AppError::Usage(format!("unknown command {other}"))),
        };

        if let Some(extra) = positional.next() {
            return Err(AppError::Usage(format!("unexpected argument {extra}")));
        }
        if load.is_some() || svg.is_some() || save.is_some() {
            return Err(AppError::Usage("--load, --svg and --save only apply to replay".to_string()));
        }

        Ok(Self { command, config })
    }
}

fn flag_value(flag: &str, value: Option<String>) -> AppResult<String> {
    value.ok_or_else(|| AppError::Usage(format!("{flag} needs a value")))
}

fn required(value: Option<String>, message: &str) -> AppResult<String> {
    value.ok_or_else(|| AppError::Usage(message.to_string()))
}
