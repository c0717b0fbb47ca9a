//! Main application entry point.

use shapekit_app::{AppError, Cli, USAGE};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let result = Cli::parse(std::env::args().skip(1)).and_then(shapekit_app::run);
    match result {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
            ExitCode::SUCCESS
        }
        Err(AppError::Usage(message)) => {
            eprintln!("error: {message}\n\n{USAGE}");
            ExitCode::from(2)
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
