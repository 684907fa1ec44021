//! Start-up and exit handling shared by the command-line scripts.

use std::process::ExitCode;

use tracing::{debug, error, warn};

use crate::{config, logging, Result};

/// Install logging and load the dotenv file.
pub fn init() {
    logging::init();
    match config::load_env_file() {
        Ok(Some(file)) => debug!(file, "Loaded environment file"),
        Ok(None) => debug!("No environment file found, using process environment"),
        Err(e) => {
            warn!(error = %e, "Environment file not loaded");
            eprintln!("⚠️  {}", e);
        }
    }
}

/// Report the outcome of a script and map it to a process exit code.
///
/// Every failure exits with 1.
pub fn exit_code(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Script failed");
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

/// First positional argument, or `default`.
pub fn first_arg_or(default: &str) -> String {
    std::env::args()
        .nth(1)
        .filter(|a| !a.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
