//! CLI module
//!
//! Provides command-line interface for:
//! - serve: Load the catalog and serve the HTTP API
//! - init: Create an empty backing file

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{apply_overrides, init, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
