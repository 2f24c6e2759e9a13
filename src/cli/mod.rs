//! CLI module
//!
//! Provides command-line interface for:
//! - serve: run the HTTP service
//! - query: one-shot query against a CSV file

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{load_config, query, resolve_config, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_error, write_response};
