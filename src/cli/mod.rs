//! CLI module.
//!
//! Provides the command-line interface:
//! - init: write default config and create the data file
//! - start: boot the HTTP server
//! - validate: one-shot schema validation of a record

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{init, run, run_command, start, validate, Config};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_record, write_json};
