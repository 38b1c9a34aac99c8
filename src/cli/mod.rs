//! CLI module
//!
//! Provides command-line interface for:
//! - compile: print the structured query for a set of options
//! - run: execute a query and print the documents
//! - get: fetch a single document

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{compile, execute, get, run, run_command};
pub use errors::{CliError, CliResult};
pub use io::{read_request, write_error, write_response};
