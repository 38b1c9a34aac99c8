//! CLI command implementations
//!
//! Every command loads the database config first. `compile` and `run` read
//! query options as JSON and validate them into a [`Query`] before doing
//! anything else.

use std::path::Path;

use serde_json::{json, Value};

use crate::database::{Database, DatabaseConfig};
use crate::observability::{log_event_with_fields, Event, Logger, Severity};
use crate::query::{Query, QueryOptions};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{read_request, write_response};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    let level = Severity::parse(&cli.log_level)
        .ok_or_else(|| CliError::usage(format!("Invalid log level: {}", cli.log_level)))?;
    Logger::set_min_severity(level);
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Compile { config, query } => compile(&config, query.as_deref()),
        Command::Run { config, query } => execute(&config, query.as_deref()),
        Command::Get { config, path } => get(&config, &path),
    }
}

/// Print the structured query for the given options
pub fn compile(config_path: &Path, query_path: Option<&Path>) -> CliResult<()> {
    let query = load_query(config_path, query_path)?;
    write_response(query.to_json()?)
}

/// Run the query and print the decoded documents
pub fn execute(config_path: &Path, query_path: Option<&Path>) -> CliResult<()> {
    let query = load_query(config_path, query_path)?;
    let documents = runtime()?.block_on(query.run())?;

    let data: Vec<Value> = documents.iter().map(|d| d.to_json()).collect();
    write_response(json!(data))
}

/// Fetch one document and print it
pub fn get(config_path: &Path, path: &str) -> CliResult<()> {
    let db = load_database(config_path)?;
    let document = runtime()?.block_on(db.reference(path).get())?;
    write_response(document.to_json())
}

fn runtime() -> CliResult<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}

fn load_database(config_path: &Path) -> CliResult<Database> {
    let config = DatabaseConfig::load(config_path)?;
    log_event_with_fields(
        Event::ConfigLoaded,
        &[("project_id", config.project_id.as_str())],
    );
    Ok(Database::new(config)?)
}

fn load_query(config_path: &Path, query_path: Option<&Path>) -> CliResult<Query> {
    let db = load_database(config_path)?;
    build_query(&db, &read_request(query_path)?)
}

fn build_query(db: &Database, request: &Value) -> CliResult<Query> {
    let options = QueryOptions::from_json(request, db)?;
    Ok(db.query(options)?)
}
