//! CLI argument definitions using clap
//!
//! Commands:
//! - firestore-lite compile --config <path> [--query <path>]
//! - firestore-lite run --config <path> [--query <path>]
//! - firestore-lite get --config <path> <document path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// firestore-lite - compile and run structured queries
#[derive(Parser, Debug)]
#[command(name = "firestore-lite")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Minimum log severity (trace, info, warn, error, fatal)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate query options and print the structured query
    Compile {
        /// Path to database configuration file
        #[arg(long, default_value = "./firestore.json")]
        config: PathBuf,

        /// Path to query options (JSON); read from stdin when omitted
        #[arg(long)]
        query: Option<PathBuf>,
    },

    /// Execute a query and print the matching documents
    Run {
        /// Path to database configuration file
        #[arg(long, default_value = "./firestore.json")]
        config: PathBuf,

        /// Path to query options (JSON); read from stdin when omitted
        #[arg(long)]
        query: Option<PathBuf>,
    },

    /// Fetch a single document by path
    Get {
        /// Path to database configuration file
        #[arg(long, default_value = "./firestore.json")]
        config: PathBuf,

        /// Document path, e.g. users/alice
        path: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
