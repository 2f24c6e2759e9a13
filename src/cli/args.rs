//! CLI argument definitions using clap
//!
//! Commands:
//! - salesdb serve [--config <path>] [--port <port>]
//! - salesdb query --file <csv> [filters...]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// salesdb - In-memory sales dataset service
#[derive(Parser, Debug)]
#[command(name = "salesdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to a JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to listen on (overrides the config file)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Load a CSV file, run one query and print the result
    Query {
        /// CSV file to load
        #[arg(long)]
        file: PathBuf,

        /// Inclusive lower date bound (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<String>,

        /// Inclusive upper date bound (YYYY-MM-DD)
        #[arg(long)]
        end_date: Option<String>,

        /// Exact region match
        #[arg(long)]
        region: Option<String>,

        /// 1-based page number
        #[arg(long)]
        page: Option<String>,

        /// Page size
        #[arg(long)]
        limit: Option<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
