//! CLI command implementations

use std::fs;
use std::path::Path;

use crate::dataset::DatasetStore;
use crate::executor::{QueryExecutor, RawQueryParams};
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::init_logging;

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::{write_error, write_response};

/// Load a JSON configuration file
pub fn load_config(path: &Path) -> CliResult<HttpServerConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

    let config: HttpServerConfig = serde_json::from_str(&content)
        .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &HttpServerConfig) -> CliResult<()> {
    if config.host.trim().is_empty() {
        return Err(CliError::config_error("host must not be empty"));
    }
    if config.port == 0 {
        return Err(CliError::config_error("port must be > 0"));
    }
    if config.max_upload_bytes == 0 {
        return Err(CliError::config_error("max_upload_bytes must be > 0"));
    }
    Ok(())
}

/// Resolve the effective server config from an optional file and port override
pub fn resolve_config(path: Option<&Path>, port: Option<u16>) -> CliResult<HttpServerConfig> {
    let mut config = match path {
        Some(p) => load_config(p)?,
        None => HttpServerConfig::default(),
    };
    if let Some(port) = port {
        config.port = port;
        validate_config(&config)?;
    }
    Ok(config)
}

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    init_logging();

    match command {
        Command::Serve { config, port } => {
            let config = resolve_config(config.as_deref(), port)?;
            serve(config)
        }
        Command::Query {
            file,
            start_date,
            end_date,
            region,
            page,
            limit,
        } => {
            let params = RawQueryParams {
                start_date,
                end_date,
                region,
                page,
                limit,
            };
            query(&file, &params)
        }
    }
}

/// Run the HTTP server until it exits
pub fn serve(config: HttpServerConfig) -> CliResult<()> {
    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Load a CSV file, run a single query and print the result
pub fn query(file: &Path, params: &RawQueryParams) -> CliResult<()> {
    let bytes = fs::read(file)
        .map_err(|e| CliError::io_error(format!("Failed to read {}: {}", file.display(), e)))?;

    let store = DatasetStore::new();
    let result = store
        .load_csv(&bytes)
        .map_err(CliError::from)
        .and_then(|_| QueryExecutor::new(&store).execute(params).map_err(CliError::from));

    match result {
        Ok(result) => write_response(&result),
        Err(e) => {
            write_error(e.code_str(), e.message())?;
            Err(e)
        }
    }
}
