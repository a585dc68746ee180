//! CLI command implementations

use std::path::PathBuf;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use crate::catalog::Catalog;
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::init_logging;
use crate::store::JsonFileStore;

/// Main CLI entry point
///
/// Installs logging, parses arguments and dispatches to the command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    init_logging();
    let cli = Cli::parse_args();
    run_command(cli.command.unwrap_or_default())
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { port, host, data } => {
            let config = apply_overrides(HttpServerConfig::from_env()?, port, host, data);
            serve(config)
        }
        Command::Init { data } => {
            let config = apply_overrides(HttpServerConfig::from_env()?, None, None, data);
            init(&config)
        }
    }
}

/// Command line flags take precedence over the environment
pub fn apply_overrides(
    mut config: HttpServerConfig,
    port: Option<u16>,
    host: Option<String>,
    data: Option<PathBuf>,
) -> HttpServerConfig {
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(data) = data {
        config.data_path = data;
    }
    config
}

/// Create an empty backing file unless one already exists
pub fn init(config: &HttpServerConfig) -> CliResult<()> {
    let store = JsonFileStore::new(&config.data_path);

    if store.init()? {
        tracing::info!(path = %store.path().display(), "created empty catalog");
    } else {
        tracing::info!(path = %store.path().display(), "catalog already exists, left untouched");
    }

    Ok(())
}

/// Load the catalog and serve HTTP until the process stops.
///
/// A catalog that fails to load does not stop the server; its routes answer
/// 500 until restart.
pub fn serve(config: HttpServerConfig) -> CliResult<()> {
    let catalog = Catalog::open(JsonFileStore::new(&config.data_path));
    if !catalog.is_loaded() {
        tracing::warn!("serving without data; catalog requests will fail until restart");
    }

    let server = HttpServer::with_catalog(config, catalog);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}
