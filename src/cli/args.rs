//! CLI argument definitions using clap
//!
//! Commands:
//! - biblioteca serve [--port <port>] [--host <host>] [--data <path>]
//! - biblioteca init [--data <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Biblioteca - a book catalog served over HTTP
#[derive(Parser, Debug)]
#[command(name = "biblioteca")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Defaults to `serve`
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Load the catalog and serve the HTTP API
    Serve {
        /// Port to listen on (overrides PORT)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (overrides HOST)
        #[arg(long)]
        host: Option<String>,

        /// Backing JSON file (overrides LIBROS_DATA)
        #[arg(long)]
        data: Option<PathBuf>,
    },

    /// Create an empty backing file if none exists
    Init {
        /// Backing JSON file (overrides LIBROS_DATA)
        #[arg(long)]
        data: Option<PathBuf>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Serve {
            port: None,
            host: None,
            data: None,
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
