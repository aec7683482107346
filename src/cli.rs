//! Command-line interface parsing for the SWAPI demo server
//!
//! This module handles parsing of CLI arguments using clap and turns them into
//! the [`AppConfig`] every other component reads.

use std::time::Duration;

use clap::Parser;

use crate::config::{normalize_base_url, AppConfig, DEFAULT_BASE_URL, DEFAULT_PORT, DEFAULT_TIMEOUT_MS};

/// SWAPI demo - fetch, cache and summarise Star Wars API data
#[derive(Parser, Debug)]
#[command(name = "swapi-demo")]
#[command(about = "Fetches Star Wars API resources and prints formatted summaries")]
#[command(version)]
pub struct Cli {
    /// Disable debug logging
    #[arg(long)]
    pub no_debug: bool,

    /// Upstream request timeout in milliseconds
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_TIMEOUT_MS,
          value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Root URL of the upstream catalog
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Accept invalid or self-signed TLS certificates from the upstream
    ///
    /// Only meant for demo targets whose certificate is broken.
    #[arg(long)]
    pub accept_invalid_certs: bool,

    /// Port for the web page and JSON endpoints
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl AppConfig {
    /// Creates an AppConfig from parsed CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            debug: !cli.no_debug,
            request_timeout: Duration::from_millis(cli.timeout),
            base_url: normalize_base_url(cli.base_url.clone()),
            accept_invalid_certs: cli.accept_invalid_certs,
            port: cli.port,
        }
    }
}
