//! Runtime configuration and domain constants
//!
//! `AppConfig` is built once at startup (see [`crate::cli`]) and is read-only
//! for the rest of the process.

use std::time::Duration;

/// Default upstream catalog root
pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api/";

/// Default per-request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Default port for the front-facing server
pub const DEFAULT_PORT: u16 = 3000;

/// Upstream marker for a missing numeric field
pub const UNKNOWN_SENTINEL: &str = "unknown";

/// Planets must be strictly more populous than this to be listed
pub const LARGE_PLANET_MIN_POPULATION: u64 = 1_000_000_000;

/// Planets must be strictly wider than this (km) to be listed
pub const LARGE_PLANET_MIN_DIAMETER: u64 = 10_000;

/// Number of starships shown from the first page
pub const STARSHIPS_SHOWN: usize = 3;

/// The vehicle step only runs once the person index has reached this value
pub const VEHICLE_MIN_INDEX: u64 = 4;

/// Application configuration shared by every component
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Emit debug-level logs
    pub debug: bool,
    /// Budget for a single upstream request
    pub request_timeout: Duration,
    /// Upstream root; always ends with `/`
    pub base_url: String,
    /// Skip TLS certificate validation for the upstream connection
    pub accept_invalid_certs: bool,
    /// Port for the front-facing server
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            debug: true,
            request_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            base_url: DEFAULT_BASE_URL.to_string(),
            accept_invalid_certs: false,
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    /// Replaces the upstream root, appending a trailing slash when missing
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = normalize_base_url(base_url.into());
        self
    }

    /// Replaces the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Request timeout in whole milliseconds, as reported in stats
    pub fn timeout_ms(&self) -> u64 {
        self.request_timeout.as_millis() as u64
    }
}

/// Ensures a base URL ends with exactly one trailing `/`
pub fn normalize_base_url(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url.push('/');
    url
}
