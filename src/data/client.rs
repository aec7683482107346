//! Star Wars API client
//!
//! Fetches a resource path from the upstream catalog, parses the body as JSON
//! and stores it in the shared [`ResourceCache`]. Every failure is counted and
//! logged before being handed back to the caller; nothing is retried.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::cache::ResourceCache;
use crate::config::AppConfig;
use crate::stats::RunStats;

/// Errors that can occur when fetching a resource
#[derive(Debug, Error)]
pub enum FetchError {
    /// Upstream answered with a status of 400 or above
    #[error("request for {path} failed with status {status}")]
    HttpStatus { path: String, status: u16 },

    /// Transport failure (DNS, refused or reset connection, TLS)
    #[error("network error for {path}: {source}")]
    Network {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// No complete response within the configured budget
    #[error("request timed out for {path}")]
    Timeout { path: String },

    /// Body was not valid JSON
    #[error("failed to parse response for {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// The resource path the failed request was for
    pub fn path(&self) -> &str {
        match self {
            FetchError::HttpStatus { path, .. }
            | FetchError::Network { path, .. }
            | FetchError::Timeout { path }
            | FetchError::Parse { path, .. } => path,
        }
    }
}

/// Client for fetching resources from the Star Wars API
#[derive(Debug, Clone)]
pub struct SwapiClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Upstream root, always ending in `/`
    base_url: String,
    /// Budget for one request, body included
    timeout: Duration,
    /// Shared response cache
    cache: Arc<ResourceCache>,
    /// Shared counters; only the error count is touched here
    stats: Arc<RunStats>,
}

impl SwapiClient {
    /// Creates a client for the configured upstream
    ///
    /// Fails only if the underlying HTTP client cannot be built.
    pub fn new(
        config: &AppConfig,
        cache: Arc<ResourceCache>,
        stats: Arc<RunStats>,
    ) -> Result<Self, reqwest::Error> {
        if config.accept_invalid_certs {
            warn!(
                "TLS certificate validation is DISABLED for {}; responses can be forged",
                config.base_url
            );
        }

        let http_client = Client::builder()
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;

        Ok(Self {
            http_client,
            base_url: config.base_url.clone(),
            timeout: config.request_timeout,
            cache,
            stats,
        })
    }

    /// Upstream root this client resolves paths against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the absolute URL for a resource path
    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetches the document for `path`
    ///
    /// # Behavior
    /// - A cached path is returned immediately, without network I/O
    /// - Otherwise one GET is issued; on success the document is cached and
    ///   the body size added to the byte total
    /// - On failure the error counter is incremented, the failure is logged
    ///   with its context, and the error is returned unchanged
    pub async fn fetch(&self, path: &str) -> Result<Arc<Value>, FetchError> {
        if let Some(document) = self.cache.get(path) {
            debug!("Using cached data for {}", path);
            return Ok(document);
        }

        debug!("Fetching fresh data for {}", path);

        match self.fetch_from_api(path).await {
            Ok(document) => Ok(document),
            Err(err) => {
                self.stats.record_error();
                error!("Error in fetch({}): {}", path, err);
                Err(err)
            }
        }
    }

    /// Performs the GET, enforcing the timeout, and stores the parsed result
    async fn fetch_from_api(&self, path: &str) -> Result<Arc<Value>, FetchError> {
        let url = self.url_for(path);

        let request = async {
            let response = self
                .http_client
                .get(&url)
                .send()
                .await
                .map_err(|source| FetchError::Network {
                    path: path.to_string(),
                    source,
                })?;

            let status = response.status().as_u16();
            if status >= 400 {
                return Err(FetchError::HttpStatus {
                    path: path.to_string(),
                    status,
                });
            }

            response.bytes().await.map_err(|source| FetchError::Network {
                path: path.to_string(),
                source,
            })
        };

        // Dropping the request future on expiry aborts the in-flight request.
        let body = tokio::time::timeout(self.timeout, request)
            .await
            .map_err(|_| FetchError::Timeout {
                path: path.to_string(),
            })??;

        let document: Value = serde_json::from_slice(&body).map_err(|source| FetchError::Parse {
            path: path.to_string(),
            source,
        })?;

        let document = self.cache.put(path, document, body.len() as u64);
        debug!("Fetched {} ({} bytes)", path, body.len());
        debug!("Cache size: {}", self.cache.len());

        Ok(document)
    }
}
