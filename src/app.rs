//! Application context for the SWAPI demo
//!
//! `App` owns the configuration, the response cache, the run counters and the
//! upstream client. It is the only entry point callers need: run the pipeline,
//! read a stats snapshot.

use std::io::{self, Write};
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, error};

use crate::cache::ResourceCache;
use crate::config::AppConfig;
use crate::data::SwapiClient;
use crate::pipeline::{self, PipelineError};
use crate::stats::{RunStats, StatsSnapshot};

/// Outcome of a top-level presentation run
#[derive(Debug, Clone)]
pub struct PresentationRun {
    /// Everything the steps wrote before finishing or failing
    pub output: String,
    /// Whether every step completed
    pub succeeded: bool,
}

/// Main application struct owning shared state and the upstream client
pub struct App {
    /// Startup configuration, read-only
    config: AppConfig,
    /// Response cache shared with the client
    cache: Arc<ResourceCache>,
    /// Run counters shared with the client
    stats: Arc<RunStats>,
    /// Star Wars API client
    client: SwapiClient,
    /// Serialises pipeline runs so overlapping triggers cannot race on the person index
    run_lock: Mutex<()>,
}

impl App {
    /// Creates a new App with fresh cache and counters
    pub fn new(config: AppConfig) -> Result<Self, reqwest::Error> {
        Self::with_stats(config, RunStats::new())
    }

    /// Creates a new App starting from the given counters
    pub fn with_stats(config: AppConfig, stats: RunStats) -> Result<Self, reqwest::Error> {
        let cache = Arc::new(ResourceCache::new());
        let stats = Arc::new(stats);
        let client = SwapiClient::new(&config, cache.clone(), stats.clone())?;

        Ok(Self {
            config,
            cache,
            stats,
            client,
            run_lock: Mutex::new(()),
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn cache(&self) -> &ResourceCache {
        &self.cache
    }

    pub fn client(&self) -> &SwapiClient {
        &self.client
    }

    /// Runs the five pipeline steps once, writing their output to `out`
    ///
    /// Only a fully successful run bumps the run count and advances the
    /// person index. On failure both are left untouched, while documents
    /// fetched by the steps that did succeed remain cached.
    pub async fn run_pipeline<W>(&self, out: &mut W) -> Result<(), PipelineError>
    where
        W: Write + Send,
    {
        let _guard = self.run_lock.lock().await;

        debug!("Starting data fetch...");
        let person_index = self.stats.last_person_index();

        pipeline::run(&self.client, person_index, out).await?;

        self.stats.record_completed_run();
        self.log_statistics();
        Ok(())
    }

    /// Runs the pipeline, echoing its output to stdout
    ///
    /// Failures are logged here and never propagated: a failed run is final
    /// for that run only.
    pub async fn run_presentation(&self) -> PresentationRun {
        let mut console = Console::default();

        let succeeded = match self.run_pipeline(&mut console).await {
            Ok(()) => true,
            Err(err) => {
                error!("An error occurred during execution. Check the logs above. ({})", err);
                false
            }
        };

        PresentationRun {
            output: String::from_utf8_lossy(&console.captured).into_owned(),
            succeeded,
        }
    }

    /// Current counters, cache metrics and configuration
    pub fn stats(&self) -> StatsSnapshot {
        StatsSnapshot {
            run_count: self.stats.run_count(),
            cache_entries: self.cache.len(),
            total_bytes_fetched: self.cache.total_bytes(),
            error_count: self.stats.error_count(),
            last_person_index: self.stats.last_person_index(),
            debug: self.config.debug,
            timeout_ms: self.config.timeout_ms(),
        }
    }

    fn log_statistics(&self) {
        let snapshot = self.stats();
        debug!("--- Statistics ---");
        debug!("API runs: {}", snapshot.run_count);
        debug!("Cache size: {}", snapshot.cache_entries);
        debug!("Total data size: {} bytes", snapshot.total_bytes_fetched);
        debug!("Error count: {}", snapshot.error_count);
    }
}

/// Writer that forwards to stdout and keeps a copy of everything written
#[derive(Default)]
struct Console {
    captured: Vec<u8>,
}

impl Write for Console {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write_all(buf)?;
        self.captured.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }
}
