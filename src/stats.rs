// Run counters: pipeline runs, fetch errors, and the person index driving the next run.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Read-only view handed to callers (the `/stats` endpoint, the landing page)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    pub run_count: u64,
    pub cache_entries: usize,
    pub total_bytes_fetched: u64,
    pub error_count: u64,
    pub last_person_index: u64,
    pub debug: bool,
    pub timeout_ms: u64,
}

/// Monotonic counters shared by the fetch client and the pipeline
#[derive(Debug)]
pub struct RunStats {
    error_count: AtomicU64,
    run_count: AtomicU64,
    last_person_index: AtomicU64,
}

impl RunStats {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Counters starting from a given person index.
    pub fn starting_at(person_index: u64) -> Self {
        Self {
            error_count: AtomicU64::new(0),
            run_count: AtomicU64::new(0),
            last_person_index: AtomicU64::new(person_index),
        }
    }

    pub fn record_error(&self) {
        self.error_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Bump the run count and advance the person index after a successful run.
    pub fn record_completed_run(&self) {
        self.run_count.fetch_add(1, Ordering::Relaxed);
        self.last_person_index.fetch_add(1, Ordering::Relaxed);
    }

    pub fn error_count(&self) -> u64 {
        self.error_count.load(Ordering::Relaxed)
    }

    pub fn run_count(&self) -> u64 {
        self.run_count.load(Ordering::Relaxed)
    }

    pub fn last_person_index(&self) -> u64 {
        self.last_person_index.load(Ordering::Relaxed)
    }
}

impl Default for RunStats {
    fn default() -> Self {
        Self::new()
    }
}
