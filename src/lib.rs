//! SWAPI Demo Library
//!
//! Fetches Star Wars API resources with a caching, timeout-bounded client and
//! renders them through a five-step presentation pipeline. Modules are exposed
//! for the binary and for integration tests.

pub mod app;
pub mod cache;
pub mod cli;
pub mod config;
pub mod data;
pub mod logging;
pub mod pipeline;
pub mod render;
pub mod server;
pub mod stats;
