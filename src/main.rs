//! SWAPI Demo - fetch, cache and summarise Star Wars API data
//!
//! Serves a small web page; each click on its button runs the presentation
//! pipeline, whose formatted output is printed on this process's console.

use std::sync::Arc;

use clap::Parser;

use swapi_demo::app::App;
use swapi_demo::cli::Cli;
use swapi_demo::config::AppConfig;
use swapi_demo::{logging, server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = AppConfig::from_cli(&cli);

    logging::init(config.debug);

    let app = Arc::new(App::new(config)?);
    server::serve(app).await?;

    Ok(())
}
