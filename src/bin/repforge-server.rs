// ABOUTME: Server binary for the Repforge workout tracking API
// ABOUTME: Loads configuration, seeds the exercise catalog, and serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Repforge Server Binary
//!
//! Starts the workout tracking REST API: loads configuration from the
//! environment, initializes logging and the JSON record store, seeds the
//! exercise catalog on first run, and serves until interrupted.

use anyhow::Result;
use clap::Parser;
use repforge::{
    config::environment::ServerConfig,
    logging,
    server::{self, ServerResources},
    store::JsonStore,
};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "repforge-server")]
#[command(about = "Repforge - workout tracking REST API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override data directory for JSON collections
    #[arg(long)]
    data_dir: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(data_dir) = args.data_dir {
        config.store.data_dir = data_dir.into();
    }

    logging::init_from_env()?;

    info!("Starting Repforge workout tracking API");
    info!("{}", config.summary());

    let store = JsonStore::new(config.store.data_dir.clone());
    store.ensure_data_dir().await?;

    let resources = Arc::new(ServerResources::new(store));
    resources.exercises.seed_predefined().await?;

    server::run(&config, resources).await?;
    info!("Server stopped");
    Ok(())
}
