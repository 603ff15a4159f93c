// ABOUTME: Production server binary for the MTS Fitness backend
// ABOUTME: Loads environment configuration, connects storage and serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MTS Fitness

//! # MTS Fitness Server Binary
//!
//! Starts the backend HTTP server: environment configuration, logging,
//! database migration and the axum accept loop.

use anyhow::Result;
use clap::Parser;
use mtsfit_server::{
    config::ServerConfig,
    database::Database,
    external::exercise_api::ExerciseApiClient,
    logging,
    server::{FitnessServer, ServerResources},
};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "mtsfit-server")]
#[command(about = "MTS Fitness backend - profile storage and exercise suggestions")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database.url = database_url;
    }

    // Initialize production logging
    logging::init_from_env()?;

    info!("Starting MTS Fitness server");
    info!("{}", config.summary());

    // Connect and migrate storage
    let database = Database::new(&config.database.url).await?;
    info!("Database initialized successfully");

    let exercise_catalog = Arc::new(ExerciseApiClient::new(config.exercise_api.clone()));

    let resources = Arc::new(ServerResources::new(config, database, exercise_catalog));
    let server = FitnessServer::new(resources);

    server.run().await?;

    Ok(())
}
