// ABOUTME: Server binary for the Logbook workout tracking API
// ABOUTME: Loads configuration, opens the store, and serves the REST router until ctrl-c
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logbook Contributors

//! # Logbook Server Binary

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use logbook_server::{
    auth::{generate_jwt_secret, AuthManager},
    config::environment::{DatabaseUrl, ServerConfig},
    database_plugins::factory::Database,
    logging,
    resources::ServerResources,
    routes,
};
use tokio::net::TcpListener;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "logbook-server")]
#[command(about = "Logbook - personal workout tracking API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL (`memory`, `sqlite::memory:`, or `sqlite:<path>`)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(url) = args.database_url.as_deref() {
        config.database = DatabaseUrl::parse_url(url).context("Invalid --database-url value")?;
    }

    info!("Starting Logbook server");
    info!("{}", config.summary());

    let database = Database::new(&config.database).await?;
    info!("Database initialized successfully: {}", database.backend_info());

    let auth_manager = match config.auth.jwt_secret.as_deref() {
        Some(secret) => AuthManager::new(secret.as_bytes(), config.auth.jwt_expiry_hours),
        None => {
            warn!(
                "JWT_SECRET is not set; using a random per-process secret. \
                 No externally issued token will validate, so every authenticated \
                 request is rejected until a shared JWT_SECRET is configured"
            );
            AuthManager::new(&generate_jwt_secret()?, config.auth.jwt_expiry_hours)
        }
    };
    info!("Authentication manager initialized");

    let http_port = config.http_port;
    let resources = Arc::new(ServerResources::new(database, auth_manager, Arc::new(config)));
    let app = routes::router(resources);

    let addr = SocketAddr::from(([0, 0, 0, 0], http_port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind HTTP listener on {addr}"))?;
    info!("HTTP server listening on http://{addr}");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {e}");
        return Err(e.into());
    }

    info!("Server stopped");
    Ok(())
}

/// Resolve when the process receives ctrl-c
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
