// ABOUTME: Server resources, router assembly, and HTTP server lifecycle
// ABOUTME: Wires the store-backed managers into the axum router and serves requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Server assembly
//!
//! [`ServerResources`] aggregates the store handle and the domain managers
//! built on it, and is passed as shared state into every route handler.
//! There is no global store; everything is constructed at startup and
//! dependency-injected.

use crate::config::environment::ServerConfig;
use crate::errors::{AppError, AppResult};
use crate::middleware::setup_cors;
use crate::routes::{ExerciseRoutes, HealthRoutes, SessionRoutes, SplitRoutes, TemplateRoutes};
use crate::store::{
    exercises::ExerciseManager, sessions::SessionManager, splits::SplitManager, JsonStore,
};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared resources for all route handlers
#[derive(Debug)]
pub struct ServerResources {
    /// The underlying record store
    pub store: Arc<JsonStore>,
    /// Exercise catalog manager
    pub exercises: ExerciseManager,
    /// Workout split manager
    pub splits: SplitManager,
    /// Workout session manager
    pub sessions: SessionManager,
}

impl ServerResources {
    /// Build resources around a store instance
    #[must_use]
    pub fn new(store: JsonStore) -> Self {
        let store = Arc::new(store);
        Self {
            exercises: ExerciseManager::new(store.clone()),
            splits: SplitManager::new(store.clone()),
            sessions: SessionManager::new(store.clone()),
            store,
        }
    }
}

/// Assemble the full application router
#[must_use]
pub fn router(config: &ServerConfig, resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes())
        .merge(ExerciseRoutes::routes(resources.clone()))
        .merge(SplitRoutes::routes(resources.clone()))
        .merge(SessionRoutes::routes(resources.clone()))
        .merge(TemplateRoutes::routes())
        .layer(TraceLayer::new_for_http())
        .layer(setup_cors(config))
}

/// Bind and serve until ctrl-c
pub async fn run(config: &ServerConfig, resources: Arc<ServerResources>) -> AppResult<()> {
    let app = router(config, resources);
    let addr = format!("0.0.0.0:{}", config.http_port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;
    info!("HTTP server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("HTTP server error: {e}")))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to install ctrl-c handler: {e}");
        return;
    }
    info!("Shutdown signal received");
}
