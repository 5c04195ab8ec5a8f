// ABOUTME: Health check route handlers for service monitoring
// ABOUTME: Provides the API root endpoint used as a liveness probe
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Health check routes

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    #[must_use]
    pub fn routes() -> axum::Router {
        use axum::{routing::get, Json, Router};

        async fn root_handler() -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "message": "Workout Tracker API"
            }))
        }

        Router::new()
            .route("/api", get(root_handler))
            .route("/api/", get(root_handler))
    }
}
