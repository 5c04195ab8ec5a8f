// ABOUTME: Route handlers for the workout split REST API
// ABOUTME: Provides CRUD endpoints over named multi-day training plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Workout split routes

use crate::{errors::AppError, models::CreateSplitRequest, server::ServerResources};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Response for a successful split deletion
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteSplitResponse {
    /// Human-readable confirmation
    pub message: String,
}

/// Split routes handler
pub struct SplitRoutes;

impl SplitRoutes {
    /// Create all split routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/splits", get(Self::handle_list))
            .route("/api/splits", post(Self::handle_create))
            .route("/api/splits/:id", get(Self::handle_get))
            .route("/api/splits/:id", put(Self::handle_update))
            .route("/api/splits/:id", delete(Self::handle_delete))
            .with_state(resources)
    }

    /// Handle GET /api/splits - List splits, newest first
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let splits = resources.splits.list().await;
        Ok((StatusCode::OK, Json(splits)).into_response())
    }

    /// Handle POST /api/splits - Create a new split
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<CreateSplitRequest>,
    ) -> Result<Response, AppError> {
        let split = resources.splits.create(body).await?;
        Ok((StatusCode::OK, Json(split)).into_response())
    }

    /// Handle GET /api/splits/:id - Get a specific split
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let split = resources.splits.get(&id).await?;
        Ok((StatusCode::OK, Json(split)).into_response())
    }

    /// Handle PUT /api/splits/:id - Replace a split's fields
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
        Json(body): Json<CreateSplitRequest>,
    ) -> Result<Response, AppError> {
        let split = resources.splits.update(&id, body).await?;
        Ok((StatusCode::OK, Json(split)).into_response())
    }

    /// Handle DELETE /api/splits/:id - Delete a split
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        resources.splits.delete(&id).await?;
        let response = DeleteSplitResponse {
            message: "Workout split deleted successfully".to_owned(),
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
