// ABOUTME: Route handlers for the workout session REST API
// ABOUTME: Provides session CRUD plus the exercise completion and reset operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Workout session routes

use crate::{
    errors::AppError,
    models::CreateSessionRequest,
    server::ServerResources,
    store::sessions::CompletionStatus,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Response for the complete and reset operations
#[derive(Debug, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Human-readable confirmation
    pub message: String,
    /// The mutated exercise's id
    pub exercise_id: String,
    /// Completion counter after the operation
    pub completed_count: u32,
    /// Archived flag after the operation
    pub is_archived: bool,
}

impl CompletionResponse {
    fn new(message: &str, status: CompletionStatus) -> Self {
        Self {
            message: message.to_owned(),
            exercise_id: status.exercise_id,
            completed_count: status.completed_count,
            is_archived: status.is_archived,
        }
    }
}

/// Session routes handler
pub struct SessionRoutes;

impl SessionRoutes {
    /// Create all session routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/sessions", get(Self::handle_list))
            .route("/api/sessions", post(Self::handle_create))
            .route("/api/sessions/:id", get(Self::handle_get))
            .route(
                "/api/sessions/:sid/exercises/:eid/complete",
                patch(Self::handle_complete),
            )
            .route(
                "/api/sessions/:sid/exercises/:eid/reset",
                patch(Self::handle_reset),
            )
            .with_state(resources)
    }

    /// Handle GET /api/sessions - List sessions, newest first
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let sessions = resources.sessions.list().await;
        Ok((StatusCode::OK, Json(sessions)).into_response())
    }

    /// Handle POST /api/sessions - Create a new session
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<CreateSessionRequest>,
    ) -> Result<Response, AppError> {
        let session = resources.sessions.create(body).await?;
        Ok((StatusCode::OK, Json(session)).into_response())
    }

    /// Handle GET /api/sessions/:id - Get a specific session
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let session = resources.sessions.get(&id).await?;
        Ok((StatusCode::OK, Json(session)).into_response())
    }

    /// Handle PATCH /api/sessions/:sid/exercises/:eid/complete
    ///
    /// Records one completion of the exercise and latches the archived flag
    /// when the completion target is reached.
    async fn handle_complete(
        State(resources): State<Arc<ServerResources>>,
        Path((session_id, exercise_id)): Path<(String, String)>,
    ) -> Result<Response, AppError> {
        let status = resources.sessions.complete(&session_id, &exercise_id).await?;
        let response = CompletionResponse::new("Exercise completion recorded", status);
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle PATCH /api/sessions/:sid/exercises/:eid/reset
    async fn handle_reset(
        State(resources): State<Arc<ServerResources>>,
        Path((session_id, exercise_id)): Path<(String, String)>,
    ) -> Result<Response, AppError> {
        let status = resources.sessions.reset(&session_id, &exercise_id).await?;
        let response = CompletionResponse::new("Exercise completion reset", status);
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
