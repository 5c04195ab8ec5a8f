// ABOUTME: Route handlers for the exercise catalog REST API
// ABOUTME: Provides list/create/get endpoints plus the distinct muscle-group listing
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Exercise catalog routes

use crate::{
    errors::AppError,
    models::CreateExerciseRequest,
    server::ServerResources,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Query parameters for listing exercises
#[derive(Debug, Deserialize, Default)]
pub struct ListExercisesQuery {
    /// Filter by muscle group (exact match)
    pub muscle_group: Option<String>,
}

/// Exercise routes handler
pub struct ExerciseRoutes;

impl ExerciseRoutes {
    /// Create all exercise routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/exercises", get(Self::handle_list))
            .route("/api/exercises", post(Self::handle_create))
            .route("/api/exercises/:id", get(Self::handle_get))
            .route("/api/muscle-groups", get(Self::handle_muscle_groups))
            .with_state(resources)
    }

    /// Handle GET /api/exercises - List exercises, optionally filtered
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<ListExercisesQuery>,
    ) -> Result<Response, AppError> {
        let exercises = resources
            .exercises
            .list(query.muscle_group.as_deref())
            .await;
        Ok((StatusCode::OK, Json(exercises)).into_response())
    }

    /// Handle POST /api/exercises - Create a new exercise
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<CreateExerciseRequest>,
    ) -> Result<Response, AppError> {
        let exercise = resources.exercises.create(body).await?;
        Ok((StatusCode::OK, Json(exercise)).into_response())
    }

    /// Handle GET /api/exercises/:id - Get a specific exercise
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let exercise = resources.exercises.get(&id).await?;
        Ok((StatusCode::OK, Json(exercise)).into_response())
    }

    /// Handle GET /api/muscle-groups - Distinct muscle groups, sorted
    async fn handle_muscle_groups(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let groups = resources.exercises.muscle_groups().await;
        Ok((StatusCode::OK, Json(groups)).into_response())
    }
}
