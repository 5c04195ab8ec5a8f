// ABOUTME: Route handlers for the static workout template endpoint
// ABOUTME: Serves the fixed plan skeletons with no store access
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Workout template routes

use crate::templates::{self, WorkoutTemplate};
use axum::{routing::get, Json, Router};
use std::collections::BTreeMap;

/// Template routes handler
pub struct TemplateRoutes;

impl TemplateRoutes {
    /// Create all template routes
    #[must_use]
    pub fn routes() -> Router {
        Router::new().route("/api/templates", get(Self::handle_list))
    }

    /// Handle GET /api/templates - The static template map
    async fn handle_list() -> Json<BTreeMap<&'static str, WorkoutTemplate>> {
        Json(templates::all())
    }
}
