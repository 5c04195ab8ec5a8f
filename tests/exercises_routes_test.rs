// ABOUTME: Integration tests for the exercise catalog route handlers
// ABOUTME: Tests seeding, listing, filtering, creation, and muscle-group derivation
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use common::{create_seeded_resources, test_config};
use helpers::axum_test::AxumTestRequest;
use repforge::{models::Exercise, server};

use axum::http::StatusCode;
use serde_json::json;
use std::collections::HashSet;

async fn setup() -> (axum::Router, tempfile::TempDir) {
    let (resources, dir) = create_seeded_resources().await;
    let config = test_config(dir.path());
    (server::router(&config, resources), dir)
}

#[tokio::test]
async fn test_list_seeded_exercises() {
    let (router, _dir) = setup().await;

    let response = AxumTestRequest::get("/api/exercises").send(router).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let exercises: Vec<Exercise> = response.json();
    assert_eq!(exercises.len(), 42);
    assert!(exercises.iter().all(|exercise| !exercise.id.is_empty()));

    let ids: HashSet<&str> = exercises.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids.len(), 42, "seeded ids must be unique");
}

#[tokio::test]
async fn test_filter_by_muscle_group() {
    let (router, _dir) = setup().await;

    let response = AxumTestRequest::get("/api/exercises?muscle_group=Chest")
        .send(router.clone())
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let chest: Vec<Exercise> = response.json();
    assert_eq!(chest.len(), 7);
    assert!(chest.iter().all(|e| e.muscle_group == "Chest"));

    // The unfiltered list is a superset of any filtered list
    let all: Vec<Exercise> = AxumTestRequest::get("/api/exercises")
        .send(router)
        .await
        .json();
    let all_ids: HashSet<String> = all.into_iter().map(|e| e.id).collect();
    assert!(chest.iter().all(|e| all_ids.contains(&e.id)));
}

#[tokio::test]
async fn test_filter_unknown_group_is_empty() {
    let (router, _dir) = setup().await;

    let exercises: Vec<Exercise> = AxumTestRequest::get("/api/exercises?muscle_group=Forearms")
        .send(router)
        .await
        .json();
    assert!(exercises.is_empty());
}

#[tokio::test]
async fn test_create_and_get_exercise() {
    let (router, _dir) = setup().await;

    let response = AxumTestRequest::post("/api/exercises")
        .json(&json!({
            "name": "Cable Lateral Raises",
            "muscle_group": "Shoulders",
            "equipment": "Cable"
        }))
        .send(router.clone())
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let created: Exercise = response.json();
    assert!(!created.id.is_empty());
    assert_eq!(created.name, "Cable Lateral Raises");
    assert_eq!(created.equipment.as_deref(), Some("Cable"));
    assert!(created.instructions.is_none());

    let fetched: Exercise = AxumTestRequest::get(&format!("/api/exercises/{}", created.id))
        .send(router)
        .await
        .json();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, created.name);
}

#[tokio::test]
async fn test_get_missing_exercise_is_404() {
    let (router, _dir) = setup().await;

    let response = AxumTestRequest::get("/api/exercises/no-such-id")
        .send(router)
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_muscle_groups_sorted_distinct() {
    let (router, _dir) = setup().await;

    let groups: Vec<String> = AxumTestRequest::get("/api/muscle-groups")
        .send(router)
        .await
        .json();
    assert_eq!(
        groups,
        vec!["Arms", "Back", "Chest", "Core", "Legs", "Shoulders"]
    );
}

#[tokio::test]
async fn test_muscle_groups_reflect_user_added_exercises() {
    let (router, _dir) = setup().await;

    AxumTestRequest::post("/api/exercises")
        .json(&json!({
            "name": "Wrist Curls",
            "muscle_group": "Forearms"
        }))
        .send(router.clone())
        .await;

    let groups: Vec<String> = AxumTestRequest::get("/api/muscle-groups")
        .send(router)
        .await
        .json();
    assert_eq!(
        groups,
        vec!["Arms", "Back", "Chest", "Core", "Forearms", "Legs", "Shoulders"]
    );
}

#[tokio::test]
async fn test_seeding_is_idempotent() {
    let (resources, dir) = create_seeded_resources().await;
    // A second seed pass must not duplicate the catalog
    resources.exercises.seed_predefined().await.unwrap();

    let config = test_config(dir.path());
    let router = server::router(&config, resources);
    let exercises: Vec<Exercise> = AxumTestRequest::get("/api/exercises")
        .send(router)
        .await
        .json();
    assert_eq!(exercises.len(), 42);
}

#[tokio::test]
async fn test_health_check() {
    let (router, _dir) = setup().await;

    let response = AxumTestRequest::get("/api/").send(router).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Workout Tracker API");
}
