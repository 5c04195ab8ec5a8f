// ABOUTME: Exercise catalog manager for seeding, listing, and creating exercises
// ABOUTME: Derives the muscle-group set from stored data rather than the seed list
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Exercise catalog
//!
//! Serves the predefined exercise catalog plus any user-created exercises.
//! On first startup the empty collection is seeded from
//! [`crate::catalog::PREDEFINED_EXERCISES`].

use crate::catalog::PREDEFINED_EXERCISES;
use crate::errors::{AppError, AppResult};
use crate::models::{CreateExerciseRequest, Exercise};
use crate::store::{find_by_id, JsonStore, Record, EXERCISES};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// List results are capped at this many records
const LIST_CAP: usize = 1000;

impl Record for Exercise {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Manager for the exercise catalog
#[derive(Debug, Clone)]
pub struct ExerciseManager {
    store: Arc<JsonStore>,
}

impl ExerciseManager {
    /// Create a manager backed by the given store
    #[must_use]
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }

    /// Seed the catalog with the predefined exercises if it is empty
    pub async fn seed_predefined(&self) -> AppResult<()> {
        let _guard = self.store.write_lock(EXERCISES).await;
        let existing: Vec<Exercise> = self.store.load(EXERCISES).await;
        if !existing.is_empty() {
            return Ok(());
        }

        let exercises: Vec<Exercise> = PREDEFINED_EXERCISES
            .iter()
            .map(|seed| Exercise {
                id: Uuid::new_v4().to_string(),
                name: seed.name.to_owned(),
                muscle_group: seed.muscle_group.to_owned(),
                equipment: Some(seed.equipment.to_owned()),
                instructions: None,
            })
            .collect();

        self.store.save(EXERCISES, &exercises).await?;
        info!("Seeded {} exercises into the catalog", exercises.len());
        Ok(())
    }

    /// List exercises, optionally filtered by muscle group
    pub async fn list(&self, muscle_group: Option<&str>) -> Vec<Exercise> {
        let exercises: Vec<Exercise> = self.store.load(EXERCISES).await;
        exercises
            .into_iter()
            .filter(|exercise| muscle_group.map_or(true, |group| exercise.muscle_group == group))
            .take(LIST_CAP)
            .collect()
    }

    /// Create a new exercise with a generated id
    pub async fn create(&self, request: CreateExerciseRequest) -> AppResult<Exercise> {
        let _guard = self.store.write_lock(EXERCISES).await;
        let mut exercises: Vec<Exercise> = self.store.load(EXERCISES).await;
        let exercise = Exercise::new(request);
        exercises.push(exercise.clone());
        self.store.save(EXERCISES, &exercises).await?;
        Ok(exercise)
    }

    /// Get an exercise by id
    pub async fn get(&self, id: &str) -> AppResult<Exercise> {
        let exercises: Vec<Exercise> = self.store.load(EXERCISES).await;
        find_by_id(&exercises, id)
            .cloned()
            .ok_or_else(|| AppError::not_found("Exercise"))
    }

    /// Distinct muscle groups present in the catalog, sorted ascending
    pub async fn muscle_groups(&self) -> Vec<String> {
        let exercises: Vec<Exercise> = self.store.load(EXERCISES).await;
        let groups: BTreeSet<String> = exercises
            .into_iter()
            .map(|exercise| exercise.muscle_group)
            .collect();
        groups.into_iter().collect()
    }
}
