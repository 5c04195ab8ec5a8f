// ABOUTME: Workout split manager providing CRUD over named multi-day training plans
// ABOUTME: Lists newest first; replace preserves the id but regenerates created_at
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Workout split management

use crate::errors::{AppError, AppResult};
use crate::models::{CreateSplitRequest, WorkoutSplit};
use crate::store::{find_by_id, JsonStore, Record, WORKOUT_SPLITS};
use std::sync::Arc;

/// List results are capped at this many records
const LIST_CAP: usize = 1000;

impl Record for WorkoutSplit {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Manager for workout splits
#[derive(Debug, Clone)]
pub struct SplitManager {
    store: Arc<JsonStore>,
}

impl SplitManager {
    /// Create a manager backed by the given store
    #[must_use]
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }

    /// List splits, newest first
    pub async fn list(&self) -> Vec<WorkoutSplit> {
        let mut splits: Vec<WorkoutSplit> = self.store.load(WORKOUT_SPLITS).await;
        splits.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        splits.truncate(LIST_CAP);
        splits
    }

    /// Create a new split with a generated id and timestamp
    pub async fn create(&self, request: CreateSplitRequest) -> AppResult<WorkoutSplit> {
        let _guard = self.store.write_lock(WORKOUT_SPLITS).await;
        let mut splits: Vec<WorkoutSplit> = self.store.load(WORKOUT_SPLITS).await;
        let split = WorkoutSplit::new(request);
        splits.push(split.clone());
        self.store.save(WORKOUT_SPLITS, &splits).await?;
        Ok(split)
    }

    /// Get a split by id
    pub async fn get(&self, id: &str) -> AppResult<WorkoutSplit> {
        let splits: Vec<WorkoutSplit> = self.store.load(WORKOUT_SPLITS).await;
        find_by_id(&splits, id)
            .cloned()
            .ok_or_else(|| AppError::not_found("Workout split"))
    }

    /// Replace a split's fields, preserving its id
    ///
    /// `created_at` is regenerated on replace; the stored record is rebuilt
    /// from the request as if freshly created under the existing id.
    pub async fn update(&self, id: &str, request: CreateSplitRequest) -> AppResult<WorkoutSplit> {
        let _guard = self.store.write_lock(WORKOUT_SPLITS).await;
        let mut splits: Vec<WorkoutSplit> = self.store.load(WORKOUT_SPLITS).await;

        let position = splits
            .iter()
            .position(|split| split.id == id)
            .ok_or_else(|| AppError::not_found("Workout split"))?;

        let updated = WorkoutSplit::with_id(id.to_owned(), request);
        splits[position] = updated.clone();
        self.store.save(WORKOUT_SPLITS, &splits).await?;
        Ok(updated)
    }

    /// Delete a split by id
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let _guard = self.store.write_lock(WORKOUT_SPLITS).await;
        let mut splits: Vec<WorkoutSplit> = self.store.load(WORKOUT_SPLITS).await;

        let before = splits.len();
        splits.retain(|split| split.id != id);
        if splits.len() == before {
            return Err(AppError::not_found("Workout split"));
        }

        self.store.save(WORKOUT_SPLITS, &splits).await
    }
}
