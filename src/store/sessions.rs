// ABOUTME: Workout session manager owning the exercise completion tracking rule
// ABOUTME: Completion increments a counter and latches the archived flag at the target
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Workout session management
//!
//! Sessions are logged performances of a split's day. Each session exercise
//! carries a completion counter: the complete operation increments it and
//! latches `is_archived` once the counter reaches `target_completions`; the
//! reset operation zeroes both. When a session contains duplicate exercise
//! ids, only the first occurrence in stored order is mutated.

use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::{CreateSessionRequest, WorkoutSession};
use crate::store::{find_by_id, JsonStore, Record, WORKOUT_SESSIONS};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// List results are capped at this many records
const LIST_CAP: usize = 1000;

impl Record for WorkoutSession {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Completion state of a session exercise after a complete or reset operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionStatus {
    /// The mutated exercise's id
    pub exercise_id: String,
    /// Completion counter after the operation
    pub completed_count: u32,
    /// Archived flag after the operation
    pub is_archived: bool,
}

/// Manager for workout sessions
#[derive(Debug, Clone)]
pub struct SessionManager {
    store: Arc<JsonStore>,
}

impl SessionManager {
    /// Create a manager backed by the given store
    #[must_use]
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }

    /// List sessions, newest first
    pub async fn list(&self) -> Vec<WorkoutSession> {
        let mut sessions: Vec<WorkoutSession> = self.store.load(WORKOUT_SESSIONS).await;
        sessions.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        sessions.truncate(LIST_CAP);
        sessions
    }

    /// Create a new session with a generated id and timestamp
    ///
    /// The exercises array is stored verbatim, including any caller-supplied
    /// completion fields.
    pub async fn create(&self, request: CreateSessionRequest) -> AppResult<WorkoutSession> {
        let _guard = self.store.write_lock(WORKOUT_SESSIONS).await;
        let mut sessions: Vec<WorkoutSession> = self.store.load(WORKOUT_SESSIONS).await;
        let session = WorkoutSession::new(request);
        sessions.push(session.clone());
        self.store.save(WORKOUT_SESSIONS, &sessions).await?;
        Ok(session)
    }

    /// Get a session by id
    pub async fn get(&self, id: &str) -> AppResult<WorkoutSession> {
        let sessions: Vec<WorkoutSession> = self.store.load(WORKOUT_SESSIONS).await;
        find_by_id(&sessions, id)
            .cloned()
            .ok_or_else(|| AppError::not_found("Workout session"))
    }

    /// Record one completion of a session exercise
    ///
    /// Increments `completed_count` and latches `is_archived` once the count
    /// reaches `target_completions`. The latch is one-way; only
    /// [`Self::reset`] clears it.
    pub async fn complete(&self, session_id: &str, exercise_id: &str) -> AppResult<CompletionStatus> {
        self.mutate_exercise(session_id, exercise_id, |exercise| {
            exercise.completed_count += 1;
            if exercise.completed_count >= exercise.target_completions {
                exercise.is_archived = true;
            }
        })
        .await
    }

    /// Reset a session exercise's completion tracking
    pub async fn reset(&self, session_id: &str, exercise_id: &str) -> AppResult<CompletionStatus> {
        self.mutate_exercise(session_id, exercise_id, |exercise| {
            exercise.completed_count = 0;
            exercise.is_archived = false;
        })
        .await
    }

    /// Apply a mutation to the first exercise matching `exercise_id` within
    /// a session and persist the whole session back
    async fn mutate_exercise(
        &self,
        session_id: &str,
        exercise_id: &str,
        mutate: impl FnOnce(&mut crate::models::WorkoutExercise),
    ) -> AppResult<CompletionStatus> {
        let _guard = self.store.write_lock(WORKOUT_SESSIONS).await;
        let mut sessions: Vec<WorkoutSession> = self.store.load(WORKOUT_SESSIONS).await;

        let session = sessions
            .iter_mut()
            .find(|session| session.id == session_id)
            .ok_or_else(|| AppError::not_found("Workout session"))?;

        let exercise = session
            .exercises
            .iter_mut()
            .find(|exercise| exercise.exercise_id == exercise_id)
            .ok_or_else(|| {
                AppError::new(ErrorCode::ResourceNotFound, "Exercise not found in session")
            })?;

        mutate(exercise);
        let status = CompletionStatus {
            exercise_id: exercise.exercise_id.clone(),
            completed_count: exercise.completed_count,
            is_archived: exercise.is_archived,
        };

        self.store.save(WORKOUT_SESSIONS, &sessions).await?;
        Ok(status)
    }
}
