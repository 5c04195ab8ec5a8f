// ABOUTME: Common data structures for workout tracking entities
// ABOUTME: Defines exercises, sets, workout days, splits, and sessions with serde derives
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Data models for workout tracking
//!
//! Identifiers are server-generated UUIDv4 strings; timestamps are UTC and
//! serialize as RFC 3339. Completion-tracking fields on [`WorkoutExercise`]
//! carry serde defaults so callers may omit them on create.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog exercise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Muscle group classification (e.g. "Chest", "Back")
    pub muscle_group: String,
    /// Equipment needed, if any
    #[serde(default)]
    pub equipment: Option<String>,
    /// Free-form usage instructions
    #[serde(default)]
    pub instructions: Option<String>,
}

/// Request payload for creating an exercise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateExerciseRequest {
    /// Display name
    pub name: String,
    /// Muscle group classification
    pub muscle_group: String,
    /// Equipment needed, if any
    #[serde(default)]
    pub equipment: Option<String>,
    /// Free-form usage instructions
    #[serde(default)]
    pub instructions: Option<String>,
}

impl Exercise {
    /// Build a new exercise with a generated id
    #[must_use]
    pub fn new(request: CreateExerciseRequest) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: request.name,
            muscle_group: request.muscle_group,
            equipment: request.equipment,
            instructions: request.instructions,
        }
    }
}

/// One logged set of an exercise (value type, no identity)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetEntry {
    /// Position within the exercise (1-based)
    pub set_number: u32,
    /// Weight used
    pub weight: f64,
    /// Repetitions performed
    pub reps: u32,
}

/// An exercise within a workout day or session, with completion tracking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutExercise {
    /// Reference to a catalog exercise (not enforced)
    pub exercise_id: String,
    /// Denormalized exercise name
    pub exercise_name: String,
    /// Target rep range (e.g. "8-12")
    #[serde(default)]
    pub rep_range: Option<String>,
    /// Logged sets, in order
    #[serde(default)]
    pub sets: Vec<SetEntry>,
    /// Times this exercise has been completed
    #[serde(default)]
    pub completed_count: u32,
    /// Completions required before the exercise is archived
    #[serde(default = "default_target_completions")]
    pub target_completions: u32,
    /// Sticky archived flag, latched by the completion operation
    #[serde(default)]
    pub is_archived: bool,
}

const fn default_target_completions() -> u32 {
    3
}

/// One day within a workout split
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutDay {
    /// Position within the split (1-based)
    pub day_number: u32,
    /// Display name (e.g. "Push Day")
    pub day_name: String,
    /// Muscle groups trained on this day
    pub muscle_groups: Vec<String>,
    /// Planned exercises, in order
    #[serde(default)]
    pub exercises: Vec<WorkoutExercise>,
    /// Whether the day has been completed
    #[serde(default)]
    pub completed: bool,
}

/// A named multi-day recurring training plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutSplit {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Training days per week
    pub days_per_week: u32,
    /// The plan's days, in order
    pub days: Vec<WorkoutDay>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Request payload for creating or replacing a workout split
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSplitRequest {
    /// Display name
    pub name: String,
    /// Training days per week
    pub days_per_week: u32,
    /// The plan's days, in order
    pub days: Vec<WorkoutDay>,
}

impl WorkoutSplit {
    /// Build a new split with a generated id and current timestamp
    #[must_use]
    pub fn new(request: CreateSplitRequest) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), request)
    }

    /// Build a split from a request, keeping the given id.
    ///
    /// Used by the replace operation; `created_at` is regenerated, matching
    /// the update semantics of the service.
    #[must_use]
    pub fn with_id(id: String, request: CreateSplitRequest) -> Self {
        Self {
            id,
            name: request.name,
            days_per_week: request.days_per_week,
            days: request.days,
            created_at: Utc::now(),
        }
    }
}

/// One concrete, dated performance of a split's day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutSession {
    /// Unique identifier
    pub id: String,
    /// Reference to the split this session was performed from (not enforced)
    pub split_id: String,
    /// Which day of the split was performed
    pub day_number: u32,
    /// Working copy of the day's exercises with logged sets
    pub exercises: Vec<WorkoutExercise>,
    /// Completion timestamp
    pub completed_at: DateTime<Utc>,
}

/// Request payload for creating a workout session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSessionRequest {
    /// Reference to the split this session was performed from
    pub split_id: String,
    /// Which day of the split was performed
    pub day_number: u32,
    /// Exercises with logged sets; completion fields are stored verbatim
    pub exercises: Vec<WorkoutExercise>,
}

impl WorkoutSession {
    /// Build a new session with a generated id and current timestamp
    #[must_use]
    pub fn new(request: CreateSessionRequest) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            split_id: request.split_id,
            day_number: request.day_number,
            exercises: request.exercises,
            completed_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workout_exercise_defaults() {
        let exercise: WorkoutExercise = serde_json::from_value(serde_json::json!({
            "exercise_id": "abc",
            "exercise_name": "Bench Press"
        }))
        .unwrap();
        assert!(exercise.sets.is_empty());
        assert_eq!(exercise.completed_count, 0);
        assert_eq!(exercise.target_completions, 3);
        assert!(!exercise.is_archived);
        assert!(exercise.rep_range.is_none());
    }

    #[test]
    fn test_absent_optionals_serialize_as_null() {
        let exercise = WorkoutExercise {
            exercise_id: "abc".into(),
            exercise_name: "Bench Press".into(),
            rep_range: None,
            sets: Vec::new(),
            completed_count: 0,
            target_completions: 3,
            is_archived: false,
        };
        let json = serde_json::to_value(&exercise).unwrap();
        assert!(json.get("rep_range").is_some());
        assert!(json["rep_range"].is_null());

        let catalog_entry = Exercise {
            id: "ex-1".into(),
            name: "Dips".into(),
            muscle_group: "Chest".into(),
            equipment: None,
            instructions: None,
        };
        let json = serde_json::to_value(&catalog_entry).unwrap();
        assert!(json["equipment"].is_null());
        assert!(json["instructions"].is_null());
    }

    #[test]
    fn test_workout_day_defaults() {
        let day: WorkoutDay = serde_json::from_value(serde_json::json!({
            "day_number": 1,
            "day_name": "Push Day",
            "muscle_groups": ["Chest", "Shoulders"]
        }))
        .unwrap();
        assert!(day.exercises.is_empty());
        assert!(!day.completed);
    }

    #[test]
    fn test_new_split_has_generated_id() {
        let split = WorkoutSplit::new(CreateSplitRequest {
            name: "PPL".into(),
            days_per_week: 3,
            days: Vec::new(),
        });
        assert!(!split.id.is_empty());
        // ids from consecutive creates must differ
        let other = WorkoutSplit::new(CreateSplitRequest {
            name: "PPL".into(),
            days_per_week: 3,
            days: Vec::new(),
        });
        assert_ne!(split.id, other.id);
    }

    #[test]
    fn test_with_id_preserves_id() {
        let split = WorkoutSplit::with_id(
            "fixed-id".into(),
            CreateSplitRequest {
                name: "Upper/Lower".into(),
                days_per_week: 4,
                days: Vec::new(),
            },
        );
        assert_eq!(split.id, "fixed-id");
    }

    #[test]
    fn test_session_create_keeps_caller_completion_fields() {
        let request: CreateSessionRequest = serde_json::from_value(serde_json::json!({
            "split_id": "split-1",
            "day_number": 1,
            "exercises": [{
                "exercise_id": "ex-1",
                "exercise_name": "Squats",
                "sets": [{"set_number": 1, "weight": 225.0, "reps": 5}],
                "completed_count": 2,
                "target_completions": 5,
                "is_archived": false
            }]
        }))
        .unwrap();
        let session = WorkoutSession::new(request);
        assert_eq!(session.exercises[0].completed_count, 2);
        assert_eq!(session.exercises[0].target_completions, 5);
    }
}
