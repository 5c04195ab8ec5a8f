// ABOUTME: Static workout plan templates (push/pull/legs, upper/lower, full body)
// ABOUTME: Pure data provider with no store access
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static workout plan templates
//!
//! Three fixed plan skeletons keyed by a stable identifier. Each template
//! describes day names and muscle-group groupings only; no exercises are
//! pre-filled. Stateless and side-effect-free.

use crate::models::WorkoutExercise;
use serde::Serialize;
use std::collections::BTreeMap;

/// A template plan skeleton
#[derive(Debug, Clone, Serialize)]
pub struct WorkoutTemplate {
    /// Display name (e.g. "Push/Pull/Legs (3-Day)")
    pub name: &'static str,
    /// Training days per week
    pub days_per_week: u32,
    /// The template's days, in order
    pub days: Vec<TemplateDay>,
}

/// One day within a template plan
#[derive(Debug, Clone, Serialize)]
pub struct TemplateDay {
    /// Position within the plan (1-based)
    pub day_number: u32,
    /// Display name (e.g. "Push Day")
    pub day_name: &'static str,
    /// Muscle groups trained on this day
    pub muscle_groups: Vec<&'static str>,
    /// Always empty; the client fills exercises in when adopting a template
    pub exercises: Vec<WorkoutExercise>,
}

fn day(day_number: u32, day_name: &'static str, muscle_groups: &[&'static str]) -> TemplateDay {
    TemplateDay {
        day_number,
        day_name,
        muscle_groups: muscle_groups.to_vec(),
        exercises: Vec::new(),
    }
}

/// All available workout templates, keyed by template id
#[must_use]
pub fn all() -> BTreeMap<&'static str, WorkoutTemplate> {
    let mut templates = BTreeMap::new();

    templates.insert(
        "push_pull_legs",
        WorkoutTemplate {
            name: "Push/Pull/Legs (3-Day)",
            days_per_week: 3,
            days: vec![
                day(1, "Push Day", &["Chest", "Shoulders", "Arms"]),
                day(2, "Pull Day", &["Back", "Arms"]),
                day(3, "Leg Day", &["Legs", "Core"]),
            ],
        },
    );

    templates.insert(
        "upper_lower",
        WorkoutTemplate {
            name: "Upper/Lower (4-Day)",
            days_per_week: 4,
            days: vec![
                day(1, "Upper Body 1", &["Chest", "Back", "Shoulders", "Arms"]),
                day(2, "Lower Body 1", &["Legs", "Core"]),
                day(3, "Upper Body 2", &["Chest", "Back", "Shoulders", "Arms"]),
                day(4, "Lower Body 2", &["Legs", "Core"]),
            ],
        },
    );

    templates.insert(
        "full_body",
        WorkoutTemplate {
            name: "Full Body (3-Day)",
            days_per_week: 3,
            days: vec![
                day(1, "Full Body 1", &["Chest", "Back", "Legs"]),
                day(2, "Full Body 2", &["Shoulders", "Arms", "Core"]),
                day(3, "Full Body 3", &["Chest", "Back", "Legs"]),
            ],
        },
    );

    templates
}
