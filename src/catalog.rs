// ABOUTME: Predefined exercise catalog used to seed an empty exercise collection
// ABOUTME: Covers six muscle groups with seven exercises each
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Predefined exercise catalog
//!
//! Seven exercises for each of the six muscle groups (Chest, Back,
//! Shoulders, Arms, Legs, Core). The [`ExerciseManager`] inserts these into
//! an empty store at startup, assigning fresh ids.
//!
//! [`ExerciseManager`]: crate::store::exercises::ExerciseManager

/// A catalog entry before id assignment
#[derive(Debug, Clone, Copy)]
pub struct SeedExercise {
    /// Display name
    pub name: &'static str,
    /// Muscle group classification
    pub muscle_group: &'static str,
    /// Equipment needed
    pub equipment: &'static str,
}

const fn seed(name: &'static str, muscle_group: &'static str, equipment: &'static str) -> SeedExercise {
    SeedExercise {
        name,
        muscle_group,
        equipment,
    }
}

/// The predefined exercise list used to seed an empty catalog
pub const PREDEFINED_EXERCISES: &[SeedExercise] = &[
    // Chest
    seed("Bench Press", "Chest", "Barbell"),
    seed("Incline Dumbbell Press", "Chest", "Dumbbells"),
    seed("Dips", "Chest", "Bodyweight"),
    seed("Push-ups", "Chest", "Bodyweight"),
    seed("Chest Flyes", "Chest", "Dumbbells"),
    seed("Cable Crossovers", "Chest", "Cable"),
    seed("Decline Bench Press", "Chest", "Barbell"),
    // Back
    seed("Pull-ups", "Back", "Bodyweight"),
    seed("Bent-over Row", "Back", "Barbell"),
    seed("Lat Pulldown", "Back", "Cable"),
    seed("Deadlift", "Back", "Barbell"),
    seed("T-Bar Row", "Back", "T-Bar"),
    seed("Cable Rows", "Back", "Cable"),
    seed("Face Pulls", "Back", "Cable"),
    // Shoulders
    seed("Overhead Press", "Shoulders", "Barbell"),
    seed("Lateral Raises", "Shoulders", "Dumbbells"),
    seed("Rear Delt Flyes", "Shoulders", "Dumbbells"),
    seed("Arnold Press", "Shoulders", "Dumbbells"),
    seed("Upright Rows", "Shoulders", "Barbell"),
    seed("Front Raises", "Shoulders", "Dumbbells"),
    seed("Shrugs", "Shoulders", "Dumbbells"),
    // Arms
    seed("Bicep Curls", "Arms", "Dumbbells"),
    seed("Tricep Dips", "Arms", "Bodyweight"),
    seed("Hammer Curls", "Arms", "Dumbbells"),
    seed("Tricep Extensions", "Arms", "Dumbbells"),
    seed("Close-Grip Bench Press", "Arms", "Barbell"),
    seed("Cable Curls", "Arms", "Cable"),
    seed("Diamond Push-ups", "Arms", "Bodyweight"),
    // Legs
    seed("Squats", "Legs", "Barbell"),
    seed("Leg Press", "Legs", "Machine"),
    seed("Lunges", "Legs", "Dumbbells"),
    seed("Leg Curls", "Legs", "Machine"),
    seed("Calf Raises", "Legs", "Bodyweight"),
    seed("Romanian Deadlift", "Legs", "Barbell"),
    seed("Bulgarian Split Squats", "Legs", "Bodyweight"),
    // Core
    seed("Plank", "Core", "Bodyweight"),
    seed("Russian Twists", "Core", "Bodyweight"),
    seed("Bicycle Crunches", "Core", "Bodyweight"),
    seed("Mountain Climbers", "Core", "Bodyweight"),
    seed("Dead Bug", "Core", "Bodyweight"),
    seed("Hanging Leg Raises", "Core", "Pull-up Bar"),
    seed("Ab Wheel Rollouts", "Core", "Ab Wheel"),
];
