// ABOUTME: Set difference of exercise names between two workouts
// ABOUTME: Returns the subject side's exercises whose name never appears on the other side
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logbook Contributors

use std::collections::HashSet;

use logbook_core::models::Exercise;
use serde::{Deserialize, Serialize};

/// Which of the two compared workouts is the subject of a set difference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseSide {
    /// The earlier workout
    Old,
    /// The later workout
    Current,
}

impl ExerciseSide {
    /// The opposite side
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Old => Self::Current,
            Self::Current => Self::Old,
        }
    }
}

/// Lower-cased names that appear in both lists
#[must_use]
pub fn common_exercise_names(old: &[Exercise], current: &[Exercise]) -> HashSet<String> {
    let old_names: HashSet<String> = old.iter().map(|e| e.name.to_lowercase()).collect();
    current
        .iter()
        .map(|e| e.name.to_lowercase())
        .filter(|name| old_names.contains(name))
        .collect()
}

/// Exercises of the `subject` side whose name (case-insensitive) is absent from the other side
///
/// Order is preserved and same-named duplicates on the subject side are all
/// kept. Calling with `subject.other()` gives the complementary result.
#[must_use]
pub fn unique_exercises(
    old: &[Exercise],
    current: &[Exercise],
    subject: ExerciseSide,
) -> Vec<Exercise> {
    let common = common_exercise_names(old, current);
    let subject_exercises = match subject {
        ExerciseSide::Old => old,
        ExerciseSide::Current => current,
    };

    subject_exercises
        .iter()
        .filter(|exercise| !common.contains(&exercise.name.to_lowercase()))
        .cloned()
        .collect()
}
