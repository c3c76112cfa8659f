// ABOUTME: Per-exercise difference record produced when comparing two workouts
// ABOUTME: Only fields that actually changed are populated and serialized
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logbook Contributors

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Differences between two same-named exercises (current minus old)
///
/// A `None` field means the two values were equal, so a zero delta is never
/// reported and never confused with "no change".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseComparator {
    /// Exercise name as logged in the current workout
    pub name: String,
    /// Change in reps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps_difference: Option<i32>,
    /// Change in weight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_difference: Option<Decimal>,
    /// Change in reps in reserve
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rir_difference: Option<i32>,
}

impl ExerciseComparator {
    /// Whether no field differed
    #[must_use]
    pub const fn is_unchanged(&self) -> bool {
        self.reps_difference.is_none()
            && self.weight_difference.is_none()
            && self.rir_difference.is_none()
    }
}
