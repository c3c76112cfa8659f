// ABOUTME: Exercise record logged inside a workout
// ABOUTME: Carries reps, exact-decimal weight, and reps-in-reserve for one set entry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logbook Contributors

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single logged exercise entry
///
/// `user_id` is the ownership key checked before every access. `workout_id`
/// is only a back-reference to the parent workout and grants nothing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Unique exercise id
    pub id: Uuid,
    /// Free-text exercise name
    pub name: String,
    /// Repetitions performed
    pub reps: i32,
    /// Load lifted
    pub weight: Decimal,
    /// Reps in reserve (lower is closer to failure)
    pub rir: i32,
    /// Owning user
    pub user_id: Uuid,
    /// Parent workout
    pub workout_id: Uuid,
    /// Creation time in epoch milliseconds, used to keep entries in logging order
    pub created_at: i64,
}

impl Exercise {
    /// Create a new exercise owned by `user_id` inside `workout_id`
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        reps: i32,
        weight: Decimal,
        rir: i32,
        user_id: Uuid,
        workout_id: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            reps,
            weight,
            rir,
            user_id,
            workout_id,
            created_at: Utc::now().timestamp_millis(),
        }
    }
}
