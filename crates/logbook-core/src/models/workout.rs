// ABOUTME: Workout model tagged by muscle group, date, and target rep range
// ABOUTME: Owns its exercises; at most one workout per (muscle, user, date)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logbook Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Exercise, Muscle};

/// A training session for one muscle group on one day
///
/// `lower_reps_range <= upper_reps_range` is expected but not enforced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    /// Unique workout id
    pub id: Uuid,
    /// Muscle group tag
    pub muscle: Muscle,
    /// Calendar date of the session
    pub date: NaiveDate,
    /// Lowest rep count considered on target
    pub lower_reps_range: i32,
    /// Highest rep count considered on target
    pub upper_reps_range: i32,
    /// Owning user
    pub user_id: Uuid,
    /// Exercises logged in this workout
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

impl Workout {
    /// Create an empty workout owned by `user_id`
    #[must_use]
    pub fn new(
        muscle: Muscle,
        date: NaiveDate,
        lower_reps_range: i32,
        upper_reps_range: i32,
        user_id: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            muscle,
            date,
            lower_reps_range,
            upper_reps_range,
            user_id,
            exercises: Vec::new(),
        }
    }

    /// Whether this workout occupies the same (muscle, user, date) slot as `other`
    #[must_use]
    pub fn same_slot(&self, other: &Self) -> bool {
        self.muscle == other.muscle && self.user_id == other.user_id && self.date == other.date
    }
}
