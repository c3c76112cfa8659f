// ABOUTME: Database abstraction layer for the Logbook server
// ABOUTME: Plugin architecture with in-memory and SQLite backends behind one async trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logbook Contributors

//! # Persistence
//!
//! Backends store workouts and exercises and enforce the one-workout-per
//! (muscle, user, date) rule. They perform no ownership checks; the service
//! layer does that on every fetched entity.

use async_trait::async_trait;
use chrono::NaiveDate;
use logbook_core::errors::DatabaseError;
use logbook_core::models::{Exercise, Muscle, Workout};
use uuid::Uuid;

pub mod factory;
pub mod memory;
pub mod sqlite;

/// Result type returned by every backend operation
pub type DbResult<T> = Result<T, DatabaseError>;

/// Core database abstraction trait
///
/// Workouts returned by the `get_*`/`list_*` methods carry their exercises,
/// ordered by creation time then insertion order.
#[async_trait]
pub trait DatabaseProvider: Send + Sync + Clone {
    /// Create the schema if it does not exist
    async fn migrate(&self) -> DbResult<()>;

    // ================================
    // Workouts
    // ================================

    /// Insert a workout; its `exercises` field is ignored
    ///
    /// Fails with `UniqueViolation` when the owner already has a workout for
    /// the same muscle and date.
    async fn create_workout(&self, workout: &Workout) -> DbResult<()>;

    /// Get a workout by id
    async fn get_workout(&self, workout_id: Uuid) -> DbResult<Option<Workout>>;

    /// Get the owner's workout for a date and muscle
    async fn get_workout_by_date_and_muscle(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        muscle: Muscle,
    ) -> DbResult<Option<Workout>>;

    /// All workouts of a user, oldest date first
    async fn list_workouts(&self, user_id: Uuid) -> DbResult<Vec<Workout>>;

    /// All workouts of a user for one muscle group, oldest date first
    async fn list_workouts_by_muscle(&self, user_id: Uuid, muscle: Muscle)
        -> DbResult<Vec<Workout>>;

    /// Overwrite the stored workout row; returns false if it does not exist
    async fn update_workout(&self, workout: &Workout) -> DbResult<bool>;

    /// Delete a workout and its exercises; returns false if it did not exist
    async fn delete_workout(&self, workout_id: Uuid) -> DbResult<bool>;

    // ================================
    // Exercises
    // ================================

    /// Insert an exercise under an existing workout
    async fn create_exercise(&self, exercise: &Exercise) -> DbResult<()>;

    /// Get an exercise by id
    async fn get_exercise(&self, exercise_id: Uuid) -> DbResult<Option<Exercise>>;

    /// All exercises of a user across workouts
    async fn list_exercises(&self, user_id: Uuid) -> DbResult<Vec<Exercise>>;

    /// Overwrite the stored exercise; returns false if it does not exist
    async fn update_exercise(&self, exercise: &Exercise) -> DbResult<bool>;

    /// Delete an exercise; returns false if it did not exist
    async fn delete_exercise(&self, exercise_id: Uuid) -> DbResult<bool>;
}

/// The error every backend reports for a duplicate (muscle, user, date)
pub(crate) fn duplicate_workout_error() -> DatabaseError {
    DatabaseError::UniqueViolation {
        entity: "workout".to_owned(),
        fields: "date".to_owned(),
    }
}
