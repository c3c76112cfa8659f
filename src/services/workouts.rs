// ABOUTME: Workout service with ownership-checked CRUD and analytics
// ABOUTME: Feeds fetched workouts to the volume, rep-range, comparison and uniqueness algorithms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logbook Contributors

use std::collections::HashMap;

use chrono::NaiveDate;
use logbook_analysis::{
    compare_exercises, exercises_outside_rep_range, unique_exercises, volume_load, ExerciseSide,
};
use logbook_core::errors::{AppError, AppResult};
use logbook_core::models::{Exercise, ExerciseComparator, Muscle, Workout};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use uuid::Uuid;

use super::guard;
use crate::auth::CallerIdentity;
use crate::database_plugins::DatabaseProvider;
use crate::logging::AppLogger;

/// Payload for creating a workout
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkoutRequest {
    /// Target muscle group
    pub muscle: Muscle,
    /// Calendar date of the session
    pub date: NaiveDate,
    /// Lower bound of the target rep range
    pub lower_reps_range: i32,
    /// Upper bound of the target rep range
    pub upper_reps_range: i32,
}

impl CreateWorkoutRequest {
    /// Check field bounds
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when either rep-range bound is negative
    pub fn validate(&self) -> AppResult<()> {
        if self.lower_reps_range < 0 || self.upper_reps_range < 0 {
            return Err(AppError::invalid_input(
                "Rep range bounds must not be negative",
            ));
        }
        Ok(())
    }
}

/// Payload for updating a workout; only date and muscle can change
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkoutRequest {
    /// New muscle group
    #[serde(default)]
    pub muscle: Option<Muscle>,
    /// New date
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Ownership-checked access to workouts
#[derive(Clone)]
pub struct WorkoutService<D: DatabaseProvider> {
    database: D,
}

impl<D: DatabaseProvider> WorkoutService<D> {
    /// Create a service over `database`
    #[must_use]
    pub const fn new(database: D) -> Self {
        Self { database }
    }

    /// Fetch a workout and verify the caller owns it
    async fn fetch_owned(&self, caller: CallerIdentity, workout_id: Uuid) -> AppResult<Workout> {
        let workout = self
            .database
            .get_workout(workout_id)
            .await?
            .ok_or_else(|| AppError::not_found("Workout", workout_id))?;

        guard(caller, workout.user_id, "workout", workout.id)?;
        Ok(workout)
    }

    /// Create a workout owned by the caller
    ///
    /// # Errors
    ///
    /// `InvalidInput` for bad bounds, `ResourceAlreadyExists` when the caller
    /// already has a workout for that muscle and date
    #[instrument(skip(self, request), fields(user.id = %caller.user_id))]
    pub async fn create(
        &self,
        caller: CallerIdentity,
        request: CreateWorkoutRequest,
    ) -> AppResult<Workout> {
        request.validate()?;

        let workout = Workout::new(
            request.muscle,
            request.date,
            request.lower_reps_range,
            request.upper_reps_range,
            caller.user_id,
        );
        self.database.create_workout(&workout).await?;

        AppLogger::log_resource_event(caller.user_id, "workout", workout.id, "created");
        Ok(workout)
    }

    /// All of the caller's workouts
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails
    pub async fn list(&self, caller: CallerIdentity) -> AppResult<Vec<Workout>> {
        Ok(self.database.list_workouts(caller.user_id).await?)
    }

    /// Fetch one workout
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` when absent, `PermissionDenied` when owned by someone else
    pub async fn find_by_id(&self, caller: CallerIdentity, workout_id: Uuid) -> AppResult<Workout> {
        self.fetch_owned(caller, workout_id).await
    }

    /// The caller's workout for a given date and muscle
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` when there is no such workout
    pub async fn find_by_date_and_muscle(
        &self,
        caller: CallerIdentity,
        date: NaiveDate,
        muscle: Muscle,
    ) -> AppResult<Workout> {
        let workout = self
            .database
            .get_workout_by_date_and_muscle(caller.user_id, date, muscle)
            .await?
            .ok_or_else(|| {
                AppError::not_found_matching(format!(
                    "Workout not found for date {date} and muscle {muscle}"
                ))
            })?;

        guard(caller, workout.user_id, "workout", workout.id)?;
        Ok(workout)
    }

    /// The caller's workouts for one muscle group
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails
    pub async fn list_by_muscle(
        &self,
        caller: CallerIdentity,
        muscle: Muscle,
    ) -> AppResult<Vec<Workout>> {
        Ok(self
            .database
            .list_workouts_by_muscle(caller.user_id, muscle)
            .await?)
    }

    /// Change a workout's date and/or muscle
    ///
    /// # Errors
    ///
    /// `ResourceNotFound`, `PermissionDenied`, or `ResourceAlreadyExists` when
    /// the new slot is taken
    #[instrument(skip(self, request), fields(user.id = %caller.user_id, workout.id = %workout_id))]
    pub async fn update(
        &self,
        caller: CallerIdentity,
        workout_id: Uuid,
        request: UpdateWorkoutRequest,
    ) -> AppResult<Workout> {
        let mut workout = self.fetch_owned(caller, workout_id).await?;

        if let Some(muscle) = request.muscle {
            workout.muscle = muscle;
        }
        if let Some(date) = request.date {
            workout.date = date;
        }

        if !self.database.update_workout(&workout).await? {
            return Err(AppError::not_found("Workout", workout_id));
        }

        AppLogger::log_resource_event(caller.user_id, "workout", workout.id, "updated");
        Ok(workout)
    }

    /// Delete a workout and its exercises
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` or `PermissionDenied`
    #[instrument(skip(self), fields(user.id = %caller.user_id, workout.id = %workout_id))]
    pub async fn delete(&self, caller: CallerIdentity, workout_id: Uuid) -> AppResult<()> {
        self.fetch_owned(caller, workout_id).await?;

        if !self.database.delete_workout(workout_id).await? {
            return Err(AppError::not_found("Workout", workout_id));
        }

        AppLogger::log_resource_event(caller.user_id, "workout", workout_id, "deleted");
        Ok(())
    }

    /// Total weight × reps per exercise name in one workout
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` or `PermissionDenied`
    pub async fn volume_load(
        &self,
        caller: CallerIdentity,
        workout_id: Uuid,
    ) -> AppResult<HashMap<String, Decimal>> {
        let workout = self.fetch_owned(caller, workout_id).await?;
        Ok(volume_load(&workout.exercises))
    }

    /// Exercises whose reps fall outside the workout's target range
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` or `PermissionDenied`
    pub async fn exercises_outside_reps_range(
        &self,
        caller: CallerIdentity,
        workout_id: Uuid,
    ) -> AppResult<Vec<Exercise>> {
        let workout = self.fetch_owned(caller, workout_id).await?;
        Ok(exercises_outside_rep_range(&workout))
    }

    /// Per-field deltas between same-named exercises of two workouts
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` or `PermissionDenied` for either workout; the old
    /// workout is checked first
    pub async fn compare_workouts(
        &self,
        caller: CallerIdentity,
        old_workout_id: Uuid,
        current_workout_id: Uuid,
    ) -> AppResult<Vec<ExerciseComparator>> {
        let old = self.fetch_owned(caller, old_workout_id).await?;
        let current = self.fetch_owned(caller, current_workout_id).await?;

        let comparison = compare_exercises(&old.exercises, &current.exercises);
        debug!(
            old.id = %old.id,
            current.id = %current.id,
            matched = comparison.len(),
            "Workouts compared"
        );
        Ok(comparison)
    }

    /// Exercises of the subject workout whose name does not occur in the other one
    ///
    /// `is_subject_old` says whether the subject is the earlier workout of the pair.
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` or `PermissionDenied` for either workout; the
    /// subject is checked first
    pub async fn unique_workout_exercises(
        &self,
        caller: CallerIdentity,
        subject_workout_id: Uuid,
        other_workout_id: Uuid,
        is_subject_old: bool,
    ) -> AppResult<Vec<Exercise>> {
        let subject = self.fetch_owned(caller, subject_workout_id).await?;
        let other = self.fetch_owned(caller, other_workout_id).await?;

        let result = if is_subject_old {
            unique_exercises(&subject.exercises, &other.exercises, ExerciseSide::Old)
        } else {
            unique_exercises(&other.exercises, &subject.exercises, ExerciseSide::Current)
        };
        Ok(result)
    }
}
