// ABOUTME: Exercise service with ownership-checked CRUD
// ABOUTME: Validates set values and attaches new exercises to a caller-owned workout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logbook Contributors

use logbook_core::errors::{AppError, AppResult};
use logbook_core::models::Exercise;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;

use super::guard;
use super::workouts::WorkoutService;
use crate::auth::CallerIdentity;
use crate::constants::limits::{MAX_REPS, MAX_RIR, MAX_WEIGHT};
use crate::database_plugins::DatabaseProvider;
use crate::logging::AppLogger;

fn validate_name(name: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::invalid_input("Exercise name must not be blank"));
    }
    Ok(())
}

fn validate_reps(reps: i32) -> AppResult<()> {
    if !(0..=MAX_REPS).contains(&reps) {
        return Err(AppError::invalid_input(format!(
            "Reps must be between 0 and {MAX_REPS}"
        )));
    }
    Ok(())
}

fn validate_weight(weight: Decimal) -> AppResult<()> {
    if weight < Decimal::ZERO || weight > Decimal::from(MAX_WEIGHT) {
        return Err(AppError::invalid_input(format!(
            "Weight must be between 0 and {MAX_WEIGHT}"
        )));
    }
    Ok(())
}

fn validate_rir(rir: i32) -> AppResult<()> {
    if !(0..=MAX_RIR).contains(&rir) {
        return Err(AppError::invalid_input(format!(
            "RIR must be between 0 and {MAX_RIR}"
        )));
    }
    Ok(())
}

/// Payload for logging an exercise in a workout
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExerciseRequest {
    /// Parent workout; must belong to the caller
    pub workout_id: Uuid,
    /// Exercise name
    pub name: String,
    /// Repetitions performed
    pub reps: i32,
    /// Load used
    pub weight: Decimal,
    /// Reps in reserve
    pub rir: i32,
}

impl CreateExerciseRequest {
    /// Check field bounds
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank name or out-of-range reps, weight, or RIR
    pub fn validate(&self) -> AppResult<()> {
        validate_name(&self.name)?;
        validate_reps(self.reps)?;
        validate_weight(self.weight)?;
        validate_rir(self.rir)
    }
}

/// Payload for updating an exercise; absent fields keep their value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExerciseRequest {
    /// New name
    #[serde(default)]
    pub name: Option<String>,
    /// New repetitions
    #[serde(default)]
    pub reps: Option<i32>,
    /// New load
    #[serde(default)]
    pub weight: Option<Decimal>,
    /// New reps in reserve
    #[serde(default)]
    pub rir: Option<i32>,
}

impl UpdateExerciseRequest {
    /// Check bounds of the fields that are present
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank name or out-of-range reps, weight, or RIR
    pub fn validate(&self) -> AppResult<()> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(reps) = self.reps {
            validate_reps(reps)?;
        }
        if let Some(weight) = self.weight {
            validate_weight(weight)?;
        }
        if let Some(rir) = self.rir {
            validate_rir(rir)?;
        }
        Ok(())
    }

    fn apply(self, exercise: &mut Exercise) {
        if let Some(name) = self.name {
            exercise.name = name.trim().to_owned();
        }
        if let Some(reps) = self.reps {
            exercise.reps = reps;
        }
        if let Some(weight) = self.weight {
            exercise.weight = weight;
        }
        if let Some(rir) = self.rir {
            exercise.rir = rir;
        }
    }
}

/// Ownership-checked access to exercises
#[derive(Clone)]
pub struct ExerciseService<D: DatabaseProvider> {
    database: D,
    workouts: WorkoutService<D>,
}

impl<D: DatabaseProvider> ExerciseService<D> {
    /// Create a service over `database`
    #[must_use]
    pub fn new(database: D) -> Self {
        Self {
            workouts: WorkoutService::new(database.clone()),
            database,
        }
    }

    async fn fetch_owned(&self, caller: CallerIdentity, exercise_id: Uuid) -> AppResult<Exercise> {
        let exercise = self
            .database
            .get_exercise(exercise_id)
            .await?
            .ok_or_else(|| AppError::not_found("Exercise", exercise_id))?;

        guard(caller, exercise.user_id, "exercise", exercise.id)?;
        Ok(exercise)
    }

    /// Log an exercise in one of the caller's workouts
    ///
    /// # Errors
    ///
    /// `InvalidInput` for bad values; `ResourceNotFound` or `PermissionDenied`
    /// for the parent workout
    #[instrument(
        skip(self, request),
        fields(user.id = %caller.user_id, workout.id = %request.workout_id)
    )]
    pub async fn create(
        &self,
        caller: CallerIdentity,
        request: CreateExerciseRequest,
    ) -> AppResult<Exercise> {
        request.validate()?;
        let workout = self.workouts.find_by_id(caller, request.workout_id).await?;

        let exercise = Exercise::new(
            request.name.trim(),
            request.reps,
            request.weight,
            request.rir,
            caller.user_id,
            workout.id,
        );
        self.database.create_exercise(&exercise).await?;

        AppLogger::log_resource_event(caller.user_id, "exercise", exercise.id, "created");
        Ok(exercise)
    }

    /// All of the caller's exercises
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails
    pub async fn list(&self, caller: CallerIdentity) -> AppResult<Vec<Exercise>> {
        Ok(self.database.list_exercises(caller.user_id).await?)
    }

    /// Fetch one exercise
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` or `PermissionDenied`
    pub async fn find_by_id(
        &self,
        caller: CallerIdentity,
        exercise_id: Uuid,
    ) -> AppResult<Exercise> {
        self.fetch_owned(caller, exercise_id).await
    }

    /// Change name, reps, weight, or RIR
    ///
    /// # Errors
    ///
    /// `InvalidInput`, `ResourceNotFound`, or `PermissionDenied`
    #[instrument(
        skip(self, request),
        fields(user.id = %caller.user_id, exercise.id = %exercise_id)
    )]
    pub async fn update(
        &self,
        caller: CallerIdentity,
        exercise_id: Uuid,
        request: UpdateExerciseRequest,
    ) -> AppResult<Exercise> {
        request.validate()?;
        let mut exercise = self.fetch_owned(caller, exercise_id).await?;
        request.apply(&mut exercise);

        if !self.database.update_exercise(&exercise).await? {
            return Err(AppError::not_found("Exercise", exercise_id));
        }

        AppLogger::log_resource_event(caller.user_id, "exercise", exercise.id, "updated");
        Ok(exercise)
    }

    /// Delete an exercise
    ///
    /// # Errors
    ///
    /// `ResourceNotFound` or `PermissionDenied`
    #[instrument(skip(self), fields(user.id = %caller.user_id, exercise.id = %exercise_id))]
    pub async fn delete(&self, caller: CallerIdentity, exercise_id: Uuid) -> AppResult<()> {
        self.fetch_owned(caller, exercise_id).await?;

        if !self.database.delete_exercise(exercise_id).await? {
            return Err(AppError::not_found("Exercise", exercise_id));
        }

        AppLogger::log_resource_event(caller.user_id, "exercise", exercise_id, "deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logbook_core::errors::ErrorCode;

    fn request(name: &str, reps: i32, weight: i64, rir: i32) -> CreateExerciseRequest {
        CreateExerciseRequest {
            workout_id: Uuid::new_v4(),
            name: name.to_owned(),
            reps,
            weight: Decimal::from(weight),
            rir,
        }
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(request("Bench", 0, 0, 0).validate().is_ok());
        assert!(request("Bench", 50, 1500, 10).validate().is_ok());
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        for bad in [
            request("Bench", 51, 50, 0),
            request("Bench", -1, 50, 0),
            request("Bench", 10, 1501, 0),
            request("Bench", 10, -5, 0),
            request("Bench", 10, 50, 11),
            request("   ", 10, 50, 0),
        ] {
            let err = bad.validate().unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidInput);
        }
    }

    #[test]
    fn test_update_validates_only_present_fields() {
        let update = UpdateExerciseRequest {
            reps: Some(12),
            ..UpdateExerciseRequest::default()
        };
        assert!(update.validate().is_ok());

        let update = UpdateExerciseRequest {
            rir: Some(20),
            ..UpdateExerciseRequest::default()
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn test_update_apply_keeps_absent_fields() {
        let mut exercise = Exercise::new(
            "Bench",
            10,
            Decimal::from(50),
            2,
            Uuid::new_v4(),
            Uuid::new_v4(),
        );
        UpdateExerciseRequest {
            weight: Some(Decimal::new(525, 1)),
            ..UpdateExerciseRequest::default()
        }
        .apply(&mut exercise);

        assert_eq!(exercise.name, "Bench");
        assert_eq!(exercise.reps, 10);
        assert_eq!(exercise.weight, Decimal::new(525, 1));
        assert_eq!(exercise.rir, 2);
    }

    #[test]
    fn test_request_reads_camel_case_fields() {
        let workout_id = Uuid::new_v4();
        let body = format!(
            r#"{{"workoutId":"{workout_id}","name":"Row","reps":8,"weight":"62.5","rir":1}}"#
        );
        let request: CreateExerciseRequest = serde_json::from_str(&body).unwrap();
        assert_eq!(request.workout_id, workout_id);
        assert_eq!(request.weight, Decimal::new(625, 1));

        let snake = format!(
            r#"{{"workout_id":"{workout_id}","name":"Row","reps":8,"weight":1,"rir":1}}"#
        );
        assert!(serde_json::from_str::<CreateExerciseRequest>(&snake).is_err());
    }
}
