// ABOUTME: Route handlers for the workouts REST API
// ABOUTME: CRUD, date/muscle lookups, and analytics endpoints over caller-owned workouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logbook Contributors

//! Workout routes
//!
//! All endpoints require a bearer token. Ids in the path are checked against
//! the caller before anything is returned or changed.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use logbook_core::errors::AppError;
use logbook_core::models::Muscle;

use super::{authenticate, parse_date, parse_id, JsonBody};
use crate::resources::ServerResources;
use crate::services::{CreateWorkoutRequest, UpdateWorkoutRequest};

/// Workout routes handler
pub struct WorkoutRoutes;

impl WorkoutRoutes {
    /// Create all workout routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/workouts", get(Self::handle_list).post(Self::handle_create))
            .route(
                "/workouts/:id",
                get(Self::handle_get)
                    .patch(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .route(
                "/workouts/date/:date/:muscle",
                get(Self::handle_find_by_date_and_muscle),
            )
            .route("/workouts/muscle/:muscle", get(Self::handle_list_by_muscle))
            .route(
                "/workouts/exercisesOutsideRepRange/:id",
                get(Self::handle_outside_rep_range),
            )
            .route("/workouts/volumeLoad/:id", get(Self::handle_volume_load))
            .route(
                "/workouts/compareWorkouts/:old/:current",
                get(Self::handle_compare),
            )
            .route(
                "/workouts/uniqueOldExercises/:old/:current",
                get(Self::handle_unique_old),
            )
            .route(
                "/workouts/uniqueCurrentExercises/:current/:old",
                get(Self::handle_unique_current),
            )
            .with_state(resources)
    }

    /// Handle POST /workouts
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        JsonBody(body): JsonBody<CreateWorkoutRequest>,
    ) -> Result<Response, AppError> {
        let caller = authenticate(&headers, &resources)?;
        let workout = resources.workouts.create(caller, body).await?;
        Ok((StatusCode::CREATED, Json(workout)).into_response())
    }

    /// Handle GET /workouts
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let caller = authenticate(&headers, &resources)?;
        let workouts = resources.workouts.list(caller).await?;
        Ok((StatusCode::OK, Json(workouts)).into_response())
    }

    /// Handle GET /workouts/:id
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let caller = authenticate(&headers, &resources)?;
        let workout = resources.workouts.find_by_id(caller, parse_id(&id)?).await?;
        Ok((StatusCode::OK, Json(workout)).into_response())
    }

    /// Handle PATCH /workouts/:id
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<String>,
        JsonBody(body): JsonBody<UpdateWorkoutRequest>,
    ) -> Result<Response, AppError> {
        let caller = authenticate(&headers, &resources)?;
        let workout = resources
            .workouts
            .update(caller, parse_id(&id)?, body)
            .await?;
        Ok((StatusCode::OK, Json(workout)).into_response())
    }

    /// Handle DELETE /workouts/:id
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let caller = authenticate(&headers, &resources)?;
        resources.workouts.delete(caller, parse_id(&id)?).await?;
        Ok(StatusCode::NO_CONTENT.into_response())
    }

    /// Handle GET /workouts/date/:date/:muscle
    async fn handle_find_by_date_and_muscle(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path((date, muscle)): Path<(String, String)>,
    ) -> Result<Response, AppError> {
        let caller = authenticate(&headers, &resources)?;
        let date = parse_date(&date)?;
        let muscle: Muscle = muscle.parse()?;

        let workout = resources
            .workouts
            .find_by_date_and_muscle(caller, date, muscle)
            .await?;
        Ok((StatusCode::OK, Json(workout)).into_response())
    }

    /// Handle GET /workouts/muscle/:muscle
    async fn handle_list_by_muscle(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(muscle): Path<String>,
    ) -> Result<Response, AppError> {
        let caller = authenticate(&headers, &resources)?;
        let muscle: Muscle = muscle.parse()?;

        let workouts = resources.workouts.list_by_muscle(caller, muscle).await?;
        Ok((StatusCode::OK, Json(workouts)).into_response())
    }

    /// Handle GET /workouts/exercisesOutsideRepRange/:id
    async fn handle_outside_rep_range(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let caller = authenticate(&headers, &resources)?;
        let exercises = resources
            .workouts
            .exercises_outside_reps_range(caller, parse_id(&id)?)
            .await?;
        Ok((StatusCode::OK, Json(exercises)).into_response())
    }

    /// Handle GET /workouts/volumeLoad/:id
    async fn handle_volume_load(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let caller = authenticate(&headers, &resources)?;
        let volume = resources
            .workouts
            .volume_load(caller, parse_id(&id)?)
            .await?;
        Ok((StatusCode::OK, Json(volume)).into_response())
    }

    /// Handle GET /workouts/compareWorkouts/:old/:current
    async fn handle_compare(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path((old, current)): Path<(String, String)>,
    ) -> Result<Response, AppError> {
        let caller = authenticate(&headers, &resources)?;
        let comparison = resources
            .workouts
            .compare_workouts(caller, parse_id(&old)?, parse_id(&current)?)
            .await?;
        Ok((StatusCode::OK, Json(comparison)).into_response())
    }

    /// Handle GET /workouts/uniqueOldExercises/:old/:current
    async fn handle_unique_old(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path((old, current)): Path<(String, String)>,
    ) -> Result<Response, AppError> {
        let caller = authenticate(&headers, &resources)?;
        let exercises = resources
            .workouts
            .unique_workout_exercises(caller, parse_id(&old)?, parse_id(&current)?, true)
            .await?;
        Ok((StatusCode::OK, Json(exercises)).into_response())
    }

    /// Handle GET /workouts/uniqueCurrentExercises/:current/:old
    async fn handle_unique_current(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path((current, old)): Path<(String, String)>,
    ) -> Result<Response, AppError> {
        let caller = authenticate(&headers, &resources)?;
        let exercises = resources
            .workouts
            .unique_workout_exercises(caller, parse_id(&current)?, parse_id(&old)?, false)
            .await?;
        Ok((StatusCode::OK, Json(exercises)).into_response())
    }
}
