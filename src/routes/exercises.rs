// ABOUTME: Route handlers for the exercises REST API
// ABOUTME: Create, list, fetch, update and delete exercises owned by the caller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logbook Contributors

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use logbook_core::errors::AppError;

use super::{authenticate, parse_id, JsonBody};
use crate::resources::ServerResources;
use crate::services::{CreateExerciseRequest, UpdateExerciseRequest};

/// Exercise routes handler
pub struct ExerciseRoutes;

impl ExerciseRoutes {
    /// Create all exercise routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/exercises", get(Self::handle_list).post(Self::handle_create))
            .route(
                "/exercises/:id",
                get(Self::handle_get)
                    .patch(Self::handle_update)
                    .delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    /// Handle POST /exercises
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        JsonBody(body): JsonBody<CreateExerciseRequest>,
    ) -> Result<Response, AppError> {
        let caller = authenticate(&headers, &resources)?;
        let exercise = resources.exercises.create(caller, body).await?;
        Ok((StatusCode::CREATED, Json(exercise)).into_response())
    }

    /// Handle GET /exercises
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let caller = authenticate(&headers, &resources)?;
        let exercises = resources.exercises.list(caller).await?;
        Ok((StatusCode::OK, Json(exercises)).into_response())
    }

    /// Handle GET /exercises/:id
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let caller = authenticate(&headers, &resources)?;
        let exercise = resources
            .exercises
            .find_by_id(caller, parse_id(&id)?)
            .await?;
        Ok((StatusCode::OK, Json(exercise)).into_response())
    }

    /// Handle PATCH /exercises/:id
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<String>,
        JsonBody(body): JsonBody<UpdateExerciseRequest>,
    ) -> Result<Response, AppError> {
        let caller = authenticate(&headers, &resources)?;
        let exercise = resources
            .exercises
            .update(caller, parse_id(&id)?, body)
            .await?;
        Ok((StatusCode::OK, Json(exercise)).into_response())
    }

    /// Handle DELETE /exercises/:id
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let caller = authenticate(&headers, &resources)?;
        resources.exercises.delete(caller, parse_id(&id)?).await?;
        Ok(StatusCode::NO_CONTENT.into_response())
    }
}
