// ABOUTME: Route module organization for the Logbook HTTP API
// ABOUTME: Assembles workout, exercise and muscle routers and shared request helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logbook Contributors

//! Route module for the Logbook server
//!
//! Each domain module contains only route definitions and thin handlers that
//! authenticate, parse path parameters, and delegate to the service layer.

use std::sync::Arc;

use axum::async_trait;
use axum::extract::{FromRequest, Request};
use axum::http::HeaderMap;
use axum::{Json, Router};
use chrono::NaiveDate;
use logbook_core::errors::{AppError, AppResult};
use serde::de::DeserializeOwned;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::auth::CallerIdentity;
use crate::resources::ServerResources;

/// Exercise CRUD routes
pub mod exercises;
/// Muscle tag listing
pub mod muscles;
/// Workout CRUD and analytics routes
pub mod workouts;

pub use exercises::ExerciseRoutes;
pub use muscles::MuscleRoutes;
pub use workouts::WorkoutRoutes;

/// Build the full application router
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(WorkoutRoutes::routes(Arc::clone(&resources)))
        .merge(ExerciseRoutes::routes(Arc::clone(&resources)))
        .merge(MuscleRoutes::routes())
        .layer(TraceLayer::new_for_http())
}

/// JSON request body whose parse failures surface as `InvalidInput` (400)
pub(crate) struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(req, state)
            .await
            .map(|Json(value)| Self(value))
            .map_err(|rejection| AppError::invalid_input(rejection.body_text()))
    }
}

/// Resolve the caller from the `Authorization` header
pub(crate) fn authenticate(
    headers: &HeaderMap,
    resources: &ServerResources,
) -> AppResult<CallerIdentity> {
    let header = headers
        .get("authorization")
        .map(|value| {
            value
                .to_str()
                .map_err(|_| AppError::auth_invalid("Authorization header is not valid UTF-8"))
        })
        .transpose()?;

    resources.auth_manager.authenticate(header)
}

/// Parse a path segment as a resource id
pub(crate) fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::invalid_input(format!("Invalid id: {raw}")))
}

/// Parse a path segment as an ISO-8601 calendar date
pub(crate) fn parse_date(raw: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::invalid_input(format!("Invalid date (expected YYYY-MM-DD): {raw}")))
}
