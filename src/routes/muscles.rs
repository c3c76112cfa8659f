// ABOUTME: Route handler listing the muscle group tags
// ABOUTME: Public endpoint; returns every tag with its numeric code
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logbook Contributors

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use logbook_core::models::Muscle;
use serde::Serialize;

/// One muscle tag as exposed over HTTP
#[derive(Debug, Serialize)]
pub struct MuscleResponse {
    /// Stable numeric code
    pub code: u8,
    /// Canonical name
    pub name: Muscle,
}

/// Muscle routes handler
pub struct MuscleRoutes;

impl MuscleRoutes {
    /// Create the muscle listing route
    pub fn routes() -> Router {
        Router::new().route("/muscles", get(Self::handle_list))
    }

    /// Handle GET /muscles
    async fn handle_list() -> impl IntoResponse {
        let muscles: Vec<MuscleResponse> = Muscle::ALL
            .into_iter()
            .map(|muscle| MuscleResponse {
                code: muscle.code(),
                name: muscle,
            })
            .collect();
        (StatusCode::OK, Json(muscles))
    }
}
