// ABOUTME: Domain service layer between route handlers and persistence
// ABOUTME: Applies validation and the ownership guard before any data is returned or changed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logbook Contributors

//! Domain service layer
//!
//! Every id-keyed operation follows the same sequence: fetch by id, report
//! `ResourceNotFound` when absent, run the ownership guard against the
//! caller, then read, mutate, or analyse. Services are protocol-agnostic and
//! take the caller as an explicit [`CallerIdentity`](crate::auth::CallerIdentity).

use logbook_core::errors::AppResult;
use logbook_core::ownership::check_ownership;
use uuid::Uuid;

use crate::auth::CallerIdentity;
use crate::logging::AppLogger;

/// Workout CRUD, lookups, and workout analytics
pub mod workouts;

/// Exercise CRUD
pub mod exercises;

pub use exercises::{CreateExerciseRequest, ExerciseService, UpdateExerciseRequest};
pub use workouts::{CreateWorkoutRequest, UpdateWorkoutRequest, WorkoutService};

/// Run the ownership guard and record a security event when it fails
fn guard(
    caller: CallerIdentity,
    owner_id: Uuid,
    resource: &str,
    resource_id: Uuid,
) -> AppResult<()> {
    check_ownership(caller.user_id, owner_id).map(|_| ()).inspect_err(|_| {
        AppLogger::log_security_event(
            "ownership_violation",
            "medium",
            &format!("{resource} {resource_id}"),
            Some(caller.user_id),
        );
    })
}
