// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, in-memory resources, caller identities and bearer tokens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logbook Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `logbook_server`

use std::sync::{Arc, Once};

use chrono::NaiveDate;
use logbook_core::models::{Exercise, Muscle, Workout};
use logbook_server::{
    auth::{AuthManager, CallerIdentity},
    config::environment::{DatabaseUrl, ServerConfig},
    database_plugins::factory::Database,
    resources::ServerResources,
    services::{CreateExerciseRequest, CreateWorkoutRequest, ExerciseService, WorkoutService},
};
use rust_decimal::Decimal;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Signing secret shared by every test token
pub const TEST_JWT_SECRET: &[u8] = b"logbook-test-secret-with-enough-entropy";

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard in-memory database
pub async fn create_test_database() -> Database {
    init_test_logging();
    Database::new(&DatabaseUrl::Memory).await.unwrap()
}

/// Authentication manager signing with [`TEST_JWT_SECRET`]
pub fn create_test_auth_manager() -> AuthManager {
    AuthManager::new(TEST_JWT_SECRET, 24)
}

/// Full resource container over a fresh in-memory database
pub async fn create_test_resources() -> Arc<ServerResources> {
    let database = create_test_database().await;
    Arc::new(ServerResources::new(
        database,
        create_test_auth_manager(),
        Arc::new(ServerConfig::default()),
    ))
}

/// Workout and exercise services sharing one in-memory database
pub async fn create_test_services() -> (WorkoutService<Database>, ExerciseService<Database>) {
    let database = create_test_database().await;
    (
        WorkoutService::new(database.clone()),
        ExerciseService::new(database),
    )
}

/// A fresh caller identity
pub fn new_caller() -> CallerIdentity {
    CallerIdentity::new(Uuid::new_v4())
}

/// `Authorization` header value for `caller`
pub fn bearer_for(resources: &ServerResources, caller: CallerIdentity) -> String {
    let token = resources
        .auth_manager
        .generate_token(caller.user_id)
        .unwrap();
    format!("Bearer {token}")
}

/// Calendar date shorthand
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Create a workout with the given slot and rep range
pub async fn create_workout(
    workouts: &WorkoutService<Database>,
    caller: CallerIdentity,
    muscle: Muscle,
    on: NaiveDate,
    range: (i32, i32),
) -> Workout {
    workouts
        .create(
            caller,
            CreateWorkoutRequest {
                muscle,
                date: on,
                lower_reps_range: range.0,
                upper_reps_range: range.1,
            },
        )
        .await
        .unwrap()
}

/// Log an exercise in `workout_id`
pub async fn log_exercise(
    exercises: &ExerciseService<Database>,
    caller: CallerIdentity,
    workout_id: Uuid,
    (name, reps, weight, rir): (&str, i32, i64, i32),
) -> Exercise {
    exercises
        .create(
            caller,
            CreateExerciseRequest {
                workout_id,
                name: name.to_owned(),
                reps,
                weight: Decimal::from(weight),
                rir,
            },
        )
        .await
        .unwrap()
}
