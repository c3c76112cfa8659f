// ABOUTME: Integration tests for the workout service over the in-memory store
// ABOUTME: Covers CRUD, slot uniqueness, ownership enforcement, and the analytics operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logbook Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::io;
use std::sync::{Arc, Mutex};

use common::{create_test_services, create_workout, date, log_exercise, new_caller};
use logbook_core::errors::ErrorCode;
use logbook_core::models::Muscle;
use logbook_server::services::{CreateWorkoutRequest, UpdateWorkoutRequest};
use rust_decimal::Decimal;
use tracing_subscriber::fmt::MakeWriter;
use uuid::Uuid;

/// Shared buffer a scoped subscriber writes formatted events into
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[tokio::test]
async fn test_create_and_fetch_workout() {
    let (workouts, _) = create_test_services().await;
    let caller = new_caller();

    let created = create_workout(&workouts, caller, Muscle::Chest, date(2024, 3, 1), (8, 12)).await;
    assert_eq!(created.user_id, caller.user_id);
    assert!(created.exercises.is_empty());

    let fetched = workouts.find_by_id(caller, created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_duplicate_slot_is_conflict() {
    let (workouts, _) = create_test_services().await;
    let caller = new_caller();
    create_workout(&workouts, caller, Muscle::Legs, date(2024, 3, 1), (8, 12)).await;

    let err = workouts
        .create(
            caller,
            CreateWorkoutRequest {
                muscle: Muscle::Legs,
                date: date(2024, 3, 1),
                lower_reps_range: 5,
                upper_reps_range: 8,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);
}

#[tokio::test]
async fn test_same_slot_for_different_users_is_allowed() {
    let (workouts, _) = create_test_services().await;

    create_workout(&workouts, new_caller(), Muscle::Back, date(2024, 3, 1), (8, 12)).await;
    create_workout(&workouts, new_caller(), Muscle::Back, date(2024, 3, 1), (8, 12)).await;
}

#[tokio::test]
async fn test_missing_workout_is_not_found() {
    let (workouts, _) = create_test_services().await;

    let err = workouts
        .find_by_id(new_caller(), Uuid::new_v4())
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_foreign_workout_is_denied_for_every_operation() {
    let (workouts, _) = create_test_services().await;
    let owner = new_caller();
    let intruder = new_caller();
    let workout = create_workout(&workouts, owner, Muscle::Chest, date(2024, 3, 1), (8, 12)).await;

    let err = workouts.find_by_id(intruder, workout.id).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::PermissionDenied);

    let err = workouts
        .update(
            intruder,
            workout.id,
            UpdateWorkoutRequest {
                muscle: Some(Muscle::Back),
                date: None,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::PermissionDenied);

    let err = workouts.delete(intruder, workout.id).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::PermissionDenied);

    let err = workouts.volume_load(intruder, workout.id).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::PermissionDenied);

    let err = workouts
        .exercises_outside_reps_range(intruder, workout.id)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::PermissionDenied);

    // Nothing changed for the owner
    let unchanged = workouts.find_by_id(owner, workout.id).await.unwrap();
    assert_eq!(unchanged.muscle, Muscle::Chest);
}

#[tokio::test]
async fn test_ownership_violation_is_logged_once() {
    let (workouts, _) = create_test_services().await;
    let owner = new_caller();
    let intruder = new_caller();
    let workout = create_workout(&workouts, owner, Muscle::Back, date(2024, 3, 1), (8, 12)).await;

    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_max_level(tracing::Level::WARN)
        .without_time()
        .finish();
    let scope = tracing::subscriber::set_default(subscriber);
    let err = workouts.find_by_id(intruder, workout.id).await.unwrap_err();
    drop(scope);

    assert_eq!(err.code, ErrorCode::PermissionDenied);
    let output = logs.contents();
    assert_eq!(output.lines().filter(|line| line.contains("WARN")).count(), 1);
    assert!(output.contains("ownership_violation"));
    assert!(output.contains(&intruder.user_id.to_string()));
}

#[tokio::test]
async fn test_find_by_date_and_muscle() {
    let (workouts, _) = create_test_services().await;
    let caller = new_caller();
    let chest = create_workout(&workouts, caller, Muscle::Chest, date(2024, 3, 1), (8, 12)).await;
    create_workout(&workouts, caller, Muscle::Back, date(2024, 3, 1), (8, 12)).await;

    let found = workouts
        .find_by_date_and_muscle(caller, date(2024, 3, 1), Muscle::Chest)
        .await
        .unwrap();
    assert_eq!(found.id, chest.id);

    let err = workouts
        .find_by_date_and_muscle(caller, date(2024, 3, 2), Muscle::Chest)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);

    // Another user's slot is invisible to this caller
    let err = workouts
        .find_by_date_and_muscle(new_caller(), date(2024, 3, 1), Muscle::Chest)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_list_is_scoped_to_caller() {
    let (workouts, _) = create_test_services().await;
    let caller = new_caller();
    create_workout(&workouts, caller, Muscle::Chest, date(2024, 3, 1), (8, 12)).await;
    create_workout(&workouts, caller, Muscle::Chest, date(2024, 3, 4), (8, 12)).await;
    create_workout(&workouts, caller, Muscle::Legs, date(2024, 3, 2), (8, 12)).await;
    create_workout(&workouts, new_caller(), Muscle::Chest, date(2024, 3, 1), (8, 12)).await;

    assert_eq!(workouts.list(caller).await.unwrap().len(), 3);

    let chest = workouts.list_by_muscle(caller, Muscle::Chest).await.unwrap();
    assert_eq!(chest.len(), 2);
    assert!(chest.iter().all(|w| w.muscle == Muscle::Chest));
}

#[tokio::test]
async fn test_update_moves_slot() {
    let (workouts, _) = create_test_services().await;
    let caller = new_caller();
    let workout = create_workout(&workouts, caller, Muscle::Chest, date(2024, 3, 1), (8, 12)).await;

    let updated = workouts
        .update(
            caller,
            workout.id,
            UpdateWorkoutRequest {
                muscle: Some(Muscle::Shoulders),
                date: Some(date(2024, 3, 2)),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.muscle, Muscle::Shoulders);
    assert_eq!(updated.lower_reps_range, 8);

    // The old slot is free again
    create_workout(&workouts, caller, Muscle::Chest, date(2024, 3, 1), (8, 12)).await;
}

#[tokio::test]
async fn test_update_into_taken_slot_is_conflict() {
    let (workouts, _) = create_test_services().await;
    let caller = new_caller();
    create_workout(&workouts, caller, Muscle::Chest, date(2024, 3, 1), (8, 12)).await;
    let other = create_workout(&workouts, caller, Muscle::Back, date(2024, 3, 1), (8, 12)).await;

    let err = workouts
        .update(
            caller,
            other.id,
            UpdateWorkoutRequest {
                muscle: Some(Muscle::Chest),
                date: None,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);
}

#[tokio::test]
async fn test_delete_removes_workout_and_exercises() {
    let (workouts, exercises) = create_test_services().await;
    let caller = new_caller();
    let workout = create_workout(&workouts, caller, Muscle::Chest, date(2024, 3, 1), (8, 12)).await;
    let bench = log_exercise(&exercises, caller, workout.id, ("Bench", 10, 50, 1)).await;

    workouts.delete(caller, workout.id).await.unwrap();

    let err = workouts.find_by_id(caller, workout.id).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    let err = exercises.find_by_id(caller, bench.id).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_exercises_outside_reps_range() {
    let (workouts, exercises) = create_test_services().await;
    let caller = new_caller();
    let workout = create_workout(&workouts, caller, Muscle::Chest, date(2024, 3, 1), (8, 12)).await;
    log_exercise(&exercises, caller, workout.id, ("Bench", 10, 50, 1)).await;
    let squat = log_exercise(&exercises, caller, workout.id, ("Squat", 15, 80, 2)).await;

    let outside = workouts
        .exercises_outside_reps_range(caller, workout.id)
        .await
        .unwrap();
    assert_eq!(outside, vec![squat]);
}

#[tokio::test]
async fn test_volume_load_sums_per_name() {
    let (workouts, exercises) = create_test_services().await;
    let caller = new_caller();
    let workout =
        create_workout(&workouts, caller, Muscle::FullBody, date(2024, 3, 1), (5, 10)).await;
    log_exercise(&exercises, caller, workout.id, ("Bench", 10, 50, 1)).await;
    log_exercise(&exercises, caller, workout.id, ("Bench", 5, 50, 1)).await;
    log_exercise(&exercises, caller, workout.id, ("Squat", 8, 100, 1)).await;

    let volume = workouts.volume_load(caller, workout.id).await.unwrap();
    assert_eq!(volume.len(), 2);
    assert_eq!(volume["Bench"], Decimal::from(750));
    assert_eq!(volume["Squat"], Decimal::from(800));
}

#[tokio::test]
async fn test_volume_load_of_empty_workout_is_empty() {
    let (workouts, _) = create_test_services().await;
    let caller = new_caller();
    let workout =
        create_workout(&workouts, caller, Muscle::Calves, date(2024, 3, 1), (10, 15)).await;

    assert!(workouts.volume_load(caller, workout.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_compare_workouts_reports_deltas() {
    let (workouts, exercises) = create_test_services().await;
    let caller = new_caller();
    let old = create_workout(&workouts, caller, Muscle::Chest, date(2024, 3, 1), (8, 12)).await;
    let current = create_workout(&workouts, caller, Muscle::Chest, date(2024, 3, 8), (8, 12)).await;
    log_exercise(&exercises, caller, old.id, ("Bench", 10, 50, 0)).await;
    log_exercise(&exercises, caller, current.id, ("Bench", 12, 55, 1)).await;

    let comparison = workouts
        .compare_workouts(caller, old.id, current.id)
        .await
        .unwrap();
    assert_eq!(comparison.len(), 1);
    assert_eq!(comparison[0].name, "Bench");
    assert_eq!(comparison[0].reps_difference, Some(2));
    assert_eq!(comparison[0].weight_difference, Some(Decimal::from(5)));
    assert_eq!(comparison[0].rir_difference, Some(1));
}

#[tokio::test]
async fn test_disjoint_workouts_compare_empty_and_are_fully_unique() {
    let (workouts, exercises) = create_test_services().await;
    let caller = new_caller();
    let old = create_workout(&workouts, caller, Muscle::Chest, date(2024, 3, 1), (8, 12)).await;
    let current = create_workout(&workouts, caller, Muscle::Legs, date(2024, 3, 2), (8, 12)).await;
    let bench = log_exercise(&exercises, caller, old.id, ("Bench", 10, 50, 0)).await;
    let squat = log_exercise(&exercises, caller, current.id, ("Squat", 8, 100, 2)).await;

    let comparison = workouts
        .compare_workouts(caller, old.id, current.id)
        .await
        .unwrap();
    assert!(comparison.is_empty());

    let unique_old = workouts
        .unique_workout_exercises(caller, old.id, current.id, true)
        .await
        .unwrap();
    assert_eq!(unique_old, vec![bench]);

    let unique_current = workouts
        .unique_workout_exercises(caller, current.id, old.id, false)
        .await
        .unwrap();
    assert_eq!(unique_current, vec![squat]);
}

#[tokio::test]
async fn test_unique_exercises_ignore_name_case() {
    let (workouts, exercises) = create_test_services().await;
    let caller = new_caller();
    let old = create_workout(&workouts, caller, Muscle::Back, date(2024, 3, 1), (8, 12)).await;
    let current = create_workout(&workouts, caller, Muscle::Back, date(2024, 3, 8), (8, 12)).await;
    log_exercise(&exercises, caller, old.id, ("Deadlift", 5, 140, 2)).await;
    let rows = log_exercise(&exercises, caller, old.id, ("Rows", 10, 60, 2)).await;
    log_exercise(&exercises, caller, current.id, ("deadlift", 5, 145, 1)).await;

    let unique_old = workouts
        .unique_workout_exercises(caller, old.id, current.id, true)
        .await
        .unwrap();
    assert_eq!(unique_old, vec![rows]);

    let unique_current = workouts
        .unique_workout_exercises(caller, current.id, old.id, false)
        .await
        .unwrap();
    assert!(unique_current.is_empty());
}

#[tokio::test]
async fn test_pair_operations_check_both_workouts() {
    let (workouts, _) = create_test_services().await;
    let owner = new_caller();
    let intruder = new_caller();
    let mine = create_workout(&workouts, intruder, Muscle::Chest, date(2024, 3, 1), (8, 12)).await;
    let theirs = create_workout(&workouts, owner, Muscle::Chest, date(2024, 3, 1), (8, 12)).await;

    let err = workouts
        .compare_workouts(intruder, mine.id, theirs.id)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::PermissionDenied);

    let err = workouts
        .unique_workout_exercises(intruder, mine.id, theirs.id, true)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::PermissionDenied);

    let err = workouts
        .compare_workouts(intruder, mine.id, Uuid::new_v4())
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}
