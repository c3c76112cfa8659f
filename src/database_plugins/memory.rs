// ABOUTME: In-memory database backend for development and tests
// ABOUTME: Keeps workouts and exercises in RwLock-guarded hash maps with a unique slot index
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logbook Contributors

use super::{duplicate_workout_error, DatabaseProvider, DbResult};
use async_trait::async_trait;
use chrono::NaiveDate;
use logbook_core::errors::DatabaseError;
use logbook_core::models::{Exercise, Muscle, Workout};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Unique key of a workout: one per user, muscle and date
type WorkoutSlot = (Uuid, Muscle, NaiveDate);

/// Stored exercise plus its insertion sequence, used to break `created_at` ties
#[derive(Debug, Clone)]
struct ExerciseEntry {
    seq: u64,
    exercise: Exercise,
}

#[derive(Debug, Default)]
struct Tables {
    workouts: HashMap<Uuid, Workout>,
    slots: HashMap<WorkoutSlot, Uuid>,
    exercises: HashMap<Uuid, ExerciseEntry>,
    next_seq: u64,
}

impl Tables {
    fn exercises_of(&self, workout_id: Uuid) -> Vec<Exercise> {
        let mut entries: Vec<&ExerciseEntry> = self
            .exercises
            .values()
            .filter(|entry| entry.exercise.workout_id == workout_id)
            .collect();
        entries.sort_by_key(|entry| (entry.exercise.created_at, entry.seq));
        entries.into_iter().map(|e| e.exercise.clone()).collect()
    }

    fn hydrate(&self, workout: &Workout) -> Workout {
        let mut hydrated = workout.clone();
        hydrated.exercises = self.exercises_of(workout.id);
        hydrated
    }

    fn workouts_where(&self, predicate: impl Fn(&Workout) -> bool) -> Vec<Workout> {
        let mut result: Vec<Workout> = self
            .workouts
            .values()
            .filter(|w| predicate(w))
            .map(|w| self.hydrate(w))
            .collect();
        result.sort_by_key(|w| (w.date, w.muscle));
        result
    }
}

fn slot_of(workout: &Workout) -> WorkoutSlot {
    (workout.user_id, workout.muscle, workout.date)
}

/// Process-local store; clones share the same tables
#[derive(Clone, Default)]
pub struct MemoryDatabase {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryDatabase {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DatabaseProvider for MemoryDatabase {
    async fn migrate(&self) -> DbResult<()> {
        Ok(())
    }

    async fn create_workout(&self, workout: &Workout) -> DbResult<()> {
        let mut tables = self.tables.write().await;
        let slot = slot_of(workout);
        if tables.slots.contains_key(&slot) {
            return Err(duplicate_workout_error());
        }

        let mut stored = workout.clone();
        stored.exercises.clear();
        tables.slots.insert(slot, stored.id);
        tables.workouts.insert(stored.id, stored);
        Ok(())
    }

    async fn get_workout(&self, workout_id: Uuid) -> DbResult<Option<Workout>> {
        let tables = self.tables.read().await;
        Ok(tables.workouts.get(&workout_id).map(|w| tables.hydrate(w)))
    }

    async fn get_workout_by_date_and_muscle(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        muscle: Muscle,
    ) -> DbResult<Option<Workout>> {
        let tables = self.tables.read().await;
        Ok(tables
            .slots
            .get(&(user_id, muscle, date))
            .and_then(|id| tables.workouts.get(id))
            .map(|w| tables.hydrate(w)))
    }

    async fn list_workouts(&self, user_id: Uuid) -> DbResult<Vec<Workout>> {
        let tables = self.tables.read().await;
        Ok(tables.workouts_where(|w| w.user_id == user_id))
    }

    async fn list_workouts_by_muscle(
        &self,
        user_id: Uuid,
        muscle: Muscle,
    ) -> DbResult<Vec<Workout>> {
        let tables = self.tables.read().await;
        Ok(tables.workouts_where(|w| w.user_id == user_id && w.muscle == muscle))
    }

    async fn update_workout(&self, workout: &Workout) -> DbResult<bool> {
        let mut tables = self.tables.write().await;
        let Some(existing) = tables.workouts.get(&workout.id) else {
            return Ok(false);
        };

        let old_slot = slot_of(existing);
        let new_slot = slot_of(workout);
        if old_slot != new_slot {
            if tables.slots.contains_key(&new_slot) {
                return Err(duplicate_workout_error());
            }
            tables.slots.remove(&old_slot);
            tables.slots.insert(new_slot, workout.id);
        }

        let mut stored = workout.clone();
        stored.exercises.clear();
        tables.workouts.insert(stored.id, stored);
        Ok(true)
    }

    async fn delete_workout(&self, workout_id: Uuid) -> DbResult<bool> {
        let mut tables = self.tables.write().await;
        let Some(removed) = tables.workouts.remove(&workout_id) else {
            return Ok(false);
        };

        tables.slots.remove(&slot_of(&removed));
        tables
            .exercises
            .retain(|_, entry| entry.exercise.workout_id != workout_id);
        Ok(true)
    }

    async fn create_exercise(&self, exercise: &Exercise) -> DbResult<()> {
        let mut tables = self.tables.write().await;
        if !tables.workouts.contains_key(&exercise.workout_id) {
            return Err(DatabaseError::QueryError {
                context: format!(
                    "exercise references missing workout {}",
                    exercise.workout_id
                ),
            });
        }
        if tables.exercises.contains_key(&exercise.id) {
            return Err(DatabaseError::UniqueViolation {
                entity: "exercise".to_owned(),
                fields: "id".to_owned(),
            });
        }

        let seq = tables.next_seq;
        tables.next_seq += 1;
        tables.exercises.insert(
            exercise.id,
            ExerciseEntry {
                seq,
                exercise: exercise.clone(),
            },
        );
        Ok(())
    }

    async fn get_exercise(&self, exercise_id: Uuid) -> DbResult<Option<Exercise>> {
        let tables = self.tables.read().await;
        Ok(tables
            .exercises
            .get(&exercise_id)
            .map(|entry| entry.exercise.clone()))
    }

    async fn list_exercises(&self, user_id: Uuid) -> DbResult<Vec<Exercise>> {
        let tables = self.tables.read().await;
        let mut entries: Vec<&ExerciseEntry> = tables
            .exercises
            .values()
            .filter(|entry| entry.exercise.user_id == user_id)
            .collect();
        entries.sort_by_key(|entry| (entry.exercise.created_at, entry.seq));
        Ok(entries.into_iter().map(|e| e.exercise.clone()).collect())
    }

    async fn update_exercise(&self, exercise: &Exercise) -> DbResult<bool> {
        let mut tables = self.tables.write().await;
        match tables.exercises.get_mut(&exercise.id) {
            Some(entry) => {
                entry.exercise = exercise.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_exercise(&self, exercise_id: Uuid) -> DbResult<bool> {
        let mut tables = self.tables.write().await;
        Ok(tables.exercises.remove(&exercise_id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn workout(user_id: Uuid, muscle: Muscle, day: u32) -> Workout {
        let date = NaiveDate::from_ymd_opt(2024, 3, day).unwrap();
        Workout::new(muscle, date, 8, 12, user_id)
    }

    #[tokio::test]
    async fn test_duplicate_slot_is_rejected() {
        let db = MemoryDatabase::new();
        let user = Uuid::new_v4();
        db.create_workout(&workout(user, Muscle::Chest, 1))
            .await
            .unwrap();

        let err = db
            .create_workout(&workout(user, Muscle::Chest, 1))
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::UniqueViolation { .. }));

        // Same slot for another user is fine
        db.create_workout(&workout(Uuid::new_v4(), Muscle::Chest, 1))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_exercises_keep_insertion_order_within_same_millisecond() {
        let db = MemoryDatabase::new();
        let user = Uuid::new_v4();
        let w = workout(user, Muscle::Legs, 2);
        db.create_workout(&w).await.unwrap();

        for name in ["Squat", "Lunge", "Press"] {
            let mut e = Exercise::new(name, 10, Decimal::from(50), 1, user, w.id);
            e.created_at = 1_000;
            db.create_exercise(&e).await.unwrap();
        }

        let stored = db.get_workout(w.id).await.unwrap().unwrap();
        let names: Vec<_> = stored.exercises.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Squat", "Lunge", "Press"]);
    }

    #[tokio::test]
    async fn test_delete_workout_cascades() {
        let db = MemoryDatabase::new();
        let user = Uuid::new_v4();
        let w = workout(user, Muscle::Back, 3);
        db.create_workout(&w).await.unwrap();
        let e = Exercise::new("Row", 10, Decimal::from(60), 2, user, w.id);
        db.create_exercise(&e).await.unwrap();

        assert!(db.delete_workout(w.id).await.unwrap());
        assert!(db.get_exercise(e.id).await.unwrap().is_none());
        assert!(!db.delete_workout(w.id).await.unwrap());

        // The slot is free again
        db.create_workout(&workout(user, Muscle::Back, 3))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_update_moves_slot() {
        let db = MemoryDatabase::new();
        let user = Uuid::new_v4();
        let mut w = workout(user, Muscle::Chest, 4);
        db.create_workout(&w).await.unwrap();
        db.create_workout(&workout(user, Muscle::Chest, 5))
            .await
            .unwrap();

        w.date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let err = db.update_workout(&w).await.unwrap_err();
        assert!(matches!(err, DatabaseError::UniqueViolation { .. }));

        w.date = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
        assert!(db.update_workout(&w).await.unwrap());
        let vacated = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        assert!(db
            .get_workout_by_date_and_muscle(user, vacated, Muscle::Chest)
            .await
            .unwrap()
            .is_none());
        assert!(db
            .get_workout_by_date_and_muscle(user, w.date, Muscle::Chest)
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn test_exercise_requires_existing_workout() {
        let db = MemoryDatabase::new();
        let e = Exercise::new("Curl", 10, Decimal::from(10), 0, Uuid::new_v4(), Uuid::new_v4());
        assert!(db.create_exercise(&e).await.is_err());
    }
}
