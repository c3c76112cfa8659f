// ABOUTME: Database factory and provider abstraction for backend selection
// ABOUTME: Chooses the in-memory or SQLite store from the configured database URL
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logbook Contributors

//! Database factory for creating database providers
//!
//! The [`Database`] enum implements [`DatabaseProvider`] by delegating to the
//! selected backend, so services are generic over one concrete type.

use super::memory::MemoryDatabase;
use super::sqlite::SqliteDatabase;
use super::{DatabaseProvider, DbResult};
use crate::config::environment::DatabaseUrl;
use async_trait::async_trait;
use chrono::NaiveDate;
use logbook_core::models::{Exercise, Muscle, Workout};
use tracing::info;
use uuid::Uuid;

/// Supported database types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseType {
    /// Process-local in-memory store
    Memory,
    /// `SQLite` file database
    SQLite,
}

/// Database instance wrapper that delegates to the appropriate implementation
#[derive(Clone)]
pub enum Database {
    /// In-memory backend
    Memory(MemoryDatabase),
    /// `SQLite` backend
    SQLite(SqliteDatabase),
}

impl Database {
    /// Open the backend selected by `database_url`
    ///
    /// # Errors
    ///
    /// Returns an error if the `SQLite` connection or migration fails
    pub async fn new(database_url: &DatabaseUrl) -> DbResult<Self> {
        let db = match database_url {
            DatabaseUrl::Memory => Self::Memory(MemoryDatabase::new()),
            DatabaseUrl::SQLite { .. } => {
                Self::SQLite(SqliteDatabase::new(&database_url.to_connection_string()).await?)
            }
        };
        info!("{}", db.info_summary());
        Ok(db)
    }

    /// Get a description of the database backend
    #[must_use]
    pub const fn backend_info(&self) -> &'static str {
        match self {
            Self::Memory(_) => "In-memory (process-local)",
            Self::SQLite(_) => "SQLite (Local Development)",
        }
    }

    /// Get the database type
    #[must_use]
    pub const fn database_type(&self) -> DatabaseType {
        match self {
            Self::Memory(_) => DatabaseType::Memory,
            Self::SQLite(_) => DatabaseType::SQLite,
        }
    }

    /// One-line summary for startup logs
    #[must_use]
    pub fn info_summary(&self) -> String {
        format!("Database backend: {}", self.backend_info())
    }
}

#[async_trait]
impl DatabaseProvider for Database {
    async fn migrate(&self) -> DbResult<()> {
        match self {
            Self::Memory(db) => db.migrate().await,
            Self::SQLite(db) => db.migrate().await,
        }
    }

    async fn create_workout(&self, workout: &Workout) -> DbResult<()> {
        match self {
            Self::Memory(db) => db.create_workout(workout).await,
            Self::SQLite(db) => db.create_workout(workout).await,
        }
    }

    async fn get_workout(&self, workout_id: Uuid) -> DbResult<Option<Workout>> {
        match self {
            Self::Memory(db) => db.get_workout(workout_id).await,
            Self::SQLite(db) => db.get_workout(workout_id).await,
        }
    }

    async fn get_workout_by_date_and_muscle(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        muscle: Muscle,
    ) -> DbResult<Option<Workout>> {
        match self {
            Self::Memory(db) => db.get_workout_by_date_and_muscle(user_id, date, muscle).await,
            Self::SQLite(db) => db.get_workout_by_date_and_muscle(user_id, date, muscle).await,
        }
    }

    async fn list_workouts(&self, user_id: Uuid) -> DbResult<Vec<Workout>> {
        match self {
            Self::Memory(db) => db.list_workouts(user_id).await,
            Self::SQLite(db) => db.list_workouts(user_id).await,
        }
    }

    async fn list_workouts_by_muscle(
        &self,
        user_id: Uuid,
        muscle: Muscle,
    ) -> DbResult<Vec<Workout>> {
        match self {
            Self::Memory(db) => db.list_workouts_by_muscle(user_id, muscle).await,
            Self::SQLite(db) => db.list_workouts_by_muscle(user_id, muscle).await,
        }
    }

    async fn update_workout(&self, workout: &Workout) -> DbResult<bool> {
        match self {
            Self::Memory(db) => db.update_workout(workout).await,
            Self::SQLite(db) => db.update_workout(workout).await,
        }
    }

    async fn delete_workout(&self, workout_id: Uuid) -> DbResult<bool> {
        match self {
            Self::Memory(db) => db.delete_workout(workout_id).await,
            Self::SQLite(db) => db.delete_workout(workout_id).await,
        }
    }

    async fn create_exercise(&self, exercise: &Exercise) -> DbResult<()> {
        match self {
            Self::Memory(db) => db.create_exercise(exercise).await,
            Self::SQLite(db) => db.create_exercise(exercise).await,
        }
    }

    async fn get_exercise(&self, exercise_id: Uuid) -> DbResult<Option<Exercise>> {
        match self {
            Self::Memory(db) => db.get_exercise(exercise_id).await,
            Self::SQLite(db) => db.get_exercise(exercise_id).await,
        }
    }

    async fn list_exercises(&self, user_id: Uuid) -> DbResult<Vec<Exercise>> {
        match self {
            Self::Memory(db) => db.list_exercises(user_id).await,
            Self::SQLite(db) => db.list_exercises(user_id).await,
        }
    }

    async fn update_exercise(&self, exercise: &Exercise) -> DbResult<bool> {
        match self {
            Self::Memory(db) => db.update_exercise(exercise).await,
            Self::SQLite(db) => db.update_exercise(exercise).await,
        }
    }

    async fn delete_exercise(&self, exercise_id: Uuid) -> DbResult<bool> {
        match self {
            Self::Memory(db) => db.delete_exercise(exercise_id).await,
            Self::SQLite(db) => db.delete_exercise(exercise_id).await,
        }
    }
}
