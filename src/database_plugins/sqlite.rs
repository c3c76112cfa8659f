// ABOUTME: SQLite database backend built on an sqlx connection pool
// ABOUTME: Creates the workouts/exercises schema and maps rows to domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logbook Contributors

use super::{duplicate_workout_error, DatabaseProvider, DbResult};
use async_trait::async_trait;
use chrono::NaiveDate;
use logbook_core::errors::DatabaseError;
use logbook_core::models::{Exercise, Muscle, Workout};
use rust_decimal::Decimal;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use std::str::FromStr;
use tracing::{debug, info};
use uuid::Uuid;

const WORKOUT_COLUMNS: &str =
    "id, user_id, muscle, date, lower_reps_range, upper_reps_range";

const EXERCISE_COLUMNS: &str = "id, workout_id, user_id, name, reps, weight, rir, created_at";

/// SQLite database implementation
#[derive(Clone)]
pub struct SqliteDatabase {
    pool: SqlitePool,
}

impl SqliteDatabase {
    /// Connect to `database_url` (creating the file if needed) and migrate
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the connection fails, or the
    /// schema cannot be created
    pub async fn new(database_url: &str) -> DbResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        // Every connection to `:memory:` opens a separate database
        let max_connections = if database_url.contains(":memory:") {
            1
        } else {
            5
        };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        let db = Self { pool };
        db.migrate().await?;
        info!(url = %database_url, "SQLite database ready");
        Ok(db)
    }

    async fn exercises_of(&self, workout_id: Uuid) -> DbResult<Vec<Exercise>> {
        let rows = sqlx::query(&format!(
            "SELECT {EXERCISE_COLUMNS} FROM exercises
             WHERE workout_id = $1 ORDER BY created_at, rowid"
        ))
        .bind(workout_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_exercise).collect()
    }

    async fn hydrate(&self, row: &SqliteRow) -> DbResult<Workout> {
        let mut workout = row_to_workout(row)?;
        workout.exercises = self.exercises_of(workout.id).await?;
        Ok(workout)
    }

    async fn hydrate_all(&self, rows: &[SqliteRow]) -> DbResult<Vec<Workout>> {
        let mut workouts = Vec::with_capacity(rows.len());
        for row in rows {
            workouts.push(self.hydrate(row).await?);
        }
        Ok(workouts)
    }
}

/// Writes to `workouts` can only violate the (muscle, user, date) constraint
fn map_workout_write_error(error: sqlx::Error) -> DatabaseError {
    match DatabaseError::from(error) {
        DatabaseError::UniqueViolation { .. } => duplicate_workout_error(),
        other => other,
    }
}

fn parse_uuid(row: &SqliteRow, column: &str) -> DbResult<Uuid> {
    let raw: String = row.try_get(column)?;
    Uuid::parse_str(&raw).map_err(|e| DatabaseError::InvalidData {
        field: column.to_owned(),
        reason: e.to_string(),
    })
}

fn row_to_workout(row: &SqliteRow) -> DbResult<Workout> {
    let muscle_str: String = row.try_get("muscle")?;
    let muscle = muscle_str
        .parse::<Muscle>()
        .map_err(|e| DatabaseError::InvalidData {
            field: "muscle".to_owned(),
            reason: e.message,
        })?;
    let date: NaiveDate = row.try_get("date")?;

    Ok(Workout {
        id: parse_uuid(row, "id")?,
        muscle,
        date,
        lower_reps_range: row.try_get("lower_reps_range")?,
        upper_reps_range: row.try_get("upper_reps_range")?,
        user_id: parse_uuid(row, "user_id")?,
        exercises: Vec::new(),
    })
}

fn row_to_exercise(row: &SqliteRow) -> DbResult<Exercise> {
    let weight_str: String = row.try_get("weight")?;
    let weight = Decimal::from_str(&weight_str).map_err(|e| DatabaseError::InvalidData {
        field: "weight".to_owned(),
        reason: e.to_string(),
    })?;

    Ok(Exercise {
        id: parse_uuid(row, "id")?,
        name: row.try_get("name")?,
        reps: row.try_get("reps")?,
        weight,
        rir: row.try_get("rir")?,
        user_id: parse_uuid(row, "user_id")?,
        workout_id: parse_uuid(row, "workout_id")?,
        created_at: row.try_get("created_at")?,
    })
}

#[async_trait]
impl DatabaseProvider for SqliteDatabase {
    async fn migrate(&self) -> DbResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS workouts (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                muscle TEXT NOT NULL,
                date TEXT NOT NULL,
                lower_reps_range INTEGER NOT NULL,
                upper_reps_range INTEGER NOT NULL,
                UNIQUE (muscle, user_id, date)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS exercises (
                id TEXT PRIMARY KEY,
                workout_id TEXT NOT NULL REFERENCES workouts(id) ON DELETE CASCADE,
                user_id TEXT NOT NULL,
                name TEXT NOT NULL,
                reps INTEGER NOT NULL,
                weight TEXT NOT NULL,
                rir INTEGER NOT NULL,
                created_at INTEGER NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_workouts_user ON workouts(user_id)")
            .execute(&self.pool)
            .await?;
        sqlx::query("CREATE INDEX IF NOT EXISTS idx_exercises_workout ON exercises(workout_id)")
            .execute(&self.pool)
            .await?;
        sqlx::query("CREATE INDEX IF NOT EXISTS idx_exercises_user ON exercises(user_id)")
            .execute(&self.pool)
            .await?;

        debug!("SQLite schema migrated");
        Ok(())
    }

    async fn create_workout(&self, workout: &Workout) -> DbResult<()> {
        sqlx::query(
            r"
            INSERT INTO workouts (id, user_id, muscle, date, lower_reps_range, upper_reps_range)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(workout.id.to_string())
        .bind(workout.user_id.to_string())
        .bind(workout.muscle.as_str())
        .bind(workout.date)
        .bind(workout.lower_reps_range)
        .bind(workout.upper_reps_range)
        .execute(&self.pool)
        .await
        .map_err(map_workout_write_error)?;

        Ok(())
    }

    async fn get_workout(&self, workout_id: Uuid) -> DbResult<Option<Workout>> {
        let row = sqlx::query(&format!(
            "SELECT {WORKOUT_COLUMNS} FROM workouts WHERE id = $1"
        ))
        .bind(workout_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(self.hydrate(&row).await?)),
            None => Ok(None),
        }
    }

    async fn get_workout_by_date_and_muscle(
        &self,
        user_id: Uuid,
        date: NaiveDate,
        muscle: Muscle,
    ) -> DbResult<Option<Workout>> {
        let row = sqlx::query(&format!(
            "SELECT {WORKOUT_COLUMNS} FROM workouts
             WHERE user_id = $1 AND date = $2 AND muscle = $3"
        ))
        .bind(user_id.to_string())
        .bind(date)
        .bind(muscle.as_str())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(self.hydrate(&row).await?)),
            None => Ok(None),
        }
    }

    async fn list_workouts(&self, user_id: Uuid) -> DbResult<Vec<Workout>> {
        let rows = sqlx::query(&format!(
            "SELECT {WORKOUT_COLUMNS} FROM workouts WHERE user_id = $1 ORDER BY date, muscle"
        ))
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        self.hydrate_all(&rows).await
    }

    async fn list_workouts_by_muscle(
        &self,
        user_id: Uuid,
        muscle: Muscle,
    ) -> DbResult<Vec<Workout>> {
        let rows = sqlx::query(&format!(
            "SELECT {WORKOUT_COLUMNS} FROM workouts
             WHERE user_id = $1 AND muscle = $2 ORDER BY date"
        ))
        .bind(user_id.to_string())
        .bind(muscle.as_str())
        .fetch_all(&self.pool)
        .await?;

        self.hydrate_all(&rows).await
    }

    async fn update_workout(&self, workout: &Workout) -> DbResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE workouts
            SET user_id = $1, muscle = $2, date = $3, lower_reps_range = $4, upper_reps_range = $5
            WHERE id = $6
            ",
        )
        .bind(workout.user_id.to_string())
        .bind(workout.muscle.as_str())
        .bind(workout.date)
        .bind(workout.lower_reps_range)
        .bind(workout.upper_reps_range)
        .bind(workout.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(map_workout_write_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_workout(&self, workout_id: Uuid) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = $1")
            .bind(workout_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn create_exercise(&self, exercise: &Exercise) -> DbResult<()> {
        sqlx::query(
            r"
            INSERT INTO exercises (id, workout_id, user_id, name, reps, weight, rir, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(exercise.id.to_string())
        .bind(exercise.workout_id.to_string())
        .bind(exercise.user_id.to_string())
        .bind(&exercise.name)
        .bind(exercise.reps)
        .bind(exercise.weight.to_string())
        .bind(exercise.rir)
        .bind(exercise.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_exercise(&self, exercise_id: Uuid) -> DbResult<Option<Exercise>> {
        let row = sqlx::query(&format!(
            "SELECT {EXERCISE_COLUMNS} FROM exercises WHERE id = $1"
        ))
        .bind(exercise_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_exercise).transpose()
    }

    async fn list_exercises(&self, user_id: Uuid) -> DbResult<Vec<Exercise>> {
        let rows = sqlx::query(&format!(
            "SELECT {EXERCISE_COLUMNS} FROM exercises WHERE user_id = $1 ORDER BY created_at, rowid"
        ))
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_exercise).collect()
    }

    async fn update_exercise(&self, exercise: &Exercise) -> DbResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE exercises
            SET name = $1, reps = $2, weight = $3, rir = $4
            WHERE id = $5
            ",
        )
        .bind(&exercise.name)
        .bind(exercise.reps)
        .bind(exercise.weight.to_string())
        .bind(exercise.rir)
        .bind(exercise.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_exercise(&self, exercise_id: Uuid) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM exercises WHERE id = $1")
            .bind(exercise_id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
