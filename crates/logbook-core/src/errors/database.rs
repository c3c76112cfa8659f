// ABOUTME: Structured error types for database operations
// ABOUTME: Storage providers return these; services convert them into AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logbook Contributors

use thiserror::Error;

/// Errors raised by a database provider
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A unique constraint rejected the write
    #[error("A {entity} with this {fields} already exists")]
    UniqueViolation {
        /// Entity being written (e.g. "workout")
        entity: String,
        /// Human-readable list of the constrained fields
        fields: String,
    },

    /// Query execution failed
    #[error("Database query failed: {context}")]
    QueryError {
        /// Description of what was being attempted
        context: String,
    },

    /// Could not connect to or migrate the backend
    #[error("Database connection failed: {0}")]
    ConnectionError(String),

    /// A stored value could not be decoded into a domain type
    #[error("Invalid stored value for {field}: {reason}")]
    InvalidData {
        /// Column or field name
        field: String,
        /// Why decoding failed
        reason: String,
    },
}

#[cfg(feature = "database-errors")]
impl From<sqlx::Error> for DatabaseError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::Database(ref db_error) if db_error.is_unique_violation() => {
                Self::UniqueViolation {
                    entity: db_error.table().unwrap_or("record").to_owned(),
                    fields: "unique key".to_owned(),
                }
            }
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                Self::ConnectionError(error.to_string())
            }
            other => Self::QueryError {
                context: other.to_string(),
            },
        }
    }
}
