// ABOUTME: Shared server resources handed to every route handler
// ABOUTME: Bundles configuration, the identity provider, the store, and the domain services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logbook Contributors

use std::sync::Arc;

use crate::auth::AuthManager;
use crate::config::environment::ServerConfig;
use crate::database_plugins::factory::Database;
use crate::services::{ExerciseService, WorkoutService};

/// Centralized resource container for the HTTP layer
///
/// Built once at startup and shared behind an `Arc`; services clone the
/// database handle, which shares the underlying pool or tables.
#[derive(Clone)]
pub struct ServerResources {
    /// Storage backend
    pub database: Database,
    /// Bearer token issuer and verifier
    pub auth_manager: Arc<AuthManager>,
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
    /// Workout operations
    pub workouts: WorkoutService<Database>,
    /// Exercise operations
    pub exercises: ExerciseService<Database>,
}

impl ServerResources {
    /// Create new server resources with proper Arc sharing
    #[must_use]
    pub fn new(database: Database, auth_manager: AuthManager, config: Arc<ServerConfig>) -> Self {
        Self {
            workouts: WorkoutService::new(database.clone()),
            exercises: ExerciseService::new(database.clone()),
            database,
            auth_manager: Arc::new(auth_manager),
            config,
        }
    }
}
