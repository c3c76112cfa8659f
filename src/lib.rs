// ABOUTME: Main library entry point for the Logbook workout tracking server
// ABOUTME: Exposes configuration, storage, services and the REST router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logbook Contributors

#![deny(unsafe_code)]

//! # Logbook Server
//!
//! A personal workout logbook. Users record workouts (one per muscle group
//! per day) and the exercises performed in them, then ask for analytics:
//! volume load, sets outside the planned rep range, set-by-set comparison
//! between two sessions, and the exercises one session has that another lacks.
//!
//! ## Architecture
//!
//! - **`logbook_core`**: errors, models and the ownership guard
//! - **`logbook_analysis`**: pure functions over exercise lists
//! - **services**: ownership-checked operations over a [`database_plugins::DatabaseProvider`]
//! - **routes**: thin axum handlers that authenticate and delegate
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use logbook_server::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Logbook configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Bearer token issuing and caller resolution
pub mod auth;

/// Environment-driven configuration
pub mod config;

/// Service names, defaults and validation limits
pub mod constants;

/// Pluggable storage backends
pub mod database_plugins;

/// Structured logging setup
pub mod logging;

/// Shared handler state
pub mod resources;

/// HTTP routes
pub mod routes;

/// Ownership-checked domain operations
pub mod services;
