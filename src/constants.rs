// ABOUTME: System-wide constants and defaults for the Logbook server
// ABOUTME: Holds service names, environment variable defaults, and request validation limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logbook Contributors

//! # Constants Module
//!
//! Hardcoded defaults and limits. Values that can be overridden at runtime are
//! read in [`crate::config::environment`].

/// Service identification
pub mod service_names {
    /// Service name used in logs and JWT audience
    pub const LOGBOOK_SERVER: &str = "logbook-server";

    /// Server version from Cargo.toml
    pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// Defaults used when an environment variable is absent
pub mod defaults {
    /// HTTP listen port
    pub const HTTP_PORT: u16 = 8080;

    /// Database URL; resolves to the in-memory store
    pub const DATABASE_URL: &str = "sqlite::memory:";

    /// JWT lifetime in hours
    pub const JWT_EXPIRY_HOURS: i64 = 24;

    /// Log level directive
    pub const LOG_LEVEL: &str = "info";
}

/// Bounds enforced on incoming exercise and workout payloads
pub mod limits {
    /// Maximum repetitions per exercise entry
    pub const MAX_REPS: i32 = 50;

    /// Maximum weight per exercise entry
    pub const MAX_WEIGHT: i64 = 1500;

    /// Maximum reps in reserve
    pub const MAX_RIR: i32 = 10;

    /// Random JWT secret length in bytes
    pub const JWT_SECRET_BYTES: usize = 64;
}
