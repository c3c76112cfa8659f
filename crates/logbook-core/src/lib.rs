// ABOUTME: Core types for the Logbook workout tracking platform
// ABOUTME: Foundation crate with error handling, domain models, and the ownership guard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logbook Contributors

#![deny(unsafe_code)]

//! # Logbook Core
//!
//! Foundation crate shared by the analysis engine and the server. It changes
//! rarely, so the heavier crates above it recompile less often.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the storage-level `DatabaseError`
//! - **models**: `Workout`, `Exercise`, `Muscle`, `ExerciseComparator`
//! - **ownership**: the single owner-id check applied before every resource access

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Workout, exercise and comparison data models
pub mod models;

/// Resource ownership guard
pub mod ownership;
