// ABOUTME: Core data models for the Logbook workout tracking platform
// ABOUTME: Re-exports Workout, Exercise, Muscle and the comparison record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logbook Contributors

//! # Data Models
//!
//! - `Workout`: one session for a muscle group on a date, with a target rep range
//! - `Exercise`: one logged entry (reps, weight, reps in reserve)
//! - `Muscle`: the muscle group tag
//! - `ExerciseComparator`: derived per-exercise delta between two workouts, never persisted

mod comparison;
mod exercise;
mod muscle;
mod workout;

pub use comparison::ExerciseComparator;
pub use exercise::Exercise;
pub use muscle::Muscle;
pub use workout::Workout;
