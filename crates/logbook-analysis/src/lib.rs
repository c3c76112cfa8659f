// ABOUTME: Workout analysis engine for the Logbook platform
// ABOUTME: Pure functions over exercise lists: volume, rep range, comparison, and set difference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logbook Contributors

#![deny(unsafe_code)]

//! # Logbook Analysis
//!
//! Every function here is pure: it reads exercise data that the caller has
//! already loaded and ownership-checked, and returns a fresh result.
//!
//! Name matching is not uniform across the algorithms:
//! - comparison and set difference match names case-insensitively
//! - volume aggregation keys on the exact stored name

/// Pairwise comparison of two workouts' exercises
pub mod comparison;

/// Exercises whose reps fall outside the workout's target range
pub mod rep_range;

/// Exercises present in one workout but not the other
pub mod unique;

/// Volume load (weight x reps) per exercise name
pub mod volume;

pub use comparison::compare_exercises;
pub use rep_range::{exercises_outside_rep_range, is_outside_rep_range};
pub use unique::{common_exercise_names, unique_exercises, ExerciseSide};
pub use volume::{exercise_volume, volume_load};

/// Case-insensitive exercise name equality
#[must_use]
pub fn names_match(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}


#[cfg(test)]
mod tests {
    use super::names_match;

    #[test]
    fn test_names_match_ignores_case() {
        assert!(names_match("Bench Press", "bench press"));
        assert!(names_match("SQUAT", "squat"));
        assert!(!names_match("Squat", "Front Squat"));
    }
}
