// ABOUTME: Filters a workout's exercises whose rep count misses the target range
// ABOUTME: Keeps input order; performs no validation of the range bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logbook Contributors

use logbook_core::models::{Exercise, Workout};

/// Whether `reps` is strictly below `lower` or strictly above `upper`
///
/// The two comparisons are independent, so an inverted range (lower > upper)
/// flags every rep count that fails either bound.
#[must_use]
pub const fn is_outside_rep_range(reps: i32, lower: i32, upper: i32) -> bool {
    reps < lower || reps > upper
}

/// Exercises of `workout` whose reps fall outside its target range, in order
#[must_use]
pub fn exercises_outside_rep_range(workout: &Workout) -> Vec<Exercise> {
    workout
        .exercises
        .iter()
        .filter(|exercise| {
            is_outside_rep_range(
                exercise.reps,
                workout.lower_reps_range,
                workout.upper_reps_range,
            )
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::exercise;
    use chrono::NaiveDate;
    use logbook_core::models::Muscle;
    use uuid::Uuid;

    fn workout(lower: i32, upper: i32, exercises: Vec<Exercise>) -> Workout {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let mut workout = Workout::new(Muscle::Chest, date, lower, upper, Uuid::new_v4());
        workout.exercises = exercises;
        workout
    }

    #[test]
    fn test_only_out_of_range_exercises_returned() {
        let w = workout(
            8,
            12,
            vec![exercise("Bench", 10, 50, 0), exercise("Squat", 15, 80, 0)],
        );

        let outside = exercises_outside_rep_range(&w);

        assert_eq!(outside.len(), 1);
        assert_eq!(outside[0].name, "Squat");
        assert_eq!(outside[0].reps, 15);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let w = workout(
            8,
            12,
            vec![exercise("A", 8, 10, 0), exercise("B", 12, 10, 0)],
        );
        assert!(exercises_outside_rep_range(&w).is_empty());
    }

    #[test]
    fn test_order_is_preserved() {
        let w = workout(
            8,
            12,
            vec![
                exercise("High", 20, 10, 0),
                exercise("Ok", 10, 10, 0),
                exercise("Low", 3, 10, 0),
            ],
        );

        let names: Vec<_> = exercises_outside_rep_range(&w)
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, ["High", "Low"]);
    }

    #[test]
    fn test_inverted_range_applies_both_comparisons() {
        // lower 12, upper 8: everything below 12 or above 8 is outside
        let w = workout(
            12,
            8,
            vec![exercise("A", 10, 10, 0), exercise("B", 5, 10, 0)],
        );
        assert_eq!(exercises_outside_rep_range(&w).len(), 2);
    }
}
