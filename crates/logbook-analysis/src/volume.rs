// ABOUTME: Volume load aggregation for a workout's exercises
// ABOUTME: Sums weight x reps per exact exercise name using exact decimal arithmetic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logbook Contributors

use std::collections::HashMap;

use logbook_core::models::Exercise;
use rust_decimal::Decimal;

/// Volume load of a single entry: weight x reps
#[must_use]
pub fn exercise_volume(exercise: &Exercise) -> Decimal {
    exercise.weight * Decimal::from(exercise.reps)
}

/// Total volume load per exercise name
///
/// Keys are the names exactly as stored: "Bench" and "bench" are two
/// entries here even though comparison treats them as the same exercise.
#[must_use]
pub fn volume_load(exercises: &[Exercise]) -> HashMap<String, Decimal> {
    let mut totals: HashMap<String, Decimal> = HashMap::with_capacity(exercises.len());

    for exercise in exercises {
        let volume = exercise_volume(exercise);
        totals
            .entry(exercise.name.clone())
            .and_modify(|total| *total += volume)
            .or_insert(volume);
    }

    totals
}
