// ABOUTME: Greedy first-match comparison of two workouts' exercises
// ABOUTME: Emits one delta record per old exercise that finds a same-named current exercise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logbook Contributors

use logbook_core::models::{Exercise, ExerciseComparator};
use tracing::debug;

use crate::names_match;

/// Compare `old` against `current`
///
/// For each old exercise, in order, the current list is scanned in order and
/// the first case-insensitive name match is paired with it. A current
/// exercise is not consumed by a match, so two old entries named "Bench" both
/// pair with the first current "Bench". Exercises without a partner on either
/// side produce nothing. The result never has more entries than `old`.
#[must_use]
pub fn compare_exercises(old: &[Exercise], current: &[Exercise]) -> Vec<ExerciseComparator> {
    let mut result = Vec::new();

    for old_exercise in old {
        if let Some(current_exercise) = current
            .iter()
            .find(|candidate| names_match(&old_exercise.name, &candidate.name))
        {
            result.push(diff(old_exercise, current_exercise));
        }
    }

    debug!(
        old.count = old.len(),
        current.count = current.len(),
        matched = result.len(),
        "Compared workout exercises"
    );
    result
}

fn diff(old: &Exercise, current: &Exercise) -> ExerciseComparator {
    ExerciseComparator {
        name: current.name.clone(),
        reps_difference: (current.reps != old.reps).then(|| current.reps - old.reps),
        weight_difference: (current.weight != old.weight).then(|| current.weight - old.weight),
        rir_difference: (current.rir != old.rir).then(|| current.rir - old.rir),
    }
}
