// ABOUTME: Muscle group enumeration used to tag workouts
// ABOUTME: Parses from names (case-insensitive) or numeric codes, serializes as SCREAMING_SNAKE_CASE
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Logbook Contributors

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::AppError;

/// Muscle group a workout targets
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Muscle {
    /// Chest
    Chest,
    /// Back
    Back,
    /// Shoulders
    Shoulders,
    /// Legs
    Legs,
    /// Biceps
    Biceps,
    /// Triceps
    Triceps,
    /// Calves
    Calves,
    /// Abdominal
    Abdominal,
    /// Full body
    FullBody,
}

impl Muscle {
    /// Every muscle group, in code order
    pub const ALL: [Self; 9] = [
        Self::Chest,
        Self::Back,
        Self::Shoulders,
        Self::Legs,
        Self::Biceps,
        Self::Triceps,
        Self::Calves,
        Self::Abdominal,
        Self::FullBody,
    ];

    /// Stable numeric code (1-based)
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Chest => 1,
            Self::Back => 2,
            Self::Shoulders => 3,
            Self::Legs => 4,
            Self::Biceps => 5,
            Self::Triceps => 6,
            Self::Calves => 7,
            Self::Abdominal => 8,
            Self::FullBody => 9,
        }
    }

    /// Look up a muscle group by its numeric code
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|muscle| muscle.code() == code)
    }

    /// Canonical upper-case name, as stored and serialized
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chest => "CHEST",
            Self::Back => "BACK",
            Self::Shoulders => "SHOULDERS",
            Self::Legs => "LEGS",
            Self::Biceps => "BICEPS",
            Self::Triceps => "TRICEPS",
            Self::Calves => "CALVES",
            Self::Abdominal => "ABDOMINAL",
            Self::FullBody => "FULL_BODY",
        }
    }
}

impl fmt::Display for Muscle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Muscle {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<u8>() {
            return Self::from_code(code)
                .ok_or_else(|| AppError::invalid_input(format!("Invalid muscle enum code: {s}")));
        }

        let upper = trimmed.to_uppercase();
        Self::ALL
            .into_iter()
            .find(|muscle| muscle.as_str() == upper)
            .ok_or_else(|| AppError::invalid_input(format!("Invalid muscle: {s}")))
    }
}

/// Accepts the same forms as `FromStr`: a name in any case, or a numeric code
impl<'de> Deserialize<'de> for Muscle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(MuscleVisitor)
    }
}

struct MuscleVisitor;

impl Visitor<'_> for MuscleVisitor {
    type Value = Muscle;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a muscle name or numeric code")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Muscle, E> {
        value.parse().map_err(|err: AppError| E::custom(err.message))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Muscle, E> {
        u8::try_from(value)
            .ok()
            .and_then(Muscle::from_code)
            .ok_or_else(|| E::custom(format!("Invalid muscle enum code: {value}")))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Muscle, E> {
        u8::try_from(value)
            .ok()
            .and_then(Muscle::from_code)
            .ok_or_else(|| E::custom(format!("Invalid muscle enum code: {value}")))
    }
}
