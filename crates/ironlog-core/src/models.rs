// ABOUTME: Core data models for workout observations and analysis selectors
// ABOUTME: Defines Observation, NewObservation, WorkoutType, and OutcomeMetric
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! Observation record types and the closed enumerations the engine iterates

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ParseWorkoutTypeError;

/// Classification of a recorded training session.
///
/// This is a closed set: the summary engine emits exactly one row per variant,
/// so an open-world category would silently vanish from every aggregate. New
/// variants must be added here, never discovered from input data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutType {
    /// Resistance/weight training session
    Strength,
    /// Cardiovascular/endurance session
    Cardio,
    /// Combined strength and cardio session
    Mixed,
}

impl WorkoutType {
    /// All workout types in declaration order.
    ///
    /// Summary output order is defined by this array, independent of the
    /// insertion order of observations.
    pub const ALL: [Self; 3] = [Self::Strength, Self::Cardio, Self::Mixed];

    /// Display label, also the value written to CSV exports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Cardio => "Cardio",
            Self::Mixed => "Mixed",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WorkoutType {
    type Err = ParseWorkoutTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Strength" => Ok(Self::Strength),
            "Cardio" => Ok(Self::Cardio),
            "Mixed" => Ok(Self::Mixed),
            other => Err(ParseWorkoutTypeError {
                value: other.to_owned(),
            }),
        }
    }
}

/// Outcome column used as the dependent variable for an analysis request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeMetric {
    /// Muscle gained over the session period, in pounds
    MuscleGain,
    /// Fat lost over the session period, in pounds
    FatLoss,
}

impl OutcomeMetric {
    /// Human-readable label for reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MuscleGain => "Muscle Gain",
            Self::FatLoss => "Fat Loss",
        }
    }

    /// Read this metric's value out of an observation.
    #[must_use]
    pub const fn of(self, observation: &Observation) -> f64 {
        match self {
            Self::MuscleGain => observation.muscle_gain,
            Self::FatLoss => observation.fat_loss,
        }
    }
}

impl fmt::Display for OutcomeMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One recorded training session and its observed outcomes.
///
/// The model accepts any numeric values, including negative or out-of-range
/// ones. Range checks (e.g. diet quality on a 1-10 scale) belong to whatever
/// collaborator collects the input; the analysis layer is a descriptive
/// calculator over the numbers it is handed, not a validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Unique, opaque identifier; used only for removal, never for computation
    pub id: Uuid,
    /// Weekly training volume in hours
    pub hours_per_week: f64,
    /// Self-assessed diet quality on a 1-10 scale
    pub diet_quality: f64,
    /// Average nightly sleep in hours
    pub sleep_hours: f64,
    /// Session classification
    pub workout_type: WorkoutType,
    /// Observed muscle gained, in pounds
    pub muscle_gain: f64,
    /// Observed fat lost, in pounds
    pub fat_loss: f64,
    /// When the observation was inserted; informational only
    pub recorded_at: DateTime<Utc>,
}

/// Caller-supplied fields for a new observation, before the store assigns an
/// id and insertion timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NewObservation {
    /// Weekly training volume in hours
    pub hours_per_week: f64,
    /// Self-assessed diet quality on a 1-10 scale
    pub diet_quality: f64,
    /// Average nightly sleep in hours
    pub sleep_hours: f64,
    /// Session classification
    pub workout_type: WorkoutType,
    /// Observed muscle gained, in pounds
    pub muscle_gain: f64,
    /// Observed fat lost, in pounds
    pub fat_loss: f64,
}

impl NewObservation {
    /// Materialize into a full [`Observation`] with the given id, stamped now.
    #[must_use]
    pub fn into_observation(self, id: Uuid) -> Observation {
        Observation {
            id,
            hours_per_week: self.hours_per_week,
            diet_quality: self.diet_quality,
            sleep_hours: self.sleep_hours,
            workout_type: self.workout_type,
            muscle_gain: self.muscle_gain,
            fat_loss: self.fat_loss,
            recorded_at: Utc::now(),
        }
    }
}
