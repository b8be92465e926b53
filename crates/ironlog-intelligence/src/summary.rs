// ABOUTME: Per-workout-type aggregate summaries and best-category lookup
// ABOUTME: Defines CategorySummary, summarize_by_category, and best_category
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! Mean-outcome summaries per workout type

use serde::{Deserialize, Serialize};
use tracing::debug;

use ironlog_core::models::{Observation, OutcomeMetric, WorkoutType};

/// Aggregate outcome means for one workout type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    /// The workout type this row summarizes
    pub workout_type: WorkoutType,
    /// Arithmetic mean of muscle gain over matching observations; 0 when none
    pub mean_muscle_gain: f64,
    /// Arithmetic mean of fat loss over matching observations; 0 when none
    pub mean_fat_loss: f64,
    /// Number of matching observations
    pub sample_count: usize,
}

impl CategorySummary {
    /// Zero-sample summary for a workout type with no matching observations.
    #[must_use]
    pub const fn empty(workout_type: WorkoutType) -> Self {
        Self {
            workout_type,
            mean_muscle_gain: 0.0,
            mean_fat_loss: 0.0,
            sample_count: 0,
        }
    }

    /// Mean value of the chosen outcome metric.
    #[must_use]
    pub const fn mean_for(&self, metric: OutcomeMetric) -> f64 {
        match metric {
            OutcomeMetric::MuscleGain => self.mean_muscle_gain,
            OutcomeMetric::FatLoss => self.mean_fat_loss,
        }
    }
}

/// Summarize mean outcomes for every workout type.
///
/// Always returns exactly one row per member of [`WorkoutType::ALL`], in
/// declaration order (Strength, Cardio, Mixed), independent of observation
/// insertion order. A workout type with no matching observations still
/// appears, with means 0 and a sample count of 0.
#[must_use]
pub fn summarize_by_category(observations: &[Observation]) -> Vec<CategorySummary> {
    let summaries: Vec<CategorySummary> = WorkoutType::ALL
        .iter()
        .map(|&workout_type| {
            let matching: Vec<&Observation> = observations
                .iter()
                .filter(|o| o.workout_type == workout_type)
                .collect();
            if matching.is_empty() {
                return CategorySummary::empty(workout_type);
            }

            let count = matching.len() as f64;
            CategorySummary {
                workout_type,
                mean_muscle_gain: matching.iter().map(|o| o.muscle_gain).sum::<f64>() / count,
                mean_fat_loss: matching.iter().map(|o| o.fat_loss).sum::<f64>() / count,
                sample_count: matching.len(),
            }
        })
        .collect();

    debug!(observations = observations.len(), "summarized by workout type");
    summaries
}

/// The category with the strictly greatest mean for the chosen metric.
///
/// A first-encountered-maximum scan: on an exact tie, the earlier row wins.
/// Returns `None` only for an empty slice, which [`summarize_by_category`]
/// never produces.
#[must_use]
pub fn best_category<'a>(
    summaries: &'a [CategorySummary],
    metric: OutcomeMetric,
) -> Option<&'a CategorySummary> {
    summaries.iter().fold(None, |best, candidate| match best {
        Some(current) if candidate.mean_for(metric) > current.mean_for(metric) => Some(candidate),
        Some(current) => Some(current),
        None => Some(candidate),
    })
}
