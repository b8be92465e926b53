// ABOUTME: Key-insight generation from ranked factors and category summaries
// ABOUTME: Defines CorrelationStrength banding and the KeyInsights report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! Headline insights for a chosen outcome metric

use std::fmt;

use serde::{Deserialize, Serialize};

use ironlog_core::models::{Observation, OutcomeMetric, WorkoutType};

use crate::factors::{Factor, FactorCorrelation, rank_factors};
use crate::summary::{best_category, summarize_by_category};

/// Threshold above which an absolute coefficient counts as a strong association.
const STRONG_CORRELATION_THRESHOLD: f64 = 0.7;
/// Threshold above which an absolute coefficient counts as a moderate association.
const MODERATE_CORRELATION_THRESHOLD: f64 = 0.4;

/// Qualitative band for an association's strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrelationStrength {
    /// |r| > 0.7
    Strong,
    /// 0.4 < |r| <= 0.7
    Moderate,
    /// |r| <= 0.4
    Weak,
}

impl CorrelationStrength {
    /// Band a coefficient by its absolute value.
    #[must_use]
    pub fn from_coefficient(coefficient: f64) -> Self {
        let strength = coefficient.abs();
        if strength > STRONG_CORRELATION_THRESHOLD {
            Self::Strong
        } else if strength > MODERATE_CORRELATION_THRESHOLD {
            Self::Moderate
        } else {
            Self::Weak
        }
    }

    /// Display label for reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Moderate => "moderate",
            Self::Weak => "weak",
        }
    }
}

impl fmt::Display for CorrelationStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Headline findings for one analysis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyInsights {
    /// The outcome metric the insights describe
    pub metric: OutcomeMetric,
    /// Top-ranked factor for the metric
    pub strongest_factor: FactorCorrelation,
    /// Qualitative band of the strongest factor's coefficient
    pub strength: CorrelationStrength,
    /// Workout type with the greatest mean for the metric
    pub best_workout_type: WorkoutType,
    /// Number of observations the analysis covered
    pub sample_count: usize,
}

/// Compute the headline insights for a chosen outcome metric.
///
/// Pure recomputation over the snapshot, like the ranking and summary layers
/// it composes. Defined for any input, including an empty slice: every
/// coefficient is then 0, the strongest factor falls back to declaration
/// order, and the best workout type resolves to the first category.
#[must_use]
pub fn key_insights(observations: &[Observation], metric: OutcomeMetric) -> KeyInsights {
    let ranked = rank_factors(observations, metric);
    // Ranking always yields one row per factor; the fallback is unreachable.
    let strongest_factor = ranked.into_iter().next().unwrap_or(FactorCorrelation {
        factor: Factor::TrainingVolume,
        coefficient: 0.0,
        domain: Factor::TrainingVolume.domain(),
    });

    let summaries = summarize_by_category(observations);
    let best_workout_type = best_category(&summaries, metric)
        .map_or(WorkoutType::Strength, |summary| summary.workout_type);

    let strength = CorrelationStrength::from_coefficient(strongest_factor.coefficient);
    KeyInsights {
        metric,
        strongest_factor,
        strength,
        best_workout_type,
        sample_count: observations.len(),
    }
}
