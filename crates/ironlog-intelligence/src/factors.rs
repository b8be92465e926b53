// ABOUTME: Fixed predictor set and factor ranking by absolute correlation
// ABOUTME: Defines Factor, FactorDomain, FactorCorrelation, and rank_factors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! Lifestyle factors and their ranking against a chosen outcome metric

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use ironlog_core::models::{Observation, OutcomeMetric};

use crate::correlation::pearson;

/// A lifestyle factor tested for association with an outcome metric.
///
/// This is a closed, ordered set: ranking always yields exactly one row per
/// variant, and ties in association strength resolve to declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    /// Weekly training hours
    TrainingVolume,
    /// Self-assessed diet quality
    DietQuality,
    /// Average nightly sleep
    SleepHours,
}

impl Factor {
    /// All factors in declaration order, the tie-break order for ranking.
    pub const ALL: [Self; 3] = [Self::TrainingVolume, Self::DietQuality, Self::SleepHours];

    /// Display label, matching the exported CSV column names.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TrainingVolume => "Hours/Week",
            Self::DietQuality => "Diet Quality",
            Self::SleepHours => "Sleep Hours",
        }
    }

    /// Descriptive domain this factor belongs to.
    #[must_use]
    pub const fn domain(self) -> FactorDomain {
        match self {
            Self::TrainingVolume => FactorDomain::Volume,
            Self::DietQuality => FactorDomain::Nutrition,
            Self::SleepHours => FactorDomain::Recovery,
        }
    }

    /// Read this factor's value out of an observation.
    #[must_use]
    pub const fn of(self, observation: &Observation) -> f64 {
        match self {
            Self::TrainingVolume => observation.hours_per_week,
            Self::DietQuality => observation.diet_quality,
            Self::SleepHours => observation.sleep_hours,
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Descriptive grouping of a factor by training domain.
///
/// Informational only; never used in computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorDomain {
    /// Training volume
    Volume,
    /// Diet and nutrition
    Nutrition,
    /// Sleep and recovery
    Recovery,
}

impl FactorDomain {
    /// Display label for reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Volume => "Volume",
            Self::Nutrition => "Nutrition",
            Self::Recovery => "Recovery",
        }
    }
}

impl fmt::Display for FactorDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of factor-ranking output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorCorrelation {
    /// The predictor this row describes
    pub factor: Factor,
    /// Pearson's r against the chosen outcome, in [-1, 1]; 0 when degenerate
    pub coefficient: f64,
    /// Descriptive domain tag carried through for display
    pub domain: FactorDomain,
}

/// Rank every factor by strength of association with the chosen outcome.
///
/// Computes Pearson's r between each member of [`Factor::ALL`] and the
/// selected outcome column, then sorts descending by absolute coefficient —
/// strongest association first regardless of sign. The sort is stable, so
/// equal absolute values keep declaration order. Output length is always the
/// size of the fixed factor set, including for an empty observation slice
/// (every coefficient 0).
///
/// Recomputed in full on every call; nothing is cached or incrementally
/// maintained.
#[must_use]
pub fn rank_factors(observations: &[Observation], metric: OutcomeMetric) -> Vec<FactorCorrelation> {
    let outcomes: Vec<f64> = observations.iter().map(|o| metric.of(o)).collect();

    let mut rows: Vec<FactorCorrelation> = Factor::ALL
        .iter()
        .map(|&factor| {
            let values: Vec<f64> = observations.iter().map(|o| factor.of(o)).collect();
            FactorCorrelation {
                factor,
                coefficient: pearson(&values, &outcomes),
                domain: factor.domain(),
            }
        })
        .collect();

    rows.sort_by(|a, b| b.coefficient.abs().total_cmp(&a.coefficient.abs()));

    debug!(
        metric = %metric,
        observations = observations.len(),
        strongest = %rows[0].factor,
        "ranked factors"
    );
    rows
}
