// ABOUTME: ProgressAnalyzer facade over the observation store and analysis engine
// ABOUTME: The library surface external collaborators call and render
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! The analyzer facade
//!
//! Owns the observation store and exposes the full library surface: store
//! mutation, factor ranking, category summaries, key insights, and CSV
//! export. Analysis methods are pure recomputation over the store's current
//! contents; nothing is cached between calls. The facade performs no internal
//! synchronization — a concurrent host wraps it in its own lock.

use tracing::debug;
use uuid::Uuid;

use ironlog_core::errors::StoreError;
use ironlog_core::models::{NewObservation, Observation, OutcomeMetric, WorkoutType};
use ironlog_core::store::ObservationStore;
use ironlog_intelligence::factors::{rank_factors, FactorCorrelation};
use ironlog_intelligence::insights::{key_insights, KeyInsights};
use ironlog_intelligence::summary::{best_category, summarize_by_category, CategorySummary};

use crate::csv_export::export_csv;
use crate::demo::demo_observations;

/// Facade over the observation store and the analysis engine.
#[derive(Debug, Clone, Default)]
pub struct ProgressAnalyzer {
    store: ObservationStore,
}

impl ProgressAnalyzer {
    /// Create an analyzer with an empty observation store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            store: ObservationStore::new(),
        }
    }

    /// Create an analyzer pre-loaded with the built-in demo dataset.
    #[must_use]
    pub fn with_demo_data() -> Self {
        let mut analyzer = Self::new();
        for fields in demo_observations() {
            analyzer.store.add(fields);
        }
        debug!(observations = analyzer.store.len(), "loaded demo dataset");
        analyzer
    }

    /// Record a new observation; returns it with its assigned id.
    pub fn add_observation(&mut self, fields: NewObservation) -> Observation {
        self.store.add(fields)
    }

    /// Record an observation carrying a caller-supplied id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] if the id is already live.
    pub fn insert_observation(&mut self, observation: Observation) -> Result<(), StoreError> {
        self.store.insert(observation)
    }

    /// Remove an observation by id; an unknown id is a no-op.
    ///
    /// Returns whether an observation was actually removed.
    pub fn remove_observation(&mut self, id: Uuid) -> bool {
        self.store.remove(id)
    }

    /// All live observations in insertion order.
    #[must_use]
    pub fn observations(&self) -> &[Observation] {
        self.store.observations()
    }

    /// Number of live observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the store holds no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Factors ranked by absolute correlation with the chosen outcome.
    #[must_use]
    pub fn rank_factors(&self, metric: OutcomeMetric) -> Vec<FactorCorrelation> {
        rank_factors(self.store.observations(), metric)
    }

    /// Mean outcomes per workout type, one row per category.
    #[must_use]
    pub fn summarize_by_category(&self) -> Vec<CategorySummary> {
        summarize_by_category(self.store.observations())
    }

    /// The workout type with the greatest mean for the chosen metric.
    ///
    /// Ties resolve to category declaration order; an empty store resolves to
    /// the first category, whose summary reports zero means and zero samples.
    #[must_use]
    pub fn best_category(&self, metric: OutcomeMetric) -> CategorySummary {
        let summaries = self.summarize_by_category();
        // The summary always holds one row per workout type.
        best_category(&summaries, metric)
            .cloned()
            .unwrap_or_else(|| CategorySummary::empty(WorkoutType::Strength))
    }

    /// Headline insights for the chosen metric.
    #[must_use]
    pub fn key_insights(&self, metric: OutcomeMetric) -> KeyInsights {
        key_insights(self.store.observations(), metric)
    }

    /// Render the dataset as CSV in store order.
    #[must_use]
    pub fn export_csv(&self) -> String {
        export_csv(self.store.observations())
    }
}
