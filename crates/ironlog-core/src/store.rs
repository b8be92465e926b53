// ABOUTME: In-memory observation store with ordered insertion and idempotent removal
// ABOUTME: Single authoritative owned collection behind accessor operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! The authoritative in-memory collection of observations
//!
//! The store performs no internal synchronization. It assumes one logical
//! mutator at a time; a concurrent host must wrap it in its own lock
//! (exclusive for mutation, shared for snapshot reads). Analysis functions
//! take a snapshot slice and compute outside any lock.

use tracing::{debug, trace};
use uuid::Uuid;

use crate::errors::StoreError;
use crate::models::{NewObservation, Observation};

/// Ordered, in-memory collection of workout observations.
///
/// Insertion order is preserved for display purposes only; every computation
/// over the collection is order-independent. Edits are add-new/remove-old —
/// there is no partial field update.
#[derive(Debug, Clone, Default)]
pub struct ObservationStore {
    observations: Vec<Observation>,
}

impl ObservationStore {
    /// Create an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            observations: Vec::new(),
        }
    }

    /// Insert a new observation, assigning it a fresh unique id.
    ///
    /// Returns the stored observation, id and timestamp included, so the
    /// caller can later remove it.
    pub fn add(&mut self, fields: NewObservation) -> Observation {
        let observation = fields.into_observation(Uuid::new_v4());
        debug!(id = %observation.id, workout_type = %observation.workout_type, "observation added");
        self.observations.push(observation.clone());
        observation
    }

    /// Insert an observation carrying a caller-supplied id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateId`] if an observation with the same id
    /// is already live. Id uniqueness is the store's one invariant.
    pub fn insert(&mut self, observation: Observation) -> Result<(), StoreError> {
        if self.observations.iter().any(|o| o.id == observation.id) {
            return Err(StoreError::DuplicateId { id: observation.id });
        }
        debug!(id = %observation.id, "observation inserted with explicit id");
        self.observations.push(observation);
        Ok(())
    }

    /// Remove the observation with the given id, if present.
    ///
    /// Removal is idempotent: an absent id is a no-op, not an error. Returns
    /// whether an observation was actually removed.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.observations.len();
        self.observations.retain(|o| o.id != id);
        let removed = self.observations.len() < before;
        if removed {
            debug!(%id, "observation removed");
        } else {
            trace!(%id, "remove of unknown id ignored");
        }
        removed
    }

    /// Live view of all observations in insertion order.
    ///
    /// Safe to call repeatedly; each call reflects the current state. Callers
    /// that need a frozen snapshot clone the slice before computing.
    #[must_use]
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Number of live observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether the store holds no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::WorkoutType;

    fn sample_fields() -> NewObservation {
        NewObservation {
            hours_per_week: 5.0,
            diet_quality: 7.0,
            sleep_hours: 7.0,
            workout_type: WorkoutType::Strength,
            muscle_gain: 2.5,
            fat_loss: 1.2,
        }
    }

    #[test]
    fn add_assigns_unique_ids() {
        let mut store = ObservationStore::new();
        let first = store.add(sample_fields());
        let second = store.add(sample_fields());
        assert_ne!(first.id, second.id);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn insert_rejects_duplicate_id() {
        let mut store = ObservationStore::new();
        let observation = store.add(sample_fields());
        let err = store.insert(observation.clone()).unwrap_err();
        assert_eq!(err, StoreError::DuplicateId { id: observation.id });
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_unknown_id_is_a_noop() {
        let mut store = ObservationStore::new();
        store.add(sample_fields());
        let ids_before: Vec<Uuid> = store.observations().iter().map(|o| o.id).collect();
        assert!(!store.remove(Uuid::new_v4()));
        let ids_after: Vec<Uuid> = store.observations().iter().map(|o| o.id).collect();
        assert_eq!(ids_before, ids_after);
    }

    #[test]
    fn add_then_remove_restores_prior_content() {
        let mut store = ObservationStore::new();
        let kept = store.add(sample_fields());
        let transient = store.add(sample_fields());
        assert!(store.remove(transient.id));
        assert_eq!(store.len(), 1);
        assert_eq!(store.observations()[0].id, kept.id);
    }

    #[test]
    fn observations_preserve_insertion_order() {
        let mut store = ObservationStore::new();
        let mut fields = sample_fields();
        fields.hours_per_week = 1.0;
        store.add(fields);
        fields.hours_per_week = 2.0;
        store.add(fields);
        fields.hours_per_week = 3.0;
        store.add(fields);

        let hours: Vec<f64> = store
            .observations()
            .iter()
            .map(|o| o.hours_per_week)
            .collect();
        assert_eq!(hours, vec![1.0, 2.0, 3.0]);
    }
}
