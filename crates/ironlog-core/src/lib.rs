// ABOUTME: Core types and store for the Ironlog workout analysis workspace
// ABOUTME: Foundation crate with observation models, errors, and the observation store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

#![deny(unsafe_code)]

//! # Ironlog Core
//!
//! Foundation crate providing the shared data model and the in-memory
//! observation store for the Ironlog workspace. This crate is designed to
//! change infrequently, enabling incremental compilation benefits.
//!
//! ## Modules
//!
//! - **models**: `Observation`, `NewObservation`, and the closed
//!   `WorkoutType` / `OutcomeMetric` enumerations
//! - **errors**: `StoreError` and `ParseWorkoutTypeError`
//! - **store**: the ordered, id-keyed `ObservationStore`

/// Structured error types for store mutations and boundary parsing
pub mod errors;

/// Observation record types and closed enumerations
pub mod models;

/// The authoritative in-memory observation collection
pub mod store;

pub use errors::{ParseWorkoutTypeError, StoreError};
pub use models::{NewObservation, Observation, OutcomeMetric, WorkoutType};
pub use store::ObservationStore;
