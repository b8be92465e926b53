// ABOUTME: Structured error types for store mutations and boundary parsing
// ABOUTME: Defines StoreError and ParseWorkoutTypeError with thiserror
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! Error types for the observation store and its parse boundaries
//!
//! The taxonomy is deliberately small: degenerate correlation input, empty
//! category subsets, and removal of an unknown id are all defined behavior
//! (zero coefficient, zero-count summary, no-op) rather than errors. The only
//! rejections are duplicate explicit ids and unknown workout-type strings.

use uuid::Uuid;

/// Errors raised by observation store mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// An observation with the supplied explicit id is already live
    #[error("observation id '{id}' already exists in the store")]
    DuplicateId {
        /// Id that collided with a live observation
        id: Uuid,
    },
}

/// An unknown workout-type string was supplied at a parse boundary.
///
/// Workout type is drawn from a closed set that the summary engine enumerates
/// exhaustively; an unrecognized category would silently vanish from every
/// aggregate, so it is rejected at insertion time instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown workout type '{value}' (expected Strength, Cardio, or Mixed)")]
pub struct ParseWorkoutTypeError {
    /// The rejected input string
    pub value: String,
}
