// ABOUTME: Correlation analysis engine for the Ironlog workspace
// ABOUTME: Pearson correlation, factor ranking, category summaries, and insights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

#![deny(unsafe_code)]

//! # Ironlog Intelligence
//!
//! Pure analysis functions over a snapshot of observations. Every function
//! here recomputes its output in full from its inputs — nothing is cached or
//! incrementally maintained, since the working sets involved (tens to low
//! hundreds of rows) make recomputation cheaper than invalidation
//! bookkeeping. The engine holds no state between calls.
//!
//! ## Modules
//!
//! - **correlation**: Pearson's r with a defined zero for degenerate input
//! - **factors**: the fixed predictor set and ranking by absolute coefficient
//! - **summary**: per-workout-type mean outcomes and best-category lookup
//! - **insights**: strength banding and headline findings

/// Pairwise linear correlation
pub mod correlation;

/// Fixed predictor set and factor ranking
pub mod factors;

/// Per-workout-type aggregate summaries
pub mod summary;

/// Headline insight generation
pub mod insights;

pub use correlation::pearson;
pub use factors::{rank_factors, Factor, FactorCorrelation, FactorDomain};
pub use insights::{key_insights, CorrelationStrength, KeyInsights};
pub use summary::{best_category, summarize_by_category, CategorySummary};
