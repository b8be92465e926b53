// ABOUTME: Ironlog - workout observation tracking and correlation analysis
// ABOUTME: Facade crate wiring the store and analysis engine into one surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

#![deny(unsafe_code)]

//! # Ironlog
//!
//! Record workout-session observations (training volume, diet quality, sleep,
//! workout type, resulting muscle gain and fat loss) and compute which
//! lifestyle factor most strongly associates with a chosen outcome metric.
//!
//! The workspace splits into a foundation crate (`ironlog-core`: models,
//! errors, the observation store), an analysis crate (`ironlog-intelligence`:
//! Pearson correlation, factor ranking, category summaries, insights), and
//! this facade, which adds CSV export, the demo dataset, and the
//! [`ProgressAnalyzer`] surface that external renderers call.
//!
//! ```
//! use ironlog::{NewObservation, OutcomeMetric, ProgressAnalyzer, WorkoutType};
//!
//! let mut analyzer = ProgressAnalyzer::new();
//! analyzer.add_observation(NewObservation {
//!     hours_per_week: 5.0,
//!     diet_quality: 7.0,
//!     sleep_hours: 7.0,
//!     workout_type: WorkoutType::Strength,
//!     muscle_gain: 2.5,
//!     fat_loss: 1.2,
//! });
//!
//! let ranked = analyzer.rank_factors(OutcomeMetric::MuscleGain);
//! assert_eq!(ranked.len(), 3);
//! ```

/// The `ProgressAnalyzer` facade over store and engine
pub mod analyzer;

/// CSV export boundary format
pub mod csv_export;

/// Built-in demo dataset
pub mod demo;

pub use analyzer::ProgressAnalyzer;
pub use csv_export::{export_csv, CSV_HEADER};
pub use demo::demo_observations;
pub use ironlog_core::errors::{ParseWorkoutTypeError, StoreError};
pub use ironlog_core::models::{NewObservation, Observation, OutcomeMetric, WorkoutType};
pub use ironlog_core::store::ObservationStore;
pub use ironlog_intelligence::correlation::pearson;
pub use ironlog_intelligence::factors::{rank_factors, Factor, FactorCorrelation, FactorDomain};
pub use ironlog_intelligence::insights::{key_insights, CorrelationStrength, KeyInsights};
pub use ironlog_intelligence::summary::{best_category, summarize_by_category, CategorySummary};
