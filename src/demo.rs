// ABOUTME: Demo dataset for reports, examples, and integration tests
// ABOUTME: Ten representative observations spanning all workout types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! Built-in demo dataset
//!
//! A small, realistic spread of sessions across all three workout types, used
//! by the report binary and by tests that want a non-trivial dataset without
//! constructing one by hand.

use ironlog_core::models::{NewObservation, WorkoutType};

/// The demo dataset: ten observations covering every workout type.
#[must_use]
pub fn demo_observations() -> Vec<NewObservation> {
    let rows: [(f64, f64, f64, WorkoutType, f64, f64); 10] = [
        (5.0, 7.0, 7.0, WorkoutType::Strength, 2.5, 1.2),
        (3.0, 5.0, 6.0, WorkoutType::Cardio, 0.8, 2.8),
        (6.0, 8.0, 8.0, WorkoutType::Strength, 3.2, 1.8),
        (4.0, 6.0, 7.0, WorkoutType::Mixed, 1.9, 2.1),
        (7.0, 9.0, 8.0, WorkoutType::Strength, 4.1, 2.3),
        (2.0, 4.0, 5.0, WorkoutType::Cardio, 0.3, 1.5),
        (5.0, 7.0, 6.0, WorkoutType::Mixed, 2.2, 2.0),
        (4.0, 8.0, 9.0, WorkoutType::Strength, 2.8, 1.4),
        (6.0, 6.0, 7.0, WorkoutType::Cardio, 1.5, 3.2),
        (5.0, 9.0, 8.0, WorkoutType::Mixed, 2.9, 2.4),
    ];

    rows.into_iter()
        .map(
            |(hours_per_week, diet_quality, sleep_hours, workout_type, muscle_gain, fat_loss)| {
                NewObservation {
                    hours_per_week,
                    diet_quality,
                    sleep_hours,
                    workout_type,
                    muscle_gain,
                    fat_loss,
                }
            },
        )
        .collect()
}
