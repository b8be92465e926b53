// ABOUTME: CSV export boundary format for the observation dataset
// ABOUTME: Fixed header, comma-joined numeric fields, no quoting or escaping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! CSV export of the observation dataset
//!
//! Produced for external consumption (file download) and never re-parsed
//! internally; import is out of scope. Fields are comma-joined without
//! quoting — values are numeric or drawn from the closed workout-type set, so
//! no embedded commas can occur.

use ironlog_core::models::Observation;

/// Fixed header row of the export format.
pub const CSV_HEADER: &str =
    "Hours/Week,Diet Quality,Sleep Hours,Workout Type,Muscle Gain (lbs),Fat Loss (lbs)";

/// Render the dataset as CSV, one line per observation in store order.
///
/// Numeric fields use `f64` display formatting, so integral values render
/// without a trailing `.0` (an observation with 5 hours exports `5`, not
/// `5.0`). Ids and timestamps are internal and not exported.
#[must_use]
pub fn export_csv(observations: &[Observation]) -> String {
    let mut lines = Vec::with_capacity(observations.len() + 1);
    lines.push(CSV_HEADER.to_owned());
    for o in observations {
        lines.push(format!(
            "{},{},{},{},{},{}",
            o.hours_per_week, o.diet_quality, o.sleep_hours, o.workout_type, o.muscle_gain, o.fat_loss
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use ironlog_core::models::{NewObservation, WorkoutType};
    use uuid::Uuid;

    #[test]
    fn empty_store_exports_header_only() {
        assert_eq!(export_csv(&[]), CSV_HEADER);
    }

    #[test]
    fn integral_values_render_without_decimal_point() {
        let observation = NewObservation {
            hours_per_week: 5.0,
            diet_quality: 7.0,
            sleep_hours: 7.0,
            workout_type: WorkoutType::Strength,
            muscle_gain: 2.5,
            fat_loss: 1.2,
        }
        .into_observation(Uuid::new_v4());

        let csv = export_csv(&[observation]);
        let mut lines = csv.lines();
        assert_eq!(lines.next().unwrap(), CSV_HEADER);
        assert_eq!(lines.next().unwrap(), "5,7,7,Strength,2.5,1.2");
        assert_eq!(lines.next(), None);
    }
}
