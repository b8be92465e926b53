// ABOUTME: Integration tests for the ProgressAnalyzer library surface
// ABOUTME: Covers store mutation, category summaries, insights, and demo data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::float_cmp)]
#![allow(missing_docs)]

use uuid::Uuid;

use ironlog::{
    CorrelationStrength, NewObservation, OutcomeMetric, ProgressAnalyzer, StoreError, WorkoutType,
};

fn session(workout_type: WorkoutType, muscle: f64, fat: f64) -> NewObservation {
    NewObservation {
        hours_per_week: 5.0,
        diet_quality: 7.0,
        sleep_hours: 7.0,
        workout_type,
        muscle_gain: muscle,
        fat_loss: fat,
    }
}

// === Store surface ===

#[test]
fn test_add_assigns_id_and_preserves_order() {
    let mut analyzer = ProgressAnalyzer::new();
    let first = analyzer.add_observation(session(WorkoutType::Strength, 2.5, 1.2));
    let second = analyzer.add_observation(session(WorkoutType::Cardio, 0.8, 2.8));

    assert_ne!(first.id, second.id);
    let ids: Vec<Uuid> = analyzer.observations().iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[test]
fn test_insert_with_duplicate_id_is_rejected() {
    let mut analyzer = ProgressAnalyzer::new();
    let stored = analyzer.add_observation(session(WorkoutType::Mixed, 1.9, 2.1));

    let err = analyzer.insert_observation(stored.clone()).unwrap_err();
    assert_eq!(err, StoreError::DuplicateId { id: stored.id });
    assert_eq!(analyzer.len(), 1);
}

#[test]
fn test_remove_unknown_id_leaves_contents_unchanged() {
    let mut analyzer = ProgressAnalyzer::new();
    analyzer.add_observation(session(WorkoutType::Strength, 2.5, 1.2));
    let before: Vec<Uuid> = analyzer.observations().iter().map(|o| o.id).collect();

    assert!(!analyzer.remove_observation(Uuid::new_v4()));
    let after: Vec<Uuid> = analyzer.observations().iter().map(|o| o.id).collect();
    assert_eq!(before, after);
}

#[test]
fn test_add_then_remove_restores_prior_content() {
    let mut analyzer = ProgressAnalyzer::new();
    let kept = analyzer.add_observation(session(WorkoutType::Strength, 2.5, 1.2));
    let transient = analyzer.add_observation(session(WorkoutType::Cardio, 0.8, 2.8));

    assert!(analyzer.remove_observation(transient.id));
    assert_eq!(analyzer.len(), 1);
    assert_eq!(analyzer.observations()[0].id, kept.id);
    // Removal is idempotent.
    assert!(!analyzer.remove_observation(transient.id));
    assert_eq!(analyzer.len(), 1);
}

// === Category summaries ===

#[test]
fn test_summary_always_covers_every_category() {
    let analyzer = ProgressAnalyzer::new();
    let summaries = analyzer.summarize_by_category();
    assert_eq!(summaries.len(), 3);
    for (summary, workout_type) in summaries.iter().zip(WorkoutType::ALL) {
        assert_eq!(summary.workout_type, workout_type);
        assert_eq!(summary.sample_count, 0);
        assert_eq!(summary.mean_muscle_gain, 0.0);
        assert_eq!(summary.mean_fat_loss, 0.0);
    }
}

#[test]
fn test_summary_means_and_counts() {
    let mut analyzer = ProgressAnalyzer::new();
    analyzer.add_observation(session(WorkoutType::Strength, 2.0, 1.0));
    analyzer.add_observation(session(WorkoutType::Strength, 4.0, 2.0));
    analyzer.add_observation(session(WorkoutType::Mixed, 1.0, 3.0));

    let summaries = analyzer.summarize_by_category();
    assert_eq!(summaries[0].mean_muscle_gain, 3.0);
    assert_eq!(summaries[0].mean_fat_loss, 1.5);
    assert_eq!(summaries[0].sample_count, 2);
    // Cardio has no sessions but still appears.
    assert_eq!(summaries[1].workout_type, WorkoutType::Cardio);
    assert_eq!(summaries[1].sample_count, 0);
    assert_eq!(summaries[2].sample_count, 1);
}

#[test]
fn test_best_category_prefers_first_on_tie() {
    let mut analyzer = ProgressAnalyzer::new();
    analyzer.add_observation(session(WorkoutType::Strength, 2.0, 1.0));
    analyzer.add_observation(session(WorkoutType::Mixed, 2.0, 1.0));

    let best = analyzer.best_category(OutcomeMetric::MuscleGain);
    assert_eq!(best.workout_type, WorkoutType::Strength);
}

#[test]
fn test_best_category_on_empty_store_is_first_declared() {
    let analyzer = ProgressAnalyzer::new();
    let best = analyzer.best_category(OutcomeMetric::FatLoss);
    assert_eq!(best.workout_type, WorkoutType::Strength);
    assert_eq!(best.sample_count, 0);
}

// === Demo dataset and insights ===

#[test]
fn test_demo_dataset_loads_ten_observations() {
    let analyzer = ProgressAnalyzer::with_demo_data();
    assert_eq!(analyzer.len(), 10);
}

#[test]
fn test_demo_insights_are_well_formed() {
    let analyzer = ProgressAnalyzer::with_demo_data();
    let insights = analyzer.key_insights(OutcomeMetric::MuscleGain);

    assert_eq!(insights.sample_count, 10);
    assert!(insights.strongest_factor.coefficient.abs() <= 1.0);
    // In the demo data every factor tracks muscle gain strongly.
    assert_eq!(insights.strength, CorrelationStrength::Strong);
    // Strength sessions carry the highest mean muscle gain.
    assert_eq!(insights.best_workout_type, WorkoutType::Strength);
}

#[test]
fn test_insights_on_empty_store_fail_closed_to_zero() {
    let analyzer = ProgressAnalyzer::new();
    let insights = analyzer.key_insights(OutcomeMetric::FatLoss);
    assert_eq!(insights.sample_count, 0);
    assert_eq!(insights.strongest_factor.coefficient, 0.0);
    assert_eq!(insights.strength, CorrelationStrength::Weak);
}
