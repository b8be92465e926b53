// ABOUTME: CLI report over the Ironlog library surface
// ABOUTME: Prints ranked factors, category summaries, and key insights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! Ironlog report binary.
//!
//! Loads the built-in demo dataset and prints the analysis a chart renderer
//! would otherwise draw: factors ranked by association strength, mean
//! outcomes per workout type, and the headline insights.
//!
//! Usage:
//! ```bash
//! # Analyze muscle gain (default)
//! cargo run --bin ironlog-report
//!
//! # Analyze fat loss, with the dataset echoed as CSV
//! cargo run --bin ironlog-report -- --metric fat-loss --csv
//!
//! # Verbose output
//! cargo run --bin ironlog-report -- -v
//! ```

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ironlog::{CorrelationStrength, OutcomeMetric, ProgressAnalyzer};

/// Outcome metric selector for the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MetricArg {
    /// Rank factors against muscle gained
    MuscleGain,
    /// Rank factors against fat lost
    FatLoss,
}

impl From<MetricArg> for OutcomeMetric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::MuscleGain => Self::MuscleGain,
            MetricArg::FatLoss => Self::FatLoss,
        }
    }
}

#[derive(Parser)]
#[command(
    name = "ironlog-report",
    about = "Ironlog correlation report",
    long_about = "Print factor correlations, workout-type summaries, and key insights for the demo dataset"
)]
struct ReportArgs {
    /// Outcome metric to analyze
    #[arg(long, value_enum, default_value = "muscle-gain")]
    metric: MetricArg,

    /// Emit the full report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Echo the dataset as CSV after the report
    #[arg(long)]
    csv: bool,

    /// Verbose (debug-level) logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = ReportArgs::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let metric = OutcomeMetric::from(args.metric);
    let analyzer = ProgressAnalyzer::with_demo_data();
    info!(observations = analyzer.len(), %metric, "analyzing demo dataset");

    if args.json {
        let report = serde_json::json!({
            "metric": metric,
            "factor_correlations": analyzer.rank_factors(metric),
            "category_summaries": analyzer.summarize_by_category(),
            "key_insights": analyzer.key_insights(metric),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Factor correlations ({metric}):");
    for row in analyzer.rank_factors(metric) {
        println!(
            "  {:<14} {:>7.1}%  [{}, {}]",
            row.factor.label(),
            row.coefficient * 100.0,
            CorrelationStrength::from_coefficient(row.coefficient),
            row.domain,
        );
    }

    println!("\nWorkout type comparison:");
    for summary in analyzer.summarize_by_category() {
        println!(
            "  {:<10} muscle {:+.2} lbs, fat {:+.2} lbs  ({} sessions)",
            summary.workout_type.label(),
            summary.mean_muscle_gain,
            summary.mean_fat_loss,
            summary.sample_count,
        );
    }

    let insights = analyzer.key_insights(metric);
    println!("\nKey insights:");
    println!(
        "  Strongest factor: {} ({:.0}% correlation, {})",
        insights.strongest_factor.factor.label(),
        insights.strongest_factor.coefficient.abs() * 100.0,
        insights.strength,
    );
    println!("  Best workout for {metric}: {}", insights.best_workout_type);
    println!("  Sample size: {} entries", insights.sample_count);

    if args.csv {
        println!("\n{}", analyzer.export_csv());
    }

    Ok(())
}
