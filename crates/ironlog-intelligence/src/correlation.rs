// ABOUTME: Pearson correlation coefficient over paired numeric series
// ABOUTME: Degenerate input (no variance, n < 2) reports zero association
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! Pairwise linear correlation

/// Pearson correlation coefficient between two paired series.
///
/// Computes `r = (n·Σxy − Σx·Σy) / sqrt[(n·Σx² − (Σx)²)·(n·Σy² − (Σy)²)]`
/// over the paired prefix of the two slices (callers supply equal-length
/// series; any surplus in the longer one is ignored).
///
/// A zero denominator — all x identical, all y identical, or fewer than two
/// pairs — yields exactly `0.0` rather than `NaN`. Downstream ranking and
/// display always receive a well-formed real number; zero association is the
/// defined reading of "no variance to correlate".
#[must_use]
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    let pairs = xs.len().min(ys.len());
    if pairs < 2 {
        return 0.0;
    }
    let xs = &xs[..pairs];
    let ys = &ys[..pairs];

    let n = pairs as f64;
    let sum_x: f64 = xs.iter().sum();
    let sum_y: f64 = ys.iter().sum();
    let sum_xy: f64 = xs.iter().zip(ys).map(|(x, y)| x * y).sum();
    let sum_x_squared: f64 = xs.iter().map(|x| x * x).sum();
    let sum_y_squared: f64 = ys.iter().map(|y| y * y).sum();

    let numerator = n.mul_add(sum_xy, -(sum_x * sum_y));
    let denominator = (n.mul_add(sum_x_squared, -sum_x.powi(2))
        * n.mul_add(sum_y_squared, -sum_y.powi(2)))
    .sqrt();

    // Covers an exact zero and the NaN a rounding-negative radicand produces.
    if denominator == 0.0 || denominator.is_nan() {
        return 0.0;
    }

    (numerator / denominator).clamp(-1.0, 1.0)
}
