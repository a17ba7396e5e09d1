// ABOUTME: Arithmetic helpers over the measured values of a metric history
// ABOUTME: Unmeasured fields are skipped, never counted as zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TotalFit

use totalfit_core::models::MetricPoint;

/// Arithmetic mean, `None` for an empty slice
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Measured step counts, in input order
#[must_use]
pub fn steps(points: &[MetricPoint]) -> Vec<f64> {
    points.iter().filter_map(|p| p.steps).map(|s| s as f64).collect()
}

/// Measured heart rates, in input order
#[must_use]
pub fn heart_rates(points: &[MetricPoint]) -> Vec<f64> {
    points
        .iter()
        .filter_map(|p| p.heart_rate)
        .map(f64::from)
        .collect()
}

/// Measured calories, in input order
#[must_use]
pub fn calories(points: &[MetricPoint]) -> Vec<u64> {
    points.iter().filter_map(|p| p.calories).collect()
}

/// Measured RPE values, in input order
#[must_use]
pub fn rpe_values(points: &[MetricPoint]) -> Vec<f64> {
    points.iter().filter_map(|p| p.rpe).collect()
}
