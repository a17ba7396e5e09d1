// ABOUTME: Last-value-versus-mean trend classification for steps and heart rate
// ABOUTME: Builds the performance summary sentence with the average calorie figure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TotalFit

use crate::stats;
use serde::{Deserialize, Serialize};
use std::fmt;
use totalfit_core::constants::performance::{
    CALORIES_NOT_AVAILABLE, HIGHLIGHTS, RECOMMENDATIONS,
};
use totalfit_core::models::{AnalyzePerformanceRequest, MetricPoint, PerformanceSummary};
use tracing::debug;

/// Direction a metric is moving in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    /// Latest value at or above the mean (steps)
    Up,
    /// Latest value at or below the mean (heart rate)
    Down,
    /// No data, or no movement in the favourable direction
    Flat,
}

impl TrendDirection {
    /// Lowercase label used in summaries
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Flat => "flat",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Steps trend up when the latest measurement is at least the mean
#[must_use]
pub fn steps_trend(steps: &[f64]) -> TrendDirection {
    match (steps.last(), stats::mean(steps)) {
        (Some(&last), Some(mean)) if last >= mean => TrendDirection::Up,
        _ => TrendDirection::Flat,
    }
}

/// Heart rate trends down when the latest measurement is at most the mean
#[must_use]
pub fn heart_rate_trend(heart_rates: &[f64]) -> TrendDirection {
    match (heart_rates.last(), stats::mean(heart_rates)) {
        (Some(&last), Some(mean)) if last <= mean => TrendDirection::Down,
        _ => TrendDirection::Flat,
    }
}

/// Integer part of the mean calorie figure, `"n/a"` when nothing was measured
#[must_use]
pub fn calories_label(calories: &[u64]) -> String {
    if calories.is_empty() {
        return CALORIES_NOT_AVAILABLE.to_owned();
    }
    let total: u128 = calories.iter().map(|&c| u128::from(c)).sum();
    let average = total / calories.len() as u128;
    format!("{average} kcal")
}

/// Classifies recent trends and summarises them
#[derive(Debug, Default, Clone, Copy)]
pub struct PerformanceAnalyzer;

impl PerformanceAnalyzer {
    /// Create an analyzer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Summary sentence for a metric history
    #[must_use]
    pub fn summarize(&self, metrics: &[MetricPoint]) -> String {
        let steps = steps_trend(&stats::steps(metrics));
        let heart_rate = heart_rate_trend(&stats::heart_rates(metrics));
        let calories = calories_label(&stats::calories(metrics));

        debug!(
            steps_trend = %steps,
            heart_rate_trend = %heart_rate,
            calories = %calories,
            "Classified performance trends"
        );

        format!("Steps trending {steps}, heart rate trending {heart_rate}. Calories avg: {calories}")
    }

    /// Full summary for a validated request
    #[must_use]
    pub fn analyze(&self, request: &AnalyzePerformanceRequest) -> PerformanceSummary {
        PerformanceSummary {
            athlete_id: request.athlete_id.clone(),
            summary: self.summarize(&request.metrics),
            highlights: HIGHLIGHTS.iter().map(|&s| s.to_owned()).collect(),
            recommendations: RECOMMENDATIONS.iter().map(|&s| s.to_owned()).collect(),
        }
    }
}
