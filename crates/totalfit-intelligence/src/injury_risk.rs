// ABOUTME: Injury risk scoring from average heart rate and perceived exertion
// ABOUTME: Produces a clamped percentage, a risk band and the mocked contributor lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TotalFit

//! Injury risk scorer
//!
//! ```text
//! raw  = (avg_hr - 50) * 0.6 + avg_rpe * 4 + u,   u ~ U[-5, 5]
//! risk = round1(clamp(raw, 3, 95))
//! ```
//!
//! Missing heart rate defaults to 60 bpm and missing RPE to 5.0. The band is
//! taken from the reported (rounded) percentage so the two fields always agree.

use crate::jitter::JitterSource;
use crate::stats;
use std::sync::Arc;
use totalfit_core::constants::injury::{
    CONTRIBUTORS, DEFAULT_HEART_RATE, DEFAULT_RPE, HEART_RATE_BASELINE, HEART_RATE_WEIGHT,
    JITTER_AMPLITUDE, MAX_RISK_PERCENT, MIN_RISK_PERCENT, RECOMMENDATIONS, RPE_WEIGHT,
};
use totalfit_core::models::{InjuryRiskAssessment, MetricPoint, PredictInjuryRequest, RiskLevel};
use tracing::debug;

/// Risk percentage before jitter, clamping and rounding
#[must_use]
pub fn base_score(avg_heart_rate: f64, avg_rpe: f64) -> f64 {
    (avg_heart_rate - HEART_RATE_BASELINE).mul_add(HEART_RATE_WEIGHT, avg_rpe * RPE_WEIGHT)
}

/// Clamp into the reportable range and round to one decimal
#[must_use]
pub fn finalize_score(raw: f64) -> f64 {
    let clamped = raw.clamp(MIN_RISK_PERCENT, MAX_RISK_PERCENT);
    (clamped * 10.0).round() / 10.0
}

/// Scores injury risk with an injected jitter source
#[derive(Clone)]
pub struct InjuryRiskScorer {
    jitter: Arc<dyn JitterSource>,
}

impl InjuryRiskScorer {
    /// Create a scorer drawing its perturbation from `jitter`
    #[must_use]
    pub fn new(jitter: Arc<dyn JitterSource>) -> Self {
        Self { jitter }
    }

    /// Risk percentage for a metric history, after jitter, clamping and rounding
    #[must_use]
    pub fn score(&self, metrics: &[MetricPoint]) -> f64 {
        let avg_heart_rate = stats::mean(&stats::heart_rates(metrics)).unwrap_or(DEFAULT_HEART_RATE);
        let avg_rpe = stats::mean(&stats::rpe_values(metrics)).unwrap_or(DEFAULT_RPE);
        let jitter = self.jitter.uniform(-JITTER_AMPLITUDE, JITTER_AMPLITUDE);

        let base = base_score(avg_heart_rate, avg_rpe);
        let risk = finalize_score(base + jitter);

        debug!(
            avg_heart_rate,
            avg_rpe,
            base_score = base,
            jitter,
            risk,
            "Scored injury risk"
        );
        risk
    }

    /// Full assessment for a validated request
    #[must_use]
    pub fn assess(&self, request: &PredictInjuryRequest) -> InjuryRiskAssessment {
        let injury_risk_percent = self.score(&request.recent_metrics);

        InjuryRiskAssessment {
            athlete_id: request.athlete_id.clone(),
            injury_risk_percent,
            risk_level: RiskLevel::from_percent(injury_risk_percent),
            contributors: CONTRIBUTORS.iter().map(|&s| s.to_owned()).collect(),
            recommendations: RECOMMENDATIONS.iter().map(|&s| s.to_owned()).collect(),
        }
    }
}
