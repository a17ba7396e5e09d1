// ABOUTME: Rule-based career recommendations from averaged activity metrics
// ABOUTME: Threshold checks select conditional records, followed by fixed general advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TotalFit

//! Career recommendation engine
//!
//! Rules are checked in a fixed order and each one that fires appends a
//! record; the general records are always appended afterwards:
//!
//! | Rule | Condition |
//! |---|---|
//! | leadership | mean steps > 10 000 |
//! | coaching | mean heart rate < 65 and more than 5 measured heart rates |
//! | management | more than 7 records |

use crate::stats;
use totalfit_core::constants::career::{
    Template, COACHING, COACHING_HEART_RATE_THRESHOLD, COACHING_MIN_HEART_RATE_SAMPLES,
    DEFAULT_HEART_RATE, DEFAULT_STEPS, GENERAL, LEADERSHIP, LEADERSHIP_STEPS_THRESHOLD,
    MANAGEMENT, MANAGEMENT_MIN_RECORDS,
};
use totalfit_core::models::{
    CareerRecommendation, CareerRecommendationRequest, CareerRecommendationSet, MetricPoint,
};
use tracing::debug;

/// Averages the rules operate on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CareerSignals {
    /// Number of metric records supplied
    pub records: usize,
    /// Mean measured steps, or the default
    pub avg_steps: f64,
    /// Mean measured heart rate, or the default
    pub avg_heart_rate: f64,
    /// Number of records with a measured heart rate
    pub heart_rate_samples: usize,
}

impl CareerSignals {
    /// Derive the signals from a metric history
    #[must_use]
    pub fn from_metrics(metrics: &[MetricPoint]) -> Self {
        let heart_rates = stats::heart_rates(metrics);
        Self {
            records: metrics.len(),
            avg_steps: stats::mean(&stats::steps(metrics)).unwrap_or(DEFAULT_STEPS),
            avg_heart_rate: stats::mean(&heart_rates).unwrap_or(DEFAULT_HEART_RATE),
            heart_rate_samples: heart_rates.len(),
        }
    }

    /// Conditional templates whose rule fires, in rule order
    #[must_use]
    pub fn matching_templates(&self) -> Vec<&'static Template> {
        let mut matched = Vec::new();
        if self.avg_steps > LEADERSHIP_STEPS_THRESHOLD {
            matched.push(&LEADERSHIP);
        }
        if self.avg_heart_rate < COACHING_HEART_RATE_THRESHOLD
            && self.heart_rate_samples > COACHING_MIN_HEART_RATE_SAMPLES
        {
            matched.push(&COACHING);
        }
        if self.records > MANAGEMENT_MIN_RECORDS {
            matched.push(&MANAGEMENT);
        }
        matched
    }
}

/// Selects career recommendations for an athlete
#[derive(Debug, Default, Clone, Copy)]
pub struct CareerRecommendationEngine;

impl CareerRecommendationEngine {
    /// Create an engine
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Recommendations for a validated request
    #[must_use]
    pub fn recommend(&self, request: &CareerRecommendationRequest) -> CareerRecommendationSet {
        let signals = CareerSignals::from_metrics(&request.performance_data);
        let conditional = signals.matching_templates();

        debug!(
            records = signals.records,
            avg_steps = signals.avg_steps,
            avg_heart_rate = signals.avg_heart_rate,
            conditional = conditional.len(),
            has_current_role = request.current_role.is_some(),
            "Evaluated career rules"
        );

        let recommendations = conditional
            .into_iter()
            .chain(GENERAL.iter())
            .map(CareerRecommendation::from)
            .collect();

        CareerRecommendationSet {
            athlete_id: request.athlete_id.clone(),
            recommendations,
            summary: format!(
                "Based on {} performance records, showing {:.0} avg steps and {:.0} avg HR. \
                 Strong potential for sports-related career development.",
                signals.records, signals.avg_steps, signals.avg_heart_rate
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use totalfit_core::models::{CareerCategory, Priority};

    fn request(metrics: Vec<MetricPoint>) -> CareerRecommendationRequest {
        CareerRecommendationRequest {
            athlete_id: "a".to_owned(),
            performance_data: metrics,
            current_role: None,
            career_goals: None,
        }
    }

    fn categories(set: &CareerRecommendationSet) -> Vec<CareerCategory> {
        set.recommendations.iter().map(|r| r.category).collect()
    }

    #[test]
    fn test_all_rules_fire_in_order() {
        let metrics = (0..8)
            .map(|i| {
                MetricPoint::new(format!("d{i}"))
                    .with_steps(12_000)
                    .with_heart_rate(60)
            })
            .collect();
        let set = CareerRecommendationEngine::new().recommend(&request(metrics));

        assert_eq!(set.recommendations.len(), 7);
        assert_eq!(
            categories(&set),
            vec![
                CareerCategory::Leadership,
                CareerCategory::Coaching,
                CareerCategory::Management,
                CareerCategory::Skills,
                CareerCategory::Networking,
                CareerCategory::Portfolio,
                CareerCategory::Education,
            ]
        );
        assert_eq!(set.recommendations[0].priority, Priority::High);
        assert_eq!(set.recommendations[0].timeline, "3-6 months");
        assert_eq!(set.recommendations[1].timeline, "6-12 months");
        assert_eq!(set.recommendations[2].timeline, "1-2 years");
        assert_eq!(
            set.summary,
            "Based on 8 performance records, showing 12000 avg steps and 60 avg HR. \
             Strong potential for sports-related career development."
        );
    }

    #[test]
    fn test_education_placeholder_is_last_general_entry() {
        let set = CareerRecommendationEngine::new().recommend(&request(vec![]));
        let last = set.recommendations.last().unwrap();
        assert_eq!(last.category, CareerCategory::Education);
        assert_eq!(last.priority, Priority::Low);
        assert_eq!(last.timeline, "12 months");
    }

    #[test]
    fn test_empty_history_uses_defaults() {
        let set = CareerRecommendationEngine::new().recommend(&request(vec![]));
        assert_eq!(set.recommendations.len(), 4);
        assert_eq!(categories(&set)[0], CareerCategory::Skills);
        assert!(set
            .summary
            .starts_with("Based on 0 performance records, showing 8000 avg steps and 70 avg HR."));
    }

    #[test]
    fn test_steps_threshold_is_strict() {
        let at_threshold = vec![MetricPoint::new("d").with_steps(10_000)];
        let set = CareerRecommendationEngine::new().recommend(&request(at_threshold));
        assert_eq!(set.recommendations.len(), 4);

        let above = vec![MetricPoint::new("d").with_steps(10_001)];
        let set = CareerRecommendationEngine::new().recommend(&request(above));
        assert_eq!(categories(&set)[0], CareerCategory::Leadership);
    }

    #[test]
    fn test_coaching_needs_more_than_five_heart_rates() {
        let five: Vec<_> = (0..5)
            .map(|i| MetricPoint::new(format!("d{i}")).with_heart_rate(55))
            .collect();
        let signals = CareerSignals::from_metrics(&five);
        assert!(signals.matching_templates().is_empty());

        let six: Vec<_> = (0..6)
            .map(|i| MetricPoint::new(format!("d{i}")).with_heart_rate(55))
            .collect();
        let signals = CareerSignals::from_metrics(&six);
        assert_eq!(signals.matching_templates(), vec![&COACHING]);
    }

    #[test]
    fn test_management_counts_all_records() {
        let records: Vec<_> = (0..8).map(|i| MetricPoint::new(format!("d{i}"))).collect();
        let set = CareerRecommendationEngine::new().recommend(&request(records));
        assert_eq!(categories(&set)[0], CareerCategory::Management);
        assert_eq!(set.recommendations.len(), 5);
    }

    #[test]
    fn test_summary_rounds_averages() {
        let metrics = vec![
            MetricPoint::new("d1").with_steps(7001).with_heart_rate(61),
            MetricPoint::new("d2").with_steps(7002).with_heart_rate(62),
            MetricPoint::new("d3").with_steps(7004).with_heart_rate(64),
        ];
        let set = CareerRecommendationEngine::new().recommend(&request(metrics));
        assert!(set.summary.contains("showing 7002 avg steps and 62 avg HR"));
    }
}
