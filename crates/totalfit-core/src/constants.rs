// ABOUTME: Scoring constants, metric defaults and mocked recommendation lists
// ABOUTME: Placeholder content until real models are integrated; kept as named constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TotalFit

//! Constants grouped by the component that consumes them.

use crate::models::{CareerCategory, Priority};

/// Metric field limits enforced by the schema validator
pub mod limits {
    /// Lowest accepted heart rate (bpm)
    pub const MIN_HEART_RATE: i64 = 20;
    /// Highest accepted heart rate (bpm)
    pub const MAX_HEART_RATE: i64 = 220;
    /// Lowest accepted RPE
    pub const MIN_RPE: f64 = 0.0;
    /// Highest accepted RPE
    pub const MAX_RPE: f64 = 10.0;
    /// Fewest training days per week
    pub const MIN_AVAILABILITY_DAYS: i64 = 1;
    /// Most training days per week
    pub const MAX_AVAILABILITY_DAYS: i64 = 7;
}

/// Injury risk scoring
pub mod injury {
    /// Heart rate assumed when none was measured
    pub const DEFAULT_HEART_RATE: f64 = 60.0;
    /// RPE assumed when none was measured
    pub const DEFAULT_RPE: f64 = 5.0;
    /// Heart rate at which the heart-rate term is zero
    pub const HEART_RATE_BASELINE: f64 = 50.0;
    /// Weight of the heart-rate term
    pub const HEART_RATE_WEIGHT: f64 = 0.6;
    /// Weight of the RPE term
    pub const RPE_WEIGHT: f64 = 4.0;
    /// Half-width of the uniform jitter interval
    pub const JITTER_AMPLITUDE: f64 = 5.0;
    /// Floor of the reported percentage
    pub const MIN_RISK_PERCENT: f64 = 3.0;
    /// Ceiling of the reported percentage
    pub const MAX_RISK_PERCENT: f64 = 95.0;

    /// Mocked contributing factors
    pub const CONTRIBUTORS: [&str; 3] = [
        "Training load variability",
        "Elevated RPE",
        "Sleep debt (mocked)",
    ];

    /// Mocked mitigations
    pub const RECOMMENDATIONS: [&str; 3] = [
        "Introduce deload day and mobility work",
        "Monitor morning HRV (mocked)",
        "Increase sleep to 8h for 3 nights",
    ];
}

/// Performance analysis
pub mod performance {
    /// Mocked highlights
    pub const HIGHLIGHTS: [&str; 2] = [
        "Best day reached 15k steps (mocked)",
        "Consistent pacing across week (mocked)",
    ];

    /// Mocked recommendations
    pub const RECOMMENDATIONS: [&str; 2] = [
        "Add one low-intensity aerobic session",
        "Include 2x strength sessions focusing on posterior chain",
    ];

    /// Reported when no calories were measured
    pub const CALORIES_NOT_AVAILABLE: &str = "n/a";
}

/// Training plan generation
pub mod plan {
    /// Every generated plan spans this many weeks
    pub const PLAN_WEEKS: u32 = 4;
}

/// Career recommendation rules
pub mod career {
    use super::{CareerCategory, Priority};
    use crate::models::CareerRecommendation;

    /// Steps assumed when none were measured
    pub const DEFAULT_STEPS: f64 = 8000.0;
    /// Heart rate assumed when none was measured
    pub const DEFAULT_HEART_RATE: f64 = 70.0;
    /// Mean steps above which leadership is suggested
    pub const LEADERSHIP_STEPS_THRESHOLD: f64 = 10_000.0;
    /// Mean heart rate below which coaching is suggested
    pub const COACHING_HEART_RATE_THRESHOLD: f64 = 65.0;
    /// Measured heart-rate samples required beyond this count for coaching
    pub const COACHING_MIN_HEART_RATE_SAMPLES: usize = 5;
    /// Record count required beyond this for management
    pub const MANAGEMENT_MIN_RECORDS: usize = 7;

    /// Static recommendation text with its classification
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Template {
        /// Recommendation text
        pub recommendation: &'static str,
        /// Category
        pub category: CareerCategory,
        /// Priority
        pub priority: Priority,
        /// Timeline
        pub timeline: &'static str,
    }

    impl From<&Template> for CareerRecommendation {
        fn from(template: &Template) -> Self {
            Self {
                recommendation: template.recommendation.to_owned(),
                category: template.category,
                priority: template.priority,
                timeline: template.timeline.to_owned(),
            }
        }
    }

    /// Suggested when mean steps exceed the leadership threshold
    pub const LEADERSHIP: Template = Template {
        recommendation: "Consider leadership roles or team captaincy given your consistent high activity levels",
        category: CareerCategory::Leadership,
        priority: Priority::High,
        timeline: "3-6 months",
    };

    /// Suggested for a low resting heart rate over enough samples
    pub const COACHING: Template = Template {
        recommendation: "Your excellent cardiovascular recovery suggests potential for endurance sports coaching",
        category: CareerCategory::Coaching,
        priority: Priority::Medium,
        timeline: "6-12 months",
    };

    /// Suggested for a long enough training history
    pub const MANAGEMENT: Template = Template {
        recommendation: "Your consistent training data shows discipline suitable for sports management roles",
        category: CareerCategory::Management,
        priority: Priority::Medium,
        timeline: "1-2 years",
    };

    /// Always appended, in this order
    pub const GENERAL: [Template; 4] = [
        Template {
            recommendation: "Develop communication skills through sports psychology courses",
            category: CareerCategory::Skills,
            priority: Priority::Low,
            timeline: "ongoing",
        },
        Template {
            recommendation: "Network with sports industry professionals at local events",
            category: CareerCategory::Networking,
            priority: Priority::Medium,
            timeline: "next 3 months",
        },
        Template {
            recommendation: "Create a sports performance portfolio showcasing your data analysis skills",
            category: CareerCategory::Portfolio,
            priority: Priority::Medium,
            timeline: "6 months",
        },
        /// Placeholder education record (mocked), not derived from any source data
        Template {
            recommendation: "Pursue a recognised coaching or strength and conditioning certification",
            category: CareerCategory::Education,
            priority: Priority::Low,
            timeline: "12 months",
        },
    ];
}

/// Service identity used in logs and readiness responses
pub mod service_names {
    /// Service name
    pub const TOTALFIT_ML_SERVICE: &str = "totalfit-ml-service";
}
