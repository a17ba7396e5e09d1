// ABOUTME: Request and response records exchanged with the analytics endpoints
// ABOUTME: Transient types only; nothing here is persisted or shared between requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TotalFit

//! Data models for the analytics endpoints.
//!
//! Optional metric fields are modelled as `Option<_>`: `None` means the value was
//! not measured, which is distinct from a measured zero.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One day of athlete measurements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricPoint {
    /// Calendar date label as supplied by the client
    pub date: String,
    /// Step count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<u64>,
    /// Average heart rate in bpm, within [20, 220]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heart_rate: Option<u16>,
    /// Energy expenditure in kcal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<u64>,
    /// Rating of perceived exertion, within [0, 10]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpe: Option<f64>,
}

impl MetricPoint {
    /// Create a point with no measurements
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            steps: None,
            heart_rate: None,
            calories: None,
            rpe: None,
        }
    }

    /// Set the step count
    #[must_use]
    pub const fn with_steps(mut self, steps: u64) -> Self {
        self.steps = Some(steps);
        self
    }

    /// Set the heart rate
    #[must_use]
    pub const fn with_heart_rate(mut self, heart_rate: u16) -> Self {
        self.heart_rate = Some(heart_rate);
        self
    }

    /// Set the calories
    #[must_use]
    pub const fn with_calories(mut self, calories: u64) -> Self {
        self.calories = Some(calories);
        self
    }

    /// Set the RPE
    #[must_use]
    pub const fn with_rpe(mut self, rpe: f64) -> Self {
        self.rpe = Some(rpe);
        self
    }
}

// ============================================================================
// Requests
// ============================================================================

/// `POST /predict-injury` payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictInjuryRequest {
    /// Athlete identifier, echoed back
    pub athlete_id: String,
    /// Recent metric history, oldest first
    pub recent_metrics: Vec<MetricPoint>,
}

/// `POST /analyze-performance` payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzePerformanceRequest {
    /// Athlete identifier, echoed back
    pub athlete_id: String,
    /// Metric history, oldest first
    pub metrics: Vec<MetricPoint>,
}

/// `POST /generate-plan` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratePlanRequest {
    /// Athlete identifier, echoed back
    pub athlete_id: String,
    /// Free-text training goal
    pub goal: String,
    /// Training days per week, within [1, 7]
    pub availability_days: u8,
    /// Training preferences; accepted but not used by plan generation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Vec<String>>,
}

/// `POST /career-recommendations` payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerRecommendationRequest {
    /// Athlete identifier, echoed back
    pub athlete_id: String,
    /// Metric history used for the threshold checks
    pub performance_data: Vec<MetricPoint>,
    /// Current role; accepted but not used by the rules
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_role: Option<String>,
    /// Stated career goals; accepted but not used by the rules
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub career_goals: Option<Vec<String>>,
}

// ============================================================================
// Responses
// ============================================================================

/// Categorical injury risk band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Below 20%
    Low,
    /// 20% up to 40%
    Moderate,
    /// 40% up to 60%
    Elevated,
    /// 60% and above
    High,
}

impl RiskLevel {
    /// Classify a risk percentage; each band's upper bound is exclusive
    #[must_use]
    pub fn from_percent(percent: f64) -> Self {
        if percent < 20.0 {
            Self::Low
        } else if percent < 40.0 {
            Self::Moderate
        } else if percent < 60.0 {
            Self::Elevated
        } else {
            Self::High
        }
    }

    /// Display label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::Elevated => "Elevated",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `POST /predict-injury` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InjuryRiskAssessment {
    /// Athlete identifier
    pub athlete_id: String,
    /// Risk percentage in [3.0, 95.0], one decimal
    pub injury_risk_percent: f64,
    /// Band the percentage falls into
    pub risk_level: RiskLevel,
    /// Contributing factors
    pub contributors: Vec<String>,
    /// Suggested mitigations
    pub recommendations: Vec<String>,
}

/// `POST /analyze-performance` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceSummary {
    /// Athlete identifier
    pub athlete_id: String,
    /// One-sentence trend summary
    pub summary: String,
    /// Notable observations
    pub highlights: Vec<String>,
    /// Suggested adjustments
    pub recommendations: Vec<String>,
}

/// Day of the training week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weekday {
    /// Monday
    Mon,
    /// Tuesday
    Tue,
    /// Wednesday
    Wed,
    /// Thursday
    Thu,
    /// Friday
    Fri,
    /// Saturday
    Sat,
    /// Sunday
    Sun,
}

impl Weekday {
    /// Monday-first week order
    pub const WEEK: [Self; 7] = [
        Self::Mon,
        Self::Tue,
        Self::Wed,
        Self::Thu,
        Self::Fri,
        Self::Sat,
        Self::Sun,
    ];

    /// Short label used on the wire
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mon => "Mon",
            Self::Tue => "Tue",
            Self::Wed => "Wed",
            Self::Thu => "Thu",
            Self::Fri => "Fri",
            Self::Sat => "Sat",
            Self::Sun => "Sun",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of training session scheduled on a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionType {
    /// High-intensity interval work
    Intervals,
    /// Resistance training
    Strength,
    /// Steady aerobic work
    Endurance,
}

/// One scheduled session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDay {
    /// Day of the week
    pub day: Weekday,
    /// Session type
    pub session: SessionType,
    /// Templated session description
    pub details: String,
}

/// `POST /generate-plan` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingPlan {
    /// Athlete identifier
    pub athlete_id: String,
    /// Goal echoed from the request
    pub goal: String,
    /// Plan length in weeks
    pub weeks: u32,
    /// Weekly schedule, in weekday order
    pub plan: Vec<PlanDay>,
}

/// Area a career recommendation belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CareerCategory {
    /// Captaincy and team leadership
    Leadership,
    /// Coaching pathways
    Coaching,
    /// Sports management
    Management,
    /// Transferable skills
    Skills,
    /// Professional networking
    Networking,
    /// Showcasing work
    Portfolio,
    /// Formal qualifications
    Education,
}

/// Urgency of a career recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Act first
    High,
    /// Act soon
    Medium,
    /// Background activity
    Low,
}

/// One career recommendation record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerRecommendation {
    /// Recommendation text
    pub recommendation: String,
    /// Category
    pub category: CareerCategory,
    /// Priority
    pub priority: Priority,
    /// Suggested timeline
    pub timeline: String,
}

/// `POST /career-recommendations` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerRecommendationSet {
    /// Athlete identifier
    pub athlete_id: String,
    /// Conditional recommendations first, then the fixed general ones
    pub recommendations: Vec<CareerRecommendation>,
    /// One-sentence summary of the averaged metrics
    pub summary: String,
}
