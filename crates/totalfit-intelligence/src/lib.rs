// ABOUTME: Heuristic analytics engine for the TotalFit ML service
// ABOUTME: Injury risk, performance trends, training plans and career recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TotalFit

#![deny(unsafe_code)]

//! # TotalFit Intelligence
//!
//! Four independent components, each a pure function of its own request
//! payload. The only non-determinism is the injury-risk jitter, which is drawn
//! from an injectable [`JitterSource`].

/// Career recommendation rules
pub mod career_engine;
/// Injury risk scoring
pub mod injury_risk;
/// Randomness sources for the injury-risk jitter
pub mod jitter;
/// Trend classification over metric histories
pub mod performance_analyzer;
/// Weekly training plan templates
pub mod plan_generator;
/// Small statistics helpers over optional metric values
pub mod stats;

pub use career_engine::CareerRecommendationEngine;
pub use injury_risk::InjuryRiskScorer;
pub use jitter::{FixedJitter, JitterSource, SeededJitter, ThreadRngJitter};
pub use performance_analyzer::{PerformanceAnalyzer, TrendDirection};
pub use plan_generator::PlanGenerator;
