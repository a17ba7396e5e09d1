// ABOUTME: Shared resource container injected into every analytics handler
// ABOUTME: Holds the configuration and one instance of each intelligence component
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TotalFit

//! Server resources
//!
//! Built once at startup and shared through an `Arc`. Everything inside is
//! immutable apart from the seeded jitter source, which locks internally.

use crate::config::environment::ServerConfig;
use std::sync::Arc;
use totalfit_intelligence::{
    CareerRecommendationEngine, InjuryRiskScorer, JitterSource, PerformanceAnalyzer,
    PlanGenerator, SeededJitter, ThreadRngJitter,
};
use tracing::info;

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
    /// Injury risk scorer
    pub injury_risk: InjuryRiskScorer,
    /// Performance trend analyzer
    pub performance: PerformanceAnalyzer,
    /// Training plan generator
    pub plans: PlanGenerator,
    /// Career recommendation engine
    pub careers: CareerRecommendationEngine,
}

impl ServerResources {
    /// Create resources, seeding the risk jitter when `jitter_seed` is configured
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let jitter: Arc<dyn JitterSource> = match config.jitter_seed {
            Some(seed) => {
                info!(seed, "Injury risk jitter is seeded");
                Arc::new(SeededJitter::new(seed))
            }
            None => Arc::new(ThreadRngJitter),
        };
        Self::with_jitter(config, jitter)
    }

    /// Create resources with an explicit jitter source
    #[must_use]
    pub fn with_jitter(config: ServerConfig, jitter: Arc<dyn JitterSource>) -> Self {
        Self {
            config: Arc::new(config),
            injury_risk: InjuryRiskScorer::new(jitter),
            performance: PerformanceAnalyzer::new(),
            plans: PlanGenerator::new(),
            careers: CareerRecommendationEngine::new(),
        }
    }
}
