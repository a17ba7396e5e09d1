// ABOUTME: Analytics route handlers for injury risk, performance, plans and careers
// ABOUTME: Each endpoint validates its body, runs one intelligence component and returns JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TotalFit

//! Analytics routes
//!
//! All four endpoints are `POST` with a JSON body and answer `200` with the
//! component's result. Validation failures are returned as `AppError`.

use crate::{extract::ValidatedJson, resources::ServerResources};
use axum::{extract::State, routing::post, Json, Router};
use std::sync::Arc;
use totalfit_core::errors::AppError;
use totalfit_core::models::{
    AnalyzePerformanceRequest, CareerRecommendationRequest, CareerRecommendationSet,
    GeneratePlanRequest, InjuryRiskAssessment, PerformanceSummary, PredictInjuryRequest,
    TrainingPlan,
};
use tracing::info;

/// Analytics routes
pub struct AnalyticsRoutes;

impl AnalyticsRoutes {
    /// Create all analytics routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/predict-injury", post(Self::handle_predict_injury))
            .route("/analyze-performance", post(Self::handle_analyze_performance))
            .route("/generate-plan", post(Self::handle_generate_plan))
            .route(
                "/career-recommendations",
                post(Self::handle_career_recommendations),
            )
            .with_state(resources)
    }

    async fn handle_predict_injury(
        State(resources): State<Arc<ServerResources>>,
        ValidatedJson(request): ValidatedJson<PredictInjuryRequest>,
    ) -> Result<Json<InjuryRiskAssessment>, AppError> {
        let assessment = resources.injury_risk.assess(&request);
        info!(
            athlete.id = %request.athlete_id,
            metrics = request.recent_metrics.len(),
            risk_percent = assessment.injury_risk_percent,
            risk_level = %assessment.risk_level,
            "Predicted injury risk"
        );
        Ok(Json(assessment))
    }

    async fn handle_analyze_performance(
        State(resources): State<Arc<ServerResources>>,
        ValidatedJson(request): ValidatedJson<AnalyzePerformanceRequest>,
    ) -> Result<Json<PerformanceSummary>, AppError> {
        let summary = resources.performance.analyze(&request);
        info!(
            athlete.id = %request.athlete_id,
            metrics = request.metrics.len(),
            "Analyzed performance"
        );
        Ok(Json(summary))
    }

    async fn handle_generate_plan(
        State(resources): State<Arc<ServerResources>>,
        ValidatedJson(request): ValidatedJson<GeneratePlanRequest>,
    ) -> Result<Json<TrainingPlan>, AppError> {
        let plan = resources.plans.generate(&request);
        info!(
            athlete.id = %request.athlete_id,
            availability_days = request.availability_days,
            "Generated training plan"
        );
        Ok(Json(plan))
    }

    async fn handle_career_recommendations(
        State(resources): State<Arc<ServerResources>>,
        ValidatedJson(request): ValidatedJson<CareerRecommendationRequest>,
    ) -> Result<Json<CareerRecommendationSet>, AppError> {
        let set = resources.careers.recommend(&request);
        info!(
            athlete.id = %request.athlete_id,
            records = request.performance_data.len(),
            recommendations = set.recommendations.len(),
            "Generated career recommendations"
        );
        Ok(Json(set))
    }
}
