// ABOUTME: Common fixtures for HTTP integration tests
// ABOUTME: Builds routers over deterministic resources and sample metric payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TotalFit

#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use totalfit_intelligence::FixedJitter;
use totalfit_ml_service::{
    config::environment::ServerConfig, resources::ServerResources, server::build_router,
};

/// Router whose injury-risk jitter is always zero
pub fn test_router() -> Router {
    test_router_with_config(ServerConfig::default())
}

/// Zero-jitter router over a custom configuration
pub fn test_router_with_config(config: ServerConfig) -> Router {
    let resources = ServerResources::with_jitter(config, Arc::new(FixedJitter(0.0)));
    build_router(Arc::new(resources))
}

/// One week of steadily improving metrics
pub fn sample_week() -> Value {
    json!([
        { "date": "2025-01-01", "steps": 8000, "heart_rate": 68, "calories": 2300, "rpe": 6.0 },
        { "date": "2025-01-02", "steps": 8500, "heart_rate": 66, "calories": 2400, "rpe": 5.5 },
        { "date": "2025-01-03", "steps": 9000, "heart_rate": 65, "calories": 2500 },
        { "date": "2025-01-04", "steps": 9500, "heart_rate": 64, "calories": 2600, "rpe": 5.0 },
        { "date": "2025-01-05" },
        { "date": "2025-01-06", "steps": 10000, "heart_rate": 62, "rpe": 4.5 },
        { "date": "2025-01-07", "steps": 11000, "heart_rate": 60, "calories": 2700 }
    ])
}
