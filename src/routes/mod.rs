// ABOUTME: Route module organization for the TotalFit ML service HTTP API
// ABOUTME: Groups analytics endpoints and health probes into mergeable routers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TotalFit

/// Injury, performance, planning and career endpoints
pub mod analytics;
/// Liveness and readiness probes
pub mod health;

pub use analytics::AnalyticsRoutes;
pub use health::HealthRoutes;
