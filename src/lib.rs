// ABOUTME: Main library entry point for the TotalFit ML service
// ABOUTME: Wires configuration, logging, middleware and analytics routes into an axum server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TotalFit

#![deny(unsafe_code)]

//! # TotalFit ML Service
//!
//! An HTTP service that turns recent athlete metrics into heuristic analytics:
//! an injury risk estimate, a performance trend summary, a templated weekly
//! training plan and rule-based career recommendations.
//!
//! Domain types, validation and the shared error type live in
//! `totalfit-core`; the scoring components live in `totalfit-intelligence`.
//! This crate adds the HTTP surface around them.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use totalfit_ml_service::{config::environment::ServerConfig, resources::ServerResources, server};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     server::run(Arc::new(ServerResources::new(config))).await
//! }
//! ```

/// Environment-driven configuration
pub mod config;
/// Validating JSON body extractor
pub mod extract;
/// Tracing subscriber setup
pub mod logging;
/// Request id, CORS and tracing middleware
pub mod middleware;
/// Shared handler resources
pub mod resources;
/// HTTP route handlers
pub mod routes;
/// Router assembly and server lifecycle
pub mod server;

pub use totalfit_core::errors;
pub use totalfit_core::models;
