// ABOUTME: Configuration module root for the TotalFit ML service
// ABOUTME: Re-exports the environment-driven server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TotalFit

//! Server configuration loaded from environment variables

/// Environment-based server configuration
pub mod environment;

pub use environment::{CorsConfig, Environment, HttpConfig, ServerConfig};
