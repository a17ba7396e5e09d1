// ABOUTME: Server binary for the TotalFit ML analytics service
// ABOUTME: Loads environment configuration, initializes logging and serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TotalFit

//! # TotalFit ML Service Binary
//!
//! Starts the HTTP API exposing injury risk, performance, planning and
//! career endpoints.

use anyhow::Result;
use clap::Parser;
use std::net::IpAddr;
use std::sync::Arc;
use totalfit_ml_service::{
    config::environment::ServerConfig, logging, resources::ServerResources, server,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "totalfit-ml-service")]
#[command(about = "TotalFit ML Service - heuristic athlete analytics over HTTP")]
#[command(version)]
pub struct Args {
    /// Override bind host
    #[arg(long)]
    host: Option<IpAddr>,

    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    logging::init_from_env()?;

    info!("{}", config.summary());
    display_available_endpoints(&config);

    let resources = Arc::new(ServerResources::new(config));
    server::run(resources).await
}

#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(config: &ServerConfig) {
    let addr = config.bind_addr();

    info!("=== Available API Endpoints ===");
    info!("Analytics:");
    info!("   Injury Risk:       POST http://{addr}/predict-injury");
    info!("   Performance:       POST http://{addr}/analyze-performance");
    info!("   Training Plan:     POST http://{addr}/generate-plan");
    info!("   Career Advice:     POST http://{addr}/career-recommendations");
    info!("Monitoring:");
    info!("   Health:            GET  http://{addr}/health");
    info!("   Readiness:         GET  http://{addr}/ready");
    info!("=== End of Endpoint List ===");
}
