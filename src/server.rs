// ABOUTME: HTTP server assembly and lifecycle for the TotalFit ML service
// ABOUTME: Builds the layered axum router, binds the listener and shuts down on signals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TotalFit

use crate::{
    middleware::{make_request_span, request_id_middleware, setup_cors, RequestId},
    resources::ServerResources,
    routes::{AnalyticsRoutes, HealthRoutes},
};
use anyhow::{Context, Result};
use axum::{
    extract::{DefaultBodyLimit, Request},
    middleware, Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use totalfit_core::errors::AppError;
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};

/// Build the complete router with all middleware layers
///
/// The request id layer is outermost so that trace spans and error bodies
/// can read the id. axum's built-in 2 MiB extractor limit is disabled so the
/// configured `max_body_bytes` is the only body limit.
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let config = Arc::clone(&resources.config);

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(AnalyticsRoutes::routes(resources))
        .fallback(handle_not_found)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(config.http.max_body_bytes))
        .layer(TimeoutLayer::new(config.http.request_timeout()))
        .layer(setup_cors(&config))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(middleware::from_fn(request_id_middleware))
}

async fn handle_not_found(request: Request) -> AppError {
    let error = AppError::not_found(format!(
        "Route {} {}",
        request.method(),
        request.uri().path()
    ));
    match request.extensions().get::<RequestId>() {
        Some(id) => error.with_request_id(id.to_string()),
        None => error,
    }
}

/// Bind the configured address and serve until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the listener cannot be bound or the server fails
pub async fn run(resources: Arc<ServerResources>) -> Result<()> {
    let addr = resources.config.bind_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(%addr, "TotalFit ML Service listening");

    serve(listener, resources).await
}

/// Serve on an already bound listener until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the server fails while running
pub async fn serve(listener: TcpListener, resources: Arc<ServerResources>) -> Result<()> {
    axum::serve(listener, build_router(resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("TotalFit ML Service stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or on SIGTERM on unix
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl-C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
