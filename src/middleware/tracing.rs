// ABOUTME: Request span construction for tower-http TraceLayer
// ABOUTME: Tags every HTTP span with method, path and the request correlation id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TotalFit

use super::request_id::RequestId;
use axum::extract::Request;
use tracing::Span;

/// Span for an incoming request
///
/// Runs inside the request id middleware, so the `RequestId` extension is
/// already present; `"unknown"` only appears when the span is built elsewhere.
pub fn make_request_span(request: &Request) -> Span {
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map_or("unknown", RequestId::as_str);

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
    )
}
