// ABOUTME: HTTP middleware for request correlation, CORS and request tracing
// ABOUTME: Layers applied around every route by the server router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TotalFit

/// Cross-origin resource sharing setup
pub mod cors;
/// Request id assignment and propagation
pub mod request_id;
/// Request span construction for `TraceLayer`
pub mod tracing;

pub use cors::setup_cors;
pub use request_id::{request_id_middleware, RequestId, REQUEST_ID_HEADER};
pub use self::tracing::make_request_span;
