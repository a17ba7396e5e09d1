// ABOUTME: Axum extractor that buffers a JSON body and validates it against its schema
// ABOUTME: Maps oversized, malformed and invalid bodies to AppError responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TotalFit

use crate::middleware::request_id::RequestId;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use http::{header::CONTENT_TYPE, StatusCode};
use totalfit_core::errors::AppError;
use totalfit_core::validation::Schema;
use tracing::debug;

/// Request body parsed as JSON and validated into `T`
///
/// A missing `content-type` is accepted; a present one must be a JSON media
/// type. Every rejection carries the request id when one was assigned.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

fn is_json_content_type(value: &str) -> bool {
    let media_type = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    media_type == "application/json"
        || (media_type.starts_with("application/") && media_type.ends_with("+json"))
}

#[async_trait::async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: Schema,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let request_id = request
            .extensions()
            .get::<RequestId>()
            .map(ToString::to_string);
        let attach = |error: AppError| match &request_id {
            Some(id) => error.with_request_id(id.clone()),
            None => error,
        };

        if let Some(content_type) = request.headers().get(CONTENT_TYPE) {
            let acceptable = content_type.to_str().is_ok_and(is_json_content_type);
            if !acceptable {
                return Err(attach(AppError::invalid_input(
                    "Expected request with `Content-Type: application/json`",
                )));
            }
        }

        let body = Bytes::from_request(request, state).await.map_err(|rejection| {
            let error = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                AppError::payload_too_large(rejection.body_text())
            } else {
                AppError::invalid_input(rejection.body_text())
            };
            attach(error.with_source(rejection))
        })?;

        T::from_slice(&body).map(Self).map_err(|error| {
            debug!(field = %error.field, constraint = %error.constraint, "Rejected request body");
            attach(AppError::from(error))
        })
    }
}
