// ABOUTME: Core types and constants for the TotalFit ML service
// ABOUTME: Foundation crate with error handling, request/response models, validation and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TotalFit

#![deny(unsafe_code)]

//! # TotalFit Core
//!
//! Foundation crate providing shared types for the TotalFit ML service. It is
//! designed to change infrequently so the analytics crate and the server crate
//! can compile against a stable surface.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `ValidationError`
//! - **models**: Transient request and response records
//! - **validation**: JSON schema validation that coerces raw payloads into typed records
//! - **constants**: Mocked recommendation lists and scoring constants

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants (mocked lists, scoring thresholds, defaults)
pub mod constants;

/// Request and response data models
pub mod models;

/// Field-level validation of incoming JSON payloads
pub mod validation;

pub use errors::{AppError, AppResult, ErrorCode, ErrorResponse, ValidationError};
pub use validation::Schema;
