// ABOUTME: Tests for environment-driven server and logging configuration
// ABOUTME: Mutates process environment, so every test runs serially
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TotalFit

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use std::env;
use std::net::{IpAddr, Ipv4Addr};
use totalfit_core::errors::ErrorCode;
use totalfit_ml_service::config::environment::{Environment, ServerConfig};
use totalfit_ml_service::logging::{LogFormat, LoggingConfig};

const SERVER_VARS: [&str; 7] = [
    "HOST",
    "HTTP_PORT",
    "CORS_ALLOWED_ORIGINS",
    "REQUEST_TIMEOUT_SECS",
    "MAX_REQUEST_BODY_BYTES",
    "JITTER_SEED",
    "ENVIRONMENT",
];

fn clear_server_env() {
    for var in SERVER_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_when_unset() {
    clear_server_env();
    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
    assert_eq!(config.http_port, 8001);
    assert_eq!(config.cors.allowed_origins, "*");
    assert_eq!(config.http.request_timeout_secs, 30);
    assert_eq!(config.http.max_body_bytes, 1_048_576);
    assert_eq!(config.jitter_seed, None);
    assert_eq!(config.environment, Environment::Development);
}

#[test]
#[serial]
fn test_overrides_from_env() {
    clear_server_env();
    env::set_var("HOST", "0.0.0.0");
    env::set_var("HTTP_PORT", "9100");
    env::set_var("CORS_ALLOWED_ORIGINS", "https://a.example,https://b.example");
    env::set_var("REQUEST_TIMEOUT_SECS", "5");
    env::set_var("MAX_REQUEST_BODY_BYTES", "2048");
    env::set_var("JITTER_SEED", "42");
    env::set_var("ENVIRONMENT", "production");

    let config = ServerConfig::from_env().unwrap();
    clear_server_env();

    assert_eq!(config.bind_addr().to_string(), "0.0.0.0:9100");
    assert_eq!(
        config.cors.allowed_origins,
        "https://a.example,https://b.example"
    );
    assert_eq!(config.http.request_timeout_secs, 5);
    assert_eq!(config.http.max_body_bytes, 2048);
    assert_eq!(config.jitter_seed, Some(42));
    assert!(config.environment.is_production());
    assert!(config.summary().contains("Jitter: seeded (42)"));
}

#[test]
#[serial]
fn test_invalid_port_is_config_error() {
    clear_server_env();
    env::set_var("HTTP_PORT", "not-a-port");

    let err = ServerConfig::from_env().unwrap_err();
    clear_server_env();

    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert!(err.message.contains("HTTP_PORT"));
    assert!(err.message.contains("not-a-port"));
}

#[test]
#[serial]
fn test_invalid_seed_and_zero_timeout_rejected() {
    clear_server_env();
    env::set_var("JITTER_SEED", "-1");
    assert!(ServerConfig::from_env().is_err());

    clear_server_env();
    env::set_var("REQUEST_TIMEOUT_SECS", "0");
    let err = ServerConfig::from_env().unwrap_err();
    clear_server_env();
    assert!(err.message.contains("REQUEST_TIMEOUT_SECS"));
}

#[test]
#[serial]
fn test_blank_values_fall_back_to_defaults() {
    clear_server_env();
    env::set_var("HTTP_PORT", "  ");
    env::set_var("JITTER_SEED", "");

    let config = ServerConfig::from_env().unwrap();
    clear_server_env();

    assert_eq!(config.http_port, 8001);
    assert_eq!(config.jitter_seed, None);
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("LOG_FORMAT", "json");
    env::set_var("SERVICE_NAME", "totalfit-ml-staging");
    env::set_var("ENVIRONMENT", "production");

    let config = LoggingConfig::from_env();
    env::remove_var("LOG_FORMAT");
    env::remove_var("SERVICE_NAME");
    env::remove_var("ENVIRONMENT");

    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.service_name, "totalfit-ml-staging");
    assert!(config.include_location);
    assert!(config.include_thread);
}

#[test]
#[serial]
fn test_logging_config_treats_prod_alias_as_production() {
    env::set_var("ENVIRONMENT", "prod");

    let config = LoggingConfig::from_env();
    env::remove_var("ENVIRONMENT");

    assert!(config.include_location);
    assert!(config.include_thread);
}
