// ABOUTME: Environment configuration for bind address, CORS, HTTP limits and jitter seeding
// ABOUTME: Parses environment variables into a typed ServerConfig with startup validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 TotalFit

//! Environment-based configuration
//!
//! | Variable | Default |
//! |---|---|
//! | `HOST` | `127.0.0.1` |
//! | `HTTP_PORT` | `8001` |
//! | `CORS_ALLOWED_ORIGINS` | `*` |
//! | `REQUEST_TIMEOUT_SECS` | `30` |
//! | `MAX_REQUEST_BODY_BYTES` | `1048576` |
//! | `JITTER_SEED` | unset |
//! | `ENVIRONMENT` | `development` |

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;
use totalfit_core::errors::{AppError, AppResult};

/// Default bind host
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
/// Default bind port
pub const DEFAULT_HTTP_PORT: u16 = 8001;
/// Default per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// Default request body limit in bytes
pub const DEFAULT_MAX_REQUEST_BODY_BYTES: usize = 1024 * 1024;

/// Deployment environment label
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (default)
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Cross-origin settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorsConfig {
    /// Comma-separated origin list, or `*` for any origin
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: "*".to_owned(),
        }
    }
}

/// HTTP transport limits
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HttpConfig {
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Largest accepted request body in bytes
    pub max_body_bytes: usize,
}

impl HttpConfig {
    /// Request timeout as a `Duration`
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            max_body_bytes: DEFAULT_MAX_REQUEST_BODY_BYTES,
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address
    pub host: IpAddr,
    /// Bind port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// CORS settings
    pub cors: CorsConfig,
    /// HTTP limits
    pub http: HttpConfig,
    /// Seed for reproducible injury-risk jitter; random when unset
    pub jitter_seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            http_port: DEFAULT_HTTP_PORT,
            environment: Environment::default(),
            cors: CorsConfig::default(),
            http: HttpConfig::default(),
            jitter_seed: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error if any variable is set to an unparseable
    /// or out-of-range value
    pub fn from_env() -> AppResult<Self> {
        let config = Self {
            host: parse_env_or("HOST", DEFAULT_HOST)?,
            http_port: parse_env_or("HTTP_PORT", DEFAULT_HTTP_PORT)?,
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            cors: CorsConfig {
                allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", "*"),
            },
            http: HttpConfig {
                request_timeout_secs: parse_env_or(
                    "REQUEST_TIMEOUT_SECS",
                    DEFAULT_REQUEST_TIMEOUT_SECS,
                )?,
                max_body_bytes: parse_env_or(
                    "MAX_REQUEST_BODY_BYTES",
                    DEFAULT_MAX_REQUEST_BODY_BYTES,
                )?,
            },
            jitter_seed: parse_optional_env("JITTER_SEED")?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject values that parse but cannot be served with
    ///
    /// # Errors
    ///
    /// Returns a configuration error for a zero timeout or zero body limit
    pub fn validate(&self) -> AppResult<()> {
        if self.http.request_timeout_secs == 0 {
            return Err(AppError::invalid_config(
                "REQUEST_TIMEOUT_SECS",
                "0",
                "must be at least 1 second",
            ));
        }
        if self.http.max_body_bytes == 0 {
            return Err(AppError::invalid_config(
                "MAX_REQUEST_BODY_BYTES",
                "0",
                "must be at least 1 byte",
            ));
        }
        Ok(())
    }

    /// Socket address the server binds to
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.http_port)
    }

    /// Human-readable summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "TotalFit ML Service Configuration:\n\
             - Environment: {}\n\
             - Bind Address: {}\n\
             - CORS Origins: {}\n\
             - Request Timeout: {}s\n\
             - Max Body Size: {} bytes\n\
             - Jitter: {}",
            self.environment,
            self.bind_addr(),
            self.cors.allowed_origins,
            self.http.request_timeout_secs,
            self.http.max_body_bytes,
            self.jitter_seed
                .map_or_else(|| "random".to_owned(), |seed| format!("seeded ({seed})")),
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_env_or<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    parse_optional_env(key).map(|value| value.unwrap_or(default))
}

fn parse_optional_env<T>(key: &str) -> AppResult<Option<T>>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| AppError::invalid_config(key, &raw, &e.to_string())),
        Err(_) => Ok(None),
    }
}
