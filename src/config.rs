// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! Environment variable names, defaults, and the [`AppConfig`] loaded from
//! them at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `JWT_SECRET` | Token signing secret | Required |
//! | `AUTH_USERNAME` | Login username of the built-in account | `admin` |
//! | `AUTH_PASSWORD` | Login password of the built-in account | `password` |
//! | `AUTH_SUBJECT_ID` | Identity bound into issued tokens | `1` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::net::{IpAddr, SocketAddr};

use crate::auth::{Identity, SecretKey};

pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";

/// Token signing secret. Startup fails without it, so no protected route is
/// ever served unsigned.
pub const JWT_SECRET_ENV: &str = "JWT_SECRET";

pub const AUTH_USERNAME_ENV: &str = "AUTH_USERNAME";
pub const AUTH_PASSWORD_ENV: &str = "AUTH_PASSWORD";

/// Parsed as an integer when possible, otherwise used as a string identity.
pub const AUTH_SUBJECT_ID_ENV: &str = "AUTH_SUBJECT_ID";

pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_USERNAME: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "password";
pub const DEFAULT_SUBJECT_ID: i64 = 1;
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

/// Configuration errors raised at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("JWT_SECRET must be set to a non-empty value")]
    MissingSecret,
    #[error("invalid HOST value: {0}")]
    InvalidHost(String),
    #[error("invalid PORT value: {0}")]
    InvalidPort(String),
    #[error("LOG_FORMAT must be `json` or `pretty`, got {0}")]
    InvalidLogFormat(String),
}

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}

/// Configuration of the built-in account checked at login.
#[derive(Debug, Clone)]
pub struct AccountConfig {
    pub username: String,
    pub password: String,
    pub subject: Identity,
}

/// Application configuration loaded from environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub secret: SecretKey,
    pub account: AccountConfig,
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup(JWT_SECRET_ENV)
            .and_then(SecretKey::new)
            .ok_or(ConfigError::MissingSecret)?;

        let host = lookup(HOST_ENV).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host: IpAddr = host.parse().map_err(|_| ConfigError::InvalidHost(host))?;

        let port = match lookup(PORT_ENV) {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let subject = match lookup(AUTH_SUBJECT_ID_ENV) {
            Some(raw) => raw
                .parse::<i64>()
                .map(Identity::Numeric)
                .unwrap_or(Identity::Named(raw)),
            None => Identity::Numeric(DEFAULT_SUBJECT_ID),
        };

        let account = AccountConfig {
            username: lookup(AUTH_USERNAME_ENV).unwrap_or_else(|| DEFAULT_USERNAME.to_string()),
            password: lookup(AUTH_PASSWORD_ENV).unwrap_or_else(|| DEFAULT_PASSWORD.to_string()),
            subject,
        };

        let log_format = match lookup(LOG_FORMAT_ENV).as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => return Err(ConfigError::InvalidLogFormat(other.to_string())),
        };

        Ok(Self {
            bind_addr: SocketAddr::new(host, port),
            secret,
            account,
            log_format,
        })
    }
}
