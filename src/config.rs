// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is loaded from the environment
//! once at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `SOLANA_RPC` | RPC endpoint URL or cluster moniker | devnet |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `PUBLIC_BASE_URL` | Base URL (path prefix kept) for icons and action links | request `Host` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use url::Url;

use crate::blockchain::resolve_rpc_url;

/// Environment variable holding the RPC endpoint (URL or cluster moniker).
pub const SOLANA_RPC_ENV: &str = "SOLANA_RPC";

/// Environment variable for the bind address.
pub const HOST_ENV: &str = "HOST";

/// Environment variable for the bind port.
pub const PORT_ENV: &str = "PORT";

/// Environment variable overriding the base URL used in discovery responses.
///
/// Set this when the service runs behind a proxy that rewrites `Host` or
/// mounts it under a path prefix.
pub const PUBLIC_BASE_URL_ENV: &str = "PUBLIC_BASE_URL";

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(raw: Option<&str>) -> Self {
        match raw.map(|v| v.trim().to_ascii_lowercase()) {
            Some(v) if v == "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PUBLIC_BASE_URL: {0}")]
    InvalidPublicBaseUrl(String),
}

/// Server configuration resolved from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Resolved RPC endpoint URL.
    pub rpc_url: String,
    pub public_base_url: Option<Url>,
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup(HOST_ENV).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = lookup(PORT_ENV)
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let rpc_url = resolve_rpc_url(lookup(SOLANA_RPC_ENV).as_deref());

        let public_base_url = match lookup(PUBLIC_BASE_URL_ENV) {
            Some(raw) if !raw.trim().is_empty() => Some(
                Url::parse(raw.trim())
                    .map_err(|e| ConfigError::InvalidPublicBaseUrl(e.to_string()))?,
            ),
            _ => None,
        };

        Ok(Self {
            host,
            port,
            rpc_url,
            public_base_url,
            log_format: LogFormat::parse(lookup(LOG_FORMAT_ENV).as_deref()),
        })
    }

    /// `host:port` string for binding the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
