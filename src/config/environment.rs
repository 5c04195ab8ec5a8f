// ABOUTME: Environment-based configuration for server, store, and CORS settings
// ABOUTME: Loads typed configuration from environment variables with sensible defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment configuration
//!
//! All runtime configuration is sourced from environment variables. Every
//! setting has a default suitable for local development.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Complete server configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP port for the REST API
    pub http_port: u16,
    /// Record store configuration
    pub store: StoreConfig,
    /// CORS configuration
    pub cors: CorsConfig,
}

/// Record store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding the JSON collection files
    pub data_dir: PathBuf,
}

/// CORS configuration
#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins, or "*" for any
    pub allowed_origins: String,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// - `HTTP_PORT`: REST API port (default: 8000)
    /// - `DATA_DIR`: directory for JSON collection files (default: "./data")
    /// - `CORS_ALLOWED_ORIGINS`: allowed origins list or "*" (default: "*")
    pub fn from_env() -> Result<Self> {
        let http_port = env_or("HTTP_PORT", "8000")
            .parse::<u16>()
            .context("Invalid HTTP_PORT value")?;

        let store = StoreConfig {
            data_dir: PathBuf::from(env_or("DATA_DIR", "./data")),
        };

        let cors = CorsConfig {
            allowed_origins: env_or("CORS_ALLOWED_ORIGINS", "*"),
        };

        Ok(Self {
            http_port,
            store,
            cors,
        })
    }

    /// Human-readable summary of the active configuration for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "http_port={} data_dir={} cors_allowed_origins={}",
            self.http_port,
            self.store.data_dir.display(),
            self.cors.allowed_origins
        )
    }
}

/// Read an environment variable, falling back to a default when unset
fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
