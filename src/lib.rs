// ABOUTME: Main library entry point for the Repforge workout tracking API
// ABOUTME: Provides REST endpoints for exercises, workout splits, sessions, and templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Repforge
//!
//! A workout tracking REST API. The service manages an exercise catalog,
//! user-defined workout splits (weekly training plans), logged workout
//! sessions with per-exercise completion tracking, and a static set of
//! template plans.
//!
//! ## Architecture
//!
//! - **Store**: flat JSON file persistence, one collection per entity type
//! - **Managers**: domain CRUD layers built on top of the store
//! - **Routes**: thin axum handlers that delegate to the managers
//! - **Server**: router assembly and lifecycle
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use repforge::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Repforge configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Predefined exercise catalog used to seed an empty store
pub mod catalog;
/// Configuration management from environment variables
pub mod config;
/// Unified error handling with `AppError` and `ErrorCode`
pub mod errors;
/// Logging configuration and structured logging setup
pub mod logging;
/// HTTP middleware (CORS)
pub mod middleware;
/// Common data structures for workout tracking
pub mod models;
/// HTTP route handlers organized by domain
pub mod routes;
/// Server resources, router assembly, and lifecycle
pub mod server;
/// Record store and domain managers
pub mod store;
/// Static workout plan templates
pub mod templates;
