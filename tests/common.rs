// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides tempdir-backed store setup and quiet logging initialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(dead_code)]

//! Shared test utilities for `repforge`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use repforge::{
    config::environment::{CorsConfig, ServerConfig, StoreConfig},
    server::ServerResources,
    store::JsonStore,
};
use std::sync::{Arc, Once};
use tempfile::TempDir;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Server config pointing at a throwaway data directory
pub fn test_config(data_dir: &std::path::Path) -> ServerConfig {
    ServerConfig {
        http_port: 0,
        store: StoreConfig {
            data_dir: data_dir.to_path_buf(),
        },
        cors: CorsConfig {
            allowed_origins: "*".into(),
        },
    }
}

/// Standard test resources backed by a tempdir store
///
/// Returns the tempdir guard alongside the resources; dropping it removes
/// the data directory.
pub async fn create_test_resources() -> (Arc<ServerResources>, TempDir) {
    init_test_logging();
    let dir = tempfile::tempdir().expect("Failed to create tempdir");
    let store = JsonStore::new(dir.path());
    store
        .ensure_data_dir()
        .await
        .expect("Failed to create data dir");
    (Arc::new(ServerResources::new(store)), dir)
}

/// Test resources with the exercise catalog seeded
pub async fn create_seeded_resources() -> (Arc<ServerResources>, TempDir) {
    let (resources, dir) = create_test_resources().await;
    resources
        .exercises
        .seed_predefined()
        .await
        .expect("Failed to seed catalog");
    (resources, dir)
}
