// ABOUTME: Configuration module organization for Repforge
// ABOUTME: Groups environment-driven configuration under a single namespace
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration management

/// Environment-based server configuration
pub mod environment;
