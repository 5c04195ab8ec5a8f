// ABOUTME: HTTP middleware module organization
// ABOUTME: Currently provides CORS configuration for the REST API
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP middleware

/// CORS configuration for web client access
pub mod cors;

pub use cors::setup_cors;
