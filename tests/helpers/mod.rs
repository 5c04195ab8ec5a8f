// ABOUTME: Helper module organization for integration tests
// ABOUTME: Exposes the axum request/response testing utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod axum_test;
