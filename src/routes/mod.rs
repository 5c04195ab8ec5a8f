// ABOUTME: Route module organization for Repforge HTTP endpoints
// ABOUTME: Provides route definitions organized by domain with thin handler functions
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Route module for Repforge
//!
//! This module organizes all HTTP routes by domain. Each domain module
//! contains only route definitions and thin handler functions that delegate
//! to the store managers.

/// Exercise catalog routes
pub mod exercises;
/// Health check routes
pub mod health;
/// Workout session routes, including completion tracking
pub mod sessions;
/// Workout split routes
pub mod splits;
/// Workout template routes
pub mod templates;

/// Exercise route handlers
pub use exercises::ExerciseRoutes;
/// Health check route handlers
pub use health::HealthRoutes;
/// Session route handlers
pub use sessions::SessionRoutes;
/// Split route handlers
pub use splits::SplitRoutes;
/// Template route handlers
pub use templates::TemplateRoutes;
