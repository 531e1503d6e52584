// ABOUTME: Configuration module for the health overview data layer
// ABOUTME: Environment-only configuration of goals, query windows, and the local day boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration for the health overview data layer
//!
//! Configuration comes only from environment variables; there are no config
//! files. Logging has its own settings in [`crate::logging::LoggingConfig`].

/// Environment-driven settings
pub mod environment;

pub use environment::{GoalConfig, HealthConfig};
