// ABOUTME: Main library entry point for the health overview data layer
// ABOUTME: Permission-gated access to height, activity, heart rate, and nutrition in a platform health store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Health Overview
//!
//! Reads a user's personal health metrics from a platform health store and writes
//! nutrition entries back to it, behind a permission gate.
//!
//! ## Architecture
//!
//! - **Store**: the [`store::HealthStore`] trait is the boundary to the platform.
//!   [`store::InMemoryHealthStore`] is a synthetic implementation for
//!   development and tests.
//! - **Permissions**: [`permissions::PermissionGate`] reduces per-scope
//!   authorization to one boolean.
//! - **Manager**: [`manager::HealthDataManager`] turns store queries into typed
//!   records.
//! - **State**: [`state::PresentationContext`] owns each screen's observable
//!   state on one task.
//! - **Screens**: controllers in [`screens`] run the load and save flows.
//! - **Flow**: [`flow::PermissionFlow`] decides which top-level view is shown.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use health_overview::config::HealthConfig;
//! use health_overview::errors::AppResult;
//! use health_overview::manager::HealthDataManager;
//! use health_overview::store::InMemoryHealthStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let store = Arc::new(InMemoryHealthStore::authorized());
//!     let manager = HealthDataManager::new(store, HealthConfig::from_env()?);
//!
//!     if manager.request_and_verify().await? {
//!         let activity = manager.fetch_today_activity_data().await?;
//!         println!("{} steps, {} floors", activity.steps, activity.floors);
//!     }
//!     Ok(())
//! }
//! ```

pub use health_core::{constants, errors, models};

/// Time source for "today" and trailing windows
pub mod clock;

/// Environment configuration
pub mod config;

/// Permission flow state machine
pub mod flow;

/// Logging configuration and structured store events
pub mod logging;

/// Typed data access facade
pub mod manager;

/// Nutrition form validation and session log
pub mod nutrition;

/// Permission gate over the required scopes
pub mod permissions;

/// Screen controllers
pub mod screens;

/// Per-screen observable state
pub mod state;

/// Derived statistics
pub mod stats;

/// Health store boundary and the in-memory store
pub mod store;
