// ABOUTME: Shared fixtures for integration tests
// ABOUTME: Fixed clock, UTC configuration, manager construction, and sample builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `health_overview`

use chrono::{DateTime, Duration, TimeZone, Utc};
use health_overview::clock::FixedClock;
use health_overview::config::HealthConfig;
use health_overview::manager::HealthDataManager;
use health_overview::models::{HealthScope, HealthUnit, Quantity, QuantitySample, Sample};
use health_overview::store::InMemoryHealthStore;
use std::sync::Arc;

/// 2025-07-15 14:30:00 UTC
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 7, 15, 14, 30, 0).unwrap()
}

/// Midnight UTC of the fixed day
pub fn fixed_midnight() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 7, 15, 0, 0, 0).unwrap()
}

/// Default configuration with the day boundary at UTC midnight
pub fn utc_config() -> HealthConfig {
    HealthConfig {
        utc_offset_minutes: Some(0),
        ..HealthConfig::default()
    }
}

/// Manager over `store` pinned to [`fixed_now`]
pub fn manager_for(store: &Arc<InMemoryHealthStore>) -> HealthDataManager {
    manager_with_config(store, utc_config())
}

/// Manager over `store` pinned to [`fixed_now`] with `config`
pub fn manager_with_config(
    store: &Arc<InMemoryHealthStore>,
    config: HealthConfig,
) -> HealthDataManager {
    let store: Arc<InMemoryHealthStore> = Arc::clone(store);
    HealthDataManager::with_clock(store, Arc::new(FixedClock::new(fixed_now())), config)
}

/// Point sample of `scope` in its canonical unit
pub fn point(scope: HealthScope, value: f64, at: DateTime<Utc>) -> Sample {
    QuantitySample::at(scope, Quantity::new(value, scope.canonical_unit()), at).into()
}

/// Steps counted over the hour starting at `start`
pub fn steps(count: f64, start: DateTime<Utc>) -> Sample {
    QuantitySample::new(
        HealthScope::StepCount,
        Quantity::new(count, HealthUnit::Count),
        start,
        start + Duration::hours(1),
    )
    .into()
}

/// Floors climbed at `at`
pub fn floors(count: f64, at: DateTime<Utc>) -> Sample {
    point(HealthScope::FlightsClimbed, count, at)
}

/// Heart rate reading at `at`
pub fn heart_rate(bpm: f64, at: DateTime<Utc>) -> Sample {
    point(HealthScope::HeartRate, bpm, at)
}

/// Height in meters measured at `at`
pub fn height_m(meters: f64, at: DateTime<Utc>) -> Sample {
    point(HealthScope::Height, meters, at)
}
