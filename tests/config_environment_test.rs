// ABOUTME: Unit tests for environment configuration loading
// ABOUTME: Validates HEALTH_* parsing, defaults, and rejection of invalid values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use health_overview::config::environment::{
    FLOORS_GOAL_VAR, HEART_RATE_WINDOW_VAR, STEPS_GOAL_VAR, UTC_OFFSET_VAR,
};
use health_overview::config::HealthConfig;
use health_overview::errors::ErrorCode;
use health_overview::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

const ALL_VARS: [&str; 4] = [
    STEPS_GOAL_VAR,
    FLOORS_GOAL_VAR,
    HEART_RATE_WINDOW_VAR,
    UTC_OFFSET_VAR,
];

fn clear_vars() {
    for var in ALL_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_when_unset() {
    clear_vars();
    let config = HealthConfig::from_env().unwrap();

    assert!((config.goals.steps - 10_000.0).abs() < f64::EPSILON);
    assert!((config.goals.floors - 10.0).abs() < f64::EPSILON);
    assert_eq!(config.heart_rate_window_days, 7);
    assert_eq!(config.utc_offset_minutes, None);
}

#[test]
#[serial]
fn test_overrides_are_parsed() {
    clear_vars();
    env::set_var(STEPS_GOAL_VAR, " 8000 ");
    env::set_var(FLOORS_GOAL_VAR, "15");
    env::set_var(HEART_RATE_WINDOW_VAR, "14");
    env::set_var(UTC_OFFSET_VAR, "-300");

    let config = HealthConfig::from_env().unwrap();
    clear_vars();

    assert!((config.goals.steps - 8_000.0).abs() < f64::EPSILON);
    assert!((config.goals.floors - 15.0).abs() < f64::EPSILON);
    assert_eq!(config.heart_rate_window_days, 14);
    assert_eq!(config.utc_offset().unwrap().unwrap().local_minus_utc(), -300 * 60);
}

#[test]
#[serial]
fn test_unparseable_value_is_config_error() {
    clear_vars();
    env::set_var(STEPS_GOAL_VAR, "lots");

    let error = HealthConfig::from_env().unwrap_err();
    clear_vars();

    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains(STEPS_GOAL_VAR));
}

#[test]
#[serial]
fn test_non_positive_goal_is_rejected() {
    clear_vars();
    env::set_var(FLOORS_GOAL_VAR, "0");

    let error = HealthConfig::from_env().unwrap_err();
    clear_vars();

    assert_eq!(error.code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_zero_day_window_is_rejected() {
    clear_vars();
    env::set_var(HEART_RATE_WINDOW_VAR, "0");

    let result = HealthConfig::from_env();
    clear_vars();

    assert!(result.is_err());
}

#[test]
#[serial]
fn test_window_beyond_ten_years_is_rejected() {
    clear_vars();
    env::set_var(HEART_RATE_WINDOW_VAR, "1000000000");

    let error = HealthConfig::from_env().unwrap_err();
    clear_vars();

    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains(HEART_RATE_WINDOW_VAR));
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");

    let config = LoggingConfig::from_env();
    env::remove_var("LOG_FORMAT");
    env::remove_var("ENVIRONMENT");

    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert!(config.include_thread);
    assert_eq!(config.environment, "production");
}
