// ABOUTME: Environment configuration for activity goals, heart rate window, and day boundary
// ABOUTME: Parses HEALTH_* variables with defaults and validates the resulting values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::clock;
use chrono::{DateTime, Duration, FixedOffset, Local, Utc};
use health_core::constants::{goals, windows};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use tracing::debug;

/// Daily step goal
pub const STEPS_GOAL_VAR: &str = "HEALTH_STEPS_GOAL";
/// Daily floors goal
pub const FLOORS_GOAL_VAR: &str = "HEALTH_FLOORS_GOAL";
/// Heart rate window length in days
pub const HEART_RATE_WINDOW_VAR: &str = "HEALTH_HEART_RATE_WINDOW_DAYS";
/// Fixed offset from UTC, in minutes, overriding the system time zone for the start of the day
pub const UTC_OFFSET_VAR: &str = "HEALTH_UTC_OFFSET_MINUTES";

/// Daily activity goals used for progress and motivation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalConfig {
    /// Steps per day
    pub steps: f64,
    /// Floors per day
    pub floors: f64,
}

impl Default for GoalConfig {
    fn default() -> Self {
        Self {
            steps: goals::DEFAULT_STEPS_GOAL,
            floors: goals::DEFAULT_FLOORS_GOAL,
        }
    }
}

/// Data layer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthConfig {
    /// Daily activity goals
    pub goals: GoalConfig,
    /// Length of the trailing heart rate window in days
    pub heart_rate_window_days: i64,
    /// Fixed offset of the user's local day from UTC, in minutes
    ///
    /// `None` follows the system time zone, daylight saving changes included.
    pub utc_offset_minutes: Option<i32>,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            goals: GoalConfig::default(),
            heart_rate_window_days: windows::HEART_RATE_WINDOW_DAYS,
            utc_offset_minutes: None,
        }
    }
}

impl HealthConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if a variable is present but does not parse, or if
    /// the parsed values fail [`HealthConfig::validate`].
    pub fn from_env() -> AppResult<Self> {
        let defaults = Self::default();
        let config = Self {
            goals: GoalConfig {
                steps: env_parse_or(STEPS_GOAL_VAR, defaults.goals.steps)?,
                floors: env_parse_or(FLOORS_GOAL_VAR, defaults.goals.floors)?,
            },
            heart_rate_window_days: env_parse_or(
                HEART_RATE_WINDOW_VAR,
                defaults.heart_rate_window_days,
            )?,
            utc_offset_minutes: env_parse(UTC_OFFSET_VAR)?.or(defaults.utc_offset_minutes),
        };
        config.validate()?;

        debug!(
            steps_goal = config.goals.steps,
            floors_goal = config.goals.floors,
            heart_rate_window_days = config.heart_rate_window_days,
            utc_offset_minutes = ?config.utc_offset_minutes,
            "Loaded health configuration"
        );
        Ok(config)
    }

    /// Check that every value is usable
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for non-positive goals, a window outside
    /// `1..=3650` days, or an offset outside ±24 hours.
    pub fn validate(&self) -> AppResult<()> {
        if !(self.goals.steps.is_finite() && self.goals.steps > 0.0) {
            return Err(AppError::config(format!(
                "{STEPS_GOAL_VAR} must be a positive number"
            )));
        }
        if !(self.goals.floors.is_finite() && self.goals.floors > 0.0) {
            return Err(AppError::config(format!(
                "{FLOORS_GOAL_VAR} must be a positive number"
            )));
        }
        if !(1..=windows::MAX_HEART_RATE_WINDOW_DAYS).contains(&self.heart_rate_window_days) {
            return Err(AppError::config(format!(
                "{HEART_RATE_WINDOW_VAR} must be between 1 and {}",
                windows::MAX_HEART_RATE_WINDOW_DAYS
            )));
        }
        self.utc_offset()?;
        Ok(())
    }

    /// Configured fixed offset, if any
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the offset is out of range.
    pub fn utc_offset(&self) -> AppResult<Option<FixedOffset>> {
        self.utc_offset_minutes
            .map(|minutes| {
                minutes
                    .checked_mul(60)
                    .and_then(FixedOffset::east_opt)
                    .ok_or_else(|| {
                        AppError::config(format!("{UTC_OFFSET_VAR} out of range: {minutes}"))
                    })
            })
            .transpose()
    }

    /// Midnight of the user's local day containing `now`, in UTC
    ///
    /// Uses the fixed offset when one is configured and the system time zone
    /// otherwise, resolved again on every call.
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the offset is out of range.
    pub fn start_of_day(&self, now: DateTime<Utc>) -> AppResult<DateTime<Utc>> {
        Ok(match self.utc_offset()? {
            Some(offset) => clock::start_of_day(now, &offset),
            None => clock::start_of_day(now, &Local),
        })
    }

    /// First instant of the heart rate window ending at `now`
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the window reaches outside the representable
    /// date range.
    pub fn heart_rate_window_start(&self, now: DateTime<Utc>) -> AppResult<DateTime<Utc>> {
        Duration::try_days(self.heart_rate_window_days)
            .and_then(|window| now.checked_sub_signed(window))
            .ok_or_else(|| {
                AppError::config(format!(
                    "{HEART_RATE_WINDOW_VAR} of {} days is out of range",
                    self.heart_rate_window_days
                ))
            })
    }
}

/// Parse an environment variable, `None` when it is unset
fn env_parse<T>(key: &str) -> AppResult<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| AppError::config(format!("Invalid {key} value '{raw}': {e}"))),
        Err(_) => Ok(None),
    }
}

/// Parse an environment variable, falling back to `default` when it is unset
fn env_parse_or<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    Ok(env_parse(key)?.unwrap_or(default))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use chrono::TimeZone;

    #[test]
    fn test_defaults_are_valid() {
        let config = HealthConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.utc_offset_minutes, None);
        assert!((config.goals.steps - 10_000.0).abs() < f64::EPSILON);
        assert_eq!(config.heart_rate_window_days, 7);
    }

    #[test]
    fn test_rejects_zero_goal() {
        let config = HealthConfig {
            goals: GoalConfig {
                steps: 0.0,
                floors: 10.0,
            },
            ..HealthConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_out_of_range_offset() {
        let config = HealthConfig {
            utc_offset_minutes: Some(25 * 60),
            ..HealthConfig::default()
        };
        assert!(config.utc_offset().is_err());

        let overflowing = HealthConfig {
            utc_offset_minutes: Some(i32::MAX),
            ..HealthConfig::default()
        };
        assert!(overflowing.validate().is_err());
    }

    #[test]
    fn test_rejects_window_beyond_bound() {
        for days in [0, -3, windows::MAX_HEART_RATE_WINDOW_DAYS + 1, 1_000_000_000] {
            let config = HealthConfig {
                heart_rate_window_days: days,
                ..HealthConfig::default()
            };
            assert!(config.validate().is_err(), "window of {days} days accepted");
        }

        let longest = HealthConfig {
            heart_rate_window_days: windows::MAX_HEART_RATE_WINDOW_DAYS,
            ..HealthConfig::default()
        };
        assert!(longest.validate().is_ok());
    }

    #[test]
    fn test_window_start_out_of_range_is_config_error() {
        let config = HealthConfig {
            heart_rate_window_days: i64::MAX,
            ..HealthConfig::default()
        };
        let error = config.heart_rate_window_start(Utc::now()).unwrap_err();
        assert_eq!(error.code, ErrorCode::ConfigInvalid);
    }

    #[test]
    fn test_fixed_offset_overrides_system_zone() {
        let config = HealthConfig {
            utc_offset_minutes: Some(-300),
            ..HealthConfig::default()
        };
        let now = Utc.with_ymd_and_hms(2025, 3, 9, 14, 0, 0).unwrap();
        assert_eq!(
            config.start_of_day(now).unwrap(),
            Utc.with_ymd_and_hms(2025, 3, 9, 5, 0, 0).unwrap()
        );
    }
}
