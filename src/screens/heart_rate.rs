// ABOUTME: Heart rate screen controller for the trailing week of readings
// ABOUTME: Treats an empty window as something to tell the user and exposes summary statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{run_operation, Feedback};
use crate::errors::AppResult;
use crate::manager::HealthDataManager;
use crate::state::PresentationContext;
use crate::stats::{HeartRateSummary, HeartRateZone};
use health_core::constants::messages;
use health_core::models::HeartRateData;
use std::ops::RangeInclusive;

/// Controller for the heart rate screen
#[derive(Debug)]
pub struct HeartRateScreen {
    manager: HealthDataManager,
    readings: Vec<HeartRateData>,
}

impl HeartRateScreen {
    /// Create a screen over `manager`
    #[must_use]
    pub const fn new(manager: HealthDataManager) -> Self {
        Self {
            manager,
            readings: Vec::new(),
        }
    }

    /// Presentation state of this screen
    #[must_use]
    pub const fn context(&self) -> &PresentationContext {
        self.manager.context()
    }

    /// Last loaded readings, oldest first
    #[must_use]
    pub fn readings(&self) -> &[HeartRateData] {
        &self.readings
    }

    /// Load the trailing window
    ///
    /// An empty window is not an error, but the screen shows a message asking
    /// the user to record some readings.
    ///
    /// # Errors
    ///
    /// Returns the manager's error after showing it on the screen.
    pub async fn load(&mut self) -> AppResult<usize> {
        let fetch = self.manager.fetch_weekly_heart_rate();
        let readings = run_operation(
            &self.manager,
            "heart_rate",
            messages::LOAD_FAILED_PREFIX,
            fetch,
            |readings| feedback(readings),
        )
        .await?;
        self.readings = readings;
        Ok(self.readings.len())
    }

    /// Request authorization, then load the trailing window
    ///
    /// # Errors
    ///
    /// Returns the authorization or fetch error after showing it on the screen.
    pub async fn authorize_and_load(&mut self) -> AppResult<usize> {
        let fetch = self.manager.request_authorization_and_fetch_heart_rate();
        let readings = run_operation(
            &self.manager,
            "heart_rate",
            messages::PERMISSION_FAILED_PREFIX,
            fetch,
            |readings| feedback(readings),
        )
        .await?;
        self.readings = readings;
        Ok(self.readings.len())
    }

    /// Summary of the loaded readings
    #[must_use]
    pub fn summary(&self) -> HeartRateSummary {
        HeartRateSummary::from_samples(&self.readings)
    }

    /// Zone of the average, `None` before any reading is loaded
    #[must_use]
    pub fn zone(&self) -> Option<HeartRateZone> {
        (!self.readings.is_empty()).then(|| self.summary().zone())
    }

    /// Vertical chart bounds for the loaded readings
    #[must_use]
    pub fn chart_y_range(&self) -> RangeInclusive<f64> {
        self.summary().chart_y_range()
    }
}

fn feedback(readings: &[HeartRateData]) -> Option<Feedback> {
    if readings.is_empty() {
        Some(Feedback::Error(messages::HEART_RATE_EMPTY.to_owned()))
    } else {
        Some(Feedback::Success(messages::HEART_RATE_LOADED.to_owned()))
    }
}
