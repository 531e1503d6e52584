// ABOUTME: Height screen controller showing the most recent height measurement
// ABOUTME: Loads the latest sample and reports success only when one exists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{run_operation, Feedback};
use crate::errors::AppResult;
use crate::manager::HealthDataManager;
use crate::state::PresentationContext;
use health_core::constants::messages;
use health_core::models::HeightSample;

/// Controller for the height screen
#[derive(Debug)]
pub struct HeightScreen {
    manager: HealthDataManager,
    height: Option<HeightSample>,
}

impl HeightScreen {
    /// Create a screen over `manager`
    #[must_use]
    pub const fn new(manager: HealthDataManager) -> Self {
        Self {
            manager,
            height: None,
        }
    }

    /// Presentation state of this screen
    #[must_use]
    pub const fn context(&self) -> &PresentationContext {
        self.manager.context()
    }

    /// Last loaded height in centimeters
    #[must_use]
    pub fn height_cm(&self) -> Option<f64> {
        self.height.map(|sample| sample.value_cm)
    }

    /// Last loaded sample
    #[must_use]
    pub const fn height(&self) -> Option<&HeightSample> {
        self.height.as_ref()
    }

    /// Load the latest height
    ///
    /// # Errors
    ///
    /// Returns the manager's error after showing it on the screen.
    pub async fn load(&mut self) -> AppResult<Option<f64>> {
        let fetch = self.manager.fetch_height();
        let height = run_operation(
            &self.manager,
            "height",
            messages::LOAD_FAILED_PREFIX,
            fetch,
            |height| {
                height
                    .is_some()
                    .then(|| Feedback::Success(messages::HEIGHT_LOADED.to_owned()))
            },
        )
        .await?;
        self.height = height;
        Ok(self.height_cm())
    }

    /// Request authorization, then load the latest height
    ///
    /// # Errors
    ///
    /// Returns the authorization or fetch error after showing it on the screen.
    pub async fn authorize_and_load(&mut self) -> AppResult<Option<f64>> {
        let fetch = self.manager.request_authorization_and_fetch_height();
        let height = run_operation(
            &self.manager,
            "height",
            messages::PERMISSION_FAILED_PREFIX,
            fetch,
            |height| {
                height
                    .is_some()
                    .then(|| Feedback::Success(messages::HEIGHT_LOADED.to_owned()))
            },
        )
        .await?;
        self.height = height;
        Ok(self.height_cm())
    }

    /// Height formatted for display
    #[must_use]
    pub fn formatted_height(&self) -> Option<String> {
        self.height_cm().map(|cm| format!("{cm:.1} cm"))
    }
}
