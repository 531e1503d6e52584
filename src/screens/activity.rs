// ABOUTME: Activity screen controller for today's steps and floors
// ABOUTME: Loads both sums together and derives goal progress and a motivation message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{run_operation, Feedback};
use crate::errors::AppResult;
use crate::manager::HealthDataManager;
use crate::state::PresentationContext;
use crate::stats::{ActivityMotivation, GoalProgress};
use health_core::constants::messages;
use health_core::models::ActivityData;

/// Controller for the steps and floors screen
#[derive(Debug)]
pub struct ActivityScreen {
    manager: HealthDataManager,
    activity: Option<ActivityData>,
}

impl ActivityScreen {
    /// Create a screen over `manager`
    #[must_use]
    pub const fn new(manager: HealthDataManager) -> Self {
        Self {
            manager,
            activity: None,
        }
    }

    /// Presentation state of this screen
    #[must_use]
    pub const fn context(&self) -> &PresentationContext {
        self.manager.context()
    }

    /// Last loaded activity
    #[must_use]
    pub const fn activity(&self) -> Option<ActivityData> {
        self.activity
    }

    /// Load today's steps and floors
    ///
    /// A failure leaves the previously loaded activity in place.
    ///
    /// # Errors
    ///
    /// Returns the manager's error after showing it on the screen.
    pub async fn load(&mut self) -> AppResult<ActivityData> {
        let fetch = self.manager.fetch_today_activity_data();
        let activity = run_operation(
            &self.manager,
            "activity",
            messages::LOAD_FAILED_PREFIX,
            fetch,
            |_| Some(Feedback::Success(messages::ACTIVITY_LOADED.to_owned())),
        )
        .await?;
        self.activity = Some(activity);
        Ok(activity)
    }

    /// Request authorization, then load today's activity
    ///
    /// # Errors
    ///
    /// Returns the authorization or fetch error after showing it on the screen.
    pub async fn authorize_and_load(&mut self) -> AppResult<ActivityData> {
        let fetch = self.manager.request_authorization_and_fetch_activity();
        let activity = run_operation(
            &self.manager,
            "activity",
            messages::PERMISSION_FAILED_PREFIX,
            fetch,
            |_| Some(Feedback::Success(messages::ACTIVITY_LOADED.to_owned())),
        )
        .await?;
        self.activity = Some(activity);
        Ok(activity)
    }

    /// Progress toward the daily steps goal
    #[must_use]
    pub fn steps_progress(&self) -> Option<GoalProgress> {
        let goal = self.manager.config().goals.steps;
        self.activity
            .map(|activity| GoalProgress::new(activity.steps, goal))
    }

    /// Progress toward the daily floors goal
    #[must_use]
    pub fn floors_progress(&self) -> Option<GoalProgress> {
        let goal = self.manager.config().goals.floors;
        self.activity
            .map(|activity| GoalProgress::new(activity.floors, goal))
    }

    /// Motivation for the loaded activity
    #[must_use]
    pub fn motivation(&self) -> Option<ActivityMotivation> {
        self.activity.map(|activity| {
            ActivityMotivation::evaluate(&activity, &self.manager.config().goals)
        })
    }
}
