// ABOUTME: Screen controllers that drive load, refresh, and save flows against the data layer
// ABOUTME: Shares the loading and message orchestration every screen runs around an operation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Screen Controllers
//!
//! Each controller owns a [`HealthDataManager`] and therefore its own
//! [`PresentationContext`](crate::state::PresentationContext). Around every
//! operation it publishes, in order:
//!
//! 1. loading on, messages cleared
//! 2. loading off
//! 3. a success message, or the error message behind the screen's failure prefix
//!
//! Overlapping operations are not deduplicated; the last one to finish decides
//! what the screen shows.

/// Daily steps and floors
pub mod activity;
/// Weekly heart rate
pub mod heart_rate;
/// Latest height
pub mod height;
/// Nutrition entry form
pub mod nutrition;

pub use activity::ActivityScreen;
pub use heart_rate::HeartRateScreen;
pub use height::HeightScreen;
pub use nutrition::NutritionScreen;

use crate::errors::AppResult;
use crate::manager::HealthDataManager;
use std::future::Future;
use tracing::warn;

/// Run `operation` with the loading and message protocol
///
/// On success `success_message` decides which message, if any, to show for the
/// value. On failure the error is shown as `"{failure_prefix}: {message}"`.
pub(crate) async fn run_operation<T, Fut>(
    manager: &HealthDataManager,
    screen: &'static str,
    failure_prefix: &str,
    operation: Fut,
    success_message: impl FnOnce(&T) -> Option<Feedback>,
) -> AppResult<T>
where
    Fut: Future<Output = AppResult<T>>,
{
    let context = manager.context();
    context.set_loading(true);
    context.clear_messages();

    let result = operation.await;
    context.set_loading(false);

    match &result {
        Ok(value) => match success_message(value) {
            Some(Feedback::Success(message)) => context.set_success(message),
            Some(Feedback::Error(message)) => context.set_error(message),
            None => {}
        },
        Err(error) => {
            warn!(screen, code = %error.code, "Screen operation failed: {error}");
            context.set_error(format!("{failure_prefix}: {}", error.user_message()));
        }
    }
    result
}

/// Message shown after an operation that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Feedback {
    Success(String),
    Error(String),
}
