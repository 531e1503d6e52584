// ABOUTME: Nutrition screen controller that validates the form and records entries
// ABOUTME: Writes calories and protein to the store and keeps the session log of saved entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{run_operation, Feedback};
use crate::errors::AppResult;
use crate::manager::HealthDataManager;
use crate::nutrition::{NutritionInput, NutritionLog};
use crate::state::PresentationContext;
use health_core::constants::{messages, nutrition::RECENT_ENTRIES_SHOWN};
use health_core::models::NutritionEntry;
use tracing::debug;

/// Controller for the nutrition screen
#[derive(Debug)]
pub struct NutritionScreen {
    manager: HealthDataManager,
    log: NutritionLog,
}

impl NutritionScreen {
    /// Create a screen over `manager` with an empty session log
    #[must_use]
    pub const fn new(manager: HealthDataManager) -> Self {
        Self {
            manager,
            log: NutritionLog::new(),
        }
    }

    /// Presentation state of this screen
    #[must_use]
    pub const fn context(&self) -> &PresentationContext {
        self.manager.context()
    }

    /// Entries saved this session
    #[must_use]
    pub const fn log(&self) -> &NutritionLog {
        &self.log
    }

    /// Whether the form as typed can be submitted
    #[must_use]
    pub fn is_form_valid(calories: &str, protein: &str) -> bool {
        NutritionInput::is_valid(calories, protein)
    }

    /// Validate the form, write it, and log the entry on success
    ///
    /// Invalid input is reported on the screen without touching the store or the
    /// loading flag.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a bad form, otherwise the manager's error after
    /// showing it on the screen.
    pub async fn save(&mut self, calories: &str, protein: &str) -> AppResult<NutritionEntry> {
        let input = match NutritionInput::parse(calories, protein) {
            Ok(input) => input,
            Err(error) => {
                debug!("Rejected nutrition form: {error}");
                self.context().set_error(messages::NUTRITION_INVALID);
                return Err(error);
            }
        };

        let write = self
            .manager
            .save_nutrition_data(input.calories, input.protein);
        let request = run_operation(
            &self.manager,
            "nutrition",
            messages::SAVE_FAILED_PREFIX,
            write,
            |_| Some(Feedback::Success(messages::NUTRITION_SAVED.to_owned())),
        )
        .await?;

        let entry = NutritionEntry::from(request);
        self.log.push(entry);
        Ok(entry)
    }

    /// Most recent entries for display, newest first
    #[must_use]
    pub fn recent_entries(&self) -> Vec<NutritionEntry> {
        self.log.recent(RECENT_ENTRIES_SHOWN).copied().collect()
    }
}
