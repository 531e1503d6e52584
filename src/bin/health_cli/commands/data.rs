// ABOUTME: Data commands for the health-overview CLI
// ABOUTME: Drives the height, activity, heart rate, and nutrition screens and prints what they show
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display::{
    display_activity, display_heading, display_height, display_heart_rate, display_nutrition,
    display_screen_state,
};
use health_overview::errors::AppResult;
use health_overview::manager::HealthDataManager;
use health_overview::screens::{ActivityScreen, HeartRateScreen, HeightScreen, NutritionScreen};
use health_overview::state::PresentationContext;

/// Authorize and show the latest height
pub async fn height(manager: HealthDataManager) -> AppResult<()> {
    display_heading("Height");
    let mut screen = HeightScreen::new(manager);
    let result = screen.authorize_and_load().await;
    show_state(screen.context()).await?;
    result?;

    display_height(screen.formatted_height().as_deref());
    Ok(())
}

/// Authorize and show today's steps and floors
pub async fn activity(manager: HealthDataManager) -> AppResult<()> {
    display_heading("Steps and floors");
    let mut screen = ActivityScreen::new(manager);
    let result = screen.authorize_and_load().await;
    show_state(screen.context()).await?;
    let activity = result?;

    display_activity(
        &activity,
        screen.steps_progress(),
        screen.floors_progress(),
        screen.motivation(),
    );
    Ok(())
}

/// Authorize and show the heart rate week
pub async fn heart_rate(manager: HealthDataManager) -> AppResult<()> {
    display_heading("Heart rate");
    let mut screen = HeartRateScreen::new(manager);
    let result = screen.authorize_and_load().await;
    show_state(screen.context()).await?;
    result?;

    let range = screen.chart_y_range();
    display_heart_rate(&screen.summary(), screen.zone(), (*range.start(), *range.end()));
    Ok(())
}

/// Authorize and record one nutrition entry from raw form text
pub async fn log_nutrition(
    manager: HealthDataManager,
    calories: &str,
    protein: &str,
) -> AppResult<()> {
    display_heading("Nutrition");
    manager.request_all_authorizations().await?;

    let mut screen = NutritionScreen::new(manager);
    let result = screen.save(calories, protein).await;
    show_state(screen.context()).await?;
    let entry = result?;

    let log = screen.log();
    display_nutrition(&entry, log.total_calories(), log.total_protein());
    Ok(())
}

async fn show_state(context: &PresentationContext) -> AppResult<()> {
    context.flush().await?;
    display_screen_state(&context.snapshot());
    Ok(())
}
