// ABOUTME: Terminal output helpers for the health-overview CLI
// ABOUTME: Prints screen state, permission flow results, and per-screen data summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use health_overview::flow::PermissionFlowState;
use health_overview::models::{ActivityData, NutritionEntry};
use health_overview::state::ScreenState;
use health_overview::stats::{ActivityMotivation, GoalProgress, HeartRateSummary, HeartRateZone};

/// Print a section heading
pub fn display_heading(title: &str) {
    println!("\n{title}");
    println!("{}", "=".repeat(title.len().max(20)));
}

/// Print the messages a screen is showing
pub fn display_screen_state(state: &ScreenState) {
    if let Some(message) = &state.success_message {
        println!("   OK    {message}");
    }
    if let Some(message) = &state.error_message {
        println!("   ERROR {message}");
    }
}

/// Print where the permission flow ended up
pub fn display_flow_state(state: PermissionFlowState) {
    let description = match state {
        PermissionFlowState::CheckingPermission => "Checking permissions",
        PermissionFlowState::RequestPermission => "Permission request required",
        PermissionFlowState::NoPermission => {
            "Permissions missing. Enable them in Settings > Privacy & Security > Health"
        }
        PermissionFlowState::Main => "All permissions granted",
    };
    println!("   Flow: {state:?} ({description})");
}

/// Print the latest height
pub fn display_height(height: Option<&str>) {
    match height {
        Some(height) => println!("   Height: {height}"),
        None => println!("   Height: no data recorded"),
    }
}

/// Print today's activity with goal progress
pub fn display_activity(
    activity: &ActivityData,
    steps: Option<GoalProgress>,
    floors: Option<GoalProgress>,
    motivation: Option<ActivityMotivation>,
) {
    println!("   Steps:  {:.0}", activity.steps);
    println!("   Floors: {:.0}", activity.floors);
    for (label, progress) in [("Steps goal", steps), ("Floors goal", floors)] {
        if let Some(progress) = progress {
            let marker = if progress.achieved() { " (achieved)" } else { "" };
            println!(
                "   {label}: {:.0}/{:.0} {:.0}%{marker}",
                progress.current,
                progress.goal,
                progress.percent()
            );
        }
    }
    if let Some(motivation) = motivation {
        println!("   {}", motivation.message());
    }
}

/// Print the heart rate summary
pub fn display_heart_rate(
    summary: &HeartRateSummary,
    zone: Option<HeartRateZone>,
    chart: (f64, f64),
) {
    println!("   Readings: {}", summary.count);
    println!("   Average:  {:.0} bpm", summary.average);
    println!("   Max:      {:.0} bpm", summary.max);
    println!("   Min:      {:.0} bpm", summary.min);
    println!("   Chart:    {:.1}..{:.1} bpm", chart.0, chart.1);
    if let Some(zone) = zone {
        println!("   {}", zone.description());
    }
}

/// Print one saved nutrition entry and the session totals
pub fn display_nutrition(entry: &NutritionEntry, total_calories: i64, total_protein: f64) {
    println!(
        "   Saved {}kcal, {:.1}g protein at {}",
        entry.calories.trunc(),
        entry.protein,
        entry.timestamp.format("%H:%M UTC")
    );
    println!("   Session total: {total_calories}kcal, {total_protein:.1}g protein");
}
