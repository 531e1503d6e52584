// ABOUTME: Application constants for health data queries, goals, and messages
// ABOUTME: Provides named constants to eliminate magic numbers and repeated strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Unit conversion factors
pub mod units {
    /// Meters per centimeter
    pub const METERS_PER_CENTIMETER: f64 = 0.01;
}

/// Query windows
pub mod windows {
    /// Trailing window for the heart rate series, in days
    pub const HEART_RATE_WINDOW_DAYS: i64 = 7;

    /// Longest heart rate window a configuration may ask for, in days
    pub const MAX_HEART_RATE_WINDOW_DAYS: i64 = 3_650;

    /// Height queries only ever need the latest sample
    pub const LATEST_SAMPLE_LIMIT: usize = 1;
}

/// Daily activity goals
pub mod goals {
    /// Default daily step goal
    pub const DEFAULT_STEPS_GOAL: f64 = 10_000.0;

    /// Default daily floors goal
    pub const DEFAULT_FLOORS_GOAL: f64 = 10.0;
}

/// Heart rate classification and charting bounds
pub mod heart_rate {
    /// Lower bound (inclusive) of the normal resting range, in bpm
    pub const NORMAL_MIN_BPM: f64 = 60.0;

    /// Upper bound (inclusive) of the normal resting range, in bpm
    pub const NORMAL_MAX_BPM: f64 = 100.0;

    /// Upper bound (inclusive) of the elevated range, in bpm
    pub const ELEVATED_MAX_BPM: f64 = 120.0;

    /// Fraction of the value span added above and below a chart's y range
    pub const CHART_PADDING_RATIO: f64 = 0.15;
}

/// Nutrition log display
pub mod nutrition {
    /// Number of entries shown in the recent list
    pub const RECENT_ENTRIES_SHOWN: usize = 3;
}

/// User facing screen messages
pub mod messages {
    /// Prefix for load failures
    pub const LOAD_FAILED_PREFIX: &str = "Failed to load data";
    /// Prefix for save failures
    pub const SAVE_FAILED_PREFIX: &str = "Failed to save data";
    /// Prefix for permission request failures
    pub const PERMISSION_FAILED_PREFIX: &str = "Permission request failed";

    /// Height loaded
    pub const HEIGHT_LOADED: &str = "Height data loaded successfully!";
    /// Activity loaded
    pub const ACTIVITY_LOADED: &str = "Activity data loaded successfully!";
    /// Heart rate loaded
    pub const HEART_RATE_LOADED: &str = "Heart rate data loaded successfully!";
    /// Heart rate window was empty
    pub const HEART_RATE_EMPTY: &str =
        "No heart rate data found. Wear your watch and stay active to record some.";
    /// Nutrition saved
    pub const NUTRITION_SAVED: &str = "Nutrition data saved successfully!";
    /// Nutrition form could not be parsed
    pub const NUTRITION_INVALID: &str = "Please enter valid numbers";
    /// All permissions granted
    pub const PERMISSIONS_GRANTED: &str = "All permissions were granted successfully!";
    /// Request returned but at least one scope is still missing
    pub const PERMISSIONS_INCOMPLETE: &str =
        "Some health data permissions are still missing. You can enable them in Settings.";
}
