// ABOUTME: Derived statistics shown next to raw health data
// ABOUTME: Heart rate summary, chart bounds and zones, goal progress, and activity motivation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: sample counts are far below 2^52

use crate::config::GoalConfig;
use health_core::constants::heart_rate::{
    CHART_PADDING_RATIO, ELEVATED_MAX_BPM, NORMAL_MAX_BPM, NORMAL_MIN_BPM,
};
use health_core::models::{ActivityData, HeartRateData};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Average, maximum, and minimum of a heart rate series
///
/// Every figure is `0.0` for an empty series.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HeartRateSummary {
    /// Number of readings
    pub count: usize,
    /// Mean bpm
    pub average: f64,
    /// Highest bpm
    pub max: f64,
    /// Lowest bpm
    pub min: f64,
}

impl HeartRateSummary {
    /// Summarize `readings`
    #[must_use]
    pub fn from_samples(readings: &[HeartRateData]) -> Self {
        if readings.is_empty() {
            return Self::default();
        }

        let (total, max, min) = readings.iter().fold(
            (0.0, f64::MIN, f64::MAX),
            |(total, max, min), reading| {
                (total + reading.bpm, max.max(reading.bpm), min.min(reading.bpm))
            },
        );

        Self {
            count: readings.len(),
            average: total / readings.len() as f64,
            max,
            min,
        }
    }

    /// Vertical bounds for charting the series
    ///
    /// An empty series charts the normal range. Otherwise the observed range is
    /// widened by a fixed fraction of its span on both sides.
    #[must_use]
    pub fn chart_y_range(&self) -> RangeInclusive<f64> {
        if self.count == 0 {
            return NORMAL_MIN_BPM..=NORMAL_MAX_BPM;
        }
        let padding = (self.max - self.min) * CHART_PADDING_RATIO;
        (self.min - padding)..=(self.max + padding)
    }

    /// Zone of the average
    #[must_use]
    pub fn zone(&self) -> HeartRateZone {
        HeartRateZone::classify(self.average)
    }
}

/// Resting heart rate classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeartRateZone {
    /// Below 60 bpm
    Low,
    /// 60 to 100 bpm inclusive
    Normal,
    /// Above 100 up to 120 bpm inclusive
    Elevated,
    /// Above 120 bpm
    High,
}

impl HeartRateZone {
    /// Classify an average bpm
    #[must_use]
    pub fn classify(bpm: f64) -> Self {
        if bpm < NORMAL_MIN_BPM {
            Self::Low
        } else if bpm <= NORMAL_MAX_BPM {
            Self::Normal
        } else if bpm <= ELEVATED_MAX_BPM {
            Self::Elevated
        } else {
            Self::High
        }
    }

    /// Short description for display
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Low => "Low heart rate",
            Self::Normal => "Heart rate is in the normal range",
            Self::Elevated => "Slightly elevated heart rate",
            Self::High => "High heart rate",
        }
    }
}

/// Progress toward one daily goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Amount achieved so far
    pub current: f64,
    /// Target amount
    pub goal: f64,
}

impl GoalProgress {
    /// Create a progress record
    #[must_use]
    pub const fn new(current: f64, goal: f64) -> Self {
        Self { current, goal }
    }

    /// Completed fraction, capped at 1
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.goal <= 0.0 {
            return 1.0;
        }
        (self.current / self.goal).clamp(0.0, 1.0)
    }

    /// Completed percentage, capped at 100
    #[must_use]
    pub fn percent(&self) -> f64 {
        self.fraction() * 100.0
    }

    /// Whether the goal was reached
    #[must_use]
    pub fn achieved(&self) -> bool {
        self.current >= self.goal
    }
}

/// Encouragement derived from which daily goals were met
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityMotivation {
    /// Both goals met
    AllGoalsMet,
    /// Only the steps goal met
    StepsGoalMet,
    /// Only the floors goal met
    FloorsGoalMet,
    /// Neither goal met
    KeepGoing,
}

impl ActivityMotivation {
    /// Pick the motivation for `activity` against `goals`
    #[must_use]
    pub fn evaluate(activity: &ActivityData, goals: &GoalConfig) -> Self {
        let steps_met = activity.steps >= goals.steps;
        let floors_met = activity.floors >= goals.floors;
        match (steps_met, floors_met) {
            (true, true) => Self::AllGoalsMet,
            (true, false) => Self::StepsGoalMet,
            (false, true) => Self::FloorsGoalMet,
            (false, false) => Self::KeepGoing,
        }
    }

    /// Message for display
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::AllGoalsMet => "Great job! You reached all of today's goals!",
            Self::StepsGoalMet => "Steps goal reached! Try climbing a few more floors!",
            Self::FloorsGoalMet => "Floors goal reached! Try adding some more steps!",
            Self::KeepGoing => "Keep moving! You are not far from your goals!",
        }
    }
}
