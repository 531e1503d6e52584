// ABOUTME: Typed health records handed from the data layer to screens
// ABOUTME: HeightSample, ActivityData, HeartRateData, and the nutrition write/log types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{HealthScope, HealthUnit, Quantity, QuantitySample};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Most recent height measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeightSample {
    /// Height in centimeters
    pub value_cm: f64,
    /// When the measurement was taken
    pub measured_at: DateTime<Utc>,
}

/// Cumulative activity for the current day
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ActivityData {
    /// Steps since the start of the day
    pub steps: f64,
    /// Floors climbed since the start of the day
    pub floors: f64,
}

/// One heart rate reading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeartRateData {
    /// Identifier of the underlying sample
    pub id: Uuid,
    /// When the reading started
    pub timestamp: DateTime<Utc>,
    /// Beats per minute
    pub bpm: f64,
}

/// Calories and protein to record at a single instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionWriteRequest {
    /// Dietary energy in kilocalories
    pub calories_kcal: f64,
    /// Dietary protein in grams
    pub protein_grams: f64,
    /// Shared start and end of both samples
    pub timestamp: DateTime<Utc>,
}

impl NutritionWriteRequest {
    /// Create a request
    #[must_use]
    pub const fn new(calories_kcal: f64, protein_grams: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            calories_kcal,
            protein_grams,
            timestamp,
        }
    }

    /// The two point-in-time samples this request writes, energy first
    #[must_use]
    pub fn to_samples(&self) -> Vec<QuantitySample> {
        vec![
            QuantitySample::at(
                HealthScope::DietaryEnergyConsumed,
                Quantity::new(self.calories_kcal, HealthUnit::Kilocalorie),
                self.timestamp,
            ),
            QuantitySample::at(
                HealthScope::DietaryProtein,
                Quantity::new(self.protein_grams, HealthUnit::Gram),
                self.timestamp,
            ),
        ]
    }
}

/// A nutrition write that succeeded during this session
///
/// Lives only in memory; it is a display convenience, not a source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionEntry {
    /// Entry identifier
    pub id: Uuid,
    /// Kilocalories recorded
    pub calories: f64,
    /// Grams of protein recorded
    pub protein: f64,
    /// When the samples were written
    pub timestamp: DateTime<Utc>,
}

impl From<NutritionWriteRequest> for NutritionEntry {
    fn from(request: NutritionWriteRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            calories: request.calories_kcal,
            protein: request.protein_grams,
            timestamp: request.timestamp,
        }
    }
}
