// ABOUTME: Health data scopes and their per-scope authorization status
// ABOUTME: A scope is one category of health data that is authorized independently
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::HealthUnit;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quantity type identifiers the application reads or writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthScope {
    /// Body height
    Height,
    /// Step count
    StepCount,
    /// Flights of stairs climbed
    FlightsClimbed,
    /// Heart rate
    HeartRate,
    /// Dietary energy consumed
    DietaryEnergyConsumed,
    /// Dietary protein
    DietaryProtein,
}

impl HealthScope {
    /// Every scope, in declaration order
    pub const ALL: [Self; 6] = [
        Self::Height,
        Self::StepCount,
        Self::FlightsClimbed,
        Self::HeartRate,
        Self::DietaryEnergyConsumed,
        Self::DietaryProtein,
    ];

    /// Stable identifier used in logs and on the command line
    #[must_use]
    pub const fn identifier(&self) -> &'static str {
        match self {
            Self::Height => "height",
            Self::StepCount => "step_count",
            Self::FlightsClimbed => "flights_climbed",
            Self::HeartRate => "heart_rate",
            Self::DietaryEnergyConsumed => "dietary_energy_consumed",
            Self::DietaryProtein => "dietary_protein",
        }
    }

    /// Unit samples of this scope are stored in
    #[must_use]
    pub const fn canonical_unit(&self) -> HealthUnit {
        match self {
            Self::Height => HealthUnit::Meter,
            Self::StepCount | Self::FlightsClimbed => HealthUnit::Count,
            Self::HeartRate => HealthUnit::CountPerMinute,
            Self::DietaryEnergyConsumed => HealthUnit::Kilocalorie,
            Self::DietaryProtein => HealthUnit::Gram,
        }
    }

    /// Whether samples of this scope add up meaningfully over a window
    #[must_use]
    pub const fn is_cumulative(&self) -> bool {
        matches!(
            self,
            Self::StepCount | Self::FlightsClimbed | Self::DietaryEnergyConsumed | Self::DietaryProtein
        )
    }

    /// Parse a scope from its identifier
    #[must_use]
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|scope| scope.identifier() == identifier)
    }
}

impl fmt::Display for HealthScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Authorization status a store reports for one scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorizationStatus {
    /// The user has not been asked yet
    #[default]
    NotDetermined,
    /// The user declined
    SharingDenied,
    /// The user granted access
    SharingAuthorized,
}

impl AuthorizationStatus {
    /// Only an explicit grant counts as authorized
    #[must_use]
    pub const fn is_authorized(&self) -> bool {
        matches!(self, Self::SharingAuthorized)
    }
}
