// ABOUTME: Units and quantities for health samples with compatible-unit conversion
// ABOUTME: Conversion is only defined within one dimension (length to length, etc.)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::units::METERS_PER_CENTIMETER;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical dimension of a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitDimension {
    /// Length
    Length,
    /// Dimensionless count
    Count,
    /// Count per unit time
    Frequency,
    /// Energy
    Energy,
    /// Mass
    Mass,
}

/// Units used by the scopes this application touches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthUnit {
    /// Meter
    Meter,
    /// Centimeter
    Centimeter,
    /// Plain count
    Count,
    /// Beats (or events) per minute
    CountPerMinute,
    /// Kilocalorie
    Kilocalorie,
    /// Gram
    Gram,
}

impl HealthUnit {
    /// Dimension of this unit
    #[must_use]
    pub const fn dimension(&self) -> UnitDimension {
        match self {
            Self::Meter | Self::Centimeter => UnitDimension::Length,
            Self::Count => UnitDimension::Count,
            Self::CountPerMinute => UnitDimension::Frequency,
            Self::Kilocalorie => UnitDimension::Energy,
            Self::Gram => UnitDimension::Mass,
        }
    }

    /// Display symbol
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Meter => "m",
            Self::Centimeter => "cm",
            Self::Count => "count",
            Self::CountPerMinute => "count/min",
            Self::Kilocalorie => "kcal",
            Self::Gram => "g",
        }
    }

    // Multiplier into the base unit of the dimension
    const fn base_factor(self) -> f64 {
        match self {
            Self::Centimeter => METERS_PER_CENTIMETER,
            Self::Meter | Self::Count | Self::CountPerMinute | Self::Kilocalorie | Self::Gram => 1.0,
        }
    }
}

impl fmt::Display for HealthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A magnitude with its unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    /// Magnitude in `unit`
    pub value: f64,
    /// Unit of `value`
    pub unit: HealthUnit,
}

impl Quantity {
    /// Create a quantity
    #[must_use]
    pub const fn new(value: f64, unit: HealthUnit) -> Self {
        Self { value, unit }
    }

    /// Value expressed in `unit`, or `None` when the dimensions differ
    #[must_use]
    pub fn value_in(&self, unit: HealthUnit) -> Option<f64> {
        if self.unit == unit {
            return Some(self.value);
        }
        if self.unit.dimension() != unit.dimension() {
            return None;
        }
        Some(self.value * self.unit.base_factor() / unit.base_factor())
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meters_to_centimeters() {
        let height = Quantity::new(1.75, HealthUnit::Meter);
        let cm = height.value_in(HealthUnit::Centimeter).unwrap();
        assert!((cm - 175.0).abs() < 1e-9);
    }

    #[test]
    fn test_centimeters_to_meters() {
        let height = Quantity::new(182.0, HealthUnit::Centimeter);
        let m = height.value_in(HealthUnit::Meter).unwrap();
        assert!((m - 1.82).abs() < 1e-9);
    }

    #[test]
    fn test_incompatible_dimensions() {
        let energy = Quantity::new(500.0, HealthUnit::Kilocalorie);
        assert!(energy.value_in(HealthUnit::Gram).is_none());
        assert!(energy.value_in(HealthUnit::Count).is_none());
    }
}
