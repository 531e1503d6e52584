// ABOUTME: Health data models shared by stores, the data layer, and screens
// ABOUTME: Re-exports scopes, units, quantities, samples, and typed records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Store-level types (`HealthScope`, `Quantity`, `Sample`) describe what a health
//! store holds. Record types (`HeightSample`, `ActivityData`, `HeartRateData`,
//! `NutritionWriteRequest`, `NutritionEntry`) are what the data layer hands to
//! screens. Records are immutable and rebuilt on every fetch.

mod quantity;
mod records;
mod sample;
mod scope;

pub use quantity::{HealthUnit, Quantity, UnitDimension};
pub use records::{ActivityData, HeartRateData, HeightSample, NutritionEntry, NutritionWriteRequest};
pub use sample::{CategorySample, DateRange, QuantitySample, Sample};
pub use scope::{AuthorizationStatus, HealthScope};
