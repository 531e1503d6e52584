// ABOUTME: Store-level health samples and the half-open time ranges used to query them
// ABOUTME: Quantity samples carry a magnitude; category samples carry an enumerated value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{HealthScope, Quantity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Half-open time window `[start, end)`
///
/// Matches the "strict start date" predicate: a sample belongs to the window when
/// its start date is at or after `start` and strictly before `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Inclusive lower bound
    pub start: DateTime<Utc>,
    /// Exclusive upper bound
    pub end: DateTime<Utc>,
}

impl DateRange {
    /// Create a window
    #[must_use]
    pub const fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Whether `timestamp` falls inside the window
    #[must_use]
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        self.start <= timestamp && timestamp < self.end
    }

    /// A window whose end is not after its start matches nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// A sample with a numeric magnitude
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantitySample {
    /// Sample identifier
    pub id: Uuid,
    /// Scope the sample belongs to
    pub scope: HealthScope,
    /// Measured quantity
    pub quantity: Quantity,
    /// Start of the measurement
    pub start: DateTime<Utc>,
    /// End of the measurement
    pub end: DateTime<Utc>,
}

impl QuantitySample {
    /// Create a sample covering `[start, end]`
    #[must_use]
    pub fn new(
        scope: HealthScope,
        quantity: Quantity,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            scope,
            quantity,
            start,
            end,
        }
    }

    /// Create a point-in-time sample whose start and end are the same instant
    #[must_use]
    pub fn at(scope: HealthScope, quantity: Quantity, timestamp: DateTime<Utc>) -> Self {
        Self::new(scope, quantity, timestamp, timestamp)
    }
}

/// A sample whose value is one of an enumerated set rather than a magnitude
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySample {
    /// Sample identifier
    pub id: Uuid,
    /// Scope the sample was filed under
    pub scope: HealthScope,
    /// Raw category value
    pub value: i64,
    /// Start of the sample
    pub start: DateTime<Utc>,
    /// End of the sample
    pub end: DateTime<Utc>,
}

/// Any sample a store can return from a sample query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Sample {
    /// Numeric sample
    Quantity(QuantitySample),
    /// Enumerated sample
    Category(CategorySample),
}

impl Sample {
    /// Scope the sample belongs to
    #[must_use]
    pub const fn scope(&self) -> HealthScope {
        match self {
            Self::Quantity(sample) => sample.scope,
            Self::Category(sample) => sample.scope,
        }
    }

    /// Start date used for range matching and sorting
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        match self {
            Self::Quantity(sample) => sample.start,
            Self::Category(sample) => sample.start,
        }
    }

    /// Borrow as a quantity sample
    #[must_use]
    pub const fn as_quantity(&self) -> Option<&QuantitySample> {
        match self {
            Self::Quantity(sample) => Some(sample),
            Self::Category(_) => None,
        }
    }

    /// Convert into a quantity sample, dropping anything else
    #[must_use]
    pub fn into_quantity(self) -> Option<QuantitySample> {
        match self {
            Self::Quantity(sample) => Some(sample),
            Self::Category(_) => None,
        }
    }
}

impl From<QuantitySample> for Sample {
    fn from(sample: QuantitySample) -> Self {
        Self::Quantity(sample)
    }
}

impl From<CategorySample> for Sample {
    fn from(sample: CategorySample) -> Self {
        Self::Category(sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_range_is_half_open() {
        let end = Utc::now();
        let start = end - Duration::days(7);
        let range = DateRange::new(start, end);

        assert!(range.contains(start));
        assert!(range.contains(end - Duration::seconds(1)));
        assert!(!range.contains(end));
        assert!(!range.contains(start - Duration::seconds(1)));
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let now = Utc::now();
        assert!(DateRange::new(now, now).is_empty());
        assert!(DateRange::new(now, now - Duration::hours(1)).is_empty());
        assert!(!DateRange::new(now - Duration::hours(1), now).is_empty());
    }
}
