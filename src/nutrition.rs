// ABOUTME: Nutrition form validation and the in-session log of saved entries
// ABOUTME: Parses calorie and protein text input and keeps totals for entries written this session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use health_core::models::NutritionEntry;
use serde::{Deserialize, Serialize};

/// Validated nutrition form input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionInput {
    /// Kilocalories
    pub calories: f64,
    /// Grams of protein
    pub protein: f64,
}

impl NutritionInput {
    /// Parse the two form fields
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if either field is empty, not a number, not finite,
    /// or negative.
    pub fn parse(calories: &str, protein: &str) -> AppResult<Self> {
        Ok(Self {
            calories: parse_field("calories", calories)?,
            protein: parse_field("protein", protein)?,
        })
    }

    /// Whether both fields would parse
    #[must_use]
    pub fn is_valid(calories: &str, protein: &str) -> bool {
        Self::parse(calories, protein).is_ok()
    }
}

fn parse_field(name: &str, raw: &str) -> AppResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::invalid_input(format!("{name} is required")));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| AppError::invalid_input(format!("{name} must be a number, got '{trimmed}'")))?;
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::invalid_input(format!(
            "{name} must be a non-negative number"
        )));
    }
    Ok(value)
}

/// Entries saved during this session, oldest first
///
/// Never persisted. The health store stays the source of truth.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionLog {
    entries: Vec<NutritionEntry>,
}

impl NutritionLog {
    /// Empty log
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a saved entry
    pub fn push(&mut self, entry: NutritionEntry) {
        self.entries.push(entry);
    }

    /// Every entry, oldest first
    #[must_use]
    pub fn entries(&self) -> &[NutritionEntry] {
        &self.entries
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was saved yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of whole kilocalories, each entry truncated as it is displayed
    #[must_use]
    pub fn total_calories(&self) -> i64 {
        self.entries
            .iter()
            .map(|entry| entry.calories.trunc() as i64)
            .sum()
    }

    /// Sum of protein grams
    #[must_use]
    pub fn total_protein(&self) -> f64 {
        self.entries.iter().map(|entry| entry.protein).sum()
    }

    /// Up to `count` entries, newest first
    pub fn recent(&self, count: usize) -> impl Iterator<Item = &NutritionEntry> {
        self.entries.iter().rev().take(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    fn entry(calories: f64, protein: f64, minutes_ago: i64) -> NutritionEntry {
        NutritionEntry {
            id: Uuid::new_v4(),
            calories,
            protein,
            timestamp: Utc::now() - Duration::minutes(minutes_ago),
        }
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let input = NutritionInput::parse(" 500 ", "25.5\n").unwrap();
        assert!((input.calories - 500.0).abs() < f64::EPSILON);
        assert!((input.protein - 25.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_rejects_bad_fields() {
        assert!(!NutritionInput::is_valid("", "10"));
        assert!(!NutritionInput::is_valid("abc", "10"));
        assert!(!NutritionInput::is_valid("100", "-1"));
        assert!(!NutritionInput::is_valid("inf", "10"));
        assert!(!NutritionInput::is_valid("NaN", "10"));
        assert!(NutritionInput::is_valid("0", "0"));
    }

    #[test]
    fn test_totals_truncate_calories() {
        let mut log = NutritionLog::new();
        log.push(entry(250.9, 10.5, 20));
        log.push(entry(100.2, 4.25, 10));
        assert_eq!(log.total_calories(), 350);
        assert!((log.total_protein() - 14.75).abs() < 1e-9);
    }

    #[test]
    fn test_recent_is_newest_first() {
        let mut log = NutritionLog::new();
        for calories in [100.0, 200.0, 300.0, 400.0] {
            log.push(entry(calories, 1.0, 0));
        }
        let recent: Vec<f64> = log.recent(3).map(|entry| entry.calories).collect();
        assert_eq!(recent, vec![400.0, 300.0, 200.0]);
    }
}
