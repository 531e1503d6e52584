// ABOUTME: Data access facade that turns health store queries into typed records
// ABOUTME: Height, daily activity sums, weekly heart rate, nutrition writes, and authorize-then-fetch flows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Health Data Manager
//!
//! One manager belongs to one screen. It owns the screen's
//! [`PresentationContext`] and a [`PermissionGate`] that publishes to it.
//!
//! Every operation checks store availability first and fails with
//! `HealthDataUnavailable` without contacting the store. Authorization is never
//! pre-checked; the store enforces it and its errors are passed through with
//! their original message.

use crate::clock::{Clock, SystemClock};
use crate::config::HealthConfig;
use crate::errors::{AppError, AppResult};
use crate::logging::HealthLogger;
use crate::permissions::PermissionGate;
use crate::state::PresentationContext;
use crate::store::{HealthStore, SampleQuery, StatisticsQuery};
use chrono::{DateTime, Utc};
use futures_util::future::try_join;
use health_core::models::{
    ActivityData, DateRange, HealthScope, HealthUnit, HeartRateData, HeightSample,
    NutritionWriteRequest,
};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Typed access to the health store for one screen
#[derive(Clone)]
pub struct HealthDataManager {
    store: Arc<dyn HealthStore>,
    clock: Arc<dyn Clock>,
    config: HealthConfig,
    context: PresentationContext,
    gate: PermissionGate,
}

impl fmt::Debug for HealthDataManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HealthDataManager")
            .field("config", &self.config)
            .field("gate", &self.gate)
            .finish_non_exhaustive()
    }
}

impl HealthDataManager {
    /// Create a manager on the wall clock with a fresh presentation context
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    #[must_use]
    pub fn new(store: Arc<dyn HealthStore>, config: HealthConfig) -> Self {
        Self::with_clock(store, Arc::new(SystemClock), config)
    }

    /// Create a manager on `clock` with a fresh presentation context
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    #[must_use]
    pub fn with_clock(
        store: Arc<dyn HealthStore>,
        clock: Arc<dyn Clock>,
        config: HealthConfig,
    ) -> Self {
        Self::with_context(store, clock, config, PresentationContext::new())
    }

    /// Create a manager publishing to an existing presentation context
    #[must_use]
    pub fn with_context(
        store: Arc<dyn HealthStore>,
        clock: Arc<dyn Clock>,
        config: HealthConfig,
        context: PresentationContext,
    ) -> Self {
        let gate = PermissionGate::new(Arc::clone(&store), context.clone());
        Self {
            store,
            clock,
            config,
            context,
            gate,
        }
    }

    /// Presentation context this manager publishes to
    #[must_use]
    pub const fn context(&self) -> &PresentationContext {
        &self.context
    }

    /// Permission gate over the required scopes
    #[must_use]
    pub const fn gate(&self) -> &PermissionGate {
        &self.gate
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &HealthConfig {
        &self.config
    }

    /// Whether the store exists on this device
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.store.is_available()
    }

    /// See [`PermissionGate::check_all_permissions`]
    pub fn check_all_permissions(&self) -> bool {
        self.gate.check_all_permissions()
    }

    /// See [`PermissionGate::request_all_authorizations`]
    ///
    /// # Errors
    ///
    /// Fails when the store is unavailable, the request fails, or it is declined.
    pub async fn request_all_authorizations(&self) -> AppResult<()> {
        self.gate.request_all_authorizations().await
    }

    /// See [`PermissionGate::request_and_verify`]
    ///
    /// # Errors
    ///
    /// Fails when the store is unavailable, the request fails, or it is declined.
    pub async fn request_and_verify(&self) -> AppResult<bool> {
        self.gate.request_and_verify().await
    }

    /// Most recent height measurement in centimeters
    ///
    /// Returns `Ok(None)` when no height was ever recorded.
    ///
    /// # Errors
    ///
    /// Fails when the store is unavailable or the query fails.
    #[instrument(skip(self))]
    pub async fn fetch_height(&self) -> AppResult<Option<HeightSample>> {
        self.ensure_available()?;

        let started = Instant::now();
        let result = self
            .store
            .query_samples(SampleQuery::latest(HealthScope::Height))
            .await;
        HealthLogger::log_store_call(
            "query_samples",
            Some(HealthScope::Height),
            result.is_ok(),
            started.elapsed(),
        );

        let latest = result
            .map_err(AppError::query_failed)?
            .into_iter()
            .find_map(|sample| sample.into_quantity());
        let Some(sample) = latest else {
            debug!("No height sample recorded");
            return Ok(None);
        };

        let value_cm = sample
            .quantity
            .value_in(HealthUnit::Centimeter)
            .ok_or_else(|| {
                AppError::invalid_input(format!(
                    "Height sample is recorded in {}",
                    sample.quantity.unit
                ))
            })?;

        Ok(Some(HeightSample {
            value_cm,
            measured_at: sample.start,
        }))
    }

    /// Cumulative sum of `scope` over `[start, end)` expressed in `unit`
    ///
    /// An empty window sums to `0.0`.
    ///
    /// # Errors
    ///
    /// Fails when the store is unavailable, the query fails, or the sum cannot be
    /// expressed in `unit`.
    #[instrument(skip(self))]
    pub async fn fetch_sum(
        &self,
        scope: HealthScope,
        unit: HealthUnit,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<f64> {
        self.ensure_available()?;
        self.sum_in_range(scope, unit, DateRange::new(start, end))
            .await
    }

    /// Steps since the start of the local day
    ///
    /// # Errors
    ///
    /// Fails when the store is unavailable or the query fails.
    pub async fn fetch_today_steps(&self) -> AppResult<f64> {
        self.ensure_available()?;
        let today = self.today()?;
        self.sum_in_range(HealthScope::StepCount, HealthUnit::Count, today)
            .await
    }

    /// Floors climbed since the start of the local day
    ///
    /// # Errors
    ///
    /// Fails when the store is unavailable or the query fails.
    pub async fn fetch_today_floors(&self) -> AppResult<f64> {
        self.ensure_available()?;
        let today = self.today()?;
        self.sum_in_range(HealthScope::FlightsClimbed, HealthUnit::Count, today)
            .await
    }

    /// Heart rate readings of the trailing window, oldest first
    ///
    /// The window is `[now - days, now)`. Samples that are not quantities are
    /// dropped.
    ///
    /// # Errors
    ///
    /// Fails when the store is unavailable, the configured window is out of
    /// range, or the query fails.
    #[instrument(skip(self))]
    pub async fn fetch_weekly_heart_rate(&self) -> AppResult<Vec<HeartRateData>> {
        self.ensure_available()?;

        let now = self.clock.now();
        let window = DateRange::new(self.config.heart_rate_window_start(now)?, now);

        let started = Instant::now();
        let result = self
            .store
            .query_samples(SampleQuery::in_range(HealthScope::HeartRate, window))
            .await;
        HealthLogger::log_store_call(
            "query_samples",
            Some(HealthScope::HeartRate),
            result.is_ok(),
            started.elapsed(),
        );

        let readings: Vec<HeartRateData> = result
            .map_err(AppError::query_failed)?
            .into_iter()
            .filter_map(|sample| sample.into_quantity())
            .filter_map(|sample| {
                sample
                    .quantity
                    .value_in(HealthUnit::CountPerMinute)
                    .map(|bpm| HeartRateData {
                        id: sample.id,
                        timestamp: sample.start,
                        bpm,
                    })
            })
            .collect();

        debug!(readings = readings.len(), "Fetched heart rate window");
        Ok(readings)
    }

    /// Today's steps and floors, queried concurrently
    ///
    /// # Errors
    ///
    /// Fails with the error of whichever query fails first; no partial result is
    /// returned.
    #[instrument(skip(self))]
    pub async fn fetch_today_activity_data(&self) -> AppResult<ActivityData> {
        self.ensure_available()?;
        let today = self.today()?;

        let (steps, floors) = try_join(
            self.sum_in_range(HealthScope::StepCount, HealthUnit::Count, today),
            self.sum_in_range(HealthScope::FlightsClimbed, HealthUnit::Count, today),
        )
        .await?;

        Ok(ActivityData { steps, floors })
    }

    /// Record calories and protein at the current instant
    ///
    /// Both samples share one timestamp and are written in one batch.
    ///
    /// # Errors
    ///
    /// Fails when the store is unavailable, the write fails, or the store does
    /// not accept the batch.
    #[instrument(skip(self))]
    pub async fn save_nutrition_data(
        &self,
        calories: f64,
        protein: f64,
    ) -> AppResult<NutritionWriteRequest> {
        self.ensure_available()?;

        let request = NutritionWriteRequest::new(calories, protein, self.clock.now());
        let started = Instant::now();
        let result = self.store.save_samples(request.to_samples()).await;
        HealthLogger::log_store_call(
            "save_samples",
            Some(HealthScope::DietaryEnergyConsumed),
            matches!(result, Ok(true)),
            started.elapsed(),
        );

        match result {
            Ok(true) => {
                info!(
                    calories_kcal = calories,
                    protein_grams = protein,
                    "Saved nutrition samples"
                );
                Ok(request)
            }
            Ok(false) => Err(AppError::write_rejected()),
            Err(error) => Err(AppError::write_failed(error)),
        }
    }

    /// Request authorization, then fetch the latest height
    ///
    /// # Errors
    ///
    /// The authorization error is returned unchanged and the fetch never runs.
    pub async fn request_authorization_and_fetch_height(&self) -> AppResult<Option<HeightSample>> {
        self.request_all_authorizations().await?;
        self.fetch_height().await
    }

    /// Request authorization, then fetch today's activity
    ///
    /// # Errors
    ///
    /// The authorization error is returned unchanged and the fetch never runs.
    pub async fn request_authorization_and_fetch_activity(&self) -> AppResult<ActivityData> {
        self.request_all_authorizations().await?;
        self.fetch_today_activity_data().await
    }

    /// Request authorization, then fetch the heart rate window
    ///
    /// # Errors
    ///
    /// The authorization error is returned unchanged and the fetch never runs.
    pub async fn request_authorization_and_fetch_heart_rate(
        &self,
    ) -> AppResult<Vec<HeartRateData>> {
        self.request_all_authorizations().await?;
        self.fetch_weekly_heart_rate().await
    }

    fn ensure_available(&self) -> AppResult<()> {
        if self.store.is_available() {
            Ok(())
        } else {
            Err(AppError::unavailable())
        }
    }

    fn today(&self) -> AppResult<DateRange> {
        let now = self.clock.now();
        Ok(DateRange::new(self.config.start_of_day(now)?, now))
    }

    async fn sum_in_range(
        &self,
        scope: HealthScope,
        unit: HealthUnit,
        range: DateRange,
    ) -> AppResult<f64> {
        let started = Instant::now();
        let result = self
            .store
            .query_statistics(StatisticsQuery::sum(scope, range))
            .await;
        HealthLogger::log_store_call(
            "query_statistics",
            Some(scope),
            result.is_ok(),
            started.elapsed(),
        );

        match result.map_err(AppError::query_failed)? {
            None => Ok(0.0),
            Some(total) => total.value_in(unit).ok_or_else(|| {
                AppError::invalid_input(format!("{scope} cannot be summed in {unit}"))
            }),
        }
    }
}
