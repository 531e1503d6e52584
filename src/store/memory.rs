// ABOUTME: In-memory synthetic health store for development, testing, and demonstrations
// ABOUTME: Holds samples and per-scope authorization in memory with failure injection and call counters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// RwLock poisoning is reported as StoreError::Other so callers see an ordinary
// store failure instead of a panic.

//! # In-Memory Health Store
//!
//! A synthetic [`HealthStore`] that behaves like a platform store without
//! needing one:
//!
//! - Authorization is tracked per scope and enforced on reads and writes.
//! - The response to an authorization request is scriptable (grant all, grant
//!   all but some scopes, decline, or fail), which reproduces a user declining
//!   individual items in the system dialog.
//! - Query failures can be injected per scope, write failures per store.
//! - Every call is counted so tests can assert what the data layer asked for.
//!
//! ## Thread Safety
//!
//! All state is behind `RwLock`s or atomics; one instance can be shared by many
//! screens through `Arc`.

use super::{HealthStore, SampleQuery, SortOrder, StatisticsOptions, StatisticsQuery};
use async_trait::async_trait;
use health_core::errors::StoreError;
use health_core::models::{
    AuthorizationStatus, HealthScope, Quantity, QuantitySample, Sample,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::RwLock;
use std::time::Duration;
use tracing::debug;

/// How the store answers the next authorization requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorizationResponse {
    /// Every requested scope becomes authorized; the request reports success
    GrantAll,
    /// Requested scopes become authorized except `denied`, which become denied;
    /// the request still reports success
    GrantExcept(Vec<HealthScope>),
    /// Nothing changes and the request reports `false`
    Decline,
    /// The request fails with this error
    Fail(StoreError),
}

/// Number of calls the store has received, by operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreCallCounts {
    /// `authorization_status` calls
    pub status_checks: usize,
    /// `request_authorization` calls
    pub authorization_requests: usize,
    /// `query_samples` calls
    pub sample_queries: usize,
    /// `query_statistics` calls
    pub statistics_queries: usize,
    /// `save_samples` calls
    pub writes: usize,
}

#[derive(Debug, Default)]
struct CallCounters {
    status_checks: AtomicUsize,
    authorization_requests: AtomicUsize,
    sample_queries: AtomicUsize,
    statistics_queries: AtomicUsize,
    writes: AtomicUsize,
}

/// Synthetic health store kept entirely in memory
#[derive(Debug)]
pub struct InMemoryHealthStore {
    available: AtomicBool,
    enforce_authorization: AtomicBool,
    samples: RwLock<Vec<Sample>>,
    statuses: RwLock<HashMap<HealthScope, AuthorizationStatus>>,
    authorization_response: RwLock<AuthorizationResponse>,
    query_failures: RwLock<HashMap<HealthScope, StoreError>>,
    write_failure: RwLock<Option<StoreError>>,
    reject_writes: AtomicBool,
    latency: RwLock<HashMap<HealthScope, Duration>>,
    counters: CallCounters,
}

impl Default for InMemoryHealthStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryHealthStore {
    /// Available store with no data and every scope not yet determined
    #[must_use]
    pub fn new() -> Self {
        Self {
            available: AtomicBool::new(true),
            enforce_authorization: AtomicBool::new(true),
            samples: RwLock::new(Vec::new()),
            statuses: RwLock::new(HashMap::new()),
            authorization_response: RwLock::new(AuthorizationResponse::GrantAll),
            query_failures: RwLock::new(HashMap::new()),
            write_failure: RwLock::new(None),
            reject_writes: AtomicBool::new(false),
            latency: RwLock::new(HashMap::new()),
            counters: CallCounters::default(),
        }
    }

    /// Store on a device without health data
    #[must_use]
    pub fn unavailable() -> Self {
        let store = Self::new();
        store.set_available(false);
        store
    }

    /// Available store with every scope already authorized
    #[must_use]
    pub fn authorized() -> Self {
        let store = Self::new();
        for scope in HealthScope::ALL {
            store.set_status(scope, AuthorizationStatus::SharingAuthorized);
        }
        store
    }

    /// Builder: preload samples
    #[must_use]
    pub fn with_samples(self, samples: impl IntoIterator<Item = Sample>) -> Self {
        self.add_samples(samples);
        self
    }

    /// Toggle device availability
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Toggle authorization enforcement on reads and writes
    pub fn set_enforce_authorization(&self, enforce: bool) {
        self.enforce_authorization.store(enforce, Ordering::SeqCst);
    }

    /// Set the status of one scope
    pub fn set_status(&self, scope: HealthScope, status: AuthorizationStatus) {
        if let Ok(mut statuses) = self.statuses.write() {
            statuses.insert(scope, status);
        }
    }

    /// Script the answer to subsequent authorization requests
    pub fn set_authorization_response(&self, response: AuthorizationResponse) {
        if let Ok(mut current) = self.authorization_response.write() {
            *current = response;
        }
    }

    /// Add one sample
    pub fn add_sample(&self, sample: impl Into<Sample>) {
        self.add_samples([sample.into()]);
    }

    /// Add many samples
    pub fn add_samples(&self, samples: impl IntoIterator<Item = Sample>) {
        if let Ok(mut stored) = self.samples.write() {
            stored.extend(samples);
        }
    }

    /// Make every query against `scope` fail with `error` until cleared
    pub fn fail_queries(&self, scope: HealthScope, error: StoreError) {
        if let Ok(mut failures) = self.query_failures.write() {
            failures.insert(scope, error);
        }
    }

    /// Make every write fail with `error` until cleared
    pub fn fail_writes(&self, error: StoreError) {
        if let Ok(mut failure) = self.write_failure.write() {
            *failure = Some(error);
        }
    }

    /// Make every write report `false` without an error
    pub fn set_reject_writes(&self, reject: bool) {
        self.reject_writes.store(reject, Ordering::SeqCst);
    }

    /// Remove every injected failure
    pub fn clear_failures(&self) {
        if let Ok(mut failures) = self.query_failures.write() {
            failures.clear();
        }
        if let Ok(mut failure) = self.write_failure.write() {
            *failure = None;
        }
        self.reject_writes.store(false, Ordering::SeqCst);
    }

    /// Delay every query against `scope` by `delay`
    pub fn set_latency(&self, scope: HealthScope, delay: Duration) {
        if let Ok(mut latency) = self.latency.write() {
            latency.insert(scope, delay);
        }
    }

    /// Snapshot of the stored samples of `scope`, in insertion order
    #[must_use]
    pub fn samples_of(&self, scope: HealthScope) -> Vec<Sample> {
        self.samples.read().map_or_else(
            |_| Vec::new(),
            |samples| {
                samples
                    .iter()
                    .filter(|sample| sample.scope() == scope)
                    .cloned()
                    .collect()
            },
        )
    }

    /// Total number of stored samples
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.samples.read().map_or(0, |samples| samples.len())
    }

    /// Calls received so far
    #[must_use]
    pub fn call_counts(&self) -> StoreCallCounts {
        StoreCallCounts {
            status_checks: self.counters.status_checks.load(Ordering::SeqCst),
            authorization_requests: self.counters.authorization_requests.load(Ordering::SeqCst),
            sample_queries: self.counters.sample_queries.load(Ordering::SeqCst),
            statistics_queries: self.counters.statistics_queries.load(Ordering::SeqCst),
            writes: self.counters.writes.load(Ordering::SeqCst),
        }
    }

    fn status_of(&self, scope: HealthScope) -> AuthorizationStatus {
        self.statuses
            .read()
            .ok()
            .and_then(|statuses| statuses.get(&scope).copied())
            .unwrap_or_default()
    }

    fn check_access(&self, scope: HealthScope) -> Result<(), StoreError> {
        if !self.enforce_authorization.load(Ordering::SeqCst) {
            return Ok(());
        }
        match self.status_of(scope) {
            AuthorizationStatus::SharingAuthorized => Ok(()),
            AuthorizationStatus::SharingDenied => Err(StoreError::NotAuthorized { scope }),
            AuthorizationStatus::NotDetermined => {
                Err(StoreError::AuthorizationNotDetermined { scope })
            }
        }
    }

    fn injected_failure(&self, scope: HealthScope) -> Result<(), StoreError> {
        let failure = self
            .query_failures
            .read()
            .map_err(|_| poisoned("query_failures"))?
            .get(&scope)
            .cloned();
        failure.map_or(Ok(()), Err)
    }

    async fn simulate_latency(&self, scope: HealthScope) {
        let delay = self
            .latency
            .read()
            .ok()
            .and_then(|latency| latency.get(&scope).copied());
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn apply_authorization(
        &self,
        requested: impl Iterator<Item = HealthScope>,
        denied: &[HealthScope],
    ) -> Result<(), StoreError> {
        let mut statuses = self
            .statuses
            .write()
            .map_err(|_| poisoned("statuses"))?;
        for scope in requested {
            let status = if denied.contains(&scope) {
                AuthorizationStatus::SharingDenied
            } else {
                AuthorizationStatus::SharingAuthorized
            };
            statuses.insert(scope, status);
        }
        Ok(())
    }
}

fn poisoned(lock: &str) -> StoreError {
    StoreError::Other(format!("RwLock poisoned: {lock} lock"))
}

#[async_trait]
impl HealthStore for InMemoryHealthStore {
    fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    async fn request_authorization(
        &self,
        write: &[HealthScope],
        read: &[HealthScope],
    ) -> Result<bool, StoreError> {
        self.counters
            .authorization_requests
            .fetch_add(1, Ordering::SeqCst);

        let response = self
            .authorization_response
            .read()
            .map_err(|_| poisoned("authorization_response"))?
            .clone();
        let requested = write.iter().chain(read.iter()).copied();

        match response {
            AuthorizationResponse::GrantAll => {
                self.apply_authorization(requested, &[])?;
                Ok(true)
            }
            AuthorizationResponse::GrantExcept(denied) => {
                self.apply_authorization(requested, &denied)?;
                Ok(true)
            }
            AuthorizationResponse::Decline => Ok(false),
            AuthorizationResponse::Fail(error) => Err(error),
        }
    }

    fn authorization_status(&self, scope: HealthScope) -> AuthorizationStatus {
        self.counters.status_checks.fetch_add(1, Ordering::SeqCst);
        self.status_of(scope)
    }

    async fn query_samples(&self, query: SampleQuery) -> Result<Vec<Sample>, StoreError> {
        self.counters.sample_queries.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency(query.scope).await;
        self.injected_failure(query.scope)?;
        self.check_access(query.scope)?;

        let mut matched: Vec<Sample> = self
            .samples
            .read()
            .map_err(|_| poisoned("samples"))?
            .iter()
            .filter(|sample| sample.scope() == query.scope)
            .filter(|sample| {
                query
                    .range
                    .as_ref()
                    .is_none_or(|range| range.contains(sample.start()))
            })
            .cloned()
            .collect();

        match query.sort {
            SortOrder::Ascending => matched.sort_by_key(Sample::start),
            SortOrder::Descending => {
                matched.sort_by_key(Sample::start);
                matched.reverse();
            }
        }
        if let Some(limit) = query.limit {
            matched.truncate(limit);
        }

        debug!(
            scope = %query.scope,
            matched = matched.len(),
            "In-memory sample query"
        );
        Ok(matched)
    }

    async fn query_statistics(
        &self,
        query: StatisticsQuery,
    ) -> Result<Option<Quantity>, StoreError> {
        self.counters
            .statistics_queries
            .fetch_add(1, Ordering::SeqCst);
        self.simulate_latency(query.scope).await;
        self.injected_failure(query.scope)?;
        self.check_access(query.scope)?;

        let StatisticsOptions::CumulativeSum = query.options;
        if !query.scope.is_cumulative() {
            return Err(StoreError::InvalidArgument(format!(
                "{} does not support cumulative sums",
                query.scope
            )));
        }
        if query.range.is_empty() {
            return Ok(None);
        }

        let unit = query.scope.canonical_unit();
        let samples = self.samples.read().map_err(|_| poisoned("samples"))?;
        let mut matched = false;
        let mut total = 0.0;
        for sample in samples
            .iter()
            .filter_map(Sample::as_quantity)
            .filter(|sample| sample.scope == query.scope && query.range.contains(sample.start))
        {
            let value = sample.quantity.value_in(unit).ok_or_else(|| {
                StoreError::InvalidArgument(format!(
                    "sample {} is not convertible to {unit}",
                    sample.id
                ))
            })?;
            total += value;
            matched = true;
        }
        drop(samples);

        Ok(matched.then(|| Quantity::new(total, unit)))
    }

    async fn save_samples(&self, samples: Vec<QuantitySample>) -> Result<bool, StoreError> {
        self.counters.writes.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = self
            .write_failure
            .read()
            .map_err(|_| poisoned("write_failure"))?
            .clone()
        {
            return Err(error);
        }
        if self.reject_writes.load(Ordering::SeqCst) {
            return Ok(false);
        }
        for sample in &samples {
            self.check_access(sample.scope)?;
            if sample.quantity.value_in(sample.scope.canonical_unit()).is_none() {
                return Err(StoreError::InvalidArgument(format!(
                    "{} cannot be stored as {}",
                    sample.quantity.unit, sample.scope
                )));
            }
        }

        self.samples
            .write()
            .map_err(|_| poisoned("samples"))?
            .extend(samples.into_iter().map(Sample::Quantity));
        Ok(true)
    }
}
