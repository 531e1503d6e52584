// ABOUTME: Health store capability boundary for authorization, queries, and writes
// ABOUTME: Defines the HealthStore trait and its query types; platform stores implement it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Health Store Interface
//!
//! The platform health data store is an external collaborator. This module
//! describes the subset of its API the application uses, as one async trait.
//! Each method resolves exactly once with either a value or a [`StoreError`];
//! callback-style platform APIs are adapted to that shape by their
//! implementations.
//!
//! ## Query semantics
//!
//! - Range predicates are half-open (`start <= sample.start < end`).
//! - `SampleQuery::limit == None` means no limit.
//! - Statistics queries report `Ok(None)` when no sample matched; callers decide
//!   what an empty window means.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryHealthStore`]: synthetic store for development, tests, and
//!   demonstrations. Holds samples and per-scope statuses in memory and supports
//!   failure injection.

/// In-memory synthetic store
pub mod memory;

pub use memory::InMemoryHealthStore;

use async_trait::async_trait;
use health_core::constants::windows;
use health_core::errors::StoreError;
use health_core::models::{
    AuthorizationStatus, DateRange, HealthScope, Quantity, QuantitySample, Sample,
};
use serde::{Deserialize, Serialize};

/// Sort order by sample start date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Oldest first
    Ascending,
    /// Newest first
    Descending,
}

/// Request for individual samples of one scope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleQuery {
    /// Scope to read
    pub scope: HealthScope,
    /// Optional time window; `None` matches every sample
    pub range: Option<DateRange>,
    /// Maximum number of samples; `None` is unlimited
    pub limit: Option<usize>,
    /// Sort order by start date
    pub sort: SortOrder,
}

impl SampleQuery {
    /// The single most recent sample of `scope`
    #[must_use]
    pub const fn latest(scope: HealthScope) -> Self {
        Self {
            scope,
            range: None,
            limit: Some(windows::LATEST_SAMPLE_LIMIT),
            sort: SortOrder::Descending,
        }
    }

    /// Every sample of `scope` inside `range`, oldest first
    #[must_use]
    pub const fn in_range(scope: HealthScope, range: DateRange) -> Self {
        Self {
            scope,
            range: Some(range),
            limit: None,
            sort: SortOrder::Ascending,
        }
    }
}

/// Aggregation performed by a statistics query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatisticsOptions {
    /// Sum of all matching samples
    CumulativeSum,
}

/// Request for an aggregate over one scope and window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsQuery {
    /// Scope to aggregate
    pub scope: HealthScope,
    /// Time window
    pub range: DateRange,
    /// Aggregation
    pub options: StatisticsOptions,
}

impl StatisticsQuery {
    /// Cumulative sum of `scope` over `range`
    #[must_use]
    pub const fn sum(scope: HealthScope, range: DateRange) -> Self {
        Self {
            scope,
            range,
            options: StatisticsOptions::CumulativeSum,
        }
    }
}

/// Platform health data store
///
/// Implementations may complete on any task; callers must not assume they are
/// resumed on the presentation context.
#[async_trait]
pub trait HealthStore: Send + Sync {
    /// Whether health data exists at all on this device
    fn is_available(&self) -> bool;

    /// Ask the user for access to `write` and `read` scopes in one request
    ///
    /// `Ok(true)` only means the request completed; it does not guarantee every
    /// scope was granted.
    async fn request_authorization(
        &self,
        write: &[HealthScope],
        read: &[HealthScope],
    ) -> Result<bool, StoreError>;

    /// Current authorization status of one scope
    fn authorization_status(&self, scope: HealthScope) -> AuthorizationStatus;

    /// Individual samples
    async fn query_samples(&self, query: SampleQuery) -> Result<Vec<Sample>, StoreError>;

    /// Aggregate over a window; `Ok(None)` when nothing matched
    async fn query_statistics(
        &self,
        query: StatisticsQuery,
    ) -> Result<Option<Quantity>, StoreError>;

    /// Write samples as one all-or-nothing batch
    async fn save_samples(&self, samples: Vec<QuantitySample>) -> Result<bool, StoreError>;
}
