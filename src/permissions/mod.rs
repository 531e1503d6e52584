// ABOUTME: Permission gate over the health scopes the application reads and writes
// ABOUTME: Polls per-scope authorization, requests access, and publishes the aggregate result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Permission Gate
//!
//! The application needs four read scopes and two write scopes. The gate reduces
//! their statuses to one boolean: `true` only when every one of them reports
//! [`AuthorizationStatus::SharingAuthorized`]. The boolean is never cached beyond
//! the screen state it is published to; every check polls the store again.
//!
//! A completed authorization request does not mean every scope was granted, so
//! [`PermissionGate::request_and_verify`] always finishes with a fresh check and
//! reports that check's result.

use crate::errors::{AppError, AppResult};
use crate::logging::HealthLogger;
use crate::state::PresentationContext;
use crate::store::HealthStore;
use health_core::models::{AuthorizationStatus, HealthScope};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// Scopes the application reads
pub const REQUIRED_READ_SCOPES: [HealthScope; 4] = [
    HealthScope::Height,
    HealthScope::StepCount,
    HealthScope::FlightsClimbed,
    HealthScope::HeartRate,
];

/// Scopes the application writes
pub const REQUIRED_WRITE_SCOPES: [HealthScope; 2] = [
    HealthScope::DietaryEnergyConsumed,
    HealthScope::DietaryProtein,
];

/// Scopes the application reads
#[must_use]
pub const fn required_read_scopes() -> &'static [HealthScope] {
    &REQUIRED_READ_SCOPES
}

/// Scopes the application writes
#[must_use]
pub const fn required_write_scopes() -> &'static [HealthScope] {
    &REQUIRED_WRITE_SCOPES
}

/// Aggregate authorization over every required scope
#[derive(Clone)]
pub struct PermissionGate {
    store: Arc<dyn HealthStore>,
    context: PresentationContext,
}

impl fmt::Debug for PermissionGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PermissionGate")
            .field("store_available", &self.store.is_available())
            .finish_non_exhaustive()
    }
}

impl PermissionGate {
    /// Create a gate that publishes to `context`
    #[must_use]
    pub fn new(store: Arc<dyn HealthStore>, context: PresentationContext) -> Self {
        Self { store, context }
    }

    /// First required scope that is not authorized, reads before writes
    ///
    /// Stops querying at the first scope that fails. Returns `None` when every
    /// scope is authorized.
    #[must_use]
    pub fn first_missing_scope(&self) -> Option<HealthScope> {
        REQUIRED_READ_SCOPES
            .iter()
            .chain(REQUIRED_WRITE_SCOPES.iter())
            .copied()
            .find(|scope| {
                self.store.authorization_status(*scope) != AuthorizationStatus::SharingAuthorized
            })
    }

    /// Poll every required scope and publish whether all are authorized
    ///
    /// An unavailable store publishes `false` without any status query.
    pub fn check_all_permissions(&self) -> bool {
        if !self.store.is_available() {
            warn!("Health data unavailable; permissions cannot be granted");
            self.context.set_has_all_permissions(false);
            return false;
        }

        let first_missing = self.first_missing_scope();
        let granted = first_missing.is_none();
        HealthLogger::log_permission_check(granted, first_missing);
        self.context.set_has_all_permissions(granted);
        granted
    }

    /// Ask for every required scope in one combined request
    ///
    /// Does not update the published permission state.
    ///
    /// # Errors
    ///
    /// - `HealthDataUnavailable` if the store is unavailable; the store is not
    ///   contacted.
    /// - `AuthorizationDenied` carrying the raw store error if the request failed.
    /// - `AuthorizationDenied` if the request completed with a `false` flag.
    pub async fn request_all_authorizations(&self) -> AppResult<()> {
        if !self.store.is_available() {
            return Err(AppError::unavailable());
        }

        let started = Instant::now();
        let result = self
            .store
            .request_authorization(&REQUIRED_WRITE_SCOPES, &REQUIRED_READ_SCOPES)
            .await;
        HealthLogger::log_store_call(
            "request_authorization",
            None,
            matches!(result, Ok(true)),
            started.elapsed(),
        );

        match result {
            Ok(true) => {
                info!("Health authorization request completed");
                Ok(())
            }
            Ok(false) => Err(AppError::authorization_denied()),
            Err(error) => Err(AppError::authorization_failed(error)),
        }
    }

    /// Request every scope, then report the outcome of a fresh check
    ///
    /// The returned boolean is the check's result, so a request that completed
    /// while the user declined a scope yields `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Same as [`PermissionGate::request_all_authorizations`]; no check runs when
    /// the request fails.
    pub async fn request_and_verify(&self) -> AppResult<bool> {
        self.request_all_authorizations().await?;
        Ok(self.check_all_permissions())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_scopes_are_disjoint() {
        assert!(required_read_scopes()
            .iter()
            .all(|scope| !required_write_scopes().contains(scope)));
        assert_eq!(
            required_read_scopes().len() + required_write_scopes().len(),
            HealthScope::ALL.len()
        );
    }
}
