// ABOUTME: Raw error type reported by health store implementations
// ABOUTME: Mirrors the failure kinds a platform health data store can produce
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::HealthScope;

/// Failure reported by a health store for a single call
///
/// These are carried through `AppError` unchanged; the data layer never rewrites
/// them.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The user has not yet been asked about this scope
    #[error("authorization not determined for {scope}")]
    AuthorizationNotDetermined {
        /// Scope that was accessed
        scope: HealthScope,
    },

    /// The user declined access to this scope
    #[error("not authorized to access {scope}")]
    NotAuthorized {
        /// Scope that was accessed
        scope: HealthScope,
    },

    /// The protected store cannot be read right now (for example the device is locked)
    #[error("health database inaccessible: {0}")]
    DatabaseInaccessible(String),

    /// The call was malformed
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Any other store failure
    #[error("{0}")]
    Other(String),
}
