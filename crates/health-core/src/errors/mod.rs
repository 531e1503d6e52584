// ABOUTME: Unified error handling for health data access and presentation
// ABOUTME: Defines ErrorCode, AppError, and the AppResult alias used across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible operation in the workspace returns `AppResult<T>`. The error
//! carries a coarse `ErrorCode` for callers that branch on the failure kind, a
//! human-readable message, and optionally the raw store error that caused it.
//!
//! Store failures are never translated: the message of an `AppError` built from a
//! `StoreError` is the store's own message, and the `StoreError` itself stays
//! reachable through [`AppError::store_error`].
//!
//! Absence of data is not an error. A missing height sample or an empty
//! statistics window is a valid `None` or `0.0` result.

mod store;

pub use store::StoreError;

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// The platform health data capability does not exist on this device
    #[serde(rename = "HEALTH_DATA_UNAVAILABLE")]
    HealthDataUnavailable,
    /// The authorization request failed or was declined
    #[serde(rename = "AUTHORIZATION_DENIED")]
    AuthorizationDenied,
    /// A read query against the health store failed
    #[serde(rename = "QUERY_FAILED")]
    QueryFailed,
    /// A write against the health store failed
    #[serde(rename = "WRITE_FAILED")]
    WriteFailed,
    /// User supplied input could not be accepted
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// Configuration is invalid
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid,
    /// Internal failure (for example a presentation context that is gone)
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::HealthDataUnavailable => "Health data is not available on this device",
            Self::AuthorizationDenied => "Health data access was not authorized",
            Self::QueryFailed => "Reading health data failed",
            Self::WriteFailed => "Saving health data failed",
            Self::InvalidInput => "The provided input is invalid",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Unified error type for the workspace
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// The raw store error behind this failure, if there is one
    #[must_use]
    pub fn store_error(&self) -> Option<&StoreError> {
        self.source
            .as_deref()
            .and_then(|source| source.downcast_ref::<StoreError>())
    }

    /// Message suitable for showing on a screen
    #[must_use]
    pub fn user_message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience functions for creating common errors
impl AppError {
    /// The platform health data store does not exist on this device
    #[must_use]
    pub fn unavailable() -> Self {
        Self::new(
            ErrorCode::HealthDataUnavailable,
            "Health data is not available on this device",
        )
    }

    /// The authorization request reported failure without a store error
    #[must_use]
    pub fn authorization_denied() -> Self {
        Self::new(
            ErrorCode::AuthorizationDenied,
            "Health data authorization was not granted",
        )
    }

    /// The authorization request itself failed inside the store
    #[must_use]
    pub fn authorization_failed(error: StoreError) -> Self {
        Self::passthrough(ErrorCode::AuthorizationDenied, error)
    }

    /// A read query failed inside the store
    #[must_use]
    pub fn query_failed(error: StoreError) -> Self {
        Self::passthrough(ErrorCode::QueryFailed, error)
    }

    /// A write failed inside the store
    #[must_use]
    pub fn write_failed(error: StoreError) -> Self {
        Self::passthrough(ErrorCode::WriteFailed, error)
    }

    /// The store rejected a write batch without reporting an error
    #[must_use]
    pub fn write_rejected() -> Self {
        Self::new(
            ErrorCode::WriteFailed,
            "Health store did not accept the samples",
        )
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    fn passthrough(code: ErrorCode, error: StoreError) -> Self {
        Self::new(code, error.to_string()).with_source(error)
    }
}
