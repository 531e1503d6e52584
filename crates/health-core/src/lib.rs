// ABOUTME: Core types and constants for the health overview data layer
// ABOUTME: Foundation crate with error handling, health data models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Health Core
//!
//! Foundation crate providing the shared vocabulary of the health overview
//! workspace. It has no async runtime dependency so that store implementations
//! and presentation code can share it freely.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the raw `StoreError` reported by health stores
//! - **models**: scopes, units, quantities, samples, and the typed records built from them
//! - **constants**: unit factors, default goals, query windows, and user-facing messages

/// Unified error handling with standard error codes
pub mod errors;

/// Health data models (scopes, units, samples, records)
pub mod models;

/// Application constants organized by domain
pub mod constants;
