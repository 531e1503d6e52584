// ABOUTME: Integration tests for the permission gate
// ABOUTME: Covers scope subsets, unavailable stores, request outcomes, and verification after a request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::manager_for;
use health_overview::errors::{ErrorCode, StoreError};
use health_overview::models::{AuthorizationStatus, HealthScope};
use health_overview::permissions::{required_read_scopes, required_write_scopes};
use health_overview::store::memory::AuthorizationResponse;
use health_overview::store::{HealthStore, InMemoryHealthStore};
use std::sync::Arc;

#[tokio::test]
async fn test_every_incomplete_subset_is_not_granted() {
    let scopes: Vec<HealthScope> = required_read_scopes()
        .iter()
        .chain(required_write_scopes())
        .copied()
        .collect();
    let full = (1_u32 << scopes.len()) - 1;

    for mask in 0..=full {
        let store = Arc::new(InMemoryHealthStore::new());
        for (bit, scope) in scopes.iter().enumerate() {
            let status = if mask & (1 << bit) != 0 {
                AuthorizationStatus::SharingAuthorized
            } else if bit % 2 == 0 {
                AuthorizationStatus::SharingDenied
            } else {
                AuthorizationStatus::NotDetermined
            };
            store.set_status(*scope, status);
        }

        let manager = manager_for(&store);
        let granted = manager.check_all_permissions();
        manager.context().flush().await.unwrap();

        assert_eq!(granted, mask == full, "mask {mask:#08b}");
        assert_eq!(manager.context().snapshot().has_all_permissions, granted);
    }
}

#[tokio::test]
async fn test_unavailable_store_is_never_polled() {
    let store = Arc::new(InMemoryHealthStore::authorized());
    store.set_available(false);
    let manager = manager_for(&store);
    manager.context().set_has_all_permissions(true);

    assert!(!manager.check_all_permissions());
    manager.context().flush().await.unwrap();

    assert_eq!(store.call_counts().status_checks, 0);
    assert!(!manager.context().snapshot().has_all_permissions);
}

#[tokio::test]
async fn test_check_stops_at_first_missing_scope() {
    let store = Arc::new(InMemoryHealthStore::authorized());
    store.set_status(HealthScope::Height, AuthorizationStatus::SharingDenied);
    let manager = manager_for(&store);

    assert!(!manager.check_all_permissions());
    assert_eq!(store.call_counts().status_checks, 1);
}

#[tokio::test]
async fn test_write_scopes_are_checked_after_reads() {
    let store = Arc::new(InMemoryHealthStore::authorized());
    store.set_status(HealthScope::DietaryProtein, AuthorizationStatus::NotDetermined);
    let manager = manager_for(&store);

    assert!(!manager.check_all_permissions());
    assert_eq!(
        manager.gate().first_missing_scope(),
        Some(HealthScope::DietaryProtein)
    );
}

#[tokio::test]
async fn test_request_grants_reads_and_writes_together() {
    let store = Arc::new(InMemoryHealthStore::new());
    let manager = manager_for(&store);

    manager.request_all_authorizations().await.unwrap();

    assert_eq!(store.call_counts().authorization_requests, 1);
    for scope in HealthScope::ALL {
        assert_eq!(
            store.authorization_status(scope),
            AuthorizationStatus::SharingAuthorized
        );
    }
}

#[tokio::test]
async fn test_request_does_not_publish_permission_state() {
    let store = Arc::new(InMemoryHealthStore::new());
    let manager = manager_for(&store);

    manager.request_all_authorizations().await.unwrap();
    manager.context().flush().await.unwrap();

    assert!(!manager.context().snapshot().has_all_permissions);
}

#[tokio::test]
async fn test_declined_request_is_authorization_denied() {
    let store = Arc::new(InMemoryHealthStore::new());
    store.set_authorization_response(AuthorizationResponse::Decline);
    let manager = manager_for(&store);

    let error = manager.request_all_authorizations().await.unwrap_err();
    assert_eq!(error.code, ErrorCode::AuthorizationDenied);
    assert!(error.store_error().is_none());
}

#[tokio::test]
async fn test_failed_request_passes_store_error_through() {
    let raw = StoreError::DatabaseInaccessible("protected data unavailable".to_owned());
    let store = Arc::new(InMemoryHealthStore::new());
    store.set_authorization_response(AuthorizationResponse::Fail(raw.clone()));
    let manager = manager_for(&store);

    let error = manager.request_all_authorizations().await.unwrap_err();
    assert_eq!(error.code, ErrorCode::AuthorizationDenied);
    assert_eq!(error.store_error(), Some(&raw));
    assert_eq!(error.user_message(), raw.to_string());
}

#[tokio::test]
async fn test_request_on_unavailable_store_never_calls_it() {
    let store = Arc::new(InMemoryHealthStore::unavailable());
    let manager = manager_for(&store);

    let error = manager.request_all_authorizations().await.unwrap_err();
    assert_eq!(error.code, ErrorCode::HealthDataUnavailable);
    assert_eq!(store.call_counts().authorization_requests, 0);
}

#[tokio::test]
async fn test_verified_request_reports_declined_scope() {
    let store = Arc::new(InMemoryHealthStore::new());
    store.set_authorization_response(AuthorizationResponse::GrantExcept(vec![
        HealthScope::HeartRate,
    ]));
    let manager = manager_for(&store);

    // The request itself completes successfully
    assert!(manager.request_all_authorizations().await.is_ok());

    let granted = manager.request_and_verify().await.unwrap();
    manager.context().flush().await.unwrap();

    assert!(!granted);
    assert!(!manager.context().snapshot().has_all_permissions);
    assert_eq!(
        manager.gate().first_missing_scope(),
        Some(HealthScope::HeartRate)
    );
}

#[tokio::test]
async fn test_verified_request_publishes_grant() {
    let store = Arc::new(InMemoryHealthStore::new());
    let manager = manager_for(&store);

    assert!(manager.request_and_verify().await.unwrap());
    manager.context().flush().await.unwrap();
    assert!(manager.context().snapshot().has_all_permissions);
}
