// ABOUTME: Integration tests for the permission flow driver
// ABOUTME: Runs check, request, retry, and foreground transitions against the in-memory store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::manager_for;
use health_overview::constants::messages;
use health_overview::errors::{ErrorCode, StoreError};
use health_overview::flow::{PermissionFlow, PermissionFlowState};
use health_overview::models::{AuthorizationStatus, HealthScope};
use health_overview::store::memory::AuthorizationResponse;
use health_overview::store::InMemoryHealthStore;
use std::sync::Arc;

#[tokio::test]
async fn test_authorized_store_goes_straight_to_main() {
    let store = Arc::new(InMemoryHealthStore::authorized());
    let mut flow = PermissionFlow::new(manager_for(&store));

    assert_eq!(flow.check(), PermissionFlowState::Main);
    flow.manager().context().flush().await.unwrap();
    assert!(flow.manager().context().snapshot().has_all_permissions);
}

#[tokio::test]
async fn test_request_then_main() {
    let store = Arc::new(InMemoryHealthStore::new());
    let mut flow = PermissionFlow::new(manager_for(&store));

    assert_eq!(flow.check(), PermissionFlowState::RequestPermission);
    assert_eq!(flow.request().await.unwrap(), PermissionFlowState::Main);
}

#[tokio::test]
async fn test_partial_grant_lands_on_no_permission_then_retry() {
    let store = Arc::new(InMemoryHealthStore::new());
    store.set_authorization_response(AuthorizationResponse::GrantExcept(vec![
        HealthScope::DietaryProtein,
    ]));
    let mut flow = PermissionFlow::new(manager_for(&store));

    flow.check();
    assert_eq!(flow.request().await.unwrap(), PermissionFlowState::NoPermission);
    assert_eq!(flow.retry(), PermissionFlowState::RequestPermission);
}

#[tokio::test]
async fn test_failed_request_moves_to_no_permission() {
    let store = Arc::new(InMemoryHealthStore::new());
    store.set_authorization_response(AuthorizationResponse::Fail(StoreError::Other(
        "dialog dismissed".to_owned(),
    )));
    let mut flow = PermissionFlow::new(manager_for(&store));

    flow.check();
    let error = flow.request().await.unwrap_err();
    assert_eq!(error.code, ErrorCode::AuthorizationDenied);
    assert_eq!(flow.state(), PermissionFlowState::NoPermission);
}

#[tokio::test]
async fn test_granted_request_shows_success_after_loading() {
    let store = Arc::new(InMemoryHealthStore::new());
    let mut flow = PermissionFlow::new(manager_for(&store));
    let context = flow.manager().context().clone();
    flow.check();
    context.flush().await.unwrap();
    let mut changes = context.changes();

    assert_eq!(flow.request().await.unwrap(), PermissionFlowState::Main);
    context.flush().await.unwrap();

    let mut observed = Vec::new();
    while let Ok(change) = changes.try_recv() {
        observed.push(change.state);
    }
    assert!(observed.first().unwrap().is_loading);

    let state = context.snapshot();
    assert!(!state.is_loading);
    assert!(state.has_all_permissions);
    assert_eq!(state.error_message, None);
    assert_eq!(
        state.success_message.as_deref(),
        Some(messages::PERMISSIONS_GRANTED)
    );
}

#[tokio::test]
async fn test_incomplete_grant_shows_missing_permissions() {
    let store = Arc::new(InMemoryHealthStore::new());
    store.set_authorization_response(AuthorizationResponse::GrantExcept(vec![
        HealthScope::HeartRate,
    ]));
    let mut flow = PermissionFlow::new(manager_for(&store));
    flow.check();

    assert_eq!(flow.request().await.unwrap(), PermissionFlowState::NoPermission);
    let context = flow.manager().context();
    context.flush().await.unwrap();

    let state = context.snapshot();
    assert!(!state.is_loading);
    assert_eq!(state.success_message, None);
    assert_eq!(
        state.error_message.as_deref(),
        Some(messages::PERMISSIONS_INCOMPLETE)
    );
}

#[tokio::test]
async fn test_failed_request_shows_prefixed_error() {
    let store = Arc::new(InMemoryHealthStore::new());
    store.set_authorization_response(AuthorizationResponse::Fail(StoreError::Other(
        "dialog dismissed".to_owned(),
    )));
    let mut flow = PermissionFlow::new(manager_for(&store));
    flow.check();

    flow.request().await.unwrap_err();
    let context = flow.manager().context();
    context.flush().await.unwrap();

    let state = context.snapshot();
    assert!(!state.is_loading);
    assert_eq!(
        state.error_message.as_deref(),
        Some("Permission request failed: dialog dismissed")
    );
}

#[tokio::test]
async fn test_returning_from_settings_rechecks() {
    let store = Arc::new(InMemoryHealthStore::new());
    let mut flow = PermissionFlow::new(manager_for(&store));
    assert_eq!(flow.check(), PermissionFlowState::RequestPermission);

    // The user grants everything in system settings, then returns
    for scope in HealthScope::ALL {
        store.set_status(scope, AuthorizationStatus::SharingAuthorized);
    }
    assert_eq!(flow.app_became_active(), PermissionFlowState::Main);
}

#[tokio::test]
async fn test_returning_without_changes_asks_again() {
    let store = Arc::new(InMemoryHealthStore::new());
    let mut flow = PermissionFlow::new(manager_for(&store));
    flow.check();

    assert_eq!(
        flow.app_became_active(),
        PermissionFlowState::RequestPermission
    );
}

#[tokio::test]
async fn test_unavailable_store_asks_for_permission() {
    let store = Arc::new(InMemoryHealthStore::unavailable());
    let mut flow = PermissionFlow::new(manager_for(&store));

    assert_eq!(flow.check(), PermissionFlowState::RequestPermission);
    let error = flow.request().await.unwrap_err();
    assert_eq!(error.code, ErrorCode::HealthDataUnavailable);
    assert_eq!(flow.state(), PermissionFlowState::NoPermission);
}
