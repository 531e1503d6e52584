// ABOUTME: Integration tests for per-screen presentation state
// ABOUTME: Verifies FIFO application of mutations dispatched from other tasks and observer delivery
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use health_overview::state::{PresentationContext, ScreenState};

#[tokio::test]
async fn test_changes_arrive_in_dispatch_order() {
    let context = PresentationContext::new();
    let mut changes = context.changes();

    // Dispatch from another task, as a store completion would
    let worker = context.clone();
    tokio::spawn(async move {
        worker.set_loading(true);
        worker.clear_messages();
        worker.set_loading(false);
        worker.set_error("Failed to load data: locked");
    })
    .await
    .unwrap();
    context.flush().await.unwrap();

    let mut observed = Vec::new();
    for _ in 0..4 {
        observed.push(changes.recv().await.unwrap());
    }

    let sequences: Vec<u64> = observed.iter().map(|change| change.sequence).collect();
    assert_eq!(sequences, vec![1, 2, 3, 4]);
    assert!(observed[0].state.is_loading);
    assert!(observed[1].state.is_loading);
    assert!(!observed[2].state.is_loading);
    assert_eq!(
        observed[3].state.error_message.as_deref(),
        Some("Failed to load data: locked")
    );
}

#[tokio::test]
async fn test_watch_subscribers_see_latest_state() {
    let context = PresentationContext::new();
    let mut receiver = context.subscribe();

    context.set_success("Saved");
    receiver.changed().await.unwrap();

    assert_eq!(
        receiver.borrow().success_message.as_deref(),
        Some("Saved")
    );
}

#[tokio::test]
async fn test_last_writer_wins() {
    let context = PresentationContext::new();
    context.set_success("first");
    context.set_success("second");
    context.flush().await.unwrap();

    assert_eq!(context.snapshot().success_message.as_deref(), Some("second"));
}

#[tokio::test]
async fn test_initial_state_is_visible_immediately() {
    let initial = ScreenState {
        has_all_permissions: true,
        ..ScreenState::default()
    };
    let context = PresentationContext::with_state(initial.clone());
    assert_eq!(context.snapshot(), initial);
}

#[tokio::test]
async fn test_mutations_from_many_tasks_are_all_applied() {
    let context = PresentationContext::new();
    let mut changes = context.changes();

    let mut handles = Vec::new();
    for index in 0..16 {
        let worker = context.clone();
        handles.push(tokio::spawn(async move {
            worker.set_success(format!("task {index}"));
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }
    context.flush().await.unwrap();

    let mut last_sequence = 0;
    for _ in 0..16 {
        let change = changes.recv().await.unwrap();
        assert_eq!(change.sequence, last_sequence + 1);
        last_sequence = change.sequence;
    }
    assert_eq!(last_sequence, 16);
}
