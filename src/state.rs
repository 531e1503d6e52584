// ABOUTME: Per-screen observable state owned by a dedicated presentation task
// ABOUTME: Mutations are queued from any task and applied in FIFO order, then published to observers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Presentation State
//!
//! Store callbacks may complete on any task. Observers of a screen must only ever
//! see state changed from one place, in the order the changes were requested.
//! [`PresentationContext`] makes that explicit: it spawns one task that owns the
//! [`ScreenState`], and every mutation is sent to that task over an unbounded
//! queue.
//!
//! Observers have two views:
//!
//! - [`PresentationContext::subscribe`] returns a `watch` receiver holding the
//!   latest snapshot.
//! - [`PresentationContext::changes`] returns a `broadcast` receiver with one
//!   [`StateChange`] per applied mutation, numbered in application order.
//!
//! [`PresentationContext::flush`] resolves once every mutation dispatched before
//! it has been applied.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, mpsc, oneshot, watch};
use tracing::{trace, warn};

/// Capacity of the change event channel; slow subscribers skip older events
const CHANGE_CHANNEL_CAPACITY: usize = 256;

/// Snapshot of one screen's observable state
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScreenState {
    /// An operation is running
    pub is_loading: bool,
    /// Last failure shown to the user
    pub error_message: Option<String>,
    /// Last success shown to the user
    pub success_message: Option<String>,
    /// Every required health scope is authorized
    pub has_all_permissions: bool,
}

/// One state change as applied by the presentation task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateChange {
    /// Position of this change in application order, starting at 1
    pub sequence: u64,
    /// State after the change
    pub state: ScreenState,
}

#[derive(Debug)]
enum Mutation {
    SetLoading(bool),
    SetError(Option<String>),
    SetSuccess(Option<String>),
    ClearMessages,
    SetHasAllPermissions(bool),
    Flush(oneshot::Sender<()>),
}

impl Mutation {
    fn apply(self, state: &mut ScreenState) -> Option<oneshot::Sender<()>> {
        match self {
            Self::SetLoading(loading) => state.is_loading = loading,
            Self::SetError(message) => state.error_message = message,
            Self::SetSuccess(message) => state.success_message = message,
            Self::ClearMessages => {
                state.error_message = None;
                state.success_message = None;
            }
            Self::SetHasAllPermissions(granted) => state.has_all_permissions = granted,
            Self::Flush(ack) => return Some(ack),
        }
        None
    }
}

/// Handle to a screen's presentation task
///
/// Cloning the handle shares the same task and state. The task stops when the
/// last handle is dropped.
#[derive(Debug, Clone)]
pub struct PresentationContext {
    mutations: mpsc::UnboundedSender<Mutation>,
    snapshots: watch::Receiver<ScreenState>,
    changes: broadcast::Sender<StateChange>,
}

impl PresentationContext {
    /// Spawn the presentation task with a default state
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    #[must_use]
    pub fn new() -> Self {
        Self::with_state(ScreenState::default())
    }

    /// Spawn the presentation task with an initial state
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    #[must_use]
    pub fn with_state(initial: ScreenState) -> Self {
        let (mutations, receiver) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshots) = watch::channel(initial.clone());
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);

        tokio::spawn(run(initial, receiver, snapshot_tx, changes.clone()));

        Self {
            mutations,
            snapshots,
            changes,
        }
    }

    /// Set or clear the loading flag
    pub fn set_loading(&self, loading: bool) {
        self.dispatch(Mutation::SetLoading(loading));
    }

    /// Show an error message
    pub fn set_error(&self, message: impl Into<String>) {
        self.dispatch(Mutation::SetError(Some(message.into())));
    }

    /// Show a success message
    pub fn set_success(&self, message: impl Into<String>) {
        self.dispatch(Mutation::SetSuccess(Some(message.into())));
    }

    /// Remove both the error and the success message
    pub fn clear_messages(&self) {
        self.dispatch(Mutation::ClearMessages);
    }

    /// Publish the aggregate permission state
    pub fn set_has_all_permissions(&self, granted: bool) {
        self.dispatch(Mutation::SetHasAllPermissions(granted));
    }

    /// Latest applied state
    #[must_use]
    pub fn snapshot(&self) -> ScreenState {
        self.snapshots.borrow().clone()
    }

    /// Receiver that always holds the latest applied state
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ScreenState> {
        self.snapshots.clone()
    }

    /// Receiver of every change applied after this call
    #[must_use]
    pub fn changes(&self) -> broadcast::Receiver<StateChange> {
        self.changes.subscribe()
    }

    /// Wait until every mutation dispatched before this call has been applied
    ///
    /// # Errors
    ///
    /// Returns `InternalError` if the presentation task is gone.
    pub async fn flush(&self) -> AppResult<()> {
        let (ack, done) = oneshot::channel();
        self.mutations
            .send(Mutation::Flush(ack))
            .map_err(|_| AppError::internal("Presentation context has stopped"))?;
        done.await
            .map_err(|_| AppError::internal("Presentation context stopped before flushing"))
    }

    fn dispatch(&self, mutation: Mutation) {
        if let Err(error) = self.mutations.send(mutation) {
            warn!(mutation = ?error.0, "Dropped state mutation: presentation context has stopped");
        }
    }
}

impl Default for PresentationContext {
    fn default() -> Self {
        Self::new()
    }
}

async fn run(
    mut state: ScreenState,
    mut mutations: mpsc::UnboundedReceiver<Mutation>,
    snapshots: watch::Sender<ScreenState>,
    changes: broadcast::Sender<StateChange>,
) {
    let mut sequence = 0_u64;
    while let Some(mutation) = mutations.recv().await {
        if let Some(ack) = mutation.apply(&mut state) {
            // Receiver may have given up waiting
            let _ = ack.send(());
            continue;
        }
        sequence += 1;
        trace!(sequence, ?state, "Applied state mutation");
        snapshots.send_replace(state.clone());
        // No subscribers is fine
        let _ = changes.send(StateChange {
            sequence,
            state: state.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_flush_applies_pending_mutations() {
        let context = PresentationContext::new();
        context.set_loading(true);
        context.set_error("boom");
        context.flush().await.unwrap();

        let state = context.snapshot();
        assert!(state.is_loading);
        assert_eq!(state.error_message.as_deref(), Some("boom"));
    }

    #[tokio::test]
    async fn test_clear_messages_removes_both() {
        let context = PresentationContext::new();
        context.set_error("bad");
        context.set_success("good");
        context.clear_messages();
        context.flush().await.unwrap();

        let state = context.snapshot();
        assert!(state.error_message.is_none());
        assert!(state.success_message.is_none());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let context = PresentationContext::new();
        let other = context.clone();
        other.set_has_all_permissions(true);
        other.flush().await.unwrap();
        assert!(context.snapshot().has_all_permissions);
    }
}
