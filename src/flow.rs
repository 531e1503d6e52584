// ABOUTME: Permission flow state machine deciding which top-level view the app shows
// ABOUTME: Moves between checking, requesting, no-permission, and main views from permission events
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Permission Flow
//!
//! ```text
//! CheckingPermission --granted------------> Main
//! CheckingPermission --not granted--------> RequestPermission
//! RequestPermission  --granted------------> Main
//! RequestPermission  --denied / settings--> NoPermission
//! RequestPermission  --app became active--> CheckingPermission
//! NoPermission       --retry--------------> RequestPermission
//! ```
//!
//! `Main` is terminal. Events that have no edge from the current state leave it
//! unchanged.

use crate::errors::AppResult;
use crate::manager::HealthDataManager;
use crate::screens::{run_operation, Feedback};
use health_core::constants::messages;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Top-level view the application shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PermissionFlowState {
    /// Polling the store for the current permission state
    #[default]
    CheckingPermission,
    /// Asking the user to grant access
    RequestPermission,
    /// The user declined; explains how to grant access later
    NoPermission,
    /// Every permission granted; the health data views
    Main,
}

/// Something that happened while the flow was in a state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PermissionFlowEvent {
    /// A permission check finished
    CheckCompleted {
        /// Every required scope is authorized
        granted: bool,
    },
    /// An authorization request finished and was verified
    RequestCompleted {
        /// Every required scope is authorized
        granted: bool,
    },
    /// The user chose to change access in system settings
    OpenSettings,
    /// The user asked to see the permission request again
    Retry,
    /// The application returned to the foreground
    AppBecameActive,
}

impl PermissionFlowState {
    /// State after `event`
    #[must_use]
    pub const fn transition(self, event: PermissionFlowEvent) -> Self {
        use PermissionFlowEvent as Event;
        match (self, event) {
            (Self::CheckingPermission, Event::CheckCompleted { granted: true })
            | (Self::RequestPermission, Event::RequestCompleted { granted: true }) => Self::Main,
            (Self::CheckingPermission, Event::CheckCompleted { granted: false })
            | (Self::NoPermission, Event::Retry) => Self::RequestPermission,
            (Self::RequestPermission, Event::RequestCompleted { granted: false } | Event::OpenSettings) => {
                Self::NoPermission
            }
            (Self::RequestPermission, Event::AppBecameActive) => Self::CheckingPermission,
            (state, _) => state,
        }
    }

    /// Whether the health data views are shown
    #[must_use]
    pub const fn is_main(self) -> bool {
        matches!(self, Self::Main)
    }
}

/// Drives [`PermissionFlowState`] with a manager
#[derive(Debug)]
pub struct PermissionFlow {
    manager: HealthDataManager,
    state: PermissionFlowState,
}

impl PermissionFlow {
    /// Start in `CheckingPermission`
    #[must_use]
    pub const fn new(manager: HealthDataManager) -> Self {
        Self {
            manager,
            state: PermissionFlowState::CheckingPermission,
        }
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> PermissionFlowState {
        self.state
    }

    /// Manager whose context receives the permission state
    #[must_use]
    pub const fn manager(&self) -> &HealthDataManager {
        &self.manager
    }

    /// Apply one event and return the new state
    pub fn handle(&mut self, event: PermissionFlowEvent) -> PermissionFlowState {
        let next = self.state.transition(event);
        if next != self.state {
            debug!(from = ?self.state, to = ?next, ?event, "Permission flow transition");
        }
        self.state = next;
        next
    }

    /// Poll the store and move out of `CheckingPermission`
    pub fn check(&mut self) -> PermissionFlowState {
        let granted = self.manager.check_all_permissions();
        self.handle(PermissionFlowEvent::CheckCompleted { granted })
    }

    /// Request authorization from `RequestPermission` and verify the result
    ///
    /// Runs with the screen loading protocol. A verified grant shows a success
    /// message, a request that leaves scopes missing shows an error message, and
    /// a failed request counts as not granted.
    ///
    /// # Errors
    ///
    /// The request error is returned after the flow has moved to `NoPermission`.
    pub async fn request(&mut self) -> AppResult<PermissionFlowState> {
        let result = run_operation(
            &self.manager,
            "permission_request",
            messages::PERMISSION_FAILED_PREFIX,
            self.manager.request_and_verify(),
            |granted| {
                Some(if *granted {
                    Feedback::Success(messages::PERMISSIONS_GRANTED.to_owned())
                } else {
                    Feedback::Error(messages::PERMISSIONS_INCOMPLETE.to_owned())
                })
            },
        )
        .await;

        match result {
            Ok(granted) => Ok(self.handle(PermissionFlowEvent::RequestCompleted { granted })),
            Err(error) => {
                self.handle(PermissionFlowEvent::RequestCompleted { granted: false });
                Err(error)
            }
        }
    }

    /// The application returned to the foreground; re-check if asking for access
    pub fn app_became_active(&mut self) -> PermissionFlowState {
        let state = self.handle(PermissionFlowEvent::AppBecameActive);
        if state == PermissionFlowState::CheckingPermission {
            return self.check();
        }
        state
    }

    /// Go back to the request view from `NoPermission`
    pub fn retry(&mut self) -> PermissionFlowState {
        self.handle(PermissionFlowEvent::Retry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PermissionFlowEvent as Event;
    use PermissionFlowState as State;

    #[test]
    fn test_granted_check_goes_to_main() {
        let state = State::default().transition(Event::CheckCompleted { granted: true });
        assert_eq!(state, State::Main);
    }

    #[test]
    fn test_denied_request_then_retry() {
        let state = State::CheckingPermission
            .transition(Event::CheckCompleted { granted: false })
            .transition(Event::RequestCompleted { granted: false });
        assert_eq!(state, State::NoPermission);
        assert_eq!(state.transition(Event::Retry), State::RequestPermission);
    }

    #[test]
    fn test_open_settings_and_return() {
        let state = State::RequestPermission.transition(Event::OpenSettings);
        assert_eq!(state, State::NoPermission);
        assert_eq!(
            State::RequestPermission.transition(Event::AppBecameActive),
            State::CheckingPermission
        );
    }

    #[test]
    fn test_main_is_terminal() {
        for event in [
            Event::CheckCompleted { granted: false },
            Event::RequestCompleted { granted: false },
            Event::OpenSettings,
            Event::Retry,
            Event::AppBecameActive,
        ] {
            assert_eq!(State::Main.transition(event), State::Main);
        }
    }

    #[test]
    fn test_unrelated_events_are_ignored() {
        assert_eq!(State::NoPermission.transition(Event::AppBecameActive), State::NoPermission);
        assert_eq!(
            State::CheckingPermission.transition(Event::RequestCompleted { granted: true }),
            State::CheckingPermission
        );
    }
}
