// ABOUTME: Permission commands for the health-overview CLI
// ABOUTME: Runs the permission check and the request flow against the demo store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::display::{display_flow_state, display_heading, display_screen_state};
use health_overview::errors::AppResult;
use health_overview::flow::{PermissionFlow, PermissionFlowState};
use health_overview::manager::HealthDataManager;
use tracing::info;

/// Poll every required scope without asking for access
pub async fn check(manager: HealthDataManager) -> AppResult<PermissionFlowState> {
    display_heading("Permission check");
    let mut flow = PermissionFlow::new(manager);
    let state = flow.check();
    flow.manager().context().flush().await?;

    display_flow_state(state);
    print_missing(flow.manager());
    Ok(state)
}

/// Run the permission flow until it settles
pub async fn authorize(manager: HealthDataManager) -> AppResult<PermissionFlowState> {
    display_heading("Permission request");
    let mut flow = PermissionFlow::new(manager);
    let mut state = flow.check();
    if state == PermissionFlowState::RequestPermission {
        info!("Requesting health data authorization");
        let outcome = flow.request().await;
        flow.manager().context().flush().await?;
        match outcome {
            Ok(next) => state = next,
            Err(error) => {
                display_flow_state(flow.state());
                println!("   ERROR {}", error.user_message());
                return Err(error);
            }
        }
    }
    flow.manager().context().flush().await?;

    display_flow_state(state);
    display_screen_state(&flow.manager().context().snapshot());
    print_missing(flow.manager());
    Ok(state)
}

fn print_missing(manager: &HealthDataManager) {
    if !manager.is_available() {
        println!("   Health data is not available on this device");
        return;
    }
    if let Some(scope) = manager.gate().first_missing_scope() {
        println!("   First missing scope: {scope}");
    }
}
