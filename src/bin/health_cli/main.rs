// ABOUTME: health-overview CLI - runs the permission flow and data screens against a demo store
// ABOUTME: Seeds an in-memory health store and prints what each screen would show
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Poll the permission state without asking for access
//! health-overview check
//!
//! # Ask for access; pretend the user declines heart rate
//! health-overview --deny heart_rate authorize
//!
//! # Show each screen
//! health-overview height
//! health-overview activity
//! health-overview heart-rate
//!
//! # Record a meal
//! health-overview log-nutrition --calories 500 --protein 25
//!
//! # Everything at once
//! health-overview overview
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use health_overview::clock::{Clock, FixedClock, SystemClock};
use health_overview::config::HealthConfig;
use health_overview::errors::{AppError, AppResult};
use health_overview::flow::PermissionFlowState;
use health_overview::logging::LoggingConfig;
use health_overview::manager::HealthDataManager;
use health_overview::models::HealthScope;
use health_overview::store::memory::AuthorizationResponse;
use health_overview::store::{HealthStore, InMemoryHealthStore};
use std::sync::Arc;
use tracing::info;

use helpers::seed::seed_demo_data;

#[derive(Parser)]
#[command(
    name = "health-overview",
    about = "Health Overview demo CLI",
    long_about = "Runs the permission flow and health data screens against a seeded in-memory health store."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Simulate a device without health data
    #[arg(long, global = true)]
    unavailable: bool,

    /// Scope the simulated user declines (repeatable, e.g. heart_rate)
    #[arg(long = "deny", global = true, value_parser = parse_scope)]
    denied: Vec<HealthScope>,

    /// Start with an empty store
    #[arg(long, global = true)]
    no_seed: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Poll every required scope
    Check,

    /// Request access to every required scope
    Authorize,

    /// Show the latest height
    Height,

    /// Show today's steps and floors
    Activity,

    /// Show the trailing week of heart rate readings
    HeartRate,

    /// Record calories and protein
    LogNutrition {
        /// Kilocalories
        #[arg(long)]
        calories: String,

        /// Grams of protein
        #[arg(long)]
        protein: String,
    },

    /// Authorize, then show every data screen
    Overview,
}

fn parse_scope(value: &str) -> Result<HealthScope, String> {
    HealthScope::from_identifier(value).ok_or_else(|| {
        let known: Vec<&str> = HealthScope::ALL.iter().map(HealthScope::identifier).collect();
        format!("unknown scope '{value}', expected one of: {}", known.join(", "))
    })
}

#[tokio::main]
async fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        "debug".clone_into(&mut logging.level);
    }
    logging
        .init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {e}")))?;

    let config = HealthConfig::from_env()?;
    let now = SystemClock.now();
    let clock: Arc<dyn Clock> = Arc::new(FixedClock::new(now));

    let store = Arc::new(InMemoryHealthStore::new());
    store.set_available(!cli.unavailable);
    if !cli.denied.is_empty() {
        store.set_authorization_response(AuthorizationResponse::GrantExcept(cli.denied.clone()));
    }
    if !cli.no_seed {
        seed_demo_data(&store, now, config.start_of_day(now)?);
    }
    let store: Arc<dyn HealthStore> = store;
    info!(available = store.is_available(), "Demo health store ready");

    let manager = || HealthDataManager::with_clock(Arc::clone(&store), Arc::clone(&clock), config.clone());

    match cli.command {
        Command::Check => {
            commands::permissions::check(manager()).await?;
        }
        Command::Authorize => {
            commands::permissions::authorize(manager()).await?;
        }
        Command::Height => commands::data::height(manager()).await?,
        Command::Activity => commands::data::activity(manager()).await?,
        Command::HeartRate => commands::data::heart_rate(manager()).await?,
        Command::LogNutrition { calories, protein } => {
            commands::data::log_nutrition(manager(), &calories, &protein).await?;
        }
        Command::Overview => {
            let state = commands::permissions::authorize(manager()).await?;
            if state == PermissionFlowState::Main {
                commands::data::height(manager()).await?;
                commands::data::activity(manager()).await?;
                commands::data::heart_rate(manager()).await?;
            }
        }
    }

    Ok(())
}
