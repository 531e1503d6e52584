// ABOUTME: Deterministic demo data for the in-memory health store
// ABOUTME: Seeds height history, today's steps and floors, and a week of heart rate readings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Duration, Utc};
use health_overview::models::{HealthScope, HealthUnit, Quantity, QuantitySample, Sample};
use health_overview::store::InMemoryHealthStore;
use std::f64::consts::TAU;
use tracing::info;

/// Readings per day in the heart rate history
const HEART_RATE_READINGS_PER_DAY: i64 = 12;

/// Fill `store` with a plausible day of data ending at `now`
///
/// `midnight` is the start of the local day containing `now`.
pub fn seed_demo_data(store: &InMemoryHealthStore, now: DateTime<Utc>, midnight: DateTime<Utc>) {
    let mut samples = Vec::new();
    samples.extend(height_history(now));
    samples.extend(activity_since_midnight(now, midnight));
    samples.extend(heart_rate_week(now));

    let count = samples.len();
    store.add_samples(samples);
    info!(samples = count, "Seeded demo health data");
}

fn height_history(now: DateTime<Utc>) -> Vec<Sample> {
    [(90, 1.748), (30, 1.752), (3, 1.755)]
        .into_iter()
        .map(|(days_ago, meters)| {
            QuantitySample::at(
                HealthScope::Height,
                Quantity::new(meters, HealthUnit::Meter),
                now - Duration::days(days_ago),
            )
            .into()
        })
        .collect()
}

fn activity_since_midnight(now: DateTime<Utc>, midnight: DateTime<Utc>) -> Vec<Sample> {
    let mut samples = Vec::new();

    // Yesterday's evening walk falls outside today's window
    samples.push(
        QuantitySample::new(
            HealthScope::StepCount,
            Quantity::new(3_200.0, HealthUnit::Count),
            midnight - Duration::hours(2),
            midnight - Duration::hours(1),
        )
        .into(),
    );

    let mut hour_start = midnight;
    let mut hour: i64 = 0;
    while hour_start + Duration::hours(1) <= now {
        let hour_end = hour_start + Duration::hours(1);
        // Quiet overnight, busier during the day
        let steps = if (7..22).contains(&hour) {
            350.0 + ((hour * 137) % 600) as f64
        } else {
            0.0
        };
        if steps > 0.0 {
            samples.push(
                QuantitySample::new(
                    HealthScope::StepCount,
                    Quantity::new(steps, HealthUnit::Count),
                    hour_start,
                    hour_end,
                )
                .into(),
            );
        }
        if (8..21).contains(&hour) && hour % 3 == 0 {
            samples.push(
                QuantitySample::new(
                    HealthScope::FlightsClimbed,
                    Quantity::new(2.0, HealthUnit::Count),
                    hour_start,
                    hour_end,
                )
                .into(),
            );
        }
        hour_start = hour_end;
        hour += 1;
    }
    samples
}

fn heart_rate_week(now: DateTime<Utc>) -> Vec<Sample> {
    let spacing = Duration::hours(24 / HEART_RATE_READINGS_PER_DAY);
    let readings = 7 * HEART_RATE_READINGS_PER_DAY;

    (1..=readings)
        .map(|index| {
            let at = now - spacing * i32::try_from(index).unwrap_or(i32::MAX);
            let phase = (index % HEART_RATE_READINGS_PER_DAY) as f64
                / HEART_RATE_READINGS_PER_DAY as f64;
            let wave = 12.0_f64.mul_add((phase * TAU).sin(), 72.0);
            let bpm = ((index % 5) as f64).mul_add(1.5, wave);
            QuantitySample::at(
                HealthScope::HeartRate,
                Quantity::new(bpm.round(), HealthUnit::CountPerMinute),
                at,
            )
            .into()
        })
        .collect()
}
