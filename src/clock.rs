// ABOUTME: Time source abstraction for query windows that depend on "now"
// ABOUTME: System clock for production, fixed clock for deterministic tests and demos
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};
use std::sync::{Arc, RwLock};

/// Source of the current instant
pub trait Clock: Send + Sync {
    /// Current instant
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a settable instant
#[derive(Debug, Clone)]
pub struct FixedClock {
    instant: Arc<RwLock<DateTime<Utc>>>,
}

impl FixedClock {
    /// Create a clock that always reports `instant`
    #[must_use]
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self {
            instant: Arc::new(RwLock::new(instant)),
        }
    }

    /// Move the clock to `instant`
    pub fn set(&self, instant: DateTime<Utc>) {
        if let Ok(mut guard) = self.instant.write() {
            *guard = instant;
        }
    }

    /// Move the clock forward by `by`
    pub fn advance(&self, by: Duration) {
        if let Ok(mut guard) = self.instant.write() {
            *guard += by;
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
            .read()
            .map_or_else(|poisoned| *poisoned.into_inner(), |guard| *guard)
    }
}

/// Midnight of the day containing `now` in `zone`, expressed in UTC
///
/// A repeated midnight resolves to its earlier instant. When a transition skips
/// midnight the day starts at the first local hour that exists.
#[must_use]
pub fn start_of_day<Tz: TimeZone>(now: DateTime<Utc>, zone: &Tz) -> DateTime<Utc> {
    let midnight = now.with_timezone(zone).date_naive().and_time(NaiveTime::MIN);
    (0..=2)
        .filter_map(|hours| midnight.checked_add_signed(Duration::hours(hours)))
        .find_map(|local| zone.from_local_datetime(&local).earliest())
        .map_or(now, |start| start.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Local};
    use serial_test::serial;
    use std::env;
    use std::thread;

    #[test]
    fn test_start_of_day_in_utc() {
        let now = Utc.with_ymd_and_hms(2025, 7, 15, 13, 45, 10).unwrap();
        let utc = FixedOffset::east_opt(0).unwrap();
        assert_eq!(
            start_of_day(now, &utc),
            Utc.with_ymd_and_hms(2025, 7, 15, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_start_of_day_respects_offset() {
        // 20:00 UTC on the 14th is already 05:00 on the 15th in UTC+9
        let now = Utc.with_ymd_and_hms(2025, 7, 14, 20, 0, 0).unwrap();
        let kst = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(
            start_of_day(now, &kst),
            Utc.with_ymd_and_hms(2025, 7, 14, 15, 0, 0).unwrap()
        );
    }

    #[test]
    #[serial]
    fn test_local_start_of_day_follows_daylight_saving() {
        // US Eastern rules; clocks jump from 02:00 EST to 03:00 EDT on 2025-03-09
        env::set_var("TZ", "EST5EDT,M3.2.0,M11.1.0");
        // 10:00 EDT, but local midnight that day was still EST (UTC-5)
        let now = Utc.with_ymd_and_hms(2025, 3, 9, 14, 0, 0).unwrap();
        // chrono caches the zone per thread, so resolve on a fresh one
        let start = thread::spawn(move || start_of_day(now, &Local))
            .join()
            .unwrap();
        env::remove_var("TZ");

        assert_eq!(start, Utc.with_ymd_and_hms(2025, 3, 9, 5, 0, 0).unwrap());
    }

    #[test]
    fn test_fixed_clock_advances() {
        let start = Utc.with_ymd_and_hms(2025, 7, 15, 8, 0, 0).unwrap();
        let clock = FixedClock::new(start);
        clock.advance(Duration::hours(2));
        assert_eq!(clock.now(), start + Duration::hours(2));
    }
}
