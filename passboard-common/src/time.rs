//! Timestamp utilities and the injectable clock

use chrono::{DateTime, Utc};

/// Get current UTC timestamp
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Source of "current time" for the engines
///
/// Production code uses [`SystemClock`]; tests pin time with [`FixedClock`]
/// so expiry-dependent rules (priority, SLA risk) are deterministic.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        now()
    }
}

/// Clock frozen at a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    at: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self { at }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.at
    }
}

/// Whole calendar days from `now` until `target` (UTC dates)
///
/// Negative when `target` falls on an earlier day. Times of day are ignored,
/// so 23:59 today and 00:01 tomorrow are one day apart.
pub fn calendar_days_until(target: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (target.date_naive() - now.date_naive()).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn test_now_returns_valid_timestamp() {
        let timestamp = now();
        // Should be a reasonable timestamp (after year 2000)
        assert!(timestamp.timestamp() > 946_684_800);
    }

    #[test]
    fn test_fixed_clock_does_not_advance() {
        let clock = FixedClock::new(at(2024, 12, 1, 9, 0));
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now(), at(2024, 12, 1, 9, 0));
    }

    #[test]
    fn test_calendar_days_ignores_time_of_day() {
        assert_eq!(calendar_days_until(at(2024, 12, 2, 0, 1), at(2024, 12, 1, 23, 59)), 1);
        assert_eq!(calendar_days_until(at(2024, 12, 1, 23, 59), at(2024, 12, 1, 0, 0)), 0);
    }

    #[test]
    fn test_calendar_days_negative_when_past() {
        assert_eq!(calendar_days_until(at(2025, 1, 25, 18, 0), at(2025, 2, 4, 8, 0)), -10);
    }

    #[test]
    fn test_calendar_days_across_year_boundary() {
        assert_eq!(calendar_days_until(at(2025, 1, 25, 18, 0), at(2024, 12, 1, 12, 0)), 55);
    }
}
