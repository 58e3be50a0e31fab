//! Time keeping module for PineTime

use chrono::{DateTime, Duration as ChronoDuration, NaiveDateTime};
use embassy_time::Instant;

pub struct TimeReference {
    /// Local clock time
    time: NaiveDateTime,
    /// Related system time
    instant: Instant,
}

impl TimeReference {
    /// Create new time reference from a UTC epoch and a timezone offset
    pub fn from_epoch(utc_epoch: i64, timezone: i32) -> Self {
        let time = DateTime::from_timestamp(utc_epoch + timezone as i64, 0)
            .map(|time| time.naive_utc())
            .unwrap_or_default();

        Self {
            time,
            instant: Instant::now(),
        }
    }
}

pub struct TimeManager {
    reference: TimeReference,
}

impl TimeManager {
    /// Initialize time measurement on boot
    pub fn init(utc_epoch: i64, timezone: i32) -> Self {
        Self {
            reference: TimeReference::from_epoch(utc_epoch, timezone),
        }
    }

    /// Get current local time
    pub fn get_time(&self) -> NaiveDateTime {
        let elapsed = Instant::now().duration_since(self.reference.instant);
        self.reference
            .time
            .checked_add_signed(ChronoDuration::microseconds(elapsed.as_micros() as i64))
            .unwrap_or(self.reference.time)
    }
}
