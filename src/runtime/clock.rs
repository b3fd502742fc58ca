//! Fixed clock for reproducible execution.
//!
//! Every time query answered by Stasis reports the same instant. There is no
//! tick counter and no epoch offset: the clock never advances.

/// Seconds since the Unix epoch reported by every time stub.
pub const CURRENT_TIME: i64 = 1_466_335_969;

/// Sub-second part of the fixed instant, in microseconds.
pub const CURRENT_USEC: i64 = 455_745;

/// A point in time with microsecond resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    pub secs: i64,
    pub micros: i64,
}

impl Timestamp {
    /// Sub-second part in nanoseconds.
    pub const fn nanos(self) -> i64 {
        self.micros * 1_000
    }
}

/// Get the current time.
pub const fn now() -> Timestamp {
    Timestamp {
        secs: CURRENT_TIME,
        micros: CURRENT_USEC,
    }
}
