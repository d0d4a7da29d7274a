//! Time sources
//!
//! Valuation depends on "now". Domain code never samples the system clock
//! directly; it asks a [`Clock`], so tests and replays can pin the instant.

use chrono::{DateTime, NaiveDate, Utc};

use crate::temporal::start_of_day;

/// A source of the current instant
pub trait Clock: Send + Sync {
    /// Returns the current instant
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time from the operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a single instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// Creates a clock frozen at midnight UTC on the given date
    pub fn at_date(date: NaiveDate) -> Self {
        Self::new(start_of_day(date))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}
