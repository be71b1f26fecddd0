//! Clock abstraction and the calendar-day convention.
//!
//! All daily bookkeeping (visitor deduplication, "today" counters, click
//! history grouping) uses the **UTC** calendar day, independent of the
//! server's local time zone.

use chrono::{DateTime, NaiveDate, Utc};

/// Number of distinct date groups returned by click history queries.
pub const HISTORY_GROUPS: i64 = 30;

/// Label reported alongside click history.
pub const HISTORY_PERIOD: &str = "30 days";

/// Default number of entries in the top links ranking.
pub const DEFAULT_TOP_LINKS: i64 = 5;

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Current UTC calendar day.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall clock in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a given instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
