//! Visitor entity: one deduplicated (IP, day) presence record.

use chrono::NaiveDate;

/// A visitor recorded for a UTC calendar day.
///
/// At most one row exists per `(ip_address, date)`.
#[derive(Debug, Clone)]
pub struct Visitor {
    pub id: i64,
    pub ip_address: String,
    pub user_agent: String,
    pub date: NaiveDate,
}

/// Input data for recording a visitor.
#[derive(Debug, Clone, PartialEq)]
pub struct NewVisitor {
    pub ip_address: String,
    pub user_agent: String,
    pub date: NaiveDate,
}

/// Result of recording a visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisitOutcome {
    /// `true` when this was the first visit from the IP on that day.
    pub is_new: bool,
}
