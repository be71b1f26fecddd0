//! Aggregated statistics value types.

use chrono::{DateTime, NaiveDate, Utc};

/// A link ranked by its total click count.
#[derive(Debug, Clone, PartialEq)]
pub struct TopLink {
    pub id: i64,
    pub title: String,
    pub click_count: i64,
}

/// Click counts for one calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyClicks {
    pub date: NaiveDate,
    pub total_clicks: i64,
    /// Number of distinct IP addresses that clicked on that day.
    pub unique_clicks: i64,
}

/// Headline counters shown on the profile page.
///
/// Each counter comes from its own query; the set is not a transactional
/// snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSummary {
    pub total_links: i64,
    pub total_clicks: i64,
    pub visitors_today: i64,
    pub clicks_today: i64,
    pub updated_at: DateTime<Utc>,
}

/// Visitor ranking, top links and click history.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailedStats {
    pub visitors_today: i64,
    pub visitors_total: i64,
    pub top_links: Vec<TopLink>,
    pub click_history: Vec<DailyClicks>,
    pub period: &'static str,
}
