//! DTOs for summary, detailed and per-link statistics.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use crate::domain::entities::{DailyClicks, DetailedStats, StatsSummary, TopLink};

/// Response for `GET /api/stats`.
#[derive(Debug, Serialize)]
pub struct StatsSummaryResponse {
    pub total_links: i64,
    pub total_clicks: i64,
    pub visitors_today: i64,
    pub clicks_today: i64,
    pub updated_at: DateTime<Utc>,
}

impl From<StatsSummary> for StatsSummaryResponse {
    fn from(s: StatsSummary) -> Self {
        Self {
            total_links: s.total_links,
            total_clicks: s.total_clicks,
            visitors_today: s.visitors_today,
            clicks_today: s.clicks_today,
            updated_at: s.updated_at,
        }
    }
}

/// Query parameters for `GET /api/stats/detailed`.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct DetailedStatsQuery {
    /// Number of top links to return (default: 5).
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 1, max = 50, message = "Limit must be between 1 and 50"))]
    pub limit: Option<u32>,
}

/// Visitor counters.
#[derive(Debug, Serialize)]
pub struct VisitorCounts {
    pub today: i64,
    pub total: i64,
}

/// A ranked link.
#[derive(Debug, Serialize)]
pub struct TopLinkItem {
    pub id: i64,
    pub title: String,
    pub click_count: i64,
}

impl From<TopLink> for TopLinkItem {
    fn from(t: TopLink) -> Self {
        Self {
            id: t.id,
            title: t.title,
            click_count: t.click_count,
        }
    }
}

/// Click counts for one day.
#[derive(Debug, Serialize)]
pub struct DailyClicksItem {
    pub date: NaiveDate,
    pub total_clicks: i64,
    pub unique_clicks: i64,
}

impl From<DailyClicks> for DailyClicksItem {
    fn from(d: DailyClicks) -> Self {
        Self {
            date: d.date,
            total_clicks: d.total_clicks,
            unique_clicks: d.unique_clicks,
        }
    }
}

/// Response for `GET /api/stats/detailed`.
#[derive(Debug, Serialize)]
pub struct DetailedStatsResponse {
    pub visitors: VisitorCounts,
    pub top_links: Vec<TopLinkItem>,
    pub click_history: Vec<DailyClicksItem>,
    pub period: String,
}

impl From<DetailedStats> for DetailedStatsResponse {
    fn from(d: DetailedStats) -> Self {
        Self {
            visitors: VisitorCounts {
                today: d.visitors_today,
                total: d.visitors_total,
            },
            top_links: d.top_links.into_iter().map(Into::into).collect(),
            click_history: d.click_history.into_iter().map(Into::into).collect(),
            period: d.period.to_string(),
        }
    }
}

/// Response for `GET /api/links/{id}/stats`.
#[derive(Debug, Serialize)]
pub struct LinkStatsResponse {
    pub link_id: i64,
    pub title: String,
    pub click_history: Vec<DailyClicksItem>,
    pub period: String,
}
