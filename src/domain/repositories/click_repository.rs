//! Repository trait for click recording and click analytics.

use crate::domain::entities::{Click, DailyClicks, NewClick, TopLink};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Repository interface for the Click Recorder.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_click.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Appends one click row. No deduplication.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn record(&self, new_click: NewClick) -> Result<Click, AppError>;

    /// Counts all clicks ever recorded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_all(&self) -> Result<i64, AppError>;

    /// Counts clicks recorded on the given calendar day.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_on(&self, date: NaiveDate) -> Result<i64, AppError>;

    /// Ranks links by click count, descending, ties by link id ascending.
    ///
    /// Links without clicks are included with a count of zero.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn top_links(&self, limit: i64) -> Result<Vec<TopLink>, AppError>;

    /// Per-day click totals, newest first, capped at `limit` date groups.
    ///
    /// Scoped to one link when `link_id` is set, otherwise across all links.
    /// Only days that have clicks produce a row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn daily_history(
        &self,
        link_id: Option<i64>,
        limit: i64,
    ) -> Result<Vec<DailyClicks>, AppError>;
}
