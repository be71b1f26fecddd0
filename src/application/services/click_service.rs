//! Click Recorder service: recording clicks and click analytics.

use std::sync::Arc;

use crate::domain::calendar::{Clock, HISTORY_GROUPS};
use crate::domain::entities::{Click, DailyClicks, NewClick, TopLink};
use crate::domain::repositories::{ClickRepository, LinkRepository};
use crate::error::AppError;
use serde_json::json;

/// Service for recording link clicks and querying click statistics.
///
/// The existence of the clicked link is checked explicitly before insert;
/// the `clicks` table carries no foreign key.
pub struct ClickService<C: ClickRepository, L: LinkRepository> {
    click_repository: Arc<C>,
    link_repository: Arc<L>,
    clock: Arc<dyn Clock>,
}

impl<C: ClickRepository, L: LinkRepository> ClickService<C, L> {
    /// Creates a new click service.
    pub fn new(click_repository: Arc<C>, link_repository: Arc<L>, clock: Arc<dyn Clock>) -> Self {
        Self {
            click_repository,
            link_repository,
            clock,
        }
    }

    /// Records one click on a link.
    ///
    /// Every call appends a row; there is no deduplication. The row is
    /// stamped with the current time and its UTC calendar day.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id; nothing is written.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn record_click(
        &self,
        link_id: i64,
        ip_address: Option<String>,
        user_agent: String,
    ) -> Result<Click, AppError> {
        if self.link_repository.find_by_id(link_id).await?.is_none() {
            return Err(AppError::not_found("Link not found"));
        }

        let new_click = NewClick::at(link_id, ip_address, user_agent, self.clock.now());
        let click = self.click_repository.record(new_click).await?;

        tracing::debug!(link_id, click_id = click.id, "Click recorded");
        Ok(click)
    }

    /// Counts all recorded clicks.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn total_clicks(&self) -> Result<i64, AppError> {
        self.click_repository.count_all().await
    }

    /// Counts clicks recorded today (UTC).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn today_clicks(&self) -> Result<i64, AppError> {
        self.click_repository.count_on(self.clock.today()).await
    }

    /// Returns up to `limit` links ranked by click count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `limit` is not positive.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn top_links(&self, limit: i64) -> Result<Vec<TopLink>, AppError> {
        if limit <= 0 {
            return Err(AppError::bad_request(
                "Limit must be greater than 0",
                json!({ "limit": limit }),
            ));
        }

        self.click_repository.top_links(limit).await
    }

    /// Returns per-day click counts for the most recent date groups.
    ///
    /// At most 30 rows, newest first. Days without clicks produce no row, so
    /// the result spans 30 dates with data rather than a 30-day calendar window.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn click_stats(&self, link_id: Option<i64>) -> Result<Vec<DailyClicks>, AppError> {
        self.click_repository
            .daily_history(link_id, HISTORY_GROUPS)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calendar::FixedClock;
    use crate::domain::entities::Link;
    use crate::domain::repositories::{MockClickRepository, MockLinkRepository};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn clock() -> Arc<dyn Clock> {
        Arc::new(FixedClock(
            Utc.with_ymd_and_hms(2025, 5, 20, 14, 0, 0).unwrap(),
        ))
    }

    fn link(id: i64) -> Link {
        Link::new(
            id,
            "Site".to_string(),
            String::new(),
            "https://example.com".to_string(),
            String::new(),
            1,
            true,
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_record_click_unknown_link_writes_nothing() {
        let mut links = MockLinkRepository::new();
        links.expect_find_by_id().returning(|_| Ok(None));

        let mut clicks = MockClickRepository::new();
        clicks.expect_record().times(0);

        let service = ClickService::new(Arc::new(clicks), Arc::new(links), clock());
        let result = service
            .record_click(404, Some("10.0.0.1".to_string()), String::new())
            .await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_record_click_stamps_current_day() {
        let mut links = MockLinkRepository::new();
        links.expect_find_by_id().returning(|id| Ok(Some(link(id))));

        let mut clicks = MockClickRepository::new();
        clicks
            .expect_record()
            .withf(|c| {
                c.link_id == 2
                    && c.date == NaiveDate::from_ymd_opt(2025, 5, 20).unwrap()
                    && c.ip_address.as_deref() == Some("10.0.0.1")
                    && c.user_agent == "Mozilla/5.0"
            })
            .times(1)
            .returning(|c| {
                Ok(Click {
                    id: 1,
                    link_id: c.link_id,
                    ip_address: c.ip_address,
                    user_agent: c.user_agent,
                    clicked_at: c.clicked_at,
                    date: c.date,
                })
            });

        let service = ClickService::new(Arc::new(clicks), Arc::new(links), clock());
        let click = service
            .record_click(2, Some("10.0.0.1".to_string()), "Mozilla/5.0".to_string())
            .await
            .unwrap();

        assert_eq!(click.link_id, 2);
    }

    #[tokio::test]
    async fn test_today_clicks_queries_current_day() {
        let mut clicks = MockClickRepository::new();
        clicks
            .expect_count_on()
            .withf(|d| *d == NaiveDate::from_ymd_opt(2025, 5, 20).unwrap())
            .times(1)
            .returning(|_| Ok(7));

        let service = ClickService::new(
            Arc::new(clicks),
            Arc::new(MockLinkRepository::new()),
            clock(),
        );

        assert_eq!(service.today_clicks().await.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_top_links_rejects_non_positive_limit() {
        let mut clicks = MockClickRepository::new();
        clicks.expect_top_links().times(0);

        let service = ClickService::new(
            Arc::new(clicks),
            Arc::new(MockLinkRepository::new()),
            clock(),
        );

        assert!(matches!(
            service.top_links(0).await,
            Err(AppError::Validation { .. })
        ));
    }

    #[tokio::test]
    async fn test_click_stats_caps_at_thirty_groups() {
        let mut clicks = MockClickRepository::new();
        clicks
            .expect_daily_history()
            .withf(|link_id, limit| *link_id == Some(3) && *limit == 30)
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let service = ClickService::new(
            Arc::new(clicks),
            Arc::new(MockLinkRepository::new()),
            clock(),
        );

        assert!(service.click_stats(Some(3)).await.unwrap().is_empty());
    }
}
