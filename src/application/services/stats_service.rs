//! Stats Aggregator service composing links, clicks and visitors.

use std::sync::Arc;

use crate::application::services::{ClickService, LinkService, VisitorService};
use crate::domain::calendar::{Clock, DEFAULT_TOP_LINKS, HISTORY_PERIOD};
use crate::domain::entities::{DetailedStats, StatsSummary};
use crate::domain::repositories::{ClickRepository, LinkRepository, VisitorRepository};
use crate::error::AppError;

/// Service building summary and detailed statistics.
///
/// Sub-queries run concurrently and each reflects its own query time; the
/// composed result is suitable for display, not for auditing.
pub struct StatsService<L, C, V>
where
    L: LinkRepository,
    C: ClickRepository,
    V: VisitorRepository,
{
    links: Arc<LinkService<L>>,
    clicks: Arc<ClickService<C, L>>,
    visitors: Arc<VisitorService<V>>,
    clock: Arc<dyn Clock>,
}

impl<L, C, V> StatsService<L, C, V>
where
    L: LinkRepository,
    C: ClickRepository,
    V: VisitorRepository,
{
    /// Creates a new statistics service.
    pub fn new(
        links: Arc<LinkService<L>>,
        clicks: Arc<ClickService<C, L>>,
        visitors: Arc<VisitorService<V>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            links,
            clicks,
            visitors,
            clock,
        }
    }

    /// Headline counters: active links, clicks overall and today, visitors today.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if any sub-query fails.
    pub async fn summary(&self) -> Result<StatsSummary, AppError> {
        let (total_links, total_clicks, visitors_today, clicks_today) = tokio::try_join!(
            self.links.count_active(),
            self.clicks.total_clicks(),
            self.visitors.today_count(),
            self.clicks.today_clicks(),
        )?;

        Ok(StatsSummary {
            total_links,
            total_clicks,
            visitors_today,
            clicks_today,
            updated_at: self.clock.now(),
        })
    }

    /// Visitor counts, top links and the 30-group click history.
    ///
    /// `top_limit` defaults to 5.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `top_limit` is not positive.
    /// Returns [`AppError::Internal`] if any sub-query fails.
    pub async fn detailed(&self, top_limit: Option<i64>) -> Result<DetailedStats, AppError> {
        let limit = top_limit.unwrap_or(DEFAULT_TOP_LINKS);

        let (visitors_today, visitors_total, top_links, click_history) = tokio::try_join!(
            self.visitors.today_count(),
            self.visitors.total_count(),
            self.clicks.top_links(limit),
            self.clicks.click_stats(None),
        )?;

        Ok(DetailedStats {
            visitors_today,
            visitors_total,
            top_links,
            click_history,
            period: HISTORY_PERIOD,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calendar::FixedClock;
    use crate::domain::entities::{DailyClicks, TopLink};
    use crate::domain::repositories::{
        MockClickRepository, MockLinkRepository, MockVisitorRepository,
    };
    use chrono::{NaiveDate, TimeZone, Utc};

    type TestStats = StatsService<MockLinkRepository, MockClickRepository, MockVisitorRepository>;

    fn build(
        links: MockLinkRepository,
        clicks: MockClickRepository,
        visitors: MockVisitorRepository,
    ) -> TestStats {
        let clock: Arc<dyn Clock> =
            Arc::new(FixedClock(Utc.with_ymd_and_hms(2025, 4, 2, 12, 0, 0).unwrap()));
        let links = Arc::new(links);

        StatsService::new(
            Arc::new(LinkService::new(links.clone())),
            Arc::new(ClickService::new(Arc::new(clicks), links, clock.clone())),
            Arc::new(VisitorService::new(Arc::new(visitors), clock.clone())),
            clock,
        )
    }

    #[tokio::test]
    async fn test_summary_composes_counts() {
        let mut links = MockLinkRepository::new();
        links.expect_count_active().returning(|| Ok(3));

        let mut clicks = MockClickRepository::new();
        clicks.expect_count_all().returning(|| Ok(4));
        clicks.expect_count_on().returning(|_| Ok(1));

        let mut visitors = MockVisitorRepository::new();
        visitors.expect_count_on().returning(|_| Ok(2));

        let service = build(links, clicks, visitors);
        let summary = service.summary().await.unwrap();

        assert_eq!(summary.total_links, 3);
        assert_eq!(summary.total_clicks, 4);
        assert_eq!(summary.visitors_today, 2);
        assert_eq!(summary.clicks_today, 1);
        assert_eq!(
            summary.updated_at,
            Utc.with_ymd_and_hms(2025, 4, 2, 12, 0, 0).unwrap()
        );
    }

    #[tokio::test]
    async fn test_summary_fails_when_any_part_fails() {
        let mut links = MockLinkRepository::new();
        links.expect_count_active().returning(|| Ok(3));

        let mut clicks = MockClickRepository::new();
        clicks
            .expect_count_all()
            .returning(|| Err(AppError::internal("timeout")));
        clicks.expect_count_on().returning(|_| Ok(1));

        let mut visitors = MockVisitorRepository::new();
        visitors.expect_count_on().returning(|_| Ok(2));

        let service = build(links, clicks, visitors);

        assert!(matches!(
            service.summary().await,
            Err(AppError::Internal { .. })
        ));
    }

    #[tokio::test]
    async fn test_detailed_uses_default_limit_and_global_history() {
        let mut clicks = MockClickRepository::new();
        clicks
            .expect_top_links()
            .withf(|limit| *limit == 5)
            .returning(|_| {
                Ok(vec![TopLink {
                    id: 2,
                    title: "Instagram".to_string(),
                    click_count: 3,
                }])
            });
        clicks
            .expect_daily_history()
            .withf(|link_id, limit| link_id.is_none() && *limit == 30)
            .returning(|_, _| {
                Ok(vec![DailyClicks {
                    date: NaiveDate::from_ymd_opt(2025, 4, 2).unwrap(),
                    total_clicks: 3,
                    unique_clicks: 1,
                }])
            });

        let mut visitors = MockVisitorRepository::new();
        visitors.expect_count_on().returning(|_| Ok(1));
        visitors.expect_count_all().returning(|| Ok(9));

        let service = build(MockLinkRepository::new(), clicks, visitors);
        let detailed = service.detailed(None).await.unwrap();

        assert_eq!(detailed.visitors_today, 1);
        assert_eq!(detailed.visitors_total, 9);
        assert_eq!(detailed.top_links.len(), 1);
        assert_eq!(detailed.click_history.len(), 1);
        assert_eq!(detailed.period, "30 days");
    }
}
