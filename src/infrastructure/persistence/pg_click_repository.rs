//! PostgreSQL implementation of click repository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Click, DailyClicks, NewClick, TopLink};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

/// PostgreSQL repository for the click log and click analytics.
pub struct PgClickRepository {
    pool: Arc<PgPool>,
}

impl PgClickRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ClickRow {
    id: i64,
    link_id: i64,
    ip_address: Option<String>,
    user_agent: String,
    clicked_at: DateTime<Utc>,
    date: NaiveDate,
}

#[derive(FromRow)]
struct TopLinkRow {
    id: i64,
    title: String,
    click_count: i64,
}

#[derive(FromRow)]
struct DailyClicksRow {
    date: NaiveDate,
    total_clicks: i64,
    unique_clicks: i64,
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    async fn record(&self, new_click: NewClick) -> Result<Click, AppError> {
        let row = sqlx::query_as::<_, ClickRow>(
            r#"
            INSERT INTO clicks (link_id, ip_address, user_agent, clicked_at, date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, link_id, ip_address, user_agent, clicked_at, date
            "#,
        )
        .bind(new_click.link_id)
        .bind(&new_click.ip_address)
        .bind(&new_click.user_agent)
        .bind(new_click.clicked_at)
        .bind(new_click.date)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(Click {
            id: row.id,
            link_id: row.link_id,
            ip_address: row.ip_address,
            user_agent: row.user_agent,
            clicked_at: row.clicked_at,
            date: row.date,
        })
    }

    async fn count_all(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clicks")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn count_on(&self, date: NaiveDate) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clicks WHERE date = $1")
            .bind(date)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn top_links(&self, limit: i64) -> Result<Vec<TopLink>, AppError> {
        let rows = sqlx::query_as::<_, TopLinkRow>(
            r#"
            SELECT
                l.id,
                l.title,
                COUNT(c.id) AS click_count
            FROM links l
            LEFT JOIN clicks c ON c.link_id = l.id
            GROUP BY l.id, l.title
            ORDER BY click_count DESC, l.id ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| TopLink {
                id: r.id,
                title: r.title,
                click_count: r.click_count,
            })
            .collect())
    }

    async fn daily_history(
        &self,
        link_id: Option<i64>,
        limit: i64,
    ) -> Result<Vec<DailyClicks>, AppError> {
        let rows = sqlx::query_as::<_, DailyClicksRow>(
            r#"
            SELECT
                date,
                COUNT(*) AS total_clicks,
                COUNT(DISTINCT ip_address) AS unique_clicks
            FROM clicks
            WHERE ($1::bigint IS NULL OR link_id = $1)
            GROUP BY date
            ORDER BY date DESC
            LIMIT $2
            "#,
        )
        .bind(link_id)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| DailyClicks {
                date: r.date,
                total_clicks: r.total_clicks,
                unique_clicks: r.unique_clicks,
            })
            .collect())
    }
}
