//! PostgreSQL implementation of visitor repository.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewVisitor, Visitor};
use crate::domain::repositories::VisitorRepository;
use crate::error::AppError;

/// PostgreSQL repository for the daily visitor ledger.
///
/// Deduplication relies on the `visitors_date_ip_key` unique constraint.
pub struct PgVisitorRepository {
    pool: Arc<PgPool>,
}

impl PgVisitorRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct VisitorRow {
    id: i64,
    ip_address: String,
    user_agent: String,
    date: NaiveDate,
}

#[async_trait]
impl VisitorRepository for PgVisitorRepository {
    async fn insert_if_absent(
        &self,
        new_visitor: NewVisitor,
    ) -> Result<Option<Visitor>, AppError> {
        let row = sqlx::query_as::<_, VisitorRow>(
            r#"
            INSERT INTO visitors (ip_address, user_agent, date)
            VALUES ($1, $2, $3)
            ON CONFLICT (date, ip_address) DO NOTHING
            RETURNING id, ip_address, user_agent, date
            "#,
        )
        .bind(&new_visitor.ip_address)
        .bind(&new_visitor.user_agent)
        .bind(new_visitor.date)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|r| Visitor {
            id: r.id,
            ip_address: r.ip_address,
            user_agent: r.user_agent,
            date: r.date,
        }))
    }

    async fn count_on(&self, date: NaiveDate) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM visitors WHERE date = $1")
            .bind(date)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn count_all(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM visitors")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
