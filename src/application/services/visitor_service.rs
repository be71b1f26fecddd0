//! Visitor Recorder service: daily visitor deduplication by IP.

use std::sync::Arc;

use crate::domain::calendar::Clock;
use crate::domain::entities::{NewVisitor, VisitOutcome};
use crate::domain::repositories::VisitorRepository;
use crate::error::AppError;

/// Service for recording and counting daily visitors.
pub struct VisitorService<V: VisitorRepository> {
    visitor_repository: Arc<V>,
    clock: Arc<dyn Clock>,
}

impl<V: VisitorRepository> VisitorService<V> {
    /// Creates a new visitor service.
    pub fn new(visitor_repository: Arc<V>, clock: Arc<dyn Clock>) -> Self {
        Self {
            visitor_repository,
            clock,
        }
    }

    /// Records a visit from `ip_address` for the current UTC day.
    ///
    /// The first visit of the day creates a row and reports `is_new: true`;
    /// later visits from the same IP on the same day write nothing and report
    /// `is_new: false`. Deduplication is an atomic insert-if-absent in the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn add_visitor(
        &self,
        ip_address: &str,
        user_agent: &str,
    ) -> Result<VisitOutcome, AppError> {
        let new_visitor = NewVisitor {
            ip_address: ip_address.to_string(),
            user_agent: user_agent.to_string(),
            date: self.clock.today(),
        };

        let inserted = self.visitor_repository.insert_if_absent(new_visitor).await?;

        if let Some(visitor) = &inserted {
            tracing::debug!(visitor_id = visitor.id, date = %visitor.date, "New visitor");
        }

        Ok(VisitOutcome {
            is_new: inserted.is_some(),
        })
    }

    /// Counts visitors recorded today (UTC).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn today_count(&self) -> Result<i64, AppError> {
        self.visitor_repository.count_on(self.clock.today()).await
    }

    /// Counts all visitor rows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn total_count(&self) -> Result<i64, AppError> {
        self.visitor_repository.count_all().await
    }
}
