//! Repository trait for daily visitor deduplication.

use crate::domain::entities::{NewVisitor, Visitor};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Repository interface for the Visitor Recorder.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgVisitorRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_visitor.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitorRepository: Send + Sync {
    /// Inserts the visitor unless one already exists for `(date, ip_address)`.
    ///
    /// The check and the insert are a single atomic statement, so concurrent
    /// calls for the same IP and day create at most one row.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Visitor))` if a row was created
    /// - `Ok(None)` if the visitor was already recorded for that day
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert_if_absent(&self, new_visitor: NewVisitor)
    -> Result<Option<Visitor>, AppError>;

    /// Counts visitors recorded on the given calendar day.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_on(&self, date: NaiveDate) -> Result<i64, AppError>;

    /// Counts all visitor rows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_all(&self) -> Result<i64, AppError>;
}
