//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx. Queries are
//! checked at runtime and mapped through `FromRow` row structs.
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] - Link storage and retrieval
//! - [`PgClickRepository`] - Click log and click analytics queries
//! - [`PgVisitorRepository`] - Daily visitor ledger

pub mod pg_click_repository;
pub mod pg_link_repository;
pub mod pg_visitor_repository;

pub use pg_click_repository::PgClickRepository;
pub use pg_link_repository::PgLinkRepository;
pub use pg_visitor_repository::PgVisitorRepository;
