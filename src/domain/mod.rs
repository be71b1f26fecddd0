//! Domain layer containing business entities and logic.
//!
//! Defines the entities of the link-in-bio page, the statistics value types,
//! the calendar-day convention, and the repository interfaces implemented by
//! the infrastructure layer.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`calendar`] - Clock abstraction and the UTC calendar-day convention
//!
//! # Recording Flow
//!
//! 1. Every `/api` request passes the visitor interceptor, which records the
//!    caller as a [`entities::Visitor`] for the current UTC day (once per IP)
//! 2. `POST /api/links/{id}/click` verifies the link exists, then appends a
//!    [`entities::Click`] stamped with the current UTC day
//! 3. Statistics are aggregated on demand from links, clicks and visitors

pub mod calendar;
pub mod entities;
pub mod repositories;
