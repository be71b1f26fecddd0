//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the administration CLI.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Link Store: listing and lookup
//! - [`services::click_service::ClickService`] - Click Recorder and click analytics
//! - [`services::visitor_service::VisitorService`] - Visitor Recorder with daily dedup
//! - [`services::stats_service::StatsService`] - Stats Aggregator
//! - [`services::profile_service::ProfileService`] - Profile Provider

pub mod services;
