//! HTTP middleware for request processing and protection.
//!
//! Provides visitor recording, error detail handling, CORS, rate limiting,
//! and observability middleware.

pub mod cors;
pub mod error_detail;
pub mod rate_limit;
pub mod tracing;
pub mod visitor;
