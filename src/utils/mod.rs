//! Utility functions for request handling.
//!
//! - [`client_info`] - Client IP and user agent resolution
//! - [`link_id`] - Link id validation for path parameters

pub mod client_info;
pub mod link_id;
