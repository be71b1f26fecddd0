//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod click;
pub mod health;
pub mod index;
pub mod links;
pub mod profile;
pub mod stats;

pub use click::click_handler;
pub use health::health_handler;
pub use index::api_index_handler;
pub use links::{link_handler, link_stats_handler, links_handler};
pub use profile::profile_handler;
pub use stats::{detailed_stats_handler, stats_handler};
