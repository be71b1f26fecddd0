//! Business logic services for the application layer.

pub mod click_service;
pub mod link_service;
pub mod profile_service;
pub mod stats_service;
pub mod visitor_service;

pub use click_service::ClickService;
pub use link_service::LinkService;
pub use profile_service::ProfileService;
pub use stats_service::StatsService;
pub use visitor_service::VisitorService;
