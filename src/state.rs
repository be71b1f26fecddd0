//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{
    ClickService, LinkService, ProfileService, StatsService, VisitorService,
};
use crate::domain::calendar::Clock;
use crate::infrastructure::persistence::{
    PgClickRepository, PgLinkRepository, PgVisitorRepository,
};

pub type AppLinkService = LinkService<PgLinkRepository>;
pub type AppClickService = ClickService<PgClickRepository, PgLinkRepository>;
pub type AppVisitorService = VisitorService<PgVisitorRepository>;
pub type AppStatsService = StatsService<PgLinkRepository, PgClickRepository, PgVisitorRepository>;

/// Services and request-handling settings shared across handlers.
///
/// Cloning is cheap: services are reference-counted and stateless apart from
/// the connection pool they hold.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<AppLinkService>,
    pub click_service: Arc<AppClickService>,
    pub visitor_service: Arc<AppVisitorService>,
    pub stats_service: Arc<AppStatsService>,
    pub profile_service: Arc<ProfileService>,
    /// Read client IPs from proxy headers.
    pub behind_proxy: bool,
    /// Attach internal error detail to 500 responses.
    pub expose_error_details: bool,
}

impl AppState {
    /// Wires repositories and services over a single connection pool.
    pub fn new(pool: Arc<PgPool>, clock: Arc<dyn Clock>, profile_service: ProfileService) -> Self {
        let link_repository = Arc::new(PgLinkRepository::new(pool.clone()));
        let click_repository = Arc::new(PgClickRepository::new(pool.clone()));
        let visitor_repository = Arc::new(PgVisitorRepository::new(pool));

        let link_service = Arc::new(LinkService::new(link_repository.clone()));
        let click_service = Arc::new(ClickService::new(
            click_repository,
            link_repository,
            clock.clone(),
        ));
        let visitor_service = Arc::new(VisitorService::new(visitor_repository, clock.clone()));
        let stats_service = Arc::new(StatsService::new(
            link_service.clone(),
            click_service.clone(),
            visitor_service.clone(),
            clock,
        ));

        Self {
            link_service,
            click_service,
            visitor_service,
            stats_service,
            profile_service: Arc::new(profile_service),
            behind_proxy: false,
            expose_error_details: false,
        }
    }

    /// Sets whether client IPs are read from proxy headers.
    pub fn with_behind_proxy(mut self, behind_proxy: bool) -> Self {
        self.behind_proxy = behind_proxy;
        self
    }

    /// Sets whether internal error detail reaches callers.
    pub fn with_error_details(mut self, expose: bool) -> Self {
        self.expose_error_details = expose;
        self
    }
}
