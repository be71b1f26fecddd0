//! Profile page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::domain::entities::{Link, Profile, SocialLink, StatsSummary};
use crate::state::AppState;
use crate::web::handlers::PageError;

/// A link as rendered on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkCard {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub url: String,
    pub icon: String,
}

impl From<Link> for LinkCard {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            title: link.title,
            description: link.description,
            url: link.url,
            icon: link.icon,
        }
    }
}

/// Template for the public profile page.
///
/// Renders `templates/profile.html`. Built fresh for every request, so
/// concurrent requests never share page data.
#[derive(Template, WebTemplate)]
#[template(path = "profile.html")]
pub struct ProfilePageTemplate {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub avatar_url: String,
    pub social_links: Vec<SocialLink>,
    pub links: Vec<LinkCard>,
    pub total_clicks: i64,
    pub visitors_today: i64,
}

impl ProfilePageTemplate {
    pub fn new(profile: &Profile, links: Vec<Link>, summary: &StatsSummary) -> Self {
        Self {
            name: profile.name.clone(),
            title: profile.title.clone(),
            bio: profile.bio.clone(),
            avatar_url: profile.avatar_url.clone(),
            social_links: profile.social_links.clone(),
            links: links.into_iter().map(LinkCard::from).collect(),
            total_clicks: summary.total_clicks,
            visitors_today: summary.visitors_today,
        }
    }
}

/// Renders the profile page.
///
/// # Endpoint
///
/// `GET /`
///
/// Link cards open their target in a new tab; `static/app.js` reports the
/// click to `POST /api/links/{id}/click`. A failed lookup renders the HTML
/// error page.
pub async fn profile_page_handler(
    State(state): State<AppState>,
) -> Result<ProfilePageTemplate, PageError> {
    let (links, summary) = tokio::try_join!(
        state.link_service.list_active(),
        state.stats_service.summary(),
    )?;

    Ok(ProfilePageTemplate::new(
        state.profile_service.profile(),
        links,
        &summary,
    ))
}
