//! DTOs for link listing and click recording.

use serde::Serialize;

use crate::domain::entities::Link;

/// A link as exposed by the public API.
#[derive(Debug, Serialize)]
pub struct LinkItem {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub url: String,
    pub icon: String,
    pub order_index: i32,
    pub is_active: bool,
}

impl From<Link> for LinkItem {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            title: link.title,
            description: link.description,
            url: link.url,
            icon: link.icon,
            order_index: link.order_index,
            is_active: link.is_active,
        }
    }
}

/// Response for `GET /api/links`.
#[derive(Debug, Serialize)]
pub struct LinksResponse {
    pub links: Vec<LinkItem>,
}

/// Acknowledgement of a recorded click.
#[derive(Debug, Serialize)]
pub struct ClickResponse {
    pub success: bool,
    pub message: String,
    #[serde(rename = "linkId")]
    pub link_id: i64,
}
