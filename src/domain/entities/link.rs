//! Link entity representing one outbound entry on the profile page.

use chrono::{DateTime, Utc};
use validator::Validate;

/// A link listed on the profile page.
///
/// Links are managed outside the HTTP API (see the `admin` binary). Only
/// active links are displayed, in ascending `order_index`.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub url: String,
    pub icon: String,
    pub order_index: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        title: String,
        description: String,
        url: String,
        icon: String,
        order_index: i32,
        is_active: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            url,
            icon,
            order_index,
            is_active,
            created_at,
        }
    }
}

/// Input data for creating a new link.
///
/// When `order_index` is `None` the link is appended after the current last one.
#[derive(Debug, Clone, Validate)]
pub struct NewLink {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: String,

    #[validate(length(max = 500))]
    pub description: String,

    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    #[validate(length(max = 100))]
    pub icon: String,

    pub order_index: Option<i32>,
}
