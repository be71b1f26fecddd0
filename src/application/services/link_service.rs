//! Link Store service: listing and lookup of profile links.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use validator::Validate;

/// Service for reading (and, for administration, managing) profile links.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Returns active links in display order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_active(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list_active().await
    }

    /// Returns every link, including inactive ones.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list_all().await
    }

    /// Retrieves a link by id.
    ///
    /// Inactive links are returned too; activity only governs listing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_by_id(&self, id: i64) -> Result<Link, AppError> {
        self.link_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found"))
    }

    /// Counts active links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_active(&self) -> Result<i64, AppError> {
        self.link_repository.count_active().await
    }

    /// Validates and stores a new active link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the title, URL or other fields are invalid.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_link(&self, new_link: NewLink) -> Result<Link, AppError> {
        new_link.validate()?;
        self.link_repository.create(new_link).await
    }

    /// Activates or deactivates a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn set_active(&self, id: i64, is_active: bool) -> Result<(), AppError> {
        if !self.link_repository.set_active(id, is_active).await? {
            return Err(AppError::not_found(format!("Link {id} not found")));
        }

        tracing::info!(link_id = id, is_active, "Link activity changed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use chrono::Utc;

    fn link(id: i64, order_index: i32) -> Link {
        Link::new(
            id,
            format!("Link {id}"),
            String::new(),
            format!("https://example.com/{id}"),
            String::new(),
            order_index,
            true,
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_list_active_passes_through() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_list_active()
            .times(1)
            .returning(|| Ok(vec![link(1, 1), link(2, 2)]));

        let service = LinkService::new(Arc::new(mock_repo));
        let links = service.list_active().await.unwrap();

        assert_eq!(links.len(), 2);
        assert_eq!(links[0].id, 1);
    }

    #[tokio::test]
    async fn test_get_by_id_found() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 3)
            .times(1)
            .returning(|id| Ok(Some(link(id, 1))));

        let service = LinkService::new(Arc::new(mock_repo));
        let found = service.get_by_id(3).await.unwrap();

        assert_eq!(found.id, 3);
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_find_by_id().returning(|_| Ok(None));

        let service = LinkService::new(Arc::new(mock_repo));
        let result = service.get_by_id(99).await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_create_link_rejects_invalid_url_without_touching_store() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_create().times(0);

        let service = LinkService::new(Arc::new(mock_repo));
        let result = service
            .create_link(NewLink {
                title: "Broken".to_string(),
                description: String::new(),
                url: "nope".to_string(),
                icon: String::new(),
                order_index: None,
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_set_active_unknown_link() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_set_active().returning(|_, _| Ok(false));

        let service = LinkService::new(Arc::new(mock_repo));
        let result = service.set_active(5, false).await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }
}
