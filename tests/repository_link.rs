mod common;

use sqlx::PgPool;
use std::sync::Arc;
use linkbio::domain::entities::NewLink;
use linkbio::domain::repositories::LinkRepository;
use linkbio::infrastructure::persistence::PgLinkRepository;

fn new_link(title: &str, order_index: Option<i32>) -> NewLink {
    NewLink {
        title: title.to_string(),
        description: String::new(),
        url: "https://example.com".to_string(),
        icon: "fas fa-link".to_string(),
        order_index,
    }
}

#[sqlx::test]
async fn test_list_active_orders_by_index_then_id(pool: PgPool) {
    let b = common::create_test_link(&pool, "B", 2, true).await;
    let a = common::create_test_link(&pool, "A", 1, true).await;
    let c = common::create_test_link(&pool, "C", 2, true).await;
    common::create_test_link(&pool, "Hidden", 0, false).await;

    let repo = PgLinkRepository::new(Arc::new(pool));
    let ids: Vec<i64> = repo
        .list_active()
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.id)
        .collect();

    assert_eq!(ids, vec![a, b, c]);
}

#[sqlx::test]
async fn test_list_all_includes_inactive(pool: PgPool) {
    common::create_test_link(&pool, "Visible", 1, true).await;
    common::create_test_link(&pool, "Hidden", 2, false).await;

    let repo = PgLinkRepository::new(Arc::new(pool));

    assert_eq!(repo.list_all().await.unwrap().len(), 2);
    assert_eq!(repo.count_active().await.unwrap(), 1);
}

#[sqlx::test]
async fn test_find_by_id(pool: PgPool) {
    let id = common::create_test_link(&pool, "Recipes", 1, false).await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    let link = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(link.title, "Recipes");
    assert!(!link.is_active);

    assert!(repo.find_by_id(id + 1000).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_create_appends_when_order_missing(pool: PgPool) {
    common::create_test_link(&pool, "First", 4, true).await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    let appended = repo.create(new_link("Second", None)).await.unwrap();
    assert_eq!(appended.order_index, 5);
    assert!(appended.is_active);

    let placed = repo.create(new_link("Third", Some(1))).await.unwrap();
    assert_eq!(placed.order_index, 1);
}

#[sqlx::test]
async fn test_create_in_empty_table_starts_at_one(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let link = repo.create(new_link("Only", None)).await.unwrap();
    assert_eq!(link.order_index, 1);
}

#[sqlx::test]
async fn test_set_active(pool: PgPool) {
    let id = common::create_test_link(&pool, "Toggle", 1, true).await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    assert!(repo.set_active(id, false).await.unwrap());
    assert!(repo.list_active().await.unwrap().is_empty());

    assert!(!repo.set_active(id + 1000, true).await.unwrap());
}
