use std::time::Duration;

use linkbio_core::{LinkId, NewLink};
use linkbio_storage::{LinkRepository, PostgresRepository, StorageError};
use linkbio_test_infra::postgres::{PostgresConfig, PostgresServer};
use sqlx::postgres::PgPoolOptions;

struct Fixture {
    _postgres: PostgresServer,
    repo: PostgresRepository,
}

impl Fixture {
    async fn start() -> Self {
        let postgres = PostgresServer::new(PostgresConfig::builder().build())
            .await
            .expect("start postgres");
        let url = postgres.database_url().await.expect("postgres url");
        let pool = connect_with_retry(&url).await;

        let repo = PostgresRepository::new(pool);
        repo.migrate().await.expect("create schema");

        Self {
            _postgres: postgres,
            repo,
        }
    }
}

async fn connect_with_retry(url: &str) -> sqlx::PgPool {
    let mut last_error = None;

    for _ in 0..20 {
        match PgPoolOptions::new().max_connections(5).connect(url).await {
            Ok(pool) => return pool,
            Err(err) => {
                last_error = Some(err);
                tokio::time::sleep(Duration::from_millis(500)).await;
            }
        }
    }

    panic!("failed to connect postgres: {last_error:?}");
}

fn new_link(title: &str, url: &str) -> NewLink {
    NewLink::new(title, url).unwrap()
}

#[tokio::test]
async fn create_and_get_by_id() {
    let fixture = Fixture::start().await;

    let created = fixture
        .repo
        .create(new_link("My Site", "https://example.com"))
        .await
        .unwrap();

    assert!(created.id.get() > 0);
    assert_eq!(created.title, "My Site");
    assert_eq!(created.url, "https://example.com");

    let got = fixture.repo.get_by_id(created.id).await.unwrap();
    assert_eq!(got, created);
}

#[tokio::test]
async fn list_all_is_empty_without_rows() {
    let fixture = Fixture::start().await;

    let links = fixture.repo.list_all().await.unwrap();
    assert!(links.is_empty());
}

#[tokio::test]
async fn list_all_returns_newest_first() {
    let fixture = Fixture::start().await;

    let first = fixture
        .repo
        .create(new_link("First", "https://one.example"))
        .await
        .unwrap();
    let second = fixture
        .repo
        .create(new_link("Second", "https://two.example"))
        .await
        .unwrap();

    let ids: Vec<_> = fixture
        .repo
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|link| link.id)
        .collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[tokio::test]
async fn get_by_id_reports_missing_row() {
    let fixture = Fixture::start().await;

    let err = fixture.repo.get_by_id(LinkId::new(9999)).await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound(_)));
}

#[tokio::test]
async fn update_changes_title_and_url_only() {
    let fixture = Fixture::start().await;

    let created = fixture
        .repo
        .create(new_link("Old title", "https://old.example"))
        .await
        .unwrap();

    let updated = fixture
        .repo
        .update(created.id, new_link("New title", "https://new.example"))
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.title, "New title");
    assert_eq!(updated.url, "https://new.example");
}

#[tokio::test]
async fn update_reports_missing_row() {
    let fixture = Fixture::start().await;

    let err = fixture
        .repo
        .update(LinkId::new(9999), new_link("Title", "https://example.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::NotFound(_)));
}

#[tokio::test]
async fn delete_uses_affected_rows_for_not_found() {
    let fixture = Fixture::start().await;

    let created = fixture
        .repo
        .create(new_link("My Site", "https://example.com"))
        .await
        .unwrap();

    fixture.repo.delete(created.id).await.unwrap();

    let err = fixture.repo.get_by_id(created.id).await.unwrap_err();
    assert!(err.is_not_found());

    let err = fixture.repo.delete(created.id).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn closed_pool_is_reported_as_unavailable() {
    let fixture = Fixture::start().await;
    fixture.repo.close().await;

    let err = fixture.repo.list_all().await.unwrap_err();
    assert!(matches!(err, StorageError::Unavailable(_)));
}
