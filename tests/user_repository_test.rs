//! Credential store tests against an in-memory SQLite database.

use std::sync::Arc;

use hospital_portal::errors::AppError;
use hospital_portal::infra::{Database, UserRepository, UserStore};

async fn store() -> UserStore {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    UserStore::new(db.get_connection())
}

#[tokio::test]
async fn test_create_and_find() {
    let store = store().await;

    let created = store
        .create("alice".into(), "$argon2id$hash".into(), "doctor".into())
        .await
        .unwrap();
    assert_eq!(created.username, "alice");
    assert_eq!(created.role, "doctor");

    let by_name = store.find_by_username("alice").await.unwrap().unwrap();
    assert_eq!(by_name, created);

    let by_id = store.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(by_id, created);
}

#[tokio::test]
async fn test_ids_are_generated_and_unique() {
    let store = store().await;

    let a = store.create("a".into(), "h".into(), "staff".into()).await.unwrap();
    let b = store.create("b".into(), "h".into(), "staff".into()).await.unwrap();
    assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn test_missing_user() {
    let store = store().await;

    assert!(store.find_by_username("ghost").await.unwrap().is_none());
    assert!(store.find_by_id(999).await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_username_rejected_by_constraint() {
    let store = store().await;

    store
        .create("alice".into(), "first".into(), "doctor".into())
        .await
        .unwrap();
    let second = store
        .create("alice".into(), "second".into(), "patient".into())
        .await;

    assert!(matches!(second, Err(AppError::Conflict(_))));

    // the original record is untouched
    let stored = store.find_by_username("alice").await.unwrap().unwrap();
    assert_eq!(stored.password_hash, "first");
    assert_eq!(stored.role, "doctor");
}

#[tokio::test]
async fn test_concurrent_duplicate_registrations() {
    let store = Arc::new(store().await);

    let (first, second) = tokio::join!(
        store.create("race".into(), "h1".into(), "staff".into()),
        store.create("race".into(), "h2".into(), "staff".into()),
    );

    let outcomes = [first.is_ok(), second.is_ok()];
    assert_eq!(outcomes.iter().filter(|ok| **ok).count(), 1);
    assert!(matches!(
        first.err().or(second.err()),
        Some(AppError::Conflict(_))
    ));
}

#[tokio::test]
async fn test_role_is_free_text() {
    let store = store().await;

    let user = store
        .create("nina".into(), "h".into(), "nurse".into())
        .await
        .unwrap();
    assert_eq!(user.role, "nurse");
}

#[tokio::test]
async fn test_username_lookup_is_exact() {
    let store = store().await;

    store
        .create("Alice".into(), "h".into(), "doctor".into())
        .await
        .unwrap();
    assert!(store.find_by_username("Alice").await.unwrap().is_some());
    assert!(store.find_by_username("alice ").await.unwrap().is_none());
}
