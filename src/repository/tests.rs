//! Repository Integration Tests
//!
//! Exercises the SQLite workspace store against real backing files; the
//! store opens its file on every call, so `:memory:` databases would not
//! survive between operations.

use tempfile::TempDir;

use crate::domain::{DomainError, Entity, WorkspaceId, WorkspaceOperation};
use crate::repository::{SqliteWorkspaceStore, StoreConfig, WorkspaceStore};

fn store_in(dir: &TempDir) -> SqliteWorkspaceStore {
    SqliteWorkspaceStore::new(StoreConfig::default_in(dir.path()))
}

fn unknown_id() -> WorkspaceId {
    "00000000-0000-0000-0000-000000000000".parse().unwrap()
}

#[tokio::test]
async fn empty_store_lists_nothing() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let workspaces = store.list_workspaces().await.unwrap();
    assert!(workspaces.is_empty());
}

#[tokio::test]
async fn add_then_list_contains_the_record() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let added = store
        .add_workspace("/proj/db", Some("Proj DB"))
        .await
        .unwrap();

    let workspaces = store.list_workspaces().await.unwrap();
    assert_eq!(workspaces.len(), 1);
    assert_eq!(workspaces[0].id, added.id);
    assert_eq!(workspaces[0].path, "/proj/db");
    assert_eq!(workspaces[0].display_name, "Proj DB");
}

#[tokio::test]
async fn display_name_defaults_to_last_segment() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let added = store.add_workspace("/home/user/migrations", None).await.unwrap();
    assert_eq!(added.display_name, "migrations");

    let workspaces = store.list_workspaces().await.unwrap();
    assert_eq!(workspaces[0].display_name, "migrations");
}

#[tokio::test]
async fn empty_path_is_rejected() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let err = store.add_workspace("", None).await.unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));

    // The rejected insert must not leave anything behind
    assert!(store.list_workspaces().await.unwrap().is_empty());
}

#[tokio::test]
async fn remove_deletes_exactly_the_record() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let keep = store.add_workspace("/keep", None).await.unwrap();
    let doomed = store.add_workspace("/drop", None).await.unwrap();

    assert!(store.remove_workspace(doomed.id).await.unwrap());

    let workspaces = store.list_workspaces().await.unwrap();
    assert_eq!(workspaces.len(), 1);
    assert_eq!(workspaces[0].id, keep.id);
}

#[tokio::test]
async fn remove_unknown_id_returns_false_and_keeps_data() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.add_workspace("/proj/db", None).await.unwrap();

    assert!(!store.remove_workspace(unknown_id()).await.unwrap());
    assert_eq!(store.list_workspaces().await.unwrap().len(), 1);
}

#[tokio::test]
async fn list_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.add_workspace("/a", None).await.unwrap();
    store.add_workspace("/b", None).await.unwrap();

    let mut first: Vec<_> = store
        .list_workspaces()
        .await
        .unwrap()
        .into_iter()
        .map(|w| w.id().to_string())
        .collect();
    let mut second: Vec<_> = store
        .list_workspaces()
        .await
        .unwrap()
        .into_iter()
        .map(|w| w.id().to_string())
        .collect();
    first.sort();
    second.sort();
    assert_eq!(first, second);
}

#[tokio::test]
async fn records_survive_a_store_reopen() {
    let dir = TempDir::new().unwrap();

    let added = {
        let store = store_in(&dir);
        store.add_workspace("/proj/db", None).await.unwrap()
    };

    // A second store over the same file sees the same data
    let reopened = store_in(&dir);
    let workspaces = reopened.list_workspaces().await.unwrap();
    assert_eq!(workspaces.len(), 1);
    assert_eq!(workspaces[0].id, added.id);
    assert_eq!(workspaces[0].created_at, added.created_at);
}

#[tokio::test]
async fn unopenable_path_is_store_unavailable() {
    let dir = TempDir::new().unwrap();
    // A directory is not an openable database file
    let store = SqliteWorkspaceStore::new(StoreConfig::new(dir.path()));

    let err = store.list_workspaces().await.unwrap_err();
    assert!(matches!(err, DomainError::StoreUnavailable(_)));

    let err = store.add_workspace("/proj/db", None).await.unwrap_err();
    assert!(matches!(err, DomainError::StoreUnavailable(_)));

    let err = store.remove_workspace(unknown_id()).await.unwrap_err();
    assert!(matches!(err, DomainError::StoreUnavailable(_)));
}

#[tokio::test]
async fn operation_history_round_trips() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let workspace = store.add_workspace("/proj/db", None).await.unwrap();
    let other = store.add_workspace("/other", None).await.unwrap();

    let op = WorkspaceOperation::create(workspace.id, "up", 3, 2);
    store.record_operation(&op).await.unwrap();
    store
        .record_operation(&WorkspaceOperation::create(other.id, "status", 1, 0))
        .await
        .unwrap();

    let history = store.list_operations(workspace.id).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, op.id);
    assert_eq!(history[0].operation_name, "up");
    assert_eq!(history[0].present_migrations, 3);
    assert_eq!(history[0].pending_migrations, 2);
}

#[tokio::test]
async fn history_of_a_fresh_workspace_is_empty() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let workspace = store.add_workspace("/proj/db", None).await.unwrap();
    assert!(store.list_operations(workspace.id).await.unwrap().is_empty());
}
