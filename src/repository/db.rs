//! Database Connection and Setup
//!
//! Opens the backing SQLite file and keeps its schema current. There is no
//! long-lived handle: every store operation opens the file, does its one
//! thing, and drops the connection.

use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::domain::{DomainError, DomainResult};

/// Backing file name used when the caller does not pick one
pub const DEFAULT_DB_FILE: &str = "migrondiui.db";

/// Where the store keeps its data.
///
/// Always passed in explicitly; the store never decides its own location.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub db_path: PathBuf,
}

impl StoreConfig {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// Standard layout: `migrondiui.db` inside the given data directory
    pub fn default_in(data_dir: &Path) -> Self {
        Self {
            db_path: data_dir.join(DEFAULT_DB_FILE),
        }
    }
}

/// Open a fresh connection and make sure the schema exists
pub(super) fn open_db(config: &StoreConfig) -> DomainResult<Connection> {
    let conn = Connection::open(&config.db_path)
        .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
    run_migrations(&conn)?;
    Ok(conn)
}

/// Idempotent schema setup, re-run on every open.
///
/// New columns must be added with defaults so files written by older
/// versions keep loading.
fn run_migrations(conn: &Connection) -> DomainResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS workspaces (
            id TEXT PRIMARY KEY,
            path TEXT NOT NULL,
            display_name TEXT NOT NULL,
            created_at TEXT NOT NULL
        )",
        [],
    )
    .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;

    // Supports future lookup-by-name; no exposed operation relies on it
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_workspaces_display_name
            ON workspaces(display_name)",
        [],
    )
    .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS workspace_operations (
            id TEXT PRIMARY KEY,
            workspace_id TEXT NOT NULL,
            operation_name TEXT NOT NULL,
            present_migrations INTEGER NOT NULL,
            pending_migrations INTEGER NOT NULL,
            created_at TEXT NOT NULL
        )",
        [],
    )
    .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_operations_workspace
            ON workspace_operations(workspace_id)",
        [],
    )
    .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;

    Ok(())
}
