//! Workspace Repository
//!
//! SQLite-backed implementation of the workspace store. Every call opens
//! the backing file, runs its statements, and drops the connection; no
//! handle or transaction outlives a single operation.

use async_trait::async_trait;
use chrono::{DateTime, Local};
use rusqlite::{params, Connection, Row};

use crate::domain::{DomainError, DomainResult, Workspace, WorkspaceId, WorkspaceOperation};

use super::db::{open_db, StoreConfig};
use super::traits::WorkspaceStore;

pub struct SqliteWorkspaceStore {
    config: StoreConfig,
}

impl SqliteWorkspaceStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    fn open(&self) -> DomainResult<Connection> {
        open_db(&self.config)
    }
}

#[async_trait]
impl WorkspaceStore for SqliteWorkspaceStore {
    async fn list_workspaces(&self) -> DomainResult<Vec<Workspace>> {
        let conn = self.open()?;

        let mut stmt = conn
            .prepare("SELECT id, path, display_name, created_at FROM workspaces")
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;

        let mut rows = stmt
            .query([])
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;

        let mut workspaces = Vec::new();
        while let Some(row) = rows
            .next()
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?
        {
            workspaces.push(row_to_workspace(row)?);
        }
        Ok(workspaces)
    }

    async fn add_workspace(
        &self,
        path: &str,
        display_name: Option<&str>,
    ) -> DomainResult<Workspace> {
        let workspace = Workspace::create(path, display_name)?;

        let conn = self.open()?;
        conn.execute(
            "INSERT INTO workspaces (id, path, display_name, created_at)
                VALUES (?1, ?2, ?3, ?4)",
            params![
                workspace.id.to_string(),
                workspace.path,
                workspace.display_name,
                workspace.created_at.to_rfc3339(),
            ],
        )
        .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;

        Ok(workspace)
    }

    async fn remove_workspace(&self, id: WorkspaceId) -> DomainResult<bool> {
        let conn = self.open()?;
        let removed = conn
            .execute(
                "DELETE FROM workspaces WHERE id = ?1",
                params![id.to_string()],
            )
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        Ok(removed > 0)
    }

    async fn record_operation(&self, operation: &WorkspaceOperation) -> DomainResult<()> {
        let conn = self.open()?;
        conn.execute(
            "INSERT INTO workspace_operations
                (id, workspace_id, operation_name, present_migrations,
                 pending_migrations, created_at)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                operation.id.to_string(),
                operation.workspace_id.to_string(),
                operation.operation_name,
                operation.present_migrations,
                operation.pending_migrations,
                operation.created_at.to_rfc3339(),
            ],
        )
        .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
        Ok(())
    }

    async fn list_operations(
        &self,
        workspace_id: WorkspaceId,
    ) -> DomainResult<Vec<WorkspaceOperation>> {
        let conn = self.open()?;

        let mut stmt = conn
            .prepare(
                "SELECT id, workspace_id, operation_name, present_migrations,
                        pending_migrations, created_at
                    FROM workspace_operations WHERE workspace_id = ?1",
            )
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;

        let mut rows = stmt
            .query(params![workspace_id.to_string()])
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;

        let mut operations = Vec::new();
        while let Some(row) = rows
            .next()
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?
        {
            operations.push(row_to_operation(row)?);
        }
        Ok(operations)
    }
}

fn row_to_workspace(row: &Row<'_>) -> DomainResult<Workspace> {
    let id: String = column(row, 0)?;
    let path: String = column(row, 1)?;
    let display_name: String = column(row, 2)?;
    let created_at: String = column(row, 3)?;

    Ok(Workspace {
        id: parse_id(&id)?,
        path,
        display_name,
        created_at: parse_timestamp(&created_at)?,
    })
}

fn row_to_operation(row: &Row<'_>) -> DomainResult<WorkspaceOperation> {
    let id: String = column(row, 0)?;
    let workspace_id: String = column(row, 1)?;
    let operation_name: String = column(row, 2)?;
    let present_migrations: u32 = column(row, 3)?;
    let pending_migrations: u32 = column(row, 4)?;
    let created_at: String = column(row, 5)?;

    Ok(WorkspaceOperation {
        id: parse_id(&id)?,
        workspace_id: parse_id(&workspace_id)?,
        operation_name,
        present_migrations,
        pending_migrations,
        created_at: parse_timestamp(&created_at)?,
    })
}

fn column<T: rusqlite::types::FromSql>(row: &Row<'_>, index: usize) -> DomainResult<T> {
    row.get(index)
        .map_err(|e| DomainError::StoreUnavailable(e.to_string()))
}

// A row that does not parse back means the file was written by something
// else entirely; treat it the same as an unopenable store.
fn parse_id<T: std::str::FromStr>(raw: &str) -> DomainResult<T> {
    raw.parse()
        .map_err(|_| DomainError::StoreUnavailable(format!("corrupt record id: {}", raw)))
}

fn parse_timestamp(raw: &str) -> DomainResult<DateTime<Local>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Local))
        .map_err(|_| DomainError::StoreUnavailable(format!("corrupt timestamp: {}", raw)))
}
