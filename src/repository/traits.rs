//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for workspace persistence.
//! Implementations can use SQLite, in-memory, etc.

use async_trait::async_trait;

use crate::domain::{DomainResult, Workspace, WorkspaceId, WorkspaceOperation};

/// Durable access to the collection of workspace records
#[async_trait]
pub trait WorkspaceStore: Send + Sync {
    /// All persisted workspaces, in no particular order
    async fn list_workspaces(&self) -> DomainResult<Vec<Workspace>>;

    /// Create and persist a workspace for `path`, returning the stored record
    async fn add_workspace(
        &self,
        path: &str,
        display_name: Option<&str>,
    ) -> DomainResult<Workspace>;

    /// Delete by id. `Ok(false)` when no such workspace exists.
    async fn remove_workspace(&self, id: WorkspaceId) -> DomainResult<bool>;

    /// Append an entry to a workspace's operation history
    async fn record_operation(&self, operation: &WorkspaceOperation) -> DomainResult<()>;

    /// Operation history for one workspace
    async fn list_operations(
        &self,
        workspace_id: WorkspaceId,
    ) -> DomainResult<Vec<WorkspaceOperation>>;
}
