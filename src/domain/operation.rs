//! Workspace Operation entity
//!
//! One entry in a workspace's migration-operation history: which runner
//! operation ran and the migration counts it reported.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entity::Entity;
use super::workspace::WorkspaceId;

/// Opaque operation identifier, assigned once at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationId(Uuid);

impl OperationId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for OperationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for OperationId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceOperation {
    pub id: OperationId,
    pub workspace_id: WorkspaceId,
    pub operation_name: String,
    pub present_migrations: u32,
    pub pending_migrations: u32,
    pub created_at: DateTime<Local>,
}

impl Entity for WorkspaceOperation {
    type Id = OperationId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl WorkspaceOperation {
    pub fn create(
        workspace_id: WorkspaceId,
        operation_name: &str,
        present_migrations: u32,
        pending_migrations: u32,
    ) -> Self {
        Self {
            id: OperationId::generate(),
            workspace_id,
            operation_name: operation_name.to_string(),
            present_migrations,
            pending_migrations,
            created_at: Local::now(),
        }
    }
}
