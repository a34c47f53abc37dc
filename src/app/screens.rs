//! Screen View-Models
//!
//! Per-screen state holders. Each screen owns its visible collections
//! outright; they are caches over the store, never the source of truth.

use serde::Serialize;

use crate::domain::{Entity, Workspace, WorkspaceId, WorkspaceOperation};

/// Workspace list screen; the navigation root
#[derive(Debug, Clone, Default, Serialize)]
pub struct RootScreen {
    /// Cached copy of the store's workspace collection
    pub workspaces: Vec<Workspace>,
}

impl RootScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: WorkspaceId) -> bool {
        self.workspaces.iter().any(|workspace| workspace.id() == id)
    }
}

/// Detail screen for a single selected workspace
#[derive(Debug, Clone, Serialize)]
pub struct WorkspaceDetailScreen {
    pub workspace: Workspace,
    /// Cached migration-operation history for this workspace
    pub operations: Vec<WorkspaceOperation>,
}

impl WorkspaceDetailScreen {
    pub fn new(workspace: Workspace) -> Self {
        Self {
            workspace,
            operations: Vec::new(),
        }
    }

    pub fn with_operations(workspace: Workspace, operations: Vec<WorkspaceOperation>) -> Self {
        Self {
            workspace,
            operations,
        }
    }
}

/// Edit-screen skeleton; mirrors the detail screen but adds no behavior yet
#[derive(Debug, Clone, Serialize)]
pub struct WorkspaceEditScreen {
    pub workspace: Workspace,
}

impl WorkspaceEditScreen {
    pub fn new(workspace: Workspace) -> Self {
        Self { workspace }
    }
}
