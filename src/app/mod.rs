//! Application Layer
//!
//! The shell-facing surface: navigation state, screen view-models, and the
//! operations a GUI shell calls into. The shell observes state through
//! immutable snapshots delivered to subscribers; nothing in here knows how
//! anything is rendered.

mod router;
mod screens;


pub use router::{Router, Screen};
pub use screens::{RootScreen, WorkspaceDetailScreen, WorkspaceEditScreen};

use std::sync::Arc;

use serde::Serialize;

use crate::domain::{DomainResult, Workspace, WorkspaceId};
use crate::repository::WorkspaceStore;
use crate::services::{MigrationRunner, UnconfiguredMigrationRunner};

/// Immutable view of the application state handed to subscribers
#[derive(Debug, Clone, Serialize)]
pub struct AppSnapshot {
    pub screen: Screen,
    pub depth: usize,
    pub workspaces: Vec<Workspace>,
}

type Subscriber = Box<dyn Fn(&AppSnapshot) + Send + Sync>;

/// Application façade owning the store, the navigation stack, and the
/// configured migration-runner capability
pub struct App {
    store: Arc<dyn WorkspaceStore>,
    runner: Arc<dyn MigrationRunner>,
    router: Router,
    subscribers: Vec<Subscriber>,
}

impl App {
    pub fn new(store: Arc<dyn WorkspaceStore>) -> Self {
        Self::with_runner(store, Arc::new(UnconfiguredMigrationRunner))
    }

    /// Explicitly configure the migration-runner capability
    pub fn with_runner(store: Arc<dyn WorkspaceStore>, runner: Arc<dyn MigrationRunner>) -> Self {
        Self {
            store,
            runner,
            router: Router::new(),
            subscribers: Vec::new(),
        }
    }

    /// Initial load: populate the root screen from the store.
    ///
    /// On failure the error is logged and returned; the root screen keeps
    /// its (empty) list.
    pub async fn start(&mut self) -> DomainResult<()> {
        match self.store.list_workspaces().await {
            Ok(workspaces) => {
                log::debug!("loaded {} workspaces", workspaces.len());
                self.router.root_mut().workspaces = workspaces;
                self.notify();
                Ok(())
            }
            Err(e) => {
                log::error!("failed to load workspaces: {}", e);
                Err(e)
            }
        }
    }

    /// Shell hook invoked after the user picks a directory.
    ///
    /// Failures are logged and leave both the navigation state and the
    /// visible list untouched.
    pub async fn on_folder_selected(&mut self, path: &str) {
        match self.store.add_workspace(path, None).await {
            Ok(workspace) => {
                log::debug!("added workspace {} at {}", workspace.id, workspace.path);
                self.router.root_mut().workspaces.push(workspace);
                self.notify();
            }
            Err(e) => {
                log::error!("failed to add workspace for {}: {}", path, e);
            }
        }
    }

    pub async fn list_workspaces(&self) -> DomainResult<Vec<Workspace>> {
        self.store.list_workspaces().await
    }

    /// Persist a workspace and append it to the visible list (write-through,
    /// no full reload)
    pub async fn add_workspace(
        &mut self,
        path: &str,
        display_name: Option<&str>,
    ) -> DomainResult<Workspace> {
        let workspace = self.store.add_workspace(path, display_name).await?;
        self.router.root_mut().workspaces.push(workspace.clone());
        self.notify();
        Ok(workspace)
    }

    /// Remove by id; on an actual removal the visible list is refreshed from
    /// the store rather than edited in place
    pub async fn remove_workspace(&mut self, id: WorkspaceId) -> DomainResult<bool> {
        let removed = self.store.remove_workspace(id).await?;
        if removed {
            let workspaces = self.store.list_workspaces().await?;
            self.router.root_mut().workspaces = workspaces;
            self.notify();
        }
        Ok(removed)
    }

    /// Push the detail screen for the selected workspace
    pub async fn go_to_workspace(&mut self, workspace: Workspace) {
        let operations = match self.store.list_operations(workspace.id).await {
            Ok(operations) => operations,
            Err(e) => {
                log::error!(
                    "failed to load operation history for {}: {}",
                    workspace.id,
                    e
                );
                Vec::new()
            }
        };
        self.router.push(Screen::WorkspaceDetail(
            WorkspaceDetailScreen::with_operations(workspace, operations),
        ));
        self.notify();
    }

    /// Back-navigation extension point; false when already on the root
    pub fn go_back(&mut self) -> bool {
        if self.router.pop().is_some() {
            self.notify();
            true
        } else {
            false
        }
    }

    /// Observe every state change as an immutable snapshot
    pub fn subscribe(&mut self, subscriber: impl Fn(&AppSnapshot) + Send + Sync + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn snapshot(&self) -> AppSnapshot {
        AppSnapshot {
            screen: self.router.current().clone(),
            depth: self.router.depth(),
            workspaces: self.router.root().workspaces.clone(),
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// The configured migration-runner capability
    pub fn migration_runner(&self) -> &dyn MigrationRunner {
        self.runner.as_ref()
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        for subscriber in &self.subscribers {
            subscriber(&snapshot);
        }
    }
}
