//! Migrondi UI Core
//!
//! UI-agnostic backend for the Migrondi workspace manager: a user registers
//! filesystem folders of migration scripts, they are persisted in an
//! embedded single-file store, and a navigation stack tracks which screen
//! is active. A GUI shell renders snapshots of this state; no rendering
//! concern lives here.
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - services: External-tool capabilities (the migration runner seam)
//! - app: Navigation state, screen view-models, and the shell-facing façade

pub mod app;
pub mod domain;
pub mod repository;
pub mod services;

pub use app::{App, AppSnapshot, Screen};
pub use domain::{DomainError, DomainResult, Workspace, WorkspaceId};
pub use repository::{SqliteWorkspaceStore, StoreConfig, WorkspaceStore};
pub use services::{MigrationRunner, UnconfiguredMigrationRunner};
