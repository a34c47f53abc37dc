//! Migration Runner Seam
//!
//! The application fronts an external migration tool, but the tool's real
//! contract is not pinned down yet. This trait is the capability the app is
//! configured with; until an implementation is wired in, every operation
//! fails loudly instead of silently doing nothing.
//!
//! Each options struct carries only the workspace directory the operation
//! targets, the one thing the app demonstrably holds. The config type is an
//! opaque placeholder for the tool's own configuration file.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InitOptions {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewOptions {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpOptions {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DownOptions {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListOptions {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusOptions {
    pub path: PathBuf,
}

/// Contents of the external tool's configuration file; shape unknown
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MigrondiConfig {}

/// Capability the app can be configured with to drive migrations
#[async_trait]
pub trait MigrationRunner: Send + Sync {
    async fn init(&self, options: InitOptions) -> DomainResult<()>;

    async fn new_migration(
        &self,
        options: NewOptions,
        config: Option<MigrondiConfig>,
    ) -> DomainResult<()>;

    async fn up(&self, options: UpOptions, config: Option<MigrondiConfig>) -> DomainResult<()>;

    async fn down(&self, options: DownOptions, config: Option<MigrondiConfig>)
        -> DomainResult<()>;

    async fn list(&self, options: ListOptions, config: Option<MigrondiConfig>)
        -> DomainResult<()>;

    async fn status(
        &self,
        options: StatusOptions,
        config: Option<MigrondiConfig>,
    ) -> DomainResult<()>;
}

/// Default runner used when nothing has been wired in
pub struct UnconfiguredMigrationRunner;

fn not_wired(operation: &str) -> DomainError {
    DomainError::NotImplemented(format!("migration runner: {} has no implementation", operation))
}

#[async_trait]
impl MigrationRunner for UnconfiguredMigrationRunner {
    async fn init(&self, _options: InitOptions) -> DomainResult<()> {
        Err(not_wired("init"))
    }

    async fn new_migration(
        &self,
        _options: NewOptions,
        _config: Option<MigrondiConfig>,
    ) -> DomainResult<()> {
        Err(not_wired("new"))
    }

    async fn up(&self, _options: UpOptions, _config: Option<MigrondiConfig>) -> DomainResult<()> {
        Err(not_wired("up"))
    }

    async fn down(
        &self,
        _options: DownOptions,
        _config: Option<MigrondiConfig>,
    ) -> DomainResult<()> {
        Err(not_wired("down"))
    }

    async fn list(
        &self,
        _options: ListOptions,
        _config: Option<MigrondiConfig>,
    ) -> DomainResult<()> {
        Err(not_wired("list"))
    }

    async fn status(
        &self,
        _options: StatusOptions,
        _config: Option<MigrondiConfig>,
    ) -> DomainResult<()> {
        Err(not_wired("status"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn every_unconfigured_operation_fails_loudly() {
        let runner = UnconfiguredMigrationRunner;
        let path = PathBuf::from("/proj/db");

        let results = [
            runner.init(InitOptions { path: path.clone() }).await,
            runner
                .new_migration(NewOptions { path: path.clone() }, None)
                .await,
            runner.up(UpOptions { path: path.clone() }, None).await,
            runner.down(DownOptions { path: path.clone() }, None).await,
            runner.list(ListOptions { path: path.clone() }, None).await,
            runner.status(StatusOptions { path }, None).await,
        ];

        for result in results {
            assert!(matches!(result, Err(DomainError::NotImplemented(_))));
        }
    }
}
