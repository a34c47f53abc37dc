//! Services Layer
//!
//! Capabilities the app delegates to external tools.

mod migration;

pub use migration::{
    DownOptions, InitOptions, ListOptions, MigrationRunner, MigrondiConfig, NewOptions,
    StatusOptions, UnconfiguredMigrationRunner, UpOptions,
};
