//! Domain Layer - Core Entity Trait
//!
//! This trait defines the basic contract for all domain entities.
//! All entities must have a unique ID and be thread-safe.

use serde::{Deserialize, Serialize};

/// Core trait for all domain entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + Send + Sync;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
///
/// Serializable so the shell can forward them across an IPC boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DomainError {
    /// The backing store file cannot be opened (locked, corrupt, permission denied)
    StoreUnavailable(String),
    /// Empty or malformed caller input
    InvalidInput(String),
    /// A declared operation with no real implementation behind it yet
    NotImplemented(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::StoreUnavailable(msg) => write!(f, "Store unavailable: {}", msg),
            DomainError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            DomainError::NotImplemented(msg) => write!(f, "Not implemented: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
