//! Workspace domain entity

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entity::{DomainError, DomainResult, Entity};

/// Label used when no display name can be derived from the path
const FALLBACK_DISPLAY_NAME: &str = "Workspace";

/// Opaque workspace identifier, assigned once at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkspaceId(Uuid);

impl WorkspaceId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for WorkspaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for WorkspaceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Workspace represents a user-registered folder of migration scripts
///
/// Records are never updated in place; a change is a remove followed by a
/// fresh insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workspace {
    pub id: WorkspaceId,
    pub path: String,
    pub display_name: String,
    pub created_at: DateTime<Local>,
}

impl Entity for Workspace {
    type Id = WorkspaceId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl Workspace {
    /// Build a new record from a user-picked path.
    ///
    /// `display_name` falls back to the last path segment, then to
    /// `"Workspace"` when the path has no usable segment. An empty path is
    /// rejected outright.
    pub fn create(path: &str, display_name: Option<&str>) -> DomainResult<Self> {
        if path.trim().is_empty() {
            return Err(DomainError::InvalidInput(
                "workspace path must not be empty".to_string(),
            ));
        }

        let display_name = match display_name {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => derive_display_name(path),
        };

        Ok(Self {
            id: WorkspaceId::generate(),
            path: path.to_string(),
            display_name,
            created_at: Local::now(),
        })
    }
}

fn derive_display_name(path: &str) -> String {
    std::path::Path::new(path)
        .file_name()
        .map(|segment| segment.to_string_lossy().into_owned())
        .unwrap_or_else(|| FALLBACK_DISPLAY_NAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_defaults_to_last_path_segment() {
        let workspace = Workspace::create("/home/user/migrations", None).unwrap();
        assert_eq!(workspace.display_name, "migrations");
    }

    #[test]
    fn explicit_display_name_wins() {
        let workspace = Workspace::create("/proj/db", Some("Proj DB")).unwrap();
        assert_eq!(workspace.display_name, "Proj DB");
    }

    #[test]
    fn blank_display_name_is_treated_as_absent() {
        let workspace = Workspace::create("/proj/db", Some("  ")).unwrap();
        assert_eq!(workspace.display_name, "db");
    }

    #[test]
    fn root_path_falls_back_to_fixed_label() {
        let workspace = Workspace::create("/", None).unwrap();
        assert_eq!(workspace.display_name, "Workspace");
    }

    #[test]
    fn trailing_separator_is_ignored() {
        let workspace = Workspace::create("/home/user/migrations/", None).unwrap();
        assert_eq!(workspace.display_name, "migrations");
    }

    #[test]
    fn empty_path_is_rejected() {
        let err = Workspace::create("", None).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn ids_are_unique_per_record() {
        let a = Workspace::create("/a", None).unwrap();
        let b = Workspace::create("/a", None).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn persisted_document_shape_is_stable() {
        let workspace = Workspace::create("/proj/db", Some("Proj DB")).unwrap();
        let doc = serde_json::to_value(&workspace).unwrap();

        assert!(doc["id"].is_string());
        assert_eq!(doc["path"], "/proj/db");
        assert_eq!(doc["display_name"], "Proj DB");
        assert!(doc["created_at"].is_string());
    }

    #[test]
    fn id_round_trips_through_display() {
        let workspace = Workspace::create("/a", None).unwrap();
        let parsed: WorkspaceId = workspace.id.to_string().parse().unwrap();
        assert_eq!(parsed, workspace.id);
    }
}
