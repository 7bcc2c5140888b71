//! Project resource types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use uuid::Uuid;

/// Lifecycle status of a project.
///
/// Serialized with the localized labels clients send and receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[serde(rename = "Planejado")]
    Planned,
    #[serde(rename = "Em andamento")]
    InProgress,
    #[serde(rename = "Concluído")]
    Completed,
    #[serde(rename = "Cancelado")]
    Cancelled,
}

impl ProjectStatus {
    /// Every status, in display order.
    pub const ALL: [ProjectStatus; 4] = [
        ProjectStatus::Planned,
        ProjectStatus::InProgress,
        ProjectStatus::Completed,
        ProjectStatus::Cancelled,
    ];

    /// The wire label for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Planned => "Planejado",
            ProjectStatus::InProgress => "Em andamento",
            ProjectStatus::Completed => "Concluído",
            ProjectStatus::Cancelled => "Cancelado",
        }
    }

    /// Look up a status by its exact wire label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == label)
    }

    /// All labels joined for error messages.
    pub fn labels() -> String {
        Self::ALL
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored project record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Assigned by the store at creation, never reassigned.
    pub id: Uuid,
    /// Creation instant, never mutated.
    pub created_at: DateTime<Utc>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// 1 (highest) to 3 (lowest) by convention; any JSON number is kept as sent.
    pub priority: Number,
    pub status: ProjectStatus,
}

/// Validated input for creating a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProject {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: Number,
    pub status: ProjectStatus,
}

/// Partial update of a project. Absent fields are left untouched.
///
/// Only serialized (by the client); the server builds patches through
/// `validate_patch`, which keeps `null` and absent apart.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// `Some(None)` clears the description and goes out as `null`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
}

impl ProjectPatch {
    /// True when the patch touches no field.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.status.is_none()
    }

    /// Overwrite the fields present in the patch. Identity fields are not
    /// reachable from a patch.
    pub fn apply_to(self, project: &mut Project) {
        if let Some(title) = self.title {
            project.title = title;
        }
        if let Some(description) = self.description {
            project.description = description;
        }
        if let Some(priority) = self.priority {
            project.priority = priority;
        }
        if let Some(status) = self.status {
            project.status = status;
        }
    }
}
