//! In-memory project store.

use std::sync::RwLock;

use chrono::Utc;
use uuid::Uuid;

use crate::observability::metrics;
use crate::projects::error::{ProjectError, ProjectResult};
use crate::projects::types::{NewProject, Project, ProjectPatch};

/// Insertion-ordered collection of live projects.
///
/// Constructed once at startup and shared with handlers through `Arc`.
/// Every read-modify-write happens under a single write lock so that
/// concurrent updates and deletes never act on a stale index.
#[derive(Debug, Default)]
pub struct ProjectStore {
    projects: RwLock<Vec<Project>>,
}

impl ProjectStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all projects in insertion order.
    pub fn list(&self) -> Vec<Project> {
        self.projects
            .read()
            .expect("project store lock poisoned")
            .clone()
    }

    /// Assign an id and creation time, then append.
    pub fn create(&self, new: NewProject) -> Project {
        let project = Project {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            title: new.title,
            description: new.description,
            priority: new.priority,
            status: new.status,
        };

        let mut projects = self.projects.write().expect("project store lock poisoned");
        projects.push(project.clone());
        metrics::record_project_count(projects.len());

        tracing::info!(project_id = %project.id, status = %project.status, "Project created");
        project
    }

    /// Fetch a project by id.
    pub fn get(&self, id: &str) -> ProjectResult<Project> {
        let projects = self.projects.read().expect("project store lock poisoned");
        position(&projects, id)
            .map(|idx| projects[idx].clone())
            .ok_or_else(|| ProjectError::NotFound(id.to_string()))
    }

    /// Whether a live project carries this id.
    pub fn contains(&self, id: &str) -> bool {
        let projects = self.projects.read().expect("project store lock poisoned");
        position(&projects, id).is_some()
    }

    /// Apply a patch in place and return the merged record.
    pub fn update(&self, id: &str, patch: ProjectPatch) -> ProjectResult<Project> {
        let mut projects = self.projects.write().expect("project store lock poisoned");
        let idx = position(&projects, id).ok_or_else(|| ProjectError::NotFound(id.to_string()))?;

        let project = &mut projects[idx];
        patch.apply_to(project);

        tracing::info!(project_id = %project.id, "Project updated");
        Ok(project.clone())
    }

    /// Remove a project, keeping the relative order of the rest.
    pub fn delete(&self, id: &str) -> ProjectResult<()> {
        let mut projects = self.projects.write().expect("project store lock poisoned");
        let idx = position(&projects, id).ok_or_else(|| ProjectError::NotFound(id.to_string()))?;

        let removed = projects.remove(idx);
        metrics::record_project_count(projects.len());

        tracing::info!(project_id = %removed.id, "Project deleted");
        Ok(())
    }

    /// Number of live projects.
    pub fn len(&self) -> usize {
        self.projects.read().expect("project store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Identifiers that are not valid UUIDs cannot match any record.
fn position(projects: &[Project], id: &str) -> Option<usize> {
    let id = Uuid::parse_str(id).ok()?;
    projects.iter().position(|p| p.id == id)
}
