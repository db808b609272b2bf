//! Task model definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Task completion status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    Completed,
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::Todo
    }
}

/// A task record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Create a new task with the given title
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: String::new(),
            status: TaskStatus::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the status
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Apply a partial update and refresh `updated_at`.
    ///
    /// Only fields present in the patch are overwritten. An empty patch
    /// still refreshes `updated_at`.
    pub fn apply(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self.updated_at = Utc::now();
    }
}

/// Partial update to a task
///
/// Absent fields are left unchanged when applied. A supplied empty string
/// is a value like any other, not an omission.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<TaskStatus>,
}

/// Aggregate completion statistics
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TaskStats {
    pub total: u64,
    pub completed: u64,
    pub pending: u64,
    pub completion_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_task() {
        let task = Task::new("Test task");
        assert_eq!(task.title, "Test task");
        assert_eq!(task.description, "");
        assert_eq!(task.status, TaskStatus::Todo);
        assert_eq!(task.created_at, task.updated_at);
    }

    #[test]
    fn test_task_with_description() {
        let task = Task::new("Test task").with_description("This is a test");
        assert_eq!(task.description, "This is a test");
    }

    #[test]
    fn test_task_with_status() {
        let task = Task::new("Test task").with_status(TaskStatus::Completed);
        assert_eq!(task.status, TaskStatus::Completed);
    }

    #[test]
    fn test_apply_overwrites_supplied_fields_only() {
        let mut task = Task::new("Original").with_description("Keep me");

        task.apply(TaskPatch {
            status: Some(TaskStatus::Completed),
            ..TaskPatch::default()
        });

        assert_eq!(task.title, "Original");
        assert_eq!(task.description, "Keep me");
        assert_eq!(task.status, TaskStatus::Completed);
    }

    #[test]
    fn test_apply_distinguishes_empty_from_absent() {
        let mut task = Task::new("Original").with_description("Will be cleared");

        task.apply(TaskPatch {
            description: Some(String::new()),
            ..TaskPatch::default()
        });

        assert_eq!(task.description, "");
    }

    #[test]
    fn test_empty_patch_refreshes_updated_at() {
        let mut task = Task::new("Unchanged");
        let id = task.id;
        let created_at = task.created_at;

        task.apply(TaskPatch::default());

        assert_eq!(task.id, id);
        assert_eq!(task.created_at, created_at);
        assert_eq!(task.title, "Unchanged");
        assert!(task.updated_at >= task.created_at);
    }

    #[test]
    fn test_patch_absent_fields_deserialize_to_none() {
        let patch: TaskPatch = serde_json::from_str(r#"{"title": "New"}"#).unwrap();
        assert_eq!(patch.title.as_deref(), Some("New"));
        assert!(patch.description.is_none());
        assert!(patch.status.is_none());
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::Completed).unwrap(),
            r#""completed""#
        );
        let status: TaskStatus = serde_json::from_str(r#""todo""#).unwrap();
        assert_eq!(status, TaskStatus::Todo);
    }
}
