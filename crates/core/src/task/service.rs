//! Task service
//!
//! CRUD and statistics logic on top of a [`TaskStore`]. The store handle is
//! injected, so the service can run against any storage backend.

use std::sync::Arc;

use uuid::Uuid;

use super::model::{Task, TaskPatch, TaskStats, TaskStatus};
use super::repository::TaskStore;
use crate::{Error, Result};

/// Validation rules applied to incoming task fields
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationRules {
    /// Reject titles that are empty or whitespace-only
    pub reject_empty_titles: bool,
}

/// CRUD and statistics operations over a shared task store
#[derive(Clone)]
pub struct TaskService {
    store: Arc<dyn TaskStore>,
    rules: ValidationRules,
}

impl TaskService {
    /// Create a service with default validation rules
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self {
            store,
            rules: ValidationRules::default(),
        }
    }

    /// Replace the validation rules
    pub fn with_rules(mut self, rules: ValidationRules) -> Self {
        self.rules = rules;
        self
    }

    fn check_title(&self, title: &str) -> Result<()> {
        if self.rules.reject_empty_titles && title.trim().is_empty() {
            return Err(Error::InvalidInput("Title cannot be empty".to_string()));
        }
        Ok(())
    }

    /// List all tasks, newest first
    pub async fn list(&self) -> Result<Vec<Task>> {
        self.store.list().await
    }

    /// Create a task from the given fields and persist it
    pub async fn create(
        &self,
        title: String,
        description: Option<String>,
        status: Option<TaskStatus>,
    ) -> Result<Task> {
        self.check_title(&title)?;

        let mut task = Task::new(title);
        if let Some(description) = description {
            task = task.with_description(description);
        }
        if let Some(status) = status {
            task = task.with_status(status);
        }

        self.store.insert(task).await
    }

    /// Apply a partial update to the task with the given id
    pub async fn update(&self, id: Uuid, patch: TaskPatch) -> Result<Task> {
        if let Some(title) = &patch.title {
            self.check_title(title)?;
        }

        self.store
            .update(id, patch)
            .await?
            .ok_or_else(|| Error::TaskNotFound(id.to_string()))
    }

    /// Delete the task with the given id
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if self.store.delete(id).await? {
            Ok(())
        } else {
            Err(Error::TaskNotFound(id.to_string()))
        }
    }

    /// Compute aggregate completion statistics
    pub async fn stats(&self) -> Result<TaskStats> {
        let total = self.store.count(None).await?;
        let completed = self.store.count(Some(TaskStatus::Completed)).await?;
        let pending = total - completed;

        // Percentage rounded to one decimal place; zero tasks means zero rate
        let completion_rate = if total > 0 {
            (completed as f64 / total as f64 * 1000.0).round() / 10.0
        } else {
            0.0
        };

        Ok(TaskStats {
            total,
            completed,
            pending,
            completion_rate,
        })
    }
}
