//! Task store trait
//!
//! Defines the interface for task storage operations.

use async_trait::async_trait;
use uuid::Uuid;

use super::model::{Task, TaskPatch, TaskStatus};
use crate::Result;

/// Upper bound on the number of tasks returned by a single list call.
pub const MAX_LISTED_TASKS: usize = 1000;

/// Storage interface for task CRUD operations
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Persist a new task
    async fn insert(&self, task: Task) -> Result<Task>;

    /// Get a task by ID
    async fn get(&self, id: Uuid) -> Result<Option<Task>>;

    /// Get all tasks, newest first, capped at [`MAX_LISTED_TASKS`]
    async fn list(&self) -> Result<Vec<Task>>;

    /// Apply a partial update to a task; `None` if the id is unknown
    async fn update(&self, id: Uuid, patch: TaskPatch) -> Result<Option<Task>>;

    /// Delete a task by ID; `false` if nothing was removed
    async fn delete(&self, id: Uuid) -> Result<bool>;

    /// Count tasks, optionally restricted to one status
    async fn count(&self, status: Option<TaskStatus>) -> Result<u64>;
}
