//! File-backed task document store
//!
//! Tasks are stored as JSON documents in a single database file, with an
//! in-memory cache loaded once when the store is opened.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::model::{Task, TaskPatch, TaskStatus};
use super::repository::{TaskStore, MAX_LISTED_TASKS};
use crate::{Error, Result};

/// JSON document store for tasks
pub struct FileTaskStore {
    /// Path to the database file
    path: PathBuf,
    /// In-memory cache of documents
    cache: RwLock<HashMap<Uuid, Task>>,
}

impl FileTaskStore {
    /// Open the store at the given path.
    ///
    /// If the file doesn't exist, it will be created on first write.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let cache = if path.exists() {
            let content = tokio::fs::read_to_string(&path)
                .await
                .map_err(|e| Error::Storage(format!("Failed to read database file: {}", e)))?;
            let tasks: Vec<Task> = serde_json::from_str(&content)
                .map_err(|e| Error::Storage(format!("Failed to parse database file: {}", e)))?;
            tasks.into_iter().map(|t| (t.id, t)).collect()
        } else {
            HashMap::new()
        };

        Ok(Self {
            path,
            cache: RwLock::new(cache),
        })
    }

    /// Persist the cache to disk
    async fn persist(&self) -> Result<()> {
        let content = {
            let cache = self.cache.read().await;
            let tasks: Vec<&Task> = cache.values().collect();
            serde_json::to_string_pretty(&tasks)?
        };

        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}

#[async_trait]
impl TaskStore for FileTaskStore {
    async fn insert(&self, task: Task) -> Result<Task> {
        {
            let mut cache = self.cache.write().await;
            cache.insert(task.id, task.clone());
        }
        self.persist().await?;
        Ok(task)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Task>> {
        let cache = self.cache.read().await;
        Ok(cache.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Task>> {
        let cache = self.cache.read().await;
        let mut tasks: Vec<Task> = cache.values().cloned().collect();
        // Sort by created_at descending (newest first)
        tasks.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        tasks.truncate(MAX_LISTED_TASKS);
        Ok(tasks)
    }

    async fn update(&self, id: Uuid, patch: TaskPatch) -> Result<Option<Task>> {
        let updated = {
            let mut cache = self.cache.write().await;
            match cache.get_mut(&id) {
                Some(task) => {
                    task.apply(patch);
                    Some(task.clone())
                }
                None => return Ok(None),
            }
        };
        self.persist().await?;
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let removed = {
            let mut cache = self.cache.write().await;
            cache.remove(&id).is_some()
        };
        if removed {
            self.persist().await?;
        }
        Ok(removed)
    }

    async fn count(&self, status: Option<TaskStatus>) -> Result<u64> {
        let cache = self.cache.read().await;
        let count = match status {
            Some(status) => cache.values().filter(|t| t.status == status).count(),
            None => cache.len(),
        };
        Ok(count as u64)
    }
}
