//! Application state

use std::sync::Arc;

use todo_core::task::{FileTaskStore, TaskService, ValidationRules};

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    service: TaskService,
}

impl AppState {
    /// Create a new AppState, opening the document store named by the config
    pub async fn new(config: &Config) -> todo_core::Result<Self> {
        let store = Arc::new(FileTaskStore::open(config.db_path()).await?);
        let service = TaskService::new(store).with_rules(ValidationRules {
            reject_empty_titles: config.reject_empty_titles,
        });

        Ok(Self {
            inner: Arc::new(AppStateInner { service }),
        })
    }

    /// Get the task service
    pub fn service(&self) -> &TaskService {
        &self.inner.service
    }
}
