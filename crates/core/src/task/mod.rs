//! Task module
//!
//! This module contains task-related types and logic.

mod model;
mod repository;
mod service;
mod store;

pub use model::*;
pub use repository::{TaskStore, MAX_LISTED_TASKS};
pub use service::{TaskService, ValidationRules};
pub use store::FileTaskStore;
