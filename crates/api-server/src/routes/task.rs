//! Task API endpoints
//!
//! RESTful API for task CRUD operations and statistics.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use todo_core::task::{Task, TaskPatch, TaskStats, TaskStatus};
use todo_core::Error;

use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<TaskStatus>,
}

#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            status: task.status,
            created_at: task.created_at.to_rfc3339(),
            updated_at: task.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Map a service error to an HTTP response.
///
/// Not-found and validation errors pass through with their own status;
/// everything else is logged and reduced to the generic operation message
/// so storage detail never reaches the caller.
fn api_error(err: Error, message: &str) -> ApiError {
    match err {
        Error::TaskNotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Task not found".to_string(),
            }),
        ),
        Error::InvalidInput(detail) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse { error: detail }),
        ),
        err => {
            tracing::error!("{}: {}", message, err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: message.to_string(),
                }),
            )
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/tasks - List all tasks, newest first
async fn list_tasks(
    State(state): State<AppState>,
) -> Result<Json<Vec<TaskResponse>>, ApiError> {
    let tasks = state
        .service()
        .list()
        .await
        .map_err(|e| api_error(e, "Failed to fetch tasks"))?;

    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

/// POST /api/tasks - Create a new task
async fn create_task(
    State(state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> Result<Json<TaskResponse>, ApiError> {
    let created = state
        .service()
        .create(req.title, req.description, req.status)
        .await
        .map_err(|e| api_error(e, "Failed to create task"))?;

    Ok(Json(TaskResponse::from(created)))
}

/// PUT /api/tasks/:id - Apply a partial update to a task
async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<TaskPatch>,
) -> Result<Json<TaskResponse>, ApiError> {
    let updated = state
        .service()
        .update(id, patch)
        .await
        .map_err(|e| api_error(e, "Failed to update task"))?;

    Ok(Json(TaskResponse::from(updated)))
}

/// DELETE /api/tasks/:id - Delete a task
async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .service()
        .delete(id)
        .await
        .map_err(|e| api_error(e, "Failed to delete task"))?;

    Ok(Json(MessageResponse {
        message: "Task deleted successfully".to_string(),
    }))
}

/// GET /api/tasks/stats - Aggregate completion statistics
async fn task_stats(State(state): State<AppState>) -> Result<Json<TaskStats>, ApiError> {
    let stats = state
        .service()
        .stats()
        .await
        .map_err(|e| api_error(e, "Failed to fetch task statistics"))?;

    Ok(Json(stats))
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route("/api/tasks/stats", get(task_stats))
        .route("/api/tasks/{id}", put(update_task).delete(delete_task))
}
