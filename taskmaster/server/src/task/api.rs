use crate::task::{TaskService, TaskServiceError, TaskState};
use crate::web::api::{DeleteResponse, ErrorResponse};
use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use std::sync::Arc;
use taskmaster_core::{NewTask, Task, TaskPatch, TaskValidationError};

/// Error type for task handler operations.
#[derive(Debug, thiserror::Error)]
pub enum TaskApiError {
    /// The request body was not valid JSON for the expected payload.
    #[error("Malformed request body: {message}")]
    MalformedBody { status: StatusCode, message: String },
    /// The payload parsed but failed validation.
    #[error("Invalid task: {0}")]
    InvalidTask(#[from] TaskValidationError),
    #[error("Task with ID {0} not found")]
    TaskNotFound(String),
    /// Anything the caller cannot fix. Details are logged, not returned.
    #[error("Internal error")]
    Internal,
}

impl From<TaskServiceError> for TaskApiError {
    fn from(err: TaskServiceError) -> Self {
        match err {
            TaskServiceError::InvalidTask(validation) => TaskApiError::InvalidTask(validation),
            TaskServiceError::TaskNotFound(id) => TaskApiError::TaskNotFound(id),
            TaskServiceError::Database(db_err) => {
                tracing::error!("Task store database error: {}", db_err);
                TaskApiError::Internal
            }
        }
    }
}

impl From<JsonRejection> for TaskApiError {
    fn from(rejection: JsonRejection) -> Self {
        TaskApiError::MalformedBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for TaskApiError {
    fn into_response(self) -> Response {
        let (status_code, error, message) = match self {
            TaskApiError::MalformedBody { status, message } => {
                (status, "MALFORMED_BODY", message)
            }
            TaskApiError::InvalidTask(validation) => {
                (StatusCode::BAD_REQUEST, "INVALID_TASK", validation.to_string())
            }
            TaskApiError::TaskNotFound(id) => (
                StatusCode::NOT_FOUND,
                "TASK_NOT_FOUND",
                format!("Task with ID {} not found", id),
            ),
            TaskApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An unexpected error occurred while processing your request. Please try again later."
                    .to_string(),
            ),
        };

        (status_code, Json(ErrorResponse::new(error, message))).into_response()
    }
}

/// Handler for GET /tasks - Returns every task.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    get,
    path = "/tasks",
    responses(
        (status = 200, description = "All stored tasks", body = [Task]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Tasks"
)]
pub async fn list_tasks_handler(
    State(state): State<Arc<TaskState>>,
) -> Result<Json<Vec<Task>>, TaskApiError> {
    let service = TaskService::new(&state.db);
    let tasks = service.get_all_tasks().await?;
    Ok(Json(tasks))
}

/// Handler for GET /tasks/{id} - Returns a single task.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    get,
    path = "/tasks/{id}",
    params(("id" = String, Path, description = "Task identifier")),
    responses(
        (status = 200, description = "The task", body = Task),
        (status = 404, description = "No task has this identifier", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Tasks"
)]
pub async fn get_task_handler(
    State(state): State<Arc<TaskState>>,
    Path(id): Path<String>,
) -> Result<Json<Task>, TaskApiError> {
    let service = TaskService::new(&state.db);
    let task = service.get_task_by_id(&id).await?;
    Ok(Json(task))
}

/// Handler for POST /tasks - Creates a task and returns the stored record.
#[tracing::instrument(skip(state, payload))]
#[utoipa::path(
    post,
    path = "/tasks",
    request_body = NewTask,
    responses(
        (status = 200, description = "The created task", body = Task),
        (status = 400, description = "The title is missing or blank", body = ErrorResponse),
        (status = 422, description = "The body is not a valid task payload", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Tasks"
)]
pub async fn create_task_handler(
    State(state): State<Arc<TaskState>>,
    payload: Result<Json<NewTask>, JsonRejection>,
) -> Result<Json<Task>, TaskApiError> {
    let Json(new_task) = payload?;
    let service = TaskService::new(&state.db);
    let task = service.create_task(new_task).await?;
    tracing::info!("Created task {}", task.id);
    Ok(Json(task))
}

/// Handler for PUT /tasks/{id} - Replaces the fields present in the body.
#[tracing::instrument(skip(state, payload))]
#[utoipa::path(
    put,
    path = "/tasks/{id}",
    params(("id" = String, Path, description = "Task identifier")),
    request_body = TaskPatch,
    responses(
        (status = 200, description = "The updated task", body = Task),
        (status = 400, description = "The new title is blank", body = ErrorResponse),
        (status = 404, description = "No task has this identifier", body = ErrorResponse),
        (status = 422, description = "The body is not a valid task payload", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Tasks"
)]
pub async fn update_task_handler(
    State(state): State<Arc<TaskState>>,
    Path(id): Path<String>,
    payload: Result<Json<TaskPatch>, JsonRejection>,
) -> Result<Json<Task>, TaskApiError> {
    let Json(patch) = payload?;
    let service = TaskService::new(&state.db);
    let task = service.update_task(&id, patch).await?;
    Ok(Json(task))
}

/// Handler for DELETE /tasks/{id}.
///
/// Confirms the deletion whether or not the task existed.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    delete,
    path = "/tasks/{id}",
    params(("id" = String, Path, description = "Task identifier")),
    responses(
        (status = 200, description = "The task is gone", body = DeleteResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Tasks"
)]
pub async fn delete_task_handler(
    State(state): State<Arc<TaskState>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, TaskApiError> {
    let service = TaskService::new(&state.db);
    if service.delete_task(&id).await? {
        tracing::info!("Deleted task {}", id);
    }
    Ok(Json(DeleteResponse::task_deleted()))
}

/// Creates and returns the tasks API router.
pub fn create_task_router(state: Arc<TaskState>) -> Router {
    Router::new()
        .route("/tasks", get(list_tasks_handler).post(create_task_handler))
        .route(
            "/tasks/{id}",
            get(get_task_handler)
                .put(update_task_handler)
                .delete(delete_task_handler),
        )
        .with_state(state)
}
