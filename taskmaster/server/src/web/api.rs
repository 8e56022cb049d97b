use serde::{Deserialize, Serialize};
use taskmaster_core::{NewTask, Priority, Task, TaskPatch};
use utoipa::{OpenApi, ToSchema};

/// JSON response for API errors
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error code, e.g. `TASK_NOT_FOUND`
    pub error: String,
    /// Human-readable description
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}

/// JSON response confirming a deletion
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    pub message: String,
}

impl DeleteResponse {
    pub fn task_deleted() -> Self {
        Self {
            message: "Task deleted".to_string(),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::task::api::list_tasks_handler,
        crate::task::api::get_task_handler,
        crate::task::api::create_task_handler,
        crate::task::api::update_task_handler,
        crate::task::api::delete_task_handler
    ),
    components(schemas(
        Task,
        NewTask,
        TaskPatch,
        Priority,
        ErrorResponse,
        DeleteResponse
    )),
    tags((name = "Tasks", description = "Create, list, update and delete tasks"))
)]
pub struct ApiDoc;
