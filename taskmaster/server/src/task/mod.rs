use crate::entities::*;
use sea_orm::*;
use std::sync::Arc;
use taskmaster_core::{NewTask, Task, TaskPatch, TaskValidationError};
use uuid::Uuid;

pub mod api;

pub use api::create_task_router;

#[derive(Clone, Debug)]
pub struct TaskState {
    pub db: Arc<sea_orm::DatabaseConnection>,
}

/// Error type for TaskService operations.
#[derive(Debug, thiserror::Error)]
pub enum TaskServiceError {
    /// The payload failed boundary validation.
    #[error("Invalid task: {0}")]
    InvalidTask(#[from] TaskValidationError),
    /// Represents a task not found error.
    #[error("Task with ID {0} not found")]
    TaskNotFound(String),
    /// Represents a database error.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

pub struct TaskService<'a> {
    db: &'a sea_orm::DatabaseConnection,
}

impl TaskService<'_> {
    pub fn new(db: &sea_orm::DatabaseConnection) -> TaskService<'_> {
        TaskService { db }
    }

    /// Creates a new task, assigning it a fresh identifier.
    ///
    /// # Arguments
    ///
    /// * `new_task` - The create payload. Omitted fields take their defaults.
    ///
    /// # Returns
    ///
    /// A `Result` containing the stored `Task` if successful, or an error otherwise.
    #[tracing::instrument(skip(self))]
    pub async fn create_task(&self, new_task: NewTask) -> Result<Task, TaskServiceError> {
        new_task.validate()?;

        let task = new_task.into_task(Uuid::new_v4().to_string());
        let created_model = task::ActiveModel::from(task).insert(self.db).await?;
        Ok(Task::from(created_model))
    }

    /// Retrieves all tasks. No ordering is guaranteed.
    #[tracing::instrument(skip(self))]
    pub async fn get_all_tasks(&self) -> Result<Vec<Task>, TaskServiceError> {
        let tasks = task::Entity::find()
            .all(self.db)
            .await?
            .into_iter()
            .map(Task::from)
            .collect();
        Ok(tasks)
    }

    /// Retrieves a task by its ID.
    #[tracing::instrument(skip(self))]
    pub async fn get_task_by_id(&self, id: &str) -> Result<Task, TaskServiceError> {
        let task_model = task::Entity::find_by_id(id.to_string())
            .one(self.db)
            .await?
            .ok_or_else(|| TaskServiceError::TaskNotFound(id.to_string()))?;
        Ok(Task::from(task_model))
    }

    /// Updates the fields present in `patch` on the task with the given ID.
    ///
    /// # Arguments
    ///
    /// * `id` - The ID of the task to update.
    /// * `patch` - The fields to replace. Absent fields are left as they are.
    ///
    /// # Returns
    ///
    /// A `Result` containing the updated `Task` if successful, or an error otherwise.
    #[tracing::instrument(skip(self))]
    pub async fn update_task(&self, id: &str, patch: TaskPatch) -> Result<Task, TaskServiceError> {
        let task_to_update = task::Entity::find_by_id(id.to_string())
            .one(self.db)
            .await?
            .ok_or_else(|| TaskServiceError::TaskNotFound(id.to_string()))?;

        patch.validate()?;

        if patch.is_empty() {
            return Ok(Task::from(task_to_update));
        }

        let mut active_model: task::ActiveModel = task_to_update.into();
        if let Some(title) = patch.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(description) = patch.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(priority) = patch.priority {
            active_model.priority = ActiveValue::Set(priority.into());
        }
        if let Some(deadline) = patch.deadline {
            active_model.deadline = ActiveValue::Set(deadline);
        }
        if let Some(completed) = patch.completed {
            active_model.completed = ActiveValue::Set(completed);
        }

        // The row can disappear between the lookup and the update.
        let updated_model = active_model.update(self.db).await.map_err(|err| match err {
            DbErr::RecordNotUpdated => TaskServiceError::TaskNotFound(id.to_string()),
            other => TaskServiceError::Database(other),
        })?;

        Ok(Task::from(updated_model))
    }

    /// Deletes a task by its ID.
    ///
    /// # Returns
    ///
    /// A `Result` containing `true` if a task was removed, `false` if none had that ID.
    #[tracing::instrument(skip(self))]
    pub async fn delete_task(&self, id: &str) -> Result<bool, TaskServiceError> {
        let result = task::Entity::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            tracing::debug!("No task with ID {} to delete", id);
        }
        Ok(result.rows_affected > 0)
    }
}
