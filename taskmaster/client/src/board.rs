use chrono::NaiveDate;
use taskmaster_core::{NewTask, Priority, Task, TaskFilter, TaskPatch, TaskStats};

use crate::api::TaskApi;
use crate::error::ClientError;

/// Client-side state: the tasks last returned by the store, the active filter
/// and the draft of the next task to create.
///
/// Every change goes through `&mut self`, so one mutation finishes before the next starts.
pub struct TaskBoard<A> {
    api: A,
    tasks: Vec<Task>,
    filter: TaskFilter,
    draft: NewTask,
}

impl<A: TaskApi> TaskBoard<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            tasks: Vec::new(),
            filter: TaskFilter::default(),
            draft: NewTask::default(),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn filter(&self) -> TaskFilter {
        self.filter
    }

    pub fn draft(&self) -> &NewTask {
        &self.draft
    }

    /// Replaces the local list with whatever the store holds now.
    #[tracing::instrument(skip(self))]
    pub async fn load(&mut self) -> Result<(), ClientError> {
        self.tasks = self.api.list_tasks().await?;
        tracing::debug!("Loaded {} tasks", self.tasks.len());
        Ok(())
    }

    /// Sends the draft to the store and appends the created task.
    ///
    /// A blank title is rejected without contacting the store. The draft is
    /// only cleared once the store has accepted it.
    #[tracing::instrument(skip(self))]
    pub async fn submit_draft(&mut self) -> Result<Task, ClientError> {
        if self.draft.validate().is_err() {
            return Err(ClientError::EmptyTitle);
        }

        let created = self.api.create_task(self.draft.clone()).await?;
        self.tasks.push(created.clone());
        self.draft = NewTask::default();
        Ok(created)
    }

    /// Flips `completed` on a task, sending the whole record back to the store.
    #[tracing::instrument(skip(self))]
    pub async fn toggle_complete(&mut self, id: &str) -> Result<Task, ClientError> {
        let patch = {
            let task = self
                .tasks
                .iter()
                .find(|task| task.id == id)
                .ok_or_else(|| ClientError::UnknownTask(id.to_string()))?;
            TaskPatch {
                completed: Some(!task.completed),
                ..TaskPatch::from(task.clone())
            }
        };

        let updated = self.api.update_task(id, patch).await?;
        if let Some(slot) = self.tasks.iter_mut().find(|task| task.id == id) {
            *slot = updated.clone();
        }
        Ok(updated)
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&mut self, id: &str) -> Result<(), ClientError> {
        self.api.delete_task(id).await?;
        self.tasks.retain(|task| task.id != id);
        Ok(())
    }

    pub fn set_filter(&mut self, filter: TaskFilter) {
        self.filter = filter;
    }

    /// Tasks matching the active filter, in list order.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.filter.apply(&self.tasks)
    }

    pub fn stats(&self) -> TaskStats {
        TaskStats::from_tasks(&self.tasks)
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = Some(description.into());
    }

    pub fn set_priority(&mut self, priority: Priority) {
        self.draft.priority = Some(priority);
    }

    pub fn set_deadline(&mut self, deadline: Option<NaiveDate>) {
        self.draft.deadline = deadline;
    }
}
