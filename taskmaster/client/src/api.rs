use async_trait::async_trait;
use reqwest::{Response, Url};
use serde::Deserialize;
use taskmaster_core::{NewTask, Task, TaskPatch};

use crate::error::ClientError;

/// The four operations the task store exposes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskApi {
    async fn list_tasks(&self) -> Result<Vec<Task>, ClientError>;

    async fn create_task(&self, new_task: NewTask) -> Result<Task, ClientError>;

    /// Sends `patch` for the task with the given ID and returns the stored result.
    async fn update_task(&self, id: &str, patch: TaskPatch) -> Result<Task, ClientError>;

    async fn delete_task(&self, id: &str) -> Result<(), ClientError>;
}

/// `TaskApi` over HTTP against a running task store.
#[derive(Debug, Clone)]
pub struct HttpTaskApi {
    client: reqwest::Client,
    base_url: Url,
}

/// Error body returned by the task store.
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl HttpTaskApi {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(base_url).map_err(|_| ClientError::InvalidApiUrl(base_url.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidApiUrl(base_url.to_string()));
        }

        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn tasks_url(&self) -> Result<Url, ClientError> {
        self.url_with_segments(&["tasks"])
    }

    /// Each id becomes a single percent-encoded path segment, so `/`, `?` and
    /// `#` inside it cannot address another resource.
    fn task_url(&self, id: &str) -> Result<Url, ClientError> {
        self.url_with_segments(&["tasks", id])
    }

    fn url_with_segments(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidApiUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Passes successful responses through and turns everything else into `ClientError::Status`.
async fn ensure_success(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("Unexpected response")
            .to_string(),
    };
    Err(ClientError::Status { status, message })
}

#[async_trait]
impl TaskApi for HttpTaskApi {
    #[tracing::instrument(skip(self))]
    async fn list_tasks(&self) -> Result<Vec<Task>, ClientError> {
        let response = self.client.get(self.tasks_url()?).send().await?;
        let tasks = ensure_success(response).await?.json().await?;
        Ok(tasks)
    }

    #[tracing::instrument(skip(self))]
    async fn create_task(&self, new_task: NewTask) -> Result<Task, ClientError> {
        let response = self
            .client
            .post(self.tasks_url()?)
            .json(&new_task)
            .send()
            .await?;
        let task = ensure_success(response).await?.json().await?;
        Ok(task)
    }

    #[tracing::instrument(skip(self))]
    async fn update_task(&self, id: &str, patch: TaskPatch) -> Result<Task, ClientError> {
        let response = self
            .client
            .put(self.task_url(id)?)
            .json(&patch)
            .send()
            .await?;
        let task = ensure_success(response).await?.json().await?;
        Ok(task)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_task(&self, id: &str) -> Result<(), ClientError> {
        let response = self.client.delete(self.task_url(id)?).send().await?;
        ensure_success(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_task_urls_from_base() {
        let api = HttpTaskApi::new("http://localhost:5002").unwrap();

        assert_eq!(api.tasks_url().unwrap().as_str(), "http://localhost:5002/tasks");
        assert_eq!(
            api.task_url("abc").unwrap().as_str(),
            "http://localhost:5002/tasks/abc"
        );
    }

    #[test]
    fn keeps_base_path_prefix() {
        let api = HttpTaskApi::new("http://localhost:5002/api/").unwrap();

        assert_eq!(
            api.task_url("abc").unwrap().as_str(),
            "http://localhost:5002/api/tasks/abc"
        );
    }

    #[test]
    fn encodes_reserved_characters_in_ids() {
        let api = HttpTaskApi::new("http://localhost:5002").unwrap();

        assert_eq!(
            api.task_url("a/b").unwrap().as_str(),
            "http://localhost:5002/tasks/a%2Fb"
        );
        assert_eq!(
            api.task_url("abc#x?y").unwrap().as_str(),
            "http://localhost:5002/tasks/abc%23x%3Fy"
        );
    }

    #[test]
    fn cannot_use_invalid_base_url() {
        assert!(matches!(
            HttpTaskApi::new("localhost:5002"),
            Err(ClientError::InvalidApiUrl(_))
        ));
        assert!(matches!(
            HttpTaskApi::new("not a url"),
            Err(ClientError::InvalidApiUrl(_))
        ));
    }
}
