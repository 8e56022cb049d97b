use thiserror::Error;

/// Errors that can occur while working with the task board.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The draft has no title. Raised before any request is made.
    #[error("Task title cannot be empty")]
    EmptyTitle,
    #[error("No task with ID {0} on the board")]
    UnknownTask(String),
    /// The request never produced a usable response.
    #[error("Request to the task store failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The task store answered with a non-success status.
    #[error("Task store responded with {status}: {message}")]
    Status {
        status: reqwest::StatusCode,
        message: String,
    },
    #[error("Invalid task store URL '{0}'")]
    InvalidApiUrl(String),
    #[error("Invalid client configuration: {0}")]
    Config(#[from] config::ConfigError),
}
