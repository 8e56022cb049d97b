use serde::Deserialize;

use crate::error::ClientError;

pub const DEFAULT_API_URL: &str = "http://localhost:5002";

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the task store, without the `/tasks` suffix.
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
        }
    }
}

impl ClientConfig {
    /// Loads configuration from `TASKMASTER_*` environment variables.
    pub fn from_env() -> Result<Self, ClientError> {
        let settings = config::Config::builder()
            .add_source(config::Environment::with_prefix("TASKMASTER"))
            .build()?;

        Self::from_settings(settings)
    }

    pub fn from_settings(settings: config::Config) -> Result<Self, ClientError> {
        Ok(settings.try_deserialize()?)
    }

    /// Replaces the API URL when one was given explicitly.
    pub fn with_api_url(mut self, api_url: Option<String>) -> Self {
        if let Some(api_url) = api_url {
            self.api_url = api_url;
        }
        self
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}
