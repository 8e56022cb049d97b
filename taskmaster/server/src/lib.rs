pub mod config {
    use serde::Deserialize;

    #[derive(Deserialize, Debug, Clone)]
    pub struct Config {
        pub database_url: String,
        #[serde(default = "default_bind_address")]
        pub bind_address: String,
        #[serde(default = "default_port")]
        pub port: u16,
        /// The only origin allowed to call the API from a browser.
        #[serde(default = "default_client_origin")]
        pub client_origin: String,
    }

    impl Config {
        /// Loads configuration from an optional `taskmaster.toml`, overridden by environment variables.
        pub fn from_env() -> anyhow::Result<Self> {
            let settings = config::Config::builder()
                .add_source(config::File::with_name("taskmaster").required(false))
                .add_source(config::Environment::default())
                .build()?;

            Self::from_settings(settings)
        }

        pub fn from_settings(settings: config::Config) -> anyhow::Result<Self> {
            let config: Config = settings.try_deserialize()?;
            Ok(config)
        }

        pub fn listen_address(&self) -> String {
            format!("{}:{}", self.bind_address, self.port)
        }
    }

    fn default_bind_address() -> String {
        "0.0.0.0".to_string()
    }

    fn default_port() -> u16 {
        5002
    }

    fn default_client_origin() -> String {
        "http://localhost:3001".to_string()
    }

}
pub mod entities;
pub mod task;
pub mod web;
