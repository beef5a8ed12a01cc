use std::env;
use std::time::Duration;

use crate::infrastructure::providers::DEFAULT_TRANSLATE_API_URL;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub translate_api_url: String,
    pub translate_api_key: Option<String>,
    pub translate_timeout: Duration,
    pub auto_translate_concurrency: usize,
    pub service_name: String,
    pub metrics_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://template_studio.db?mode=rwc".to_string());

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let translate_api_url =
            env::var("TRANSLATE_API_URL").unwrap_or_else(|_| DEFAULT_TRANSLATE_API_URL.to_string());

        let translate_api_key = env::var("TRANSLATE_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let translate_timeout_secs: u64 = env::var("TRANSLATE_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidTimeout)?;
        if translate_timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }

        let auto_translate_concurrency: usize = env::var("AUTO_TRANSLATE_CONCURRENCY")
            .unwrap_or_else(|_| "4".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidConcurrency)?;
        if auto_translate_concurrency == 0 {
            return Err(ConfigError::InvalidConcurrency);
        }

        let service_name =
            env::var("SERVICE_NAME").unwrap_or_else(|_| "template-studio".to_string());

        let metrics_port = env::var("METRICS_PORT")
            .unwrap_or_else(|_| "9000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidMetricsPort)?;

        Ok(Config {
            database_url,
            server_host,
            server_port,
            translate_api_url,
            translate_api_key,
            translate_timeout: Duration::from_secs(translate_timeout_secs),
            auto_translate_concurrency,
            service_name,
            metrics_port,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid metrics port number")]
    InvalidMetricsPort,

    #[error("TRANSLATE_TIMEOUT_SECS must be a positive integer")]
    InvalidTimeout,

    #[error("AUTO_TRANSLATE_CONCURRENCY must be a positive integer")]
    InvalidConcurrency,
}
