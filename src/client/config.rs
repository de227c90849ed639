use crate::errors::{ConfigurationError, FineTuneError, FineTuneResult};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use url::Url;

/// Connection configuration for the fine-tuning provider.
#[derive(Debug, Clone)]
pub struct FineTuneConfig {
    pub api_key: SecretString,
    pub base_url: Url,
    pub timeout: Duration,
    pub user_agent: String,
}

impl FineTuneConfig {
    /// Creates a configuration with the given API key and default endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            base_url: default_base_url(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }

    /// Creates a configuration from environment variables.
    ///
    /// Reads:
    /// - OPENAI_API_KEY (required)
    /// - OPENAI_BASE_URL (optional, defaults to https://api.openai.com/v1)
    pub fn from_env() -> FineTuneResult<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            FineTuneError::Configuration(ConfigurationError::MissingApiKey(
                "OPENAI_API_KEY environment variable not found".to_string(),
            ))
        })?;

        let mut config = Self::new(api_key);

        if let Ok(base_url) = std::env::var("OPENAI_BASE_URL") {
            let url = Url::parse(&base_url).map_err(|e| {
                FineTuneError::Configuration(ConfigurationError::InvalidBaseUrl(format!(
                    "Invalid OPENAI_BASE_URL: {}",
                    e
                )))
            })?;
            config.base_url = url;
        }

        Ok(config)
    }

    pub fn validate(&self) -> FineTuneResult<()> {
        if self.api_key.expose_secret().is_empty() {
            return Err(FineTuneError::Configuration(
                ConfigurationError::MissingApiKey("API key is empty".to_string()),
            ));
        }

        if self.timeout.as_secs() == 0 {
            return Err(FineTuneError::Configuration(
                ConfigurationError::InvalidTimeout("Timeout must be greater than 0".to_string()),
            ));
        }

        Ok(())
    }

    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

fn default_base_url() -> Url {
    Url::parse("https://api.openai.com/v1").expect("default base URL is valid")
}

fn default_timeout() -> Duration {
    Duration::from_secs(60)
}

fn default_user_agent() -> String {
    format!("finetune-pipeline/{}", env!("CARGO_PKG_VERSION"))
}
