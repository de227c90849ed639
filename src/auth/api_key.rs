use crate::auth::AuthManager;
use crate::errors::{AuthenticationError, ConfigurationError, FineTuneError, FineTuneResult};
use async_trait::async_trait;
use http::HeaderMap;
use secrecy::{ExposeSecret, SecretString};

/// Bearer-token authentication backed by a provider API key.
///
/// The key is held in a [`SecretString`] so it never shows up in Debug
/// output or logs.
pub struct ApiKeyAuth {
    api_key: SecretString,
}

impl ApiKeyAuth {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
        }
    }

    pub fn from_secret(api_key: SecretString) -> Self {
        Self { api_key }
    }
}

#[async_trait]
impl AuthManager for ApiKeyAuth {
    async fn apply_auth(&self, headers: &mut HeaderMap) -> FineTuneResult<()> {
        let api_key = self.api_key.expose_secret();

        if api_key.is_empty() {
            return Err(FineTuneError::Authentication(
                AuthenticationError::InvalidApiKey("API key is empty".to_string()),
            ));
        }

        let auth_value = format!("Bearer {}", api_key);
        headers.insert(
            "Authorization",
            auth_value.parse().map_err(|_| {
                FineTuneError::Authentication(AuthenticationError::InvalidApiKey(
                    "API key contains characters not valid in a header".to_string(),
                ))
            })?,
        );

        Ok(())
    }

    fn validate(&self) -> FineTuneResult<()> {
        if self.api_key.expose_secret().is_empty() {
            return Err(FineTuneError::Configuration(
                ConfigurationError::MissingApiKey("API key is empty".to_string()),
            ));
        }
        Ok(())
    }
}
