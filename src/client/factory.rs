use crate::auth::{ApiKeyAuth, AuthManager};
use crate::client::{FineTuneClient, FineTuneClientImpl, FineTuneConfig};
use crate::errors::{ConfigurationError, FineTuneError, FineTuneResult};
use crate::transport::{HttpTransport, ReqwestTransport};
use std::sync::Arc;

pub struct FineTuneClientBuilder {
    config: Option<FineTuneConfig>,
    transport: Option<Arc<dyn HttpTransport>>,
    auth: Option<Arc<dyn AuthManager>>,
}

impl FineTuneClientBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            transport: None,
            auth: None,
        }
    }

    pub fn with_config(mut self, config: FineTuneConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config = Some(FineTuneConfig::new(api_key));
        self
    }

    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_auth_manager(mut self, auth: Arc<dyn AuthManager>) -> Self {
        self.auth = Some(auth);
        self
    }

    pub fn build(self) -> FineTuneResult<Arc<dyn FineTuneClient>> {
        let config = self.config.ok_or_else(|| {
            FineTuneError::Configuration(ConfigurationError::MissingApiKey(
                "API key must be provided".to_string(),
            ))
        })?;
        config.validate()?;

        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(&config)?),
        };

        let auth = self
            .auth
            .unwrap_or_else(|| Arc::new(ApiKeyAuth::from_secret(config.api_key.clone())));

        Ok(Arc::new(FineTuneClientImpl::new(transport, auth)))
    }
}

impl Default for FineTuneClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_config() {
        let result = FineTuneClientBuilder::new().build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_with_api_key() {
        let result = FineTuneClientBuilder::new()
            .with_api_key("test-api-key")
            .build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_builder_rejects_empty_api_key() {
        let result = FineTuneClientBuilder::new().with_api_key("").build();
        assert!(result.is_err());
    }
}
