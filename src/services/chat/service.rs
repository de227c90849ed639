use crate::auth::AuthManager;
use crate::errors::FineTuneResult;
use crate::services::chat::{ChatCompletionRequest, ChatCompletionResponse, ChatRequestValidator};
use crate::transport::HttpTransport;
use async_trait::async_trait;
use http::{HeaderMap, Method};
use std::sync::Arc;

#[async_trait]
pub trait ChatService: Send + Sync {
    async fn create(&self, request: ChatCompletionRequest)
        -> FineTuneResult<ChatCompletionResponse>;
}

pub struct ChatServiceImpl {
    transport: Arc<dyn HttpTransport>,
    auth: Arc<dyn AuthManager>,
}

impl ChatServiceImpl {
    pub fn new(transport: Arc<dyn HttpTransport>, auth: Arc<dyn AuthManager>) -> Self {
        Self { transport, auth }
    }
}

#[async_trait]
impl ChatService for ChatServiceImpl {
    async fn create(
        &self,
        request: ChatCompletionRequest,
    ) -> FineTuneResult<ChatCompletionResponse> {
        ChatRequestValidator::validate(&request)?;

        let mut headers = HeaderMap::new();
        self.auth.apply_auth(&mut headers).await?;

        let body = serde_json::to_value(&request)?;
        let value = self
            .transport
            .request(Method::POST, "/chat/completions", Some(body), headers)
            .await?;
        Ok(serde_json::from_value(value)?)
    }
}
