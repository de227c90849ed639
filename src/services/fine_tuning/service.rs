use crate::auth::AuthManager;
use crate::errors::FineTuneResult;
use crate::services::fine_tuning::{
    FineTuningEventListResponse, FineTuningJob, FineTuningJobRequest, FineTuningRequestValidator,
};
use crate::transport::HttpTransport;
use async_trait::async_trait;
use http::{HeaderMap, Method};
use std::sync::Arc;

#[async_trait]
pub trait FineTuningService: Send + Sync {
    async fn create(&self, request: FineTuningJobRequest) -> FineTuneResult<FineTuningJob>;
    async fn retrieve(&self, job_id: &str) -> FineTuneResult<FineTuningJob>;
    async fn events(
        &self,
        job_id: &str,
        limit: Option<u32>,
        after: Option<&str>,
    ) -> FineTuneResult<FineTuningEventListResponse>;
}

pub struct FineTuningServiceImpl {
    transport: Arc<dyn HttpTransport>,
    auth: Arc<dyn AuthManager>,
}

impl FineTuningServiceImpl {
    pub fn new(transport: Arc<dyn HttpTransport>, auth: Arc<dyn AuthManager>) -> Self {
        Self { transport, auth }
    }
}

#[async_trait]
impl FineTuningService for FineTuningServiceImpl {
    async fn create(&self, request: FineTuningJobRequest) -> FineTuneResult<FineTuningJob> {
        FineTuningRequestValidator::validate(&request)?;

        let mut headers = HeaderMap::new();
        self.auth.apply_auth(&mut headers).await?;

        let body = serde_json::to_value(&request)?;
        let value = self
            .transport
            .request(Method::POST, "/fine_tuning/jobs", Some(body), headers)
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn retrieve(&self, job_id: &str) -> FineTuneResult<FineTuningJob> {
        let mut headers = HeaderMap::new();
        self.auth.apply_auth(&mut headers).await?;

        let path = format!("/fine_tuning/jobs/{}", job_id);
        let value = self
            .transport
            .request(Method::GET, &path, None, headers)
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn events(
        &self,
        job_id: &str,
        limit: Option<u32>,
        after: Option<&str>,
    ) -> FineTuneResult<FineTuningEventListResponse> {
        let mut headers = HeaderMap::new();
        self.auth.apply_auth(&mut headers).await?;

        let mut path = format!("/fine_tuning/jobs/{}/events", job_id);
        let mut params = vec![];
        if let Some(l) = limit {
            params.push(format!("limit={}", l));
        }
        if let Some(a) = after {
            params.push(format!("after={}", a));
        }
        if !params.is_empty() {
            path = format!("{}?{}", path, params.join("&"));
        }

        let value = self
            .transport
            .request(Method::GET, &path, None, headers)
            .await?;
        Ok(serde_json::from_value(value)?)
    }
}
