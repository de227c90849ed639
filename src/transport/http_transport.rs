use crate::client::FineTuneConfig;
use crate::errors::{FineTuneResult, NetworkError};
use crate::transport::{FileUploadPayload, HttpTransport, MultipartBuilder, ResponseParser};
use async_trait::async_trait;
use http::{HeaderMap, Method};
use reqwest::Client;
use serde_json::Value;
use url::Url;

/// HTTP transport implementation using reqwest.
pub struct ReqwestTransport {
    client: Client,
    base_url: Url,
}

impl ReqwestTransport {
    /// Creates a new ReqwestTransport from configuration.
    pub fn new(config: &FineTuneConfig) -> FineTuneResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| {
                crate::errors::FineTuneError::Network(NetworkError::ConnectionFailed(format!(
                    "Failed to build HTTP client: {}",
                    e
                )))
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Builds a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), path)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        headers: HeaderMap,
    ) -> FineTuneResult<Value> {
        let url = self.build_url(path);
        tracing::debug!(%method, %url, "sending request");

        let mut request = self.client.request(method, &url).headers(headers);

        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        ResponseParser::parse_response(response).await
    }

    async fn upload(
        &self,
        path: &str,
        payload: FileUploadPayload,
        headers: HeaderMap,
    ) -> FineTuneResult<Value> {
        let url = self.build_url(path);
        tracing::debug!(%url, filename = %payload.filename, "uploading file");

        let mut builder = MultipartBuilder::new().add_file("file", &payload.filename, payload.data)?;
        for (name, value) in &payload.fields {
            builder = builder.add_text(name, value);
        }
        let form = builder.build();

        let response = self
            .client
            .post(&url)
            .headers(headers)
            .multipart(form)
            .send()
            .await?;

        ResponseParser::parse_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url() {
        let config = FineTuneConfig::new("test-key");
        let transport = ReqwestTransport::new(&config).unwrap();

        assert_eq!(
            transport.build_url("/fine_tuning/jobs"),
            "https://api.openai.com/v1/fine_tuning/jobs"
        );

        assert_eq!(
            transport.build_url("fine_tuning/jobs"),
            "https://api.openai.com/v1/fine_tuning/jobs"
        );
    }
}
