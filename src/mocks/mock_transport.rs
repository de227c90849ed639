use crate::auth::AuthManager;
use crate::errors::{AuthenticationError, FineTuneError, FineTuneResult};
use crate::transport::{FileUploadPayload, HttpTransport};
use async_trait::async_trait;
use http::{HeaderMap, Method};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Mock HTTP transport with queued responses and request recording.
#[derive(Clone)]
pub struct MockTransport {
    inner: Arc<Mutex<Inner>>,
}

struct Inner {
    responses: VecDeque<FineTuneResult<Value>>,
    upload_responses: VecDeque<FineTuneResult<Value>>,
    requests: Vec<RecordedRequest>,
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                responses: VecDeque::new(),
                upload_responses: VecDeque::new(),
                requests: Vec::new(),
            })),
        }
    }

    pub fn with_response(self, response: Value) -> Self {
        self.inner
            .lock()
            .unwrap()
            .responses
            .push_back(Ok(response));
        self
    }

    pub fn with_error(self, error: FineTuneError) -> Self {
        self.inner
            .lock()
            .unwrap()
            .responses
            .push_back(Err(error));
        self
    }

    pub fn with_upload_response(self, response: Value) -> Self {
        self.inner
            .lock()
            .unwrap()
            .upload_responses
            .push_back(Ok(response));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.inner.lock().unwrap().requests.len()
    }

    pub fn verify_request(&self, method: Method, path: &str) -> bool {
        self.inner
            .lock()
            .unwrap()
            .requests
            .iter()
            .any(|r| r.method == method && r.path == path)
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        _headers: HeaderMap,
    ) -> FineTuneResult<Value> {
        let mut inner = self.inner.lock().unwrap();
        inner.requests.push(RecordedRequest {
            method,
            path: path.to_string(),
            body,
        });

        inner
            .responses
            .pop_front()
            .unwrap_or_else(|| panic!("no mock response queued for {}", path))
    }

    async fn upload(
        &self,
        path: &str,
        payload: FileUploadPayload,
        _headers: HeaderMap,
    ) -> FineTuneResult<Value> {
        let mut inner = self.inner.lock().unwrap();
        inner.requests.push(RecordedRequest {
            method: Method::POST,
            path: path.to_string(),
            body: Some(serde_json::json!({
                "filename": payload.filename,
                "fields": payload.fields,
            })),
        });

        inner
            .upload_responses
            .pop_front()
            .unwrap_or_else(|| panic!("no mock upload response queued for {}", path))
    }
}

/// Mock auth manager that either stamps a fixed bearer header or fails.
pub struct MockAuthManager {
    error: Option<String>,
}

impl MockAuthManager {
    pub fn new() -> Self {
        Self { error: None }
    }

    pub fn with_error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
        }
    }
}

impl Default for MockAuthManager {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthManager for MockAuthManager {
    async fn apply_auth(&self, headers: &mut HeaderMap) -> FineTuneResult<()> {
        if let Some(message) = &self.error {
            return Err(FineTuneError::Authentication(
                AuthenticationError::InvalidApiKey(message.clone()),
            ));
        }

        headers.insert("Authorization", "Bearer test-api-key".parse().unwrap());
        Ok(())
    }

    fn validate(&self) -> FineTuneResult<()> {
        Ok(())
    }
}
