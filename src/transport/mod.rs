mod http_transport;
mod multipart;
mod response_parser;

pub use http_transport::ReqwestTransport;
pub use multipart::MultipartBuilder;
pub use response_parser::ResponseParser;

use crate::errors::FineTuneResult;
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method};
use serde_json::Value;

/// A single multipart file upload: the file bytes plus accompanying
/// form fields (e.g. `purpose`).
#[derive(Debug, Clone)]
pub struct FileUploadPayload {
    pub data: Bytes,
    pub filename: String,
    pub fields: Vec<(String, String)>,
}

impl FileUploadPayload {
    pub fn new(data: Bytes, filename: impl Into<String>) -> Self {
        Self {
            data,
            filename: filename.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }
}

/// HTTP seam between the services and the wire.
///
/// Bodies cross the seam as `serde_json::Value` so the trait stays object
/// safe; services serialize their typed requests before calling in and
/// deserialize the typed responses on the way out.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        headers: HeaderMap,
    ) -> FineTuneResult<Value>;

    async fn upload(
        &self,
        path: &str,
        payload: FileUploadPayload,
        headers: HeaderMap,
    ) -> FineTuneResult<Value>;
}
