use crate::auth::AuthManager;
use crate::errors::FineTuneResult;
use crate::services::files::{
    FileListResponse, FileObject, FileUploadRequest, FileUploadValidator,
};
use crate::transport::{FileUploadPayload, HttpTransport};
use async_trait::async_trait;
use http::{HeaderMap, Method};
use std::sync::Arc;

#[async_trait]
pub trait FileService: Send + Sync {
    async fn upload(&self, request: FileUploadRequest) -> FineTuneResult<FileObject>;
    async fn retrieve(&self, file_id: &str) -> FineTuneResult<FileObject>;
    async fn list(&self) -> FineTuneResult<FileListResponse>;
}

pub struct FileServiceImpl {
    transport: Arc<dyn HttpTransport>,
    auth: Arc<dyn AuthManager>,
}

impl FileServiceImpl {
    pub fn new(transport: Arc<dyn HttpTransport>, auth: Arc<dyn AuthManager>) -> Self {
        Self { transport, auth }
    }
}

#[async_trait]
impl FileService for FileServiceImpl {
    async fn upload(&self, request: FileUploadRequest) -> FineTuneResult<FileObject> {
        FileUploadValidator::validate(&request)?;

        let mut headers = HeaderMap::new();
        self.auth.apply_auth(&mut headers).await?;

        let payload = FileUploadPayload::new(request.data, request.filename)
            .with_field("purpose", request.purpose.to_string());

        let value = self.transport.upload("/files", payload, headers).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn retrieve(&self, file_id: &str) -> FineTuneResult<FileObject> {
        let mut headers = HeaderMap::new();
        self.auth.apply_auth(&mut headers).await?;

        let path = format!("/files/{}", file_id);
        let value = self
            .transport
            .request(Method::GET, &path, None, headers)
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn list(&self) -> FineTuneResult<FileListResponse> {
        let mut headers = HeaderMap::new();
        self.auth.apply_auth(&mut headers).await?;

        let value = self
            .transport
            .request(Method::GET, "/files", None, headers)
            .await?;
        Ok(serde_json::from_value(value)?)
    }
}
