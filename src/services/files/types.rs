use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A file stored with the provider.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FileObject {
    pub id: String,
    pub bytes: u64,
    pub created_at: i64,
    pub filename: String,
    pub purpose: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_details: Option<String>,
}

/// Purpose tag attached to an upload. The provider expects the hyphenated
/// `fine-tune` spelling on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilePurpose {
    #[serde(rename = "fine-tune")]
    FineTune,
    #[serde(rename = "fine-tune-results")]
    FineTuneResults,
}

impl fmt::Display for FilePurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FilePurpose::FineTune => "fine-tune",
            FilePurpose::FineTuneResults => "fine-tune-results",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone)]
pub struct FileUploadRequest {
    pub data: Bytes,
    pub filename: String,
    pub purpose: FilePurpose,
}

impl FileUploadRequest {
    pub fn new(data: Bytes, filename: impl Into<String>, purpose: FilePurpose) -> Self {
        Self {
            data,
            filename: filename.into(),
            purpose,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FileListResponse {
    pub data: Vec<FileObject>,
}
